//! Platform bindings for the per-application mixer.
//!
//! Windows uses the WASAPI session interfaces. Every other platform gets a
//! backend whose enumeration fails with [`AudioError::Unsupported`], so
//! argument validation still behaves the same everywhere.
//!
//! [`AudioError::Unsupported`]: super::AudioError::Unsupported

#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod wasapi;

#[cfg(not(windows))]
pub use unsupported::UnsupportedBackend as SystemBackend;
#[cfg(windows)]
pub use wasapi::WasapiBackend as SystemBackend;
#[cfg(windows)]
pub use wasapi::WasapiSession;
