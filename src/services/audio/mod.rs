/// Platform session bindings
pub mod backend;
/// Audio error types
pub mod error;
/// Pan position to channel level conversion
pub mod pan;
/// Session filtering
pub mod selection;
/// Audio session collaborator traits
pub mod session;
/// Volume level types
pub mod volume;

#[cfg(test)]
mod tests;

pub use error::*;
pub use pan::*;
pub use selection::*;
pub use session::*;
pub use volume::*;
