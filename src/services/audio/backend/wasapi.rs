//! WASAPI session binding.
//!
//! Sessions come from the default render endpoint. Each session exposes
//! `ISimpleAudioVolume` for mute and master volume and `IChannelAudioVolume`
//! for per-channel levels, both queried off the session control.

#![allow(unsafe_code)]

use std::{ffi::c_void, path::Path, ptr};

use tracing::{debug, instrument, warn};
use windows::{
    Win32::{
        Foundation::{CloseHandle, RPC_E_CHANGED_MODE},
        Media::Audio::{
            IAudioSessionControl, IAudioSessionControl2, IAudioSessionManager2,
            IChannelAudioVolume, IMMDeviceEnumerator, ISimpleAudioVolume, MMDeviceEnumerator,
            eMultimedia, eRender,
        },
        System::{
            Com::{
                CLSCTX_ALL, COINIT_MULTITHREADED, CoCreateInstance, CoInitializeEx,
                CoTaskMemFree, CoUninitialize,
            },
            Threading::{
                OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
                QueryFullProcessImageNameW,
            },
        },
    },
    core::{Interface, PWSTR},
};

use crate::services::audio::{
    AudioError, AudioSession, SessionEnumerator, SessionInfo, SessionProcess,
};

const MAX_IMAGE_PATH: usize = 1024;

/// Session enumerator over the default output device.
///
/// COM stays initialised for the lifetime of the backend, so sessions must
/// be dropped before it.
pub struct WasapiBackend {
    owns_com: bool,
}

impl WasapiBackend {
    /// Initialise COM for the calling thread.
    ///
    /// # Errors
    /// Returns error if COM initialisation fails
    pub fn new() -> Result<Self, AudioError> {
        let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
        if hr == RPC_E_CHANGED_MODE {
            debug!("COM already initialised in another apartment mode");
            return Ok(Self { owns_com: false });
        }
        hr.ok()
            .map_err(|e| AudioError::InitializationFailed(e.to_string()))?;
        Ok(Self { owns_com: true })
    }
}

impl Drop for WasapiBackend {
    fn drop(&mut self) {
        if self.owns_com {
            unsafe { CoUninitialize() };
        }
    }
}

impl SessionEnumerator for WasapiBackend {
    type Session = WasapiSession;

    #[instrument(skip(self))]
    fn sessions(&self) -> Result<Vec<WasapiSession>, AudioError> {
        let enumerate = |e: windows::core::Error| AudioError::EnumerationFailed(e.to_string());

        let controls = unsafe {
            let devices: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL).map_err(enumerate)?;
            let device = devices
                .GetDefaultAudioEndpoint(eRender, eMultimedia)
                .map_err(enumerate)?;
            let manager: IAudioSessionManager2 =
                device.Activate(CLSCTX_ALL, None).map_err(enumerate)?;
            let sessions = manager.GetSessionEnumerator().map_err(enumerate)?;
            let count = sessions.GetCount().map_err(enumerate)?;

            (0..count)
                .map(|i| sessions.GetSession(i).map_err(enumerate))
                .collect::<Result<Vec<IAudioSessionControl>, _>>()?
        };

        let sessions = controls
            .into_iter()
            .map(WasapiSession::from_control)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = sessions.len(), "enumerated audio sessions");
        Ok(sessions)
    }
}

/// One WASAPI audio session
pub struct WasapiSession {
    info: SessionInfo,
    simple_volume: ISimpleAudioVolume,
    channel_volume: IChannelAudioVolume,
}

impl WasapiSession {
    fn from_control(control: IAudioSessionControl) -> Result<Self, AudioError> {
        let enumerate = |e: windows::core::Error| AudioError::EnumerationFailed(e.to_string());

        let control2: IAudioSessionControl2 = control.cast().map_err(enumerate)?;
        let simple_volume: ISimpleAudioVolume = control.cast().map_err(enumerate)?;
        let channel_volume: IChannelAudioVolume = control.cast().map_err(enumerate)?;

        let display_name = unsafe { take_com_string(control.GetDisplayName().map_err(enumerate)?) };
        let pid = unsafe { control2.GetProcessId() }.map_err(enumerate)?;

        let process = (pid != 0).then(|| SessionProcess {
            id: pid,
            name: process_image_name(pid),
        });

        Ok(Self {
            info: SessionInfo::new(display_name, process),
            simple_volume,
            channel_volume,
        })
    }
}

/// Copies a COM-allocated string and frees it.
unsafe fn take_com_string(value: PWSTR) -> String {
    if value.is_null() {
        return String::new();
    }
    let text = unsafe { value.to_string() }.unwrap_or_default();
    unsafe { CoTaskMemFree(Some(value.0 as *const c_void)) };
    text
}

fn process_image_name(pid: u32) -> Option<String> {
    let handle = match unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) } {
        Ok(handle) => handle,
        Err(e) => {
            warn!(pid, error = %e, "cannot open process to read its name");
            return None;
        }
    };

    let mut buffer = [0u16; MAX_IMAGE_PATH];
    let mut len = buffer.len() as u32;
    let queried = unsafe {
        QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut len,
        )
    };
    if let Err(e) = unsafe { CloseHandle(handle) } {
        debug!(pid, error = %e, "cannot close process handle");
    }

    if let Err(e) = queried {
        warn!(pid, error = %e, "cannot query process image name");
        return None;
    }

    let path = String::from_utf16_lossy(&buffer[..len as usize]);
    Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

impl AudioSession for WasapiSession {
    fn info(&self) -> &SessionInfo {
        &self.info
    }

    fn mute(&self) -> Result<bool, AudioError> {
        unsafe { self.simple_volume.GetMute() }
            .map(|muted| muted.as_bool())
            .map_err(|e| AudioError::operation("GetMute", e))
    }

    fn set_mute(&self, muted: bool) -> Result<(), AudioError> {
        unsafe { self.simple_volume.SetMute(muted, ptr::null()) }
            .map_err(|e| AudioError::operation("SetMute", e))
    }

    fn master_volume(&self) -> Result<f32, AudioError> {
        unsafe { self.simple_volume.GetMasterVolume() }
            .map_err(|e| AudioError::operation("GetMasterVolume", e))
    }

    fn set_master_volume(&self, level: f32) -> Result<(), AudioError> {
        unsafe { self.simple_volume.SetMasterVolume(level, ptr::null()) }
            .map_err(|e| AudioError::operation("SetMasterVolume", e))
    }

    fn channel_count(&self) -> Result<u32, AudioError> {
        unsafe { self.channel_volume.GetChannelCount() }
            .map_err(|e| AudioError::operation("GetChannelCount", e))
    }

    fn channel_volume(&self, channel: u32) -> Result<f32, AudioError> {
        unsafe { self.channel_volume.GetChannelVolume(channel) }
            .map_err(|e| AudioError::operation("GetChannelVolume", e))
    }

    fn set_channel_volume(&self, channel: u32, level: f32) -> Result<(), AudioError> {
        unsafe {
            self.channel_volume
                .SetChannelVolume(channel, level, ptr::null())
        }
        .map_err(|e| AudioError::operation("SetChannelVolume", e))
    }
}
