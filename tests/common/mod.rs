//! Recording mixer used by the integration tests.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use appmixer::{
    cli::{Args, CliService},
    config::DefaultsConfig,
    mixer::{ApplyReport, Console},
    services::audio::{AudioError, AudioSession, SessionEnumerator, SessionInfo, SessionProcess},
};
use clap::Parser;

/// State-changing call received by a [`RecordingSession`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetMute(bool),
    SetMasterVolume(f32),
    SetChannelVolume(u32, f32),
}

#[derive(Debug)]
struct State {
    muted: Cell<bool>,
    volume: Cell<f32>,
    channels: RefCell<Vec<f32>>,
    calls: RefCell<Vec<Call>>,
    failing: Cell<Option<&'static str>>,
}

/// Session that records every state change; clones share state
#[derive(Debug, Clone)]
pub struct RecordingSession {
    info: SessionInfo,
    state: Rc<State>,
}

impl RecordingSession {
    pub fn new(name: &str, process: Option<(&str, u32)>, channels: usize) -> Self {
        let process = process.map(|(name, id)| SessionProcess {
            id,
            name: Some(name.to_string()),
        });
        Self {
            info: SessionInfo::new(name, process),
            state: Rc::new(State {
                muted: Cell::new(false),
                volume: Cell::new(1.0),
                channels: RefCell::new(vec![1.0; channels]),
                calls: RefCell::new(Vec::new()),
                failing: Cell::new(None),
            }),
        }
    }

    /// Makes the named setter fail from now on.
    pub fn fail_on(&self, operation: &'static str) {
        self.state.failing.set(Some(operation));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.borrow().clone()
    }

    pub fn levels(&self) -> Vec<f32> {
        self.state.channels.borrow().clone()
    }

    pub fn is_muted(&self) -> bool {
        self.state.muted.get()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), AudioError> {
        if self.state.failing.get() == Some(operation) {
            return Err(AudioError::operation(operation, "device unavailable"));
        }
        self.state.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl AudioSession for RecordingSession {
    fn info(&self) -> &SessionInfo {
        &self.info
    }

    fn mute(&self) -> Result<bool, AudioError> {
        Ok(self.state.muted.get())
    }

    fn set_mute(&self, muted: bool) -> Result<(), AudioError> {
        self.record("SetMute", Call::SetMute(muted))?;
        self.state.muted.set(muted);
        Ok(())
    }

    fn master_volume(&self) -> Result<f32, AudioError> {
        Ok(self.state.volume.get())
    }

    fn set_master_volume(&self, level: f32) -> Result<(), AudioError> {
        self.record("SetMasterVolume", Call::SetMasterVolume(level))?;
        self.state.volume.set(level);
        Ok(())
    }

    fn channel_count(&self) -> Result<u32, AudioError> {
        Ok(self.state.channels.borrow().len() as u32)
    }

    fn channel_volume(&self, channel: u32) -> Result<f32, AudioError> {
        self.state
            .channels
            .borrow()
            .get(channel as usize)
            .copied()
            .ok_or_else(|| AudioError::operation("GetChannelVolume", "no such channel"))
    }

    fn set_channel_volume(&self, channel: u32, level: f32) -> Result<(), AudioError> {
        self.record("SetChannelVolume", Call::SetChannelVolume(channel, level))?;
        if let Some(slot) = self.state.channels.borrow_mut().get_mut(channel as usize) {
            *slot = level;
        }
        Ok(())
    }
}

/// Mixer snapshot that counts how often it was enumerated
pub struct FakeMixer {
    sessions: Vec<RecordingSession>,
    enumerations: Cell<usize>,
    fail_with: Option<&'static str>,
}

impl FakeMixer {
    pub fn new(sessions: Vec<RecordingSession>) -> Self {
        Self {
            sessions,
            enumerations: Cell::new(0),
            fail_with: None,
        }
    }

    pub fn failing(reason: &'static str) -> Self {
        Self {
            fail_with: Some(reason),
            ..Self::new(Vec::new())
        }
    }

    pub fn enumerations(&self) -> usize {
        self.enumerations.get()
    }
}

impl SessionEnumerator for &FakeMixer {
    type Session = RecordingSession;

    fn sessions(&self) -> Result<Vec<RecordingSession>, AudioError> {
        self.enumerations.set(self.enumerations.get() + 1);
        match self.fail_with {
            Some(reason) => Err(AudioError::EnumerationFailed(reason.to_string())),
            None => Ok(self.sessions.clone()),
        }
    }
}

/// Captured result of one command line run
pub struct RunOutput {
    pub result: appmixer::Result<ApplyReport>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(mixer: &FakeMixer, argv: &[&str]) -> RunOutput {
    run_with_defaults(mixer, argv, DefaultsConfig::default())
}

pub fn run_with_defaults(mixer: &FakeMixer, argv: &[&str], defaults: DefaultsConfig) -> RunOutput {
    let args = Args::try_parse_from(std::iter::once("appmixer").chain(argv.iter().copied()))
        .unwrap_or_else(|e| panic!("bad test arguments {argv:?}: {e}"));
    let service = CliService::new(mixer, defaults);
    let mut console = Console::new(Vec::new(), Vec::new());
    let result = service.execute(&args, &mut console);
    let (out, err) = console.into_inner();

    RunOutput {
        result,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
