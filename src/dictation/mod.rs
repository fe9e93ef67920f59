//! Dictation boundary
//!
//! Speech capture itself lives behind [`DictationBackend`]; this module owns
//! the channel plumbing between the editor and whichever backend is seated.
//! The editor sends [`DictationCommand`]s, the worker thread drives the
//! backend and emits [`DictationEvent`]s back onto the UI event queue, where
//! they are drained once per frame.

use crate::{FlexNotesError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Commands sent to the dictation worker
#[derive(Debug)]
pub enum DictationCommand {
    /// Request permission and start capturing
    Start,
    /// Stop capturing; the backend acknowledges with `Ended`
    Stop,
    /// Shut down the worker
    Shutdown,
}

/// Events sent from the dictation worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    /// A finished transcript segment
    Transcript(String),
    /// The capture session ended (requested or not); clears the editor's
    /// recording indicator
    Ended,
    /// The permission step was denied
    PermissionDenied,
    /// Capture failed
    Error(String),
    /// Worker has shut down
    Shutdown,
}

/// Outcome of the permission-request step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Seat for a speech capture engine.
///
/// Implementations run on the worker thread and push transcripts through the
/// supplied sender for as long as a session is open.
pub trait DictationBackend: Send + 'static {
    /// One-shot permission check before the first capture.
    fn request_permission(&mut self) -> Permission;

    /// Open a capture session; transcripts go to `events` as
    /// `DictationEvent::Transcript`.
    fn start(&mut self, events: Sender<DictationEvent>) -> Result<()>;

    /// Close the capture session. The worker emits `Ended` afterwards.
    fn stop(&mut self);
}

/// Backend used when no speech engine is wired in: grants permission,
/// produces no transcripts, and leaves the editor to manual typing.
#[derive(Debug, Default)]
pub struct NullBackend;

impl DictationBackend for NullBackend {
    fn request_permission(&mut self) -> Permission {
        Permission::Granted
    }

    fn start(&mut self, _events: Sender<DictationEvent>) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// Channel pair plus worker lifecycle for one dictation backend.
pub struct DictationPipeline {
    command_tx: Sender<DictationCommand>,
    command_rx: Receiver<DictationCommand>,
    event_tx: Sender<DictationEvent>,
    event_rx: Receiver<DictationEvent>,
    recording: Arc<Mutex<bool>>,
}

/// Cloneable handle held by the UI after the worker starts.
#[derive(Clone)]
pub struct DictationHandle {
    command_tx: Sender<DictationCommand>,
    event_rx: Receiver<DictationEvent>,
    recording: Arc<Mutex<bool>>,
}

impl DictationHandle {
    pub fn send(&self, command: DictationCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|e| FlexNotesError::ChannelError(e.to_string()))
    }

    pub fn try_recv_event(&self) -> Option<DictationEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn is_recording(&self) -> bool {
        *self.recording.lock()
    }
}

impl DictationPipeline {
    pub fn new() -> Self {
        let (command_tx, command_rx) = bounded(16);
        let (event_tx, event_rx) = bounded(64);

        Self {
            command_tx,
            command_rx,
            event_tx,
            event_rx,
            recording: Arc::new(Mutex::new(false)),
        }
    }

    pub fn handle(&self) -> DictationHandle {
        DictationHandle {
            command_tx: self.command_tx.clone(),
            event_rx: self.event_rx.clone(),
            recording: self.recording.clone(),
        }
    }

    /// Start the worker thread driving `backend`.
    ///
    /// Permission is requested once, on the first `Start`; a denial emits
    /// `PermissionDenied` and every later `Start` is refused the same way
    /// without re-prompting.
    pub fn start_worker(self, mut backend: impl DictationBackend) -> DictationHandle {
        let handle = self.handle();
        let command_rx = self.command_rx;
        let event_tx = self.event_tx;
        let recording = self.recording;

        std::thread::spawn(move || {
            info!("Dictation worker started");
            let mut permission: Option<Permission> = None;

            loop {
                match command_rx.recv() {
                    Ok(DictationCommand::Start) => {
                        let outcome = *permission
                            .get_or_insert_with(|| backend.request_permission());

                        if outcome == Permission::Denied {
                            debug!("Dictation start refused: permission denied");
                            let _ = event_tx.send(DictationEvent::PermissionDenied);
                            continue;
                        }

                        match backend.start(event_tx.clone()) {
                            Ok(()) => {
                                *recording.lock() = true;
                                debug!("Dictation capture started");
                            }
                            Err(e) => {
                                warn!("Dictation start failed: {}", e);
                                let _ = event_tx.send(DictationEvent::Error(e.to_string()));
                            }
                        }
                    }
                    Ok(DictationCommand::Stop) => {
                        if *recording.lock() {
                            backend.stop();
                            *recording.lock() = false;
                            debug!("Dictation capture stopped");
                            let _ = event_tx.send(DictationEvent::Ended);
                        }
                    }
                    Ok(DictationCommand::Shutdown) => {
                        info!("Dictation worker shutting down");
                        if *recording.lock() {
                            backend.stop();
                            *recording.lock() = false;
                        }
                        let _ = event_tx.send(DictationEvent::Shutdown);
                        break;
                    }
                    Err(e) => {
                        error!("Dictation command channel error: {}", e);
                        break;
                    }
                }
            }

            info!("Dictation worker stopped");
        });

        handle
    }
}

impl Default for DictationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a transcript segment to a body, separated by a single space when
/// the body is non-empty.
pub fn append_transcript(body: &mut String, transcript: &str) {
    if body.is_empty() {
        body.push_str(transcript);
    } else {
        body.push(' ');
        body.push_str(transcript);
    }
}
