use std::sync::mpsc::{Receiver, Sender, channel};

use glam::{DQuat, DVec3};

use crate::core::geometry::Ray;
use crate::error::Result;
use crate::trackball::Trackball;

/// Pointer input, already unprojected into world-space rays.
#[derive(Debug, Clone)]
pub enum DragCommand {
    Press(Ray),
    Move(Ray),
    Release,
    Reset,
}

/// What applying a [`DragCommand`] did to the trackball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// A drag was anchored at this sphere point.
    Grabbed(DVec3),
    Rotated(DQuat),
    /// The drag ended with this committed orientation.
    Released(DQuat),
    /// The ray did not touch the sphere; nothing changed.
    Missed,
    Reset,
}

/// Receiving end of the pointer channel, drained by the thread that owns
/// the trackball.
pub struct CommandQueue {
    receiver: Receiver<DragCommand>,
}

/// Cloneable handle an input thread uses to post drag commands.
/// Sends after the controller is dropped are discarded.
#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<DragCommand>,
}

impl CommandQueue {
    pub fn new() -> (Self, CommandSender) {
        let (sender, receiver) = channel();
        (Self { receiver }, CommandSender { sender })
    }

    pub fn try_recv(&self) -> Option<DragCommand> {
        self.receiver.try_recv().ok()
    }
}

impl CommandSender {
    pub fn send(&self, cmd: DragCommand) {
        let _ = self.sender.send(cmd);
    }
}

/// Owns a trackball and feeds it pointer rays.
///
/// Both press and move anchor on the near crossing of the ray.
pub struct DragController {
    trackball: Trackball,
    queue: CommandQueue,
}

impl DragController {
    pub fn new(trackball: Trackball) -> (Self, CommandSender) {
        let (queue, sender) = CommandQueue::new();
        (Self { trackball, queue }, sender)
    }

    pub fn trackball(&self) -> &Trackball {
        &self.trackball
    }

    pub fn into_trackball(self) -> Trackball {
        self.trackball
    }

    pub fn apply(&mut self, cmd: DragCommand) -> Result<ControlEvent> {
        match cmd {
            DragCommand::Press(ray) => {
                let Some(anchor) = self.trackball.intersect(&ray).near() else {
                    return Ok(ControlEvent::Missed);
                };
                self.trackball.play(anchor)?;
                Ok(ControlEvent::Grabbed(anchor))
            }
            DragCommand::Move(ray) => {
                let Some(point) = self.trackball.intersect(&ray).near() else {
                    return Ok(ControlEvent::Missed);
                };
                let rotation = self.trackball.track(point)?;
                Ok(ControlEvent::Rotated(rotation))
            }
            DragCommand::Release => {
                let orientation = self.trackball.pause()?;
                Ok(ControlEvent::Released(orientation))
            }
            DragCommand::Reset => {
                self.trackball.reset();
                Ok(ControlEvent::Reset)
            }
        }
    }

    /// Applies every queued command in order.
    /// Returns how many were accepted, misses included; rejected commands
    /// are logged and skipped.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Some(cmd) = self.queue.try_recv() {
            match self.apply(cmd.clone()) {
                Ok(event) => {
                    tracing::trace!(target: "control", ?event, "command applied");
                    applied += 1;
                }
                Err(err) => {
                    tracing::warn!(target: "control", %err, command = ?cmd, "command rejected");
                }
            }
        }
        applied
    }

    /// Like [`drain`](Self::drain), but hands every outcome to `on_event`.
    pub fn drain_with(&mut self, mut on_event: impl FnMut(&DragCommand, &Result<ControlEvent>)) {
        while let Some(cmd) = self.queue.try_recv() {
            let outcome = self.apply(cmd.clone());
            on_event(&cmd, &outcome);
        }
    }
}
