use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use homedeck_core::{CommandId, LifecycleOutcome, PerCommand, ServiceCommand};
use tracing::debug;

/// Where a single issued command is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Counts in-flight requests per command. Never refuses a new one.
#[derive(Debug, Clone, Default)]
pub struct CommandTracker {
    in_flight: Arc<PerCommand<AtomicUsize>>,
}

impl CommandTracker {
    pub fn begin(&self, command: ServiceCommand) -> CommandTicket {
        self.in_flight.get(command).fetch_add(1, Ordering::SeqCst);
        let ticket = CommandTicket {
            id: uuid::Uuid::new_v4(),
            command,
            phase: CommandPhase::Pending,
            in_flight: self.in_flight.clone(),
        };
        debug!(command_id = %ticket.id, "{command}: idle -> pending");
        ticket
    }

    /// `Pending` while at least one request for `command` has not been reported yet.
    pub fn phase(&self, command: ServiceCommand) -> CommandPhase {
        if self.in_flight(command) > 0 {
            CommandPhase::Pending
        } else {
            CommandPhase::Idle
        }
    }

    pub fn in_flight(&self, command: ServiceCommand) -> usize {
        self.in_flight.get(command).load(Ordering::SeqCst)
    }
}

/// One issued command. Returns to `Idle` when dropped.
#[derive(Debug)]
pub struct CommandTicket {
    id: CommandId,
    command: ServiceCommand,
    phase: CommandPhase,
    in_flight: Arc<PerCommand<AtomicUsize>>,
}

impl CommandTicket {
    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn command(&self) -> ServiceCommand {
        self.command
    }

    pub fn phase(&self) -> CommandPhase {
        self.phase
    }

    pub(crate) fn settle(&mut self, outcome: &LifecycleOutcome) {
        let next = if outcome.is_success() {
            CommandPhase::Succeeded
        } else {
            CommandPhase::Failed
        };
        debug!(command_id = %self.id, "{}: {:?} -> {:?}", self.command, self.phase, next);
        self.phase = next;
    }
}

impl Drop for CommandTicket {
    fn drop(&mut self) {
        self.in_flight.get(self.command).fetch_sub(1, Ordering::SeqCst);
        debug!(command_id = %self.id, "{}: {:?} -> Idle", self.command, self.phase);
    }
}
