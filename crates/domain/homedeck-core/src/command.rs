use std::fmt;

/// Correlates the log lines of one issued command.
pub type CommandId = uuid::Uuid;

/// Lifecycle commands the control API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCommand {
    Start,
    Stop,
    Restart,
}

impl ServiceCommand {
    pub const ALL: [ServiceCommand; 3] = [
        ServiceCommand::Start,
        ServiceCommand::Stop,
        ServiceCommand::Restart,
    ];

    /// Endpoint path segment.
    pub fn path(self) -> &'static str {
        match self {
            ServiceCommand::Start => "start",
            ServiceCommand::Stop => "stop",
            ServiceCommand::Restart => "restart",
        }
    }

    /// Fixed user-facing message for a failed command.
    pub fn failure_message(self) -> &'static str {
        match self {
            ServiceCommand::Start => "Failed to start service",
            ServiceCommand::Stop => "Failed to stop service",
            ServiceCommand::Restart => "Failed to restart service",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceCommand::Start => "Start",
            ServiceCommand::Stop => "Stop",
            ServiceCommand::Restart => "Restart",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ServiceCommand::Start => 0,
            ServiceCommand::Stop => 1,
            ServiceCommand::Restart => 2,
        }
    }
}

impl fmt::Display for ServiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Why a lifecycle command failed. Only logs see the difference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("request did not complete: {0}")]
    Network(String),
    #[error("control API answered {status}")]
    Server { status: u16 },
    #[error("unreadable success body: {0}")]
    Decode(String),
    #[error("invalid control endpoint: {0}")]
    Endpoint(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlErrorKind {
    Network,
    Server,
    Decode,
    Endpoint,
}

impl ControlError {
    pub fn kind(&self) -> ControlErrorKind {
        match self {
            ControlError::Network(_) => ControlErrorKind::Network,
            ControlError::Server { .. } => ControlErrorKind::Server,
            ControlError::Decode(_) => ControlErrorKind::Decode,
            ControlError::Endpoint(_) => ControlErrorKind::Endpoint,
        }
    }
}

/// Result of one issued command, consumed once by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOutcome {
    Success {
        command: ServiceCommand,
        status: String,
    },
    Failure {
        command: ServiceCommand,
        reason: ControlError,
    },
}

impl LifecycleOutcome {
    pub fn command(&self) -> ServiceCommand {
        match self {
            LifecycleOutcome::Success { command, .. } | LifecycleOutcome::Failure { command, .. } => {
                *command
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LifecycleOutcome::Success { .. })
    }

    /// Text shown to the user: the server status verbatim, or the fixed failure message.
    pub fn message(&self) -> &str {
        match self {
            LifecycleOutcome::Success { status, .. } => status,
            LifecycleOutcome::Failure { command, .. } => command.failure_message(),
        }
    }
}

/// Per-command slot storage indexed by [`ServiceCommand`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerCommand<T>([T; 3]);

impl<T> PerCommand<T> {
    pub fn get(&self, command: ServiceCommand) -> &T {
        &self.0[command.index()]
    }

    pub fn get_mut(&mut self, command: ServiceCommand) -> &mut T {
        &mut self.0[command.index()]
    }
}
