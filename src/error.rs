use std::process::ExitStatus;

use thiserror::Error;

/// Exit status reported when the generator never started.
pub const NOT_STARTED_EXIT_CODE: i32 = 127;

/// The configure step did not complete successfully.
#[derive(Debug, Error)]
pub enum ProcessFailure {
    #[error("could not start `{command}`: generator not found on PATH")]
    NotFound {
        command: String,
        #[source]
        source: which::Error,
    },

    #[error("could not start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}")]
    Exited { command: String, status: ExitStatus },
}

impl ProcessFailure {
    pub fn command(&self) -> &str {
        match self {
            ProcessFailure::NotFound { command, .. }
            | ProcessFailure::Spawn { command, .. }
            | ProcessFailure::Exited { command, .. } => command,
        }
    }

    /// True when the child ran at all.
    pub fn is_started(&self) -> bool {
        matches!(self, ProcessFailure::Exited { .. })
    }

    /// Status the wrapping tool exits with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProcessFailure::NotFound { .. } | ProcessFailure::Spawn { .. } => NOT_STARTED_EXIT_CODE,
            ProcessFailure::Exited { status, .. } => status_code(status),
        }
    }
}

fn status_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
