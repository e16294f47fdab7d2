use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a failed load from
/// invalid usage or a local application failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - records were loaded and rendered
    Success = 0,
    /// The records could not be loaded (the view ended in the error state)
    LoadFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, file I/O error, etc.)
    ApplicationError = 3,
    /// Interrupted with Ctrl-C before the load settled
    Interrupted = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LoadFailed => write!(f, "Load Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::Interrupted => write!(f, "Interrupted (130)"),
        }
    }
}

/// Normalized failure of a networked operation.
///
/// Every transport or server failure is collapsed into exactly one of
/// these categories before it leaves the data access layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Could not connect to the FBI server. Please check your internet connection.")]
    ConnectivityFailure,

    #[error("The requested resource was not found in the FBI API.")]
    NotFound,

    #[error("Too many requests. Please try again in a few moments.")]
    RateLimited,

    #[error("{}", upstream_message(.status, .detail))]
    UpstreamError {
        status: u16,
        detail: Option<String>,
    },

    #[error("The FBI service is temporarily unavailable.")]
    UpstreamUnavailable,

    #[error("Connection error: {detail}")]
    ClientSideFailure { detail: String },
}

fn upstream_message(status: &u16, detail: &Option<String>) -> String {
    match (*status, detail) {
        (500, _) => "Internal FBI server error. Please try again later.".to_string(),
        (_, Some(detail)) => format!("Server error: {} - {}", status, detail),
        (_, None) => format!("Server error: {}", status),
    }
}

impl FetchError {
    /// Classifies a non-success HTTP status
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FetchError::NotFound,
            429 => FetchError::RateLimited,
            503 => FetchError::UpstreamUnavailable,
            _ => FetchError::UpstreamError {
                status,
                detail: None,
            },
        }
    }

    /// Whether the failure happened before any request left the client
    pub fn is_client_side(&self) -> bool {
        matches!(self, FetchError::ClientSideFailure { .. })
    }
}

/// Application-specific errors outside the networked operations.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-friendly messages with a hint line.
#[derive(Debug, Error)]
pub enum WantedError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {field}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        field: String,
        reason: String,
        hint: String,
    },

    #[error("Unknown record: {uid}\n\n💡 Hint: Use a uid from the rendered list")]
    UnknownRecord { uid: String },

    #[error("Security violation: {target}\nReason: {reason}")]
    SecurityError { target: String, reason: String },
}
