use std::path::PathBuf;
use thiserror::Error;

/// Address of the local analysis backend named in every user-facing failure.
pub const LOCAL_BACKEND_ADDR: &str = "127.0.0.1:8000";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with {status}: {detail}")]
    Server { status: u16, detail: String },

    #[error("Invalid analysis response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Analysis stopped unexpectedly")]
    WorkerStopped,
}

impl UploadError {
    /// Collapses any failure into the single message shown on the upload screen.
    pub fn user_message(&self) -> String {
        format!(
            "Error: {}. Check if backend ({}) is running.",
            self, LOCAL_BACKEND_ADDR
        )
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_carries_detail() {
        let err = UploadError::Server {
            status: 400,
            detail: "Unsupported file format".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Error: Server responded with 400: Unsupported file format. Check if backend (127.0.0.1:8000) is running."
        );
    }

    #[test]
    fn test_stopped_worker_message() {
        assert_eq!(
            UploadError::WorkerStopped.user_message(),
            "Error: Analysis stopped unexpectedly. Check if backend (127.0.0.1:8000) is running."
        );
    }

    #[test]
    fn test_io_error_names_the_file() {
        let err = UploadError::Io {
            path: PathBuf::from("statement.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.user_message();
        assert!(message.contains("statement.csv"));
        assert!(message.contains(LOCAL_BACKEND_ADDR));
    }
}
