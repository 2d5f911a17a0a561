use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Report rendering error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// Errors caused by what the caller sent, as opposed to a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DashboardError::Validation(_) | DashboardError::Upload(_) | DashboardError::Csv(_)
        )
    }
}
