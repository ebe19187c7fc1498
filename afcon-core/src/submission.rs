use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::BookingRecord;

/// Proof that the terminal action accepted the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

impl SubmissionError {
    /// Network failures are worth retrying as-is; rejections need the
    /// record to change first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Network(_))
    }
}

/// The terminal action of the booking flow.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, record: &BookingRecord) -> Result<SubmissionReceipt, SubmissionError>;
}
