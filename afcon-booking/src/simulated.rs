use afcon_core::submission::{BookingSubmitter, SubmissionError, SubmissionReceipt};
use afcon_core::BookingRecord;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Stands in for the submission endpoint: waits, then accepts any
/// complete record.
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl BookingSubmitter for SimulatedSubmitter {
    async fn submit(&self, record: &BookingRecord) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;

        if !record.is_complete() {
            return Err(SubmissionError::Rejected(
                "booking record is incomplete".to_string(),
            ));
        }

        let reference = format!("AFCON-{}", Uuid::new_v4().simple())
            .chars()
            .take(14)
            .collect::<String>()
            .to_uppercase();
        info!(%reference, seats = ?record.ticket_number(), "Simulated submission accepted");

        Ok(SubmissionReceipt {
            reference,
            submitted_at: chrono::Utc::now(),
        })
    }
}
