use serde::{Deserialize, Serialize};

/// Where the embedded payment page ended up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOutcome {
    Succeeded,
    Failed,
    Pending,
}

const SUCCESS_MARKERS: [&str; 2] = ["success", "payment_completed"];
const FAILURE_MARKERS: [&str; 2] = ["failure", "payment_failed"];

impl PaymentOutcome {
    /// Classify a URL the payment web view navigated to. Success markers win.
    pub fn from_url(url: &str) -> Self {
        if SUCCESS_MARKERS.iter().any(|m| url.contains(m)) {
            PaymentOutcome::Succeeded
        } else if FAILURE_MARKERS.iter().any(|m| url.contains(m)) {
            PaymentOutcome::Failed
        } else {
            PaymentOutcome::Pending
        }
    }

    pub fn is_final(self) -> bool {
        self != PaymentOutcome::Pending
    }
}
