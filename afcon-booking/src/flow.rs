use afcon_core::submission::{BookingSubmitter, SubmissionError, SubmissionReceipt};
use afcon_core::{BookingRecord, Step, StepInput, ValidationError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Drives one user through the fixed purchase pipeline.
///
/// The controller owns the `BookingRecord`. A step's input is validated in
/// full before anything is written, so a rejected step leaves the record
/// exactly as it was. Once submitted the record is frozen.
#[derive(Debug, Clone)]
pub struct BookingFlowController {
    id: Uuid,
    current: Step,
    record: BookingRecord,
    receipt: Option<SubmissionReceipt>,
    started_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

/// Serializable view of a flow for the client.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub flow_id: Uuid,
    pub current_step: Step,
    pub step_number: usize,
    pub step_count: usize,
    pub record: BookingRecord,
    pub submitted: bool,
    pub receipt: Option<SubmissionReceipt>,
    pub started_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl BookingFlowController {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            current: Step::first(),
            record: BookingRecord::new(),
            receipt: None,
            started_at: now,
            last_activity: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn record(&self) -> &BookingRecord {
        &self.record
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Mark the flow as in use, rejected requests included.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Validate `input` for `step`, merge it and move on.
    ///
    /// Returns the step that comes next. On any error the record and the
    /// current step are unchanged.
    pub fn advance(&mut self, step: Step, input: StepInput) -> Result<Step, FlowError> {
        self.touch();
        if self.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }
        if step != self.current {
            return Err(FlowError::OutOfOrder {
                expected: self.current,
                got: step,
            });
        }
        if input.step() != step {
            return Err(FlowError::InputMismatch {
                step,
                input: input.step(),
            });
        }

        if let Err(e) = input.validate() {
            debug!(flow_id = %self.id, %step, fields = ?e.missing_fields(), "Step rejected");
            return Err(FlowError::Validation(e));
        }

        input.merge_into(&mut self.record);
        // Review is the last step with a form, so `next` is always Some here.
        let next = step.next().unwrap_or(Step::Submit);
        self.current = next;

        info!(flow_id = %self.id, from = %step, to = %next, "Booking flow advanced");
        Ok(next)
    }

    /// Hand the completed record to `submitter`.
    ///
    /// Only allowed once review has been confirmed. A failed submission
    /// leaves the flow at the submit step so the caller can retry.
    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
    ) -> Result<SubmissionReceipt, FlowError> {
        self.touch();
        if self.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }
        if self.current != Step::Submit {
            return Err(FlowError::Incomplete {
                current: self.current,
            });
        }

        match submitter.submit(&self.record).await {
            Ok(receipt) => {
                info!(flow_id = %self.id, reference = %receipt.reference, "Booking submitted");
                self.receipt = Some(receipt.clone());
                Ok(receipt)
            }
            Err(e) => {
                warn!(flow_id = %self.id, retryable = e.is_retryable(), "Booking submission failed: {}", e);
                Err(FlowError::Submission(e))
            }
        }
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            flow_id: self.id,
            current_step: self.current,
            step_number: self.current.position() + 1,
            step_count: Step::ALL.len(),
            record: self.record.clone(),
            submitted: self.is_submitted(),
            receipt: self.receipt.clone(),
            started_at: self.started_at,
            last_activity: self.last_activity,
        }
    }
}

impl Default for BookingFlowController {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Step {got} is out of order, the flow is at {expected}")]
    OutOfOrder { expected: Step, got: Step },

    #[error("Input for {input} cannot be used for step {step}")]
    InputMismatch { step: Step, input: Step },

    #[error("Booking is not ready for submission, the flow is at {current}")]
    Incomplete { current: Step },

    #[error("Booking has already been submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Booking flow not found: {0}")]
    NotFound(Uuid),
}
