use crate::flow::{BookingFlowController, FlowError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

/// A flow shared between requests. The mutex serialises steps of the same
/// flow, including the await on submission.
pub type SharedFlow = Arc<Mutex<BookingFlowController>>;

/// Active booking flows, one per client session.
pub struct FlowManager {
    flows: HashMap<Uuid, SharedFlow>,
}

impl FlowManager {
    pub fn new() -> Self {
        Self {
            flows: HashMap::new(),
        }
    }

    /// Start a new flow with an empty record.
    pub fn start(&mut self) -> (Uuid, SharedFlow) {
        let flow = BookingFlowController::new();
        let id = flow.id();
        let shared = Arc::new(Mutex::new(flow));
        self.flows.insert(id, shared.clone());
        info!(flow_id = %id, "Booking flow started");
        (id, shared)
    }

    pub fn get(&self, flow_id: &Uuid) -> Result<SharedFlow, FlowError> {
        self.flows
            .get(flow_id)
            .cloned()
            .ok_or(FlowError::NotFound(*flow_id))
    }

    /// Drop a flow and its record, submitted or not.
    pub fn abandon(&mut self, flow_id: &Uuid) -> Result<SharedFlow, FlowError> {
        let flow = self
            .flows
            .remove(flow_id)
            .ok_or(FlowError::NotFound(*flow_id))?;
        info!(flow_id = %flow_id, "Booking flow discarded");
        Ok(flow)
    }

    /// Number of flows held, submitted ones included until discarded.
    pub fn active_count(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Drop flows idle for at least `ttl`. Returns how many were removed.
    pub fn cleanup_expired(&mut self, ttl: Duration) -> usize {
        self.cleanup_expired_at(Utc::now(), ttl)
    }

    /// Same as `cleanup_expired`, measured from `now`. A flow whose lock is
    /// held is serving a request and is kept.
    pub fn cleanup_expired_at(&mut self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let initial_count = self.flows.len();

        self.flows.retain(|id, flow| {
            let keep = match flow.try_lock() {
                Ok(flow) => {
                    let idle = (now - flow.last_activity()).to_std().unwrap_or_default();
                    if idle >= ttl {
                        debug!(flow_id = %id, submitted = flow.is_submitted(), "Booking flow expired");
                    }
                    idle < ttl
                }
                Err(_) => true,
            };
            keep
        });

        initial_count - self.flows.len()
    }
}

/// Sweep `manager` for idle flows every `every`, until the runtime stops.
pub fn spawn_expiry_sweeper(
    manager: Arc<RwLock<FlowManager>>,
    ttl: Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = manager.write().await.cleanup_expired(ttl);
            if removed > 0 {
                info!(removed, "Expired idle booking flows");
            }
        }
    })
}

impl Default for FlowManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::tests::valid_input;
    use afcon_core::Step;

    #[tokio::test]
    async fn test_flows_are_independent() {
        let mut manager = FlowManager::new();
        let (first, _) = manager.start();
        let (second, _) = manager.start();
        assert_ne!(first, second);

        let flow = manager.get(&first).unwrap();
        flow.lock()
            .await
            .advance(Step::SeatSelection, valid_input(Step::SeatSelection))
            .unwrap();

        let first_step = manager.get(&first).unwrap().lock().await.current_step();
        let second_step = manager.get(&second).unwrap().lock().await.current_step();
        assert_eq!(first_step, Step::VisaEligibility);
        assert_eq!(second_step, Step::SeatSelection);
        assert_eq!(manager.active_count(), 2);
    }

    #[tokio::test]
    async fn test_cleanup_removes_idle_flows_only() {
        let ttl = Duration::from_secs(30 * 60);
        let mut manager = FlowManager::new();
        let (idle, _) = manager.start();
        let (busy, _) = manager.start();

        // Nothing has been idle for half an hour yet
        assert_eq!(manager.cleanup_expired(ttl), 0);
        assert_eq!(manager.active_count(), 2);

        let later = Utc::now() + chrono::Duration::minutes(31);
        let busy_flow = manager.get(&busy).unwrap();
        let _guard = busy_flow.lock().await;

        assert_eq!(manager.cleanup_expired_at(later, ttl), 1);
        assert!(matches!(manager.get(&idle), Err(FlowError::NotFound(_))));
        assert!(manager.get(&busy).is_ok());
    }

    #[tokio::test]
    async fn test_activity_postpones_expiry() {
        let ttl = Duration::from_secs(30 * 60);
        let mut manager = FlowManager::new();
        let (id, flow) = manager.start();
        let started = flow.lock().await.last_activity();

        let _ = flow
            .lock()
            .await
            .advance(Step::SeatSelection, valid_input(Step::SeatSelection));
        let touched = flow.lock().await.last_activity();
        assert!(touched >= started);

        // Measured from the last step, not from the start
        let just_under = touched + chrono::Duration::minutes(29);
        assert_eq!(manager.cleanup_expired_at(just_under, ttl), 0);

        let past = touched + chrono::Duration::minutes(30);
        assert_eq!(manager.cleanup_expired_at(past, ttl), 1);
        assert!(manager.get(&id).is_err());
    }

    #[tokio::test]
    async fn test_sweeper_expires_flows_in_background() {
        let manager = Arc::new(RwLock::new(FlowManager::new()));
        manager.write().await.start();

        let sweeper = spawn_expiry_sweeper(manager.clone(), Duration::ZERO, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;
        sweeper.abort();

        assert!(manager.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_abandon_discards_record() {
        let mut manager = FlowManager::new();
        let (id, _) = manager.start();

        let flow = manager.abandon(&id).unwrap();
        assert_eq!(flow.lock().await.id(), id);
        assert!(manager.is_empty());
        assert!(matches!(manager.get(&id), Err(FlowError::NotFound(_))));
        assert!(matches!(manager.abandon(&id), Err(FlowError::NotFound(_))));
    }
}
