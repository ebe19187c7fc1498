use afcon_booking::FlowManager;
use afcon_core::catalog::CatalogClient;
use afcon_core::submission::BookingSubmitter;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub flows: Arc<RwLock<FlowManager>>,
    pub catalog: Arc<dyn CatalogClient>,
    pub submitter: Arc<dyn BookingSubmitter>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogClient>, submitter: Arc<dyn BookingSubmitter>) -> Self {
        Self {
            flows: Arc::new(RwLock::new(FlowManager::new())),
            catalog,
            submitter,
        }
    }
}
