pub mod flow;
pub mod manager;
pub mod simulated;

pub use flow::{BookingFlowController, FlowError, FlowSnapshot};
pub use manager::{spawn_expiry_sweeper, FlowManager, SharedFlow};
pub use simulated::SimulatedSubmitter;
