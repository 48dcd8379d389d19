mod dispatch;
mod repo;

pub use dispatch::{DispatchInputs, DispatchRequest, WorkflowDispatcher};
pub use repo::{Repository, detect_from_remote, resolve_repository};
