use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::store::SubmissionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SubmissionStore>,
    pub started_at: Instant,
}
