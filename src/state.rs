use std::sync::Arc;

use crate::config::Config;
use crate::db::ReportStore;
use crate::rate_limit::SubmissionRateLimiter;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn ReportStore>,
    pub config: Config,
    pub submission_limiter: SubmissionRateLimiter,
}
