use crate::config::Config;
use crate::readiness::Readiness;
use crate::session::SessionRegistry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<SessionRegistry>>,
    pub readiness: Readiness,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(SessionRegistry::new(
                config.session_ttl,
                config.max_sessions,
            ))),
            readiness: Readiness::default(),
        }
    }
}
