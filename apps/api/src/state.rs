use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::assistant::gateway::ModelGateway;
use crate::config::{Config, GatewayConfig};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-mostly. Handlers take a snapshot `Arc`; re-initialize swaps it whole.
    gateway: Arc<RwLock<Arc<ModelGateway>>>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, gateway: ModelGateway) -> Self {
        Self {
            config,
            gateway: Arc::new(RwLock::new(Arc::new(gateway))),
            started_at: Instant::now(),
        }
    }

    /// Current gateway. In-flight requests keep the instance they started with.
    pub fn gateway(&self) -> Arc<ModelGateway> {
        let guard = self.gateway.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuilds the gateway from `config` and swaps it in.
    pub fn reinitialize_gateway(&self, config: GatewayConfig) {
        let fresh = Arc::new(ModelGateway::initialize(config));
        let mut guard = self.gateway.write().unwrap_or_else(|e| e.into_inner());
        *guard = fresh;
    }
}
