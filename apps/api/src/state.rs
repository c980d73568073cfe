use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::prediction::classifier::CareerClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable classifier backend. Default: WeightedProfileClassifier.
    pub classifier: Arc<dyn CareerClassifier>,
}
