//! Application context - dependency injection container

use std::sync::Arc;

use roadquest_core::matching::AssetResolver;
use roadquest_core::recommendation::{RecommendationGateway, RecommendationService};
use roadquest_domain::{Config, Result, VEHICLE_IMAGE_CATALOG};
use roadquest_infra::QuizServiceClient;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub service: RecommendationService,
    pub assets: AssetResolver<'static>,
}

impl AppContext {
    /// Build the production context from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the service client cannot be built.
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let gateway = QuizServiceClient::new(&config.service)?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Build a context over an arbitrary gateway implementation.
    ///
    /// Used by tests to substitute a stub for the HTTP client.
    pub fn with_gateway(config: Config, gateway: Arc<dyn RecommendationGateway>) -> Arc<Self> {
        let assets = AssetResolver::new(VEHICLE_IMAGE_CATALOG, &config.assets);
        let service = RecommendationService::new(gateway);
        Arc::new(Self { config, service, assets })
    }
}
