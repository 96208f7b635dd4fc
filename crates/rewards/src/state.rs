use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    config::{Config, ConnectionManager},
    utils::Metrics,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(&config.database)
            .await
            .context("Failed to create database pool")?;

        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry);

        let di_container = DependenciesInject::new(pool, metrics);

        if let Some(seed_file) = &config.seed_file {
            let inserted = di_container
                .seed_service
                .seed_from_file(seed_file)
                .await
                .with_context(|| format!("Failed to seed from {}", seed_file.display()))?;

            info!("🌱 Seeded {inserted} transactions from {}", seed_file.display());
        }

        Ok(Self::from_parts(di_container, registry))
    }

    pub fn from_parts(di_container: DependenciesInject, registry: Registry) -> Self {
        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
