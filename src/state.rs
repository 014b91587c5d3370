use std::sync::Arc;

use anyhow::Context;

use crate::catalog::Catalog;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("load catalog from {path}"))?,
            None => Catalog::embedded().context("load embedded catalog")?,
        };
        tracing::info!(meals = catalog.len(), "catalog ready");
        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }

    /// State over the embedded catalog, for handler tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let catalog = Catalog::embedded().expect("embedded catalog must parse");
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(AppConfig { catalog_path: None }),
        }
    }
}
