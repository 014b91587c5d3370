use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Optional path to a catalog JSON file replacing the embedded one.
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let catalog_path = std::env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty());
        Ok(Self { catalog_path })
    }
}
