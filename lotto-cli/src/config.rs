use lotto_core::{GameCatalog, HistoryStore, SqliteSlots};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lotto"),
            catalog_path: None,
            verbose: false,
        }
    }
}

impl CliConfig {
    pub fn new(data_dir: Option<PathBuf>, catalog_path: Option<PathBuf>, verbose: bool) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: data_dir.unwrap_or(defaults.data_dir),
            catalog_path,
            verbose,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("lotto.db")
    }

    /// Catalog from `--catalog`, or the built-in reference games.
    pub async fn load_catalog(&self) -> lotto_core::Result<GameCatalog> {
        match &self.catalog_path {
            Some(path) => GameCatalog::from_json_file(path).await,
            None => {
                let catalog = GameCatalog::default();
                catalog.validate()?;
                Ok(catalog)
            }
        }
    }

    pub async fn open_history(&self) -> lotto_core::Result<HistoryStore<SqliteSlots>> {
        let slots = SqliteSlots::new(&self.db_path()).await?;
        Ok(HistoryStore::new(slots))
    }
}
