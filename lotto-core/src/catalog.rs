use crate::error::{LottoError, Result};
use crate::types::{GameDefinition, WinningDraw};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Read-only reference data: the playable games and the current winning draw
/// for each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCatalog {
    pub games: Vec<GameDefinition>,
    pub draws: Vec<WinningDraw>,
}

impl Default for GameCatalog {
    fn default() -> Self {
        let games = vec![
            GameDefinition::new("6-42", "6/42", 6, 42),
            GameDefinition::new("6-45", "6/45", 6, 45),
            GameDefinition::new("6-49", "6/49", 6, 49),
            GameDefinition::new("6-55", "6/55", 6, 55),
            GameDefinition::new("6-58", "6/58", 6, 58),
        ];

        let draws = vec![
            draw("6-42", "2025-09-29", [5, 12, 18, 23, 31, 38], "₱15,840,000.00"),
            draw("6-45", "2025-09-29", [8, 15, 22, 29, 36, 42], "₱28,500,000.00"),
            draw("6-49", "2025-09-28", [3, 11, 19, 27, 35, 44], "₱45,200,000.00"),
            draw("6-55", "2025-09-28", [7, 14, 21, 28, 42, 49], "₱62,800,000.00"),
            draw("6-58", "2025-09-27", [9, 16, 24, 32, 41, 55], "₱89,400,000.00"),
        ];

        Self { games, draws }
    }
}

fn draw(game_id: &str, date: &str, numbers: [u32; 6], jackpot: &str) -> WinningDraw {
    WinningDraw {
        game_id: game_id.to_string(),
        date: date.to_string(),
        numbers: numbers.to_vec(),
        jackpot: jackpot.to_string(),
    }
}

impl GameCatalog {
    pub fn new(games: Vec<GameDefinition>, draws: Vec<WinningDraw>) -> Self {
        Self { games, draws }
    }

    /// Load a catalog from a JSON file and validate it.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let catalog: Self = serde_json::from_str(&content)?;
        catalog.validate()?;

        tracing::debug!(
            "Loaded catalog with {} games from {}",
            catalog.games.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn game(&self, id: &str) -> Result<&GameDefinition> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| LottoError::unknown_game(id))
    }

    /// Current winning draw for a game, if one has been published.
    pub fn draw_for(&self, game_id: &str) -> Option<&WinningDraw> {
        self.draws.iter().find(|d| d.game_id == game_id)
    }

    pub fn validate(&self) -> Result<()> {
        if self.games.is_empty() {
            return Err(LottoError::config("Catalog must define at least one game"));
        }

        let mut ids = HashSet::new();
        for game in &self.games {
            game.validate()?;
            if !ids.insert(game.id.as_str()) {
                return Err(LottoError::config(format!(
                    "Game {} is defined more than once",
                    game.id
                )));
            }
        }

        let mut drawn = HashSet::new();
        for draw in &self.draws {
            let game = self.game(&draw.game_id).map_err(|_| {
                LottoError::config(format!("Draw references unknown game {}", draw.game_id))
            })?;
            draw.validate_for(game)?;

            if !drawn.insert(draw.game_id.as_str()) {
                return Err(LottoError::config(format!(
                    "Game {} has more than one active draw",
                    draw.game_id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = GameCatalog::default();
        catalog.validate().unwrap();
        assert_eq!(catalog.games.len(), 5);

        for game in &catalog.games {
            assert!(catalog.draw_for(&game.id).is_some());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = GameCatalog::default();
        assert_eq!(catalog.game("6-49").unwrap().range, 49);
        assert_eq!(
            catalog.draw_for("6-42").unwrap().numbers,
            vec![5, 12, 18, 23, 31, 38]
        );
        assert!(matches!(
            catalog.game("7-99"),
            Err(LottoError::UnknownGame { .. })
        ));
        assert!(catalog.draw_for("7-99").is_none());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut catalog = GameCatalog::default();
        catalog.games.push(GameDefinition::new("9-8", "9/8", 9, 8));
        assert!(catalog.validate().is_err());

        let mut catalog = GameCatalog::default();
        catalog.draws.push(draw("6-42", "2025-10-01", [1, 2, 3, 4, 5, 6], "₱1"));
        assert!(catalog.validate().is_err());

        let mut catalog = GameCatalog::default();
        catalog.draws.push(draw("5-35", "2025-10-01", [1, 2, 3, 4, 5, 6], "₱1"));
        assert!(catalog.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("catalog.json");

        let catalog = GameCatalog::new(
            vec![GameDefinition::new("6-42", "6/42", 6, 42)],
            vec![draw("6-42", "2025-09-29", [5, 12, 18, 23, 31, 38], "₱1")],
        );
        tokio::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap())
            .await
            .unwrap();

        let loaded = GameCatalog::from_json_file(&path).await.unwrap();
        assert_eq!(loaded, catalog);

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("numberCount"));
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("catalog.json");
        tokio::fs::write(&path, r#"{"games": [], "draws": []}"#)
            .await
            .unwrap();

        assert!(matches!(
            GameCatalog::from_json_file(&path).await,
            Err(LottoError::Config(_))
        ));
    }
}
