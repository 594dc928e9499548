//! Engine configuration.
//!
//! Loaded from TOML; every field is optional and falls back to the defaults
//! below. `MINIMAX_CHESS_DEPTH` overrides the search depth.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chess_errors::{ChessError, ChessResult};
use crate::search::minimax::SearchConfig;

pub const DEPTH_ENV_VAR: &str = "MINIMAX_CHESS_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Plies searched per decision.
    pub depth: u8,
    /// Fixed seed for tie-breaking; OS entropy when absent.
    pub seed: Option<u64>,
    pub avoid_repetitions: bool,
    pub repetition_threshold: usize,
    /// Directory holding `pawn.txt` .. `king.txt`; embedded tables when absent.
    pub tables_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let search = SearchConfig::default();
        Self {
            depth: search.max_depth,
            seed: None,
            avoid_repetitions: search.avoid_repetitions,
            repetition_threshold: search.repetition_threshold,
            tables_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ChessError::Config(e.to_string()))?;
        config.validate()
    }

    pub fn from_path(path: &Path) -> ChessResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `MINIMAX_CHESS_DEPTH` when it is set.
    pub fn with_env_overrides(self) -> ChessResult<Self> {
        let depth = std::env::var(DEPTH_ENV_VAR).ok();
        self.with_depth_override(depth.as_deref())
    }

    pub fn with_depth_override(mut self, depth: Option<&str>) -> ChessResult<Self> {
        if let Some(raw) = depth {
            self.depth = raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ChessError::Config(format!("{DEPTH_ENV_VAR}='{raw}' is not a depth")))?;
        }
        self.validate()
    }

    pub fn validate(self) -> ChessResult<Self> {
        if self.depth == 0 {
            return Err(ChessError::Config("search depth must be at least 1".to_owned()));
        }
        if self.repetition_threshold == 0 {
            return Err(ChessError::Config("repetition threshold must be at least 1".to_owned()));
        }
        Ok(self)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            avoid_repetitions: self.avoid_repetitions,
            repetition_threshold: self.repetition_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::EngineConfig;
    use crate::chess_errors::ChessError;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.depth, 4);
        assert!(config.avoid_repetitions);
        assert_eq!(config.search_config().repetition_threshold, 2);
    }

    #[test]
    fn fields_are_read_from_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            depth = 2
            seed = 42
            avoid_repetitions = false
            tables_dir = "assets/tables"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.depth, 2);
        assert_eq!(config.seed, Some(42));
        assert!(!config.avoid_repetitions);
        assert_eq!(config.tables_dir, Some(PathBuf::from("assets/tables")));
    }

    #[test]
    fn zero_depth_and_unknown_keys_are_rejected() {
        assert!(matches!(EngineConfig::from_toml_str("depth = 0"), Err(ChessError::Config(_))));
        assert!(matches!(EngineConfig::from_toml_str("depht = 3"), Err(ChessError::Config(_))));
        assert!(matches!(EngineConfig::from_toml_str("depth = \"deep\""), Err(ChessError::Config(_))));
    }

    #[test]
    fn depth_override_replaces_configured_depth() {
        let config = EngineConfig::default().with_depth_override(Some("3")).expect("override");
        assert_eq!(config.depth, 3);
        let untouched = EngineConfig::default().with_depth_override(None).expect("no override");
        assert_eq!(untouched.depth, 4);
        assert!(matches!(
            EngineConfig::default().with_depth_override(Some("zero")),
            Err(ChessError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::default().with_depth_override(Some("0")),
            Err(ChessError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::from_path(std::path::Path::new("/nonexistent/minimax_chess.toml")).unwrap_err();
        assert!(matches!(err, ChessError::Io(_)));
    }
}
