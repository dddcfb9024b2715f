use std::fs;
use std::path::Path;

use anyhow::Context;
use minefield_core::{CellCount, Coord, GameConfig, SafeZone};

/// Explicit size and mine overrides from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Overrides {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Overrides {
    pub(crate) fn apply(self, config: &mut GameConfig) {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }
    }
}

pub(crate) fn parse_config(text: &str) -> anyhow::Result<GameConfig> {
    toml::from_str(text).context("invalid game config")
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// Final config for a round: base config, then overrides, then validation.
///
/// When the safe zone is only known after the first click, the mine count is checked against a full 3x3 opening.
pub(crate) fn finalize(
    mut config: GameConfig,
    overrides: Overrides,
    safe_first_click: bool,
) -> anyhow::Result<GameConfig> {
    overrides.apply(&mut config);

    let validation = if safe_first_click {
        let center = (config.rows / 2, config.cols / 2);
        let mut probe = config.clone();
        probe.safe_zone = SafeZone::Around(center);
        probe.validate()
    } else {
        config.validate()
    };
    validation.with_context(|| {
        format!(
            "cannot place {} mines on a {}x{} board",
            config.mines, config.rows, config.cols
        )
    })?;

    log::debug!("Game config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use minefield_core::{Difficulty, GameError};

    use super::*;

    #[test]
    fn parses_minimal_toml() {
        let config = parse_config("rows = 8\ncols = 12\nmines = 9\n").unwrap();
        assert_eq!(config, GameConfig::new((8, 12), 9, SafeZone::CenterBlock));
    }

    #[test]
    fn parses_explicit_safe_zones() {
        let config = parse_config("rows = 5\ncols = 5\nmines = 3\nsafe_zone = \"empty\"\n").unwrap();
        assert_eq!(config.safe_zone, SafeZone::Empty);

        let config = parse_config("rows = 5\ncols = 5\nmines = 3\nsafe_zone = { around = [1, 2] }\n").unwrap();
        assert_eq!(config.safe_zone, SafeZone::Around((1, 2)));

        let config =
            parse_config("rows = 5\ncols = 5\nmines = 3\nsafe_zone = { cells = [[0, 0], [4, 4]] }\n").unwrap();
        assert_eq!(config.safe_zone, SafeZone::Cells(vec![(0, 0), (4, 4)]));
    }

    #[test]
    fn rejects_unknown_safe_zone() {
        assert!(parse_config("rows = 5\ncols = 5\nmines = 3\nsafe_zone = \"corner\"\n").is_err());
    }

    #[test]
    fn overrides_replace_preset_values() {
        let overrides = Overrides {
            rows: Some(16),
            mines: Some(40),
            ..Default::default()
        };
        let config = finalize(Difficulty::Easy.config(), overrides, false).unwrap();

        assert_eq!(config.size(), (16, 10));
        assert_eq!(config.mines, 40);
    }

    #[test]
    fn invalid_config_is_reported() {
        let overrides = Overrides {
            mines: Some(96),
            ..Default::default()
        };
        let err = finalize(Difficulty::Easy.config(), overrides, false).unwrap_err();
        assert_eq!(err.root_cause().downcast_ref::<GameError>(), Some(&GameError::TooManyMines));
    }

    #[test]
    fn first_click_mode_reserves_a_full_opening() {
        let overrides = Overrides {
            mines: Some(91),
            ..Default::default()
        };
        assert!(finalize(Difficulty::Easy.config(), overrides, true).is_err());

        let overrides = Overrides {
            mines: Some(90),
            ..Default::default()
        };
        assert!(finalize(Difficulty::Easy.config(), overrides, true).is_ok());
    }
}
