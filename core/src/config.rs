use serde::{Deserialize, Serialize};

use crate::*;

/// Everything needed to set up one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    #[serde(default)]
    pub safe_zone: SafeZone,
}

impl GameConfig {
    pub fn new((rows, cols): Coord2, mines: CellCount, safe_zone: SafeZone) -> Self {
        Self {
            rows,
            cols,
            mines,
            safe_zone,
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Checks that a board can be built from this config without building it.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.size())?;
        let safe_cells = self.safe_zone.resolve(self.size())?;
        validate_mine_count(self.total_cells(), safe_cells.len(), self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Classic presets, all on a 10x10 board with the centre block kept clear.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    pub const SIZE: Coord2 = (10, 10);

    pub const fn mines(self) -> CellCount {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
        }
    }

    pub fn config(self) -> GameConfig {
        GameConfig::new(Self::SIZE, self.mines(), SafeZone::CenterBlock)
    }
}

pub(crate) const fn validate_dimensions((rows, cols): Coord2) -> Result<()> {
    if rows == 0 || cols == 0 {
        Err(GameError::InvalidDimensions)
    } else {
        Ok(())
    }
}

/// At least one cell outside the safe zone must stay free of mines.
pub(crate) fn validate_mine_count(total_cells: CellCount, safe_cells: usize, mines: CellCount) -> Result<()> {
    let free_cells = usize::from(total_cells).saturating_sub(safe_cells);
    if usize::from(mines) < free_cells {
        Ok(())
    } else {
        Err(GameError::TooManyMines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let config = difficulty.config();
            assert_eq!(config.size(), (10, 10));
            assert_eq!(config.validate(), Ok(()));
        }
        assert_eq!(Difficulty::Hard.config().mines, 20);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let config = GameConfig::new((0, 5), 1, SafeZone::Empty);
        assert_eq!(config.validate(), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn mines_must_leave_a_free_cell() {
        let config = GameConfig::new((3, 3), 5, SafeZone::CenterBlock);
        assert_eq!(config.validate(), Err(GameError::TooManyMines));

        let config = GameConfig::new((3, 3), 4, SafeZone::CenterBlock);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn full_board_is_too_many_mines() {
        let config = GameConfig::new((1, 1), 1, SafeZone::Empty);
        assert_eq!(config.validate(), Err(GameError::TooManyMines));
    }
}
