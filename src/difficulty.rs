use crate::{GameError, Result};

/// Parameters for one round: a square grid, its mine count and the time
/// limit in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultySettings {
    pub name: String,
    pub grid_size: usize,
    pub mines_count: usize,
    pub time_limit: u32,
}

impl DifficultySettings {
    pub fn new(
        name: impl Into<String>,
        grid_size: usize,
        mines_count: usize,
        time_limit: u32,
    ) -> Self {
        Self {
            name: name.into(),
            grid_size,
            mines_count,
            time_limit,
        }
    }
}

/// Ordered set of presets plus the index of the selected one. The presets
/// themselves never change after construction.
#[derive(Debug, Clone)]
pub struct DifficultyCatalog {
    presets: Vec<DifficultySettings>,
    current: usize,
}

impl DifficultyCatalog {
    pub fn new() -> Self {
        Self {
            presets: vec![
                DifficultySettings::new("Easy", 10, 10, 600),
                DifficultySettings::new("Medium", 12, 20, 480),
                DifficultySettings::new("Hard", 15, 40, 360),
            ],
            current: 0,
        }
    }

    pub fn with_presets(presets: Vec<DifficultySettings>) -> Result<Self> {
        if presets.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self {
            presets,
            current: 0,
        })
    }

    pub fn set_difficulty(&mut self, index: usize) -> Result<()> {
        if index >= self.presets.len() {
            log::warn!(
                "rejected difficulty index {} ({} presets)",
                index,
                self.presets.len()
            );
            return Err(GameError::InvalidDifficulty {
                index,
                available: self.presets.len(),
            });
        }

        self.current = index;
        log::debug!("difficulty set to {}", self.presets[index].name);
        Ok(())
    }

    pub fn current_settings(&self) -> DifficultySettings {
        self.presets[self.current].clone()
    }

    pub fn difficulty_names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn difficulty_count(&self) -> usize {
        self.presets.len()
    }

    pub fn current_difficulty(&self) -> usize {
        self.current
    }
}

impl Default for DifficultyCatalog {
    fn default() -> Self {
        Self::new()
    }
}
