use crate::timer::format_time;
use crate::{
    DifficultyCatalog, GameStatus, MineField, Position, Result, RoundTimer, StatusTracker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Flag,
}

/// What a single [`Game::perform`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Round not active, or the click had no effect on the field.
    Ignored,
    Opened,
    FlagToggled,
    HitMine,
    Won,
}

/// Round controller. The difficulty catalog lives as long as the game;
/// field, timer and status tracker are rebuilt for every round.
#[derive(Debug)]
pub struct Game {
    catalog: DifficultyCatalog,
    field: MineField,
    timer: RoundTimer,
    tracker: StatusTracker,
}

impl Game {
    /// Starts a round with the catalog's current preset.
    pub fn new(catalog: DifficultyCatalog) -> Result<Self> {
        let (field, timer, tracker) = Self::new_round(&catalog)?;
        Ok(Self {
            catalog,
            field,
            timer,
            tracker,
        })
    }

    fn new_round(catalog: &DifficultyCatalog) -> Result<(MineField, RoundTimer, StatusTracker)> {
        let settings = catalog.current_settings();
        let field = MineField::new(settings.grid_size, settings.mines_count)?;

        let mut timer = RoundTimer::new(settings.time_limit);
        let mut tracker = StatusTracker::new();
        tracker.start_new_game();
        timer.start();

        log::debug!(
            "new {} round: {}x{}, {} mines, {}s",
            settings.name,
            settings.grid_size,
            settings.grid_size,
            settings.mines_count,
            settings.time_limit
        );
        Ok((field, timer, tracker))
    }

    /// Replaces the field, timer and tracker with fresh ones built from the
    /// current preset. On error the running round is left as it was.
    pub fn restart(&mut self) -> Result<()> {
        let (field, timer, tracker) = Self::new_round(&self.catalog)?;
        self.field = field;
        self.timer = timer;
        self.tracker = tracker;
        Ok(())
    }

    /// Selects a preset and starts a new round with it. Neither the
    /// selection nor the current round change unless the new round can be
    /// built.
    pub fn select_difficulty(&mut self, index: usize) -> Result<()> {
        let mut catalog = self.catalog.clone();
        catalog.set_difficulty(index)?;

        let (field, timer, tracker) = Self::new_round(&catalog)?;
        self.catalog = catalog;
        self.field = field;
        self.timer = timer;
        self.tracker = tracker;
        Ok(())
    }

    pub fn perform(&mut self, pos: Position, action: Action) -> ClickOutcome {
        if !self.tracker.is_game_active() {
            return ClickOutcome::Ignored;
        }

        match action {
            Action::Flag => self.flag(pos),
            Action::Open => self.open(pos),
        }
    }

    fn flag(&mut self, pos: Position) -> ClickOutcome {
        if !self.field.is_within_bounds(pos) || self.field.is_opened(pos) {
            return ClickOutcome::Ignored;
        }
        self.field.toggle_flag(pos);
        ClickOutcome::FlagToggled
    }

    fn open(&mut self, pos: Position) -> ClickOutcome {
        if !self.field.is_within_bounds(pos)
            || self.field.is_flagged(pos)
            || self.field.is_opened(pos)
        {
            return ClickOutcome::Ignored;
        }

        if !self.field.open_cell(pos) {
            self.tracker.process_cell_open(true);
            self.timer.stop();
            return ClickOutcome::HitMine;
        }

        self.tracker.process_cell_open(false);
        if self.field.check_win() {
            self.tracker.check_game_completion(true, false);
            self.timer.stop();
            return ClickOutcome::Won;
        }

        ClickOutcome::Opened
    }

    /// Advances the round by one timer tick and returns the resulting status.
    pub fn tick(&mut self) -> GameStatus {
        if !self.tracker.is_game_active() {
            return self.tracker.current_status();
        }

        self.timer.update();

        if self.field.check_win() {
            self.tracker.check_game_completion(true, false);
        } else if self.timer.is_time_up() {
            self.tracker.check_game_completion(false, true);
        }

        if !self.tracker.is_game_active() {
            self.timer.stop();
        }
        self.tracker.current_status()
    }

    pub fn status(&self) -> GameStatus {
        self.tracker.current_status()
    }

    pub fn field(&self) -> &MineField {
        &self.field
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    pub fn catalog(&self) -> &DifficultyCatalog {
        &self.catalog
    }

    pub fn time_display(&self) -> String {
        format_time(self.timer.time_left())
    }
}
