//! UI-local application state: cursors and the name input buffer.
//!
//! Game truth lives in `game-core`'s `GameState`; nothing here feeds back
//! into the rules.

use game_core::GameConfig;

/// Direction for target-grid cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Vertical movement in the roster list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterDirection {
    Up,
    Down,
}

/// Mutable UI state for the current session.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Name being typed on the setup screen.
    pub name_input: String,
    /// Selected roster entry on the setup screen.
    pub roster_cursor: usize,
    /// Selected cell in the target grid (row-major over a 4x2 layout).
    pub grid_cursor: usize,
}

impl AppState {
    /// Longest name the input box accepts.
    pub const MAX_NAME_LEN: usize = 24;

    /// Columns in the target grid; eight targets over two rows.
    pub const GRID_COLS: usize = GameConfig::TARGET_COUNT / 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the name buffer, up to the length cap.
    pub fn push_char(&mut self, ch: char) {
        if self.name_input.chars().count() < Self::MAX_NAME_LEN {
            self.name_input.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        self.name_input.pop();
    }

    pub fn move_roster_cursor(&mut self, direction: RosterDirection, roster_len: usize) {
        if roster_len == 0 {
            self.roster_cursor = 0;
            return;
        }
        self.roster_cursor = match direction {
            RosterDirection::Up => self.roster_cursor.saturating_sub(1),
            RosterDirection::Down => (self.roster_cursor + 1).min(roster_len - 1),
        };
    }

    /// Keeps the roster cursor valid after a removal.
    pub fn clamp_roster_cursor(&mut self, roster_len: usize) {
        if roster_len == 0 {
            self.roster_cursor = 0;
        } else if self.roster_cursor >= roster_len {
            self.roster_cursor = roster_len - 1;
        }
    }

    /// Moves in the 4-wide, 2-row target grid, wrapping at the edges.
    pub fn move_grid_cursor(&mut self, direction: GridDirection) {
        let cols = Self::GRID_COLS;
        let col = self.grid_cursor % cols;
        let row = self.grid_cursor / cols;
        let (col, row) = match direction {
            GridDirection::Left => ((col + cols - 1) % cols, row),
            GridDirection::Right => ((col + 1) % cols, row),
            GridDirection::Up | GridDirection::Down => (col, 1 - row),
        };
        self.grid_cursor = row * cols + col;
    }

    /// Clears per-game UI state when a game starts or resets.
    pub fn reset_cursors(&mut self) {
        self.name_input.clear();
        self.roster_cursor = 0;
        self.grid_cursor = 0;
    }
}
