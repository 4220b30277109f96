use serde::{Deserialize, Serialize};

use crate::CellCount;

/// Aggregate counters of a running game.
///
/// Only the engine mutates these, always together with the cell change that caused it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub(crate) flags_remaining: CellCount,
    pub(crate) correctly_flagged: CellCount,
    pub(crate) exploded: bool,
}

impl Progress {
    pub(crate) const fn new(mine_count: CellCount) -> Self {
        Self {
            flags_remaining: mine_count,
            correctly_flagged: 0,
            exploded: false,
        }
    }

    /// Flags that can still be placed.
    pub const fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    /// Mines currently covered by a flag.
    pub const fn correctly_flagged(&self) -> CellCount {
        self.correctly_flagged
    }

    /// Whether a mine was ever revealed.
    pub const fn exploded(&self) -> bool {
        self.exploded
    }

    pub(crate) const fn completion(&self, mine_count: CellCount) -> Completion {
        if self.correctly_flagged == mine_count {
            Completion::SUCCESS
        } else if self.exploded {
            Completion::FAILURE
        } else {
            Completion::ONGOING
        }
    }
}

/// Result of the completion check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub done: bool,
    pub success: bool,
}

impl Completion {
    pub const ONGOING: Self = Self {
        done: false,
        success: false,
    };
    pub const SUCCESS: Self = Self {
        done: true,
        success: true,
    };
    pub const FAILURE: Self = Self {
        done: true,
        success: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_progress_is_ongoing() {
        let progress = Progress::new(3);

        assert_eq!(progress.flags_remaining(), 3);
        assert_eq!(progress.correctly_flagged(), 0);
        assert!(!progress.exploded());
        assert_eq!(progress.completion(3), Completion::ONGOING);
    }

    #[test]
    fn all_mines_flagged_wins_over_explosion() {
        let progress = Progress {
            flags_remaining: 0,
            correctly_flagged: 2,
            exploded: true,
        };

        assert_eq!(progress.completion(2), Completion::SUCCESS);
    }

    #[test]
    fn explosion_fails() {
        let progress = Progress {
            flags_remaining: 1,
            correctly_flagged: 1,
            exploded: true,
        };

        assert_eq!(progress.completion(2), Completion::FAILURE);
    }

    #[test]
    fn mine_free_board_is_already_won() {
        assert_eq!(Progress::new(0).completion(0), Completion::SUCCESS);
    }

    #[test]
    fn completion_serializes_as_flags() {
        assert_eq!(
            serde_json::to_string(&Completion::FAILURE).unwrap(),
            r#"{"done":true,"success":false}"#
        );
    }
}
