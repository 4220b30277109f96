use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Player interaction with a cell.
///
/// Valid transitions are `Free <-> Flagged` and `Free -> Revealed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Free,
    Flagged,
    Revealed,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// What a cell holds: a mine, or the number of mines around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireValue", into = "WireValue")]
pub enum CellValue {
    Mine,
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mine => f.write_str("*"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// On the wire a value is either a bare integer or the string `"mine"`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireValue {
    Count(u8),
    Marker(MineMarker),
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
enum MineMarker {
    #[serde(rename = "mine")]
    Mine,
}

impl From<WireValue> for CellValue {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Count(count) => Self::Count(count),
            WireValue::Marker(MineMarker::Mine) => Self::Mine,
        }
    }
}

impl From<CellValue> for WireValue {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Mine => Self::Marker(MineMarker::Mine),
            CellValue::Count(count) => Self::Count(count),
        }
    }
}

/// Derived view of one cell, handed back to the caller after every change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub position: Coord2,
    pub value: CellValue,
    pub state: CellState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_count_as_integer() {
        let snapshot = CellSnapshot {
            position: (2, 1),
            value: CellValue::Count(3),
            state: CellState::Revealed,
        };

        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"position":[2,1],"value":3,"state":"revealed"}"#
        );
    }

    #[test]
    fn snapshot_serializes_mine_as_marker() {
        let snapshot = CellSnapshot {
            position: (0, 0),
            value: CellValue::Mine,
            state: CellState::Flagged,
        };

        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"position":[0,0],"value":"mine","state":"flagged"}"#
        );
    }

    #[test]
    fn snapshot_parses_wire_form() {
        let snapshot: CellSnapshot =
            serde_json::from_str(r#"{"position":[4,7],"value":"mine","state":"free"}"#).unwrap();

        assert_eq!(snapshot.position, (4, 7));
        assert_eq!(snapshot.value, CellValue::Mine);
        assert_eq!(snapshot.state, CellState::Free);

        let snapshot: CellSnapshot =
            serde_json::from_str(r#"{"position":[0,1],"value":8,"state":"revealed"}"#).unwrap();
        assert_eq!(snapshot.value, CellValue::Count(8));
    }

    #[test]
    fn default_state_is_free() {
        assert_eq!(CellState::default(), CellState::Free);
        assert!(!CellState::Free.is_revealed());
        assert!(CellState::Flagged.is_flagged());
    }
}
