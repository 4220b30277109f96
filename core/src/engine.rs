use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// One running game: the mine layout plus everything the player has done to it.
///
/// Cell values are never stored, they are derived from the layout whenever a snapshot is taken.
/// Actions never fail: anything that cannot apply (finished game, coordinates off the board,
/// revealed cell, empty flag budget) yields an empty change list and leaves the game untouched.
///
/// Serializable for inspection only; a game is always built from a validated [`MineLayout`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    mine_layout: MineLayout,
    board: Array2<CellState>,
    progress: Progress,
}

impl Game {
    /// Starts a game with mines placed by [`ShuffleLayoutGenerator`].
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, ShuffleLayoutGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl LayoutGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_layout(generator.generate(config)?))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let progress = Progress::new(mine_layout.mine_count());
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            progress,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.game_config()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.progress.flags_remaining
    }

    /// Whether a free cell could be flagged right now.
    pub fn can_flag(&self) -> bool {
        self.progress.flags_remaining > 0
    }

    pub fn completion(&self) -> Completion {
        self.progress.completion(self.mine_count())
    }

    pub fn is_finished(&self) -> bool {
        self.completion().done
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_layout.adjacent_mine_count(coords)
    }

    pub fn value(&self, coords: Coord2) -> CellValue {
        if self.is_mine(coords) {
            CellValue::Mine
        } else {
            CellValue::Count(self.adjacent_mine_count(coords))
        }
    }

    /// Free for cells that were never touched and for positions off the board.
    pub fn state(&self, coords: Coord2) -> CellState {
        self.board
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellSnapshot> {
        let (height, width) = self.size();
        (coords.0 < height && coords.1 < width).then(|| self.snapshot(coords))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellSnapshot> + '_ {
        let (height, width) = self.size();
        (0..height).flat_map(move |row| (0..width).map(move |col| self.snapshot((row, col))))
    }

    /// Toggles the flag on a free or flagged cell.
    ///
    /// Placing a flag spends one from the budget and fails silently once the budget is empty.
    pub fn flag(&mut self, coords: SignedCoord2) -> Vec<CellSnapshot> {
        use CellState::*;

        let Some(coords) = self.accept_action("flag", coords) else {
            return Vec::new();
        };
        let has_mine = self.mine_layout[coords];

        match self.board[coords.to_nd_index()] {
            Revealed => {
                log::debug!("Cannot flag revealed cell {coords:?}");
                return Vec::new();
            }
            Flagged => {
                self.board[coords.to_nd_index()] = Free;
                self.progress.flags_remaining += 1;
                if has_mine {
                    self.progress.correctly_flagged -= 1;
                }
            }
            Free => {
                if !self.can_flag() {
                    log::debug!("No flags left, ignoring flag at {coords:?}");
                    return Vec::new();
                }
                self.board[coords.to_nd_index()] = Flagged;
                self.progress.flags_remaining -= 1;
                if has_mine {
                    self.progress.correctly_flagged += 1;
                }
            }
        }

        vec![self.snapshot(coords)]
    }

    /// Reveals a free cell, opening the whole connected region when it has no adjacent mines.
    ///
    /// Returns every newly revealed cell exactly once, starting with `coords` and continuing
    /// breadth-first. Flagged cells stop the expansion and stay flagged.
    pub fn reveal(&mut self, coords: SignedCoord2) -> Vec<CellSnapshot> {
        let Some(coords) = self.accept_action("reveal", coords) else {
            return Vec::new();
        };

        let state = self.board[coords.to_nd_index()];
        if state != CellState::Free {
            log::debug!("Cannot reveal {state:?} cell {coords:?}");
            return Vec::new();
        }

        let mut revealed = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(coords);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.board[visit_coords.to_nd_index()] != CellState::Free {
                continue;
            }

            self.board[visit_coords.to_nd_index()] = CellState::Revealed;
            revealed.push(self.snapshot(visit_coords));

            if self.mine_layout[visit_coords] {
                log::debug!("Kaboom! Mine revealed at {visit_coords:?}");
                self.progress.exploded = true;
                continue;
            }

            if self.mine_layout.adjacent_mine_count(visit_coords) == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| visited.insert(pos)),
                );
            }
        }

        log::trace!("Reveal at {coords:?} opened {} cells", revealed.len());
        revealed
    }

    /// Opens the whole board and marks the game as won, whatever the flags say.
    ///
    /// Meant for debugging; revealed mines do not explode.
    pub fn reveal_all(&mut self) -> Vec<CellSnapshot> {
        self.board.fill(CellState::Revealed);
        self.progress.flags_remaining = 0;
        self.progress.correctly_flagged = self.mine_count();
        log::debug!("Revealed all {} cells", self.board.len());

        self.cells().collect()
    }

    fn snapshot(&self, coords: Coord2) -> CellSnapshot {
        CellSnapshot {
            position: coords,
            value: self.value(coords),
            state: self.state(coords),
        }
    }

    fn accept_action(&self, action: &str, coords: SignedCoord2) -> Option<Coord2> {
        if self.is_finished() {
            log::debug!("Game already done, ignoring {action} at {coords:?}");
            return None;
        }

        let checked = checked_coords(coords, self.size());
        if checked.is_none() {
            log::debug!("Cell out of bounds, ignoring {action} at {coords:?}");
        }
        checked
    }
}
