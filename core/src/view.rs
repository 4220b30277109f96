//! Plain-text dumps of a game for debugging, meant for `log::debug!("{}", game.player_view())`.

use core::fmt;

use crate::*;

/// Every cell's true value: `*` for mines, the adjacent mine count otherwise.
#[derive(Copy, Clone, Debug)]
pub struct SolutionView<'a>(&'a Game);

/// What the player sees: `F` for flags, `-` for free cells, values for revealed ones.
#[derive(Copy, Clone, Debug)]
pub struct PlayerView<'a>(&'a Game);

impl Game {
    pub fn solution_view(&self) -> SolutionView<'_> {
        SolutionView(self)
    }

    pub fn player_view(&self) -> PlayerView<'_> {
        PlayerView(self)
    }
}

fn write_grid(
    f: &mut fmt::Formatter<'_>,
    game: &Game,
    mut symbol: impl FnMut(CellSnapshot, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    let width = game.width();
    for cell in game.cells() {
        let (_, col) = cell.position;
        if col > 0 {
            f.write_str(" ")?;
        }
        symbol(cell, f)?;
        if col + 1 == width {
            f.write_str("\n")?;
        }
    }
    Ok(())
}

impl fmt::Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "board: {} * {}", game.height(), game.width())?;
        writeln!(f, "mines: {}", game.mine_count())?;
        write_grid(f, game, |cell, f| write!(f, "{}", cell.value))
    }
}

impl fmt::Display for PlayerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "board: {} * {}", game.height(), game.width())?;
        writeln!(f, "remaining flags: {}", game.flags_remaining())?;
        write_grid(f, game, |cell, f| match cell.state {
            CellState::Free => f.write_str("-"),
            CellState::Flagged => f.write_str("F"),
            CellState::Revealed => write!(f, "{}", cell.value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn game() -> Game {
        Game::from_layout(MineLayout::from_mine_coords((2, 3), &[(0, 0)]).unwrap())
    }

    #[test]
    fn solution_view_shows_all_values() {
        assert_eq!(
            game().solution_view().to_string(),
            "board: 2 * 3\nmines: 1\n* 1 0\n1 1 0\n"
        );
    }

    #[test]
    fn player_view_hides_untouched_cells() {
        let mut game = game();
        game.reveal((1, 2));
        game.flag((0, 0));

        assert_eq!(
            game.player_view().to_string(),
            "board: 2 * 3\nremaining flags: 0\nF 1 0\n- 1 0\n"
        );
    }
}
