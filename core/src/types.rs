/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Coordinates as received from a caller, possibly negative or past the edge.
pub type SignedCoord2 = (i32, i32);

/// Largest accepted board height or width.
pub const MAX_DIMENSION: Coord = 300;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Narrows caller coordinates to a position inside a `size` board.
pub fn checked_coords((row, col): SignedCoord2, size: Coord2) -> Option<Coord2> {
    let row = Coord::try_from(row).ok()?;
    let col = Coord::try_from(col).ok()?;
    (row < size.0 && col < size.1).then_some((row, col))
}

/// In-bounds neighbours of `center` on a `size` board in row-major order, diagonals included.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (height, width) = size;
    let rows = row.saturating_sub(1)..=row.saturating_add(1).min(height.saturating_sub(1));
    let cols = col.saturating_sub(1)..=col.saturating_add(1).min(width.saturating_sub(1));

    rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}
