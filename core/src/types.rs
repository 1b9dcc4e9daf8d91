/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of rows on the board.
pub const BOARD_ROWS: Coord = 4;

/// Number of columns on the board.
pub const BOARD_COLS: Coord = 8;

/// Board dimensions as `(rows, cols)`.
pub const BOARD_SIZE: Coord2 = (BOARD_ROWS, BOARD_COLS);

/// Total number of cells, which is also the number of pieces dealt.
pub const TOTAL_CELLS: usize = BOARD_ROWS as usize * BOARD_COLS as usize;

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

pub const fn in_bounds((row, col): Coord2) -> bool {
    row < BOARD_ROWS && col < BOARD_COLS
}

const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: (isize, isize)) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    let next = (next_row, next_col);

    in_bounds(next).then_some(next)
}

/// Iterates the up to four orthogonal neighbors of a cell.
#[derive(Debug)]
pub struct OrthogonalIter {
    center: Coord2,
    index: u8,
}

impl OrthogonalIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for OrthogonalIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Iterates every board coordinate in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |col| (row, col)))
}
