/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord2 = (Coord, Coord);

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

/// Whether `coords` lies inside a board of dimensions `size`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Iterates every coordinate of a board, column by column.
pub fn iter_coords((size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    (0..size_x).flat_map(move |x| (0..size_y).map(move |y| (x, y)))
}

/// Moore neighborhood of a cell: the 3×3 window around it, clipped to the
/// board, without the cell itself. Yields row by row.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coord2,
    min: Coord2,
    max: Coord2,
    cursor: Option<Coord2>,
}

impl Neighbors {
    /// Empty when `center` lies outside a board of dimensions `size`.
    pub fn around(center: Coord2, size: Coord2) -> Self {
        let (x, y) = center;
        let min = (x.saturating_sub(1), y.saturating_sub(1));
        let max = (
            x.saturating_add(1).min(size.0.saturating_sub(1)),
            y.saturating_add(1).min(size.1.saturating_sub(1)),
        );
        let cursor = in_bounds(center, size).then_some(min);
        Self {
            center,
            min,
            max,
            cursor,
        }
    }

    fn step(&self, (x, y): Coord2) -> Option<Coord2> {
        if x < self.max.0 {
            Some((x + 1, y))
        } else if y < self.max.1 {
            Some((self.min.0, y + 1))
        } else {
            None
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = self.cursor {
            self.cursor = self.step(pos);
            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
