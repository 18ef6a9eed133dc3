use crate::types::Cell;

/// Moore-neighbourhood offsets in fixed order: NW, N, NE, W, E, SW, S, SE.
///
/// The order is part of the engine's observable behaviour: downstream
/// uniform index draws combine with it, so seeded runs only reproduce if
/// it stays fixed.
pub const MOORE_OFFSETS: [Cell; 8] = [
    Cell::new(-1, 1),
    Cell::new(0, 1),
    Cell::new(1, 1),
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(-1, -1),
    Cell::new(0, -1),
    Cell::new(1, -1),
];

/// Squared distance of `cell` from the origin, in `i64` to avoid overflow.
#[inline]
pub fn norm_sq(cell: Cell) -> i64 {
    let x = cell.x as i64;
    let y = cell.y as i64;
    x * x + y * y
}

/// Euclidean distance of `cell` from the origin.
#[inline]
pub fn distance_from_origin(cell: Cell) -> f32 {
    (norm_sq(cell) as f32).sqrt()
}

/// Returns the Moore neighbours of `cell` that lie strictly inside the
/// spawn circle by one lattice unit (`x² + y² ≤ radius² − 1`).
///
/// The result preserves the candidate order of [`MOORE_OFFSETS`] and may
/// be empty if every neighbour fails the filter; callers must handle
/// the empty case.
pub fn neighbours_within(radius: f32, cell: Cell) -> Vec<Cell> {
    let limit = radius * radius - 1.0;
    let mut out = Vec::with_capacity(8);
    for off in MOORE_OFFSETS {
        let q = cell + off;
        if (norm_sq(q) as f32) <= limit {
            out.push(q);
        }
    }
    out
}
