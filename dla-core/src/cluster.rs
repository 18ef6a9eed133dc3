use crate::types::Cell;
use std::collections::HashSet;

/// The growing aggregate: an append-only, insertion-ordered sequence of
/// cells plus a hash index for O(1) membership during stick tests.
#[derive(Debug, Clone)]
pub struct Cluster {
    cells: Vec<Cell>,
    index: HashSet<Cell>,
}

impl Cluster {
    /// A cluster holding only the seed cell at the origin.
    pub fn seeded() -> Self {
        let seed = Cell::ZERO;
        let mut index = HashSet::new();
        index.insert(seed);
        Self {
            cells: vec![seed],
            index,
        }
    }

    /// Appends a stuck cell. Cells are never removed or moved afterwards.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
        self.index.insert(cell);
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index.contains(&cell)
    }

    /// Stick test: does any of `adj` coincide with a cluster cell?
    pub fn touches(&self, adj: &[Cell]) -> bool {
        adj.iter().any(|c| self.index.contains(c))
    }

    /// Cells in the order they stuck, starting with the seed.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
