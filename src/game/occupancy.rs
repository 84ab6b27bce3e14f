use std::collections::HashSet;

use super::chain::Chain;
use super::grid::Cell;

/// Read-only view answering which cells are taken
#[derive(Debug, Clone, Copy)]
pub struct Occupancy<'a> {
    chain: &'a Chain,
    items: &'a [Cell],
}

impl<'a> Occupancy<'a> {
    pub fn new(chain: &'a Chain, items: &'a [Cell]) -> Self {
        Self { chain, items }
    }

    pub fn is_occupied_by_chain(&self, cell: Cell) -> bool {
        self.chain.contains(cell)
    }

    pub fn is_occupied_by_item(&self, cell: Cell) -> bool {
        self.items.contains(&cell)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.is_occupied_by_chain(cell) || self.is_occupied_by_item(cell)
    }

    /// Number of distinct occupied cells
    pub fn occupied_count(&self) -> usize {
        self.chain
            .segments()
            .chain(self.items.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}
