use std::collections::VecDeque;

use super::action::Velocity;
use super::grid::Cell;

/// Result of advancing the chain by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Tail cell released this tick, or `None` if pending growth kept it
    pub vacated: Option<Cell>,
}

impl Advance {
    pub fn grew(&self) -> bool {
        self.vacated.is_none()
    }
}

/// The player-controlled chain of cells, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    segments: VecDeque<Cell>,
    pending_growth: u32,
}

impl Chain {
    /// Create a single-segment chain
    pub fn new(head: Cell) -> Self {
        Self {
            segments: VecDeque::from([head]),
            pending_growth: 0,
        }
    }

    /// Build a chain from head-to-tail segments. Returns `None` when empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments,
            pending_growth: 0,
        })
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        // Chain always holds at least one segment.
        self.segments[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.segments.iter()
    }

    /// Segments behind the head
    pub fn body(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.segments.iter().skip(1)
    }

    /// Check if cell is covered by any segment
    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Check if cell collides with the body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body().any(|segment| *segment == cell)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub(crate) fn set_pending_growth(&mut self, pending: u32) {
        self.pending_growth = pending;
    }

    /// Queue one segment of growth
    pub fn queue_growth(&mut self) {
        self.pending_growth += 1;
    }

    /// Move the chain one step.
    ///
    /// Every segment takes its predecessor's cell and the head moves by
    /// `velocity`. Pushing the new head and dropping the tail is the same
    /// shift, so the cell the tail vacates is free for the head to enter.
    /// With growth pending the old tail stays and the counter drops by one.
    pub fn advance(&mut self, velocity: Velocity) -> Advance {
        let new_head = self.head().moved_with(velocity);
        self.segments.push_front(new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
            Advance { vacated: None }
        } else {
            Advance {
                vacated: self.segments.pop_back(),
            }
        }
    }

    /// Restore the tail released by `advance` if growth is now pending.
    ///
    /// Returns true if the chain grew.
    pub fn settle_growth(&mut self, advance: &Advance) -> bool {
        match advance.vacated {
            Some(tail) if self.pending_growth > 0 => {
                self.segments.push_back(tail);
                self.pending_growth -= 1;
                true
            }
            _ => false,
        }
    }
}
