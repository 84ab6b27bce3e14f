use serde::{Deserialize, Serialize};

/// Direction the chain can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit velocity (d_row, d_column) for this direction
    pub fn velocity(&self) -> Velocity {
        match self {
            Direction::Up => Velocity::new(-1, 0),
            Direction::Down => Velocity::new(1, 0),
            Direction::Left => Velocity::new(0, -1),
            Direction::Right => Velocity::new(0, 1),
        }
    }

    /// Whether this direction moves along the row axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Per-tick displacement of the head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub d_row: i32,
    pub d_column: i32,
}

impl Velocity {
    pub const STILL: Velocity = Velocity {
        d_row: 0,
        d_column: 0,
    };

    pub const fn new(d_row: i32, d_column: i32) -> Self {
        Self { d_row, d_column }
    }

    /// At most one axis set, and only by a unit step
    pub fn is_axis_aligned(&self) -> bool {
        matches!(
            (self.d_row, self.d_column),
            (0, 0) | (-1, 0) | (1, 0) | (0, -1) | (0, 1)
        )
    }

    /// Direction currently being travelled, if moving
    pub fn direction(&self) -> Option<Direction> {
        match (self.d_row, self.d_column) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Result of steering the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityChange {
    /// Velocity was replaced; the host should re-arm its tick clock
    Accepted(Velocity),
    /// Input rejected, velocity unchanged
    Ignored,
}

impl VelocityChange {
    pub fn is_accepted(&self) -> bool {
        matches!(self, VelocityChange::Accepted(_))
    }
}

/// Translate a steering intent against the current velocity.
///
/// A direction is accepted only when the velocity component on its own axis is
/// zero. Since velocity never has both components set, this rejects both an
/// instant reversal and a repeat of the direction already travelled.
pub fn translate(current: Velocity, direction: Direction) -> VelocityChange {
    let axis_component = if direction.is_vertical() {
        current.d_row
    } else {
        current.d_column
    };

    if axis_component == 0 {
        VelocityChange::Accepted(direction.velocity())
    } else {
        VelocityChange::Ignored
    }
}
