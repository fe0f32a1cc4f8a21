//! The bishop's walk across the board.

use crate::{Direction, Move};
use core::iter::FusedIterator;

/// Width of the board in columns.
pub const WIDTH: usize = 17;

/// Height of the board in rows.
pub const HEIGHT: usize = 9;

/// Cell where every walk begins: the center of the board.
pub const START_POSITION: Position = Position::new(WIDTH / 2, HEIGHT / 2);

/// Cell on the board.
///
/// Coordinates grow to the right (`x`) and downwards (`y`).
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    /// Column, in `0..WIDTH`.
    pub x: usize,

    /// Row, in `0..HEIGHT`.
    pub y: usize,
}

impl Position {
    /// Create a new position, clamped to the board.
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            x: clamp(x, WIDTH),
            y: clamp(y, HEIGHT),
        }
    }

    /// Move one cell in the given direction.
    ///
    /// Each axis saturates at the edge of the board independently, so a
    /// bishop against a wall slides along it (or stays put in a corner).
    pub const fn step(self, direction: Direction) -> Self {
        let x = if direction.is_east() {
            self.x.saturating_add(1)
        } else {
            self.x.saturating_sub(1)
        };

        let y = if direction.is_south() {
            self.y.saturating_add(1)
        } else {
            self.y.saturating_sub(1)
        };

        Self::new(x, y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

const fn clamp(n: usize, len: usize) -> usize {
    let max = len.saturating_sub(1);
    if n > max { max } else { n }
}

type Field = [[u32; WIDTH]; HEIGHT];

/// Number of times the bishop has landed on each cell.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct VisitCounts {
    field: Field,
}

impl VisitCounts {
    /// Create an empty set of counts.
    pub const fn new() -> Self {
        Self {
            field: [[0; WIDTH]; HEIGHT],
        }
    }

    /// Get the visit count for a cell, zero when it has never been visited.
    pub fn get(&self, position: Position) -> u32 {
        self.field
            .get(position.y)
            .and_then(|row| row.get(position.x))
            .copied()
            .unwrap_or_default()
    }

    /// Record a visit to a cell, returning the new count.
    pub fn increment(&mut self, position: Position) -> u32 {
        let count = self.get(position).saturating_add(1);

        if let Some(cell) = self
            .field
            .get_mut(position.y)
            .and_then(|row| row.get_mut(position.x))
        {
            *cell = count;
        }

        count
    }

    /// Iterate over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32; WIDTH]> {
        self.field.iter()
    }

    /// Total number of recorded visits.
    pub fn total(&self) -> u64 {
        self.field
            .iter()
            .flatten()
            .fold(0u64, |acc, &n| acc.saturating_add(u64::from(n)))
    }
}

/// State of a walk after one of its moves.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    position: Position,
    visits: VisitCounts,
    is_final: bool,
}

impl Snapshot {
    /// Current position of the bishop.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Visit counts accumulated so far.
    pub fn visits(&self) -> &VisitCounts {
        &self.visits
    }

    /// Was this snapshot taken after the last move of the walk?
    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// Simulation of a single walk.
///
/// Starts at [`START_POSITION`] with no visits recorded; the start cell only
/// gains a count when the bishop lands on it again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Walk {
    position: Position,
    visits: VisitCounts,
}

impl Walk {
    /// Start a new walk.
    pub const fn new() -> Self {
        Self {
            position: START_POSITION,
            visits: VisitCounts::new(),
        }
    }

    /// Current position of the bishop.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Visit counts accumulated so far.
    pub fn visits(&self) -> &VisitCounts {
        &self.visits
    }

    /// Move the bishop and record the visit to the cell it lands on.
    pub fn apply(&mut self, direction: Direction) {
        self.position = self.position.step(direction);
        self.visits.increment(self.position);
    }

    /// Apply a decoded move and take a snapshot of the result.
    pub fn step(&mut self, m: Move) -> Snapshot {
        self.apply(m.direction);
        self.snapshot(m.is_final)
    }

    /// Take a snapshot of the current state.
    pub fn snapshot(&self, is_final: bool) -> Snapshot {
        Snapshot {
            position: self.position,
            visits: self.visits,
            is_final,
        }
    }
}

impl Default for Walk {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the snapshots of a walk, one per move.
#[derive(Clone, Debug)]
pub struct Snapshots<I> {
    walk: Walk,
    moves: I,
}

impl<I> Snapshots<I>
where
    I: Iterator<Item = Move>,
{
    /// Walk the given moves starting from a fresh [`Walk`].
    pub fn new(moves: I) -> Self {
        Self {
            walk: Walk::new(),
            moves,
        }
    }
}

impl<I> Iterator for Snapshots<I>
where
    I: Iterator<Item = Move>,
{
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let m = self.moves.next()?;
        Some(self.walk.step(m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

impl<I> ExactSizeIterator for Snapshots<I> where I: ExactSizeIterator<Item = Move> {}

impl<I> FusedIterator for Snapshots<I> where I: FusedIterator<Item = Move> {}
