//! Support for the "drunken bishop" fingerprint algorithm, a.k.a. "randomart".
//!
//! The algorithm is described in the paper:
//!
//! "The drunken bishop: An analysis of the OpenSSH fingerprint visualization algorithm"
//!
//! <http://www.dirk-loss.de/sshvis/drunken_bishop.pdf>

use crate::{Directions, HEIGHT, Position, START_POSITION, Snapshot, Snapshots, WIDTH};
use alloc::string::{String, ToString};
use core::{fmt, iter::FusedIterator};

/// Symbols for increasing visit density, indexed by visit count.
pub const SYMBOLS: &[u8; 15] = b" .o+=*BOX@%&#/^";

/// Marker for the cell the bishop starts from.
pub const START_SYMBOL: char = 'S';

/// Marker for the cell the bishop ends on.
pub const END_SYMBOL: char = 'E';

/// Get the density symbol for a visit count.
///
/// Counts beyond the end of [`SYMBOLS`] saturate at its last entry (`^`).
pub fn symbol(count: u32) -> char {
    let index = usize::try_from(count).unwrap_or(usize::MAX);
    let last = SYMBOLS.len().saturating_sub(1);
    SYMBOLS.get(index.min(last)).copied().map_or('^', char::from)
}

impl Snapshot {
    /// Get the character drawn for a cell of this snapshot.
    ///
    /// The start marker always wins, even when the walk ends on the start
    /// cell. The end marker is only drawn on the final snapshot.
    pub fn symbol_at(&self, position: Position) -> char {
        if position == START_POSITION {
            START_SYMBOL
        } else if self.is_final() && position == self.position() {
            END_SYMBOL
        } else {
            symbol(self.visits().get(position))
        }
    }
}

/// "randomart" renderer.
#[derive(Copy, Clone, Debug)]
pub struct Randomart<'a> {
    header: &'a str,
    snapshot: Snapshot,
    footer: &'a str,
}

impl<'a> Randomart<'a> {
    /// Create a new "randomart" renderer for the given snapshot, with plain
    /// borders.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            header: "",
            snapshot,
            footer: "",
        }
    }

    /// Center a label such as `[ED25519 256]` in the top border.
    pub fn with_header(mut self, header: &'a str) -> Self {
        self.header = truncate(header);
        self
    }

    /// Center a label such as `[MD5]` in the bottom border.
    pub fn with_footer(mut self, footer: &'a str) -> Self {
        self.footer = truncate(footer);
        self
    }

    /// Get the snapshot being rendered.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Snapshot> for Randomart<'_> {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

impl fmt::Display for Randomart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{:-^width$}+", self.header, width = WIDTH)?;

        for y in 0..HEIGHT {
            write!(f, "|")?;

            for x in 0..WIDTH {
                write!(f, "{}", self.snapshot.symbol_at(Position { x, y }))?;
            }

            writeln!(f, "|")?;
        }

        write!(f, "+{:-^width$}+", self.footer, width = WIDTH)
    }
}

/// Limit a border label to the width of the board.
fn truncate(label: &str) -> &str {
    match label.char_indices().nth(WIDTH) {
        Some((end, _)) => label.get(..end).unwrap_or(label),
        None => label,
    }
}

/// Iterator over the rendered frames of a walk, one per move.
///
/// Each frame is a complete board; clearing and redrawing between them is
/// left to the caller.
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    snapshots: Snapshots<Directions<'a>>,
}

impl<'a> Frames<'a> {
    /// Render every step of the walk encoded in `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            snapshots: Snapshots::new(Directions::new(bytes)),
        }
    }
}

impl Iterator for Frames<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.snapshots
            .next()
            .map(|snapshot| Randomart::new(snapshot).to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshots.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}
