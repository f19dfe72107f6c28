use core::fmt;
use core::num::NonZeroU32;

/// Dense handle into a flow graph's node or edge arena.
///
/// Handles are issued in registration order and never reused, since the
/// graph never removes anything. Stored off by one so `Option<Id>` (BFS
/// parent links) costs no extra space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Handle for arena slot `index`.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Arena slot as `u32`. Paired edges differ only in the lowest bit.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for arena lookups.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Node handle, issued by `FlowGraph::add_node` and `add_edge`.
pub type NodeId = Id;
/// Edge handle. Forward edges sit at even slots, their residuals at the next
/// odd slot.
pub type EdgeId = Id;
