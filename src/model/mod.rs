use serde::{Deserialize, Serialize};

/// A party competing for seats.
///
/// `number` is assigned from input order starting at 1 and never changes;
/// `votes` is fixed at registration. Only `seats` mutates, and only while
/// the engine is running an allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub number: u32,
    pub votes: u64,
    pub seats: u64,
}

impl Party {
    pub fn new(number: u32, votes: u64) -> Party {
        Party {
            number,
            votes,
            seats: 0,
        }
    }
}

/// The outcome of one allocation run, read-only from here on.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub seat_total: u64,
    pub total_votes: u64,
    /// The quota actually used for the run. Normally
    /// floor(total_votes / seat_total); higher only when the floored quota
    /// over-awards in the initial phase (see the engine).
    pub quota: u64,
    /// Parties in ascending `number` order with their final seat counts.
    pub parties: Vec<Party>,
}
