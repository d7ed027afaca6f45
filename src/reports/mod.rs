use crate::model::Allocation;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Final allocation report in the published JSON shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct AllocationReport {
    #[serde(rename = "seatTotal")]
    pub seat_total: u64,
    #[serde(rename = "totalVotes")]
    pub total_votes: u64,
    pub quota: u64,
    pub parties: Vec<PartyResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PartyResult {
    pub number: u32,
    pub votes: u64,
    pub seats: u64,
}

impl AllocationReport {
    pub fn from_allocation(allocation: &Allocation) -> AllocationReport {
        AllocationReport {
            seat_total: allocation.seat_total,
            total_votes: allocation.total_votes,
            quota: allocation.quota,
            parties: allocation
                .parties
                .iter()
                .map(|p| PartyResult {
                    number: p.number,
                    votes: p.votes,
                    seats: p.seats,
                })
                .collect(),
        }
    }

    /// One line per party in `number` order: `"<number>, <seats> seats"`.
    pub fn text_lines(&self) -> String {
        self.parties
            .iter()
            .map(|p| format!("{}, {} seats", p.number, p.seats))
            .join("\n")
    }
}
