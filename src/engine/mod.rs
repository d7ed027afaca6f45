use crate::model::{Allocation, Party};

#[derive(Debug, thiserror::Error)]
pub enum ApportionError {
    #[error("No parties: at least one vote count is required")]
    NoParties,
    #[error("Seat total must be positive")]
    InvalidSeatTotal,
}

pub type Result<T> = std::result::Result<T, ApportionError>;

/// Run context for a single allocation: the registered parties plus the
/// totals the quota is derived from. Owns all state for the run; there are
/// no globals.
pub struct Election {
    parties: Vec<Party>,
    total_votes: u64,
    seat_total: u64,
}

impl Election {
    /// Register one party per vote count, numbered from 1 in input order,
    /// and accumulate the vote total.
    pub fn new(votes: &[u64], seat_total: u64) -> Result<Election> {
        if votes.is_empty() {
            return Err(ApportionError::NoParties);
        }
        if seat_total == 0 {
            return Err(ApportionError::InvalidSeatTotal);
        }

        let parties: Vec<Party> = votes
            .iter()
            .enumerate()
            .map(|(i, &v)| Party::new(i as u32 + 1, v))
            .collect();
        let total_votes = votes.iter().sum();

        Ok(Election {
            parties,
            total_votes,
            seat_total,
        })
    }

    /// Distribute every seat and return the finished allocation.
    ///
    /// Phase one awards each party one seat per whole quota its votes cover.
    /// Phase two hands out the leftover seats one at a time to the party
    /// with the largest residual score, ties going to the lowest number.
    pub fn allocate(mut self) -> Allocation {
        let mut quota = self.total_votes / self.seat_total;
        let mut awarded: u64 = 0;

        // Initial award. A floored quota can hand out more seats than exist
        // (e.g. votes [5, 0, 0] with 4 seats gives quota 1 and 5 initial
        // seats), so raise the quota until the awards fit.
        if quota > 0 {
            loop {
                awarded = 0;
                for party in &mut self.parties {
                    let award = party.votes / quota;
                    party.seats = award;
                    awarded += award;
                }
                if awarded <= self.seat_total {
                    break;
                }
                quota += 1;
            }
        }
        // With a zero quota the initial phase is skipped outright and the
        // remainder phase scores parties by raw votes.

        // Remainder award: each pick lowers the winner's residual score by
        // one quota, so top-ups rotate toward proportionality.
        while awarded < self.seat_total {
            let winner = position_of_max_by(&self.parties, |p| residual_score(p, quota))
                .unwrap_or(0);
            self.parties[winner].seats += 1;
            awarded += 1;
        }

        Allocation {
            seat_total: self.seat_total,
            total_votes: self.total_votes,
            quota,
            parties: self.parties,
        }
    }
}

/// Votes not yet converted into seats: `votes - seats * quota`. Signed,
/// since repeated top-ups can push a party past its vote backing.
pub fn residual_score(party: &Party, quota: u64) -> i64 {
    party.votes as i64 - party.seats as i64 * quota as i64
}

/// Index of the item with the strictly largest score; on ties the earliest
/// index wins. `None` only for an empty slice.
fn position_of_max_by<T, F>(items: &[T], mut score: F) -> Option<usize>
where
    F: FnMut(&T) -> i64,
{
    let mut best: Option<(usize, i64)> = None;
    for (index, item) in items.iter().enumerate() {
        let s = score(item);
        match best {
            Some((_, top)) if s <= top => {}
            _ => best = Some((index, s)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(votes: &[u64], seat_total: u64) -> Vec<u64> {
        let allocation = Election::new(votes, seat_total)
            .unwrap()
            .allocate();
        allocation.parties.iter().map(|p| p.seats).collect()
    }

    #[test]
    fn worked_example() {
        let election = Election::new(&[400000, 250000, 100000, 73000, 5000], 5).unwrap();
        let allocation = election.allocate();

        assert_eq!(allocation.total_votes, 828000);
        assert_eq!(allocation.quota, 165600);
        // Initial award gives 2, 1, 0, 0, 0; the two leftover seats go to
        // party 3 (residual 100000) and then party 2 (residual 84400).
        let result: Vec<(u32, u64)> = allocation
            .parties
            .iter()
            .map(|p| (p.number, p.seats))
            .collect();
        assert_eq!(result, vec![(1, 2), (2, 2), (3, 1), (4, 0), (5, 0)]);
    }

    #[test]
    fn seats_are_conserved() {
        let cases: Vec<(Vec<u64>, u64)> = vec![
            (vec![400000, 250000, 100000, 73000, 5000], 5),
            (vec![1], 1),
            (vec![7, 7, 7], 10),
            (vec![2, 1], 5),      // zero quota
            (vec![0, 0, 0], 3),   // zero votes everywhere
            (vec![5, 0, 0], 4),   // floored quota over-awards without the raise
            (vec![1000, 999], 2),
        ];
        for (votes, seat_total) in cases {
            let total: u64 = seats(&votes, seat_total).iter().sum();
            assert_eq!(total, seat_total, "votes {:?}, {} seats", votes, seat_total);
        }
    }

    #[test]
    fn tie_break_goes_to_lowest_number() {
        // quota 6, both parties take one full quota, residuals tie at 4.
        assert_eq!(seats(&[10, 10], 3), vec![2, 1]);
    }

    #[test]
    fn zero_quota_scores_by_raw_votes() {
        // total votes below the seat total: party 1 has the highest votes
        // and a zero quota never lowers its score, so it takes every seat.
        assert_eq!(seats(&[2, 1], 5), vec![5, 0]);
        // All-zero votes degenerate to the tie-break.
        assert_eq!(seats(&[0, 0, 0], 3), vec![3, 0, 0]);
    }

    #[test]
    fn over_award_raises_quota() {
        let allocation = Election::new(&[5, 0, 0], 4).unwrap().allocate();
        assert_eq!(allocation.quota, 2);
        let result: Vec<u64> = allocation.parties.iter().map(|p| p.seats).collect();
        assert_eq!(result, vec![3, 1, 0]);
    }

    #[test]
    fn more_votes_never_means_fewer_seats() {
        let votes = vec![90, 40, 40, 20, 10, 5];
        let result = seats(&votes, 12);
        for i in 0..votes.len() {
            for j in 0..votes.len() {
                if votes[i] > votes[j] {
                    assert!(result[i] >= result[j]);
                }
            }
        }
    }

    #[test]
    fn allocation_is_deterministic() {
        let votes = [123456, 654321, 111111, 99999, 55555, 3];
        let a = seats(&votes, 17);
        let b = seats(&votes, 17);
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_party_list() {
        assert!(matches!(
            Election::new(&[], 5),
            Err(ApportionError::NoParties)
        ));
    }

    #[test]
    fn rejects_zero_seat_total() {
        assert!(matches!(
            Election::new(&[100], 0),
            Err(ApportionError::InvalidSeatTotal)
        ));
    }

    #[test]
    fn residual_score_can_go_negative() {
        let mut party = Party::new(1, 100);
        party.seats = 2;
        assert_eq!(residual_score(&party, 60), -20);
    }

    #[test]
    fn max_position_keeps_earliest_on_tie() {
        assert_eq!(position_of_max_by(&[3, 7, 7, 1], |&x| x as i64), Some(1));
        assert_eq!(position_of_max_by::<i64, _>(&[], |&x| x), None);
    }
}
