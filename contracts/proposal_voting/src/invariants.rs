#![allow(dead_code)]

extern crate std;

use crate::types::{Proposal, WinningOption};

/// INV-1: Proposal ids are assigned starting at 1, strictly increasing,
/// one per creation, never reused.
pub fn assert_sequential_ids(proposals: &[Proposal]) {
    for (i, proposal) in proposals.iter().enumerate() {
        assert_eq!(
            proposal.id,
            i as u64 + 1,
            "INV-1 violated: expected id {}, got {}",
            i as u64 + 1,
            proposal.id
        );
    }
}

/// INV-2: A proposal never holds more than 10 options.
pub fn assert_option_limit(proposal: &Proposal) {
    assert!(
        proposal.options.len() <= crate::MAX_OPTIONS,
        "INV-2 violated: proposal {} has {} options",
        proposal.id,
        proposal.options.len()
    );
}

/// INV-5: A proposal's total vote count equals the sum of its options'
/// vote counts.
pub fn assert_tally_consistent(proposal: &Proposal) {
    let sum: u32 = proposal.options.iter().map(|option| option.votes).sum();
    assert_eq!(
        proposal.vote_count, sum,
        "INV-5 violated: proposal {} total is {} but option tallies sum to {}",
        proposal.id, proposal.vote_count, sum
    );
}

/// INV-9: The reported winner is the first strict maximum of the option
/// sequence — the lowest index among those tied for the most votes.
pub fn assert_winner_consistent(proposal: &Proposal, winner: &WinningOption) {
    let mut expected = WinningOption { index: 0, votes: 0 };
    for (index, option) in proposal.options.iter().enumerate() {
        if option.votes > expected.votes {
            expected = WinningOption {
                index: index as u32,
                votes: option.votes,
            };
        }
    }
    assert_eq!(
        *winner, expected,
        "INV-9 violated: proposal {} reported winner {:?}, expected {:?}",
        proposal.id, winner, expected
    );
}

/// Run all stateless proposal invariants.
pub fn assert_all_proposal_invariants(proposal: &Proposal) {
    assert_option_limit(proposal);
    assert_tally_consistent(proposal);
}
