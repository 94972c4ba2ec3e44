//! # Types
//!
//! Shared data structures used across all modules of the voting protocol.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Proposal` is internally stored as two separate ledger entries:
//!
//! - [`ProposalConfig`] — written once at creation; never mutated.
//! - [`ProposalState`] — written on option addition, on every vote, and on
//!   closing.
//!
//! The public API exposes the reconstructed [`Proposal`] struct for convenience.
//!
//! ### Options are positional
//!
//! An option has no identifier of its own: its index inside the proposal's
//! option sequence is its identity for voting and for results. Options are
//! only ever appended, never reordered or removed, so an index handed out at
//! creation stays valid for the proposal's whole lifetime.
//!
//! ### Closed is terminal
//!
//! ```text
//! open ──► closed
//! ```
//!
//! There is no re-open transition. A closed proposal rejects option additions
//! and votes but stays queryable indefinitely.

use soroban_sdk::{contracttype, Address, String, Vec};

/// A named alternative within a proposal's option sequence.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteOption {
    pub name: String,
    pub votes: u32,
}

/// Immutable proposal configuration, written once at creation.
///
/// Stored separately from mutable state so that the high-frequency writes
/// (votes) only rewrite the small [`ProposalState`] entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalConfig {
    pub id: u64,
    pub owner: Address,
    pub statement: String,
}

/// Mutable proposal state, updated on option addition, voting, and closing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalState {
    /// Ordered option sequence; index is the option's voting identifier.
    pub options: Vec<VoteOption>,
    /// Total votes across all options. Always equals the sum of the
    /// per-option tallies.
    pub vote_count: u32,
    pub closed: bool,
}

/// Full representation of a proposal.
///
/// Used as the public API return type; reconstructed internally from the
/// split `ProposalConfig` + `ProposalState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Unique identifier (auto-incremented, starting at 1).
    pub id: u64,
    /// Address that created the proposal.
    pub owner: Address,
    /// The text being voted on.
    pub statement: String,
    /// Ordered option sequence.
    pub options: Vec<VoteOption>,
    /// Total votes across all options.
    pub vote_count: u32,
    /// Whether the proposal has been ended.
    pub closed: bool,
}

/// Winning option of a closed proposal.
///
/// The scan keeps the first strict maximum, so the lowest index wins ties;
/// a proposal with no votes at all reports index 0 with zero votes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningOption {
    pub index: u32,
    pub votes: u32,
}
