//! # Events
//!
//! Typed payloads for every notification the contract emits. Each mutating
//! entry point publishes exactly one event on success; a failed call emits
//! nothing because the host rolls events back together with storage.
//!
//! Topics follow the short-symbol scheme: a `symbol_short!` kind tag, plus
//! the proposal id where one applies, so indexers can filter per proposal
//! without decoding payloads.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Vec};

/// `("created", proposal_id)` — a proposal was created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub owner: Address,
    pub statement: String,
}

/// `("opt_added", proposal_id)` — options were appended to an open,
/// not-yet-voted-on proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionsAdded {
    pub proposal_id: u64,
    pub options: Vec<String>,
}

/// `("regd",)` — an identity paid the voting fee and became a voter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegistered {
    pub voter: Address,
    pub amount: i128,
}

/// `("voted", proposal_id)` — a vote was recorded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub proposal_id: u64,
    pub option_index: u32,
    pub voter: Address,
}

/// `("ended", proposal_id)` — a proposal was closed. Irreversible.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalEnded {
    pub proposal_id: u64,
}

/// `("vfee_set",)` — the operator replaced the voting fee.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingFeeUpdated {
    pub fee: i128,
}

/// `("pfee_set",)` — the operator replaced the proposal fee.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalFeeUpdated {
    pub fee: i128,
}

/// `("withdrawn",)` — the operator withdrew the accumulated fee balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub operator: Address,
    pub amount: i128,
}

pub fn proposal_created(env: &Env, event: ProposalCreated) {
    env.events()
        .publish((symbol_short!("created"), event.proposal_id), event);
}

pub fn options_added(env: &Env, event: OptionsAdded) {
    env.events()
        .publish((symbol_short!("opt_added"), event.proposal_id), event);
}

pub fn voter_registered(env: &Env, event: VoterRegistered) {
    env.events().publish((symbol_short!("regd"),), event);
}

pub fn vote_cast(env: &Env, event: VoteCast) {
    env.events()
        .publish((symbol_short!("voted"), event.proposal_id), event);
}

pub fn proposal_ended(env: &Env, event: ProposalEnded) {
    env.events()
        .publish((symbol_short!("ended"), event.proposal_id), event);
}

pub fn voting_fee_updated(env: &Env, event: VotingFeeUpdated) {
    env.events().publish((symbol_short!("vfee_set"),), event);
}

pub fn proposal_fee_updated(env: &Env, event: ProposalFeeUpdated) {
    env.events().publish((symbol_short!("pfee_set"),), event);
}

pub fn funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events().publish((symbol_short!("withdrawn"),), event);
}
