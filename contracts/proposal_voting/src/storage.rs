//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! voting protocol:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `Operator`      | `Address` | Privileged operator identity         |
//! | `FeeToken`      | `Address` | Token all fees are paid in           |
//! | `ProposalFee`   | `i128`    | Current proposal-creation fee        |
//! | `VotingFee`     | `i128`    | Current voter-registration fee       |
//! | `ProposalCount` | `u64`     | Highest proposal id assigned so far  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type             | Description                       |
//! |-----------------------|------------------|-----------------------------------|
//! | `PropConfig(id)`      | `ProposalConfig` | Immutable proposal configuration  |
//! | `PropState(id)`       | `ProposalState`  | Mutable proposal state            |
//! | `Registered(addr)`    | `bool`           | Voter-registration flag           |
//! | `Voted(id, addr)`     | `bool`           | One-vote-per-(voter, proposal)    |
//! | `OwnerProposals(addr)`| `Vec<u64>`       | Proposal ids created by `addr`    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why split Config and State?
//!
//! Votes are the high-frequency write. Rewriting the owner and statement on
//! every vote is wasteful; the mutable `ProposalState` entry carries only the
//! option tallies and the closed flag, and the public [`Proposal`] return type
//! is reconstructed from the two entries.
//!
//! `OwnerProposals` is an insertion-ordered list. Ids are appended exactly
//! once, at creation, and are strictly increasing, so the list can never hold
//! a duplicate and needs no companion membership set.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Proposal, ProposalConfig, ProposalState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys live as long as the contract and are extended together.
/// Persistent-tier keys hold per-proposal and per-identity data with
/// independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Privileged operator identity (Instance).
    Operator,
    /// Token address all fees are paid in (Instance).
    FeeToken,
    /// Current proposal-creation fee in fee-token stroops (Instance).
    ProposalFee,
    /// Current voter-registration fee in fee-token stroops (Instance).
    VotingFee,
    /// Highest proposal id assigned so far; 0 means none yet (Instance).
    ProposalCount,
    /// Immutable proposal configuration keyed by id (Persistent).
    PropConfig(u64),
    /// Mutable proposal state keyed by id (Persistent).
    PropState(u64),
    /// Registration flag for a voter identity (Persistent).
    Registered(Address),
    /// Vote flag for a (proposal id, voter) pair (Persistent).
    Voted(u64, Address),
    /// Ids of proposals created by an identity, in creation order (Persistent).
    OwnerProposals(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// `true` once `init` has run.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Operator)
}

/// Store the operator identity.
pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
    bump_instance(env);
}

/// Retrieve the operator identity.
/// Panics if the contract has not been initialized.
pub fn get_operator(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Operator)
        .expect("not initialized")
}

/// Store the fee-token contract address.
pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
    bump_instance(env);
}

/// Retrieve the fee-token contract address.
/// Panics if the contract has not been initialized.
pub fn get_fee_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FeeToken)
        .expect("not initialized")
}

/// Replace the proposal-creation fee.
pub fn set_proposal_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::ProposalFee, &fee);
    bump_instance(env);
}

/// Current proposal-creation fee.
pub fn get_proposal_fee(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ProposalFee)
        .unwrap_or(crate::DEFAULT_PROPOSAL_FEE)
}

/// Replace the voter-registration fee.
pub fn set_voting_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::VotingFee, &fee);
    bump_instance(env);
}

/// Current voter-registration fee.
pub fn get_voting_fee(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::VotingFee)
        .unwrap_or(crate::DEFAULT_VOTING_FEE)
}

/// Atomically reads, increments, and stores the proposal counter.
/// Returns the id to use for the *current* proposal. Ids start at 1.
pub fn next_proposal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0);
    let id = current + 1;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    id
}

/// Highest proposal id assigned so far; 0 when no proposal exists yet.
pub fn proposal_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new proposal.
pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let config_key = DataKey::PropConfig(proposal.id);
    let state_key = DataKey::PropState(proposal.id);

    let config = ProposalConfig {
        id: proposal.id,
        owner: proposal.owner.clone(),
        statement: proposal.statement.clone(),
    };

    let state = ProposalState {
        options: proposal.options.clone(),
        vote_count: proposal.vote_count,
        closed: proposal.closed,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Proposal` by combining config and state.
/// Panics if the proposal does not exist; callers establish existence via
/// the valid-id guard first.
pub fn load_proposal(env: &Env, id: u64) -> Proposal {
    let config = load_proposal_config(env, id);
    let state = load_proposal_state(env, id);
    Proposal {
        id: config.id,
        owner: config.owner,
        statement: config.statement,
        options: state.options,
        vote_count: state.vote_count,
        closed: state.closed,
    }
}

/// Load only the immutable proposal configuration.
pub fn load_proposal_config(env: &Env, id: u64) -> ProposalConfig {
    let key = DataKey::PropConfig(id);
    let config: ProposalConfig = env
        .storage()
        .persistent()
        .get(&key)
        .expect("proposal not found");
    bump_persistent(env, &key);
    config
}

/// Load only the mutable proposal state.
pub fn load_proposal_state(env: &Env, id: u64) -> ProposalState {
    let key = DataKey::PropState(id);
    let state: ProposalState = env
        .storage()
        .persistent()
        .get(&key)
        .expect("proposal not found");
    bump_persistent(env, &key);
    state
}

/// Save only the mutable proposal state (votes, option additions, closing).
pub fn save_proposal_state(env: &Env, id: u64, state: &ProposalState) {
    let key = DataKey::PropState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// `true` if `voter` has paid the registration fee.
pub fn is_registered(env: &Env, voter: &Address) -> bool {
    let key = DataKey::Registered(voter.clone());
    let registered = env.storage().persistent().get(&key).unwrap_or(false);
    if registered {
        bump_persistent(env, &key);
    }
    registered
}

/// Mark `voter` as registered. Registration is append-only.
pub fn set_registered(env: &Env, voter: &Address) {
    let key = DataKey::Registered(voter.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

/// `true` if `voter` has already voted on proposal `id`.
pub fn has_voted(env: &Env, id: u64, voter: &Address) -> bool {
    let key = DataKey::Voted(id, voter.clone());
    let voted = env.storage().persistent().get(&key).unwrap_or(false);
    if voted {
        bump_persistent(env, &key);
    }
    voted
}

/// Record that `voter` has voted on proposal `id`. Vote records are
/// append-only.
pub fn set_voted(env: &Env, id: u64, voter: &Address) {
    let key = DataKey::Voted(id, voter.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

/// Ids of proposals created by `owner`, in creation order. Empty if none.
pub fn proposals_of(env: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnerProposals(owner.clone());
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

/// Append a freshly assigned proposal id to `owner`'s index.
pub fn push_owner_proposal(env: &Env, owner: &Address, id: u64) {
    let key = DataKey::OwnerProposals(owner.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}
