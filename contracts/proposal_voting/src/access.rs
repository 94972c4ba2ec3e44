//! # Access control
//!
//! Composable guard functions evaluated at the top of each entry point.
//! Every guard returns `Result<(), Error>` so entry points chain them with
//! `?`; the first failing guard aborts the call, and the host rolls back any
//! pending writes.
//!
//! ## Guard order
//!
//! Guards run in a fixed order per operation so error precedence is
//! reproducible:
//!
//! 1. identifier validity ([`require_valid_id`]) — always first among guards
//!    that concern a proposal, since every other proposal guard must load the
//!    record;
//! 2. role predicates (operator / proposal owner / registered voter);
//! 3. state predicates (open / ended / voting started);
//! 4. input validation (option bounds, fee amounts) where not already covered.
//!
//! Guards that inspect a proposal take the already-loaded config or state
//! rather than reloading it, so a single entry point reads each storage entry
//! once.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::{ProposalConfig, ProposalState};
use crate::Error;

/// Caller must be the operator.
pub fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
    if *caller != storage::get_operator(env) {
        return Err(Error::NotOperator);
    }
    Ok(())
}

/// `id` must denote a proposal that has actually been created.
///
/// Ids are assigned from 1 upward, so both 0 and anything above the current
/// counter is rejected. Ids in between always exist (no deletion).
pub fn require_valid_id(env: &Env, id: u64) -> Result<(), Error> {
    if id == 0 || id > storage::proposal_count(env) {
        return Err(Error::InvalidProposalId);
    }
    Ok(())
}

/// Caller must not be the proposal's owner (owners cannot vote on their own
/// proposals).
pub fn require_not_proposal_owner(
    config: &ProposalConfig,
    caller: &Address,
) -> Result<(), Error> {
    if *caller == config.owner {
        return Err(Error::OwnerCannotVote);
    }
    Ok(())
}

/// Caller must be the proposal's owner.
pub fn require_proposal_owner(config: &ProposalConfig, caller: &Address) -> Result<(), Error> {
    if *caller != config.owner {
        return Err(Error::NotProposalOwner);
    }
    Ok(())
}

/// Caller must be the operator or the proposal's owner.
pub fn require_operator_or_proposal_owner(
    env: &Env,
    config: &ProposalConfig,
    caller: &Address,
) -> Result<(), Error> {
    if *caller != storage::get_operator(env) && *caller != config.owner {
        return Err(Error::NotOperatorOrProposalOwner);
    }
    Ok(())
}

/// Caller must have paid the registration fee.
pub fn require_registered(env: &Env, caller: &Address) -> Result<(), Error> {
    if !storage::is_registered(env, caller) {
        return Err(Error::NotRegistered);
    }
    Ok(())
}

/// The proposal must still be open.
pub fn require_open(state: &ProposalState) -> Result<(), Error> {
    if state.closed {
        return Err(Error::ProposalAlreadyEnded);
    }
    Ok(())
}

/// The proposal must already be closed (results are only computed after
/// closure).
pub fn require_ended(state: &ProposalState) -> Result<(), Error> {
    if !state.closed {
        return Err(Error::ProposalNotEnded);
    }
    Ok(())
}
