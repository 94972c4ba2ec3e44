//! # Proposal Voting Contract
//!
//! This is the root crate of a fee-gated proposal-and-voting ledger. It
//! exposes the single Soroban contract `ProposalVoting` whose entry points
//! cover the full proposal lifecycle:
//!
//! | Phase        | Entry Point(s)                                      |
//! |--------------|-----------------------------------------------------|
//! | Bootstrap    | [`ProposalVoting::init`]                            |
//! | Proposals    | [`ProposalVoting::create_proposal`], [`ProposalVoting::add_options`] |
//! | Registration | [`ProposalVoting::register`]                        |
//! | Voting       | [`ProposalVoting::cast_vote`]                       |
//! | Lifecycle    | [`ProposalVoting::end_proposal`], [`ProposalVoting::winning_option`] |
//! | Treasury     | `update_voting_fee`, `update_proposal_fee`, `withdraw` |
//! | Queries      | `get_proposal`, `get_option_count`, `get_option_name`, `get_proposals_by_owner` |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`access`]. Storage access is fully
//! delegated to [`storage`]. Event payloads live in [`events`]. This file
//! contains **only** the public entry points and their guard-then-mutate
//! sequences — each entry point runs its guards in a fixed order, applies its
//! writes, and publishes exactly one event; any `Err` return makes the host
//! discard every pending write and event.
//!
//! Fees are paid in a single token fixed at [`ProposalVoting::init`]. The
//! contract's own balance in that token is the treasury; it accumulates every
//! fee paid and is withdrawable only by the operator.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, String, Vec};

pub mod access;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{
    FundsWithdrawn, OptionsAdded, ProposalCreated, ProposalEnded, ProposalFeeUpdated, VoteCast,
    VoterRegistered, VotingFeeUpdated,
};
pub use types::{Proposal, ProposalConfig, ProposalState, VoteOption, WinningOption};

/// One whole fee-token unit, assuming the 7-decimal convention.
pub const UNIT: i128 = 10_000_000;

/// Default proposal-creation fee: 0.5 unit.
pub const DEFAULT_PROPOSAL_FEE: i128 = UNIT / 2;

/// Default voter-registration fee: 0.2 unit.
pub const DEFAULT_VOTING_FEE: i128 = UNIT / 5;

/// A proposal never holds more than this many options.
pub const MAX_OPTIONS: u32 = 10;

/// Updated voting fees must be at least 1 unit.
pub const MIN_VOTING_FEE: i128 = UNIT;

/// Updated proposal fees must be at least 2 units.
pub const MIN_PROPOSAL_FEE: i128 = 2 * UNIT;

/// Withdrawal requires the treasury balance to strictly exceed 1 unit.
pub const MIN_WITHDRAW_BALANCE: i128 = UNIT;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized        = 1,
    NotOperator               = 2,
    NotProposalOwner          = 3,
    NotOperatorOrProposalOwner = 4,
    NotRegistered             = 5,
    OwnerCannotVote           = 6,
    InvalidProposalId         = 7,
    TooManyOptions            = 8,
    InvalidOptionId           = 9,
    FeeTooLow                 = 10,
    InsufficientProposalFee   = 11,
    InsufficientVotingFee     = 12,
    ProposalAlreadyEnded      = 13,
    VotingAlreadyStarted      = 14,
    AlreadyVoted              = 15,
    AlreadyRegistered         = 16,
    ProposalNotEnded          = 17,
    NothingToWithdraw         = 18,
    NoProposalsForOwner       = 19,
    WithdrawalTransferFailed  = 20,
}

#[contract]
pub struct ProposalVoting;

#[contractimpl]
impl ProposalVoting {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with the operator identity and the fee token.
    ///
    /// Must be called exactly once immediately after deployment. Subsequent
    /// calls fail with `Error::AlreadyInitialized`.
    ///
    /// - `operator` holds treasury and cross-proposal administrative rights
    ///   and must sign the transaction.
    /// - `fee_token` is the token contract all fees are paid in.
    pub fn init(env: Env, operator: Address, fee_token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        operator.require_auth();

        storage::set_operator(&env, &operator);
        storage::set_fee_token(&env, &fee_token);
        storage::set_proposal_fee(&env, DEFAULT_PROPOSAL_FEE);
        storage::set_voting_fee(&env, DEFAULT_VOTING_FEE);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Proposals
    // ─────────────────────────────────────────────────────────

    /// Create a new proposal and pay the proposal fee.
    ///
    /// `fee_amount` is pulled from `caller` in the fee token and must cover
    /// the current proposal fee; the whole amount goes to the treasury.
    /// Options are stored in the given order, each starting at zero votes;
    /// an option's index in that order is its identifier for voting.
    ///
    /// Returns the assigned proposal id. Ids start at 1 and are never reused.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        fee_amount: i128,
        statement: String,
        options: Vec<String>,
    ) -> Result<u64, Error> {
        caller.require_auth();

        if fee_amount < storage::get_proposal_fee(&env) {
            return Err(Error::InsufficientProposalFee);
        }
        if options.len() > MAX_OPTIONS {
            return Err(Error::TooManyOptions);
        }

        let token_client = token::Client::new(&env, &storage::get_fee_token(&env));
        token_client.transfer(&caller, &env.current_contract_address(), &fee_amount);

        let id = storage::next_proposal_id(&env);

        let mut vote_options = Vec::new(&env);
        for name in options.iter() {
            vote_options.push_back(VoteOption { name, votes: 0 });
        }

        let proposal = Proposal {
            id,
            owner: caller.clone(),
            statement: statement.clone(),
            options: vote_options,
            vote_count: 0,
            closed: false,
        };

        storage::save_proposal(&env, &proposal);
        storage::push_owner_proposal(&env, &caller, id);

        events::proposal_created(
            &env,
            ProposalCreated {
                proposal_id: id,
                owner: caller,
                statement,
            },
        );
        Ok(id)
    }

    /// Append options to an open proposal that nobody has voted on yet.
    ///
    /// Only the proposal owner may add options, and only while the proposal
    /// is open and its vote count is still zero. The resulting option count
    /// must not exceed [`MAX_OPTIONS`].
    pub fn add_options(
        env: Env,
        caller: Address,
        proposal_id: u64,
        options: Vec<String>,
    ) -> Result<(), Error> {
        caller.require_auth();

        access::require_valid_id(&env, proposal_id)?;
        let config = storage::load_proposal_config(&env, proposal_id);
        access::require_proposal_owner(&config, &caller)?;

        let mut state = storage::load_proposal_state(&env, proposal_id);
        access::require_open(&state)?;

        if state.options.len() + options.len() > MAX_OPTIONS {
            return Err(Error::TooManyOptions);
        }
        if state.vote_count > 0 {
            return Err(Error::VotingAlreadyStarted);
        }

        for name in options.iter() {
            state.options.push_back(VoteOption { name, votes: 0 });
        }
        storage::save_proposal_state(&env, proposal_id, &state);

        events::options_added(
            &env,
            OptionsAdded {
                proposal_id,
                options,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    /// Register `caller` as an eligible voter and pay the voting fee.
    ///
    /// `fee_amount` is pulled from `caller` in the fee token and must cover
    /// the current voting fee. Registration is one-time and append-only:
    /// a second call fails with `Error::AlreadyRegistered`.
    pub fn register(env: Env, caller: Address, fee_amount: i128) -> Result<(), Error> {
        caller.require_auth();

        if fee_amount < storage::get_voting_fee(&env) {
            return Err(Error::InsufficientVotingFee);
        }
        if storage::is_registered(&env, &caller) {
            return Err(Error::AlreadyRegistered);
        }

        let token_client = token::Client::new(&env, &storage::get_fee_token(&env));
        token_client.transfer(&caller, &env.current_contract_address(), &fee_amount);

        storage::set_registered(&env, &caller);

        events::voter_registered(
            &env,
            VoterRegistered {
                voter: caller,
                amount: fee_amount,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Voting
    // ─────────────────────────────────────────────────────────

    /// Cast `caller`'s single vote on a proposal for one option.
    ///
    /// The caller must be a registered voter, must not own the proposal, and
    /// must not have voted on it before. The option tally, the proposal's
    /// total, and the (caller, proposal) vote record commit together or not
    /// at all.
    pub fn cast_vote(
        env: Env,
        caller: Address,
        proposal_id: u64,
        option_index: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        access::require_valid_id(&env, proposal_id)?;
        let config = storage::load_proposal_config(&env, proposal_id);
        access::require_not_proposal_owner(&config, &caller)?;
        access::require_registered(&env, &caller)?;

        let mut state = storage::load_proposal_state(&env, proposal_id);
        access::require_open(&state)?;

        let mut option = state
            .options
            .get(option_index)
            .ok_or(Error::InvalidOptionId)?;
        if storage::has_voted(&env, proposal_id, &caller) {
            return Err(Error::AlreadyVoted);
        }

        option.votes += 1;
        state.options.set(option_index, option);
        state.vote_count += 1;
        storage::save_proposal_state(&env, proposal_id, &state);
        storage::set_voted(&env, proposal_id, &caller);

        events::vote_cast(
            &env,
            VoteCast {
                proposal_id,
                option_index,
                voter: caller,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Close a proposal. Irreversible — there is no re-open.
    ///
    /// Only the operator or the proposal owner may close; a closed proposal
    /// accepts no further options or votes but stays queryable.
    pub fn end_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), Error> {
        caller.require_auth();

        access::require_valid_id(&env, proposal_id)?;
        let config = storage::load_proposal_config(&env, proposal_id);
        access::require_operator_or_proposal_owner(&env, &config, &caller)?;

        let mut state = storage::load_proposal_state(&env, proposal_id);
        access::require_open(&state)?;

        state.closed = true;
        storage::save_proposal_state(&env, proposal_id, &state);

        events::proposal_ended(&env, ProposalEnded { proposal_id });
        Ok(())
    }

    /// Compute the winning option of a closed proposal.
    ///
    /// Scans the option sequence in index order and keeps the first strict
    /// maximum, so the lowest index wins ties. A proposal where every option
    /// has zero votes reports index 0 with zero votes. Fails with
    /// `Error::ProposalNotEnded` while the proposal is still open.
    pub fn winning_option(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<WinningOption, Error> {
        caller.require_auth();

        access::require_valid_id(&env, proposal_id)?;
        let config = storage::load_proposal_config(&env, proposal_id);
        access::require_operator_or_proposal_owner(&env, &config, &caller)?;

        let state = storage::load_proposal_state(&env, proposal_id);
        access::require_ended(&state)?;

        let mut winner = WinningOption { index: 0, votes: 0 };
        for (index, option) in state.options.iter().enumerate() {
            if option.votes > winner.votes {
                winner = WinningOption {
                    index: index as u32,
                    votes: option.votes,
                };
            }
        }
        Ok(winner)
    }

    // ─────────────────────────────────────────────────────────
    // Treasury
    // ─────────────────────────────────────────────────────────

    /// Replace the voter-registration fee. Operator only; the new fee must be
    /// at least [`MIN_VOTING_FEE`].
    pub fn update_voting_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if new_fee < MIN_VOTING_FEE {
            return Err(Error::FeeTooLow);
        }
        storage::set_voting_fee(&env, new_fee);

        events::voting_fee_updated(&env, VotingFeeUpdated { fee: new_fee });
        Ok(())
    }

    /// Replace the proposal-creation fee. Operator only; the new fee must be
    /// at least [`MIN_PROPOSAL_FEE`].
    pub fn update_proposal_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        if new_fee < MIN_PROPOSAL_FEE {
            return Err(Error::FeeTooLow);
        }
        storage::set_proposal_fee(&env, new_fee);

        events::proposal_fee_updated(&env, ProposalFeeUpdated { fee: new_fee });
        Ok(())
    }

    /// Withdraw the entire accumulated fee balance to the operator.
    ///
    /// Fails with `Error::NothingToWithdraw` unless the treasury balance
    /// strictly exceeds [`MIN_WITHDRAW_BALANCE`]. The treasury is the
    /// contract's own fee-token balance, so there is no local balance to
    /// zero; the transfer is the final action of the call and a failed
    /// transfer aborts the whole operation.
    ///
    /// Returns the amount withdrawn.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        access::require_operator(&env, &caller)?;

        let token_client = token::Client::new(&env, &storage::get_fee_token(&env));
        let balance = token_client.balance(&env.current_contract_address());
        if balance <= MIN_WITHDRAW_BALANCE {
            return Err(Error::NothingToWithdraw);
        }

        if token_client
            .try_transfer(&env.current_contract_address(), &caller, &balance)
            .is_err()
        {
            return Err(Error::WithdrawalTransferFailed);
        }

        events::funds_withdrawn(
            &env,
            FundsWithdrawn {
                operator: caller,
                amount: balance,
            },
        );
        Ok(balance)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a proposal by id.
    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, Error> {
        access::require_valid_id(&env, proposal_id)?;
        Ok(storage::load_proposal(&env, proposal_id))
    }

    /// Number of options a proposal currently holds.
    pub fn get_option_count(env: Env, proposal_id: u64) -> Result<u32, Error> {
        access::require_valid_id(&env, proposal_id)?;
        Ok(storage::load_proposal_state(&env, proposal_id).options.len())
    }

    /// Name of the option at `option_index` within a proposal.
    pub fn get_option_name(env: Env, proposal_id: u64, option_index: u32) -> Result<String, Error> {
        access::require_valid_id(&env, proposal_id)?;
        let state = storage::load_proposal_state(&env, proposal_id);
        state
            .options
            .get(option_index)
            .map(|option| option.name)
            .ok_or(Error::InvalidOptionId)
    }

    /// Ids of every proposal `owner` has created, in creation order.
    /// Fails with `Error::NoProposalsForOwner` if there are none.
    pub fn get_proposals_by_owner(env: Env, owner: Address) -> Result<Vec<u64>, Error> {
        let ids = storage::proposals_of(&env, &owner);
        if ids.is_empty() {
            return Err(Error::NoProposalsForOwner);
        }
        Ok(ids)
    }

    /// The operator identity fixed at initialisation.
    pub fn operator(env: Env) -> Address {
        storage::get_operator(&env)
    }

    /// Current proposal-creation fee.
    pub fn proposal_fee(env: Env) -> i128 {
        storage::get_proposal_fee(&env)
    }

    /// Current voter-registration fee.
    pub fn voting_fee(env: Env) -> i128 {
        storage::get_voting_fee(&env)
    }

    /// Highest proposal id assigned so far; 0 when no proposal exists yet.
    pub fn proposal_count(env: Env) -> u64 {
        storage::proposal_count(&env)
    }

    /// `true` if `who` has registered as a voter.
    pub fn is_registered(env: Env, who: Address) -> bool {
        storage::is_registered(&env, &who)
    }

    /// `true` if `who` has already voted on the given proposal.
    pub fn has_voted(env: Env, proposal_id: u64, who: Address) -> bool {
        storage::has_voted(&env, proposal_id, &who)
    }
}
