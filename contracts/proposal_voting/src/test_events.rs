extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal, Vec,
};

use crate::{
    FundsWithdrawn, OptionsAdded, ProposalCreated, ProposalEnded, ProposalFeeUpdated,
    ProposalVoting, ProposalVotingClient, VoteCast, VoterRegistered, VotingFeeUpdated,
    DEFAULT_PROPOSAL_FEE, DEFAULT_VOTING_FEE, MIN_PROPOSAL_FEE, MIN_VOTING_FEE, UNIT,
};

#[allow(clippy::type_complexity)]
fn setup() -> (
    Env,
    ProposalVotingClient<'static>,
    Address,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ProposalVoting, ());
    let client = ProposalVotingClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let fee_token = token::StellarAssetClient::new(&env, &sac.address());
    client.init(&operator, &sac.address());

    (env, client, operator, fee_token)
}

fn funded(env: &Env, sac: &token::StellarAssetClient, amount: i128) -> Address {
    let addr = Address::generate(env);
    sac.mint(&addr, &amount);
    addr
}

fn options(env: &Env) -> Vec<String> {
    vec![
        env,
        String::from_str(env, "Yes"),
        String::from_str(env, "No"),
    ]
}

#[test]
fn test_proposal_created_event() {
    let (env, client, _operator, sac) = setup();
    let owner = funded(&env, &sac, UNIT);
    let statement = String::from_str(&env, "Fund the library?");

    let id = client.create_proposal(&owner, &DEFAULT_PROPOSAL_FEE, &statement, &options(&env));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: ("created", proposal_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProposalCreated {
            proposal_id: id,
            owner: owner.clone(),
            statement,
        }
    );
}

#[test]
fn test_options_added_event() {
    let (env, client, _operator, sac) = setup();
    let owner = funded(&env, &sac, UNIT);
    let statement = String::from_str(&env, "More choices?");
    let id = client.create_proposal(&owner, &DEFAULT_PROPOSAL_FEE, &statement, &options(&env));

    let extra = vec![&env, String::from_str(&env, "Abstain")];
    client.add_options(&owner, &id, &extra);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("opt_added").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: OptionsAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        OptionsAdded {
            proposal_id: id,
            options: extra,
        }
    );
}

#[test]
fn test_voter_registered_event() {
    let (env, client, _operator, sac) = setup();
    let voter = funded(&env, &sac, UNIT);

    client.register(&voter, &DEFAULT_VOTING_FEE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("regd").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // The event carries the amount actually paid, not the minimum fee.
    let event_data: VoterRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        VoterRegistered {
            voter: voter.clone(),
            amount: DEFAULT_VOTING_FEE,
        }
    );
}

#[test]
fn test_vote_cast_event() {
    let (env, client, _operator, sac) = setup();
    let owner = funded(&env, &sac, UNIT);
    let statement = String::from_str(&env, "Which?");
    let id = client.create_proposal(&owner, &DEFAULT_PROPOSAL_FEE, &statement, &options(&env));

    let voter = funded(&env, &sac, UNIT);
    client.register(&voter, &DEFAULT_VOTING_FEE);
    client.cast_vote(&voter, &id, &1);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("voted").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: VoteCast = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        VoteCast {
            proposal_id: id,
            option_index: 1,
            voter: voter.clone(),
        }
    );
}

#[test]
fn test_proposal_ended_event() {
    let (env, client, _operator, sac) = setup();
    let owner = funded(&env, &sac, UNIT);
    let statement = String::from_str(&env, "Done?");
    let id = client.create_proposal(&owner, &DEFAULT_PROPOSAL_FEE, &statement, &options(&env));

    client.end_proposal(&owner, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("ended").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalEnded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, ProposalEnded { proposal_id: id });
}

#[test]
fn test_fee_updated_events() {
    let (env, client, operator, _sac) = setup();

    client.update_voting_fee(&operator, &MIN_VOTING_FEE);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("vfee_set").into_val(&env)]
    );
    let event_data: VotingFeeUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, VotingFeeUpdated { fee: MIN_VOTING_FEE });

    client.update_proposal_fee(&operator, &MIN_PROPOSAL_FEE);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("pfee_set").into_val(&env)]
    );
    let event_data: ProposalFeeUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProposalFeeUpdated {
            fee: MIN_PROPOSAL_FEE
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, operator, sac) = setup();
    let statement = String::from_str(&env, "Fee source");

    // Three proposal fees push the treasury past the withdrawal minimum.
    for _ in 0..3 {
        let owner = funded(&env, &sac, UNIT);
        client.create_proposal(&owner, &DEFAULT_PROPOSAL_FEE, &statement, &options(&env));
    }

    client.withdraw(&operator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("withdrawn").into_val(&env)]
    );

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            operator: operator.clone(),
            amount: 3 * DEFAULT_PROPOSAL_FEE,
        }
    );
}
