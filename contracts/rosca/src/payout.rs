use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::storage;

/// Pays the current round's pool to its recipient and opens the next round.
/// A failing token transfer aborts the whole invocation, leaving the round
/// unclaimed and the counter where it was.
pub fn distribute_pool(env: &Env, participant: Address) -> Result<(), ContractError> {
    participant.require_auth();

    let config = storage::get_config(env);
    let current_round = storage::get_current_round(env);

    if current_round >= config.total_participants {
        return Err(ContractError::CycleComplete);
    }

    let mut member =
        storage::get_participant(env, &participant).ok_or(ContractError::NotRegistered)?;

    let mut round_info =
        storage::get_round(env, current_round).ok_or(ContractError::RoundNotFound)?;

    if round_info.recipient != participant {
        return Err(ContractError::NotRoundRecipient);
    }

    if round_info.claimed {
        return Err(ContractError::RoundAlreadyClaimed);
    }

    if round_info.total_contributed != config.total_amount {
        return Err(ContractError::RoundNotFunded);
    }

    let token_client = soroban_sdk::token::Client::new(env, &config.token);
    token_client.transfer(
        &env.current_contract_address(),
        &participant,
        &config.total_amount,
    );

    round_info.claimed = true;
    storage::set_round(env, &round_info);

    member.paid_out = true;
    storage::set_participant(env, &member);

    let next_round = current_round + 1;
    storage::set_current_round(env, next_round);

    env.events().publish(
        (crate::symbol_short!("payout"), participant),
        (current_round, config.total_amount),
    );

    if next_round >= config.total_participants {
        env.events()
            .publish((crate::symbol_short!("cyc_comp"),), next_round);
    } else {
        env.events()
            .publish((crate::symbol_short!("rnd_new"),), next_round);
    }

    Ok(())
}

/// Registered participants in the order they will be paid.
pub fn get_payout_order(env: &Env) -> Vec<Address> {
    let mut order = Vec::new(env);
    for index in 0..storage::get_participant_count(env) {
        if let Some(address) = storage::get_participant_at(env, index) {
            order.push_back(address);
        }
    }
    order
}

pub fn get_current_recipient(env: &Env) -> Result<Address, ContractError> {
    let config = storage::get_config(env);
    let current_round = storage::get_current_round(env);

    if current_round >= config.total_participants {
        return Err(ContractError::CycleComplete);
    }

    let round_info =
        storage::get_round(env, current_round).ok_or(ContractError::RoundNotFound)?;

    Ok(round_info.recipient)
}
