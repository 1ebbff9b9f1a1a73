use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage;
use crate::types::RoundInfo;

pub fn contribute(env: &Env, participant: Address, amount: i128) -> Result<(), ContractError> {
    participant.require_auth();

    let config = storage::get_config(env);
    let current_round = storage::get_current_round(env);

    if current_round >= config.total_participants {
        return Err(ContractError::CycleComplete);
    }

    if storage::get_participant(env, &participant).is_none() {
        return Err(ContractError::NotRegistered);
    }

    if amount != config.contribution_amount {
        return Err(ContractError::InvalidContribution);
    }

    // Registration already counts as the round 0 contribution
    if storage::has_contributed(env, current_round, &participant) {
        return Err(ContractError::AlreadyContributed);
    }

    let mut round_info =
        storage::get_round(env, current_round).ok_or(ContractError::RoundNotFound)?;

    let token_client = soroban_sdk::token::Client::new(env, &config.token);
    token_client.transfer(&participant, &env.current_contract_address(), &amount);

    round_info.total_contributed += amount;
    storage::set_round(env, &round_info);
    storage::set_contributed(env, current_round, &participant);

    env.events().publish(
        (crate::symbol_short!("contrib"), participant),
        (current_round, amount),
    );

    Ok(())
}

pub fn get_round(env: &Env, index: u32) -> Result<RoundInfo, ContractError> {
    storage::get_round(env, index).ok_or(ContractError::RoundNotFound)
}

/// Whether `participant` has paid into the round that is current right now.
pub fn has_contributed(env: &Env, participant: Address) -> bool {
    let config = storage::get_config(env);
    let current_round = storage::get_current_round(env);

    if current_round >= config.total_participants {
        return false;
    }

    storage::has_contributed(env, current_round, &participant)
}
