use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage;
use crate::types::{CycleStatus, GroupConfig, Participant, RoundInfo};

pub fn create_group(
    env: &Env,
    creator: Address,
    token: Address,
    total_participants: u32,
    total_amount: i128,
) -> Result<(), ContractError> {
    if total_participants == 0 || total_amount <= 0 {
        return Err(ContractError::InvalidConfiguration);
    }

    // Shares must divide the pool exactly, no remainder is ever tracked.
    let participants = i128::from(total_participants);
    if total_amount % participants != 0 {
        return Err(ContractError::InvalidConfiguration);
    }

    let config = GroupConfig {
        creator,
        token,
        total_participants,
        total_amount,
        contribution_amount: total_amount / participants,
    };

    storage::set_config(env, &config);
    storage::set_current_round(env, 0);
    storage::set_participant_count(env, 0);

    env.events().publish(
        (crate::symbol_short!("grp_creat"),),
        (total_participants, total_amount),
    );

    Ok(())
}

/// Admits `participant` as the next member. The payment always funds round 0,
/// whichever round the participant will eventually be paid in.
pub fn register_participant(
    env: &Env,
    participant: Address,
    amount: i128,
) -> Result<u32, ContractError> {
    participant.require_auth();

    let config = storage::get_config(env);

    if storage::get_current_round(env) >= config.total_participants {
        return Err(ContractError::CycleComplete);
    }

    if amount != config.contribution_amount {
        return Err(ContractError::InvalidContribution);
    }

    if storage::get_participant(env, &participant).is_some() {
        return Err(ContractError::AlreadyRegistered);
    }

    let order = storage::get_participant_count(env);
    if order >= config.total_participants {
        return Err(ContractError::GroupFull);
    }

    if order == 0 && participant != config.creator {
        return Err(ContractError::AwaitingCreator);
    }

    let token_client = soroban_sdk::token::Client::new(env, &config.token);
    token_client.transfer(&participant, &env.current_contract_address(), &amount);

    storage::set_participant(
        env,
        &Participant {
            address: participant.clone(),
            order,
            paid_out: false,
        },
    );
    storage::set_participant_count(env, order + 1);

    // The participant's own payout round
    storage::set_round(
        env,
        &RoundInfo {
            index: order,
            recipient: participant.clone(),
            claimed: false,
            total_contributed: 0,
        },
    );

    let mut first_round = storage::get_round(env, 0).ok_or(ContractError::RoundNotFound)?;
    first_round.total_contributed += amount;
    storage::set_round(env, &first_round);
    storage::set_contributed(env, 0, &participant);

    env.events()
        .publish((crate::symbol_short!("reg"), participant.clone()), order);
    env.events().publish(
        (crate::symbol_short!("contrib"), participant),
        (0u32, amount),
    );

    Ok(order)
}

pub fn get_config(env: &Env) -> GroupConfig {
    storage::get_config(env)
}

pub fn get_participant(env: &Env, participant: Address) -> Result<Participant, ContractError> {
    storage::get_participant(env, &participant).ok_or(ContractError::NotRegistered)
}

pub fn participant_count(env: &Env) -> u32 {
    storage::get_participant_count(env)
}

pub fn get_status(env: &Env) -> CycleStatus {
    let config = storage::get_config(env);

    if storage::get_current_round(env) >= config.total_participants {
        CycleStatus::Completed
    } else if storage::get_participant_count(env) < config.total_participants {
        CycleStatus::Registering
    } else {
        CycleStatus::Active
    }
}
