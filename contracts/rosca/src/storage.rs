use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::ContractError;
use crate::types::{DataKey, GroupConfig, Participant, RoundInfo};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Config ---

pub fn get_config(env: &Env) -> GroupConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn set_config(env: &Env, config: &GroupConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// --- Round Counter ---

pub fn get_current_round(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentRound)
        .unwrap_or(0)
}

pub fn set_current_round(env: &Env, round: u32) {
    env.storage().instance().set(&DataKey::CurrentRound, &round);
    extend_instance_ttl(env);
}

// --- Participants ---

pub fn get_participant_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ParticipantCount)
        .unwrap_or(0)
}

pub fn set_participant_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ParticipantCount, &count);
    extend_instance_ttl(env);
}

pub fn get_participant(env: &Env, address: &Address) -> Option<Participant> {
    let key = DataKey::Participant(address.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_participant(env: &Env, participant: &Participant) {
    let key = DataKey::Participant(participant.address.clone());
    env.storage().persistent().set(&key, participant);
    extend_persistent_ttl(env, &key);

    let key = DataKey::ParticipantAt(participant.order);
    env.storage().persistent().set(&key, &participant.address);
    extend_persistent_ttl(env, &key);
}

pub fn get_participant_at(env: &Env, order: u32) -> Option<Address> {
    let key = DataKey::ParticipantAt(order);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

// --- Rounds ---

pub fn get_round(env: &Env, index: u32) -> Option<RoundInfo> {
    let key = DataKey::Round(index);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_round(env: &Env, round_info: &RoundInfo) {
    let key = DataKey::Round(round_info.index);
    env.storage().persistent().set(&key, round_info);
    extend_persistent_ttl(env, &key);
}

// --- Contribution Records ---

pub fn has_contributed(env: &Env, round: u32, participant: &Address) -> bool {
    let key = DataKey::Contributed(round, participant.clone());
    let result = env.storage().persistent().get(&key).unwrap_or(false);
    if result {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_contributed(env: &Env, round: u32, participant: &Address) {
    let key = DataKey::Contributed(round, participant.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
