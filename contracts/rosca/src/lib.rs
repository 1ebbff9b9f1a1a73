#![no_std]

use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, Env, Vec};

mod contribution;
mod errors;
mod group;
mod payout;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::*;

#[contract]
pub struct RoscaContract;

#[contractimpl]
impl RoscaContract {
    /// Fix the group size and pool value. The creator must then register
    /// before anyone else, which makes them the recipient of round 0.
    pub fn __constructor(
        env: Env,
        creator: Address,
        token: Address,
        total_participants: u32,
        total_amount: i128,
    ) {
        if let Err(err) =
            group::create_group(&env, creator, token, total_participants, total_amount)
        {
            panic_with_error!(&env, err);
        }
    }

    // ─── Registration ───────────────────────────────────────────────

    /// Join the group by paying exactly one contribution, which funds round 0.
    /// Returns the participant's position, which is also their payout round.
    pub fn register_participant(
        env: Env,
        participant: Address,
        amount: i128,
    ) -> Result<u32, ContractError> {
        group::register_participant(&env, participant, amount)
    }

    /// Get a registered participant.
    pub fn participants(env: Env, participant: Address) -> Result<Participant, ContractError> {
        group::get_participant(&env, participant)
    }

    /// Number of participants registered so far.
    pub fn participant_count(env: Env) -> u32 {
        group::participant_count(&env)
    }

    // ─── Configuration ──────────────────────────────────────────────

    pub fn get_config(env: Env) -> GroupConfig {
        group::get_config(&env)
    }

    pub fn total_participants(env: Env) -> u32 {
        group::get_config(&env).total_participants
    }

    pub fn total_amount(env: Env) -> i128 {
        group::get_config(&env).total_amount
    }

    pub fn contribution_amount(env: Env) -> i128 {
        group::get_config(&env).contribution_amount
    }

    pub fn token(env: Env) -> Address {
        group::get_config(&env).token
    }

    // ─── Rounds & Contributions ─────────────────────────────────────

    /// Index of the round currently being funded. Equals `total_participants`
    /// once every round has been paid out.
    pub fn current_round(env: Env) -> u32 {
        storage::get_current_round(&env)
    }

    pub fn get_status(env: Env) -> CycleStatus {
        group::get_status(&env)
    }

    /// Pay this round's contribution.
    pub fn contribute(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        contribution::contribute(&env, participant, amount)
    }

    /// Get a round by index.
    pub fn rounds(env: Env, index: u32) -> Result<RoundInfo, ContractError> {
        contribution::get_round(&env, index)
    }

    /// Check if a participant has paid into the current round.
    pub fn has_contributed(env: Env, participant: Address) -> bool {
        contribution::has_contributed(&env, participant)
    }

    // ─── Payouts ────────────────────────────────────────────────────

    /// Claim the current round's pool. Only the round's recipient can call
    /// this, and only once every participant has contributed.
    pub fn distribute_pool(env: Env, participant: Address) -> Result<(), ContractError> {
        payout::distribute_pool(&env, participant)
    }

    /// Get the payout order (registration order).
    pub fn get_payout_order(env: Env) -> Vec<Address> {
        payout::get_payout_order(&env)
    }

    /// Get the current round's recipient.
    pub fn get_current_recipient(env: Env) -> Result<Address, ContractError> {
        payout::get_current_recipient(&env)
    }
}
