use soroban_sdk::{contracttype, Address};

/// Where the group is in its lifecycle.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleStatus {
    Registering, // Fewer than `total_participants` registered
    Active,      // Everyone registered, rounds in progress
    Completed,   // Every round has been paid out
}

/// Immutable group parameters, fixed at deployment.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct GroupConfig {
    /// Always participant 0 and recipient of round 0.
    pub creator: Address,
    pub token: Address,
    pub total_participants: u32,
    /// Value of the whole pool paid out each round.
    pub total_amount: i128,
    /// `total_amount / total_participants`, always exact.
    pub contribution_amount: i128,
}

/// A registered member of the group.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    pub address: Address,
    /// Registration position; also the round this participant is paid in.
    pub order: u32,
    pub paid_out: bool,
}

/// Funding and payout state of a single round.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RoundInfo {
    pub index: u32,
    pub recipient: Address,
    pub claimed: bool,
    pub total_contributed: i128,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    CurrentRound,
    ParticipantCount,
    Participant(Address),
    ParticipantAt(u32),
    Round(u32),
    Contributed(u32, Address),
}
