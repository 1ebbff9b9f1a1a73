use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidContribution = 1,
    AlreadyRegistered = 2,
    NotRegistered = 3,
    AlreadyContributed = 4,
    NotRoundRecipient = 5,
    RoundNotFunded = 6,
    CycleComplete = 7,
    GroupFull = 8,
    InvalidConfiguration = 9,
    RoundNotFound = 10,
    RoundAlreadyClaimed = 11,
    AwaitingCreator = 12,
    NotInitialized = 13,
}
