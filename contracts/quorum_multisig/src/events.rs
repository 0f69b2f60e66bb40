use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionInitiated {
    #[topic]
    pub id: u64,
    pub initiator: Address,
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionApproved {
    #[topic]
    pub id: u64,
    pub signer: Address,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCompleted {
    #[topic]
    pub id: u64,
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
}
