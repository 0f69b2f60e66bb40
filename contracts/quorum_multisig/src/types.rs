use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Registry settings and the id counter live in instance storage. Each
/// transaction record and approval marker is its own persistent entry.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Quorum,
    SignerCount,
    Signers,
    Signer(Address),
    TransactionCount,
    Transaction(u64),
    Approved(u64, Address),
}

/// A transfer request and its approval progress.
///
/// `approvals` starts at 1 for the initiator and only grows. `completed`
/// flips once, in the approval that brings `approvals` up to the quorum.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub sender: Address,
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
    pub approvals: u32,
    pub completed: bool,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransactionStatus {
    Pending,
    Completed,
}

impl Transaction {
    pub fn status(&self) -> TransactionStatus {
        if self.completed {
            TransactionStatus::Completed
        } else {
            TransactionStatus::Pending
        }
    }
}
