#![no_std]

mod errors;
mod events;
mod ledger;
mod multisig;
mod registry;
mod types;

pub use errors::MultisigError;
pub use events::{TransactionApproved, TransactionCompleted, TransactionInitiated};
pub use multisig::{QuorumMultisig, QuorumMultisigClient};
pub use types::{Transaction, TransactionStatus};
