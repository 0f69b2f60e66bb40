use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::ledger;
use crate::registry;
use crate::types::{Transaction, TransactionStatus};

/// Holds tokens and releases them once a quorum of signers approves a
/// transfer request.
#[contract]
pub struct QuorumMultisig;

#[contractimpl]
impl QuorumMultisig {
    pub fn __constructor(env: Env, quorum: u32, signers: Vec<Address>) {
        if let Err(err) = registry::register(&env, quorum, signers) {
            panic_with_error!(&env, err);
        }
    }

    /// Creates a pending transfer of `amount` of `token` to `recipient`.
    ///
    /// The initiator counts as the first approval. Returns the new transaction id.
    pub fn initiate_transfer(
        env: Env,
        initiator: Address,
        token: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, MultisigError> {
        initiator.require_auth();
        ledger::initiate(&env, initiator, token, recipient, amount)
    }

    /// Records an approval. The approval that reaches the quorum also moves the
    /// tokens; if that transfer fails the approval is not recorded.
    pub fn approve_transfer(
        env: Env,
        approver: Address,
        transaction_id: u64,
    ) -> Result<(), MultisigError> {
        approver.require_auth();
        ledger::approve(&env, approver, transaction_id)?;
        Ok(())
    }

    pub fn has_signed(env: Env, signer: Address, transaction_id: u64) -> bool {
        ledger::has_signed(&env, &signer, transaction_id)
    }

    pub fn get_transaction(env: Env, transaction_id: u64) -> Result<Transaction, MultisigError> {
        ledger::get(&env, transaction_id)
    }

    pub fn transaction_status(
        env: Env,
        transaction_id: u64,
    ) -> Result<TransactionStatus, MultisigError> {
        Ok(ledger::get(&env, transaction_id)?.status())
    }

    pub fn approvers(env: Env, transaction_id: u64) -> Result<Vec<Address>, MultisigError> {
        ledger::approvers(&env, transaction_id)
    }

    pub fn transaction_count(env: Env) -> u64 {
        ledger::transaction_count(&env)
    }

    pub fn is_valid_signer(env: Env, signer: Address) -> bool {
        registry::is_valid_signer(&env, &signer)
    }

    pub fn quorum(env: Env) -> u32 {
        registry::quorum(&env)
    }

    pub fn signer_count(env: Env) -> u32 {
        registry::signer_count(&env)
    }

    pub fn signers(env: Env) -> Vec<Address> {
        registry::signers(&env)
    }
}
