//! Transfer requests and their approvals.
//!
//! A request is created with its initiator already counted as the first
//! approval. Each further approval from a distinct signer is counted, and the
//! approval that reaches the quorum performs the token transfer. Nothing is
//! written for that approval unless the transfer succeeds.

use soroban_sdk::{log, token, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events::{TransactionApproved, TransactionCompleted, TransactionInitiated};
use crate::registry;
use crate::types::{
    DataKey, Transaction, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

pub fn transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

pub fn get(env: &Env, transaction_id: u64) -> Result<Transaction, MultisigError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(transaction_id))
        .ok_or(MultisigError::UnknownTransaction)
}

pub fn has_signed(env: &Env, signer: &Address, transaction_id: u64) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Approved(transaction_id, signer.clone()))
        .unwrap_or(false)
}

/// Signers that have approved `transaction_id`, in signer-list order.
pub fn approvers(env: &Env, transaction_id: u64) -> Result<Vec<Address>, MultisigError> {
    get(env, transaction_id)?;

    let mut approved = Vec::new(env);
    for signer in registry::signers(env).iter() {
        if has_signed(env, &signer, transaction_id) {
            approved.push_back(signer);
        }
    }
    Ok(approved)
}

pub fn initiate(
    env: &Env,
    initiator: Address,
    token: Address,
    recipient: Address,
    amount: i128,
) -> Result<u64, MultisigError> {
    registry::require_signer(env, &initiator)?;

    if amount <= 0 {
        return Err(MultisigError::InvalidAmount);
    }

    let transaction_id = transaction_count(env) + 1;
    let transaction = Transaction {
        id: transaction_id,
        sender: initiator.clone(),
        recipient: recipient.clone(),
        token: token.clone(),
        amount,
        approvals: 1,
        completed: false,
    };

    let instance = env.storage().instance();
    instance.set(&DataKey::TransactionCount, &transaction_id);
    instance.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    save_transaction(env, &transaction);
    mark_approved(env, transaction_id, &initiator);

    TransactionInitiated {
        id: transaction_id,
        initiator: initiator.clone(),
        recipient,
        token,
        amount,
    }
    .publish(env);

    log!(env, "transaction initiated", transaction_id, initiator, amount);
    Ok(transaction_id)
}

pub fn approve(
    env: &Env,
    approver: Address,
    transaction_id: u64,
) -> Result<Transaction, MultisigError> {
    registry::require_signer(env, &approver)?;

    let mut transaction = get(env, transaction_id)?;

    if transaction.completed {
        return Err(MultisigError::AlreadyCompleted);
    }

    if has_signed(env, &approver, transaction_id) {
        return Err(MultisigError::DuplicateApproval);
    }

    transaction.approvals += 1;
    let reaches_quorum = transaction.approvals >= registry::quorum(env);

    // The transfer goes first so a failure leaves no approval behind.
    if reaches_quorum {
        execute_transfer(env, &transaction)?;
        transaction.completed = true;
    }

    mark_approved(env, transaction_id, &approver);
    save_transaction(env, &transaction);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    TransactionApproved {
        id: transaction_id,
        signer: approver.clone(),
        approvals: transaction.approvals,
    }
    .publish(env);
    log!(env, "transaction approved", transaction_id, approver, transaction.approvals);

    if reaches_quorum {
        TransactionCompleted {
            id: transaction_id,
            recipient: transaction.recipient.clone(),
            token: transaction.token.clone(),
            amount: transaction.amount,
        }
        .publish(env);
        log!(env, "transaction completed", transaction_id);
    }

    Ok(transaction)
}

fn save_transaction(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id);
    let storage = env.storage().persistent();
    storage.set(&key, transaction);
    storage.extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn mark_approved(env: &Env, transaction_id: u64, signer: &Address) {
    let key = DataKey::Approved(transaction_id, signer.clone());
    let storage = env.storage().persistent();
    storage.set(&key, &true);
    storage.extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn execute_transfer(env: &Env, transaction: &Transaction) -> Result<(), MultisigError> {
    let token_client = token::Client::new(env, &transaction.token);
    let multisig_address = env.current_contract_address();

    match token_client.try_transfer(&multisig_address, &transaction.recipient, &transaction.amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer failed", transaction.id, transaction.amount);
            Err(MultisigError::ExternalTransferFailed)
        }
    }
}
