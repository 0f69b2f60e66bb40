//! Signer set and quorum threshold.
//!
//! Written once by the contract constructor and only read afterwards.

use soroban_sdk::{log, Address, Env, Map, Vec};

use crate::errors::MultisigError;
use crate::types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

pub const MIN_QUORUM: u32 = 2;

/// Checks a signer list and quorum before anything is stored.
///
/// The checks run in a fixed order: signer count, duplicates, quorum lower
/// bound, quorum upper bound. The first failing one is reported.
pub fn validate(env: &Env, quorum: u32, signers: &Vec<Address>) -> Result<(), MultisigError> {
    if signers.len() <= 1 {
        return Err(MultisigError::InsufficientSigners);
    }

    let mut seen: Map<Address, bool> = Map::new(env);
    for signer in signers.iter() {
        if seen.contains_key(signer.clone()) {
            return Err(MultisigError::DuplicateSigner);
        }
        seen.set(signer, true);
    }

    if quorum < MIN_QUORUM {
        return Err(MultisigError::QuorumTooSmall);
    }

    if quorum > signers.len() {
        return Err(MultisigError::QuorumExceedsSigners);
    }

    Ok(())
}

pub fn register(env: &Env, quorum: u32, signers: Vec<Address>) -> Result<(), MultisigError> {
    validate(env, quorum, &signers)?;

    let storage = env.storage().instance();
    storage.set(&DataKey::Quorum, &quorum);
    storage.set(&DataKey::SignerCount, &signers.len());
    for signer in signers.iter() {
        storage.set(&DataKey::Signer(signer), &true);
    }
    storage.set(&DataKey::Signers, &signers);
    storage.set(&DataKey::TransactionCount, &0u64);
    storage.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    log!(env, "signer registry created", quorum, signers.len());
    Ok(())
}

pub fn is_valid_signer(env: &Env, signer: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Signer(signer.clone()))
}

pub fn require_signer(env: &Env, signer: &Address) -> Result<(), MultisigError> {
    if !is_valid_signer(env, signer) {
        log!(env, "rejected unauthorized signer", signer.clone());
        return Err(MultisigError::UnauthorizedSigner);
    }
    Ok(())
}

pub fn quorum(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Quorum)
        .unwrap_or(0)
}

pub fn signer_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SignerCount)
        .unwrap_or(0)
}

pub fn signers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .unwrap_or(Vec::new(env))
}
