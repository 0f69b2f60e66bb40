use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    InsufficientSigners = 1,
    DuplicateSigner = 2,
    QuorumTooSmall = 3,
    QuorumExceedsSigners = 4,
    UnauthorizedSigner = 5,
    InvalidAmount = 6,
    UnknownTransaction = 7,
    AlreadyCompleted = 8,
    DuplicateApproval = 9,
    ExternalTransferFailed = 10,
}
