use anchor_lang::prelude::*;

#[error_code]
pub enum StablecoinError {
    #[msg("Not Authorize to call this function")]
    Unauthorized,

    #[msg("Pausable: paused")]
    Paused,

    #[msg("Pausable: not paused")]
    NotPaused,

    #[msg("Mint exceeds MAX_SUPPLY")]
    SupplyCapExceeded,

    #[msg("Insufficient reserves")]
    InsufficientReserves,

    #[msg("Reserve verification failed")]
    ReserveVerificationFailed,

    #[msg("New Reserve value can't be equal to zero")]
    ZeroReserveValue,

    #[msg("Reserve ratio must be greater than zero")]
    ZeroReserveRatio,

    #[msg("Account already frozen")]
    AlreadyFrozen,

    #[msg("Account is not frozen")]
    NotFrozen,

    #[msg("Fee cannot exceed 10%")]
    FeeCapExceeded,

    #[msg("Contract is already initialized")]
    AlreadyInitialized,

    #[msg("Invalid role bitmask")]
    InvalidRoles,

    #[msg("Cannot remove the last default admin")]
    LastDefaultAdmin,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Account is frozen and cannot perform this action")]
    AccountFrozen,

    #[msg("Reserve auditor account does not match")]
    InvalidReserveAuditor,

    #[msg("Account does not belong to this stablecoin")]
    AccountMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,
}
