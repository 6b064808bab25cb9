use anchor_lang::prelude::*;

#[error_code]
pub enum AuditorError {
    #[msg("Not Authorize to call this function")]
    Unauthorized,

    #[msg("Contract is already initialized")]
    AlreadyInitialized,

    #[msg("Invalid role bitmask")]
    InvalidRoles,

    #[msg("Cannot remove the last default admin")]
    LastDefaultAdmin,

    #[msg("Stablecoin address can't be zero")]
    ZeroStablecoinAddress,

    #[msg("Stablecoin address has not been set")]
    StablecoinNotLinked,

    #[msg("Caller is not the registered stablecoin")]
    UnregisteredStablecoin,

    #[msg("Role account does not belong to this auditor")]
    RoleAccountMismatch,
}
