use anchor_lang::prelude::*;

#[event]
pub struct AuditorInitialized {
    pub auditor: Pubkey,
    pub default_admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ReserveRecorded {
    pub auditor: Pubkey,
    pub value: u128,
    pub recorded_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StableCoinAddressUpdated {
    pub auditor: Pubkey,
    pub stable_coin: Pubkey,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuditorRoleGranted {
    pub auditor: Pubkey,
    pub account: Pubkey,
    pub role: u8,
    pub granted_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AuditorRoleRevoked {
    pub auditor: Pubkey,
    pub account: Pubkey,
    pub role: u8,
    pub revoked_by: Pubkey,
    pub timestamp: i64,
}
