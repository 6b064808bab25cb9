use anchor_lang::prelude::*;

#[event]
pub struct StablecoinInitialized {
    pub config: Pubkey,
    pub default_admin: Pubkey,
    pub reserve_auditor: Pubkey,
    pub treasury_wallet: Pubkey,
    pub name: String,
    pub symbol: String,
    pub total_supply: u128,
    pub timestamp: i64,
}

#[event]
pub struct Minted {
    pub config: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
    pub timestamp: i64,
}

#[event]
pub struct Burned {
    pub config: Pubkey,
    pub from: Pubkey,
    pub amount: u128,
    pub timestamp: i64,
}

#[event]
pub struct ReserveUpdated {
    pub config: Pubkey,
    pub new_value: u128,
    pub timestamp: i64,
}

#[event]
pub struct ReserveRatioUpdated {
    pub config: Pubkey,
    pub new_ratio: u128,
    pub timestamp: i64,
}

#[event]
pub struct AddressFrozen {
    pub config: Pubkey,
    pub address: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AddressUnfrozen {
    pub config: Pubkey,
    pub address: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FrozenAddressWiped {
    pub config: Pubkey,
    pub address: Pubkey,
    pub amount: u128,
    pub timestamp: i64,
}

#[event]
pub struct FeePercentageUpdated {
    pub config: Pubkey,
    pub bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct Paused {
    pub config: Pubkey,
    pub account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct Unpaused {
    pub config: Pubkey,
    pub account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RoleGranted {
    pub config: Pubkey,
    pub role: u8,
    pub account: Pubkey,
    pub sender: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RoleRevoked {
    pub config: Pubkey,
    pub role: u8,
    pub account: Pubkey,
    pub sender: Pubkey,
    pub timestamp: i64,
}
