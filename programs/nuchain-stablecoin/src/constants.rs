pub const ROLE_DEFAULT_ADMIN: u8 = 0x01;
pub const ROLE_ADMIN: u8 = 0x02;
pub const ROLE_SUPPLY_CONTROLLER: u8 = 0x04;
pub const ROLE_ASSET_PROTECTION: u8 = 0x08;
pub const ROLE_TREASURY: u8 = 0x10;

pub const VALID_ROLE_MASK: u8 = 0x1F;

// Allowed-role sets, one per operation family.
pub const SUPPLY_ROLES: u8 = ROLE_DEFAULT_ADMIN | ROLE_ADMIN | ROLE_SUPPLY_CONTROLLER;
pub const RESERVE_ROLES: u8 = ROLE_DEFAULT_ADMIN | ROLE_ADMIN;
pub const ASSET_PROTECTION_ROLES: u8 = ROLE_DEFAULT_ADMIN | ROLE_ADMIN | ROLE_ASSET_PROTECTION;
pub const FEE_ROLES: u8 = ROLE_DEFAULT_ADMIN | ROLE_ADMIN | ROLE_TREASURY;
pub const PAUSE_ROLES: u8 = ROLE_DEFAULT_ADMIN | ROLE_ADMIN;
pub const ROLE_ADMIN_ROLES: u8 = ROLE_DEFAULT_ADMIN;

pub const TOKEN_NAME: &str = "NuChain Stablecoin";
pub const TOKEN_SYMBOL: &str = "USDN";
pub const DECIMALS: u8 = 18;

pub const RATIO_SCALE: u128 = 1_000_000_000_000_000_000;
pub const INITIAL_SUPPLY: u128 = 1_000_000_000 * RATIO_SCALE;
pub const MAX_SUPPLY: u128 = 2_000_000_000 * RATIO_SCALE;
pub const INITIAL_RESERVE_RATIO: u128 = RATIO_SCALE;

pub const BPS_DENOMINATOR: u128 = 10_000;
pub const MAX_TRANSACTION_FEE_BPS: u16 = 1_000;

pub const STABLECOIN_SEED: &[u8] = b"stablecoin";
pub const ROLE_SEED: &[u8] = b"role";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const FREEZE_SEED: &[u8] = b"freeze";
