use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, RATIO_SCALE, VALID_ROLE_MASK};
use crate::errors::StablecoinError;
use crate::state::{FreezeEntry, RoleAccount};

pub fn has_any_role(roles: u8, mask: u8) -> bool {
    roles & mask != 0
}

/// Grant/revoke operate on exactly one known role bit.
pub fn require_single_role(role: u8) -> Result<()> {
    require!(
        role != 0 && role & role.wrapping_sub(1) == 0 && role & !VALID_ROLE_MASK == 0,
        StablecoinError::InvalidRoles
    );
    Ok(())
}

/// `amount * reserve_ratio / 10^18`, split on the scale so the product never
/// needs more than 128 bits unless the result itself does. `None` when the
/// result does not fit in a `u128`.
pub fn required_reserve(amount: u128, reserve_ratio: u128) -> Option<u128> {
    let amount_whole = amount / RATIO_SCALE;
    let amount_frac = amount % RATIO_SCALE;
    let ratio_whole = reserve_ratio / RATIO_SCALE;
    let ratio_frac = reserve_ratio % RATIO_SCALE;

    amount_whole
        .checked_mul(reserve_ratio)?
        .checked_add(amount_frac.checked_mul(ratio_whole)?)?
        .checked_add(amount_frac * ratio_frac / RATIO_SCALE)
}

pub fn fee_for(amount: u128, fee_bps: u16) -> Result<u128> {
    let fee = amount
        .checked_mul(fee_bps as u128)
        .ok_or(StablecoinError::Overflow)?
        / BPS_DENOMINATOR;
    Ok(fee)
}

/// Reads a role PDA that may never have been created. Absent means no roles.
pub fn load_role_account(
    account: &AccountInfo,
    config: Pubkey,
    member: Pubkey,
) -> Result<RoleAccount> {
    if account.data_is_empty() {
        return Ok(RoleAccount::vacant(config, member));
    }
    require_keys_eq!(*account.owner, crate::ID, StablecoinError::AccountMismatch);

    let data = account.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    let role = RoleAccount::try_deserialize(&mut slice)?;
    require_keys_eq!(role.config, config, StablecoinError::AccountMismatch);
    Ok(role)
}

/// Frozen-flag lookup for paths that only read the freeze registry.
pub fn is_frozen(account: &AccountInfo, config: Pubkey) -> Result<bool> {
    if account.data_is_empty() {
        return Ok(false);
    }
    require_keys_eq!(*account.owner, crate::ID, StablecoinError::AccountMismatch);

    let data = account.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    let entry = FreezeEntry::try_deserialize(&mut slice)?;
    require_keys_eq!(entry.config, config, StablecoinError::AccountMismatch);
    Ok(entry.is_frozen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        ROLE_ADMIN, ROLE_ASSET_PROTECTION, ROLE_DEFAULT_ADMIN, ROLE_TREASURY, SUPPLY_ROLES,
    };

    const E18: u128 = RATIO_SCALE;

    #[test]
    fn required_reserve_at_par() {
        assert_eq!(required_reserve(500 * E18, E18), Some(500 * E18));
        assert_eq!(required_reserve(0, E18), Some(0));
        assert_eq!(required_reserve(7, E18), Some(7));
    }

    #[test]
    fn required_reserve_scales_and_floors() {
        assert_eq!(required_reserve(100 * E18, 3 * E18 / 2).unwrap(), 150 * E18);
        assert_eq!(required_reserve(3, E18 / 2).unwrap(), 1);
        assert_eq!(required_reserve(E18 + 1, 3 * E18 / 2).unwrap(), 3 * E18 / 2 + 1);
    }

    #[test]
    fn required_reserve_handles_full_cap_without_overflow() {
        let cap = 2_000_000_000 * E18;
        assert_eq!(required_reserve(cap, E18).unwrap(), cap);
        assert_eq!(required_reserve(cap, 1_000 * E18).unwrap(), cap * 1_000);
    }

    #[test]
    fn required_reserve_past_u128_is_none() {
        assert!(required_reserve(u128::MAX, 2 * E18).is_none());
        assert!(required_reserve(2 * E18, u128::MAX).is_none());
    }

    #[test]
    fn fee_quote_uses_basis_points() {
        assert_eq!(fee_for(10_000, 1_000).unwrap(), 1_000);
        assert_eq!(fee_for(999, 1).unwrap(), 0);
        assert_eq!(fee_for(500 * E18, 25).unwrap(), 125 * E18 / 100);
    }

    #[test]
    fn single_role_validation() {
        assert!(require_single_role(ROLE_DEFAULT_ADMIN).is_ok());
        assert!(require_single_role(ROLE_TREASURY).is_ok());
        assert!(require_single_role(0).is_err());
        assert!(require_single_role(ROLE_ADMIN | ROLE_ASSET_PROTECTION).is_err());
        assert!(require_single_role(0x20).is_err());
    }

    #[test]
    fn role_masks() {
        assert!(has_any_role(ROLE_ADMIN, SUPPLY_ROLES));
        assert!(!has_any_role(ROLE_TREASURY, SUPPLY_ROLES));
        assert!(!has_any_role(0, SUPPLY_ROLES));
    }

    fn serialized<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    fn assert_mismatch<T: std::fmt::Debug>(result: Result<T>) {
        match result {
            Err(anchor_lang::error::Error::AnchorError(err)) => {
                assert_eq!(err.error_msg, "Account does not belong to this stablecoin")
            }
            other => panic!("expected account mismatch, got {:?}", other),
        }
    }

    #[test]
    fn untouched_role_account_reads_as_no_roles() {
        let (key, config, member) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let owner = Pubkey::default();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

        let role = load_role_account(&info, config, member).unwrap();
        assert_eq!(role, RoleAccount::vacant(config, member));
        assert!(role.require_any(ROLE_DEFAULT_ADMIN).is_err());
    }

    #[test]
    fn stored_role_account_is_decoded() {
        let (key, config, member) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let program = crate::ID;
        let mut lamports = 1u64;
        let mut data = serialized(&RoleAccount {
            config,
            member,
            roles: ROLE_ADMIN | ROLE_TREASURY,
            bump: 7,
        });
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program, false, 0);

        let role = load_role_account(&info, config, member).unwrap();
        assert_eq!(role.roles, ROLE_ADMIN | ROLE_TREASURY);
        assert_eq!(role.bump, 7);
    }

    #[test]
    fn role_account_from_another_program_or_ledger_is_rejected() {
        let (key, config, member) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let program = crate::ID;
        let foreign = Pubkey::new_unique();
        let role = RoleAccount {
            config,
            member,
            roles: ROLE_DEFAULT_ADMIN,
            bump: 0,
        };

        let mut lamports = 1u64;
        let mut data = serialized(&role);
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &foreign, false, 0);
        assert_mismatch(load_role_account(&info, config, member));

        let mut lamports = 1u64;
        let mut data = serialized(&role);
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program, false, 0);
        assert_mismatch(load_role_account(&info, Pubkey::new_unique(), member));
    }

    #[test]
    fn freeze_lookup() {
        let (key, config, wallet) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let program = crate::ID;

        let mut lamports = 0u64;
        let mut empty: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut empty, &program, false, 0);
        assert!(!is_frozen(&info, config).unwrap());

        let entry = FreezeEntry {
            config,
            wallet,
            is_frozen: true,
            frozen_at: 42,
            frozen_by: Pubkey::new_unique(),
            bump: 0,
        };
        let mut lamports = 1u64;
        let mut data = serialized(&entry);
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program, false, 0);
        assert!(is_frozen(&info, config).unwrap());
        assert_mismatch(is_frozen(&info, Pubkey::new_unique()));

        let foreign = Pubkey::new_unique();
        let mut lamports = 1u64;
        let mut data = serialized(&FreezeEntry {
            is_frozen: false,
            ..entry
        });
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &foreign, false, 0);
        assert_mismatch(is_frozen(&info, config));
    }
}
