use anchor_lang::prelude::*;

use crate::constants::{LINK_ROLES, RECORD_ROLES, ROLE_DEFAULT_ADMIN, VALID_ROLE_MASK};
use crate::errors::AuditorError;

/// Latest attested reserve figure and the ledger allowed to query it.
#[account]
#[derive(Debug, Default, PartialEq)]
pub struct AuditorConfig {
    pub instance: Pubkey,
    pub stable_coin: Pubkey,
    pub recorded_reserve: u128,
    pub last_recorded_at: i64,
    pub last_recorded_by: Pubkey,
    pub record_count: u64,
    pub default_admin_count: u32,
    pub is_initialized: bool,
    pub bump: u8,
}

impl AuditorConfig {
    pub const INIT_SPACE: usize = 256;

    pub fn initialize(
        &mut self,
        instance: Pubkey,
        admin_role: &mut AuditorRole,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized, AuditorError::AlreadyInitialized);

        self.instance = instance;
        self.stable_coin = Pubkey::default();
        self.recorded_reserve = 0;
        self.last_recorded_at = 0;
        self.last_recorded_by = Pubkey::default();
        self.record_count = 0;
        self.default_admin_count = 1;
        self.is_initialized = true;
        self.bump = bump;

        admin_role.roles = ROLE_DEFAULT_ADMIN;
        Ok(())
    }

    /// Overwrites the attested figure; earlier records are not accumulated.
    pub fn record_reserve(&mut self, caller: &AuditorRole, value: u128, now: i64) -> Result<()> {
        caller.require_any(RECORD_ROLES)?;

        self.recorded_reserve = value;
        self.last_recorded_at = now;
        self.last_recorded_by = caller.member;
        self.record_count = self.record_count.saturating_add(1);
        Ok(())
    }

    pub fn set_stable_coin(&mut self, caller: &AuditorRole, stable_coin: Pubkey) -> Result<()> {
        caller.require_any(LINK_ROLES)?;
        require!(
            stable_coin != Pubkey::default(),
            AuditorError::ZeroStablecoinAddress
        );

        self.stable_coin = stable_coin;
        Ok(())
    }

    /// Answers whether the attested figure covers `required_reserve`.
    /// Only the linked ledger may ask.
    pub fn verify(&self, caller: Pubkey, required_reserve: u128) -> Result<bool> {
        require!(
            self.stable_coin != Pubkey::default(),
            AuditorError::StablecoinNotLinked
        );
        require_keys_eq!(
            caller,
            self.stable_coin,
            AuditorError::UnregisteredStablecoin
        );
        Ok(self.recorded_reserve >= required_reserve)
    }

    /// Returns `true` when membership actually changed.
    pub fn grant_role(
        &mut self,
        caller: &AuditorRole,
        target: &mut AuditorRole,
        role: u8,
    ) -> Result<bool> {
        caller.require_any(ROLE_DEFAULT_ADMIN)?;
        require_single_role(role)?;

        if target.roles & role != 0 {
            return Ok(false);
        }
        if role == ROLE_DEFAULT_ADMIN {
            self.default_admin_count = self
                .default_admin_count
                .checked_add(1)
                .ok_or(AuditorError::InvalidRoles)?;
        }
        target.roles |= role;
        Ok(true)
    }

    pub fn revoke_role(
        &mut self,
        caller: &AuditorRole,
        target: &mut AuditorRole,
        role: u8,
    ) -> Result<bool> {
        caller.require_any(ROLE_DEFAULT_ADMIN)?;
        require_single_role(role)?;

        if target.roles & role == 0 {
            return Ok(false);
        }
        if role == ROLE_DEFAULT_ADMIN {
            require!(
                self.default_admin_count > 1,
                AuditorError::LastDefaultAdmin
            );
            self.default_admin_count -= 1;
        }
        target.roles &= !role;
        Ok(true)
    }
}

#[account]
#[derive(Debug, Default, PartialEq)]
pub struct AuditorRole {
    pub auditor: Pubkey,
    pub member: Pubkey,
    pub roles: u8,
    pub bump: u8,
}

impl AuditorRole {
    pub const INIT_SPACE: usize = 128;

    /// Stand-in for a member whose role account was never created.
    pub fn vacant(auditor: Pubkey, member: Pubkey) -> Self {
        Self {
            auditor,
            member,
            roles: 0,
            bump: 0,
        }
    }

    pub fn has_any(&self, mask: u8) -> bool {
        self.roles & mask != 0
    }

    pub fn require_any(&self, mask: u8) -> Result<()> {
        require!(self.has_any(mask), AuditorError::Unauthorized);
        Ok(())
    }
}

pub fn require_single_role(role: u8) -> Result<()> {
    require!(
        role != 0 && role & role.wrapping_sub(1) == 0 && role & !VALID_ROLE_MASK == 0,
        AuditorError::InvalidRoles
    );
    Ok(())
}
