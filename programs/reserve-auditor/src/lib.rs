use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;

use constants::{AUDITOR_ROLE_SEED, AUDITOR_SEED};
use errors::AuditorError;
use events::{
    AuditorInitialized, AuditorRoleGranted, AuditorRoleRevoked, ReserveRecorded,
    StableCoinAddressUpdated,
};
use state::{AuditorConfig, AuditorRole};

declare_id!("DLBdN7rwMfemRXoH1K1SmS5AVCj7dmdXzEdMPphoaRqb");

#[program]
pub mod reserve_auditor {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, default_admin: Pubkey) -> Result<()> {
        let auditor_key = ctx.accounts.auditor.key();
        let auditor = &mut ctx.accounts.auditor;
        let admin_role = &mut ctx.accounts.admin_role;

        admin_role.auditor = auditor_key;
        admin_role.member = default_admin;
        admin_role.bump = ctx.bumps.admin_role;
        auditor.initialize(ctx.accounts.instance.key(), admin_role, ctx.bumps.auditor)?;

        emit!(AuditorInitialized {
            auditor: auditor_key,
            default_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn record_reserve(ctx: Context<AuditorAdmin>, value: u128) -> Result<()> {
        let caller = ctx.accounts.load_caller()?;
        let now = Clock::get()?.unix_timestamp;
        let auditor = &mut ctx.accounts.auditor;

        auditor.record_reserve(&caller, value, now)?;

        emit!(ReserveRecorded {
            auditor: auditor.key(),
            value,
            recorded_by: caller.member,
            timestamp: now,
        });
        Ok(())
    }

    pub fn set_stable_coin_address(ctx: Context<AuditorAdmin>, stable_coin: Pubkey) -> Result<()> {
        let caller = ctx.accounts.load_caller()?;
        let auditor = &mut ctx.accounts.auditor;

        auditor.set_stable_coin(&caller, stable_coin)?;

        emit!(StableCoinAddressUpdated {
            auditor: auditor.key(),
            stable_coin,
            updated_by: caller.member,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn grant_role(ctx: Context<GrantRole>, role: u8, account: Pubkey) -> Result<()> {
        let caller = load_role(
            &ctx.accounts.admin_role,
            ctx.accounts.auditor.key(),
            ctx.accounts.admin.key(),
        )?;
        let auditor_key = ctx.accounts.auditor.key();
        let target = &mut ctx.accounts.target_role;
        bind_role(target, auditor_key, account, ctx.bumps.target_role);

        let changed = ctx.accounts.auditor.grant_role(&caller, target, role)?;
        if changed {
            emit!(AuditorRoleGranted {
                auditor: auditor_key,
                account,
                role,
                granted_by: caller.member,
                timestamp: Clock::get()?.unix_timestamp,
            });
        }
        Ok(())
    }

    pub fn revoke_role(ctx: Context<RevokeRole>, role: u8, account: Pubkey) -> Result<()> {
        let caller = load_role(
            &ctx.accounts.admin_role,
            ctx.accounts.auditor.key(),
            ctx.accounts.admin.key(),
        )?;
        let auditor_key = ctx.accounts.auditor.key();
        let target = &mut ctx.accounts.target_role;
        bind_role(target, auditor_key, account, ctx.bumps.target_role);

        let changed = ctx.accounts.auditor.revoke_role(&caller, target, role)?;
        if changed {
            emit!(AuditorRoleRevoked {
                auditor: auditor_key,
                account,
                role,
                revoked_by: caller.member,
                timestamp: Clock::get()?.unix_timestamp,
            });
        }
        Ok(())
    }

    /// Called by the linked ledger during mint. The answer travels back as return data.
    pub fn verify(ctx: Context<Verify>, required_reserve: u128) -> Result<bool> {
        let auditor = &ctx.accounts.auditor;
        let verified = auditor.verify(ctx.accounts.caller.key(), required_reserve)?;
        msg!(
            "reserve check: required {} recorded {} verified {}",
            required_reserve,
            auditor.recorded_reserve,
            verified
        );
        Ok(verified)
    }
}

#[derive(Accounts)]
#[instruction(default_admin: Pubkey)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub instance: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + AuditorConfig::INIT_SPACE,
        seeds = [AUDITOR_SEED, instance.key().as_ref()],
        bump
    )]
    pub auditor: Account<'info, AuditorConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + AuditorRole::INIT_SPACE,
        seeds = [AUDITOR_ROLE_SEED, auditor.key().as_ref(), default_admin.as_ref()],
        bump
    )]
    pub admin_role: Account<'info, AuditorRole>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AuditorAdmin<'info> {
    pub caller: Signer<'info>,

    #[account(mut)]
    pub auditor: Account<'info, AuditorConfig>,

    /// CHECK: membership is read through `load_role`; an empty account means no roles.
    #[account(
        seeds = [AUDITOR_ROLE_SEED, auditor.key().as_ref(), caller.key().as_ref()],
        bump
    )]
    pub caller_role: UncheckedAccount<'info>,
}

impl<'info> AuditorAdmin<'info> {
    fn load_caller(&self) -> Result<AuditorRole> {
        load_role(&self.caller_role, self.auditor.key(), self.caller.key())
    }
}

#[derive(Accounts)]
#[instruction(role: u8, account: Pubkey)]
pub struct GrantRole<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub auditor: Account<'info, AuditorConfig>,

    /// CHECK: membership is read through `load_role`; an empty account means no roles.
    #[account(
        seeds = [AUDITOR_ROLE_SEED, auditor.key().as_ref(), admin.key().as_ref()],
        bump
    )]
    pub admin_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + AuditorRole::INIT_SPACE,
        seeds = [AUDITOR_ROLE_SEED, auditor.key().as_ref(), account.as_ref()],
        bump
    )]
    pub target_role: Account<'info, AuditorRole>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(role: u8, account: Pubkey)]
pub struct RevokeRole<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub auditor: Account<'info, AuditorConfig>,

    /// CHECK: membership is read through `load_role`; an empty account means no roles.
    #[account(
        seeds = [AUDITOR_ROLE_SEED, auditor.key().as_ref(), admin.key().as_ref()],
        bump
    )]
    pub admin_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + AuditorRole::INIT_SPACE,
        seeds = [AUDITOR_ROLE_SEED, auditor.key().as_ref(), account.as_ref()],
        bump
    )]
    pub target_role: Account<'info, AuditorRole>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Verify<'info> {
    pub auditor: Account<'info, AuditorConfig>,

    pub caller: Signer<'info>,
}

/// Fills in a role account created by `init_if_needed` during this call.
fn bind_role(target: &mut AuditorRole, auditor: Pubkey, member: Pubkey, bump: u8) {
    if target.auditor == Pubkey::default() {
        target.auditor = auditor;
        target.member = member;
        target.bump = bump;
    }
}

fn load_role(account: &AccountInfo, auditor: Pubkey, member: Pubkey) -> Result<AuditorRole> {
    if account.data_is_empty() {
        return Ok(AuditorRole::vacant(auditor, member));
    }
    require_keys_eq!(*account.owner, crate::ID, AuditorError::RoleAccountMismatch);

    let data = account.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    let role = AuditorRole::try_deserialize(&mut slice)?;
    require_keys_eq!(role.auditor, auditor, AuditorError::RoleAccountMismatch);
    Ok(role)
}
