use anchor_lang::prelude::*;

use crate::constants::ROLE_SEED;
use crate::events::{RoleGranted, RoleRevoked};
use crate::state::{RoleAccount, StablecoinConfig};
use crate::utils::load_role_account;

#[derive(Accounts)]
#[instruction(role: u8, account: Pubkey)]
pub struct UpdateRole<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub config: Account<'info, StablecoinConfig>,

    /// CHECK: read through `load_role_account`; an empty account means no roles.
    #[account(
        seeds = [ROLE_SEED, config.key().as_ref(), admin.key().as_ref()],
        bump
    )]
    pub admin_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + RoleAccount::INIT_SPACE,
        seeds = [ROLE_SEED, config.key().as_ref(), account.as_ref()],
        bump
    )]
    pub target_role: Account<'info, RoleAccount>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(role: u8)]
pub struct RenounceRole<'info> {
    #[account(mut)]
    pub member: Signer<'info>,

    #[account(mut)]
    pub config: Account<'info, StablecoinConfig>,

    #[account(
        init_if_needed,
        payer = member,
        space = 8 + RoleAccount::INIT_SPACE,
        seeds = [ROLE_SEED, config.key().as_ref(), member.key().as_ref()],
        bump
    )]
    pub member_role: Account<'info, RoleAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateRole<'info> {
    /// Loads the caller before the target is touched; granting to oneself
    /// makes both accounts the same PDA.
    fn prepare(&mut self, account: Pubkey, bump: u8) -> Result<RoleAccount> {
        let config_key = self.config.key();
        let caller = load_role_account(&self.admin_role, config_key, self.admin.key())?;
        if self.target_role.config == Pubkey::default() {
            self.target_role.config = config_key;
            self.target_role.member = account;
            self.target_role.bump = bump;
        }
        Ok(caller)
    }
}

pub fn grant_role_handler(ctx: Context<UpdateRole>, role: u8, account: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    let caller = accounts.prepare(account, ctx.bumps.target_role)?;

    let changed = accounts
        .config
        .grant_role(&caller, &mut accounts.target_role, role)?;
    if changed {
        emit!(RoleGranted {
            config: accounts.config.key(),
            role,
            account,
            sender: caller.member,
            timestamp: Clock::get()?.unix_timestamp,
        });
    }
    Ok(())
}

pub fn revoke_role_handler(ctx: Context<UpdateRole>, role: u8, account: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    let caller = accounts.prepare(account, ctx.bumps.target_role)?;

    let changed = accounts
        .config
        .revoke_role(&caller, &mut accounts.target_role, role)?;
    if changed {
        emit!(RoleRevoked {
            config: accounts.config.key(),
            role,
            account,
            sender: caller.member,
            timestamp: Clock::get()?.unix_timestamp,
        });
    }
    Ok(())
}

pub fn renounce_role_handler(ctx: Context<RenounceRole>, role: u8) -> Result<()> {
    let accounts = ctx.accounts;
    let member = accounts.member.key();
    if accounts.member_role.config == Pubkey::default() {
        accounts.member_role.config = accounts.config.key();
        accounts.member_role.member = member;
        accounts.member_role.bump = ctx.bumps.member_role;
    }

    let changed = accounts
        .config
        .renounce_role(&mut accounts.member_role, role)?;
    if changed {
        emit!(RoleRevoked {
            config: accounts.config.key(),
            role,
            account: member,
            sender: member,
            timestamp: Clock::get()?.unix_timestamp,
        });
    }
    Ok(())
}
