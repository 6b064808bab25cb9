use anchor_lang::prelude::*;

use crate::constants::{FREEZE_SEED, ROLE_SEED};
use crate::events::{AddressFrozen, AddressUnfrozen};
use crate::state::{FreezeEntry, StablecoinConfig};
use crate::utils::load_role_account;

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct SetFrozen<'info> {
    #[account(mut)]
    pub officer: Signer<'info>,

    #[account(mut)]
    pub config: Account<'info, StablecoinConfig>,

    /// CHECK: read through `load_role_account`; an empty account means no roles.
    #[account(
        seeds = [ROLE_SEED, config.key().as_ref(), officer.key().as_ref()],
        bump
    )]
    pub officer_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = officer,
        space = 8 + FreezeEntry::INIT_SPACE,
        seeds = [FREEZE_SEED, config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub freeze_entry: Account<'info, FreezeEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> SetFrozen<'info> {
    fn bind_entry(&mut self, wallet: Pubkey, bump: u8) {
        if self.freeze_entry.wallet == Pubkey::default() {
            self.freeze_entry.config = self.config.key();
            self.freeze_entry.wallet = wallet;
            self.freeze_entry.bump = bump;
        }
    }
}

pub fn freeze_handler(ctx: Context<SetFrozen>, wallet: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    let config_key = accounts.config.key();
    let caller = load_role_account(&accounts.officer_role, config_key, accounts.officer.key())?;
    accounts.bind_entry(wallet, ctx.bumps.freeze_entry);

    let now = Clock::get()?.unix_timestamp;
    accounts
        .config
        .freeze(&caller, &mut accounts.freeze_entry, now)?;

    emit!(AddressFrozen {
        config: config_key,
        address: wallet,
        timestamp: now,
    });
    Ok(())
}

pub fn unfreeze_handler(ctx: Context<SetFrozen>, wallet: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    let config_key = accounts.config.key();
    let caller = load_role_account(&accounts.officer_role, config_key, accounts.officer.key())?;
    accounts.bind_entry(wallet, ctx.bumps.freeze_entry);

    accounts
        .config
        .unfreeze(&caller, &mut accounts.freeze_entry)?;

    emit!(AddressUnfrozen {
        config: config_key,
        address: wallet,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
