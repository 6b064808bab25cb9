use anchor_lang::prelude::*;

use crate::constants::{FREEZE_SEED, HOLDER_SEED, ROLE_SEED};
use crate::events::FrozenAddressWiped;
use crate::state::{FreezeEntry, HolderAccount, StablecoinConfig};
use crate::utils::load_role_account;

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct WipeFrozen<'info> {
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

    #[account(
        init_if_needed,
        payer = officer,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub holder: Account<'info, HolderAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WipeFrozen>, wallet: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    let config_key = accounts.config.key();
    let caller = load_role_account(&accounts.officer_role, config_key, accounts.officer.key())?;

    // Both PDAs are derived from `wallet`, so fresh ones are bound to it here.
    if accounts.freeze_entry.wallet == Pubkey::default() {
        accounts.freeze_entry.config = config_key;
        accounts.freeze_entry.wallet = wallet;
        accounts.freeze_entry.bump = ctx.bumps.freeze_entry;
    }
    if accounts.holder.owner == Pubkey::default() {
        accounts.holder.config = config_key;
        accounts.holder.owner = wallet;
        accounts.holder.bump = ctx.bumps.holder;
    }

    let wiped = accounts
        .config
        .wipe_frozen(&caller, &accounts.freeze_entry, &mut accounts.holder)?;
    msg!("wiped {} from {}", wiped, wallet);

    emit!(FrozenAddressWiped {
        config: config_key,
        address: wallet,
        amount: wiped,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
