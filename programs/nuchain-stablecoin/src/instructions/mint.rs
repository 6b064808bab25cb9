use anchor_lang::prelude::*;
use reserve_auditor::program::ReserveAuditor;

use crate::constants::{HOLDER_SEED, ROLE_SEED, STABLECOIN_SEED};
use crate::events::Minted;
use crate::state::{HolderAccount, StablecoinConfig};
use crate::utils::load_role_account;
use crate::verifier::AuditorCpi;

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintTokens<'info> {
    #[account(mut)]
    pub minter: Signer<'info>,

    #[account(mut)]
    pub config: Account<'info, StablecoinConfig>,

    /// CHECK: read through `load_role_account`; an empty account means no roles.
    #[account(
        seeds = [ROLE_SEED, config.key().as_ref(), minter.key().as_ref()],
        bump
    )]
    pub minter_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = minter,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, config.key().as_ref(), to.as_ref()],
        bump
    )]
    pub recipient_holder: Account<'info, HolderAccount>,

    /// CHECK: matched against `config.reserve_auditor` when reserves are verified,
    /// after the role and reserve checks; the auditor program validates its data.
    pub reserve_auditor: UncheckedAccount<'info>,

    pub reserve_auditor_program: Program<'info, ReserveAuditor>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintTokens>, to: Pubkey, amount: u128) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let caller = load_role_account(
        &ctx.accounts.minter_role,
        config_key,
        ctx.accounts.minter.key(),
    )?;

    let recipient = &mut ctx.accounts.recipient_holder;
    if recipient.owner == Pubkey::default() {
        recipient.config = config_key;
        recipient.owner = to;
        recipient.bump = ctx.bumps.recipient_holder;
    }

    let instance = ctx.accounts.config.instance;
    let linked_auditor = ctx.accounts.config.reserve_auditor;
    let bump = [ctx.accounts.config.bump];
    let signer_seeds: &[&[u8]] = &[STABLECOIN_SEED, instance.as_ref(), &bump];
    let signer_seeds_arr = [signer_seeds];
    let verifier = AuditorCpi {
        auditor_program: ctx.accounts.reserve_auditor_program.to_account_info(),
        auditor: ctx.accounts.reserve_auditor.to_account_info(),
        linked_auditor,
        ledger: ctx.accounts.config.to_account_info(),
        signer_seeds: &signer_seeds_arr,
    };

    let consumed = ctx
        .accounts
        .config
        .mint(&caller, recipient, amount, &verifier)?;
    msg!("minted {} against {} reserve", amount, consumed);

    emit!(Minted {
        config: config_key,
        to,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
