use anchor_lang::prelude::*;

use crate::constants::{FREEZE_SEED, HOLDER_SEED, ROLE_SEED};
use crate::events::Burned;
use crate::state::{HolderAccount, StablecoinConfig};
use crate::utils::{is_frozen, load_role_account};

#[derive(Accounts)]
pub struct Burn<'info> {
    #[account(mut)]
    pub burner: Signer<'info>,

    #[account(mut)]
    pub config: Account<'info, StablecoinConfig>,

    /// CHECK: read through `load_role_account`; an empty account means no roles.
    #[account(
        seeds = [ROLE_SEED, config.key().as_ref(), burner.key().as_ref()],
        bump
    )]
    pub burner_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = burner,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, config.key().as_ref(), burner.key().as_ref()],
        bump
    )]
    pub burner_holder: Account<'info, HolderAccount>,

    /// CHECK: read through `is_frozen`; an empty account means not frozen.
    #[account(
        seeds = [FREEZE_SEED, config.key().as_ref(), burner.key().as_ref()],
        bump
    )]
    pub burner_freeze: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Burn>, amount: u128) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let burner = ctx.accounts.burner.key();
    let caller = load_role_account(&ctx.accounts.burner_role, config_key, burner)?;
    let frozen = is_frozen(&ctx.accounts.burner_freeze, config_key)?;

    let holder = &mut ctx.accounts.burner_holder;
    if holder.owner == Pubkey::default() {
        holder.config = config_key;
        holder.owner = burner;
        holder.bump = ctx.bumps.burner_holder;
    }

    ctx.accounts.config.burn(&caller, holder, frozen, amount)?;

    emit!(Burned {
        config: config_key,
        from: burner,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
