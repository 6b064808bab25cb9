use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, ROLE_SEED, STABLECOIN_SEED};
use crate::events::StablecoinInitialized;
use crate::state::{HolderAccount, InitializeParams, RoleAccount, StablecoinConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeArgs {
    pub default_admin: Pubkey,
    pub reserve_auditor: Pubkey,
    pub treasury_wallet: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: InitializeArgs)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// One-off keypair whose address names this ledger instance.
    pub instance: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + StablecoinConfig::INIT_SPACE,
        seeds = [STABLECOIN_SEED, instance.key().as_ref()],
        bump
    )]
    pub config: Account<'info, StablecoinConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + RoleAccount::INIT_SPACE,
        seeds = [ROLE_SEED, config.key().as_ref(), args.default_admin.as_ref()],
        bump
    )]
    pub admin_role: Account<'info, RoleAccount>,

    #[account(
        init,
        payer = payer,
        space = 8 + HolderAccount::INIT_SPACE,
        seeds = [HOLDER_SEED, config.key().as_ref(), args.default_admin.as_ref()],
        bump
    )]
    pub admin_holder: Account<'info, HolderAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    let config_key = ctx.accounts.config.key();

    let admin_role = &mut ctx.accounts.admin_role;
    admin_role.config = config_key;
    admin_role.member = args.default_admin;
    admin_role.bump = ctx.bumps.admin_role;

    let admin_holder = &mut ctx.accounts.admin_holder;
    admin_holder.config = config_key;
    admin_holder.owner = args.default_admin;
    admin_holder.bump = ctx.bumps.admin_holder;

    let config = &mut ctx.accounts.config;
    config.initialize(
        InitializeParams {
            instance: ctx.accounts.instance.key(),
            reserve_auditor: args.reserve_auditor,
            treasury_wallet: args.treasury_wallet,
            bump: ctx.bumps.config,
        },
        admin_role,
        admin_holder,
    )?;

    emit!(StablecoinInitialized {
        config: config_key,
        default_admin: args.default_admin,
        reserve_auditor: args.reserve_auditor,
        treasury_wallet: args.treasury_wallet,
        name: config.name.clone(),
        symbol: config.symbol.clone(),
        total_supply: config.total_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
