use anchor_lang::prelude::*;

use crate::events::{ReserveRatioUpdated, ReserveUpdated};
use crate::instructions::authority::ConfigAuthority;

pub fn update_reserves_handler(ctx: Context<ConfigAuthority>, new_value: u128) -> Result<()> {
    let caller = ctx.accounts.load_caller()?;
    let config = &mut ctx.accounts.config;

    config.update_reserves(&caller, new_value)?;

    emit!(ReserveUpdated {
        config: config.key(),
        new_value,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

pub fn set_reserve_ratio_handler(ctx: Context<ConfigAuthority>, new_ratio: u128) -> Result<()> {
    let caller = ctx.accounts.load_caller()?;
    let config = &mut ctx.accounts.config;

    config.set_reserve_ratio(&caller, new_ratio)?;

    emit!(ReserveRatioUpdated {
        config: config.key(),
        new_ratio,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
