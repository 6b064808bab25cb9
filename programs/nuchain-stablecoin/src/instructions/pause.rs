use anchor_lang::prelude::*;

use crate::events::{Paused, Unpaused};
use crate::instructions::authority::ConfigAuthority;

pub fn pause_handler(ctx: Context<ConfigAuthority>) -> Result<()> {
    let caller = ctx.accounts.load_caller()?;
    let config = &mut ctx.accounts.config;

    config.pause(&caller)?;

    emit!(Paused {
        config: config.key(),
        account: caller.member,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

pub fn unpause_handler(ctx: Context<ConfigAuthority>) -> Result<()> {
    let caller = ctx.accounts.load_caller()?;
    let config = &mut ctx.accounts.config;

    config.unpause(&caller)?;

    emit!(Unpaused {
        config: config.key(),
        account: caller.member,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
