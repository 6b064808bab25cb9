use anchor_lang::prelude::*;

use crate::events::FeePercentageUpdated;
use crate::instructions::authority::ConfigAuthority;

pub fn set_transaction_fee_handler(ctx: Context<ConfigAuthority>, bps: u16) -> Result<()> {
    let caller = ctx.accounts.load_caller()?;
    let config = &mut ctx.accounts.config;

    config.set_transaction_fee(&caller, bps)?;

    emit!(FeePercentageUpdated {
        config: config.key(),
        bps,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
