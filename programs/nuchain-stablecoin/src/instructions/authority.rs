use anchor_lang::prelude::*;

use crate::constants::ROLE_SEED;
use crate::state::{RoleAccount, StablecoinConfig};
use crate::utils::load_role_account;

/// Accounts shared by the config-only governance calls (reserves, ratio, fee, pause).
#[derive(Accounts)]
pub struct ConfigAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub config: Account<'info, StablecoinConfig>,

    /// CHECK: read through `load_role_account`; an empty account means no roles.
    #[account(
        seeds = [ROLE_SEED, config.key().as_ref(), authority.key().as_ref()],
        bump
    )]
    pub authority_role: UncheckedAccount<'info>,
}

impl<'info> ConfigAuthority<'info> {
    pub fn load_caller(&self) -> Result<RoleAccount> {
        load_role_account(
            &self.authority_role,
            self.config.key(),
            self.authority.key(),
        )
    }
}
