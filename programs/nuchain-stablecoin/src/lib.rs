use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod verifier;

pub use instructions::*;

declare_id!("6kEayXdXthwnLwZu5qPj5M4GSj6YpTnQW79bVEvSs7AN");

#[program]
pub mod nuchain_stablecoin {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        instructions::initialize::handler(ctx, args)
    }

    pub fn mint(ctx: Context<MintTokens>, to: Pubkey, amount: u128) -> Result<()> {
        instructions::mint::handler(ctx, to, amount)
    }

    pub fn burn(ctx: Context<Burn>, amount: u128) -> Result<()> {
        instructions::burn::handler(ctx, amount)
    }

    pub fn update_reserves(ctx: Context<ConfigAuthority>, new_value: u128) -> Result<()> {
        instructions::reserves::update_reserves_handler(ctx, new_value)
    }

    pub fn set_reserve_ratio(ctx: Context<ConfigAuthority>, new_ratio: u128) -> Result<()> {
        instructions::reserves::set_reserve_ratio_handler(ctx, new_ratio)
    }

    pub fn freeze(ctx: Context<SetFrozen>, wallet: Pubkey) -> Result<()> {
        instructions::freeze::freeze_handler(ctx, wallet)
    }

    pub fn unfreeze(ctx: Context<SetFrozen>, wallet: Pubkey) -> Result<()> {
        instructions::freeze::unfreeze_handler(ctx, wallet)
    }

    pub fn wipe_frozen_address(ctx: Context<WipeFrozen>, wallet: Pubkey) -> Result<()> {
        instructions::wipe::handler(ctx, wallet)
    }

    pub fn set_transaction_fee(ctx: Context<ConfigAuthority>, bps: u16) -> Result<()> {
        instructions::fee::set_transaction_fee_handler(ctx, bps)
    }

    pub fn pause(ctx: Context<ConfigAuthority>) -> Result<()> {
        instructions::pause::pause_handler(ctx)
    }

    pub fn unpause(ctx: Context<ConfigAuthority>) -> Result<()> {
        instructions::pause::unpause_handler(ctx)
    }

    pub fn grant_role(ctx: Context<UpdateRole>, role: u8, account: Pubkey) -> Result<()> {
        instructions::roles::grant_role_handler(ctx, role, account)
    }

    pub fn revoke_role(ctx: Context<UpdateRole>, role: u8, account: Pubkey) -> Result<()> {
        instructions::roles::revoke_role_handler(ctx, role, account)
    }

    pub fn renounce_role(ctx: Context<RenounceRole>, role: u8) -> Result<()> {
        instructions::roles::renounce_role_handler(ctx, role)
    }
}
