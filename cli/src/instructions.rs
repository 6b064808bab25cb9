use anyhow::Result;
use borsh::BorshSerialize;
use nuchain_stablecoin::constants::{FREEZE_SEED, HOLDER_SEED, ROLE_SEED, STABLECOIN_SEED};
use reserve_auditor::constants::{AUDITOR_ROLE_SEED, AUDITOR_SEED};
use sha2::{Digest, Sha256};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

pub fn find_config_pda(instance: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STABLECOIN_SEED, instance.as_ref()], &nuchain_stablecoin::ID)
}

pub fn find_role_pda(config: &Pubkey, member: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ROLE_SEED, config.as_ref(), member.as_ref()],
        &nuchain_stablecoin::ID,
    )
}

pub fn find_holder_pda(config: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[HOLDER_SEED, config.as_ref(), owner.as_ref()],
        &nuchain_stablecoin::ID,
    )
}

pub fn find_freeze_pda(config: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[FREEZE_SEED, config.as_ref(), wallet.as_ref()],
        &nuchain_stablecoin::ID,
    )
}

pub fn find_auditor_pda(instance: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUDITOR_SEED, instance.as_ref()], &reserve_auditor::ID)
}

pub fn find_auditor_role_pda(auditor: &Pubkey, member: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[AUDITOR_ROLE_SEED, auditor.as_ref(), member.as_ref()],
        &reserve_auditor::ID,
    )
}

pub fn anchor_discriminator(name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{}", name));
    let hash = hasher.finalize();
    let mut output = [0u8; 8];
    output.copy_from_slice(&hash[..8]);
    output
}

fn build_instruction(
    name: &str,
    data: Vec<u8>,
    accounts: Vec<AccountMeta>,
    program_id: Pubkey,
) -> Instruction {
    let mut payload = Vec::with_capacity(8 + data.len());
    payload.extend_from_slice(&anchor_discriminator(name));
    payload.extend_from_slice(&data);
    Instruction {
        program_id,
        accounts,
        data: payload,
    }
}

#[derive(BorshSerialize)]
struct InitializeArgs {
    default_admin: Pubkey,
    reserve_auditor: Pubkey,
    treasury_wallet: Pubkey,
}

#[derive(BorshSerialize)]
struct MintArgs {
    to: Pubkey,
    amount: u128,
}

#[derive(BorshSerialize)]
struct RoleArgs {
    role: u8,
    account: Pubkey,
}

pub struct InitializeParams {
    pub payer: Pubkey,
    pub instance: Pubkey,
    pub default_admin: Pubkey,
    pub reserve_auditor: Pubkey,
    pub treasury_wallet: Pubkey,
}

pub fn build_initialize_instruction(params: InitializeParams) -> Result<Instruction> {
    let config = find_config_pda(&params.instance).0;
    let accounts = vec![
        AccountMeta::new(params.payer, true),
        AccountMeta::new_readonly(params.instance, true),
        AccountMeta::new(config, false),
        AccountMeta::new(find_role_pda(&config, &params.default_admin).0, false),
        AccountMeta::new(find_holder_pda(&config, &params.default_admin).0, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    let data = InitializeArgs {
        default_admin: params.default_admin,
        reserve_auditor: params.reserve_auditor,
        treasury_wallet: params.treasury_wallet,
    }
    .try_to_vec()?;
    Ok(build_instruction(
        "initialize",
        data,
        accounts,
        nuchain_stablecoin::ID,
    ))
}

pub fn build_mint_instruction(
    minter: Pubkey,
    config: Pubkey,
    auditor: Pubkey,
    to: Pubkey,
    amount: u128,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(minter, true),
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(find_role_pda(&config, &minter).0, false),
        AccountMeta::new(find_holder_pda(&config, &to).0, false),
        AccountMeta::new_readonly(auditor, false),
        AccountMeta::new_readonly(reserve_auditor::ID, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    let data = MintArgs { to, amount }.try_to_vec()?;
    Ok(build_instruction("mint", data, accounts, nuchain_stablecoin::ID))
}

pub fn build_burn_instruction(burner: Pubkey, config: Pubkey, amount: u128) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(burner, true),
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(find_role_pda(&config, &burner).0, false),
        AccountMeta::new(find_holder_pda(&config, &burner).0, false),
        AccountMeta::new_readonly(find_freeze_pda(&config, &burner).0, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Ok(build_instruction(
        "burn",
        amount.try_to_vec()?,
        accounts,
        nuchain_stablecoin::ID,
    ))
}

/// Config-only governance calls sharing one account list.
#[derive(Clone, Copy)]
pub enum ConfigCall {
    UpdateReserves(u128),
    SetReserveRatio(u128),
    SetTransactionFee(u16),
    Pause,
    Unpause,
}

impl ConfigCall {
    fn name(&self) -> &'static str {
        match self {
            ConfigCall::UpdateReserves(_) => "update_reserves",
            ConfigCall::SetReserveRatio(_) => "set_reserve_ratio",
            ConfigCall::SetTransactionFee(_) => "set_transaction_fee",
            ConfigCall::Pause => "pause",
            ConfigCall::Unpause => "unpause",
        }
    }

    fn data(&self) -> Result<Vec<u8>> {
        let data = match self {
            ConfigCall::UpdateReserves(value) | ConfigCall::SetReserveRatio(value) => {
                value.try_to_vec()?
            }
            ConfigCall::SetTransactionFee(bps) => bps.try_to_vec()?,
            ConfigCall::Pause | ConfigCall::Unpause => Vec::new(),
        };
        Ok(data)
    }
}

pub fn build_config_instruction(
    authority: Pubkey,
    config: Pubkey,
    call: ConfigCall,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(find_role_pda(&config, &authority).0, false),
    ];
    Ok(build_instruction(
        call.name(),
        call.data()?,
        accounts,
        nuchain_stablecoin::ID,
    ))
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FreezeAction {
    Freeze,
    Unfreeze,
    Wipe,
}

pub fn build_freeze_instruction(
    officer: Pubkey,
    config: Pubkey,
    wallet: Pubkey,
    action: FreezeAction,
) -> Result<Instruction> {
    let mut accounts = vec![
        AccountMeta::new(officer, true),
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(find_role_pda(&config, &officer).0, false),
        AccountMeta::new(find_freeze_pda(&config, &wallet).0, false),
    ];
    if action == FreezeAction::Wipe {
        accounts.push(AccountMeta::new(find_holder_pda(&config, &wallet).0, false));
    }
    accounts.push(AccountMeta::new_readonly(system_program::id(), false));

    let name = match action {
        FreezeAction::Freeze => "freeze",
        FreezeAction::Unfreeze => "unfreeze",
        FreezeAction::Wipe => "wipe_frozen_address",
    };
    Ok(build_instruction(
        name,
        wallet.try_to_vec()?,
        accounts,
        nuchain_stablecoin::ID,
    ))
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    Grant,
    Revoke,
}

pub fn build_role_instruction(
    admin: Pubkey,
    config: Pubkey,
    role: u8,
    account: Pubkey,
    action: RoleAction,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(admin, true),
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(find_role_pda(&config, &admin).0, false),
        AccountMeta::new(find_role_pda(&config, &account).0, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    let name = match action {
        RoleAction::Grant => "grant_role",
        RoleAction::Revoke => "revoke_role",
    };
    let data = RoleArgs { role, account }.try_to_vec()?;
    Ok(build_instruction(name, data, accounts, nuchain_stablecoin::ID))
}

pub fn build_renounce_instruction(member: Pubkey, config: Pubkey, role: u8) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(member, true),
        AccountMeta::new(config, false),
        AccountMeta::new(find_role_pda(&config, &member).0, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Ok(build_instruction(
        "renounce_role",
        role.try_to_vec()?,
        accounts,
        nuchain_stablecoin::ID,
    ))
}

pub fn build_auditor_initialize_instruction(
    payer: Pubkey,
    instance: Pubkey,
    default_admin: Pubkey,
) -> Result<Instruction> {
    let auditor = find_auditor_pda(&instance).0;
    let accounts = vec![
        AccountMeta::new(payer, true),
        AccountMeta::new_readonly(instance, true),
        AccountMeta::new(auditor, false),
        AccountMeta::new(find_auditor_role_pda(&auditor, &default_admin).0, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Ok(build_instruction(
        "initialize",
        default_admin.try_to_vec()?,
        accounts,
        reserve_auditor::ID,
    ))
}

fn auditor_admin_accounts(caller: Pubkey, auditor: Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(caller, true),
        AccountMeta::new(auditor, false),
        AccountMeta::new_readonly(find_auditor_role_pda(&auditor, &caller).0, false),
    ]
}

pub fn build_record_reserve_instruction(
    caller: Pubkey,
    auditor: Pubkey,
    value: u128,
) -> Result<Instruction> {
    Ok(build_instruction(
        "record_reserve",
        value.try_to_vec()?,
        auditor_admin_accounts(caller, auditor),
        reserve_auditor::ID,
    ))
}

pub fn build_link_instruction(
    caller: Pubkey,
    auditor: Pubkey,
    ledger_config: Pubkey,
) -> Result<Instruction> {
    Ok(build_instruction(
        "set_stable_coin_address",
        ledger_config.try_to_vec()?,
        auditor_admin_accounts(caller, auditor),
        reserve_auditor::ID,
    ))
}

pub fn build_auditor_role_instruction(
    admin: Pubkey,
    auditor: Pubkey,
    role: u8,
    account: Pubkey,
    action: RoleAction,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(admin, true),
        AccountMeta::new(auditor, false),
        AccountMeta::new_readonly(find_auditor_role_pda(&auditor, &admin).0, false),
        AccountMeta::new(find_auditor_role_pda(&auditor, &account).0, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    let name = match action {
        RoleAction::Grant => "grant_role",
        RoleAction::Revoke => "revoke_role",
    };
    let data = RoleArgs { role, account }.try_to_vec()?;
    Ok(build_instruction(name, data, accounts, reserve_auditor::ID))
}
