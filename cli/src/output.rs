use anyhow::Result;
use serde::Serialize;

use crate::client::AppContext;
use crate::OutputFormat;

#[derive(Serialize)]
pub struct TxOutput {
    pub signature: String,
    pub explorer: Option<String>,
}

#[derive(Serialize)]
pub struct InitOutput {
    pub config: String,
    pub instance: String,
    pub reserve_auditor: String,
    pub default_admin: String,
    pub signature: String,
    pub explorer: Option<String>,
    pub role_signatures: Vec<String>,
}

#[derive(Serialize)]
pub struct SupplyOutput {
    pub signature: String,
    pub explorer: Option<String>,
    pub total_supply: String,
    pub total_reserves: String,
}

#[derive(Serialize)]
pub struct StatusOutput {
    pub config: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub is_paused: bool,
    pub total_supply: String,
    pub max_supply: String,
    pub total_reserves: String,
    pub reserve_ratio: String,
    pub recorded_reserve: Option<String>,
    pub transaction_fee_bps: u16,
    pub treasury_wallet: String,
    pub reserve_auditor: String,
    pub audit_counter: u64,
    pub role_counts: RoleCounts,
    pub frozen: usize,
}

#[derive(Serialize)]
pub struct RoleCounts {
    pub default_admins: usize,
    pub admins: usize,
    pub supply_controllers: usize,
    pub asset_protection: usize,
    pub treasury: usize,
}

#[derive(Serialize)]
pub struct BalanceOutput {
    pub address: String,
    pub balance: String,
    pub frozen: bool,
    pub roles: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct HolderInfo {
    pub owner: String,
    pub balance: String,
}

#[derive(Serialize)]
pub struct HoldersOutput {
    pub holders: Vec<HolderInfo>,
}

#[derive(Serialize, Clone)]
pub struct RoleMember {
    pub address: String,
    pub roles: Vec<String>,
}

#[derive(Serialize)]
pub struct RolesOutput {
    pub members: Vec<RoleMember>,
}

#[derive(Serialize)]
pub struct FeeQuoteOutput {
    pub amount: String,
    pub bps: u16,
    pub fee: String,
}

#[derive(Serialize)]
pub struct AuditorStatusOutput {
    pub auditor: String,
    pub stable_coin: Option<String>,
    pub recorded_reserve: String,
    pub last_recorded_at: i64,
    pub last_recorded_by: Option<String>,
    pub record_count: u64,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the outcome of a single submitted transaction.
pub fn report_tx(ctx: &AppContext, signature: String, lines: &[String]) -> Result<()> {
    let explorer = ctx.explorer_url(&signature);
    if ctx.output == OutputFormat::Json {
        return print_json(&TxOutput {
            signature,
            explorer,
        });
    }
    for line in lines {
        println!("{}", line);
    }
    println!("Tx: {}", signature);
    if let Some(url) = explorer {
        println!("Explorer: {}", url);
    }
    Ok(())
}
