use anyhow::{anyhow, Context, Result};
use nuchain_stablecoin::constants::{
    ROLE_ADMIN, ROLE_ASSET_PROTECTION, ROLE_DEFAULT_ADMIN, ROLE_SUPPLY_CONTROLLER, ROLE_TREASURY,
};
use serde::Deserialize;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Operator file passed with `--config`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NuchainConfig {
    pub network: Option<NetworkConfig>,
    pub ledger: Option<LedgerConfig>,
    pub roles: Option<RolesConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkConfig {
    pub cluster: Option<String>,
    pub keypair_path: Option<String>,
    pub commitment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// Ledger config address, used when `--ledger` is not given.
    pub address: Option<String>,
    pub default_admin: Option<String>,
    pub treasury_wallet: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesConfig {
    pub admins: Option<Vec<String>>,
    pub supply_controllers: Option<Vec<String>>,
    pub asset_protection: Option<Vec<String>>,
    pub treasury: Option<Vec<String>>,
    pub auditors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolanaCliConfig {
    pub json_rpc_url: String,
    pub keypair_path: String,
    pub commitment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClusterInfo {
    pub url: String,
    pub label: Option<String>,
}

/// Single-bit grants a fresh deployment should receive, keyed by member.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RoleGrants {
    pub ledger: BTreeMap<Pubkey, Vec<u8>>,
    pub auditors: Vec<Pubkey>,
}

impl RoleGrants {
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty() && self.auditors.is_empty()
    }
}

pub fn build_role_grants(config: &RolesConfig) -> Result<RoleGrants> {
    let mut grants = RoleGrants::default();

    apply_role_list(&mut grants.ledger, config.admins.as_ref(), ROLE_ADMIN)?;
    apply_role_list(
        &mut grants.ledger,
        config.supply_controllers.as_ref(),
        ROLE_SUPPLY_CONTROLLER,
    )?;
    apply_role_list(
        &mut grants.ledger,
        config.asset_protection.as_ref(),
        ROLE_ASSET_PROTECTION,
    )?;
    apply_role_list(&mut grants.ledger, config.treasury.as_ref(), ROLE_TREASURY)?;

    if let Some(auditors) = &config.auditors {
        for entry in auditors {
            let member = parse_pubkey(entry)?;
            if !grants.auditors.contains(&member) {
                grants.auditors.push(member);
            }
        }
    }
    Ok(grants)
}

fn apply_role_list(
    grants: &mut BTreeMap<Pubkey, Vec<u8>>,
    list: Option<&Vec<String>>,
    role: u8,
) -> Result<()> {
    if let Some(list) = list {
        for entry in list {
            let member = parse_pubkey(entry)?;
            let roles = grants.entry(member).or_default();
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }
    Ok(())
}

pub fn load_nuchain_config(path: &str) -> Result<NuchainConfig> {
    let contents = fs::read_to_string(expand_tilde(path))
        .with_context(|| format!("Failed to read config: {}", path))?;
    parse_nuchain_config(&contents)
}

pub fn parse_nuchain_config(contents: &str) -> Result<NuchainConfig> {
    toml::from_str(contents).context("Failed to parse config")
}

pub fn load_solana_cli_config() -> Result<SolanaCliConfig> {
    let path = default_solana_config_path();
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read Solana config: {}", path.display()))?;
    serde_yaml::from_str(&contents).context("Failed to parse Solana config")
}

fn default_solana_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config");
    path.push("solana");
    path.push("cli");
    path.push("config.yml");
    path
}

pub fn resolve_cluster(input: &str) -> Result<ClusterInfo> {
    let lowered = input.to_lowercase();
    let (url, label) = match lowered.as_str() {
        "devnet" => ("https://api.devnet.solana.com", Some("devnet")),
        "testnet" => ("https://api.testnet.solana.com", Some("testnet")),
        "mainnet" | "mainnet-beta" => ("https://api.mainnet-beta.solana.com", Some("mainnet-beta")),
        "localnet" => ("http://127.0.0.1:8899", None),
        _ if input.starts_with("http://") || input.starts_with("https://") => {
            let label = ["devnet", "testnet", "mainnet"]
                .into_iter()
                .find(|name| lowered.contains(name))
                .map(|name| if name == "mainnet" { "mainnet-beta" } else { name });
            (input, label)
        }
        _ => return Err(anyhow!("Unknown cluster: {}", input)),
    };
    Ok(ClusterInfo {
        url: url.to_string(),
        label: label.map(str::to_string),
    })
}

pub fn parse_commitment(value: Option<&str>) -> CommitmentConfig {
    match value.unwrap_or("confirmed") {
        "processed" => CommitmentConfig::processed(),
        "finalized" => CommitmentConfig::finalized(),
        _ => CommitmentConfig::confirmed(),
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn parse_pubkey(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|_| anyhow!("Invalid pubkey: {}", value))
}

pub fn ledger_role_from_name(name: &str) -> Result<u8> {
    match name.to_lowercase().replace('_', "-").as_str() {
        "default-admin" => Ok(ROLE_DEFAULT_ADMIN),
        "admin" => Ok(ROLE_ADMIN),
        "supply-controller" => Ok(ROLE_SUPPLY_CONTROLLER),
        "asset-protection" => Ok(ROLE_ASSET_PROTECTION),
        "treasury" => Ok(ROLE_TREASURY),
        _ => Err(anyhow!("Unknown role: {}", name)),
    }
}

pub fn ledger_role_names(roles: u8) -> Vec<&'static str> {
    [
        (ROLE_DEFAULT_ADMIN, "default-admin"),
        (ROLE_ADMIN, "admin"),
        (ROLE_SUPPLY_CONTROLLER, "supply-controller"),
        (ROLE_ASSET_PROTECTION, "asset-protection"),
        (ROLE_TREASURY, "treasury"),
    ]
    .into_iter()
    .filter(|(bit, _)| roles & bit != 0)
    .map(|(_, name)| name)
    .collect()
}

pub fn auditor_role_from_name(name: &str) -> Result<u8> {
    match name.to_lowercase().replace('_', "-").as_str() {
        "default-admin" => Ok(reserve_auditor::constants::ROLE_DEFAULT_ADMIN),
        "auditor" => Ok(reserve_auditor::constants::ROLE_AUDITOR),
        _ => Err(anyhow!("Unknown auditor role: {}", name)),
    }
}
