use anchor_lang::AccountDeserialize;
use anyhow::{anyhow, Context, Result};
use nuchain_stablecoin::state::{FreezeEntry, HolderAccount, RoleAccount, StablecoinConfig};
use reserve_auditor::state::AuditorConfig;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::{
    RpcAccountInfoConfig, RpcProgramAccountsConfig, RpcTransactionConfig,
};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use solana_transaction_status::option_serializer::OptionSerializer;
use solana_transaction_status::UiTransactionEncoding;
use std::str::FromStr;

use crate::config::{
    expand_tilde, parse_commitment, resolve_cluster, ClusterInfo, NetworkConfig, SolanaCliConfig,
};
use crate::instructions::{find_freeze_pda, find_holder_pda, find_role_pda};
use crate::OutputFormat;

/// Offset of the owning ledger key in every per-member account (after the discriminator).
const CONFIG_FIELD_OFFSET: usize = 8;

pub struct AppContext {
    pub client: RpcClient,
    pub payer: Keypair,
    pub output: OutputFormat,
    pub cluster: ClusterInfo,
    pub commitment: CommitmentConfig,
}

pub struct ContextOverrides<'a> {
    pub cluster: Option<&'a str>,
    pub keypair: Option<&'a str>,
    pub output: OutputFormat,
}

/// Flags win over the operator file, which wins over the Solana CLI config.
pub fn build_context(
    overrides: ContextOverrides<'_>,
    solana_config: Option<&SolanaCliConfig>,
    network: Option<&NetworkConfig>,
) -> Result<AppContext> {
    let cluster_value = overrides
        .cluster
        .map(str::to_string)
        .or_else(|| network.and_then(|cfg| cfg.cluster.clone()))
        .or_else(|| solana_config.map(|cfg| cfg.json_rpc_url.clone()))
        .unwrap_or_else(|| "devnet".to_string());
    let cluster = resolve_cluster(&cluster_value)?;

    let keypair_value = overrides
        .keypair
        .map(str::to_string)
        .or_else(|| network.and_then(|cfg| cfg.keypair_path.clone()))
        .or_else(|| solana_config.map(|cfg| cfg.keypair_path.clone()))
        .ok_or_else(|| anyhow!("Missing keypair path. Use --keypair or Solana CLI config."))?;

    let commitment_value = network
        .and_then(|cfg| cfg.commitment.clone())
        .or_else(|| solana_config.and_then(|cfg| cfg.commitment.clone()));
    let commitment = parse_commitment(commitment_value.as_deref());

    let payer = read_keypair_file(expand_tilde(&keypair_value))
        .map_err(|err| anyhow!("Failed to read keypair: {}", err))?;
    let client = RpcClient::new_with_commitment(cluster.url.clone(), commitment);

    Ok(AppContext {
        client,
        payer,
        output: overrides.output,
        cluster,
        commitment,
    })
}

impl AppContext {
    pub fn payer_key(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn send(&self, instructions: Vec<Instruction>, extra_signers: Vec<&Keypair>) -> Result<String> {
        let blockhash = self.client.get_latest_blockhash()?;
        let mut transaction =
            Transaction::new_with_payer(&instructions, Some(&self.payer.pubkey()));
        let mut signers: Vec<&dyn Signer> = vec![&self.payer];
        for signer in extra_signers {
            if signer.pubkey() != self.payer.pubkey() {
                signers.push(signer);
            }
        }
        transaction.sign(&signers, blockhash);
        let signature = self.client.send_and_confirm_transaction(&transaction)?;
        Ok(signature.to_string())
    }

    /// Program log lines of a confirmed transaction.
    pub fn transaction_logs(&self, signature: &str) -> Result<Vec<String>> {
        let signature = Signature::from_str(signature)
            .map_err(|err| anyhow!("Invalid signature {}: {}", signature, err))?;
        // Transaction lookups are not served at `processed`.
        let commitment = if self.commitment.is_finalized() {
            self.commitment
        } else {
            CommitmentConfig::confirmed()
        };
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(commitment),
            max_supported_transaction_version: Some(0),
        };
        let transaction = self
            .client
            .get_transaction_with_config(&signature, config)
            .with_context(|| format!("Failed to fetch transaction {}", signature))?;
        let logs = match transaction.transaction.meta.map(|meta| meta.log_messages) {
            Some(OptionSerializer::Some(logs)) => logs,
            _ => Vec::new(),
        };
        Ok(logs)
    }

    pub fn explorer_url(&self, signature: &str) -> Option<String> {
        self.cluster.label.as_ref().map(|label| {
            format!(
                "https://explorer.solana.com/tx/{}?cluster={}",
                signature, label
            )
        })
    }

    pub fn fetch_config(&self, config: &Pubkey) -> Result<StablecoinConfig> {
        self.fetch_required(config, "ledger config")
    }

    pub fn fetch_auditor(&self, auditor: &Pubkey) -> Result<AuditorConfig> {
        self.fetch_required(auditor, "auditor")
    }

    pub fn fetch_role(&self, config: &Pubkey, member: &Pubkey) -> Result<Option<RoleAccount>> {
        self.fetch_optional(&find_role_pda(config, member).0)
    }

    pub fn fetch_holder(&self, config: &Pubkey, owner: &Pubkey) -> Result<Option<HolderAccount>> {
        self.fetch_optional(&find_holder_pda(config, owner).0)
    }

    pub fn fetch_freeze(&self, config: &Pubkey, wallet: &Pubkey) -> Result<Option<FreezeEntry>> {
        self.fetch_optional(&find_freeze_pda(config, wallet).0)
    }

    fn fetch_required<T: AccountDeserialize>(&self, address: &Pubkey, label: &str) -> Result<T> {
        let account = self
            .client
            .get_account(address)
            .with_context(|| format!("Failed to fetch {} {}", label, address))?;
        let mut data = account.data.as_slice();
        T::try_deserialize(&mut data).with_context(|| format!("Failed to decode {}", label))
    }

    /// Per-member accounts are created lazily; a missing one decodes to `None`.
    fn fetch_optional<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<Option<T>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.commitment)?;
        match response.value {
            Some(account) => {
                let mut data = account.data.as_slice();
                let decoded = T::try_deserialize(&mut data)
                    .with_context(|| format!("Failed to decode account {}", address))?;
                Ok(Some(decoded))
            }
            None => Ok(None),
        }
    }

    /// Every account of type `T` owned by the ledger program and tied to `config`.
    /// Other account kinds share the filter and are skipped by their discriminator.
    pub fn list_ledger_accounts<T: AccountDeserialize>(&self, config: &Pubkey) -> Result<Vec<T>> {
        let rpc_config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                CONFIG_FIELD_OFFSET,
                config.as_ref(),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: None,
                commitment: Some(self.commitment),
                data_slice: None,
                min_context_slot: None,
            },
            ..RpcProgramAccountsConfig::default()
        };

        let accounts = self
            .client
            .get_program_accounts_with_config(&nuchain_stablecoin::ID, rpc_config)?;

        let mut result = Vec::new();
        for (_key, account) in accounts {
            let mut data = account.data.as_slice();
            if let Ok(decoded) = T::try_deserialize(&mut data) {
                result.push(decoded);
            }
        }
        Ok(result)
    }
}
