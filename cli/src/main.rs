mod amounts;
mod client;
mod config;
mod instructions;
mod output;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nuchain_stablecoin::constants::{
    ROLE_ADMIN, ROLE_ASSET_PROTECTION, ROLE_DEFAULT_ADMIN, ROLE_SUPPLY_CONTROLLER, ROLE_TREASURY,
};
use nuchain_stablecoin::state::{FreezeEntry, HolderAccount, RoleAccount, StablecoinConfig};
use reserve_auditor::constants::ROLE_AUDITOR;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use amounts::{format_amount, parse_amount, parse_bps};
use client::{build_context, AppContext, ContextOverrides};
use config::{
    auditor_role_from_name, build_role_grants, ledger_role_from_name, ledger_role_names,
    load_nuchain_config, load_solana_cli_config, parse_pubkey, NuchainConfig,
};
use instructions::{
    build_auditor_initialize_instruction, build_auditor_role_instruction,
    build_burn_instruction, build_config_instruction, build_freeze_instruction,
    build_initialize_instruction, build_link_instruction, build_mint_instruction,
    build_record_reserve_instruction, build_renounce_instruction, build_role_instruction,
    find_auditor_pda, find_config_pda, ConfigCall, FreezeAction, InitializeParams, RoleAction,
};
use output::{
    print_json, report_tx, AuditorStatusOutput, BalanceOutput, FeeQuoteOutput, HolderInfo,
    HoldersOutput, InitOutput, RoleCounts, RoleMember, RolesOutput, StatusOutput, SupplyOutput,
};

/// Ratios share the token's 18-decimal fixed-point scale.
const RATIO_DECIMALS: u8 = 18;
const GRANTS_PER_TX: usize = 5;

#[derive(Parser)]
#[command(name = "nuchain", version, about = "NuChain stablecoin operator CLI")]
struct Cli {
    #[arg(long)]
    cluster: Option<String>,

    #[arg(long)]
    keypair: Option<String>,

    /// Operator TOML file.
    #[arg(long)]
    config: Option<String>,

    /// Ledger config address.
    #[arg(long)]
    ledger: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a ledger instance, its reserve auditor and the configured roles.
    Init(InitArgs),
    Mint(MintArgs),
    Burn(AmountArgs),
    Freeze(AddressArgs),
    Unfreeze(AddressArgs),
    /// Destroy the balance of a frozen address.
    Wipe(AddressArgs),
    /// Overwrite the ledger's local reserve counter.
    Reserves(AmountArgs),
    Ratio(RatioArgs),
    Fee(FeeArgs),
    Pause,
    Unpause,
    Roles(RolesArgs),
    Auditor(AuditorArgs),
    Status,
    Balance(AddressArgs),
    Holders(HoldersArgs),
}

#[derive(Parser)]
struct InitArgs {
    #[arg(long)]
    default_admin: Option<String>,

    #[arg(long)]
    treasury: Option<String>,

    /// Reuse an existing auditor instead of deploying a new one.
    #[arg(long)]
    auditor: Option<String>,
}

#[derive(Parser)]
struct MintArgs {
    recipient: String,
    amount: String,
}

#[derive(Parser)]
struct AmountArgs {
    amount: String,
}

#[derive(Parser)]
struct AddressArgs {
    address: String,
}

#[derive(Parser)]
struct RatioArgs {
    /// Reserve units per token, e.g. `1.5`.
    ratio: String,
}

#[derive(Parser)]
struct FeeArgs {
    #[command(subcommand)]
    command: FeeCmd,
}

#[derive(Subcommand)]
enum FeeCmd {
    Set { bps: String },
    Quote { amount: String },
}

#[derive(Parser)]
struct RolesArgs {
    #[command(subcommand)]
    command: RolesCmd,
}

#[derive(Subcommand)]
enum RolesCmd {
    Grant(RoleTargetArgs),
    Revoke(RoleTargetArgs),
    Renounce { role: String },
    List,
}

#[derive(Parser)]
struct RoleTargetArgs {
    role: String,
    address: String,
}

#[derive(Parser)]
struct AuditorArgs {
    /// Auditor address; defaults to the one linked in the ledger config.
    #[arg(long)]
    auditor: Option<String>,

    #[command(subcommand)]
    command: AuditorCmd,
}

#[derive(Subcommand)]
enum AuditorCmd {
    Record(AmountArgs),
    Link,
    Status,
    Grant(RoleTargetArgs),
    Revoke(RoleTargetArgs),
}

#[derive(Parser)]
struct HoldersArgs {
    #[arg(long)]
    min_balance: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let solana_config = load_solana_cli_config().ok();
    let file = cli
        .config
        .as_deref()
        .map(load_nuchain_config)
        .transpose()?;
    let ctx = build_context(
        ContextOverrides {
            cluster: cli.cluster.as_deref(),
            keypair: cli.keypair.as_deref(),
            output: cli.output,
        },
        solana_config.as_ref(),
        file.as_ref().and_then(|cfg| cfg.network.as_ref()),
    )?;

    // Only `init` runs without an existing ledger.
    let ledger = resolve_ledger(cli.ledger.as_deref(), file.as_ref());
    match &cli.command {
        Commands::Init(args) => handle_init(&ctx, args, file.as_ref()),
        Commands::Mint(args) => handle_mint(&ctx, &ledger?, args),
        Commands::Burn(args) => handle_burn(&ctx, &ledger?, args),
        Commands::Freeze(args) => handle_freeze(&ctx, &ledger?, args, FreezeAction::Freeze),
        Commands::Unfreeze(args) => handle_freeze(&ctx, &ledger?, args, FreezeAction::Unfreeze),
        Commands::Wipe(args) => handle_freeze(&ctx, &ledger?, args, FreezeAction::Wipe),
        Commands::Reserves(args) => {
            let ledger = ledger?;
            let config = ctx.fetch_config(&ledger)?;
            let value = parse_amount(&args.amount, config.decimals)?;
            handle_config_call(
                &ctx,
                &ledger,
                ConfigCall::UpdateReserves(value),
                format!("Local reserves set to {}", format_amount(value, config.decimals)),
            )
        }
        Commands::Ratio(args) => {
            let ratio = parse_amount(&args.ratio, RATIO_DECIMALS)?;
            handle_config_call(
                &ctx,
                &ledger?,
                ConfigCall::SetReserveRatio(ratio),
                format!("Reserve ratio set to {}", format_amount(ratio, RATIO_DECIMALS)),
            )
        }
        Commands::Fee(args) => handle_fee(&ctx, &ledger?, &args.command),
        Commands::Pause => handle_config_call(
            &ctx,
            &ledger?,
            ConfigCall::Pause,
            "Ledger paused".to_string(),
        ),
        Commands::Unpause => handle_config_call(
            &ctx,
            &ledger?,
            ConfigCall::Unpause,
            "Ledger unpaused".to_string(),
        ),
        Commands::Roles(args) => handle_roles(&ctx, &ledger?, &args.command),
        Commands::Auditor(args) => handle_auditor(&ctx, &ledger?, args),
        Commands::Status => handle_status(&ctx, &ledger?),
        Commands::Balance(args) => handle_balance(&ctx, &ledger?, args),
        Commands::Holders(args) => handle_holders(&ctx, &ledger?, args),
    }
}

fn resolve_ledger(flag: Option<&str>, file: Option<&NuchainConfig>) -> Result<Pubkey> {
    let value = flag
        .or_else(|| {
            file.and_then(|cfg| cfg.ledger.as_ref())
                .and_then(|ledger| ledger.address.as_deref())
        })
        .ok_or_else(|| anyhow!("Missing --ledger (or [ledger].address in --config)"))?;
    parse_pubkey(value)
}

fn optional_pubkey(value: Option<&str>) -> Result<Option<Pubkey>> {
    value.map(parse_pubkey).transpose()
}

fn handle_init(ctx: &AppContext, args: &InitArgs, file: Option<&NuchainConfig>) -> Result<()> {
    let payer = ctx.payer_key();
    let ledger_file = file.and_then(|cfg| cfg.ledger.clone()).unwrap_or_default();

    let default_admin = optional_pubkey(
        args.default_admin
            .as_deref()
            .or(ledger_file.default_admin.as_deref()),
    )?
    .unwrap_or(payer);
    let treasury_wallet = optional_pubkey(
        args.treasury
            .as_deref()
            .or(ledger_file.treasury_wallet.as_deref()),
    )?
    .unwrap_or(default_admin);
    let grants = file
        .and_then(|cfg| cfg.roles.as_ref())
        .map(build_role_grants)
        .transpose()?
        .unwrap_or_default();
    if !grants.ledger.is_empty() && default_admin != payer {
        bail!("Role grants in --config require the payer to be the default admin");
    }

    let ledger_instance = Keypair::new();
    let config_pda = find_config_pda(&ledger_instance.pubkey()).0;
    let auditor_instance = Keypair::new();
    let existing_auditor = optional_pubkey(args.auditor.as_deref())?;
    let reserve_auditor =
        existing_auditor.unwrap_or_else(|| find_auditor_pda(&auditor_instance.pubkey()).0);

    let mut setup = Vec::new();
    let mut signers = vec![&ledger_instance];
    if existing_auditor.is_none() {
        setup.push(build_auditor_initialize_instruction(
            payer,
            auditor_instance.pubkey(),
            payer,
        )?);
        signers.push(&auditor_instance);
    }
    setup.push(build_initialize_instruction(InitializeParams {
        payer,
        instance: ledger_instance.pubkey(),
        default_admin,
        reserve_auditor,
        treasury_wallet,
    })?);
    if existing_auditor.is_none() {
        setup.push(build_link_instruction(payer, reserve_auditor, config_pda)?);
    }
    let signature = ctx.send(setup, signers)?;

    let mut grant_ixs = Vec::new();
    for (member, roles) in &grants.ledger {
        for role in roles {
            grant_ixs.push(build_role_instruction(
                payer,
                config_pda,
                *role,
                *member,
                RoleAction::Grant,
            )?);
        }
    }
    for member in &grants.auditors {
        grant_ixs.push(build_auditor_role_instruction(
            payer,
            reserve_auditor,
            ROLE_AUDITOR,
            *member,
            RoleAction::Grant,
        )?);
    }
    let mut role_signatures = Vec::new();
    if !grants.is_empty() && ctx.output == OutputFormat::Text {
        println!("Granting {} configured roles", grant_ixs.len());
    }
    for batch in grant_ixs.chunks(GRANTS_PER_TX) {
        role_signatures.push(ctx.send(batch.to_vec(), vec![])?);
    }

    let explorer = ctx.explorer_url(&signature);
    if ctx.output == OutputFormat::Json {
        return print_json(&InitOutput {
            config: config_pda.to_string(),
            instance: ledger_instance.pubkey().to_string(),
            reserve_auditor: reserve_auditor.to_string(),
            default_admin: default_admin.to_string(),
            signature,
            explorer,
            role_signatures,
        });
    }
    println!("Stablecoin initialized");
    println!("Ledger:   {}", config_pda);
    println!("Auditor:  {}", reserve_auditor);
    println!("Admin:    {}", default_admin);
    println!("Treasury: {}", treasury_wallet);
    if existing_auditor.is_some() {
        println!("Link the auditor with `nuchain --ledger {} auditor link`", config_pda);
    }
    println!("Tx:       {}", signature);
    if let Some(url) = explorer {
        println!("Explorer: {}", url);
    }
    for role_signature in role_signatures {
        println!("Roles tx: {}", role_signature);
    }
    Ok(())
}

fn handle_mint(ctx: &AppContext, ledger: &Pubkey, args: &MintArgs) -> Result<()> {
    let config = ctx.fetch_config(ledger)?;
    let amount = parse_amount(&args.amount, config.decimals)?;
    let recipient = parse_pubkey(&args.recipient)?;
    let ix = build_mint_instruction(
        ctx.payer_key(),
        *ledger,
        config.reserve_auditor,
        recipient,
        amount,
    )?;
    let signature = ctx.send(vec![ix], vec![])?;
    report_supply_change(
        ctx,
        ledger,
        signature,
        format!(
            "Minted {} {} to {}",
            format_amount(amount, config.decimals),
            config.symbol,
            recipient
        ),
    )
}

fn handle_burn(ctx: &AppContext, ledger: &Pubkey, args: &AmountArgs) -> Result<()> {
    let config = ctx.fetch_config(ledger)?;
    let amount = parse_amount(&args.amount, config.decimals)?;
    let ix = build_burn_instruction(ctx.payer_key(), *ledger, amount)?;
    let signature = ctx.send(vec![ix], vec![])?;
    report_supply_change(
        ctx,
        ledger,
        signature,
        format!(
            "Burned {} {} from {}",
            format_amount(amount, config.decimals),
            config.symbol,
            ctx.payer_key()
        ),
    )
}

fn report_supply_change(
    ctx: &AppContext,
    ledger: &Pubkey,
    signature: String,
    headline: String,
) -> Result<()> {
    let config = ctx.fetch_config(ledger)?;
    let explorer = ctx.explorer_url(&signature);
    if ctx.output == OutputFormat::Json {
        return print_json(&SupplyOutput {
            signature,
            explorer,
            total_supply: config.total_supply.to_string(),
            total_reserves: config.total_reserves.to_string(),
        });
    }
    println!("{}", headline);
    println!(
        "Total supply: {}",
        format_amount(config.total_supply, config.decimals)
    );
    println!(
        "Local reserves: {}",
        format_amount(config.total_reserves, config.decimals)
    );
    println!("Tx: {}", signature);
    if let Some(url) = explorer {
        println!("Explorer: {}", url);
    }
    Ok(())
}

fn handle_freeze(
    ctx: &AppContext,
    ledger: &Pubkey,
    args: &AddressArgs,
    action: FreezeAction,
) -> Result<()> {
    let wallet = parse_pubkey(&args.address)?;
    let ix = build_freeze_instruction(ctx.payer_key(), *ledger, wallet, action)?;
    let signature = ctx.send(vec![ix], vec![])?;

    let headline = match action {
        FreezeAction::Freeze => format!("Frozen: {}", wallet),
        FreezeAction::Unfreeze => format!("Unfrozen: {}", wallet),
        FreezeAction::Wipe => {
            let logs = ctx.transaction_logs(&signature)?;
            match wiped_amount(&logs, &wallet) {
                Some(wiped) => {
                    let decimals = ctx.fetch_config(ledger)?.decimals;
                    format!("Wiped {} from {}", format_amount(wiped, decimals), wallet)
                }
                None => format!("Wiped balance of {}", wallet),
            }
        }
    };
    report_tx(ctx, signature, &[headline, format!("Ledger: {}", ledger)])
}

/// Amount destroyed by a confirmed wipe, read from the ledger's program log.
fn wiped_amount(logs: &[String], wallet: &Pubkey) -> Option<u128> {
    let suffix = format!(" from {}", wallet);
    logs.iter().find_map(|line| {
        line.strip_prefix("Program log: wiped ")?
            .strip_suffix(suffix.as_str())?
            .parse()
            .ok()
    })
}

fn handle_config_call(
    ctx: &AppContext,
    ledger: &Pubkey,
    call: ConfigCall,
    headline: String,
) -> Result<()> {
    let ix = build_config_instruction(ctx.payer_key(), *ledger, call)?;
    let signature = ctx.send(vec![ix], vec![])?;
    report_tx(ctx, signature, &[headline, format!("Ledger: {}", ledger)])
}

fn handle_fee(ctx: &AppContext, ledger: &Pubkey, cmd: &FeeCmd) -> Result<()> {
    match cmd {
        FeeCmd::Set { bps } => {
            let bps = parse_bps(bps)?;
            handle_config_call(
                ctx,
                ledger,
                ConfigCall::SetTransactionFee(bps),
                format!("Transaction fee set to {} bps", bps),
            )
        }
        FeeCmd::Quote { amount } => {
            let config = ctx.fetch_config(ledger)?;
            let amount = parse_amount(amount, config.decimals)?;
            let fee = config
                .transaction_fee(amount)
                .map_err(|err| anyhow!("Fee quote failed: {}", err))?;
            if ctx.output == OutputFormat::Json {
                return print_json(&FeeQuoteOutput {
                    amount: amount.to_string(),
                    bps: config.transaction_fee_bps,
                    fee: fee.to_string(),
                });
            }
            println!(
                "Fee on {} at {} bps: {}",
                format_amount(amount, config.decimals),
                config.transaction_fee_bps,
                format_amount(fee, config.decimals)
            );
            println!("Treasury: {}", config.treasury_wallet);
            Ok(())
        }
    }
}

fn handle_roles(ctx: &AppContext, ledger: &Pubkey, cmd: &RolesCmd) -> Result<()> {
    let payer = ctx.payer_key();
    match cmd {
        RolesCmd::Grant(args) | RolesCmd::Revoke(args) => {
            let role = ledger_role_from_name(&args.role)?;
            let member = parse_pubkey(&args.address)?;
            let (action, verb) = match cmd {
                RolesCmd::Grant(_) => (RoleAction::Grant, "Granted"),
                _ => (RoleAction::Revoke, "Revoked"),
            };
            let ix = build_role_instruction(payer, *ledger, role, member, action)?;
            let signature = ctx.send(vec![ix], vec![])?;
            report_tx(ctx, signature, &[format!("{} {} for {}", verb, args.role, member)])
        }
        RolesCmd::Renounce { role } => {
            let bit = ledger_role_from_name(role)?;
            let ix = build_renounce_instruction(payer, *ledger, bit)?;
            let signature = ctx.send(vec![ix], vec![])?;
            report_tx(ctx, signature, &[format!("Renounced {} for {}", role, payer)])
        }
        RolesCmd::List => {
            let members: Vec<RoleMember> = ctx
                .list_ledger_accounts::<RoleAccount>(ledger)?
                .into_iter()
                .filter(|entry| entry.roles != 0)
                .map(|entry| RoleMember {
                    address: entry.member.to_string(),
                    roles: ledger_role_names(entry.roles)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
                .collect();
            if ctx.output == OutputFormat::Json {
                return print_json(&RolesOutput { members });
            }
            if members.is_empty() {
                println!("No role members found");
            }
            for member in members {
                println!("{} {}", member.address, member.roles.join(","));
            }
            Ok(())
        }
    }
}

fn handle_auditor(ctx: &AppContext, ledger: &Pubkey, args: &AuditorArgs) -> Result<()> {
    let payer = ctx.payer_key();
    let auditor = match optional_pubkey(args.auditor.as_deref())? {
        Some(address) => address,
        None => ctx.fetch_config(ledger)?.reserve_auditor,
    };

    match &args.command {
        AuditorCmd::Record(amount) => {
            let value = parse_amount(&amount.amount, nuchain_stablecoin::constants::DECIMALS)?;
            let ix = build_record_reserve_instruction(payer, auditor, value)?;
            let signature = ctx.send(vec![ix], vec![])?;
            report_tx(
                ctx,
                signature,
                &[format!(
                    "Recorded reserve {} on {}",
                    format_amount(value, nuchain_stablecoin::constants::DECIMALS),
                    auditor
                )],
            )
        }
        AuditorCmd::Link => {
            let ix = build_link_instruction(payer, auditor, *ledger)?;
            let signature = ctx.send(vec![ix], vec![])?;
            report_tx(ctx, signature, &[format!("Linked {} to {}", auditor, ledger)])
        }
        AuditorCmd::Grant(target) | AuditorCmd::Revoke(target) => {
            let role = auditor_role_from_name(&target.role)?;
            let member = parse_pubkey(&target.address)?;
            let (action, verb) = match &args.command {
                AuditorCmd::Grant(_) => (RoleAction::Grant, "Granted"),
                _ => (RoleAction::Revoke, "Revoked"),
            };
            let ix = build_auditor_role_instruction(payer, auditor, role, member, action)?;
            let signature = ctx.send(vec![ix], vec![])?;
            report_tx(
                ctx,
                signature,
                &[format!("{} auditor {} for {}", verb, target.role, member)],
            )
        }
        AuditorCmd::Status => {
            let state = ctx.fetch_auditor(&auditor)?;
            let decimals = nuchain_stablecoin::constants::DECIMALS;
            let stable_coin = (state.stable_coin != Pubkey::default()).then_some(state.stable_coin);
            let last_recorded_by =
                (state.last_recorded_by != Pubkey::default()).then_some(state.last_recorded_by);
            if ctx.output == OutputFormat::Json {
                return print_json(&AuditorStatusOutput {
                    auditor: auditor.to_string(),
                    stable_coin: stable_coin.map(|key| key.to_string()),
                    recorded_reserve: state.recorded_reserve.to_string(),
                    last_recorded_at: state.last_recorded_at,
                    last_recorded_by: last_recorded_by.map(|key| key.to_string()),
                    record_count: state.record_count,
                });
            }
            println!("Reserve auditor: {}", auditor);
            match stable_coin {
                Some(key) => println!("Linked ledger: {}", key),
                None => println!("Linked ledger: (none)"),
            }
            println!(
                "Recorded reserve: {}",
                format_amount(state.recorded_reserve, decimals)
            );
            println!("Records: {}", state.record_count);
            if let Some(recorder) = last_recorded_by {
                println!(
                    "Last recorded by {} at {}",
                    recorder, state.last_recorded_at
                );
            }
            Ok(())
        }
    }
}

fn count_role(entries: &[RoleAccount], role: u8) -> usize {
    entries
        .iter()
        .filter(|entry| entry.roles & role != 0)
        .count()
}

fn handle_status(ctx: &AppContext, ledger: &Pubkey) -> Result<()> {
    let config: StablecoinConfig = ctx.fetch_config(ledger)?;
    let roles = ctx.list_ledger_accounts::<RoleAccount>(ledger)?;
    let frozen = ctx
        .list_ledger_accounts::<FreezeEntry>(ledger)?
        .iter()
        .filter(|entry| entry.is_frozen)
        .count();
    let recorded_reserve = ctx
        .fetch_auditor(&config.reserve_auditor)
        .ok()
        .map(|auditor| auditor.recorded_reserve);
    let role_counts = RoleCounts {
        default_admins: count_role(&roles, ROLE_DEFAULT_ADMIN),
        admins: count_role(&roles, ROLE_ADMIN),
        supply_controllers: count_role(&roles, ROLE_SUPPLY_CONTROLLER),
        asset_protection: count_role(&roles, ROLE_ASSET_PROTECTION),
        treasury: count_role(&roles, ROLE_TREASURY),
    };

    if ctx.output == OutputFormat::Json {
        return print_json(&StatusOutput {
            config: ledger.to_string(),
            name: config.name.clone(),
            symbol: config.symbol.clone(),
            decimals: config.decimals,
            is_paused: config.is_paused,
            total_supply: config.total_supply.to_string(),
            max_supply: config.max_supply.to_string(),
            total_reserves: config.total_reserves.to_string(),
            reserve_ratio: config.reserve_ratio.to_string(),
            recorded_reserve: recorded_reserve.map(|value| value.to_string()),
            transaction_fee_bps: config.transaction_fee_bps,
            treasury_wallet: config.treasury_wallet.to_string(),
            reserve_auditor: config.reserve_auditor.to_string(),
            audit_counter: config.audit_counter,
            role_counts,
            frozen,
        });
    }

    let decimals = config.decimals;
    println!("{} ({})", config.name, config.symbol);
    println!("Ledger: {}", ledger);
    println!(
        "Status: {}",
        if config.is_paused { "Paused" } else { "Active" }
    );
    println!(
        "Supply: {} / {}",
        format_amount(config.total_supply, decimals),
        format_amount(config.max_supply, decimals)
    );
    println!(
        "Local reserves: {}",
        format_amount(config.total_reserves, decimals)
    );
    match recorded_reserve {
        Some(value) => println!("Recorded reserve: {}", format_amount(value, decimals)),
        None => println!("Recorded reserve: unavailable"),
    }
    println!(
        "Reserve ratio: {}",
        format_amount(config.reserve_ratio, RATIO_DECIMALS)
    );
    println!("Transaction fee: {} bps", config.transaction_fee_bps);
    println!("Treasury: {}", config.treasury_wallet);
    println!("Reserve auditor: {}", config.reserve_auditor);
    println!("Audit counter: {}", config.audit_counter);
    println!("Roles:");
    println!("  Default admins: {}", role_counts.default_admins);
    println!("  Admins: {}", role_counts.admins);
    println!("  Supply controllers: {}", role_counts.supply_controllers);
    println!("  Asset protection: {}", role_counts.asset_protection);
    println!("  Treasury: {}", role_counts.treasury);
    println!("Frozen addresses: {}", frozen);
    Ok(())
}

fn handle_balance(ctx: &AppContext, ledger: &Pubkey, args: &AddressArgs) -> Result<()> {
    let owner = parse_pubkey(&args.address)?;
    let decimals = ctx.fetch_config(ledger)?.decimals;
    let balance = ctx
        .fetch_holder(ledger, &owner)?
        .map(|holder| holder.balance)
        .unwrap_or(0);
    let frozen = ctx
        .fetch_freeze(ledger, &owner)?
        .map(|entry| entry.is_frozen)
        .unwrap_or(false);
    let roles: Vec<String> = ctx
        .fetch_role(ledger, &owner)?
        .map(|entry| ledger_role_names(entry.roles))
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();

    if ctx.output == OutputFormat::Json {
        return print_json(&BalanceOutput {
            address: owner.to_string(),
            balance: balance.to_string(),
            frozen,
            roles,
        });
    }
    println!("{} {}", owner, format_amount(balance, decimals));
    if frozen {
        println!("Frozen");
    }
    if !roles.is_empty() {
        println!("Roles: {}", roles.join(","));
    }
    Ok(())
}

fn handle_holders(ctx: &AppContext, ledger: &Pubkey, args: &HoldersArgs) -> Result<()> {
    let decimals = ctx.fetch_config(ledger)?.decimals;
    let min_balance = args
        .min_balance
        .as_deref()
        .map(|value| parse_amount(value, decimals))
        .transpose()?
        .unwrap_or(0);

    let mut holders: Vec<HolderAccount> = ctx
        .list_ledger_accounts::<HolderAccount>(ledger)?
        .into_iter()
        .filter(|holder| holder.balance > 0 && holder.balance >= min_balance)
        .collect();
    holders.sort_by(|a, b| b.balance.cmp(&a.balance));

    if ctx.output == OutputFormat::Json {
        let holders = holders
            .iter()
            .map(|holder| HolderInfo {
                owner: holder.owner.to_string(),
                balance: holder.balance.to_string(),
            })
            .collect();
        return print_json(&HoldersOutput { holders });
    }
    if holders.is_empty() {
        println!("No holders found");
    }
    for holder in holders {
        println!(
            "{} {}",
            holder.owner,
            format_amount(holder.balance, decimals)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_subcommands() {
        let cli = Cli::try_parse_from([
            "nuchain",
            "--ledger",
            "11111111111111111111111111111111",
            "--output",
            "json",
            "roles",
            "grant",
            "supply-controller",
            "11111111111111111111111111111111",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Roles(RolesArgs {
                command: RolesCmd::Grant(args),
            }) => assert_eq!(args.role, "supply-controller"),
            _ => panic!("expected roles grant"),
        }
    }

    #[test]
    fn ledger_flag_wins_over_file() {
        let from_file = Pubkey::new_unique();
        let from_flag = Pubkey::new_unique();
        let file = NuchainConfig {
            ledger: Some(config::LedgerConfig {
                address: Some(from_file.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            resolve_ledger(Some(&from_flag.to_string()), Some(&file)).unwrap(),
            from_flag
        );
        assert_eq!(resolve_ledger(None, Some(&file)).unwrap(), from_file);
        assert!(resolve_ledger(None, None).is_err());
    }

    #[test]
    fn wiped_amount_comes_from_the_wipe_log() {
        let wallet = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let logs = vec![
            "Program 6kEayXdXthwnLwZu5qPj5M4GSj6YpTnQW79bVEvSs7AN invoke [1]".to_string(),
            "Program log: Instruction: WipeFrozenAddress".to_string(),
            format!("Program log: wiped 7 from {}", other),
            format!("Program log: wiped 1500000000000000000000 from {}", wallet),
            "Program data: AAAA".to_string(),
        ];

        assert_eq!(wiped_amount(&logs, &wallet), Some(1_500 * 10u128.pow(18)));
        assert_eq!(wiped_amount(&logs[..2], &wallet), None);
    }

    #[test]
    fn counts_role_members() {
        let config = Pubkey::new_unique();
        let mut admin = RoleAccount::vacant(config, Pubkey::new_unique());
        admin.roles = ROLE_DEFAULT_ADMIN | ROLE_ADMIN;
        let mut officer = RoleAccount::vacant(config, Pubkey::new_unique());
        officer.roles = ROLE_ASSET_PROTECTION;
        let entries = vec![admin, officer];

        assert_eq!(count_role(&entries, ROLE_ADMIN), 1);
        assert_eq!(count_role(&entries, ROLE_ASSET_PROTECTION), 1);
        assert_eq!(count_role(&entries, ROLE_TREASURY), 0);
    }
}
