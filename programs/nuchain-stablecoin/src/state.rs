use anchor_lang::prelude::*;

use crate::constants::{
    ASSET_PROTECTION_ROLES, DECIMALS, FEE_ROLES, INITIAL_RESERVE_RATIO, INITIAL_SUPPLY,
    MAX_SUPPLY, MAX_TRANSACTION_FEE_BPS, PAUSE_ROLES, RESERVE_ROLES, ROLE_ADMIN_ROLES,
    ROLE_DEFAULT_ADMIN, SUPPLY_ROLES, TOKEN_NAME, TOKEN_SYMBOL,
};
use crate::errors::StablecoinError;
use crate::utils::{fee_for, has_any_role, require_single_role, required_reserve};
use crate::verifier::ReserveVerifier;

/// Ledger-wide state. Every mutating method validates all preconditions
/// before touching a field, so a returned error leaves the ledger unchanged.
#[account]
#[derive(Debug, Default, PartialEq)]
pub struct StablecoinConfig {
    pub instance: Pubkey,
    pub reserve_auditor: Pubkey,
    pub treasury_wallet: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u128,
    pub max_supply: u128,
    pub total_reserves: u128,
    pub reserve_ratio: u128,
    pub transaction_fee_bps: u16,
    pub is_paused: bool,
    pub is_initialized: bool,
    pub default_admin_count: u32,
    pub audit_counter: u64,
    pub bump: u8,
}

pub struct InitializeParams {
    pub instance: Pubkey,
    pub reserve_auditor: Pubkey,
    pub treasury_wallet: Pubkey,
    pub bump: u8,
}

impl StablecoinConfig {
    pub const INIT_SPACE: usize = 512;

    /// One-shot setup. The initial supply is credited to the default admin.
    pub fn initialize(
        &mut self,
        params: InitializeParams,
        admin_role: &mut RoleAccount,
        admin_holder: &mut HolderAccount,
    ) -> Result<()> {
        require!(!self.is_initialized, StablecoinError::AlreadyInitialized);

        self.instance = params.instance;
        self.reserve_auditor = params.reserve_auditor;
        self.treasury_wallet = params.treasury_wallet;
        self.name = TOKEN_NAME.to_string();
        self.symbol = TOKEN_SYMBOL.to_string();
        self.decimals = DECIMALS;
        self.total_supply = INITIAL_SUPPLY;
        self.max_supply = MAX_SUPPLY;
        self.total_reserves = 0;
        self.reserve_ratio = INITIAL_RESERVE_RATIO;
        self.transaction_fee_bps = 0;
        self.is_paused = false;
        self.is_initialized = true;
        self.default_admin_count = 1;
        self.audit_counter = 0;
        self.bump = params.bump;

        admin_role.roles = ROLE_DEFAULT_ADMIN;
        admin_holder.balance = INITIAL_SUPPLY;
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(!self.is_paused, StablecoinError::Paused);
        Ok(())
    }

    /// Checks run in a fixed order: role, pause, cap, local reserves, auditor.
    /// Returns the reserve consumed.
    pub fn mint(
        &mut self,
        caller: &RoleAccount,
        recipient: &mut HolderAccount,
        amount: u128,
        verifier: &dyn ReserveVerifier,
    ) -> Result<u128> {
        caller.require_any(SUPPLY_ROLES)?;
        self.require_active()?;

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(StablecoinError::SupplyCapExceeded)?;
        require!(
            new_supply <= self.max_supply,
            StablecoinError::SupplyCapExceeded
        );

        // A cost past u128 exceeds any reserve figure.
        let required = required_reserve(amount, self.reserve_ratio)
            .ok_or(StablecoinError::InsufficientReserves)?;
        require!(
            required <= self.total_reserves,
            StablecoinError::InsufficientReserves
        );
        require!(
            verifier.verify(required)?,
            StablecoinError::ReserveVerificationFailed
        );

        let new_balance = recipient
            .balance
            .checked_add(amount)
            .ok_or(StablecoinError::Overflow)?;
        let audit_counter = self.next_audit_counter()?;

        recipient.balance = new_balance;
        self.total_supply = new_supply;
        self.total_reserves -= required;
        self.audit_counter = audit_counter;
        Ok(required)
    }

    /// Burning returns reserve capacity one to one, whatever the ratio.
    pub fn burn(
        &mut self,
        caller: &RoleAccount,
        holder: &mut HolderAccount,
        holder_frozen: bool,
        amount: u128,
    ) -> Result<()> {
        caller.require_any(SUPPLY_ROLES)?;
        self.require_active()?;
        require!(!holder_frozen, StablecoinError::AccountFrozen);
        require!(
            holder.balance >= amount,
            StablecoinError::InsufficientBalance
        );

        let new_reserves = self
            .total_reserves
            .checked_add(amount)
            .ok_or(StablecoinError::Overflow)?;
        let audit_counter = self.next_audit_counter()?;

        holder.balance -= amount;
        self.total_supply -= amount;
        self.total_reserves = new_reserves;
        self.audit_counter = audit_counter;
        Ok(())
    }

    /// Absolute overwrite of the local reserve counter.
    pub fn update_reserves(&mut self, caller: &RoleAccount, new_value: u128) -> Result<()> {
        caller.require_any(RESERVE_ROLES)?;
        require!(new_value != 0, StablecoinError::ZeroReserveValue);

        self.audit_counter = self.next_audit_counter()?;
        self.total_reserves = new_value;
        Ok(())
    }

    pub fn set_reserve_ratio(&mut self, caller: &RoleAccount, new_ratio: u128) -> Result<()> {
        caller.require_any(RESERVE_ROLES)?;
        require!(new_ratio != 0, StablecoinError::ZeroReserveRatio);

        self.audit_counter = self.next_audit_counter()?;
        self.reserve_ratio = new_ratio;
        Ok(())
    }

    pub fn freeze(
        &mut self,
        caller: &RoleAccount,
        entry: &mut FreezeEntry,
        now: i64,
    ) -> Result<()> {
        caller.require_any(ASSET_PROTECTION_ROLES)?;
        require!(!entry.is_frozen, StablecoinError::AlreadyFrozen);

        self.audit_counter = self.next_audit_counter()?;
        entry.is_frozen = true;
        entry.frozen_at = now;
        entry.frozen_by = caller.member;
        Ok(())
    }

    pub fn unfreeze(&mut self, caller: &RoleAccount, entry: &mut FreezeEntry) -> Result<()> {
        caller.require_any(ASSET_PROTECTION_ROLES)?;
        require!(entry.is_frozen, StablecoinError::NotFrozen);

        self.audit_counter = self.next_audit_counter()?;
        entry.is_frozen = false;
        entry.frozen_at = 0;
        entry.frozen_by = Pubkey::default();
        Ok(())
    }

    /// Destroys a frozen holder's balance. Reserves are not credited.
    pub fn wipe_frozen(
        &mut self,
        caller: &RoleAccount,
        entry: &FreezeEntry,
        holder: &mut HolderAccount,
    ) -> Result<u128> {
        caller.require_any(ASSET_PROTECTION_ROLES)?;
        require!(entry.is_frozen, StablecoinError::NotFrozen);
        require_keys_eq!(entry.wallet, holder.owner, StablecoinError::AccountMismatch);

        let wiped = holder.balance;
        let new_supply = self
            .total_supply
            .checked_sub(wiped)
            .ok_or(StablecoinError::Overflow)?;
        let audit_counter = self.next_audit_counter()?;

        holder.balance = 0;
        self.total_supply = new_supply;
        self.audit_counter = audit_counter;
        Ok(wiped)
    }

    pub fn set_transaction_fee(&mut self, caller: &RoleAccount, fee_bps: u16) -> Result<()> {
        caller.require_any(FEE_ROLES)?;
        require!(
            fee_bps <= MAX_TRANSACTION_FEE_BPS,
            StablecoinError::FeeCapExceeded
        );

        self.audit_counter = self.next_audit_counter()?;
        self.transaction_fee_bps = fee_bps;
        Ok(())
    }

    /// Fee owed on a value-moving operation of `amount` at the current rate.
    pub fn transaction_fee(&self, amount: u128) -> Result<u128> {
        fee_for(amount, self.transaction_fee_bps)
    }

    pub fn pause(&mut self, caller: &RoleAccount) -> Result<()> {
        caller.require_any(PAUSE_ROLES)?;
        require!(!self.is_paused, StablecoinError::Paused);

        self.audit_counter = self.next_audit_counter()?;
        self.is_paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &RoleAccount) -> Result<()> {
        caller.require_any(PAUSE_ROLES)?;
        require!(self.is_paused, StablecoinError::NotPaused);

        self.audit_counter = self.next_audit_counter()?;
        self.is_paused = false;
        Ok(())
    }

    /// Returns `true` when membership actually changed.
    pub fn grant_role(
        &mut self,
        caller: &RoleAccount,
        target: &mut RoleAccount,
        role: u8,
    ) -> Result<bool> {
        caller.require_any(ROLE_ADMIN_ROLES)?;
        require_single_role(role)?;

        if target.has_any(role) {
            return Ok(false);
        }
        if role == ROLE_DEFAULT_ADMIN {
            self.default_admin_count = self
                .default_admin_count
                .checked_add(1)
                .ok_or(StablecoinError::Overflow)?;
        }
        target.roles |= role;
        Ok(true)
    }

    pub fn revoke_role(
        &mut self,
        caller: &RoleAccount,
        target: &mut RoleAccount,
        role: u8,
    ) -> Result<bool> {
        caller.require_any(ROLE_ADMIN_ROLES)?;
        require_single_role(role)?;
        self.drop_role(target, role)
    }

    pub fn renounce_role(&mut self, member: &mut RoleAccount, role: u8) -> Result<bool> {
        require_single_role(role)?;
        self.drop_role(member, role)
    }

    fn drop_role(&mut self, target: &mut RoleAccount, role: u8) -> Result<bool> {
        if !target.has_any(role) {
            return Ok(false);
        }
        if role == ROLE_DEFAULT_ADMIN {
            require!(
                self.default_admin_count > 1,
                StablecoinError::LastDefaultAdmin
            );
            self.default_admin_count -= 1;
        }
        target.roles &= !role;
        Ok(true)
    }

    fn next_audit_counter(&self) -> Result<u64> {
        Ok(self
            .audit_counter
            .checked_add(1)
            .ok_or(StablecoinError::Overflow)?)
    }
}

#[account]
#[derive(Debug, Default, PartialEq)]
pub struct RoleAccount {
    pub config: Pubkey,
    pub member: Pubkey,
    pub roles: u8,
    pub bump: u8,
}

impl RoleAccount {
    pub const INIT_SPACE: usize = 128;

    /// Stand-in for a member whose role PDA was never created.
    pub fn vacant(config: Pubkey, member: Pubkey) -> Self {
        Self {
            config,
            member,
            roles: 0,
            bump: 0,
        }
    }

    pub fn has_any(&self, mask: u8) -> bool {
        has_any_role(self.roles, mask)
    }

    pub fn require_any(&self, mask: u8) -> Result<()> {
        require!(self.has_any(mask), StablecoinError::Unauthorized);
        Ok(())
    }
}

#[account]
#[derive(Debug, Default, PartialEq)]
pub struct HolderAccount {
    pub config: Pubkey,
    pub owner: Pubkey,
    pub balance: u128,
    pub bump: u8,
}

impl HolderAccount {
    pub const INIT_SPACE: usize = 128;
}

#[account]
#[derive(Debug, Default, PartialEq)]
pub struct FreezeEntry {
    pub config: Pubkey,
    pub wallet: Pubkey,
    pub is_frozen: bool,
    pub frozen_at: i64,
    pub frozen_by: Pubkey,
    pub bump: u8,
}

impl FreezeEntry {
    pub const INIT_SPACE: usize = 160;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        ROLE_ADMIN, ROLE_ASSET_PROTECTION, ROLE_SUPPLY_CONTROLLER, ROLE_TREASURY,
    };
    use anchor_lang::error::Error;
    use reserve_auditor::state::{AuditorConfig, AuditorRole};

    const E18: u128 = 1_000_000_000_000_000_000;

    fn assert_reverts<T: std::fmt::Debug>(result: Result<T>, reason: &str) {
        match result {
            Err(Error::AnchorError(err)) => assert_eq!(err.error_msg, reason),
            other => panic!("expected revert {:?}, got {:?}", reason, other),
        }
    }

    /// Routes the ledger's check through the real auditor state.
    struct LinkedAuditor<'a> {
        auditor: &'a AuditorConfig,
        ledger: Pubkey,
    }

    impl ReserveVerifier for LinkedAuditor<'_> {
        fn verify(&self, required_reserve: u128) -> Result<bool> {
            self.auditor.verify(self.ledger, required_reserve)
        }
    }

    struct Fixture {
        ledger: Pubkey,
        config: StablecoinConfig,
        admin: RoleAccount,
        admin_holder: HolderAccount,
        auditor: AuditorConfig,
        auditor_admin: AuditorRole,
    }

    impl Fixture {
        fn new() -> Self {
            let ledger = Pubkey::new_unique();
            let admin_key = Pubkey::new_unique();

            let mut auditor = AuditorConfig::default();
            let mut auditor_admin = AuditorRole::vacant(Pubkey::new_unique(), admin_key);
            auditor
                .initialize(Pubkey::new_unique(), &mut auditor_admin, 255)
                .unwrap();
            auditor.set_stable_coin(&auditor_admin, ledger).unwrap();

            let mut config = StablecoinConfig::default();
            let mut admin = RoleAccount::vacant(ledger, admin_key);
            let mut admin_holder = holder(ledger, admin_key, 0);
            config
                .initialize(
                    InitializeParams {
                        instance: Pubkey::new_unique(),
                        reserve_auditor: Pubkey::new_unique(),
                        treasury_wallet: Pubkey::new_unique(),
                        bump: 253,
                    },
                    &mut admin,
                    &mut admin_holder,
                )
                .unwrap();

            Self {
                ledger,
                config,
                admin,
                admin_holder,
                auditor,
                auditor_admin,
            }
        }

        /// Both reserve figures set to the same value.
        fn funded(reserves: u128) -> Self {
            let mut fixture = Self::new();
            fixture
                .config
                .update_reserves(&fixture.admin, reserves)
                .unwrap();
            fixture.attest(reserves);
            fixture
        }

        fn attest(&mut self, value: u128) {
            self.auditor
                .record_reserve(&self.auditor_admin, value, 1)
                .unwrap();
        }

        fn member(&self, roles: u8) -> RoleAccount {
            RoleAccount {
                config: self.ledger,
                member: Pubkey::new_unique(),
                roles,
                bump: 0,
            }
        }

        fn mint(&mut self, caller: &RoleAccount, to: &mut HolderAccount, amount: u128) -> Result<u128> {
            let verifier = LinkedAuditor {
                auditor: &self.auditor,
                ledger: self.ledger,
            };
            self.config.mint(caller, to, amount, &verifier)
        }
    }

    fn holder(config: Pubkey, owner: Pubkey, balance: u128) -> HolderAccount {
        HolderAccount {
            config,
            owner,
            balance,
            bump: 0,
        }
    }

    fn freeze_entry(config: Pubkey, wallet: Pubkey) -> FreezeEntry {
        FreezeEntry {
            config,
            wallet,
            ..FreezeEntry::default()
        }
    }

    #[test]
    fn initialize_seeds_supply_and_parameters() {
        let fx = Fixture::new();
        let config = &fx.config;

        assert_eq!(config.name, "NuChain Stablecoin");
        assert_eq!(config.symbol, "USDN");
        assert_eq!(config.decimals, 18);
        assert_eq!(config.total_supply, 1_000_000_000 * E18);
        assert_eq!(config.max_supply, 2_000_000_000 * E18);
        assert_eq!(config.reserve_ratio, E18);
        assert_eq!(config.total_reserves, 0);
        assert_eq!(config.transaction_fee_bps, 0);
        assert!(!config.is_paused);
        assert!(fx.admin.has_any(ROLE_DEFAULT_ADMIN));
        assert_eq!(fx.admin_holder.balance, config.total_supply);
    }

    #[test]
    fn initialize_runs_once() {
        let mut fx = Fixture::new();
        let before = fx.config.clone();
        let params = InitializeParams {
            instance: Pubkey::new_unique(),
            reserve_auditor: Pubkey::new_unique(),
            treasury_wallet: Pubkey::new_unique(),
            bump: 1,
        };
        assert_reverts(
            fx.config
                .initialize(params, &mut fx.admin, &mut fx.admin_holder),
            "Contract is already initialized",
        );
        assert_eq!(fx.config, before);
    }

    #[test]
    fn mint_against_two_billion_reserves() {
        let mut fx = Fixture::funded(2_000_000_000 * E18);
        let admin = fx.admin.clone();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);

        let consumed = fx.mint(&admin, &mut to, 500 * E18).unwrap();

        assert_eq!(consumed, 500 * E18);
        assert_eq!(to.balance, 500 * E18);
        assert_eq!(fx.config.total_supply, 1_000_000_500 * E18);
        assert_eq!(fx.config.total_reserves, 1_999_999_500 * E18);
    }

    #[test]
    fn mint_charges_reserves_by_ratio() {
        let mut fx = Fixture::funded(1_000 * E18);
        let admin = fx.admin.clone();
        fx.config.set_reserve_ratio(&admin, 3 * E18 / 2).unwrap();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 10);

        fx.mint(&admin, &mut to, 100 * E18).unwrap();

        assert_eq!(to.balance, 100 * E18 + 10);
        assert_eq!(fx.config.total_reserves, 850 * E18);
    }

    #[test]
    fn supply_controller_can_mint() {
        let mut fx = Fixture::funded(10 * E18);
        let controller = fx.member(ROLE_SUPPLY_CONTROLLER);
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);

        fx.mint(&controller, &mut to, E18).unwrap();
        assert_eq!(to.balance, E18);
    }

    #[test]
    fn mint_up_to_cap_then_reject() {
        let headroom = MAX_SUPPLY - INITIAL_SUPPLY;
        let mut fx = Fixture::funded(headroom + E18);
        let admin = fx.admin.clone();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);

        assert_reverts(
            fx.mint(&admin, &mut to, headroom + 1),
            "Mint exceeds MAX_SUPPLY",
        );
        fx.mint(&admin, &mut to, headroom).unwrap();
        assert_eq!(fx.config.total_supply, MAX_SUPPLY);
        assert_reverts(fx.mint(&admin, &mut to, 1), "Mint exceeds MAX_SUPPLY");
    }

    #[test]
    fn cap_is_checked_before_reserves() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);

        assert_reverts(
            fx.mint(&admin, &mut to, MAX_SUPPLY),
            "Mint exceeds MAX_SUPPLY",
        );
        assert_reverts(fx.mint(&admin, &mut to, u128::MAX), "Mint exceeds MAX_SUPPLY");
    }

    #[test]
    fn mint_rejects_insufficient_local_reserves() {
        let mut fx = Fixture::funded(100 * E18);
        fx.attest(1_000_000 * E18);
        let admin = fx.admin.clone();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);
        let before = fx.config.clone();

        assert_reverts(
            fx.mint(&admin, &mut to, 100 * E18 + 1),
            "Insufficient reserves",
        );
        assert_eq!(fx.config, before);
        assert_eq!(to.balance, 0);
    }

    #[test]
    fn reserve_cost_past_u128_is_insufficient_reserves() {
        let mut fx = Fixture::funded(1_000);
        fx.attest(u128::MAX);
        let admin = fx.admin.clone();
        fx.config.set_reserve_ratio(&admin, u128::MAX).unwrap();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);
        let before = fx.config.clone();

        assert_reverts(fx.mint(&admin, &mut to, 2 * E18), "Insufficient reserves");
        assert_eq!(fx.config, before);
        assert_eq!(to.balance, 0);
    }

    /// Stands in for an auditor account other than the linked one.
    struct WrongAuditor;

    impl ReserveVerifier for WrongAuditor {
        fn verify(&self, _required_reserve: u128) -> Result<bool> {
            err!(StablecoinError::InvalidReserveAuditor)
        }
    }

    #[test]
    fn wrong_auditor_is_reported_after_role_and_reserve_checks() {
        let mut fx = Fixture::funded(10 * E18);
        let admin = fx.admin.clone();
        let stranger = fx.member(0);
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);

        assert_reverts(
            fx.config.mint(&stranger, &mut to, E18, &WrongAuditor),
            "Not Authorize to call this function",
        );
        assert_reverts(
            fx.config.mint(&admin, &mut to, 11 * E18, &WrongAuditor),
            "Insufficient reserves",
        );
        assert_reverts(
            fx.config.mint(&admin, &mut to, E18, &WrongAuditor),
            "Reserve auditor account does not match",
        );
        assert_eq!(fx.config.total_reserves, 10 * E18);
    }

    #[test]
    fn mint_rejects_when_auditor_figure_is_short() {
        let mut fx = Fixture::funded(1_000 * E18);
        fx.attest(10 * E18);
        let admin = fx.admin.clone();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);
        let before = fx.config.clone();

        assert_reverts(
            fx.mint(&admin, &mut to, 11 * E18),
            "Reserve verification failed",
        );
        assert_eq!(fx.config, before);
        assert_eq!(to.balance, 0);

        fx.mint(&admin, &mut to, 10 * E18).unwrap();
        assert_eq!(to.balance, 10 * E18);
    }

    #[test]
    fn auditor_figure_is_independent_of_local_counter() {
        let mut fx = Fixture::funded(100 * E18);
        let admin = fx.admin.clone();
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);

        fx.mint(&admin, &mut to, 60 * E18).unwrap();

        assert_eq!(fx.config.total_reserves, 40 * E18);
        assert_eq!(fx.auditor.recorded_reserve, 100 * E18);
    }

    #[test]
    fn mint_order_is_role_then_pause() {
        let mut fx = Fixture::funded(100 * E18);
        let admin = fx.admin.clone();
        let treasury = fx.member(ROLE_TREASURY);
        let mut to = holder(fx.ledger, Pubkey::new_unique(), 0);
        fx.config.pause(&admin).unwrap();

        assert_reverts(
            fx.mint(&treasury, &mut to, E18),
            "Not Authorize to call this function",
        );
        assert_reverts(fx.mint(&admin, &mut to, E18), "Pausable: paused");

        fx.config.unpause(&admin).unwrap();
        fx.mint(&admin, &mut to, E18).unwrap();
    }

    #[test]
    fn burn_credits_reserves_one_to_one() {
        let mut fx = Fixture::funded(1_000 * E18);
        let admin = fx.admin.clone();
        fx.config.set_reserve_ratio(&admin, 2 * E18).unwrap();
        let supply = fx.config.total_supply;

        fx.config
            .burn(&admin, &mut fx.admin_holder, false, 300 * E18)
            .unwrap();

        assert_eq!(fx.config.total_supply, supply - 300 * E18);
        assert_eq!(fx.config.total_reserves, 1_300 * E18);
        assert_eq!(fx.admin_holder.balance, supply - 300 * E18);
    }

    #[test]
    fn burn_rejects_overdraw_frozen_and_paused() {
        let mut fx = Fixture::new();
        let controller = fx.member(ROLE_SUPPLY_CONTROLLER);
        let mut own = holder(fx.ledger, controller.member, 5);
        let before = fx.config.clone();

        assert_reverts(
            fx.config.burn(&controller, &mut own, false, 6),
            "Insufficient token balance",
        );
        assert_reverts(
            fx.config.burn(&controller, &mut own, true, 1),
            "Account is frozen and cannot perform this action",
        );
        assert_eq!(fx.config, before);

        let admin = fx.admin.clone();
        fx.config.pause(&admin).unwrap();
        assert_reverts(
            fx.config.burn(&controller, &mut own, false, 1),
            "Pausable: paused",
        );
        assert_eq!(own.balance, 5);
    }

    #[test]
    fn update_reserves_overwrites() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();

        fx.config.update_reserves(&admin, 2_000 * E18).unwrap();
        assert_eq!(fx.config.total_reserves, 2_000 * E18);
        fx.config.update_reserves(&admin, 750 * E18).unwrap();
        assert_eq!(fx.config.total_reserves, 750 * E18);

        assert_reverts(
            fx.config.update_reserves(&admin, 0),
            "New Reserve value can't be equal to zero",
        );
        assert_eq!(fx.config.total_reserves, 750 * E18);
    }

    #[test]
    fn set_reserve_ratio_overwrites() {
        let mut fx = Fixture::new();
        let admin = fx.member(ROLE_ADMIN);

        fx.config.set_reserve_ratio(&admin, 2 * E18).unwrap();
        fx.config.set_reserve_ratio(&admin, E18 / 2).unwrap();
        assert_eq!(fx.config.reserve_ratio, E18 / 2);

        assert_reverts(
            fx.config.set_reserve_ratio(&admin, 0),
            "Reserve ratio must be greater than zero",
        );
        assert_eq!(fx.config.reserve_ratio, E18 / 2);
    }

    #[test]
    fn reserve_operations_exclude_supply_controller() {
        let mut fx = Fixture::new();
        let controller = fx.member(ROLE_SUPPLY_CONTROLLER);
        assert_reverts(
            fx.config.update_reserves(&controller, 1),
            "Not Authorize to call this function",
        );
        assert_reverts(
            fx.config.set_reserve_ratio(&controller, 1),
            "Not Authorize to call this function",
        );
    }

    #[test]
    fn freeze_lifecycle() {
        let mut fx = Fixture::new();
        let officer = fx.member(ROLE_ASSET_PROTECTION);
        let mut entry = freeze_entry(fx.ledger, Pubkey::new_unique());
        let pristine = entry.clone();

        assert_reverts(
            fx.config.unfreeze(&officer, &mut entry),
            "Account is not frozen",
        );

        fx.config.freeze(&officer, &mut entry, 77).unwrap();
        assert!(entry.is_frozen);
        assert_eq!(entry.frozen_by, officer.member);
        assert_reverts(
            fx.config.freeze(&officer, &mut entry, 78),
            "Account already frozen",
        );
        assert_eq!(entry.frozen_at, 77);

        fx.config.unfreeze(&officer, &mut entry).unwrap();
        assert_eq!(entry, pristine);
    }

    #[test]
    fn wipe_destroys_frozen_balance_without_reserve_credit() {
        let mut fx = Fixture::funded(50 * E18);
        let admin = fx.admin.clone();
        let target = Pubkey::new_unique();
        let mut target_holder = holder(fx.ledger, target, 0);
        fx.mint(&admin, &mut target_holder, 40 * E18).unwrap();

        let mut entry = freeze_entry(fx.ledger, target);
        assert_reverts(
            fx.config.wipe_frozen(&admin, &entry, &mut target_holder),
            "Account is not frozen",
        );

        fx.config.freeze(&admin, &mut entry, 1).unwrap();
        let supply = fx.config.total_supply;
        let reserves = fx.config.total_reserves;

        let wiped = fx
            .config
            .wipe_frozen(&admin, &entry, &mut target_holder)
            .unwrap();

        assert_eq!(wiped, 40 * E18);
        assert_eq!(target_holder.balance, 0);
        assert_eq!(fx.config.total_supply, supply - 40 * E18);
        assert_eq!(fx.config.total_reserves, reserves);
        assert!(entry.is_frozen);
    }

    #[test]
    fn wipe_requires_matching_holder() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();
        let mut entry = freeze_entry(fx.ledger, Pubkey::new_unique());
        fx.config.freeze(&admin, &mut entry, 1).unwrap();

        assert_reverts(
            fx.config
                .wipe_frozen(&admin, &entry, &mut fx.admin_holder),
            "Account does not belong to this stablecoin",
        );
        assert_eq!(fx.admin_holder.balance, INITIAL_SUPPLY);
    }

    #[test]
    fn transaction_fee_is_capped() {
        let mut fx = Fixture::new();
        let treasury = fx.member(ROLE_TREASURY);

        fx.config.set_transaction_fee(&treasury, 1_000).unwrap();
        assert_eq!(fx.config.transaction_fee_bps, 1_000);
        assert_eq!(fx.config.transaction_fee(200 * E18).unwrap(), 20 * E18);

        assert_reverts(
            fx.config.set_transaction_fee(&treasury, 10_000),
            "Fee cannot exceed 10%",
        );
        assert_reverts(
            fx.config.set_transaction_fee(&treasury, 1_001),
            "Fee cannot exceed 10%",
        );
        assert_eq!(fx.config.transaction_fee_bps, 1_000);

        let controller = fx.member(ROLE_SUPPLY_CONTROLLER);
        assert_reverts(
            fx.config.set_transaction_fee(&controller, 5),
            "Not Authorize to call this function",
        );
    }

    #[test]
    fn strangers_change_nothing() {
        let mut fx = Fixture::funded(100 * E18);
        let stranger = fx.member(0);
        let mut own = holder(fx.ledger, stranger.member, 10);
        let mut entry = freeze_entry(fx.ledger, stranger.member);
        let mut target = fx.member(0);
        let config_before = fx.config.clone();
        let denied = "Not Authorize to call this function";

        assert_reverts(fx.mint(&stranger, &mut own, 1), denied);
        assert_reverts(fx.config.burn(&stranger, &mut own, false, 1), denied);
        assert_reverts(fx.config.update_reserves(&stranger, 5), denied);
        assert_reverts(fx.config.set_reserve_ratio(&stranger, 5), denied);
        assert_reverts(fx.config.freeze(&stranger, &mut entry, 1), denied);
        assert_reverts(fx.config.unfreeze(&stranger, &mut entry), denied);
        assert_reverts(fx.config.wipe_frozen(&stranger, &entry, &mut own), denied);
        assert_reverts(fx.config.set_transaction_fee(&stranger, 5), denied);
        assert_reverts(fx.config.pause(&stranger), denied);
        assert_reverts(fx.config.unpause(&stranger), denied);
        assert_reverts(
            fx.config.grant_role(&stranger, &mut target, ROLE_ADMIN),
            denied,
        );
        assert_reverts(
            fx.config.revoke_role(&stranger, &mut target, ROLE_ADMIN),
            denied,
        );

        assert_eq!(fx.config, config_before);
        assert_eq!(own.balance, 10);
        assert!(!entry.is_frozen);
        assert_eq!(target.roles, 0);
    }

    #[test]
    fn pause_toggles_once() {
        let mut fx = Fixture::new();
        let admin = fx.member(ROLE_ADMIN);

        assert_reverts(fx.config.unpause(&admin), "Pausable: not paused");
        fx.config.pause(&admin).unwrap();
        assert!(fx.config.is_paused);
        assert_reverts(fx.config.pause(&admin), "Pausable: paused");
        fx.config.unpause(&admin).unwrap();
        assert!(!fx.config.is_paused);

        let officer = fx.member(ROLE_ASSET_PROTECTION);
        assert_reverts(
            fx.config.pause(&officer),
            "Not Authorize to call this function",
        );
    }

    #[test]
    fn governance_stays_available_while_paused() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();
        fx.config.pause(&admin).unwrap();

        fx.config.update_reserves(&admin, 9).unwrap();
        fx.config.set_transaction_fee(&admin, 10).unwrap();
        let mut entry = freeze_entry(fx.ledger, Pubkey::new_unique());
        fx.config.freeze(&admin, &mut entry, 1).unwrap();
        assert!(entry.is_frozen);
    }

    #[test]
    fn grant_and_revoke_roles() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();
        let mut member = fx.member(0);

        assert!(fx
            .config
            .grant_role(&admin, &mut member, ROLE_SUPPLY_CONTROLLER)
            .unwrap());
        assert!(!fx
            .config
            .grant_role(&admin, &mut member, ROLE_SUPPLY_CONTROLLER)
            .unwrap());
        assert!(member.has_any(ROLE_SUPPLY_CONTROLLER));

        assert!(fx
            .config
            .revoke_role(&admin, &mut member, ROLE_SUPPLY_CONTROLLER)
            .unwrap());
        assert_eq!(member.roles, 0);

        let plain_admin = fx.member(ROLE_ADMIN);
        assert_reverts(
            fx.config.grant_role(&plain_admin, &mut member, ROLE_ADMIN),
            "Not Authorize to call this function",
        );
        assert_reverts(
            fx.config.grant_role(&admin, &mut member, 0x03),
            "Invalid role bitmask",
        );
    }

    #[test]
    fn default_admin_cannot_disappear() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();
        let mut own = fx.admin.clone();

        assert_reverts(
            fx.config.revoke_role(&admin, &mut own, ROLE_DEFAULT_ADMIN),
            "Cannot remove the last default admin",
        );
        assert_reverts(
            fx.config.renounce_role(&mut own, ROLE_DEFAULT_ADMIN),
            "Cannot remove the last default admin",
        );

        let mut successor = fx.member(0);
        fx.config
            .grant_role(&admin, &mut successor, ROLE_DEFAULT_ADMIN)
            .unwrap();
        assert_eq!(fx.config.default_admin_count, 2);

        assert!(fx
            .config
            .renounce_role(&mut own, ROLE_DEFAULT_ADMIN)
            .unwrap());
        assert_eq!(fx.config.default_admin_count, 1);
        assert_reverts(
            fx.config.update_reserves(&own, 1),
            "Not Authorize to call this function",
        );
        fx.config.update_reserves(&successor, 1).unwrap();
    }

    #[test]
    fn balances_track_total_supply() {
        let mut fx = Fixture::funded(1_000 * E18);
        let admin = fx.admin.clone();
        let mut alice = holder(fx.ledger, Pubkey::new_unique(), 0);
        let mut bob = holder(fx.ledger, Pubkey::new_unique(), 0);

        fx.mint(&admin, &mut alice, 300 * E18).unwrap();
        fx.mint(&admin, &mut bob, 200 * E18).unwrap();
        fx.config
            .burn(&admin, &mut fx.admin_holder, false, 50 * E18)
            .unwrap();
        let mut entry = freeze_entry(fx.ledger, bob.owner);
        fx.config.freeze(&admin, &mut entry, 1).unwrap();
        fx.config.wipe_frozen(&admin, &entry, &mut bob).unwrap();

        let sum = fx.admin_holder.balance + alice.balance + bob.balance;
        assert_eq!(sum, fx.config.total_supply);
        assert_eq!(fx.config.total_reserves, 1_000 * E18 - 500 * E18 + 50 * E18);
    }

    #[test]
    fn audit_counter_moves_only_on_success() {
        let mut fx = Fixture::new();
        let admin = fx.admin.clone();
        let start = fx.config.audit_counter;

        fx.config.update_reserves(&admin, 10).unwrap();
        let _ = fx.config.update_reserves(&admin, 0);
        fx.config.set_transaction_fee(&admin, 3).unwrap();

        assert_eq!(fx.config.audit_counter, start + 2);
    }
}
