use log::info;
use primitive_types::U256;

use crate::config::LedgerConfig;
use crate::crypto::{compute_contract_address, Address};

use super::operations::{self, RuntimeContext, TokenStorage};
use super::{LedgerState, TokenError, TokenEvent, TokenMetadata, TokenResult};

/// A deployed ledger: fixed metadata plus the state it owns
///
/// Every call takes the caller identity explicitly; the host is expected to
/// run calls one at a time.
#[derive(Clone, Debug)]
pub struct Ledger<S: TokenStorage = LedgerState> {
    metadata: TokenMetadata,
    storage: S,
}

impl Ledger<LedgerState> {
    /// Deploy a ledger owned by `deployer`
    ///
    /// The scaled initial supply is credited to the ledger's own account,
    /// derived from the deployer and the token name.
    pub fn new(config: &LedgerConfig, deployer: Address) -> TokenResult<Self> {
        config.validate()?;
        if deployer.is_zero() {
            return Err(TokenError::InvalidOwner);
        }

        let contract = compute_contract_address(&deployer, &config.name);
        let supply = config.scaled_initial_supply()?;
        let storage = LedgerState::new(deployer, contract, supply);

        info!(
            "Deployed {} ({}) at {} with supply {}",
            config.name, config.symbol, contract, supply
        );

        Ok(Self {
            metadata: TokenMetadata {
                name: config.name.clone(),
                symbol: config.symbol.clone(),
                decimals: config.decimals,
            },
            storage,
        })
    }

    /// Deploy with the default configuration
    pub fn with_defaults(deployer: Address) -> TokenResult<Self> {
        Self::new(&LedgerConfig::default(), deployer)
    }

    pub fn events(&self) -> &[TokenEvent] {
        self.storage.events()
    }

    /// Drain the event log
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        self.storage.take_events()
    }
}

impl<S: TokenStorage> Ledger<S> {
    /// Wrap an existing storage backend
    pub fn from_storage(metadata: TokenMetadata, storage: S) -> Self {
        Self { metadata, storage }
    }

    pub fn state(&self) -> &S {
        &self.storage
    }

    pub fn into_state(self) -> S {
        self.storage
    }

    // ===== Metadata =====

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// The ledger's own account
    pub fn contract_address(&self) -> Address {
        self.storage.contract_address()
    }

    // ===== Access control =====

    pub fn owner(&self) -> Address {
        operations::owner(&self.storage)
    }

    /// Whether `caller` is the owner
    pub fn is_owner(&self, caller: &Address) -> bool {
        operations::is_owner(&self.storage, caller)
    }

    pub fn transfer_ownership(&mut self, caller: &Address, new_owner: &Address) -> TokenResult<()> {
        operations::transfer_ownership(&mut self.storage, &RuntimeContext::new(*caller), new_owner)
    }

    // ===== Pause gate =====

    pub fn paused(&self) -> bool {
        operations::paused(&self.storage)
    }

    pub fn pause(&mut self, caller: &Address) -> TokenResult<()> {
        operations::pause(&mut self.storage, &RuntimeContext::new(*caller))
    }

    pub fn unpause(&mut self, caller: &Address) -> TokenResult<()> {
        operations::unpause(&mut self.storage, &RuntimeContext::new(*caller))
    }

    // ===== Burn policy =====

    pub fn burn_rate(&self) -> u64 {
        operations::burn_rate(&self.storage)
    }

    pub fn is_transfer_with_burn_enabled(&self) -> bool {
        operations::is_transfer_with_burn_enabled(&self.storage)
    }

    pub fn enable_transfer_with_burn(&mut self, caller: &Address) -> TokenResult<()> {
        operations::enable_transfer_with_burn(&mut self.storage, &RuntimeContext::new(*caller))
    }

    pub fn disable_transfer_with_burn(&mut self, caller: &Address) -> TokenResult<()> {
        operations::disable_transfer_with_burn(&mut self.storage, &RuntimeContext::new(*caller))
    }

    pub fn set_burn_rate(&mut self, caller: &Address, rate: u64) -> TokenResult<()> {
        operations::set_burn_rate(&mut self.storage, &RuntimeContext::new(*caller), rate)
    }

    // ===== Supply and balances =====

    pub fn total_supply(&self) -> U256 {
        operations::total_supply(&self.storage)
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        operations::balance_of(&self.storage, account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        operations::allowance(&self.storage, owner, spender)
    }

    pub fn mint(&mut self, caller: &Address, amount: U256) -> TokenResult<()> {
        operations::mint(&mut self.storage, &RuntimeContext::new(*caller), amount)
    }

    pub fn send(&mut self, caller: &Address, to: &Address, amount: U256) -> TokenResult<()> {
        operations::send(&mut self.storage, &RuntimeContext::new(*caller), to, amount)
    }

    pub fn approve(&mut self, caller: &Address, spender: &Address, amount: U256) -> TokenResult<()> {
        operations::approve(&mut self.storage, &RuntimeContext::new(*caller), spender, amount)
    }

    pub fn transfer(&mut self, caller: &Address, to: &Address, amount: U256) -> TokenResult<()> {
        operations::transfer(&mut self.storage, &RuntimeContext::new(*caller), to, amount)
    }

    pub fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> TokenResult<()> {
        operations::transfer_from(&mut self.storage, &RuntimeContext::new(*caller), from, to, amount)
    }
}
