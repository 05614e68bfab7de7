//! GameKey Marketplace — single-use game license keys sold for NEAR, with
//! per-seller withdrawable balances and per-buyer purchase history.
//!
//! Every method invocation is totally ordered by the runtime and either
//! commits all of its state mutations or none of them; a returned
//! `MarketplaceError` panics via `#[handle_result]` and reverts the call.

use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, Gas, PanicOnDefault};

// --- Modules ---

mod errors;
mod events;
mod listing;
mod purchase;
mod types;
mod vault;
mod views;

pub use errors::MarketplaceError;
pub use events::MarketplaceEvent;
pub use types::*;

const GAS_FOR_WITHDRAW_CALLBACK: Gas = Gas::from_tgas(10);

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    Balances,
    Purchases,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    /// Buckets of unsold key records, keyed by seller-chosen listing id.
    /// Ids are not unique across sellers or games; one bucket may hold
    /// records for different games from different sellers.
    pub listings: IterableMap<String, Vec<KeyRecord>>,
    /// Accrued sale proceeds per seller, in yoctoNEAR.
    pub balances: LookupMap<AccountId, u128>,
    /// Append-only purchase history per buyer, in recording order.
    pub purchases: LookupMap<AccountId, Vec<GameBought>>,
}

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner_id,
            listings: IterableMap::new(StorageKey::Listings),
            balances: LookupMap::new(StorageKey::Balances),
            purchases: LookupMap::new(StorageKey::Purchases),
        }
    }

    pub fn set_owner(&mut self, new_owner: AccountId) {
        let old_owner = self.owner_id.clone();
        near_sdk::require!(
            env::predecessor_account_id() == old_owner,
            "Only the contract owner can change ownership"
        );
        self.owner_id = new_owner.clone();

        MarketplaceEvent::OwnerChanged {
            old_owner,
            new_owner,
        }
        .emit();
    }
}

// --- Internal ---

impl Contract {
    pub(crate) fn assert_owner(&self, what: &str) -> Result<(), MarketplaceError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(MarketplaceError::only_owner(what));
        }
        Ok(())
    }

    pub(crate) fn internal_credit(&mut self, seller: &AccountId, amount: u128) {
        let balance = self.balances.get(seller).copied().unwrap_or(0);
        self.balances.insert(seller.clone(), balance + amount);
    }
}
