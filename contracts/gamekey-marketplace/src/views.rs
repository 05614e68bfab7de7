//! Read-only views. No side effects.

use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    /// Accrued, withdrawable sale proceeds for `account_id`. Accounts that
    /// never sold anything read as 0.
    pub fn get_balance(&self, account_id: AccountId) -> U128 {
        U128(self.balances.get(&account_id).copied().unwrap_or(0))
    }

    /// The purchases of `account_id`, in the exact order they were recorded.
    /// Duplicate buys of the same game are retained as separate entries.
    pub fn get_games_bought(&self, account_id: AccountId) -> Vec<GameBought> {
        self.purchases.get(&account_id).cloned().unwrap_or_default()
    }

    /// Unsold records under `listing_id`, with license keys redacted.
    pub fn get_listing(&self, listing_id: String) -> Vec<KeyRecordView> {
        self.listings
            .get(&listing_id)
            .map(|bucket| bucket.iter().map(KeyRecordView::from).collect())
            .unwrap_or_default()
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }
}
