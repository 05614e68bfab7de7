//! NEP-297 `EVENT_JSON:` structured log events.
//!
//! License keys never appear in event payloads; a buyer reads their keys
//! through `get_games_bought` only.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum MarketplaceEvent {
    #[event_version("1.0.0")]
    GameKeyListed {
        seller: AccountId,
        listing_id: String,
        game_id: u64,
        price: U128,
    },
    #[event_version("1.0.0")]
    GameKeyPurchased {
        buyer: AccountId,
        seller: AccountId,
        listing_id: String,
        game_id: u64,
        price: U128,
    },
    #[event_version("1.0.0")]
    ListingCancelled {
        listing_id: String,
        records_removed: u64,
    },
    #[event_version("1.0.0")]
    BalanceWithdrawn { seller: AccountId, amount: U128 },
    #[event_version("1.0.0")]
    WithdrawalFailed { seller: AccountId, amount: U128 },
    #[event_version("1.0.0")]
    OwnerChanged {
        old_owner: AccountId,
        new_owner: AccountId,
    },
}
