//! Marketplace domain types.

use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

/// Descriptive game metadata, supplied in full with every listing call.
/// Deliberately not deduplicated across listings: two records for the same
/// game carry independent copies.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Game {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub rating: u64,
    pub tags: Vec<String>,
    pub genres: Vec<String>,
}

/// One sellable unit: a license key bound to a game, price, and seller.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct KeyRecord {
    pub game: Game,
    /// Opaque license key; consumed exactly once.
    pub key: String,
    /// yoctoNEAR.
    pub price: u128,
    pub seller: AccountId,
}

/// A completed purchase, owned by the buyer. Append-only once recorded.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct GameBought {
    pub game_id: u64,
    pub key: String,
}

/// View projection of an unsold record (JSON-only, not stored on-chain).
/// The license key itself is never exposed through listing views.
#[near(serializers = [json])]
pub struct KeyRecordView {
    pub game: Game,
    pub price: U128,
    pub seller: AccountId,
}

impl From<&KeyRecord> for KeyRecordView {
    fn from(record: &KeyRecord) -> Self {
        Self {
            game: record.game.clone(),
            price: U128(record.price),
            seller: record.seller.clone(),
        }
    }
}
