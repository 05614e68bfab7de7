//! Listing creation and cancellation.

use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    /// Appends one sellable key record to the bucket for `listing_id`,
    /// creating the bucket if absent. Repeated calls with the same id append
    /// additional independent records: N identical listings = N sellable
    /// units. No deduplication of keys, games, or metadata.
    pub fn list_game_key(&mut self, game: Game, listing_id: String, key: String, price: U128) {
        let seller = env::predecessor_account_id();
        let game_id = game.id;

        let record = KeyRecord {
            game,
            key,
            price: price.0,
            seller: seller.clone(),
        };

        let mut bucket = self.listings.remove(&listing_id).unwrap_or_default();
        bucket.push(record);
        self.listings.insert(listing_id.clone(), bucket);

        MarketplaceEvent::GameKeyListed {
            seller,
            listing_id,
            game_id,
            price,
        }
        .emit();
    }

    /// Clears the entire bucket for `listing_id`. Idempotent: cancelling an
    /// empty or nonexistent bucket succeeds with no effect. Any subsequent
    /// buy against the id fails with `NoListingFound`.
    ///
    /// Owner-only. Visible behavior of the predecessor system only ever shows
    /// the deployer cancelling; whether the original lister may cancel is an
    /// open product question (see DESIGN.md).
    #[handle_result]
    pub fn cancel_listing(&mut self, listing_id: String) -> Result<(), MarketplaceError> {
        self.assert_owner("cancel a listing")?;

        let records_removed = self
            .listings
            .remove(&listing_id)
            .map(|bucket| bucket.len() as u64)
            .unwrap_or(0);

        MarketplaceEvent::ListingCancelled {
            listing_id,
            records_removed,
        }
        .emit();

        Ok(())
    }
}
