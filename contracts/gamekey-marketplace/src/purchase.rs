//! Key purchase: consume one unsold record, credit the seller, record the buy.

use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    /// Buys one key for `game_id` out of the bucket for `listing_id`.
    ///
    /// The attached deposit must equal `price` exactly; excess is not
    /// refunded and shortfall is rejected, both as `PaymentMismatch`.
    /// Proceeds are credited to `seller`'s withdrawable balance and the
    /// consumed `{game_id, key}` pair is appended to the caller's history.
    ///
    /// Guards run before any mutation, so a failed call leaves the listing
    /// bucket, balances, and purchase history exactly as they were.
    #[payable]
    #[handle_result]
    pub fn buy_game_key(
        &mut self,
        listing_id: String,
        game_id: u64,
        seller: AccountId,
        price: U128,
    ) -> Result<(), MarketplaceError> {
        let buyer = env::predecessor_account_id();
        let attached = env::attached_deposit().as_yoctonear();

        // Earliest-inserted record for the game wins; a bucket holding N
        // records for `game_id` supports exactly N buys before exhaustion.
        let position = {
            let bucket = self
                .listings
                .get(&listing_id)
                .ok_or_else(|| MarketplaceError::listing_not_found(&listing_id))?;

            bucket
                .iter()
                .position(|record| record.game.id == game_id)
                .ok_or_else(|| MarketplaceError::game_not_found(&listing_id, game_id))?
        };

        if attached != price.0 {
            return Err(MarketplaceError::payment_mismatch(price, U128(attached)));
        }

        // O(1) swap-remove; bucket order among the remaining records is not
        // an invariant anyone relies on. An exhausted bucket is dropped from
        // storage entirely.
        // Safety: existence confirmed above while resolving `position`.
        let mut bucket = self.listings.remove(&listing_id).unwrap();
        let record = bucket.swap_remove(position);
        if !bucket.is_empty() {
            self.listings.insert(listing_id.clone(), bucket);
        }

        self.internal_credit(&seller, price.0);

        let mut history = self.purchases.get(&buyer).cloned().unwrap_or_default();
        history.push(GameBought {
            game_id,
            key: record.key,
        });
        self.purchases.insert(buyer.clone(), history);

        MarketplaceEvent::GameKeyPurchased {
            buyer,
            seller,
            listing_id,
            game_id,
            price,
        }
        .emit();

        Ok(())
    }
}
