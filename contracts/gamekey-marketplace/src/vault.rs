//! Seller balance withdrawal with check-effects-interaction ordering.

use crate::*;
use near_sdk::json_types::U128;
use near_sdk::{serde_json, NearToken, Promise, PromiseOrValue, PromiseResult};

#[near]
impl Contract {
    /// Transfers the caller's entire accrued balance to the caller.
    ///
    /// The stored balance is zeroed before the transfer promise is created,
    /// so a reentrant call observes zero and cannot double-spend. The private
    /// callback restores the balance if the transfer fails, making the whole
    /// operation behave as a single rolled-back transaction. A zero balance
    /// is a harmless no-op.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<PromiseOrValue<()>, MarketplaceError> {
        let seller = env::predecessor_account_id();
        let amount = self.balances.get(&seller).copied().unwrap_or(0);

        if amount == 0 {
            return Ok(PromiseOrValue::Value(()));
        }

        // Storage-locked yoctoNEAR cannot leave the account; only the
        // remainder is transferable.
        let locked = env::storage_byte_cost().as_yoctonear() * env::storage_usage() as u128;
        let available = env::account_balance().as_yoctonear().saturating_sub(locked);
        if amount > available {
            return Err(MarketplaceError::TransferFailed(format!(
                "Contract holds less than the {} yoctoNEAR owed",
                amount
            )));
        }

        self.balances.insert(seller.clone(), 0);

        Ok(PromiseOrValue::Promise(
            Promise::new(seller.clone())
                .transfer(NearToken::from_yoctonear(amount))
                .then(Promise::new(env::current_account_id()).function_call(
                    "on_withdraw".to_string(),
                    serde_json::json!({
                        "seller": seller,
                        "amount": U128(amount),
                    })
                    .to_string()
                    .into_bytes(),
                    NearToken::from_yoctonear(0),
                    GAS_FOR_WITHDRAW_CALLBACK,
                )),
        ))
    }

    #[private]
    pub fn on_withdraw(&mut self, seller: AccountId, amount: U128) {
        match env::promise_result(0) {
            PromiseResult::Successful(_) => {
                MarketplaceEvent::BalanceWithdrawn { seller, amount }.emit();
            }
            PromiseResult::Failed => {
                // Re-credit on top of the current balance: sales completed
                // while the transfer was in flight must not be lost.
                self.internal_credit(&seller, amount.0);
                MarketplaceEvent::WithdrawalFailed { seller, amount }.emit();
            }
        }
    }
}
