//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` so public methods can return
//! `Result<_, MarketplaceError>` under `#[handle_result]`. When a method
//! returns `Err`, the SDK calls `env::panic_str()` with the Display message,
//! which aborts the whole invocation and reverts every state mutation.

use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketplaceError {
    /// No unsold record matches the requested listing/game combination.
    /// Covers never-listed, exhausted, and cancelled listings alike.
    NoListingFound(String),
    /// Attached deposit does not equal the declared price.
    PaymentMismatch(String),
    /// The outbound withdrawal payment cannot be delivered.
    TransferFailed(String),
    /// Caller lacks permission for this action.
    Unauthorized(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoListingFound(msg) => write!(f, "NoListingFound: {}", msg),
            Self::PaymentMismatch(msg) => write!(f, "PaymentMismatch: {}", msg),
            Self::TransferFailed(msg) => write!(f, "TransferFailed: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketplaceError {
    pub fn listing_not_found(listing_id: &str) -> Self {
        Self::NoListingFound(format!("No unsold key under listing '{}'", listing_id))
    }

    pub fn game_not_found(listing_id: &str, game_id: u64) -> Self {
        Self::NoListingFound(format!(
            "No unsold key for game {} under listing '{}'",
            game_id, listing_id
        ))
    }

    pub fn payment_mismatch(required: U128, attached: U128) -> Self {
        Self::PaymentMismatch(format!(
            "Attached deposit {} does not match price {}",
            attached.0, required.0
        ))
    }

    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only the contract owner can {}", what))
    }
}
