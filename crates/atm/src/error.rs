//! Transaction facade errors

use cardbank_registry::RegistryError;
use thiserror::Error;

/// Errors raised by the ATM facade.
#[derive(Debug, Error)]
pub enum AtmError {
    // === Lookup errors ===
    #[error("Vault for card {number} does not exist")]
    VaultNotFound { number: String },

    // === Transaction policy errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("The transaction-limit ({limit}) of your card has been exceeded (requested {requested})")]
    LimitExceeded { limit: i64, requested: i64 },

    #[error("Your withdrawal-amount ({requested}) has exceeded your total-balance ({balance})")]
    WithdrawExceeded { balance: i64, requested: i64 },

    // === Wrapped errors ===
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type alias for ATM operations
pub type AtmResult<T> = Result<T, AtmError>;

impl AtmError {
    /// Create vault not found error
    pub fn vault_not_found(number: &str) -> Self {
        Self::VaultNotFound {
            number: number.to_string(),
        }
    }

    /// Check whether this is a transaction policy violation
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::LimitExceeded { .. } | Self::WithdrawExceeded { .. }
        )
    }
}
