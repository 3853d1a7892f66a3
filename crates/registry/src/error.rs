//! # Registry Errors
//!
//! Error types cho registry layer, wrapping IO và serde_json errors.

use cardbank_core::CoreError;
use thiserror::Error;

/// Lỗi đọc/ghi snapshot file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias cho StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Registry layer errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Bank with name {0} does not exist")]
    BankNotServed(String),

    #[error("Card {number} is already registered")]
    AlreadyRegistered { number: String },

    #[error("Card {number} is not registered")]
    NotRegistered { number: String },

    /// Push snapshot thất bại; `reverted` cho biết thay đổi in-memory
    /// đã được rollback thành công hay chưa.
    #[error("Failed to update bankdata store (reverted: {reverted}): {source}")]
    UpdateFailed {
        reverted: bool,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias cho RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Tạo BankNotServed error
    pub fn bank_not_served(name: &str) -> Self {
        Self::BankNotServed(name.to_string())
    }

    /// Tạo AlreadyRegistered error
    pub fn already_registered(number: &str) -> Self {
        Self::AlreadyRegistered {
            number: number.to_string(),
        }
    }

    /// Tạo NotRegistered error
    pub fn not_registered(number: &str) -> Self {
        Self::NotRegistered {
            number: number.to_string(),
        }
    }

    /// Kiểm tra có phải lỗi push thất bại không
    pub fn is_update_failed(&self) -> bool {
        matches!(self, Self::UpdateFailed { .. })
    }

    /// Trả về flag reverted nếu là lỗi push thất bại
    pub fn reverted(&self) -> Option<bool> {
        match self {
            Self::UpdateFailed { reverted, .. } => Some(*reverted),
            _ => None,
        }
    }
}
