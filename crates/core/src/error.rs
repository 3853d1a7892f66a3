//! # Error Module
//!
//! Định nghĩa các domain errors cho Cardbank sử dụng thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Các lỗi nghiệp vụ ở tầng entity, không liên quan đến persistence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    // === Registration errors ===
    #[error("Card {number} already exists")]
    AlreadyExists { number: String },

    #[error("{0} does not exist")]
    DoesNotExist(String),

    #[error("Card 'bank_name' ({card_bank}) does not match unique identifier ({bank}) for specified bank")]
    BankMismatch { card_bank: String, bank: String },

    // === Validation errors ===
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Tạo AlreadyExists error từ số thẻ
    pub fn already_exists(number: &str) -> Self {
        Self::AlreadyExists {
            number: number.to_string(),
        }
    }

    /// Tạo DoesNotExist error
    pub fn does_not_exist(what: impl Into<String>) -> Self {
        Self::DoesNotExist(what.into())
    }

    /// Tạo BankMismatch error
    pub fn bank_mismatch(card_bank: &str, bank: &str) -> Self {
        Self::BankMismatch {
            card_bank: card_bank.to_string(),
            bank: bank.to_string(),
        }
    }

    /// Tạo Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Kiểm tra có phải lỗi validation không
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }

    /// Kiểm tra có phải lỗi not found không
    pub fn is_does_not_exist(&self) -> bool {
        matches!(self, CoreError::DoesNotExist(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::already_exists("1234123412341234");
        assert_eq!(err.to_string(), "Card 1234123412341234 already exists");

        let err = CoreError::bank_mismatch("HDFC", "SBI");
        assert!(err.to_string().contains("HDFC"));
        assert!(err.to_string().contains("SBI"));
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::validation("CVV can only contain valid digits from 0-9");
        assert!(err.is_validation());
        assert!(!err.is_does_not_exist());

        let err = CoreError::does_not_exist("Bank with name SBI");
        assert!(err.is_does_not_exist());
    }
}
