//! # Card Module
//!
//! Định nghĩa Card - thẻ ngân hàng với số thẻ, CVV, bank_name và hạn sử dụng.
//! Số thẻ, bank_name và expiration bất biến sau khi tạo; CVV và
//! transaction_limit có thể đổi qua setter có validation.

use crate::error::{CoreError, CoreResult};
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction limit mặc định cho thẻ mới
pub const DEFAULT_TRANSACTION_LIMIT: i64 = 10_000;

/// Độ dài số thẻ hợp lệ (16-19 chữ số)
const NUMBER_LEN: (usize, usize) = (16, 19);
/// Độ dài CVV hợp lệ (3-4 chữ số)
const CVV_LEN: (usize, usize) = (3, 4);

/// Thẻ ngân hàng.
///
/// Equality là structural trên toàn bộ fields; registry dùng cặp
/// (number, cvv) làm identity khi tra cứu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    holder: User,
    number: String,
    cvv: String,
    bank_name: String,
    expiration: DateTime<Utc>,
    transaction_limit: i64,
}

impl Card {
    /// Tạo Card mới với transaction limit mặc định.
    ///
    /// Trả về `CoreError::Validation` nếu số thẻ hoặc CVV sai định dạng.
    pub fn new(
        holder: User,
        number: &str,
        cvv: &str,
        bank_name: &str,
        expiration: DateTime<Utc>,
    ) -> CoreResult<Self> {
        Self::validate_number(number)?;
        Self::validate_cvv(cvv)?;

        Ok(Self {
            holder,
            number: number.to_string(),
            cvv: cvv.to_string(),
            bank_name: bank_name.to_string(),
            expiration,
            transaction_limit: DEFAULT_TRANSACTION_LIMIT,
        })
    }

    /// Đổi transaction limit (builder style)
    pub fn with_transaction_limit(mut self, limit: i64) -> Self {
        self.transaction_limit = limit;
        self
    }

    /// Chủ thẻ
    pub fn holder(&self) -> &User {
        &self.holder
    }

    /// Số thẻ (bất biến)
    pub fn number(&self) -> &str {
        &self.number
    }

    /// CVV hiện tại
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Tên ngân hàng phát hành (bất biến)
    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    /// Hạn sử dụng (bất biến)
    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// Transaction limit hiện tại
    pub fn transaction_limit(&self) -> i64 {
        self.transaction_limit
    }

    /// Đổi CVV, validate như lúc tạo
    pub fn set_cvv(&mut self, cvv: &str) -> CoreResult<()> {
        Self::validate_cvv(cvv)?;
        self.cvv = cvv.to_string();
        Ok(())
    }

    /// Đổi transaction limit
    pub fn set_transaction_limit(&mut self, limit: i64) {
        self.transaction_limit = limit;
    }

    /// Validate số thẻ: 16-19 ký tự, chỉ chữ số ASCII
    fn validate_number(number: &str) -> CoreResult<()> {
        if number.len() < NUMBER_LEN.0 || number.len() > NUMBER_LEN.1 {
            return Err(CoreError::validation(format!(
                "Card Number must be {}-{} digits long, got {}",
                NUMBER_LEN.0,
                NUMBER_LEN.1,
                number.len()
            )));
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation(
                "Card Number can only contain valid digits from 0-9",
            ));
        }
        Ok(())
    }

    /// Validate CVV: 3-4 ký tự, chỉ chữ số ASCII
    fn validate_cvv(cvv: &str) -> CoreResult<()> {
        if cvv.len() < CVV_LEN.0 || cvv.len() > CVV_LEN.1 {
            return Err(CoreError::validation(format!(
                "CVV must be {}-{} digits long, got {}",
                CVV_LEN.0,
                CVV_LEN.1,
                cvv.len()
            )));
        }
        if !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation(
                "CVV can only contain valid digits from 0-9",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Không in CVV đầy đủ ra log/console
        write!(
            f,
            "Card {} ({}, holder: {})",
            self.number,
            self.bank_name,
            self.holder.full_name()
        )
    }
}
