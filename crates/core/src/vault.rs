//! # Vault Module
//!
//! Định nghĩa Vault - két chứa số dư, quan hệ 1:1 với Card đã đăng ký.
//! Vault được tạo cùng lúc với đăng ký thẻ và xoá cùng lúc với deactivate.

use crate::card::Card;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Két số dư của một thẻ đã đăng ký.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    /// Chủ két (copy từ chủ thẻ lúc mở)
    pub holder: User,
    /// Thẻ gắn với két (bất biến)
    pub card: Card,
    /// Số dư hiện tại
    pub balance: i64,
}

impl Vault {
    /// Mở Vault mới cho một Card, số dư 0
    pub fn open(card: Card) -> Self {
        Self {
            holder: card.holder().clone(),
            card,
            balance: 0,
        }
    }

    /// Cộng tiền vào số dư
    pub fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Trừ tiền khỏi số dư
    pub fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }
}

impl fmt::Display for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vault for card {} (holder: {}, balance: {})",
            self.card.number(),
            self.holder.full_name(),
            self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn card() -> Card {
        let holder = User::new("Amrit", "Sutradhar");
        let expiration = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        Card::new(holder, "1234123412341234", "1234", "SBI", expiration).unwrap()
    }

    #[test]
    fn test_vault_open() {
        let card = card();
        let vault = Vault::open(card.clone());

        assert_eq!(vault.balance, 0);
        assert_eq!(vault.card, card);
        assert_eq!(vault.holder, *card.holder());
    }

    #[test]
    fn test_vault_credit_debit() {
        let mut vault = Vault::open(card());

        vault.credit(1000);
        assert_eq!(vault.balance, 1000);

        vault.debit(400);
        assert_eq!(vault.balance, 600);
    }
}
