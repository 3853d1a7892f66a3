//! # Bank Module
//!
//! Định nghĩa Bank - ngân hàng chứa danh sách cards và vaults đã đăng ký.
//! Mutators `register`/`deactivate` chỉ được registry gọi, giữ invariant:
//! mỗi card trong `registered_cards` có đúng một vault tương ứng trong
//! `registered_vaults`.

use crate::card::Card;
use crate::error::{CoreError, CoreResult};
use crate::vault::Vault;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ngân hàng với danh sách thẻ/két đã đăng ký.
///
/// Thứ tự trong hai Vec theo thứ tự đăng ký (insertion-stable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Tên ngân hàng - unique key, bất biến
    name: String,
    /// Thẻ đã đăng ký
    registered_cards: Vec<Card>,
    /// Két tương ứng, 1:1 với registered_cards theo card
    registered_vaults: Vec<Vault>,
}

impl Bank {
    /// Tạo Bank rỗng
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            registered_cards: Vec::new(),
            registered_vaults: Vec::new(),
        }
    }

    /// Tên ngân hàng
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Thẻ đã đăng ký, theo thứ tự đăng ký
    pub fn cards(&self) -> &[Card] {
        &self.registered_cards
    }

    /// Két đã mở, theo thứ tự đăng ký
    pub fn vaults(&self) -> &[Vault] {
        &self.registered_vaults
    }

    /// Số thẻ đang đăng ký
    pub fn len(&self) -> usize {
        self.registered_cards.len()
    }

    /// Kiểm tra bank có thẻ nào không
    pub fn is_empty(&self) -> bool {
        self.registered_cards.is_empty()
    }

    /// Kiểm tra card đã có trong bank chưa (structural equality)
    pub fn contains(&self, card: &Card) -> bool {
        self.registered_cards.contains(card)
    }

    /// Tra cứu vault theo card
    pub fn vault_for(&self, card: &Card) -> Option<&Vault> {
        self.registered_vaults.iter().find(|v| v.card == *card)
    }

    /// Tra cứu mutable vault theo card
    pub fn vault_for_mut(&mut self, card: &Card) -> Option<&mut Vault> {
        self.registered_vaults.iter_mut().find(|v| v.card == *card)
    }

    /// Đăng ký card vào bank, mở vault số dư 0 cùng lúc.
    ///
    /// Lỗi:
    /// - `BankMismatch` nếu `card.bank_name` khác tên bank
    /// - `AlreadyExists` nếu card đã có trong bank
    pub fn register(&mut self, card: Card) -> CoreResult<()> {
        if card.bank_name() != self.name {
            return Err(CoreError::bank_mismatch(card.bank_name(), &self.name));
        }
        if self.contains(&card) {
            return Err(CoreError::already_exists(card.number()));
        }
        let vault = Vault::open(card.clone());
        self.registered_cards.push(card);
        self.registered_vaults.push(vault);
        Ok(())
    }

    /// Huỷ đăng ký card, xoá vault tương ứng cùng lúc.
    ///
    /// Lỗi:
    /// - `BankMismatch` nếu `card.bank_name` khác tên bank
    /// - `DoesNotExist` nếu card không có trong bank
    pub fn deactivate(&mut self, card: &Card) -> CoreResult<()> {
        if card.bank_name() != self.name {
            return Err(CoreError::bank_mismatch(card.bank_name(), &self.name));
        }
        let position = self
            .registered_cards
            .iter()
            .position(|c| c == card)
            .ok_or_else(|| CoreError::does_not_exist(format!("Card {}", card.number())))?;

        self.registered_cards.remove(position);
        self.registered_vaults.retain(|v| v.card != *card);
        Ok(())
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bank {} ({} cards)", self.name, self.registered_cards.len())
    }
}
