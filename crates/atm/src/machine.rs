//! Machine facade - resolves a card to its vault and applies the
//! deposit/withdraw transaction policy.
//!
//! Balance changes mutate the registry cache in place and are NOT pushed
//! to the snapshot automatically; callers that want durable balances call
//! [`Machine::commit`] afterwards.

use crate::error::{AtmError, AtmResult};
use cardbank_core::Card;
use cardbank_registry::{Registry, RegistryError};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Transaction type accepted by [`Machine::create_transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Add funds to the vault
    Deposit,
    /// Remove funds from the vault
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" => Some(TransactionKind::Withdraw),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ATM machine - thin orchestration over the registry.
pub struct Machine {
    registry: Registry,
}

impl Machine {
    /// Create a machine serving the given banks, backed by the snapshot
    /// at `snapshot_path`.
    pub fn new<P: AsRef<Path>>(banks_served: Vec<String>, snapshot_path: P) -> AtmResult<Self> {
        let registry = Registry::new(banks_served, snapshot_path)?;
        Ok(Self { registry })
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access to the underlying registry
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Apply a deposit/withdraw transaction to the card's vault.
    ///
    /// Returns the new balance. The mutation lives in the registry cache
    /// only; call [`commit`](Self::commit) to persist it.
    ///
    /// Errors:
    /// - `VaultNotFound` if the card has no registered vault
    /// - `LimitExceeded` if `amount` exceeds the card's transaction limit
    /// - `WithdrawExceeded` if a withdrawal exceeds the current balance
    pub fn create_transaction(
        &mut self,
        card: &Card,
        amount: i64,
        kind: TransactionKind,
    ) -> AtmResult<i64> {
        if amount <= 0 {
            return Err(AtmError::InvalidAmount(format!(
                "Transaction amount must be positive: {amount}"
            )));
        }

        let limit = card.transaction_limit();
        let vault = self
            .registry
            .find_vault_mut(card)?
            .ok_or_else(|| AtmError::vault_not_found(card.number()))?;

        if amount > limit {
            return Err(AtmError::LimitExceeded {
                limit,
                requested: amount,
            });
        }

        match kind {
            TransactionKind::Deposit => vault.credit(amount),
            TransactionKind::Withdraw => {
                if amount > vault.balance {
                    return Err(AtmError::WithdrawExceeded {
                        balance: vault.balance,
                        requested: amount,
                    });
                }
                vault.debit(amount);
            }
        }

        let balance = vault.balance;
        info!(number = card.number(), kind = kind.as_str(), amount, balance, "transaction applied");
        Ok(balance)
    }

    /// Persist the current cache (including un-pushed balance changes)
    pub fn commit(&self) -> AtmResult<()> {
        self.registry.push().map_err(RegistryError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardbank_core::User;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn card(number: &str, bank: &str) -> Card {
        let holder = User::new("Amrit", "Sutradhar");
        let expiration = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        Card::new(holder, number, "1234", bank, expiration).unwrap()
    }

    fn machine(dir: &tempfile::TempDir) -> Machine {
        Machine::new(vec!["SBI".to_string()], dir.path().join("bankdata.json")).unwrap()
    }

    #[test]
    fn test_transaction_kind_str() {
        assert_eq!(TransactionKind::Deposit.as_str(), "deposit");
        assert_eq!(
            TransactionKind::from_str("WITHDRAW"),
            Some(TransactionKind::Withdraw)
        );
        assert_eq!(TransactionKind::from_str("transfer"), None);
    }

    #[test]
    fn test_deposit_on_fresh_card() {
        let dir = tempdir().unwrap();
        let mut machine = machine(&dir);
        let card = card("1234123412341234", "SBI");

        machine.registry_mut().register_account(card.clone()).unwrap();

        let balance = machine
            .create_transaction(&card, 1000, TransactionKind::Deposit)
            .unwrap();
        assert_eq!(balance, 1000);
    }

    #[test]
    fn test_deposit_over_limit() {
        let dir = tempdir().unwrap();
        let mut machine = machine(&dir);
        let card = card("1234123412341234", "SBI");

        machine.registry_mut().register_account(card.clone()).unwrap();

        let err = machine
            .create_transaction(&card, 20_000, TransactionKind::Deposit)
            .unwrap_err();
        assert!(matches!(
            err,
            AtmError::LimitExceeded {
                limit: 10_000,
                requested: 20_000
            }
        ));

        // balance không đổi
        let vault = machine.registry_mut().find_vault(&card).unwrap().unwrap();
        assert_eq!(vault.balance, 0);
    }

    #[test]
    fn test_withdraw_over_balance() {
        let dir = tempdir().unwrap();
        let mut machine = machine(&dir);
        let card = card("1234123412341234", "SBI");

        machine.registry_mut().register_account(card.clone()).unwrap();
        machine
            .create_transaction(&card, 100, TransactionKind::Deposit)
            .unwrap();
        machine.commit().unwrap();

        let err = machine
            .create_transaction(&card, 500, TransactionKind::Withdraw)
            .unwrap_err();
        assert!(matches!(
            err,
            AtmError::WithdrawExceeded {
                balance: 100,
                requested: 500
            }
        ));

        let vault = machine.registry_mut().find_vault(&card).unwrap().unwrap();
        assert_eq!(vault.balance, 100);
    }

    #[test]
    fn test_withdraw_within_balance() {
        let dir = tempdir().unwrap();
        let mut machine = machine(&dir);
        let card = card("1234123412341234", "SBI");

        machine.registry_mut().register_account(card.clone()).unwrap();
        machine
            .create_transaction(&card, 1000, TransactionKind::Deposit)
            .unwrap();
        machine.commit().unwrap();

        let balance = machine
            .create_transaction(&card, 400, TransactionKind::Withdraw)
            .unwrap();
        assert_eq!(balance, 600);
    }

    #[test]
    fn test_transaction_on_unregistered_card() {
        let dir = tempdir().unwrap();
        let mut machine = machine(&dir);
        let card = card("1234123412341234", "SBI");

        let err = machine
            .create_transaction(&card, 100, TransactionKind::Deposit)
            .unwrap_err();
        assert!(matches!(err, AtmError::VaultNotFound { .. }));
    }

    #[test]
    fn test_invalid_amount() {
        let dir = tempdir().unwrap();
        let mut machine = machine(&dir);
        let card = card("1234123412341234", "SBI");

        machine.registry_mut().register_account(card.clone()).unwrap();

        let err = machine
            .create_transaction(&card, 0, TransactionKind::Deposit)
            .unwrap_err();
        assert!(err.is_policy_violation());
    }

    #[test]
    fn test_balance_not_durable_without_commit() {
        let dir = tempdir().unwrap();
        let card = card("1234123412341234", "SBI");

        {
            let mut machine = machine(&dir);
            machine.registry_mut().register_account(card.clone()).unwrap();
            machine
                .create_transaction(&card, 1000, TransactionKind::Deposit)
                .unwrap();
            // không commit
        }

        let mut machine = machine(&dir);
        let vault = machine.registry_mut().find_vault(&card).unwrap().unwrap();
        assert_eq!(vault.balance, 0);
    }

    #[test]
    fn test_commit_makes_balance_durable() {
        let dir = tempdir().unwrap();
        let card = card("1234123412341234", "SBI");

        {
            let mut machine = machine(&dir);
            machine.registry_mut().register_account(card.clone()).unwrap();
            machine
                .create_transaction(&card, 1000, TransactionKind::Deposit)
                .unwrap();
            machine.commit().unwrap();
        }

        let mut machine = machine(&dir);
        let vault = machine.registry_mut().find_vault(&card).unwrap().unwrap();
        assert_eq!(vault.balance, 1000);
    }
}
