//! # Cardbank ATM
//!
//! Transaction facade for Cardbank: resolves a card to its vault through
//! the registry and applies the deposit/withdraw policy (transaction limit,
//! no overdraw).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cardbank_atm::{Machine, TransactionKind};
//!
//! let mut atm = Machine::new(vec!["SBI".into()], "data/bankdata.json")?;
//! atm.registry_mut().register_account(card.clone())?;
//! let balance = atm.create_transaction(&card, 1000, TransactionKind::Deposit)?;
//! atm.commit()?; // persist the balance change
//! ```

pub mod error;
pub mod machine;

pub use error::{AtmError, AtmResult};
pub use machine::{Machine, TransactionKind};
