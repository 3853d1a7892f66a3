//! # Cardbank Core
//!
//! Core domain types cho Cardbank - hệ thống đăng ký thẻ ngân hàng.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Entities                          │
//! │  ┌────────┐   ┌────────┐   ┌────────┐   ┌────────────┐  │
//! │  │  User  │──▶│  Card  │──▶│ Vault  │──▶│    Bank    │  │
//! │  │(holder)│   │(số thẻ)│   │(số dư) │   │(tập hợp)   │  │
//! │  └────────┘   └────────┘   └────────┘   └────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! - `User`: chủ thẻ, chỉ gồm họ tên
//! - `Card`: thẻ với số thẻ, CVV, bank_name, hạn sử dụng và transaction limit
//! - `Vault`: két chứa số dư, quan hệ 1:1 với Card đã đăng ký
//! - `Bank`: ngân hàng chứa danh sách cards + vaults đã đăng ký

pub mod bank;
pub mod card;
pub mod error;
pub mod expiry;
pub mod user;
pub mod vault;

pub use bank::Bank;
pub use card::{Card, DEFAULT_TRANSACTION_LIMIT};
pub use error::{CoreError, CoreResult};
pub use expiry::parse_expiration;
pub use user::User;
pub use vault::Vault;
