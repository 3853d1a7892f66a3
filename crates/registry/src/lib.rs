//! # Cardbank Registry
//!
//! Registry layer cho Cardbank - cache bankdata + flat-file snapshot.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Registry                           │
//! │  ┌──────────────┐   reload/push   ┌───────────────────┐  │
//! │  │    cache     │◀───────────────▶│   SnapshotStore   │  │
//! │  │ (bank→Bank)  │                 │  (bankdata.json)  │  │
//! │  └──────────────┘                 └───────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Disk là nguồn sự thật: mọi lookup reload cache từ snapshot trước.
//! Register/deactivate là two-phase: mutate cache, push, rollback bằng
//! thao tác ngược nếu push thất bại.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cardbank_registry::Registry;
//!
//! let mut registry = Registry::new(vec!["SBI".into()], "data/bankdata.json")?;
//! registry.register_account(card)?;
//! let vault = registry.find_vault(&card)?;
//! ```

pub mod error;
pub mod registry;
pub mod store;

pub use error::{RegistryError, RegistryResult, StoreError, StoreResult};
pub use registry::Registry;
pub use store::{SnapshotStore, DEFAULT_SNAPSHOT_PATH};
