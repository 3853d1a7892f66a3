//! Registry - cache bankdata in-memory đồng bộ với snapshot trên disk.
//!
//! Disk là nguồn sự thật: mọi thao tác đọc (`find_card`, `find_vault`)
//! reload cache từ snapshot trước khi scan. Hai thao tác ghi
//! (`register_account`, `deactivate_account`) mutate cache rồi push;
//! nếu push thất bại thì mutation in-memory được rollback bằng
//! thao tác ngược lại (register ↔ deactivate).

use crate::error::{RegistryError, RegistryResult, StoreResult};
use crate::store::SnapshotStore;
use cardbank_core::{Bank, Card, Vault};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Registry quản lý một tập bank cố định.
///
/// `banks_served` được chốt lúc khởi tạo: bank lạ trong snapshot bị bỏ
/// qua khi load (nhưng vẫn được giữ nguyên trên disk khi push, nhờ
/// merge của [`SnapshotStore::save`]); bank thiếu được khởi tạo rỗng.
pub struct Registry {
    /// Tên các bank instance này phục vụ, cố định sau khi tạo
    banks_served: Vec<String>,
    /// Store đọc/ghi snapshot
    store: SnapshotStore,
    /// Cache bankdata - state mutable duy nhất
    cache: HashMap<String, Bank>,
}

impl Registry {
    /// Tạo Registry mới, load snapshot ngay lúc khởi tạo.
    ///
    /// # Arguments
    /// * `banks_served` - Danh sách tên bank instance này quản lý
    /// * `snapshot_path` - Đường dẫn file snapshot
    pub fn new<P: AsRef<Path>>(
        banks_served: Vec<String>,
        snapshot_path: P,
    ) -> RegistryResult<Self> {
        let store = SnapshotStore::new(snapshot_path);
        let cache = Self::retrieve(&store, &banks_served)?;

        debug!(banks = ?banks_served, "registry initialized");
        Ok(Self {
            banks_served,
            store,
            cache,
        })
    }

    /// Danh sách bank được phục vụ
    pub fn banks_served(&self) -> &[String] {
        &self.banks_served
    }

    /// Cache bankdata hiện tại (read-only)
    pub fn bankdata(&self) -> &HashMap<String, Bank> {
        &self.cache
    }

    /// Load snapshot và lọc theo banks_served.
    ///
    /// Bank có trong snapshot thì lấy record đã lưu, không có thì
    /// khởi tạo rỗng. Bank ngoài banks_served bị loại khỏi cache.
    fn retrieve(
        store: &SnapshotStore,
        banks_served: &[String],
    ) -> RegistryResult<HashMap<String, Bank>> {
        let mut data = store.load()?;

        let mut cache = HashMap::with_capacity(banks_served.len());
        for name in banks_served {
            let bank = data.remove(name).unwrap_or_else(|| Bank::new(name));
            cache.insert(name.clone(), bank);
        }
        Ok(cache)
    }

    /// Thay cache bằng nội dung snapshot, bỏ mọi thay đổi chưa push.
    ///
    /// Được gọi ở đầu mọi thao tác đọc: disk là nguồn sự thật.
    pub fn reload(&mut self) -> RegistryResult<()> {
        self.cache = Self::retrieve(&self.store, &self.banks_served)?;
        Ok(())
    }

    /// Ghi toàn bộ cache xuống snapshot
    pub fn push(&self) -> StoreResult<()> {
        self.store.save(&self.cache)
    }

    /// Tra cứu card theo cặp (number, cvv) - identity của account.
    ///
    /// Reload trước khi scan. Không tìm thấy là kết quả hợp lệ (`None`).
    pub fn find_card(&mut self, number: &str, cvv: &str) -> RegistryResult<Option<Card>> {
        self.reload()?;
        for bank in self.cache.values() {
            for card in bank.cards() {
                if card.number() == number && card.cvv() == cvv {
                    return Ok(Some(card.clone()));
                }
            }
        }
        Ok(None)
    }

    /// Tra cứu vault theo card.
    ///
    /// Lỗi `BankNotServed` nếu `card.bank_name` không thuộc banks_served;
    /// không có vault khớp là kết quả hợp lệ (`None`).
    pub fn find_vault(&mut self, card: &Card) -> RegistryResult<Option<Vault>> {
        self.reload()?;
        let bank = self
            .cache
            .get(card.bank_name())
            .ok_or_else(|| RegistryError::bank_not_served(card.bank_name()))?;
        Ok(bank.vault_for(card).cloned())
    }

    /// Như [`find_vault`](Self::find_vault) nhưng trả về mutable reference
    /// vào cache, cho phép façade mutate số dư tại chỗ.
    pub fn find_vault_mut(&mut self, card: &Card) -> RegistryResult<Option<&mut Vault>> {
        self.reload()?;
        let bank = self
            .cache
            .get_mut(card.bank_name())
            .ok_or_else(|| RegistryError::bank_not_served(card.bank_name()))?;
        Ok(bank.vault_for_mut(card))
    }

    /// Đăng ký card: mutate cache rồi push, rollback nếu push thất bại.
    ///
    /// Lỗi:
    /// - `AlreadyRegistered` nếu đã có card cùng (number, cvv)
    /// - `BankNotServed` nếu bank của card không được phục vụ
    /// - `UpdateFailed { reverted }` nếu push snapshot thất bại
    pub fn register_account(&mut self, card: Card) -> RegistryResult<()> {
        if self.find_card(card.number(), card.cvv())?.is_some() {
            return Err(RegistryError::already_registered(card.number()));
        }

        let bank = self
            .cache
            .get_mut(card.bank_name())
            .ok_or_else(|| RegistryError::bank_not_served(card.bank_name()))?;
        bank.register(card.clone())?;

        if let Err(source) = self.push() {
            // Thao tác ngược: deactivate chính card vừa đăng ký
            let reverted = self
                .cache
                .get_mut(card.bank_name())
                .map(|bank| bank.deactivate(&card).is_ok())
                .unwrap_or(false);
            warn!(number = card.number(), reverted, "push failed after register");
            return Err(RegistryError::UpdateFailed { reverted, source });
        }

        info!(number = card.number(), bank = card.bank_name(), "account registered");
        Ok(())
    }

    /// Huỷ đăng ký card: mutate cache rồi push, rollback nếu push thất bại.
    ///
    /// Lỗi:
    /// - `NotRegistered` nếu không có card khớp (number, cvv)
    /// - `BankNotServed` nếu bank của card không được phục vụ
    /// - `UpdateFailed { reverted }` nếu push snapshot thất bại
    pub fn deactivate_account(&mut self, card: &Card) -> RegistryResult<()> {
        if self.find_card(card.number(), card.cvv())?.is_none() {
            return Err(RegistryError::not_registered(card.number()));
        }

        let bank = self
            .cache
            .get_mut(card.bank_name())
            .ok_or_else(|| RegistryError::bank_not_served(card.bank_name()))?;
        bank.deactivate(card)?;

        if let Err(source) = self.push() {
            // Thao tác ngược: đăng ký lại card vừa huỷ
            let reverted = self
                .cache
                .get_mut(card.bank_name())
                .map(|bank| bank.register(card.clone()).is_ok())
                .unwrap_or(false);
            warn!(number = card.number(), reverted, "push failed after deactivate");
            return Err(RegistryError::UpdateFailed { reverted, source });
        }

        info!(number = card.number(), bank = card.bank_name(), "account deactivated");
        Ok(())
    }
}
