//! Snapshot store - flat-file JSON map `bank name -> Bank`.
//!
//! Toàn bộ bankdata nằm trong một file duy nhất. File rỗng (zero-byte)
//! hoặc chưa tồn tại được coi là "chưa có dữ liệu", không phải lỗi.

use crate::error::StoreResult;
use cardbank_core::Bank;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Đường dẫn snapshot mặc định
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/bankdata.json";

/// Snapshot store - đọc/ghi map bankdata từ một file JSON.
///
/// Mọi thao tác mở file theo scope, handle được release trên mọi exit path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    /// Đường dẫn file snapshot
    path: PathBuf,
}

impl SnapshotStore {
    /// Tạo SnapshotStore mới
    ///
    /// # Arguments
    /// * `path` - Đường dẫn file snapshot (e.g., "data/bankdata.json")
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Lấy đường dẫn snapshot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Đọc toàn bộ snapshot.
    ///
    /// File chưa tồn tại hoặc rỗng trả về map rỗng; JSON hỏng trả về
    /// `StoreError::Serialization`.
    pub fn load(&self) -> StoreResult<HashMap<String, Bank>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(err.into()),
        };

        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Ghi snapshot theo kiểu read-modify-write.
    ///
    /// Đọc map hiện có trên disk, overwrite các entry trong `banks`,
    /// giữ nguyên các bank ngoài phạm vi, rồi ghi lại cả file.
    pub fn save(&self, banks: &HashMap<String, Bank>) -> StoreResult<()> {
        let mut data = self.load()?;
        for (name, bank) in banks {
            data.insert(name.clone(), bank.clone());
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &data)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardbank_core::{Card, User};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn bank_with_card(name: &str, number: &str) -> Bank {
        let holder = User::new("Amrit", "Sutradhar");
        let expiration = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        let card = Card::new(holder, number, "1234", name, expiration).unwrap();
        let mut bank = Bank::new(name);
        bank.register(card).unwrap();
        bank
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("bankdata.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bankdata.json");
        fs::write(&path, b"").unwrap();

        let store = SnapshotStore::new(&path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bankdata.json");
        fs::write(&path, b"{not json").unwrap();

        let store = SnapshotStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("bankdata.json"));

        let mut banks = HashMap::new();
        banks.insert("SBI".to_string(), bank_with_card("SBI", "1234123412341234"));
        banks.insert("HDFC".to_string(), Bank::new("HDFC"));

        store.save(&banks).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, banks);
    }

    #[test]
    fn test_save_merges_foreign_banks() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("bankdata.json"));

        // bank ngoài phạm vi đã có sẵn trên disk
        let mut on_disk = HashMap::new();
        on_disk.insert("ICICI".to_string(), bank_with_card("ICICI", "9999888877776666"));
        store.save(&on_disk).unwrap();

        // save map khác không chứa ICICI
        let mut banks = HashMap::new();
        banks.insert("SBI".to_string(), bank_with_card("SBI", "1234123412341234"));
        store.save(&banks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains_key("ICICI"));
        assert!(loaded.contains_key("SBI"));
    }

    #[test]
    fn test_save_fails_on_missing_parent_dir() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("missing").join("bankdata.json"));

        assert!(store.save(&HashMap::new()).is_err());
        // load vẫn coi như chưa có dữ liệu
        assert!(store.load().unwrap().is_empty());
    }
}
