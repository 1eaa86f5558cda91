//! Ledger snapshot persistence
//!
//! Serializes the whole reflection ledger to JSON for backup and restart.

use crate::error::{LedgerError, Result};
use crate::reflection::ReflectionLedger;
use std::fs;
use std::path::Path;

/// Save the ledger state to a JSON file
pub fn save_to_file<P: AsRef<Path>>(ledger: &ReflectionLedger, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)
        .map_err(|e| LedgerError::SnapshotFormat(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a ledger previously saved with [`save_to_file`]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ReflectionLedger> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| LedgerError::SnapshotFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    #[test]
    fn test_snapshot_round_trip() {
        let owner = Address::new([1u8; crate::address::ADDRESS_LEN]);
        let other = Address::new([2u8; crate::address::ADDRESS_LEN]);

        let mut ledger = ReflectionLedger::new();
        ledger.initialize(owner, 1_000_000).unwrap();
        ledger.transfer_shares(owner, other, 250_000).unwrap();
        ledger.reflect(other, 1_000).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        save_to_file(&ledger, &path).unwrap();
        let restored = load_from_file(&path).unwrap();

        assert_eq!(restored.rate(), ledger.rate());
        assert_eq!(restored.balance_of(owner), ledger.balance_of(owner));
        assert_eq!(restored.balance_of(other), ledger.balance_of(other));
        assert_eq!(
            restored.tokens_in_circulation(),
            ledger.tokens_in_circulation()
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_from_file("/nonexistent/ledger.json");
        assert!(matches!(result, Err(LedgerError::SnapshotIo(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            load_from_file(&path),
            Err(LedgerError::SnapshotFormat(_))
        ));
    }
}
