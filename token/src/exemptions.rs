//! Tax exemption registry

use ash_core::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Accounts excluded from taxation on transfers they send or receive
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExemptionRegistry {
    exempt: HashSet<Address>,
}

impl ExemptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exempt(&self, account: Address) -> bool {
        self.exempt.contains(&account)
    }

    /// Add an exemption; returns false if it was already present
    pub fn add(&mut self, account: Address) -> bool {
        self.exempt.insert(account)
    }

    /// Remove an exemption; returns false if it was not present
    pub fn remove(&mut self, account: Address) -> bool {
        self.exempt.remove(&account)
    }

    pub fn len(&self) -> usize {
        self.exempt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exempt.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.exempt.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        let mut bytes = [0u8; ash_core::ADDRESS_LEN];
        bytes[0] = tag;
        Address::new(bytes)
    }

    #[test]
    fn test_add_and_check() {
        let mut registry = ExemptionRegistry::new();
        assert!(!registry.is_exempt(addr(1)));

        assert!(registry.add(addr(1)));
        assert!(registry.is_exempt(addr(1)));
        assert!(!registry.is_exempt(addr(2)));

        // Adding twice reports the duplicate
        assert!(!registry.add(addr(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut registry = ExemptionRegistry::new();
        registry.add(addr(1));

        assert!(registry.remove(addr(1)));
        assert!(!registry.is_exempt(addr(1)));
        assert!(!registry.remove(addr(1)));
    }
}
