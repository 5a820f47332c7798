use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::common::normalize_name;
use std::collections::HashMap;

/// Result of a product lookup remembered for the rest of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedProduct {
    Found(Product),
    /// Looked up in the store and absent
    KnownMissing,
}

/// Run-scoped map keyed by normalized name (trimmed, lowercase).
/// A missing key means "not looked up yet".
#[derive(Debug)]
pub struct NameCache<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for NameCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> NameCache<V> {
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(&normalize_name(name))
    }

    pub fn insert(&mut self, name: &str, value: V) {
        self.entries.insert(normalize_name(name), value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type ClientCache = NameCache<Client>;
pub type ProductCache = NameCache<CachedProduct>;

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::ProductId;
    use rust_decimal::Decimal;

    #[test]
    fn lookups_ignore_case() {
        let mut cache: NameCache<u32> = NameCache::default();
        assert!(cache.is_empty());
        cache.insert("Ferreteria Lopez", 1);
        assert_eq!(cache.get("FERRETERIA LOPEZ"), Some(&1));
        assert_eq!(cache.get(" ferreteria lopez "), Some(&1));
        assert_eq!(cache.get("Other"), None);
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }

    #[test]
    fn known_missing_differs_from_not_looked_up() {
        let mut cache = ProductCache::default();
        cache.insert("Ghost", CachedProduct::KnownMissing);
        cache.insert(
            "Cement",
            CachedProduct::Found(Product {
                id: ProductId(1),
                name: "Cement".into(),
                description: None,
                price: Decimal::ONE,
                stock: 0,
            }),
        );

        assert_eq!(cache.get("ghost"), Some(&CachedProduct::KnownMissing));
        assert!(matches!(cache.get("CEMENT"), Some(CachedProduct::Found(_))));
        assert_eq!(cache.get("Sand"), None);
    }
}
