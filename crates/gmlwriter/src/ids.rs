//! Identifier assignment for exported elements.
//!
//! An [`IdTable`] hands out one textual id per distinct element and remembers
//! it for the rest of the export. Elements are compared by type and value, so
//! vertices, edges and groups of different types never collide, while a group
//! key that is also a vertex (same type, equal value) keeps a single id.

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// How a fresh [`IdTable`] mints new ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// Decimal integers starting at 1, in first-seen order
    #[default]
    Sequential,
    /// Random v4 UUIDs
    Uuid,
}

/// Type-erased, comparable key.
trait ErasedKey {
    fn as_any(&self) -> &dyn Any;
    fn eq_key(&self, other: &dyn ErasedKey) -> bool;
}

impl<T: Any + Eq> ErasedKey for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_key(&self, other: &dyn ErasedKey) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

struct Entry {
    key: Box<dyn ErasedKey>,
    id: String,
}

/// Memoizing id assigner shared by all element categories of one export.
///
/// This type is NOT thread safe; every export creates its own table.
pub struct IdTable {
    scheme: IdScheme,
    next_id: u64,
    // Buckets keyed by a hash of (type, value); collisions are resolved by equality
    buckets: HashMap<u64, Vec<Entry>>,
    len: usize,
}

impl IdTable {
    /// Create an empty table using the given scheme.
    pub fn new(scheme: IdScheme) -> Self {
        Self {
            scheme,
            next_id: 1,
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Create an empty table minting sequential integer ids.
    pub fn sequential() -> Self {
        Self::new(IdScheme::Sequential)
    }

    /// Get the id of `element`, minting one on first sight.
    pub fn id_of<T>(&mut self, element: &T) -> String
    where
        T: Any + Eq + Hash + Clone,
    {
        let hash = key_hash(element);
        let bucket = self.buckets.entry(hash).or_default();

        if let Some(entry) = bucket.iter().find(|entry| entry.key.eq_key(element)) {
            return entry.id.clone();
        }

        let id = match self.scheme {
            IdScheme::Sequential => {
                let id = self.next_id.to_string();
                self.next_id += 1;
                id
            }
            IdScheme::Uuid => Uuid::new_v4().to_string(),
        };
        bucket.push(Entry {
            key: Box::new(element.clone()),
            id: id.clone(),
        });
        self.len += 1;
        id
    }

    /// Number of elements that received an id.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no id has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The scheme this table mints ids with.
    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }
}

impl Default for IdTable {
    fn default() -> Self {
        Self::sequential()
    }
}

fn key_hash<T: Any + Hash>(element: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    TypeId::of::<T>().hash(&mut hasher);
    element.hash(&mut hasher);
    hasher.finish()
}
