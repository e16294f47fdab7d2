use std::collections::{HashMap, HashSet};

/// Items that carry a stable identity key
pub trait Keyed {
    fn key(&self) -> &str;
}

/// One rendered instance inside a [`KeyedList`]
///
/// `instance_id` is assigned when the instance is created and survives
/// every reconcile for which the key is still present.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedEntry<T> {
    instance_id: u64,
    item: T,
}

impl<T> KeyedEntry<T> {
    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    pub fn item(&self) -> &T {
        &self.item
    }
}

/// Outcome of one reconcile pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub retained: usize,
    pub removed: usize,
}

/// Ordered list of instances diffed by key
///
/// Reconciling with a new sequence reuses the instance of every key that
/// is already present, so re-rendering unchanged records never destroys
/// and recreates them.
#[derive(Debug, Clone)]
pub struct KeyedList<T> {
    entries: Vec<KeyedEntry<T>>,
    next_instance_id: u64,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_instance_id: 1,
        }
    }
}

impl<T: Keyed> KeyedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[KeyedEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&KeyedEntry<T>> {
        self.entries.iter().find(|entry| entry.item.key() == key)
    }

    /// Replaces the content with `items`, keeping instances by key
    ///
    /// The resulting order follows `items`. When a key appears more than
    /// once in `items`, only its first occurrence is kept.
    pub fn reconcile(&mut self, items: Vec<T>) -> ReconcileStats {
        let mut previous: HashMap<String, u64> = self
            .entries
            .drain(..)
            .map(|entry| (entry.item.key().to_string(), entry.instance_id))
            .collect();

        let mut stats = ReconcileStats::default();
        let mut seen = HashSet::new();

        for item in items {
            if !seen.insert(item.key().to_string()) {
                continue;
            }

            let instance_id = match previous.remove(item.key()) {
                Some(id) => {
                    stats.retained += 1;
                    id
                }
                None => {
                    stats.created += 1;
                    let id = self.next_instance_id;
                    self.next_instance_id += 1;
                    id
                }
            };

            self.entries.push(KeyedEntry { instance_id, item });
        }

        stats.removed = previous.len();
        stats
    }

    /// Drops every instance
    pub fn clear(&mut self) -> ReconcileStats {
        self.reconcile(Vec::new())
    }
}
