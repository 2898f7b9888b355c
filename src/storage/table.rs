use std::collections::{BTreeMap, HashMap};

/// Key-value backend owned by the engine.
///
/// Implementations do no locking of their own; the engine serializes access.
pub trait Table: Send + Sync + std::fmt::Debug {
    fn set(&mut self, key: String, value: String);

    fn get(&self, key: &str) -> Option<&str>;

    /// Delete a key. Returns true if it existed.
    fn del(&mut self, key: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unordered table backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct HashTable {
    data: HashMap<String, String>,
}

impl HashTable {
    pub fn new() -> Self {
        HashTable {
            data: HashMap::new(),
        }
    }
}

impl Table for HashTable {
    fn set(&mut self, key: String, value: String) {
        self.data.insert(key, value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    fn del(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// Table kept in key order, backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct OrderedTable {
    data: BTreeMap<String, String>,
}

impl OrderedTable {
    pub fn new() -> Self {
        OrderedTable {
            data: BTreeMap::new(),
        }
    }
}

impl Table for OrderedTable {
    fn set(&mut self, key: String, value: String) {
        self.data.insert(key, value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    fn del(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// Which backend to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    #[default]
    Hash,
    Ordered,
}

impl TableKind {
    /// Parse a backend name. Returns `None` for anything unrecognized.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hash" => Some(TableKind::Hash),
            "ordered" | "btree" => Some(TableKind::Ordered),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Hash => "hash",
            TableKind::Ordered => "ordered",
        }
    }

    pub fn build(&self) -> Box<dyn Table> {
        match self {
            TableKind::Hash => Box::new(HashTable::new()),
            TableKind::Ordered => Box::new(OrderedTable::new()),
        }
    }
}
