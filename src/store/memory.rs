use glam::Vec3;
use rustc_hash::FxHashMap;

use super::PositionStore;

/// Process-local position store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    positions: FxHashMap<String, Vec3>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl PositionStore for MemoryStore {
    fn get(&self, id: &str) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    fn set(&mut self, id: &str, position: Vec3) {
        let _ = self.positions.insert(id.to_owned(), position);
    }
}
