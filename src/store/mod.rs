//! Durable photo positions keyed by item id.
//!
//! Every drag move writes through to a [`PositionStore`], so `set` must stay
//! cheap. [`JsonFileStore`] buffers writes in memory and persists them on
//! [`flush`](JsonFileStore::flush); reads always see the freshest value.

mod file;
mod memory;

use glam::Vec3;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key-value store of photo rest positions.
///
/// Malformed or missing entries read as `None`; callers substitute the
/// descriptor's initial position.
pub trait PositionStore {
    /// Stored position for `id`, if present and well-formed.
    fn get(&self, id: &str) -> Option<Vec3>;

    /// Record the latest position for `id`. Last write wins.
    fn set(&mut self, id: &str, position: Vec3);
}

/// Decode a stored `[x, y, z]` triple, rejecting anything else.
pub(crate) fn decode_position(value: &serde_json::Value) -> Option<Vec3> {
    let triple: [f32; 3] = match value {
        serde_json::Value::String(text) => serde_json::from_str(text).ok()?,
        other => serde_json::from_value(other.clone()).ok()?,
    };
    let position = Vec3::from_array(triple);
    position.is_finite().then_some(position)
}

/// Encode a position the way it is kept on disk: the JSON text of a
/// three-element array.
pub(crate) fn encode_position(position: Vec3) -> serde_json::Value {
    serde_json::Value::String(format!(
        "[{},{},{}]",
        position.x, position.y, position.z
    ))
}
