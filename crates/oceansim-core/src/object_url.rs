//! Object URL registry
//!
//! Holds simulation result buffers in memory and hands out opaque
//! `blob:oceansim/<ulid>` references to them. A reference stays resolvable
//! for exactly as long as its [`ObjectUrl`] handle lives: dropping the
//! handle (or calling [`ObjectUrl::revoke`]) frees the buffer.
//!
//! # Example
//!
//! ```ignore
//! let registry = ObjectUrlRegistry::new();
//! let url = registry.create(image);
//!
//! // Any clone of the registry can resolve the reference
//! let data_uri = registry.data_uri(url.as_str())?;
//!
//! drop(url); // buffer released, resolve now returns None
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};
use ulid::Ulid;

use crate::error::{SimResult, SimulationError};
use crate::types::SimulationImage;

/// Scheme and authority prefix of every issued reference
pub const OBJECT_URL_PREFIX: &str = "blob:oceansim/";

/// Shared store of live result buffers.
///
/// Cloning is cheap and all clones see the same entries.
#[derive(Clone, Default)]
pub struct ObjectUrlRegistry {
    entries: Arc<Mutex<HashMap<Ulid, SimulationImage>>>,
}

impl std::fmt::Debug for ObjectUrlRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectUrlRegistry")
            .field("live", &self.len())
            .finish()
    }
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an image and return the handle that keeps it alive
    pub fn create(&self, image: SimulationImage) -> ObjectUrl {
        let id = Ulid::new();
        let url = format!("{}{}", OBJECT_URL_PREFIX, id);
        debug!(%url, bytes = image.len(), mime = %image.mime, "Created object URL");
        self.entries.lock().insert(id, image);

        ObjectUrl {
            id,
            url,
            registry: self.clone(),
        }
    }

    /// Look up the buffer behind a reference, if it is still live
    pub fn resolve(&self, url: &str) -> Option<SimulationImage> {
        let id = parse_id(url)?;
        self.entries.lock().get(&id).cloned()
    }

    /// Resolve a reference straight to a `data:` URI for rendering
    pub fn data_uri(&self, url: &str) -> SimResult<String> {
        self.resolve(url)
            .map(|image| image.data_uri())
            .ok_or_else(|| SimulationError::UnknownObjectUrl(url.to_string()))
    }

    /// Number of live buffers
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release(&self, id: &Ulid) {
        if self.entries.lock().remove(id).is_some() {
            trace!(%id, "Released object URL");
        }
    }
}

fn parse_id(url: &str) -> Option<Ulid> {
    url.strip_prefix(OBJECT_URL_PREFIX)
        .and_then(|id| Ulid::from_string(id).ok())
}

/// Owning handle to a registered buffer.
///
/// Not `Clone`: there is exactly one owner per reference, and the buffer
/// is released when that owner goes away.
pub struct ObjectUrl {
    id: Ulid,
    url: String,
    registry: ObjectUrlRegistry,
}

impl ObjectUrl {
    /// The opaque reference string
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Resolve this reference's buffer
    pub fn resolve(&self) -> Option<SimulationImage> {
        self.registry.resolve(&self.url)
    }

    /// Release the buffer now
    pub fn revoke(self) {
        drop(self);
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.release(&self.id);
    }
}

impl PartialEq for ObjectUrl {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ObjectUrl {}

impl std::fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

impl std::fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn image(data: &'static [u8]) -> SimulationImage {
        SimulationImage {
            bytes: Bytes::from_static(data),
            mime: "image/png".to_string(),
        }
    }

    #[test]
    fn create_then_resolve() {
        let registry = ObjectUrlRegistry::new();
        let url = registry.create(image(b"ocean"));

        assert!(url.as_str().starts_with(OBJECT_URL_PREFIX));
        assert_eq!(registry.resolve(url.as_str()).unwrap().bytes.as_ref(), b"ocean");
        assert_eq!(url.resolve().unwrap().bytes.as_ref(), b"ocean");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn drop_releases_buffer() {
        let registry = ObjectUrlRegistry::new();
        let url = registry.create(image(b"ocean"));
        let key = url.as_str().to_string();

        drop(url);

        assert!(registry.resolve(&key).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn revoke_releases_buffer() {
        let registry = ObjectUrlRegistry::new();
        let url = registry.create(image(b"ocean"));
        let key = url.as_str().to_string();

        url.revoke();

        assert!(matches!(
            registry.data_uri(&key),
            Err(SimulationError::UnknownObjectUrl(_))
        ));
    }

    #[test]
    fn references_are_unique() {
        let registry = ObjectUrlRegistry::new();
        let a = registry.create(image(b"a"));
        let b = registry.create(image(b"b"));

        assert_ne!(a, b);
        assert_ne!(a.as_str(), b.as_str());
        assert_eq!(registry.len(), 2);

        drop(a);
        assert_eq!(registry.resolve(b.as_str()).unwrap().bytes.as_ref(), b"b");
    }

    #[test]
    fn clones_share_entries() {
        let registry = ObjectUrlRegistry::new();
        let other = registry.clone();
        let url = registry.create(image(b"shared"));

        assert!(other.resolve(url.as_str()).is_some());
    }

    #[test]
    fn foreign_urls_do_not_resolve() {
        let registry = ObjectUrlRegistry::new();
        let _url = registry.create(image(b"ocean"));

        assert!(registry.resolve("blob:elsewhere/123").is_none());
        assert!(registry.resolve("blob:oceansim/not-a-ulid").is_none());
        assert!(registry
            .resolve(&format!("{}{}", OBJECT_URL_PREFIX, Ulid::new()))
            .is_none());
    }

    #[test]
    fn data_uri_uses_mime() {
        let registry = ObjectUrlRegistry::new();
        let url = registry.create(image(b"ocean"));

        let uri = registry.data_uri(url.as_str()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
