//! External collaborator seams for spatial alignment.
//!
//! The coordinate service persists and locates named world anchors; the peer
//! connection is the session transport. Both are consumed as traits and never
//! implemented here outside of test doubles.

use async_trait::async_trait;
use glam::{Quat, Vec3};
use tokio_util::sync::CancellationToken;

/// A located or created spatial anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialCoordinate {
    pub id: String,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Anchor persistence and lookup, implemented by the host platform.
#[async_trait]
pub trait CoordinateService: Send + Sync {
    /// Create and persist a named coordinate at the given pose. Yields `None`
    /// when creation fails or observes the cancellation token.
    async fn create_coordinate(
        &self,
        id: &str,
        position: Vec3,
        rotation: Quat,
        cancel: CancellationToken,
    ) -> Option<SpatialCoordinate>;

    /// Look up a coordinate the service already tracks.
    fn known_coordinate(&self, id: &str) -> Option<SpatialCoordinate>;
}

/// Opaque handle to the peer a localization session serves.
pub trait PeerConnection: Send + Sync {
    fn remote_name(&self) -> &str;
    fn is_connected(&self) -> bool;
}
