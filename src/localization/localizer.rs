//! World-anchor localizer: session factory over a shared coordinate service.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use uuid::Uuid;

use crate::localization::coordinate::{CoordinateService, PeerConnection};
use crate::localization::session::LocalizationSession;
use crate::localization::settings::WorldAnchorSettings;

/// Stable identity of the world-anchor localizer across devices.
pub const WORLD_ANCHOR_LOCALIZER_ID: Uuid =
    Uuid::from_u128(0x0858173D_B0F4_4D19_9B33_CADC1EFC96FE);

pub(crate) type SharedService = Shared<BoxFuture<'static, Arc<dyn CoordinateService>>>;

pub struct WorldAnchorLocalizer {
    service: SharedService,
}

impl WorldAnchorLocalizer {
    /// Start resolving the shared coordinate service immediately, so anchors
    /// can already be tracked by the time a peer connects and every session
    /// awaits the same resolution.
    pub fn new<F>(service: F) -> Self
    where
        F: Future<Output = Arc<dyn CoordinateService>> + Send + 'static,
    {
        WorldAnchorLocalizer {
            service: service.boxed().shared(),
        }
    }

    /// Wrap an already-connected service.
    pub fn with_service(service: Arc<dyn CoordinateService>) -> Self {
        Self::new(futures::future::ready(service))
    }

    pub fn localizer_id(&self) -> Uuid {
        WORLD_ANCHOR_LOCALIZER_ID
    }

    pub fn display_name(&self) -> &'static str {
        "World Anchor"
    }

    /// World anchors only exist on the windowed mixed-reality platform.
    pub fn is_supported(&self) -> bool {
        cfg!(windows)
    }

    pub fn create_session(
        &self,
        settings: WorldAnchorSettings,
        peer: Arc<dyn PeerConnection>,
    ) -> LocalizationSession {
        LocalizationSession::new(self.service.clone(), settings, peer)
    }
}
