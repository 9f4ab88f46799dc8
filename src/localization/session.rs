//! One localization attempt against the shared coordinate service.
//!
//! A session localizes on demand and reports failure or cancellation as an
//! absent coordinate, never as an error value; callers retry by invoking the
//! session again. The session itself never retries.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use uuid::Uuid;

use crate::localization::coordinate::{PeerConnection, SpatialCoordinate};
use crate::localization::localizer::SharedService;
use crate::localization::settings::{LocalizationMode, WorldAnchorSettings};

pub struct LocalizationSession {
    session_id: Uuid,
    service: SharedService,
    settings: WorldAnchorSettings,
    peer: Arc<dyn PeerConnection>,
    /// Cancelled when the session is invalidated as a whole.
    session_token: CancellationToken,
}

impl LocalizationSession {
    pub(crate) fn new(
        service: SharedService,
        settings: WorldAnchorSettings,
        peer: Arc<dyn PeerConnection>,
    ) -> Self {
        LocalizationSession {
            session_id: Uuid::new_v4(),
            service,
            settings,
            peer,
            session_token: CancellationToken::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn peer(&self) -> &dyn PeerConnection {
        self.peer.as_ref()
    }

    /// Invalidate the session; every subsequent `localize` yields `None`.
    pub fn invalidate(&self) {
        self.session_token.cancel();
    }

    /// Attempt one localization, racing the coordinate service against both
    /// the caller's token and the session's own.
    pub async fn localize(&self, cancel: CancellationToken) -> Option<SpatialCoordinate> {
        if self.session_token.is_cancelled() {
            error!(session = %self.session_id, "session is invalid, no localization performed");
            return None;
        }

        let service = tokio::select! {
            _ = cancel.cancelled() => return None,
            _ = self.session_token.cancelled() => return None,
            service = self.service.clone() => service,
        };
        if cancel.is_cancelled() {
            return None;
        }

        match self.settings.mode {
            LocalizationMode::LocateExistingAnchor => {
                let found = service.known_coordinate(&self.settings.anchor_id);
                debug!(
                    session = %self.session_id,
                    anchor = %self.settings.anchor_id,
                    located = found.is_some(),
                    "existing-anchor lookup finished"
                );
                found
            }
            LocalizationMode::CreateAnchor => {
                tokio::select! {
                    _ = cancel.cancelled() => None,
                    _ = self.session_token.cancelled() => None,
                    coordinate = service.create_coordinate(
                        &self.settings.anchor_id,
                        self.settings.anchor_position,
                        self.settings.anchor_rotation,
                        cancel.child_token(),
                    ) => coordinate,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::coordinate::CoordinateService;
    use crate::localization::localizer::WorldAnchorLocalizer;
    use async_trait::async_trait;
    use glam::{Quat, Vec3};
    use std::collections::HashMap;
    use std::time::Duration;

    struct TestPeer;

    impl PeerConnection for TestPeer {
        fn remote_name(&self) -> &str {
            "spectator-editor"
        }

        fn is_connected(&self) -> bool {
            true
        }
    }

    /// In-memory service double. With `hang` set, creation never completes
    /// until cancelled.
    #[derive(Default)]
    struct FakeCoordinateService {
        known: HashMap<String, SpatialCoordinate>,
        hang: bool,
    }

    #[async_trait]
    impl CoordinateService for FakeCoordinateService {
        async fn create_coordinate(
            &self,
            id: &str,
            position: Vec3,
            rotation: Quat,
            cancel: CancellationToken,
        ) -> Option<SpatialCoordinate> {
            if self.hang {
                cancel.cancelled().await;
                return None;
            }
            Some(SpatialCoordinate {
                id: id.to_owned(),
                position,
                rotation,
            })
        }

        fn known_coordinate(&self, id: &str) -> Option<SpatialCoordinate> {
            self.known.get(id).cloned()
        }
    }

    fn settings(mode: LocalizationMode) -> WorldAnchorSettings {
        WorldAnchorSettings {
            mode,
            anchor_id: "board-anchor".to_owned(),
            anchor_position: Vec3::new(1.0, 0.0, 2.0),
            anchor_rotation: Quat::IDENTITY,
        }
    }

    fn session_over(
        service: FakeCoordinateService,
        mode: LocalizationMode,
    ) -> LocalizationSession {
        let localizer = WorldAnchorLocalizer::with_service(Arc::new(service));
        localizer.create_session(settings(mode), Arc::new(TestPeer))
    }

    #[tokio::test]
    async fn creating_an_anchor_yields_the_requested_pose() {
        let session = session_over(
            FakeCoordinateService::default(),
            LocalizationMode::CreateAnchor,
        );

        let coordinate = session
            .localize(CancellationToken::new())
            .await
            .expect("creation succeeds");
        assert_eq!(coordinate.id, "board-anchor");
        assert_eq!(coordinate.position, Vec3::new(1.0, 0.0, 2.0));
    }

    #[tokio::test]
    async fn locating_a_known_anchor_finds_it() {
        let mut service = FakeCoordinateService::default();
        let stored = SpatialCoordinate {
            id: "board-anchor".to_owned(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        };
        service.known.insert("board-anchor".to_owned(), stored.clone());

        let session = session_over(service, LocalizationMode::LocateExistingAnchor);
        let found = session.localize(CancellationToken::new()).await;
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn locating_an_unknown_anchor_is_none_not_an_error() {
        let session = session_over(
            FakeCoordinateService::default(),
            LocalizationMode::LocateExistingAnchor,
        );
        assert_eq!(session.localize(CancellationToken::new()).await, None);
    }

    #[tokio::test]
    async fn cancellation_wins_the_race_against_creation() {
        let session = session_over(
            FakeCoordinateService {
                hang: true,
                ..FakeCoordinateService::default()
            },
            LocalizationMode::CreateAnchor,
        );

        let cancel = CancellationToken::new();
        let canceller = cancel.clone();
        let localize = session.localize(cancel);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        assert_eq!(localize.await, None);
    }

    #[tokio::test]
    async fn an_invalidated_session_never_localizes() {
        let session = session_over(
            FakeCoordinateService::default(),
            LocalizationMode::CreateAnchor,
        );
        session.invalidate();
        assert_eq!(session.localize(CancellationToken::new()).await, None);
    }

    #[tokio::test]
    async fn a_failed_localization_may_be_retried_on_the_same_session() {
        let session = session_over(
            FakeCoordinateService::default(),
            LocalizationMode::LocateExistingAnchor,
        );
        assert_eq!(session.localize(CancellationToken::new()).await, None);
        // Same session, fresh token: still answers, still no anchor.
        assert_eq!(session.localize(CancellationToken::new()).await, None);
    }
}
