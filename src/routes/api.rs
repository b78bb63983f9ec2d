//! The API router: a fixed answer at the mount root plus a prefix table that
//! hands whole subtrees to the collaborator routers.
//!
//! Collaborators are mounted with `nest_service`, so they see the path with the
//! prefix stripped (`/api/gameweeks/5` arrives as `/5`) while method, query,
//! headers and body pass through untouched. The full URI is still available via
//! `axum::extract::OriginalUri`. Nothing here catches or rewrites collaborator
//! responses, and no fallback is installed: unmatched paths are left to the host.

use axum::{routing::get, Router};

pub const INDEX_BODY: &str = "this is my api";

/// The handlers this router delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Footballers,
    Gameweeks,
}

impl Collaborator {
    pub const ALL: [Collaborator; 2] = [Collaborator::Footballers, Collaborator::Gameweeks];

    pub fn prefix(self) -> &'static str {
        match self {
            Collaborator::Footballers => "/footballers",
            Collaborator::Gameweeks => "/gameweeks",
        }
    }
}

/// One router per collaborator, already carrying its own state.
#[derive(Clone)]
pub struct Collaborators {
    pub footballers: Router,
    pub gameweeks: Router,
}

impl Collaborators {
    fn handler(&self, collaborator: Collaborator) -> Router {
        match collaborator {
            Collaborator::Footballers => self.footballers.clone(),
            Collaborator::Gameweeks => self.gameweeks.clone(),
        }
    }
}

/// Builds the API router for `mount` (as produced by `config::normalize_mount`:
/// empty for the root, otherwise `/segment` with no trailing slash).
///
/// Call once at startup and hand the result to the host application.
pub fn router(mount: &str, collaborators: Collaborators) -> Router {
    let mut router = Router::new().route(&format!("{}/", mount), get(index));
    if !mount.is_empty() {
        router = router.route(mount, get(index));
    }

    for collaborator in Collaborator::ALL {
        let path = format!("{}{}", mount, collaborator.prefix());
        tracing::debug!("Mounting {:?} at {}", collaborator, path);
        router = router.nest_service(&path, collaborators.handler(collaborator));
    }

    router
}

// GET <mount>/
async fn index() -> &'static str {
    INDEX_BODY
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    fn tagged(tag: &'static str) -> Router {
        Router::new().fallback(move || async move { tag })
    }

    fn collaborators() -> Collaborators {
        Collaborators {
            footballers: tagged("footballers"),
            gameweeks: tagged("gameweeks"),
        }
    }

    async fn get_status(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn prefixes_are_distinct_segments() {
        assert_eq!(Collaborator::Footballers.prefix(), "/footballers");
        assert_eq!(Collaborator::Gameweeks.prefix(), "/gameweeks");
        assert!(Collaborator::ALL.iter().all(|c| c.prefix().starts_with('/')));
    }

    #[tokio::test]
    async fn every_collaborator_in_the_table_is_mounted() {
        let router = router("/api", collaborators());

        for collaborator in Collaborator::ALL {
            let uri = format!("/api{}/anything", collaborator.prefix());
            assert_eq!(get_status(router.clone(), &uri).await, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn root_mount_serves_index_at_slash() {
        let router = router("", collaborators());

        assert_eq!(get_status(router.clone(), "/").await, StatusCode::OK);
        assert_eq!(get_status(router, "/gameweeks/1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn index_answers_with_and_without_trailing_slash() {
        let router = router("/api", collaborators());

        assert_eq!(get_status(router.clone(), "/api").await, StatusCode::OK);
        assert_eq!(get_status(router, "/api/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn prefix_match_respects_segment_boundary() {
        let router = router("/api", collaborators());

        assert_eq!(get_status(router, "/api/footballersX").await, StatusCode::NOT_FOUND);
    }
}
