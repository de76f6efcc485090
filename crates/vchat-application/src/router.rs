//! Client route table.
//!
//! Two static routes: `/` for the default view and `/share/:sessionId` for
//! a shared session.

use serde::Serialize;
use vchat_core::error::{Result, VchatError};

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "PascalCase")]
pub enum Route {
    Default,
    Share { session_id: String },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Share { .. } => "Share",
        }
    }

    /// Canonical path of this route, with the session id percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Default => "/".to_string(),
            Self::Share { session_id } => format!("/share/{}", urlencoding::encode(session_id)),
        }
    }

    /// The session the view should hydrate, if any.
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Share { session_id } => Some(session_id.as_str()),
        }
    }
}

/// Static description of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDef {
    pub name: &'static str,
    pub pattern: &'static str,
}

const ROUTES: [RouteDef; 2] = [
    RouteDef {
        name: "Default",
        pattern: "/",
    },
    RouteDef {
        name: "Share",
        pattern: "/share/:sessionId",
    },
];

const SHARE_SEGMENT: &str = "share";

pub struct Router;

impl Router {
    pub fn routes() -> &'static [RouteDef] {
        &ROUTES
    }

    /// Resolves a path against the route table.
    ///
    /// Query string and fragment are ignored, one trailing slash is
    /// tolerated, and the `share` segment matches case-insensitively. The
    /// session id is percent-decoded, so `/share/a%20b` yields `a b`.
    ///
    /// # Errors
    ///
    /// Returns `VchatError::Routing` if no route matches or the session id
    /// does not decode to UTF-8.
    pub fn resolve(path: &str) -> Result<Route> {
        let without_query = path.split(['?', '#']).next().unwrap_or_default();
        let Some(rest) = without_query.strip_prefix('/') else {
            return Err(VchatError::routing(path));
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Ok(Route::Default);
        }

        let mut segments = rest.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(head), Some(session_id), None)
                if head.eq_ignore_ascii_case(SHARE_SEGMENT) && !session_id.is_empty() =>
            {
                let session_id =
                    urlencoding::decode(session_id).map_err(|_| VchatError::routing(path))?;
                Ok(Route::Share {
                    session_id: session_id.into_owned(),
                })
            }
            _ => Err(VchatError::routing(path)),
        }
    }
}
