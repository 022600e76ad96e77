//! Route resolution: which game action a request asks for.

use crate::{Method, Request};

/// A recognised game action, with its parameters already extracted.
///
/// | Request | Route |
/// |---|---|
/// | `OPTIONS <anything>` | [`Route::Preflight`] |
/// | `GET /api/state` | [`Route::State`] |
/// | `GET /api/move?room=R` | [`Route::Move`] |
/// | `GET /api/hint` | [`Route::Hint`] |
/// | `GET /api/reset` | [`Route::Reset`] |
/// | `GET /api/path?start=A&end=B` | [`Route::Path`] |
/// | anything else | [`Route::Unknown`] |
///
/// A known path with a missing parameter is `Unknown` too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// CORS preflight. Answered with headers only.
    Preflight,
    State,
    Move { room: String },
    Hint,
    Reset,
    Path { start: String, end: String },
    Unknown,
}

impl Route {
    /// Resolves a parsed request. `OPTIONS` is checked before anything
    /// else, whatever its path.
    pub fn resolve(request: &Request) -> Self {
        match request.method() {
            Method::Options => return Self::Preflight,
            Method::Get => {}
            Method::Other(_) => return Self::Unknown,
        }

        match request.path() {
            "/api/state" => Self::State,
            "/api/hint" => Self::Hint,
            "/api/reset" => Self::Reset,
            "/api/move" => match request.query("room") {
                Some(room) => Self::Move {
                    room: room.to_string(),
                },
                None => Self::Unknown,
            },
            "/api/path" => match (request.query("start"), request.query("end")) {
                (Some(start), Some(end)) => Self::Path {
                    start: start.to_string(),
                    end: end.to_string(),
                },
                _ => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }

    /// Parses and resolves raw request text. A request that cannot be
    /// parsed at all is [`Route::Unknown`].
    pub fn from_raw(raw: &str) -> Self {
        Request::parse(raw)
            .map(|req| Self::resolve(&req))
            .unwrap_or(Self::Unknown)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::State => "state",
            Self::Move { .. } => "move",
            Self::Hint => "hint",
            Self::Reset => "reset",
            Self::Path { .. } => "path",
            Self::Unknown => "unknown",
        }
    }
}
