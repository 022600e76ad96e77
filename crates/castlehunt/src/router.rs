//! Dispatches routed requests into the game session.
//!
//! The router owns the one [`GameSession`] a server plays. Every request
//! is answered; a refused move or a spent hint is a normal `200` reply
//! whose body says what went wrong.

use castlehunt_castle::shortest_path;
use castlehunt_protocol::{
    Codec, ErrorReply, HintReply, HttpResponse, JsonCodec, MoveReply,
    PathReply, ProtocolError, ResetReply, Route,
};
use castlehunt_session::GameSession;

/// Turns raw request text into a framed response, mutating the game on
/// the way.
pub struct Router<C: Codec = JsonCodec> {
    session: GameSession,
    codec: C,
}

impl Router<JsonCodec> {
    pub fn new(session: GameSession) -> Self {
        Self::with_codec(session, JsonCodec)
    }
}

impl<C: Codec> Router<C> {
    pub fn with_codec(session: GameSession, codec: C) -> Self {
        Self { session, codec }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Routes and answers one raw request.
    ///
    /// # Errors
    /// Only if a reply fails to encode.
    pub fn handle(&mut self, raw: &str) -> Result<HttpResponse, ProtocolError> {
        let route = Route::from_raw(raw);
        tracing::debug!(route = route.name(), "routing request");
        self.dispatch(route)
    }

    /// Answers an already-resolved route.
    pub fn dispatch(&mut self, route: Route) -> Result<HttpResponse, ProtocolError> {
        let body = match route {
            Route::Preflight => return Ok(HttpResponse::preflight()),
            Route::State => self.codec.encode(&self.session.snapshot())?,
            Route::Move { room } => {
                let reply = self.move_reply(&room);
                self.codec.encode(&reply)?
            }
            Route::Hint => {
                let reply = self.hint_reply();
                self.codec.encode(&reply)?
            }
            Route::Reset => {
                self.session.reset();
                self.codec.encode(&ResetReply::done())?
            }
            Route::Path { start, end } => {
                let path = shortest_path(self.session.graph(), &start, &end)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                self.codec.encode(&PathReply { path })?
            }
            Route::Unknown => self.codec.encode(&ErrorReply::unknown_endpoint())?,
        };
        Ok(HttpResponse::json(body))
    }

    fn move_reply(&mut self, room: &str) -> MoveReply {
        match self.session.move_to(room) {
            Ok(outcome) => MoveReply {
                success: true,
                message: outcome.to_string(),
                found_treasure: outcome.found_treasure(),
            },
            Err(e) => MoveReply {
                success: false,
                message: e.to_string(),
                found_treasure: false,
            },
        }
    }

    fn hint_reply(&mut self) -> HintReply {
        match self.session.hint() {
            Ok(outcome) => HintReply {
                hint: outcome.text().to_string(),
                used: self.session.hint_used(),
            },
            // Only a spent hint is refused.
            Err(e) => HintReply {
                hint: e.to_string(),
                used: true,
            },
        }
    }
}
