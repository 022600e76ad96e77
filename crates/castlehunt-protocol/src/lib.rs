//! Wire protocol for Castlehunt.
//!
//! This crate defines what travels between a browser and the game:
//!
//! - **Requests** ([`Request`], [`Method`]) — the request line and query
//!   string of an inbound HTTP request, nothing more
//! - **Routes** ([`Route`]) — which game action a request asks for
//! - **Replies** ([`MoveReply`], [`HintReply`], ...) — the JSON bodies
//! - **Framing** ([`HttpResponse`]) — status line, CORS headers and
//!   `Content-Length` around a body
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how replies become bytes
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the game
//! session. It doesn't know about rooms or rules, only about the shape of
//! requests and responses.
//!
//! ```text
//! Transport (bytes) → Protocol (Request → Route) → Session (game rules)
//!                   ← Protocol (reply → HttpResponse) ←
//! ```

mod codec;
mod error;
mod reply;
mod request;
mod response;
mod route;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use reply::{ErrorReply, HintReply, MoveReply, PathReply, ResetReply};
pub use request::{Method, Request, decode_query_value, request_line};
pub use response::{HttpResponse, StatusCode};
pub use route::Route;
