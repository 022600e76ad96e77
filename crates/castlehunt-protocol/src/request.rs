//! Request-line and query-string parsing.
//!
//! Only the first line of a request is read. Headers and bodies are
//! never looked at; the game has no use for them.

use std::fmt;

use crate::ProtocolError;

/// HTTP method of a request. Case-sensitive, as in HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Options,
    Other(String),
}

impl Method {
    fn parse(token: &str) -> Self {
        match token {
            "GET" => Self::Get,
            "OPTIONS" => Self::Options,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Options => write!(f, "OPTIONS"),
            Self::Other(m) => write!(f, "{m}"),
        }
    }
}

/// The parts of a request line the router needs.
///
/// ```rust
/// use castlehunt_protocol::{Method, Request};
///
/// let req = Request::parse("GET /api/path?start=Hall&end=Great%20Hall HTTP/1.1\r\n").unwrap();
/// assert_eq!(req.method(), &Method::Get);
/// assert_eq!(req.path(), "/api/path");
/// assert_eq!(req.query("end"), Some("Great Hall"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    /// Decoded `key=value` pairs in order of appearance.
    query: Vec<(String, String)>,
}

impl Request {
    /// Parses the request line at the start of `raw`.
    ///
    /// The request target ends at the first space, so a query value can
    /// never run into the `HTTP/1.1` that follows it. Within the query,
    /// values end at the next `&`. Pairs without `=` are dropped.
    ///
    /// # Errors
    /// [`ProtocolError::MalformedRequestLine`] if the first line is blank.
    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        let line = request_line(raw);
        let mut parts = line.split_ascii_whitespace();

        let method = parts
            .next()
            .map(Method::parse)
            .ok_or_else(|| ProtocolError::MalformedRequestLine(line.to_string()))?;
        let target = parts.next().unwrap_or("");

        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let query = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), decode_query_value(v)))
            .collect();

        Ok(Self {
            method,
            path: path.to_string(),
            query,
        })
    }

    /// Parses raw bytes; invalid UTF-8 is replaced rather than rejected.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ProtocolError> {
        Self::parse(&String::from_utf8_lossy(raw))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request target without its query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First decoded value for `key`, if present.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The first line of a request, without its line terminator.
pub fn request_line(raw: &str) -> &str {
    let end = raw.find("\r\n").or_else(|| raw.find('\n')).unwrap_or(raw.len());
    &raw[..end]
}

/// Decodes a query value.
///
/// Only `%20` is recognised (as a space); every other escape is left as
/// written. Browser clients only ever escape the spaces in room names,
/// and the game's public API has always behaved this way.
pub fn decode_query_value(value: &str) -> String {
    value.replace("%20", " ")
}
