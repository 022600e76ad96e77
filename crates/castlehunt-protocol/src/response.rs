//! HTTP response framing.
//!
//! Every response allows any origin. Preflights get `204` with no body;
//! everything else is `200` with a JSON body and an exact
//! `Content-Length`, even when the game refused the request.

use std::fmt;

/// The two statuses the game ever sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NoContent,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NoContent => 204,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NoContent => "No Content",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// A complete HTTP/1.1 response, ready to be written to a socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

impl HttpResponse {
    /// `200 OK` carrying a JSON body.
    pub fn json(body: Vec<u8>) -> Self {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        headers.extend(CORS_HEADERS.iter().map(|(k, v)| (*k, v.to_string())));
        headers.push(("Content-Length", body.len().to_string()));
        Self {
            status: StatusCode::Ok,
            headers,
            body,
        }
    }

    /// `204 No Content` answer to a CORS preflight.
    pub fn preflight() -> Self {
        let mut headers: Vec<(&'static str, String)> = CORS_HEADERS
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        headers.push(("Access-Control-Max-Age", "86400".to_string()));
        Self {
            status: StatusCode::NoContent,
            headers,
            body: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Value of the first header called `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Serializes status line, headers, blank line and body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {}\r\n", self.status);
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");

        let mut out = head.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}
