use std::fmt;

use crate::header::{self, HEADER_DELIM, MESSAGE_END};

/// Status used whenever the response can't be understood.
pub const FALLBACK_STATUS: u16 = 500;

/// Response instances are created as results of firing off requests.
///
/// Headers are kept as the raw lines the server sent, in order. A
/// `Response` never changes after it has been parsed.
#[derive(Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Vec<String>,
    body: String,
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Response[status: {}, headers: {}, body: {} bytes]",
            self.status,
            self.headers.len(),
            self.body.len()
        )
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.status)?;
        if !self.headers.is_empty() {
            writeln!(f, "{}", self.headers_text())?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

impl Response {
    /// A response with a status and body but no headers.
    ///
    /// Used for the responses we make up ourselves, and handy in tests.
    pub fn new(status: u16, body: &str) -> Response {
        Response {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// The raw header lines, status line excluded.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The header lines joined by `\n`.
    pub fn headers_text(&self) -> String {
        self.headers.join("\n")
    }

    /// The header value for the given name, or None if not found.
    pub fn header(&self, name: &str) -> Option<&str> {
        header::get_header(&self.headers, name)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_string(self) -> String {
        self.body
    }
}

/// Pull status, headers and body out of a raw response.
///
/// Never fails. Each part falls back on its own default when the text
/// doesn't look like HTTP.
///
/// ```
/// let resp = rawhttp::parse("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
/// assert_eq!(resp.status(), 200);
/// assert_eq!(resp.headers_text(), "Content-Type: text/plain");
/// assert_eq!(resp.body(), "hello");
/// ```
pub fn parse(raw: &str) -> Response {
    Response {
        status: status_code(raw),
        headers: header_lines(raw),
        body: body(raw).to_string(),
    }
}

/// Second whitespace separated token of the first line. Anything outside
/// `u16` counts as unreadable.
fn status_code(raw: &str) -> u16 {
    header::find(raw, HEADER_DELIM)
        .and_then(|i| raw[..i].split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .unwrap_or(FALLBACK_STATUS)
}

/// Lines of the header block after the status line.
fn header_lines(raw: &str) -> Vec<String> {
    let head = match header::find(raw, MESSAGE_END) {
        Some(i) => &raw[..i],
        None => raw,
    };
    head.split(HEADER_DELIM)
        .skip(1)
        .map(|l| l.to_string())
        .collect()
}

/// Everything after the first blank line.
fn body(raw: &str) -> &str {
    header::find(raw, MESSAGE_END)
        .map(|i| &raw[i + MESSAGE_END.len()..])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let resp = parse("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers_text(), "Content-Type: text/plain");
        assert_eq!(resp.header("content-type"), Some("text/plain"));
        assert_eq!(resp.body(), "hello");
        assert_eq!(resp.into_string(), "hello");
    }

    #[test]
    fn parse_empty() {
        let resp = parse("");
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers_text(), "");
        assert!(resp.headers().is_empty());
        assert_eq!(resp.body(), "");
    }

    #[test]
    fn status_without_line_end() {
        assert_eq!(status_code("HTTP/1.1 200 OK"), 500);
    }

    #[test]
    fn status_bad_tokens() {
        assert_eq!(status_code("HTTP/1.1\r\n"), 500);
        assert_eq!(status_code("HTTP/1.1 abc OK\r\n"), 500);
        assert_eq!(status_code("HTTP/1.1 99999 Huge\r\n"), 500);
        assert_eq!(status_code("HTTP/1.1 70000 Big\r\n"), 500);
        assert_eq!(status_code("HTTP/1.1 +201 Created\r\n"), 201);
        assert_eq!(status_code("HTTP/1.0   302   Found\r\n"), 302);
        assert_eq!(status_code("ICY 200 OK\r\n"), 200);
    }

    #[test]
    fn no_headers() {
        let resp = parse("HTTP/1.1 404 Not Found\r\n\r\n");
        assert_eq!(resp.status(), 404);
        assert!(resp.headers().is_empty());
        assert_eq!(resp.body(), "");
    }

    #[test]
    fn headers_keep_order_and_text() {
        let raw = "HTTP/1.1 200 OK\r\nB: 2\r\nA: 1\r\nweird line\r\n\r\n";
        let resp = parse(raw);
        assert_eq!(resp.headers(), &["B: 2", "A: 1", "weird line"]);
        assert_eq!(resp.headers_text(), "B: 2\nA: 1\nweird line");
    }

    #[test]
    fn headers_without_message_end() {
        let resp = parse("HTTP/1.1 200 OK\r\nX-A: 1\r\nX-B: 2");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers(), &["X-A: 1", "X-B: 2"]);
        assert_eq!(resp.body(), "");
    }

    #[test]
    fn body_is_split_once() {
        let resp = parse("HTTP/1.1 200 OK\r\n\r\nfirst\r\n\r\nsecond");
        assert_eq!(resp.body(), "first\r\n\r\nsecond");
    }

    #[test]
    fn display_for_cli() {
        let resp = parse("HTTP/1.1 201 Created\r\nX: y\r\n\r\ndone");
        assert_eq!(resp.to_string(), "201\nX: y\n\ndone");
        assert_eq!(Response::new(400, "").to_string(), "400\n\n");
    }
}
