use std::fmt;

use crate::body::Payload;
use crate::error::Error;
use crate::header::{Header, HEADER_DELIM, MESSAGE_END};
use crate::url::ParsedUrl;

/// The methods this client can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Only an exact `"POST"` selects POST. Anything else, including
    /// methods we don't implement, is sent as a GET.
    pub fn lenient(method: &str) -> Method {
        if method == "POST" {
            Method::Post
        } else {
            Method::Get
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully serialized request, ready to be written to `host:port`.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub host: String,
    pub port: u16,
    pub message: Vec<u8>,
}

impl fmt::Debug for PendingRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PendingRequest({}:{}, {} bytes)",
            self.host,
            self.port,
            self.message.len()
        )
    }
}

/// Validate `url` and serialize a request for it.
///
/// The header block is always `Host` then `Connection: close`, followed for
/// POST by the form content headers. Form args are only encoded for POST.
///
/// ```
/// use rawhttp::{build, Method};
///
/// let req = build(Method::Post, "http://example.com/form", Some(&[("a", "1"), ("b", "2")])).unwrap();
/// assert_eq!(req.port, 80);
/// assert!(req.message.ends_with(b"Content-Length: 7\r\n\r\na=1&b=2"));
/// ```
pub fn build(
    method: Method,
    url: &str,
    form_args: Option<&[(&str, &str)]>,
) -> Result<PendingRequest, Error> {
    let parsed = ParsedUrl::parse(url)?;

    let payload = match method {
        Method::Get => Payload::Empty,
        Method::Post => Payload::form(form_args.unwrap_or_default()),
    };

    let mut headers = vec![
        Header::new("Host", parsed.host_str()),
        Header::new("Connection", "close"),
    ];
    if let Some(content_type) = payload.content_type() {
        headers.push(Header::new("Content-Type", content_type));
        headers.push(Header::new("Content-Length", payload.size().to_string()));
    }

    let request_line = format!("{} {} HTTP/1.1", method, parsed.target());
    log::trace!("{}", request_line);

    let head = headers
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join(HEADER_DELIM);

    let mut message = Vec::with_capacity(request_line.len() + head.len() + 8 + payload.size());
    message.extend_from_slice(request_line.as_bytes());
    message.extend_from_slice(HEADER_DELIM.as_bytes());
    message.extend_from_slice(head.as_bytes());
    message.extend_from_slice(MESSAGE_END.as_bytes());
    message.extend_from_slice(payload.as_bytes());

    Ok(PendingRequest {
        host: parsed.host_str().to_string(),
        port: parsed.port(),
        message,
    })
}
