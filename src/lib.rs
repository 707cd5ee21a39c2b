#![forbid(unsafe_code)]
#![warn(clippy::all)]
// new is just more readable than ..Default::default().
#![allow(clippy::new_without_default)]

//! A minimal HTTP/1.1 client written directly against TCP sockets.
//!
//! rawhttp builds GET and POST requests by hand, writes them to a plain
//! [`TcpStream`](std::net::TcpStream), reads until the server closes the
//! connection and picks the status, header lines and body out of the
//! text it got back. There is no TLS, no keep-alive and no chunked decoding.
//!
//! ## Usage
//!
//! ```no_run
//! # fn main() -> Result<(), rawhttp::Error> {
//! let resp = rawhttp::get("http://example.com/")?;
//! println!("{} {}", resp.status(), resp.body());
//!
//! let resp = rawhttp::post("http://example.com/form", &[("a", "1"), ("b", "2")])?;
//! assert_eq!(resp.status(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! For timeouts, make an [Agent] with [AgentBuilder].
//!
//! ## Framing
//!
//! Every request carries `Connection: close` and the response is whatever
//! the server wrote before closing. `Content-Length` is never consulted. A
//! server that holds the connection open stalls the request unless a read
//! timeout is configured.
//!
//! ## Error handling
//!
//! A [Response] is returned whenever the request could be attempted:
//!
//! * a url with a scheme other than `http`, or one that can't be parsed,
//!   gives status 400 and nothing is sent.
//! * a response that isn't UTF-8, or whose status line can't be read, gives
//!   status 500. Missing headers or body come back empty.
//!
//! Failures on the socket (DNS, refused connection, broken pipe) are
//! returned as [Error].

mod agent;
mod body;
mod error;
mod header;
mod readers;
mod request;
mod response;
mod stream;
mod unit;
mod url;

use once_cell::sync::Lazy;

pub use crate::agent::{Agent, AgentBuilder, AgentConfig};
pub use crate::error::{Error, ErrorKind};
pub use crate::header::{HEADER_DELIM, MESSAGE_END};
pub use crate::request::{build, Method, PendingRequest};
pub use crate::response::{parse, Response};
pub use crate::url::ParsedUrl;

pub type Result<T> = std::result::Result<T, Error>;

static DEFAULT_AGENT: Lazy<Agent> = Lazy::new(Agent::new);

/// Make a GET request.
pub fn get(url: &str) -> Result<Response> {
    DEFAULT_AGENT.get(url)
}

/// Make a POST request with a url-encoded form body.
pub fn post(url: &str, form_args: &[(&str, &str)]) -> Result<Response> {
    DEFAULT_AGENT.post(url, form_args)
}

/// Make a request with a method given by name. Only `"POST"` posts,
/// everything else is a GET.
pub fn command(url: &str, method: &str, form_args: Option<&[(&str, &str)]>) -> Result<Response> {
    DEFAULT_AGENT.command(url, method, form_args)
}
