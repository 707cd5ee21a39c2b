use crate::agent::AgentConfig;
use crate::error::Error;
use crate::request::{self, Method};
use crate::response::{self, Response, FALLBACK_STATUS};
use crate::stream;

/// Status returned, without touching the network, for urls we won't send to.
pub const INVALID_REQUEST_STATUS: u16 = 400;

/// One request and its response.
#[derive(Debug)]
pub(crate) struct Unit<'a> {
    pub config: &'a AgentConfig,
    pub method: Method,
    pub url: &'a str,
    pub form_args: Option<&'a [(&'a str, &'a str)]>,
}

impl<'a> Unit<'a> {
    pub(crate) fn new(
        config: &'a AgentConfig,
        method: Method,
        url: &'a str,
        form_args: Option<&'a [(&'a str, &'a str)]>,
    ) -> Self {
        Unit {
            config,
            method,
            url,
            form_args,
        }
    }
}

/// Perform a unit of work: build, connect, send, receive and parse.
///
/// Invalid urls and undecodable responses come back as synthetic 400 and
/// 500 responses. Only socket failures are errors.
pub(crate) fn connect(unit: Unit) -> Result<Response, Error> {
    let pending = match request::build(unit.method, unit.url, unit.form_args) {
        Ok(pending) => pending,
        Err(e) if e.kind().is_invalid_request() => {
            log::warn!("not sending {} {}: {}", unit.method, unit.url, e);
            return Ok(Response::new(INVALID_REQUEST_STATUS, ""));
        }
        Err(e) => return Err(e),
    };

    log::debug!("sending {} {} to {}:{}", unit.method, unit.url, pending.host, pending.port);
    let raw = stream::execute(pending, unit.config).map_err(|e| e.url(unit.url))?;

    match String::from_utf8(raw) {
        Ok(text) => Ok(response::parse(&text)),
        Err(e) => {
            log::warn!("response from {} is not utf-8: {}", unit.url, e);
            Ok(Response::new(FALLBACK_STATUS, ""))
        }
    }
}
