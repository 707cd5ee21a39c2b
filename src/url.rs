use crate::error::{Error, ErrorKind};

/// Schemes we speak, with the port used when the url doesn't name one.
const ALLOWED_SCHEMES: &[(&str, u16)] = &[("http", 80)];

fn default_port(scheme: &str) -> Option<u16> {
    ALLOWED_SCHEMES
        .iter()
        .find(|(s, _)| *s == scheme)
        .map(|(_, port)| *port)
}

/// The parts of a target url a request is built from.
///
/// Component splitting is left to [`url::Url`](::url::Url); this type only resolves the
/// defaults (port from the scheme, `/` for an empty path) and refuses
/// schemes not in the allowed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: Option<String>,
}

impl ParsedUrl {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let url = ::url::Url::parse(s).map_err(|e| Error::from(e).url(s))?;

        let scheme = url.scheme();
        if default_port(scheme).is_none() {
            return Err(ErrorKind::UnknownScheme
                .msg(&format!("scheme '{}' is not supported", scheme))
                .url(s));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ErrorKind::InvalidUrl.msg("missing host").url(s))?;

        let path = match url.path() {
            "" => "/",
            p => p,
        };

        Ok(ParsedUrl {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port: url.port(),
            path: path.to_string(),
            query: url.query().map(|q| q.to_string()),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host as written in the url, brackets included for IPv6 literals.
    pub fn host_str(&self) -> &str {
        &self.host
    }

    /// The explicit port, else the scheme's default.
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| default_port(&self.scheme))
            .unwrap_or(80)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path plus query, as sent on the request line.
    pub fn target(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }
}
