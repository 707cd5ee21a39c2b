use std::error;
use std::fmt::{self, Display};
use std::io;

/// Errors that prevent a request from producing a [`Response`](crate::Response).
///
/// A malformed response is never an error: the parser falls back to default
/// values instead. What remains are URLs we refuse to send to and failures on
/// the socket itself, for instance DNS name not found or connection refused.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    url: Option<String>,
    source: Option<Box<dyn error::Error + Send + Sync + 'static>>,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(url) = &self.url {
            write!(f, "{}: ", url)?;
        }
        write!(f, "{}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn error::Error + 'static))
    }
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: Option<String>) -> Self {
        Error {
            kind,
            message,
            url: None,
            source: None,
        }
    }

    pub(crate) fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub(crate) fn src(mut self, e: impl error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(e));
        self
    }

    /// The type of this error.
    ///
    /// ```no_run
    /// # use rawhttp::ErrorKind;
    /// let agent = rawhttp::Agent::new();
    /// let err = agent.get("http://127.0.0.1:1/").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ConnectionFailed);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The url the failing request was made to, if known.
    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// One of the types of error that can occur when processing a request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// The url could not be understood.
    InvalidUrl,
    /// The url scheme is not one we can speak.
    UnknownScheme,
    /// DNS lookup failed.
    Dns,
    /// Connection to server failed.
    ConnectionFailed,
    /// The request could not be written to the socket.
    SendFailed,
    /// Some unspecified `std::io::Error`, typically while reading the response.
    Io,
}

impl ErrorKind {
    #[allow(clippy::wrong_self_convention)]
    #[allow(clippy::new_ret_no_self)]
    pub(crate) fn new(self) -> Error {
        Error::new(self, None)
    }

    pub(crate) fn msg(self, s: &str) -> Error {
        Error::new(self, Some(s.to_string()))
    }

    /// True for errors raised before any connection is attempted.
    pub fn is_invalid_request(self) -> bool {
        matches!(self, ErrorKind::InvalidUrl | ErrorKind::UnknownScheme)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        ErrorKind::Io.new().src(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        ErrorKind::InvalidUrl
            .msg("failed to parse URL")
            .src(err)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::InvalidUrl => write!(f, "Bad URL"),
            ErrorKind::UnknownScheme => write!(f, "Unknown Scheme"),
            ErrorKind::Dns => write!(f, "Dns Failed"),
            ErrorKind::ConnectionFailed => write!(f, "Connection Failed"),
            ErrorKind::SendFailed => write!(f, "Send Failed"),
            ErrorKind::Io => write!(f, "Network Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_url_message_and_source() {
        let err = ErrorKind::ConnectionFailed
            .msg("Connect error")
            .src(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
            .url("http://localhost:1/");
        assert_eq!(
            err.to_string(),
            "http://localhost:1/: Connection Failed: Connect error: refused"
        );
        assert!(error::Error::source(&err).is_some());
        assert_eq!(err.get_url(), Some("http://localhost:1/"));
    }

    #[test]
    fn io_error_maps_to_io_kind() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn parse_error_is_invalid_request() {
        let err: Error = url::ParseError::RelativeUrlWithoutBase.into();
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
        assert!(err.kind().is_invalid_request());
        assert!(ErrorKind::UnknownScheme.is_invalid_request());
        assert!(!ErrorKind::Dns.is_invalid_request());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn takes_send_sync<T: Send + Sync>(_: T) {}
        takes_send_sync(ErrorKind::Io.new());
    }
}
