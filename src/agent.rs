use std::time::Duration;

use crate::error::Error;
use crate::request::Method;
use crate::response::Response;
use crate::unit::{self, Unit};

pub type Result<T> = std::result::Result<T, Error>;

/// Config as built by AgentBuilder and then static for the lifetime of the Agent.
///
/// Every timeout defaults to `None`: connect, send and receive block until
/// the OS or the peer finishes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentConfig {
    pub timeout_connect: Option<Duration>,
    pub timeout_read: Option<Duration>,
    pub timeout_write: Option<Duration>,
}

/// Agents hold the configuration requests are made with.
///
/// An agent keeps no connections and no other state between requests, so
/// one agent can be shared freely, across threads too. Every request opens
/// its own socket and closes it before returning.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    pub(crate) config: AgentConfig,
}

/// Accumulates options towards building an [Agent].
#[derive(Debug, Default)]
pub struct AgentBuilder {
    config: AgentConfig,
}

impl AgentBuilder {
    pub fn new() -> Self {
        AgentBuilder::default()
    }

    /// Create a new agent.
    pub fn build(self) -> Agent {
        Agent {
            config: self.config,
        }
    }

    /// Timeout for the socket connection to be successful.
    pub fn timeout_connect(mut self, timeout: Duration) -> Self {
        self.config.timeout_connect = Some(timeout);
        self
    }

    /// Timeout for each individual read from the socket.
    ///
    /// This bounds how long a server that never closes the connection can
    /// stall a request.
    pub fn timeout_read(mut self, timeout: Duration) -> Self {
        self.config.timeout_read = Some(timeout);
        self
    }

    /// Timeout for each individual write to the socket.
    pub fn timeout_write(mut self, timeout: Duration) -> Self {
        self.config.timeout_write = Some(timeout);
        self
    }
}

impl Agent {
    /// An agent with the default config: no timeouts.
    pub fn new() -> Self {
        AgentBuilder::new().build()
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Make a GET request from this agent.
    pub fn get(&self, url: &str) -> Result<Response> {
        unit::connect(Unit::new(&self.config, Method::Get, url, None))
    }

    /// Make a POST request with a url-encoded form body.
    pub fn post(&self, url: &str, form_args: &[(&str, &str)]) -> Result<Response> {
        unit::connect(Unit::new(&self.config, Method::Post, url, Some(form_args)))
    }

    /// Send `url` with the method named by `method`.
    ///
    /// `"POST"` sends a form POST. Any other method name, known or not, is
    /// sent as a GET rather than rejected.
    ///
    /// A url we can't send to, such as one with an `https` scheme, gives a
    /// 400 response without any connection being made.
    pub fn command(
        &self,
        url: &str,
        method: &str,
        form_args: Option<&[(&str, &str)]>,
    ) -> Result<Response> {
        let method = Method::lenient(method);
        unit::connect(Unit::new(&self.config, method, url, form_args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_timeouts() {
        let agent = AgentBuilder::new()
            .timeout_connect(Duration::from_secs(1))
            .timeout_read(Duration::from_secs(2))
            .build();
        assert_eq!(agent.config().timeout_connect, Some(Duration::from_secs(1)));
        assert_eq!(agent.config().timeout_read, Some(Duration::from_secs(2)));
        assert_eq!(agent.config().timeout_write, None);
    }

    #[test]
    fn default_agent_never_times_out() {
        assert_eq!(Agent::new().config(), &AgentConfig::default());
    }

    #[test]
    fn invalid_urls_are_400_without_network() {
        let agent = Agent::new();
        for url in &["https://example.com/", "ftp://example.com/", "example.com", ""] {
            let resp = agent.command(url, "GET", None).unwrap();
            assert_eq!(resp.status(), 400, "{}", url);
            assert_eq!(resp.body(), "");
        }
        let resp = agent.post("https://example.com/", &[("a", "1")]).unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[test]
    fn agent_is_send_and_sync() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<Agent>();
    }
}
