use std::fmt;
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use crate::agent::AgentConfig;
use crate::error::{Error, ErrorKind};
use crate::readers;
use crate::request::PendingRequest;

/// One TCP connection, used for exactly one request.
///
/// The socket is shut down and released when the `Stream` is dropped, so
/// every path out of a request closes it, early `?` returns included.
pub struct Stream {
    inner: TcpStream,
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.inner.peer_addr() {
            Ok(addr) => write!(f, "Stream({})", addr),
            Err(_) => write!(f, "Stream(Unconnected)"),
        }
    }
}

impl Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        log::debug!("closing {:?}", self);
        // the peer may already have hung up
        let _ = self.inner.shutdown(Shutdown::Both);
    }
}

impl Stream {
    pub(crate) fn connect(hostname: &str, port: u16, config: &AgentConfig) -> Result<Stream, Error> {
        let inner = connect_host(hostname, port, config)?;
        Ok(Stream { inner })
    }

    /// Write all of `message`, draining partial writes.
    pub(crate) fn send(&mut self, message: &[u8]) -> Result<(), Error> {
        self.write_all(message)
            .and_then(|_| self.flush())
            .map_err(|e| ErrorKind::SendFailed.msg("failed to write request").src(e))?;
        log::debug!("sent {} bytes", message.len());
        Ok(())
    }

    /// Read until the server closes the connection.
    ///
    /// Nothing in the response is used for framing: no `Content-Length`, no
    /// chunked decoding. Without a read timeout a server that keeps the
    /// connection open blocks this forever.
    pub(crate) fn receive_all(&mut self) -> Result<Vec<u8>, Error> {
        let buf = readers::read_to_close(self)?;
        log::debug!("received {} bytes", buf.len());
        Ok(buf)
    }
}

/// Connect, send and drain a pending request. The connection is closed
/// before this returns, whatever the outcome.
pub(crate) fn execute(request: PendingRequest, config: &AgentConfig) -> Result<Vec<u8>, Error> {
    let PendingRequest {
        host,
        port,
        message,
    } = request;
    let mut stream = Stream::connect(&host, port, config)?;
    stream.send(&message)?;
    stream.receive_all()
}

fn to_socket_addrs(hostname: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
    // ipv6 literals arrive bracketed, as in the url
    let host = hostname.trim_start_matches('[').trim_end_matches(']');
    Ok((host, port).to_socket_addrs()?.collect())
}

fn connect_host(hostname: &str, port: u16, config: &AgentConfig) -> Result<TcpStream, Error> {
    let sock_addrs = to_socket_addrs(hostname, port).map_err(|e| {
        ErrorKind::Dns
            .msg(&format!("failed to resolve {}", hostname))
            .src(e)
    })?;

    let mut any_err = None;
    let mut any_stream = None;
    // Find the first sock_addr that accepts a connection
    for sock_addr in sock_addrs {
        log::debug!("connecting to {} at {}", hostname, sock_addr);
        let stream = match config.timeout_connect {
            Some(timeout) => TcpStream::connect_timeout(&sock_addr, timeout),
            None => TcpStream::connect(sock_addr),
        };

        match stream {
            Ok(stream) => {
                any_stream = Some(stream);
                break;
            }
            Err(err) => any_err = Some(err),
        }
    }

    let stream = if let Some(stream) = any_stream {
        stream
    } else if let Some(e) = any_err {
        return Err(ErrorKind::ConnectionFailed.msg("Connect error").src(e));
    } else {
        return Err(ErrorKind::Dns.msg(&format!("No ip address for {}", hostname)));
    };

    stream.set_read_timeout(config.timeout_read)?;
    stream.set_write_timeout(config.timeout_write)?;
    stream.set_nodelay(true)?;

    Ok(stream)
}
