//! Connection handler strategies.
//!
//! A handler owns everything that happens on one accepted connection. Two
//! strategies exist: [`Reflector`] answers each request with a synthesized
//! response, [`RawEcho`] only logs what it receives. The server is generic
//! over the strategy, so the choice is made once, at construction.

use std::net::SocketAddr;

use log::{error, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::parser::parse_request;
use crate::server::error::Error;
use crate::server::response::HttpResponse;

/// A strategy for consuming one accepted connection.
///
/// The server is generic over the concrete handler type, so the returned
/// futures never need to be boxed or carry explicit `Send` bounds.
#[allow(async_fn_in_trait)]
pub trait ConnectionHandler {
    /// Consume the connection: read from the socket and produce either one
    /// response or nothing. The socket is dropped (closed) by the caller
    /// when this returns, on success and on error alike.
    async fn handle<S>(&self, socket: &mut S, peer: SocketAddr) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send;
}

/// The request/response mode: read once, parse, reflect.
pub struct Reflector {
    read_buffer_size: usize,
}

impl Reflector {
    /// Create a reflector that reads at most `read_buffer_size` bytes per
    /// connection.
    pub fn new(read_buffer_size: usize) -> Self {
        Self { read_buffer_size }
    }

    /// Turn request bytes into response bytes.
    ///
    /// Infallible by design: a parse failure is logged and folds into the
    /// fixed `400 Bad Request` response instead of propagating.
    pub fn process(&self, input: &[u8], peer: SocketAddr) -> Vec<u8> {
        let response = match parse_request(input) {
            Ok(request) => {
                let response = HttpResponse::reflect(&request);
                info!(
                    "Request method: {method}, source: {peer}, response status: {code} {phrase}",
                    method = request.method,
                    code = response.status as u16,
                    phrase = response.status.reason_phrase()
                );
                response
            }
            Err(err) => {
                error!("Parse request error from {peer}: {err}");
                HttpResponse::bad_request()
            }
        };
        response.to_bytes()
    }
}

impl ConnectionHandler for Reflector {
    async fn handle<S>(&self, socket: &mut S, peer: SocketAddr) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
    {
        // A single read; whatever fits in the buffer is the whole request.
        let mut buf = vec![0; self.read_buffer_size];
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            // Peer closed before sending anything. Not an error, no response.
            return Ok(());
        }

        let answer = self.process(&buf[..n], peer);
        socket.write_all(&answer).await?;
        Ok(())
    }
}

/// The diagnostic mode: drain the connection, log each chunk, answer nothing.
pub struct RawEcho {
    read_buffer_size: usize,
}

impl RawEcho {
    /// Create an echo handler that reads in chunks of `read_buffer_size`
    /// bytes.
    pub fn new(read_buffer_size: usize) -> Self {
        Self { read_buffer_size }
    }
}

impl ConnectionHandler for RawEcho {
    async fn handle<S>(&self, socket: &mut S, peer: SocketAddr) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
    {
        let mut buf = vec![0; self.read_buffer_size];
        loop {
            let n = socket.read(&mut buf).await?;
            if n == 0 {
                return Ok(());
            }
            info!(
                "Received from {peer}: {chunk}",
                chunk = String::from_utf8_lossy(&buf[..n])
            );
        }
    }
}
