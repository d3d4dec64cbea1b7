//! Tests for the server implementation.

#[cfg(test)]
mod server_tests {
    use std::io::{self, Cursor};
    use std::net::SocketAddr;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadBuf};
    use tokio::net::TcpStream;

    use crate::parser::{parse_request, StatusCode};
    use crate::server::{
        ConnectionHandler, Error, HttpResponse, HttpServer, RawEcho, Reflector, ServerConfig,
    };

    // Mock TcpStream for testing
    struct MockTcpStream {
        read_data: Cursor<Vec<u8>>,
        write_data: Vec<u8>,
    }

    impl MockTcpStream {
        fn new(read_data: Vec<u8>) -> Self {
            Self {
                read_data: Cursor::new(read_data),
                write_data: Vec::new(),
            }
        }

        fn written_data(&self) -> &[u8] {
            &self.write_data
        }
    }

    impl AsyncRead for MockTcpStream {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            let this = self.get_mut();
            let n = std::io::Read::read(&mut this.read_data, buf.initialize_unfilled())?;
            buf.advance(n);
            Poll::Ready(Ok(()))
        }
    }

    impl AsyncWrite for MockTcpStream {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            let this = self.get_mut();
            this.write_data.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:54321".parse().unwrap()
    }

    fn test_config() -> ServerConfig {
        ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            read_buffer_size: 1024,
        }
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:4890".parse().unwrap());
        assert_eq!(config.read_buffer_size, 1024);
    }

    #[test]
    fn test_reflect_response() {
        let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: localhost").unwrap();
        let response = HttpResponse::reflect(&request);

        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(response.body, "Method: GET\r\nHost: localhost");
    }

    #[test]
    fn test_bad_request_response() {
        let response = HttpResponse::bad_request();

        assert_eq!(response.status, StatusCode::BadRequest);
        assert!(response.body.is_empty());
        assert_eq!(response.to_bytes(), b"HTTP/1.1 400 Bad Request\n");
    }

    #[test]
    fn test_response_to_bytes() {
        let request = parse_request(b"GET /?status=404 HTTP/1.1\r\nFoo: bar").unwrap();
        let response = HttpResponse::reflect(&request);

        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 404 Not Found\nMethod: GET\r\nFoo: bar"
        );
    }

    #[test]
    fn test_process_round_trip() {
        // Byte-for-byte: the remainder is reflected with no normalization.
        let reflector = Reflector::new(1024);
        let answer = reflector.process(b"GET /x HTTP/1.1\r\nFoo: bar", peer());

        assert_eq!(answer, b"HTTP/1.1 200 OK\nMethod: GET\r\nFoo: bar");
    }

    #[test]
    fn test_process_unknown_status_code() {
        // An unregistered override is a parse failure, not a pass-through.
        let reflector = Reflector::new(1024);
        let answer = reflector.process(b"GET /?status=999 HTTP/1.1\r\nFoo: bar", peer());

        assert_eq!(answer, b"HTTP/1.1 400 Bad Request\n");
    }

    #[test]
    fn test_process_garbage_input() {
        let reflector = Reflector::new(1024);
        let answer = reflector.process(b"not a request at all", peer());

        assert_eq!(answer, b"HTTP/1.1 400 Bad Request\n");
    }

    #[tokio::test]
    async fn test_reflector_handles_valid_request() {
        let request = b"GET /hello HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let mut stream = MockTcpStream::new(request.to_vec());

        let reflector = Reflector::new(1024);
        reflector.handle(&mut stream, peer()).await.unwrap();

        let response = String::from_utf8_lossy(stream.written_data());
        assert!(response.starts_with("HTTP/1.1 200 OK\n"));
        assert!(response.contains("Method: GET"));
    }

    #[tokio::test]
    async fn test_reflector_handles_status_override() {
        let request = b"GET /?status=404 HTTP/1.1\r\nHost: localhost";
        let mut stream = MockTcpStream::new(request.to_vec());

        let reflector = Reflector::new(1024);
        reflector.handle(&mut stream, peer()).await.unwrap();

        let response = String::from_utf8_lossy(stream.written_data());
        assert!(response.starts_with("HTTP/1.1 404 Not Found\n"));
    }

    #[tokio::test]
    async fn test_reflector_handles_invalid_request() {
        let mut stream = MockTcpStream::new(b"INVALID REQUEST".to_vec());

        let reflector = Reflector::new(1024);
        reflector.handle(&mut stream, peer()).await.unwrap();

        assert_eq!(stream.written_data(), b"HTTP/1.1 400 Bad Request\n");
    }

    #[tokio::test]
    async fn test_reflector_ignores_empty_connection() {
        // Peer closed before sending anything: no response, no error.
        let mut stream = MockTcpStream::new(Vec::new());

        let reflector = Reflector::new(1024);
        reflector.handle(&mut stream, peer()).await.unwrap();

        assert!(stream.written_data().is_empty());
    }

    #[tokio::test]
    async fn test_raw_echo_writes_nothing() {
        let mut stream = MockTcpStream::new(b"some\r\nraw bytes".to_vec());

        let echo = RawEcho::new(4);
        echo.handle(&mut stream, peer()).await.unwrap();

        assert!(stream.written_data().is_empty());
    }

    #[tokio::test]
    async fn test_double_bind_fails() {
        let server1 = HttpServer::new(test_config(), Reflector::new(1024));
        let listener = server1.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();

        // A second server on the same address must fail to bind.
        let config2 = ServerConfig {
            addr,
            read_buffer_size: 1024,
        };
        let server2 = HttpServer::new(config2, Reflector::new(1024));
        let err = server2.bind().await.unwrap_err();
        assert!(matches!(err, Error::Bind { .. }));

        // The first listener is unaffected.
        TcpStream::connect(addr).await.unwrap();
    }

    #[tokio::test]
    async fn test_sequential_connections_are_independent() {
        let server = HttpServer::new(test_config(), Reflector::new(1024));
        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server_task = tokio::spawn(async move {
            let _ = server.serve(&listener).await;
        });

        // First connection: malformed request, answered with the fixed 400.
        let mut first = TcpStream::connect(addr).await.unwrap();
        first.write_all(b"garbage").await.unwrap();
        let mut answer = Vec::new();
        first.read_to_end(&mut answer).await.unwrap();
        assert_eq!(answer, b"HTTP/1.1 400 Bad Request\n");

        // Second connection: unaffected by the first one's failure.
        let mut second = TcpStream::connect(addr).await.unwrap();
        second
            .write_all(b"GET /x HTTP/1.1\r\nFoo: bar")
            .await
            .unwrap();
        let mut answer = Vec::new();
        second.read_to_end(&mut answer).await.unwrap();
        assert_eq!(answer, b"HTTP/1.1 200 OK\nMethod: GET\r\nFoo: bar");

        server_task.abort();
    }
}
