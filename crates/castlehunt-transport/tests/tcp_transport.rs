//! Integration tests for the TCP transport.
//!
//! These bind a real listener on `127.0.0.1:0` and talk to it with a
//! plain `TcpStream` client.

#[cfg(feature = "tcp")]
mod tcp {
    use std::time::Duration;

    use castlehunt_transport::{
        Connection, MAX_REQUEST_BYTES, TcpConnection, TcpTransport, Transport,
        TransportError,
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    /// Binds a transport and connects one client to it.
    async fn pair() -> (TcpConnection, TcpStream) {
        pair_with(TcpTransport::bind("127.0.0.1:0").await.expect("should bind")).await
    }

    async fn pair_with(mut transport: TcpTransport) -> (TcpConnection, TcpStream) {
        let addr = transport.local_addr().expect("local addr");

        let server = tokio::spawn(async move {
            transport.accept().await.expect("should accept")
        });
        let client = TcpStream::connect(addr).await.expect("should connect");
        let conn = server.await.expect("task should complete");
        (conn, client)
    }

    async fn pair_with_timeout(timeout: Duration) -> (TcpConnection, TcpStream) {
        let transport = TcpTransport::bind("127.0.0.1:0")
            .await
            .expect("should bind")
            .with_read_timeout(timeout);
        pair_with(transport).await
    }

    #[tokio::test]
    async fn test_recv_stops_at_blank_line_and_send_reaches_client() {
        let (mut conn, mut client) = pair().await;

        client
            .write_all(b"GET /api/state HTTP/1.1\r\nHost: castle\r\n\r\n")
            .await
            .unwrap();

        let request = conn.recv().await.unwrap().expect("some bytes");
        assert!(request.starts_with(b"GET /api/state HTTP/1.1\r\n"));
        assert!(request.ends_with(b"\r\n\r\n"));

        conn.send(b"HTTP/1.1 200 OK\r\n\r\nhello").await.unwrap();
        conn.close().await.unwrap();

        let mut reply = Vec::new();
        client.read_to_end(&mut reply).await.unwrap();
        assert_eq!(reply, b"HTTP/1.1 200 OK\r\n\r\nhello");
    }

    #[tokio::test]
    async fn test_recv_returns_partial_request_at_eof() {
        let (mut conn, mut client) = pair().await;

        client.write_all(b"GET /api/hint HTTP/1.1\r\n").await.unwrap();
        client.shutdown().await.unwrap();

        let request = conn.recv().await.unwrap().expect("some bytes");
        assert_eq!(request, b"GET /api/hint HTTP/1.1\r\n");
    }

    #[tokio::test]
    async fn test_recv_returns_request_line_when_deadline_hits() {
        let (mut conn, mut client) = pair_with_timeout(Duration::from_millis(100)).await;

        // Request line only; the client keeps the socket open.
        client.write_all(b"GET /api/state HTTP/1.1\r\n").await.unwrap();

        let request = conn.recv().await.unwrap().expect("some bytes");
        assert_eq!(request, b"GET /api/state HTTP/1.1\r\n");
        drop(client);
    }

    #[tokio::test]
    async fn test_recv_silent_peer_times_out() {
        let (mut conn, _client) = pair_with_timeout(Duration::from_millis(50)).await;

        let err = conn.recv().await.unwrap_err();
        assert!(matches!(err, TransportError::TimedOut));
    }

    #[tokio::test]
    async fn test_recv_empty_close_is_none() {
        let (mut conn, client) = pair().await;
        drop(client);

        assert!(conn.recv().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recv_truncates_long_headers_at_cap() {
        let (mut conn, mut client) = pair().await;

        let mut request = b"GET /api/state HTTP/1.1\r\nX-Padding: ".to_vec();
        request.extend(std::iter::repeat_n(b'a', 2 * MAX_REQUEST_BYTES));
        request.extend_from_slice(b"\r\n\r\n");
        tokio::spawn(async move {
            let _ = client.write_all(&request).await;
        });

        let received = conn.recv().await.unwrap().expect("some bytes");
        assert_eq!(received.len(), MAX_REQUEST_BYTES);
        assert!(received.starts_with(b"GET /api/state HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_recv_rejects_endless_request_line() {
        let (mut conn, mut client) = pair().await;

        let request = vec![b'a'; 2 * MAX_REQUEST_BYTES];
        tokio::spawn(async move {
            let _ = client.write_all(&request).await;
        });

        let err = conn.recv().await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::RequestTooLarge { limit } if limit == MAX_REQUEST_BYTES
        ));
    }

    #[tokio::test]
    async fn test_connections_get_distinct_ids() {
        let (a, _client_a) = pair().await;
        let (b, _client_b) = pair().await;
        assert_ne!(a.id(), b.id());
        assert!(a.peer_addr().ip().is_loopback());
    }
}
