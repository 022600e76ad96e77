//! Per-connection handler: read one request, answer it, close.

use castlehunt_protocol::request_line;
use castlehunt_transport::{Connection, TcpConnection, TransportError};

use crate::{HuntError, Router};

/// Handles a single connection from accept to close.
///
/// Whatever the peer sent before its read deadline is routed, even a bare
/// request line. A peer that sends nothing at all, or closes without
/// sending anything, is dropped without touching the game.
pub(crate) async fn handle_connection(
    mut conn: TcpConnection,
    router: &mut Router,
) -> Result<(), HuntError> {
    let conn_id = conn.id();

    let data = match conn.recv().await {
        Ok(Some(data)) => data,
        Ok(None) => {
            tracing::debug!(%conn_id, "closed before sending a request");
            return Ok(());
        }
        Err(TransportError::TimedOut) => {
            tracing::info!(%conn_id, "request timed out");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let raw = String::from_utf8_lossy(&data);
    tracing::debug!(%conn_id, request = request_line(&raw), "received request");

    let response = router.handle(&raw)?;
    conn.send(&response.to_bytes()).await?;
    conn.close().await?;
    Ok(())
}
