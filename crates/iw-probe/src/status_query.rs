use crate::codec::{self, STATUS_RESPONSE_PACKET_ID};
use crate::{ServerStatus, StatusError, StatusResult};

use std::net::SocketAddr;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Run one Server List Ping exchange against `addr`.
///
/// `host` and `port` are echoed in the handshake as the address the client
/// believes it is connecting to.
pub(crate) async fn query_status(
    addr: SocketAddr,
    host: &str,
    port: u16,
    protocol_version: i32,
) -> StatusResult<ServerStatus> {
    if host.len() > codec::MAX_HOST_LEN {
        return Err(StatusError::protocol(format!(
            "host name longer than {} bytes",
            codec::MAX_HOST_LEN
        )));
    }

    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|e| StatusError::io("connect", e))?;
    stream
        .set_nodelay(true)
        .map_err(|e| StatusError::io("connect", e))?;

    let mut request = codec::handshake_packet(protocol_version, host, port);
    request.extend_from_slice(&codec::status_request_packet());
    stream
        .write_all(&request)
        .await
        .map_err(|e| StatusError::io("write", e))?;

    let (id, mut payload) = codec::read_packet(&mut stream).await?;
    if id != STATUS_RESPONSE_PACKET_ID {
        return Err(StatusError::protocol(format!(
            "unexpected packet id {id:#04x} in status response"
        )));
    }

    let json = codec::get_string(&mut payload)?;
    Ok(serde_json::from_str(&json)?)
}
