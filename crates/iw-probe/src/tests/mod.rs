
use crate::codec::{
    STATUS_RESPONSE_PACKET_ID, frame, get_string, get_varint, put_string, put_varint, read_packet,
};

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use bytes::{Buf, BytesMut};
use iw_config::ProbeConfig;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// Handshake fields as decoded by the fake server
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SeenHandshake {
    pub(crate) protocol_version: i32,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) next_state: i32,
}

/// How the fake server answers a status request
#[derive(Clone)]
pub(crate) enum Reply {
    Json(String),
    PacketId(i32),
    Silent,
}

pub(crate) struct FakeServer {
    pub(crate) addr: SocketAddr,
    pub(crate) seen: Arc<Mutex<Vec<SeenHandshake>>>,
}

impl FakeServer {
    pub(crate) async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_by_server = seen.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let reply = reply.clone();
                let seen = seen_by_server.clone();
                tokio::spawn(async move {
                    // Fast-check connections close without sending anything
                    let Ok((_, mut handshake)) = read_packet(&mut socket).await else {
                        return;
                    };
                    let protocol_version = get_varint(&mut handshake).unwrap();
                    let host = get_string(&mut handshake).unwrap();
                    let port = handshake.get_u16();
                    let next_state = get_varint(&mut handshake).unwrap();
                    seen.lock().unwrap().push(SeenHandshake {
                        protocol_version,
                        host,
                        port,
                        next_state,
                    });

                    let Ok(_) = read_packet(&mut socket).await else {
                        return;
                    };

                    match reply {
                        Reply::Json(json) => {
                            let mut body = BytesMut::new();
                            put_varint(&mut body, STATUS_RESPONSE_PACKET_ID);
                            put_string(&mut body, &json);
                            let _ = socket.write_all(&frame(&body)).await;
                        }
                        Reply::PacketId(id) => {
                            let mut body = BytesMut::new();
                            put_varint(&mut body, id);
                            put_string(&mut body, "{}");
                            let _ = socket.write_all(&frame(&body)).await;
                        }
                        Reply::Silent => {
                            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                        }
                    }
                });
            }
        });

        Self { addr, seen }
    }

    pub(crate) fn handshakes(&self) -> Vec<SeenHandshake> {
        self.seen.lock().unwrap().clone()
    }
}

/// Probe config pointed at `addr` with short timeouts
pub(crate) fn probe_config(addr: SocketAddr) -> ProbeConfig {
    ProbeConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        connect_timeout_ms: 500,
        lookup_timeout_ms: 500,
        status_timeout_ms: 300,
        ..ProbeConfig::default()
    }
}

pub(crate) fn status_json(online: i64, names: &[&str]) -> String {
    let sample: Vec<serde_json::Value> = names
        .iter()
        .map(|name| serde_json::json!({ "name": name, "id": "00000000-0000-0000-0000-000000000000" }))
        .collect();
    serde_json::json!({
        "version": { "name": "1.21.1", "protocol": 767 },
        "players": { "max": 20, "online": online, "sample": sample },
        "description": { "text": "A Minecraft Server" }
    })
    .to_string()
}
