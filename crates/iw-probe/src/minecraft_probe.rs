use crate::status_query::query_status;
use crate::{ServerStatus, StatusError, StatusResult};

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use iw_config::ProbeConfig;
use iw_core::{ProbeError, ProbeResult, ServerProbe};
use log::{debug, info, warn};
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;

/// Probes a Java-edition game server. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct MinecraftProbe {
    host: String,
    port: u16,
    protocol_version: i32,
    connect_timeout: Duration,
    lookup_timeout: Duration,
    status_timeout: Duration,
}

impl MinecraftProbe {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            host: config.host.trim().to_string(),
            port: config.port,
            protocol_version: config.protocol_version,
            connect_timeout: config.connect_timeout(),
            lookup_timeout: config.lookup_timeout(),
            status_timeout: config.status_timeout(),
        }
    }

    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full status of the server, or `None` when it is unreachable.
    pub async fn probe_details(&self) -> Result<Option<ServerStatus>, ProbeError> {
        self.check_target()?;

        match self.query().await {
            Ok(status) => {
                info!(
                    "Online {} player(s): {:?}",
                    status.players.online,
                    status.player_names()
                );
                Ok(Some(status))
            }
            Err(e) => {
                warn!("Game server {} unreachable: {}", self.target(), e);
                Ok(None)
            }
        }
    }

    fn check_target(&self) -> Result<(), ProbeError> {
        if self.host.is_empty() {
            return Err(ProbeError::invalid_target(self.target(), "host is empty"));
        }
        if self.port == 0 {
            return Err(ProbeError::invalid_target(self.target(), "port is 0"));
        }
        Ok(())
    }

    async fn query(&self) -> StatusResult<ServerStatus> {
        self.fast_check().await?;
        let addr = self.lookup().await?;

        timeout(
            self.status_timeout,
            query_status(addr, &self.host, self.port, self.protocol_version),
        )
        .await
        .map_err(|_| StatusError::timeout("status", self.status_timeout))?
    }

    /// Cheap TCP connect so a dead host never costs a full handshake.
    async fn fast_check(&self) -> StatusResult<()> {
        let connect = TcpStream::connect((self.host.as_str(), self.port));

        match timeout(self.connect_timeout, connect).await {
            Ok(Ok(_stream)) => {
                debug!("Port {} open", self.target());
                Ok(())
            }
            Ok(Err(e)) => Err(StatusError::io("connect", e)),
            Err(_) => Err(StatusError::timeout("connect", self.connect_timeout)),
        }
    }

    async fn lookup(&self) -> StatusResult<SocketAddr> {
        let addrs = timeout(self.lookup_timeout, lookup_host((self.host.as_str(), self.port)))
            .await
            .map_err(|_| StatusError::timeout("lookup", self.lookup_timeout))?
            .map_err(|e| StatusError::io("lookup", e))?;

        let mut addrs: Vec<SocketAddr> = addrs.collect();
        // IPv4 first, the common case for game hosts
        addrs.sort_by_key(|addr| addr.is_ipv6());
        addrs
            .into_iter()
            .next()
            .ok_or_else(|| StatusError::no_address(self.target()))
    }
}

#[async_trait]
impl ServerProbe for MinecraftProbe {
    async fn probe(&self) -> Result<ProbeResult, ProbeError> {
        Ok(match self.probe_details().await? {
            Some(status) => ProbeResult::PlayersOnline(status.players.online),
            None => ProbeResult::Unreachable,
        })
    }
}
