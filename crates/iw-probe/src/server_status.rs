use serde::Deserialize;

/// Status JSON returned by the game server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatus {
    #[serde(default)]
    pub version: Option<ServerVersion>,
    pub players: Players,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerVersion {
    pub name: String,
    #[serde(default)]
    pub protocol: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Players {
    pub online: u32,
    #[serde(default)]
    pub max: u32,
    /// Servers may omit or truncate the sample
    #[serde(default)]
    pub sample: Vec<PlayerSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSample {
    pub name: String,
}

impl ServerStatus {
    pub fn player_names(&self) -> Vec<&str> {
        self.players
            .sample
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }
}
