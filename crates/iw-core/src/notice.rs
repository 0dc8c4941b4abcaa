use std::fmt;

/// Operator-facing notification classes. Each is sent at most once per episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// First reachable probe after a fresh start
    Reachable,
    /// Idle episode in progress, shutdown pending
    IdleWarning { minutes_left: u64 },
    /// Idle threshold reached, powering off
    IdleShutdown { idle_minutes: u64 },
    /// Repeated failed probes outside a startup window
    Crashed,
    /// First failed probe of a fresh start
    Starting,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Reachable => f.write_str("Game server is up and ready for players."),
            Notice::IdleWarning { minutes_left } => write!(
                f,
                "No players online. The server will shut down in {minutes_left} min unless someone joins."
            ),
            Notice::IdleShutdown { idle_minutes } => write!(
                f,
                "No players for {idle_minutes} min. The server is being shut down."
            ),
            Notice::Crashed => {
                f.write_str("Game server is not responding and is temporarily unavailable.")
            }
            Notice::Starting => f.write_str("Game server is starting, please wait..."),
        }
    }
}
