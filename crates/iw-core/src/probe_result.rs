use std::fmt;

/// Outcome of one probe. Every failure mode collapses into `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    PlayersOnline(u32),
    Unreachable,
}

impl ProbeResult {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeResult::PlayersOnline(_))
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeResult::PlayersOnline(players) => write!(f, "{players} player(s) online"),
            ProbeResult::Unreachable => f.write_str("unreachable"),
        }
    }
}
