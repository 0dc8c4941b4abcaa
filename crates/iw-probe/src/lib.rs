//! Game server probe: a TCP reachability pre-check followed by a Minecraft
//! Server List Ping status query, each bounded by its own timeout.

pub(crate) mod codec;
pub mod error;
pub mod minecraft_probe;
pub mod server_status;
pub(crate) mod status_query;

#[cfg(test)]
mod tests;

pub use error::{StatusError, StatusResult};
pub use minecraft_probe::MinecraftProbe;
pub use server_status::{PlayerSample, Players, ServerStatus, ServerVersion};
