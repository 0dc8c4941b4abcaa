mod cli;

use iw_config::Config;

/// Config that passes validation without touching the network.
pub(crate) fn dry_run_config() -> Config {
    let mut config = Config::default();
    config.vps.dry_run = true;
    config
}
