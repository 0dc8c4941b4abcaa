use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, valid_vps_env};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Probe
// =========================================================================

#[test]
#[serial]
fn given_empty_host_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _vps = valid_vps_env();
    let _host = EnvGuard::set("IW_SERVER_HOST", "   ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _vps = valid_vps_env();
    let _port = EnvGuard::set("IW_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_status_timeout_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _vps = valid_vps_env();
    let _timeout = EnvGuard::set("IW_PROBE_STATUS_TIMEOUT_MS", "60000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_connect_timeout_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _vps = valid_vps_env();
    let _timeout = EnvGuard::set("IW_PROBE_CONNECT_TIMEOUT_MS", "10");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_custom_timeouts_in_range_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _vps = valid_vps_env();
    let _connect = EnvGuard::set("IW_PROBE_CONNECT_TIMEOUT_MS", "500");
    let _lookup = EnvGuard::set("IW_PROBE_LOOKUP_TIMEOUT_MS", "1000");
    let _status = EnvGuard::set("IW_PROBE_STATUS_TIMEOUT_MS", "4000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
