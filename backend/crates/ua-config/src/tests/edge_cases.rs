use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_non_http_base_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("UA_API_BASE_URL", "file:///etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_port_override_when_load_then_toml_value_kept() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server]\nport = 9100");
    let _port = EnvGuard::set("UA_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_defaults_to_info() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("UA_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}
