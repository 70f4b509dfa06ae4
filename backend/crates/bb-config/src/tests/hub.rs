use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, ConfigError, HubConfig, MAX_MAILBOX_CAPACITY};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Hub
// =========================================================================

#[test]
fn given_default_hub_config_when_validate_then_ok() {
    let result = HubConfig::default().validate();

    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_subscriber_capacity_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _capacity = EnvGuard::set("BB_HUB_SUBSCRIBER_CAPACITY", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_legacy_capacity_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _capacity = EnvGuard::set("BB_HUB_LEGACY_CAPACITY", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_capacity_over_limit_when_validate_then_error() {
    let config = HubConfig {
        subscriber_capacity: MAX_MAILBOX_CAPACITY + 1,
        ..HubConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_capacity_at_limit_when_validate_then_ok() {
    let config = HubConfig {
        subscriber_capacity: MAX_MAILBOX_CAPACITY,
        legacy_capacity: MAX_MAILBOX_CAPACITY,
        ..HubConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_blank_id_prefix_when_validate_then_error() {
    let config = HubConfig {
        id_prefix: "   ".to_string(),
        ..HubConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_invalid_capacity_when_validate_then_location_points_at_caller() {
    let config = HubConfig {
        legacy_capacity: 0,
        ..HubConfig::default()
    };

    let Err(ConfigError::Generic { location, .. }) = config.validate() else {
        panic!("expected a hub validation error");
    };

    assert!(location.file.ends_with("hub.rs"), "{}", location.file);
    assert!(!location.file.ends_with("hub_config.rs"), "{}", location.file);
}
