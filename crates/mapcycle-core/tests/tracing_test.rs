//! Tests for the mapcycle tracing setup.

use std::sync::Mutex;

use mapcycle_core::constants::LOG_ENV_VAR;
use mapcycle_core::tracing::init_tracing;
use tracing_subscriber::EnvFilter;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_is_rejected_from_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "this_is_garbage=not_a_level");
    let from_env = EnvFilter::try_from_env(LOG_ENV_VAR);
    std::env::remove_var(LOG_ENV_VAR);
    assert!(from_env.is_err());

    // The directive init_tracing falls back to must itself be valid.
    assert!(EnvFilter::try_new("mapcycle_core=info,mapcycle_engine=info").is_ok());
}

#[test]
fn test_valid_filter_is_read_from_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "mapcycle_engine=debug");
    let from_env = EnvFilter::try_from_env(LOG_ENV_VAR);
    std::env::remove_var(LOG_ENV_VAR);
    assert!(from_env.is_ok());
}
