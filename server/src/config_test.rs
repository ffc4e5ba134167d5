use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

/// Serializes tests that touch `PORT` and `BIND_ADDR`.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`] so no other test reads the environment
/// concurrently.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn from_env_defaults() {
    let _env = lock_env();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _env = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _env = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT 'eighty'"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_bind_addr_errors() {
    let _env = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "localhost");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid BIND_ADDR"));

    unsafe { clear_server_env() };
}

// =============================================================================
// PARSERS
// =============================================================================

#[test]
fn parse_port_rejects_zero_and_overflow() {
    assert!(matches!(parse_port(Some("0")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { .. })));
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_bind_addr_accepts_ipv6() {
    assert_eq!(parse_bind_addr(Some("::1")).unwrap().to_string(), "::1");
    assert_eq!(parse_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);
}
