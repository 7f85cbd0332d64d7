//! Config tests. They mutate process env, so each runs serially.

use crate::config::{ServerConfig, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
use llm_client::LlmConfig;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "OPENAI_ENDPOINT",
    "DATABASE_URL",
    "LOG_FILE",
    "BIND_ADDR",
    "SYSTEM_PROMPT_PATH",
    "CONTEXT_MAX_MESSAGES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "test_key");

    let config = ServerConfig::load(None).unwrap();

    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert!(config.system_prompt_path.is_none());
    assert_eq!(config.context_max_messages, 15);
    assert_eq!(config.llm.model(), "gpt-5");
    assert_eq!(config.llm.base_url(), "https://api.openai.com/v1");
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "custom_key");
    env::set_var("OPENAI_MODEL", "gpt-4.1");
    env::set_var("OPENAI_ENDPOINT", "http://localhost:9000/v1/");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("LOG_FILE", "/tmp/copilot-test.log");
    env::set_var("BIND_ADDR", "0.0.0.0:8088");
    env::set_var("SYSTEM_PROMPT_PATH", "/etc/copilot/prompt.txt");
    env::set_var("CONTEXT_MAX_MESSAGES", "20");

    let config = ServerConfig::load(None).unwrap();

    assert_eq!(config.llm.api_key(), "custom_key");
    assert_eq!(config.llm.model(), "gpt-4.1");
    assert_eq!(config.llm.base_url(), "http://localhost:9000/v1");
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.log_file, "/tmp/copilot-test.log");
    assert_eq!(config.bind_addr, "0.0.0.0:8088");
    assert_eq!(config.system_prompt_path.as_deref(), Some("/etc/copilot/prompt.txt"));
    assert_eq!(config.context_max_messages, 20);
    clear_env();
}

#[test]
#[serial]
fn test_bind_override_wins() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("BIND_ADDR", "0.0.0.0:8088");

    let config = ServerConfig::load(Some("127.0.0.1:4000".to_string())).unwrap();

    assert_eq!(config.bind_addr, "127.0.0.1:4000");
    assert_eq!(config.socket_addr().unwrap().port(), 4000);
    clear_env();
}

#[test]
#[serial]
fn test_missing_api_key_fails() {
    clear_env();
    assert!(ServerConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_invalid_window_size_fails() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("CONTEXT_MAX_MESSAGES", "many");
    assert!(ServerConfig::load(None).is_err());

    env::set_var("CONTEXT_MAX_MESSAGES", "0");
    let config = ServerConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_bind_and_endpoint() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("BIND_ADDR", "not-an-address");
    let config = ServerConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    env::remove_var("BIND_ADDR");
    env::set_var("OPENAI_ENDPOINT", "not a url");
    let config = ServerConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}
