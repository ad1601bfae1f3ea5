use super::*;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process env is shared; serialize every test that touches it.
fn env_guard() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

unsafe fn clear_genai_env() {
    unsafe {
        std::env::remove_var("GENAI_API_KEY_ENV");
        std::env::remove_var("GENAI_IMAGE_MODEL");
        std::env::remove_var("GENAI_CHAT_MODEL");
        std::env::remove_var("GENAI_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GENAI_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("TEST_GENAI_KEY");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe {
        clear_genai_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
    }

    let cfg = GenAiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.image_model, DEFAULT_IMAGE_MODEL);
    assert_eq!(cfg.chat_model, DEFAULT_CHAT_MODEL);
    assert_eq!(
        cfg.timeouts,
        GenAiTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );

    unsafe { clear_genai_env() };
}

#[test]
fn from_env_missing_key_errors_with_var_name() {
    let _guard = env_guard();
    unsafe { clear_genai_env() };

    let err = GenAiConfig::from_env().unwrap_err();
    assert!(matches!(err, GenAiError::MissingApiKey { ref var } if var == DEFAULT_API_KEY_VAR));
}

#[test]
fn from_env_key_var_indirection_and_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_genai_env();
        std::env::set_var("GENAI_API_KEY_ENV", "TEST_GENAI_KEY");
        std::env::set_var("TEST_GENAI_KEY", "other-secret");
        std::env::set_var("GENAI_IMAGE_MODEL", "image-model-x");
        std::env::set_var("GENAI_CHAT_MODEL", "chat-model-y");
        std::env::set_var("GENAI_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("GENAI_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = GenAiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "other-secret");
    assert_eq!(cfg.image_model, "image-model-x");
    assert_eq!(cfg.chat_model, "chat-model-y");
    assert_eq!(cfg.timeouts, GenAiTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_genai_env() };
}

#[test]
fn from_env_unparseable_timeout_falls_back() {
    let _guard = env_guard();
    unsafe {
        clear_genai_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
        std::env::set_var("GENAI_REQUEST_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = GenAiConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_genai_env() };
}
