use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "TOAST_DURATION_MS")]
    pub toast_duration_ms: Option<u32>,
}

/// Fully resolved settings; every field has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: Tz::UTC,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl RuntimeConfig {
    /// Later layers win field by field.
    pub fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: other.api_base_url.or(self.api_base_url),
            time_zone: other.time_zone.or(self.time_zone),
            toast_duration_ms: other.toast_duration_ms.or(self.toast_duration_ms),
        }
    }

    pub fn resolve(self) -> AppConfig {
        let defaults = AppConfig::default();
        let time_zone = match self.time_zone.as_deref().map(str::parse::<Tz>) {
            Some(Ok(tz)) => tz,
            Some(Err(err)) => {
                log::warn!("Unknown time zone in runtime config ({}); using UTC", err);
                defaults.time_zone
            }
            None => defaults.time_zone,
        };
        AppConfig {
            api_base_url: self
                .api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            time_zone,
            toast_duration_ms: self
                .toast_duration_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.toast_duration_ms),
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod sources {
    use super::RuntimeConfig;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
        serde_json::from_str(&json).ok()
    }

    // window.__HRM_ENV (env.js) takes precedence over window.__HRM_CONFIG.
    pub fn snapshot_from_globals() -> RuntimeConfig {
        let config = read_global("__HRM_CONFIG").unwrap_or_default();
        match read_global("__HRM_ENV") {
            Some(env) => config.merge(env),
            None => config,
        }
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    let globals = sources::snapshot_from_globals();
    if globals.api_base_url.is_some() {
        return globals;
    }
    match sources::fetch_runtime_config().await {
        Some(file) => file.merge(globals),
        None => globals,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn init() -> &'static AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached;
    }
    let resolved = load_runtime_config().await.resolve();
    log::info!(
        "Runtime config: api_base_url={} time_zone={}",
        resolved.api_base_url,
        resolved.time_zone
    );
    APP_CONFIG.get_or_init(|| resolved)
}

pub async fn await_api_base_url() -> String {
    init().await.api_base_url.clone()
}

/// Synchronous view of the config; defaults until `init` has finished.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    current().time_zone
}

pub fn toast_duration_ms() -> u32 {
    current().toast_duration_ms
}
