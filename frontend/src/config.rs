//! 构建期配置
//!
//! WASM 里没有进程环境变量，地址在编译时通过 `option_env!` 注入，
//! 未设置时使用核心库的默认值。

use outpass::config::{API_URL_KEY, AppConfig, CDN_URL_KEY, LOG_LEVEL_KEY, SOCKET_URL_KEY};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn build_time(key: &str) -> Option<String> {
    let value = match key {
        API_URL_KEY => option_env!("OUTPASS_API_URL"),
        CDN_URL_KEY => option_env!("OUTPASS_CDN_URL"),
        SOCKET_URL_KEY => option_env!("OUTPASS_SOCKET_URL"),
        LOG_LEVEL_KEY => option_env!("OUTPASS_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::from_lookup(build_time))
}
