// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::driver::wait::WaitConfig;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// 应用程序配置设置
///
/// 包含 API、浏览器、页面和运行器的全部配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// API 配置
    #[validate(nested)]
    pub api: ApiSettings,
    /// 浏览器配置
    #[validate(nested)]
    pub browser: BrowserSettings,
    /// 页面配置
    #[validate(nested)]
    pub ui: UiSettings,
    /// 运行器配置
    #[validate(nested)]
    pub runner: RunnerSettings,
}

/// API 配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApiSettings {
    /// API 基础地址
    #[validate(url)]
    pub base_url: String,
    /// 请求超时时间（毫秒）
    #[validate(range(min = 1))]
    pub timeout_ms: u64,
    /// Bearer 令牌，未配置时每次运行随机生成
    pub auth_token: Option<String>,
    /// 被查询的钱包地址
    #[validate(length(min = 32, max = 44))]
    pub owner_address: String,
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BrowserSettings {
    /// 是否无头模式
    pub headless: bool,
    /// 无头模式窗口宽度
    #[validate(range(min = 1))]
    pub window_width: u32,
    /// 无头模式窗口高度
    #[validate(range(min = 1))]
    pub window_height: u32,
    /// CDP 请求超时时间（毫秒）
    #[validate(range(min = 1))]
    pub request_timeout_ms: u64,
    /// 远程 Chrome 调试地址
    #[validate(url)]
    pub remote_debugging_url: Option<String>,
    /// Chrome 可执行文件路径
    pub executable: Option<String>,
}

/// 页面配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_ui_timing"))]
pub struct UiSettings {
    /// 引导流程基础地址
    #[validate(url)]
    pub base_url: String,
    /// 元素等待超时时间（毫秒）
    #[validate(range(min = 1))]
    pub wait_timeout_ms: u64,
    /// 轮询间隔（毫秒）
    #[validate(range(min = 1))]
    pub poll_interval_ms: u64,
    /// 新钱包密码
    #[validate(length(min = 8))]
    pub password: String,
}

/// 运行器配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RunnerSettings {
    /// 单个用例超时时间（毫秒）
    #[validate(range(min = 1))]
    pub case_timeout_ms: u64,
    /// 是否运行 API 用例
    pub api_enabled: bool,
    /// 是否运行浏览器用例
    pub ui_enabled: bool,
}

fn validate_ui_timing(ui: &UiSettings) -> Result<(), ValidationError> {
    if ui.poll_interval_ms > ui.wait_timeout_ms {
        return Err(ValidationError::new("poll_interval_exceeds_wait_timeout"));
    }
    Ok(())
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 返回配置的令牌，未配置时生成一个随机 UUID
    pub fn token_or_random(&self) -> String {
        self.auth_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }
}

impl BrowserSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl UiSettings {
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig::new(
            Duration::from_millis(self.wait_timeout_ms),
            Duration::from_millis(self.poll_interval_ms),
        )
    }
}

impl RunnerSettings {
    pub fn case_timeout(&self) -> Duration {
        Duration::from_millis(self.case_timeout_ms)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/` 目录下的文件、`WALLETPROBE__*` 环境变量，
    /// 以及兼容旧脚本的 `HEADLESS`、`API_TEST_AUTH_TOKEN`、`CHROMIUM_REMOTE_DEBUGGING_URL`。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并校验的配置
    /// * `Err(SettingsError)` - 加载或校验失败
    pub fn new() -> Result<Self, SettingsError> {
        let vars: Map<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::from_env(vars)
    }

    /// 用给定的环境变量表代替进程环境加载配置
    pub fn from_env(vars: Map<String, String>) -> Result<Self, SettingsError> {
        let env = vars
            .get("APP_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "default".to_string());

        let builder = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("WALLETPROBE")
                    .separator("__")
                    .source(Some(vars.clone())),
            );
        let builder = apply_legacy_env(builder, |key| vars.get(key).cloned())?;

        Self::from_builder(builder)
    }

    /// 只包含默认值的配置构建器
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // API
            .set_default("api.base_url", "https://wallet-api.solflare.com")?
            .set_default("api.timeout_ms", 10_000)?
            .set_default("api.owner_address", "HuiTegTpNAU7EJXvn95HKEWBdFMtWZYko4yoFVQyCKUS")?
            // Browser
            .set_default("browser.headless", false)?
            .set_default("browser.window_width", 1920)?
            .set_default("browser.window_height", 1080)?
            .set_default("browser.request_timeout_ms", 30_000)?
            // Onboarding UI
            .set_default("ui.base_url", "https://solflare.com/onboard/")?
            .set_default("ui.wait_timeout_ms", 10_000)?
            .set_default("ui.poll_interval_ms", 200)?
            .set_default("ui.password", "Test1234")?
            // Runner
            .set_default("runner.case_timeout_ms", 60_000)?
            .set_default("runner.api_enabled", true)?
            .set_default("runner.ui_enabled", true)
    }

    /// 构建、反序列化并校验配置
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

/// 叠加旧脚本使用的环境变量，优先级高于 `WALLETPROBE__*`
///
/// * `HEADLESS` - 只有值恰好为 `true` 时无头，设置为其他任何值都是有头
/// * `API_TEST_AUTH_TOKEN` - Bearer 令牌
/// * `CHROMIUM_REMOTE_DEBUGGING_URL` - 远程 Chrome 调试地址
///
/// 未设置的变量不覆盖下层配置。
pub fn apply_legacy_env<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let headless = lookup("HEADLESS").map(|value| value == "true");

    builder
        .set_override_option("browser.headless", headless)?
        .set_override_option("api.auth_token", lookup("API_TEST_AUTH_TOKEN"))?
        .set_override_option(
            "browser.remote_debugging_url",
            lookup("CHROMIUM_REMOTE_DEBUGGING_URL"),
        )
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
