// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use crate::driver::traits::DriverError;

/// 默认等待超时时间
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// 等待配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitConfig {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// 相同轮询间隔、不同超时时间
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self { timeout, ..*self }
    }
}

/// 轮询直到条件成立或超时
///
/// 条件至少会被检查一次。检查过程中的错误不会立即返回，而是继续轮询，
/// 超时后把最后一次错误附在 `DriverError::Timeout` 中。
///
/// # 参数
///
/// * `config` - 超时与轮询间隔
/// * `what` - 用于错误信息的描述，例如 `css=h1 to be displayed`
/// * `condition` - 每次轮询调用的检查
pub async fn wait_until<F, Fut>(
    config: &WaitConfig,
    what: &str,
    mut condition: F,
) -> Result<(), DriverError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, DriverError>>,
{
    let deadline = Instant::now() + config.timeout;
    let mut last_error = None;

    loop {
        match condition().await {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => last_error = Some(e.to_string()),
        }

        if Instant::now() >= deadline {
            return Err(DriverError::Timeout {
                what: what.to_string(),
                timeout_ms: config.timeout.as_millis() as u64,
                last_error,
            });
        }

        tokio::time::sleep(config.poll_interval).await;
    }
}
