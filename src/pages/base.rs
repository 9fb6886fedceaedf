// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::driver::{wait_until, Condition, Driver, DriverError, Locator, WaitConfig};
use crate::utils::errors::{AssertionFailure, CheckError};

/// 页面对象基类
///
/// 所有页面共享的等待、点击、读取和输入操作。每个操作都会在执行前后记录
/// `debug` 日志；失败时以 `error` 级别记录定位器和错误，然后原样返回错误。
///
/// 页面对象本身不保存页面状态，克隆是廉价的。
#[derive(Clone)]
pub struct BasePage {
    driver: Arc<dyn Driver>,
    wait: WaitConfig,
    base_url: String,
}

impl BasePage {
    pub fn new(driver: Arc<dyn Driver>, wait: WaitConfig, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            wait,
            base_url: base_url.into(),
        }
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    pub fn wait_config(&self) -> WaitConfig {
        self.wait
    }

    /// 基础地址后直接拼接子路径
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn open(&self, path: &str) -> Result<(), DriverError> {
        let url = self.url(path);
        debug!(url = %url, "open");
        match self.driver.goto(&url).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!(url = %url, error = %e, "open failed");
                Err(e)
            }
        }
    }

    async fn logged<T, Fut>(&self, action: &str, locator: &Locator, fut: Fut) -> Result<T, DriverError>
    where
        Fut: Future<Output = Result<T, DriverError>>,
    {
        debug!(locator = %locator, "{}", action);
        match fut.await {
            Ok(value) => {
                debug!(locator = %locator, "{} done", action);
                Ok(value)
            }
            Err(e) => {
                error!(locator = %locator, error = %e, "{} failed", action);
                Err(e)
            }
        }
    }

    async fn await_condition(
        &self,
        locator: &Locator,
        condition: Condition,
        timeout: Option<Duration>,
    ) -> Result<(), DriverError> {
        let config = timeout.map_or(self.wait, |t| self.wait.with_timeout(t));
        let what = format!("{} to {}", locator, condition);
        let driver = &self.driver;

        wait_until(&config, &what, move || async move {
            Ok(driver.probe(locator).await?.satisfies(condition))
        })
        .await
    }

    pub async fn wait_for(
        &self,
        locator: &Locator,
        condition: Condition,
        timeout: Option<Duration>,
    ) -> Result<(), DriverError> {
        let action = format!("wait to {}", condition);
        self.logged(&action, locator, self.await_condition(locator, condition, timeout))
            .await
    }

    pub async fn wait_exist(&self, locator: &Locator) -> Result<(), DriverError> {
        self.wait_for(locator, Condition::Exists, None).await
    }

    pub async fn wait_displayed(&self, locator: &Locator) -> Result<(), DriverError> {
        self.wait_for(locator, Condition::Displayed, None).await
    }

    pub async fn wait_clickable(&self, locator: &Locator) -> Result<(), DriverError> {
        self.wait_for(locator, Condition::Clickable, None).await
    }

    /// 等待可点击后点击
    pub async fn click(&self, locator: &Locator) -> Result<(), DriverError> {
        self.logged("click", locator, async {
            self.await_condition(locator, Condition::Clickable, None).await?;
            self.driver.click(locator).await
        })
        .await
    }

    /// 等待可见后读取文本，去除首尾空白
    pub async fn text(&self, locator: &Locator) -> Result<String, DriverError> {
        self.logged("get text", locator, async {
            self.await_condition(locator, Condition::Displayed, None).await?;
            Ok(self.driver.text(locator).await?.trim().to_string())
        })
        .await
    }

    /// 所有匹配元素的文本，不等待
    pub async fn texts(&self, locator: &Locator) -> Result<Vec<String>, DriverError> {
        self.logged("get texts", locator, async {
            let texts = self.driver.texts(locator).await?;
            Ok(texts.into_iter().map(|t| t.trim().to_string()).collect())
        })
        .await
    }

    /// 等待存在后读取属性
    pub async fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>, DriverError> {
        let action = format!("get attribute {}", name);
        self.logged(&action, locator, async {
            self.await_condition(locator, Condition::Exists, None).await?;
            self.driver.attribute(locator, name).await
        })
        .await
    }

    /// 等待可点击后清空并输入
    pub async fn fill_input(&self, locator: &Locator, value: &str) -> Result<(), DriverError> {
        self.logged("fill input", locator, async {
            self.await_condition(locator, Condition::Clickable, None).await?;
            self.driver.set_value(locator, value).await
        })
        .await
    }

    /// 直接对第 n 个匹配元素输入，不等待
    pub async fn set_value(&self, locator: &Locator, value: &str) -> Result<(), DriverError> {
        self.logged("set value", locator, self.driver.set_value(locator, value))
            .await
    }

    pub async fn values(&self, locator: &Locator) -> Result<Vec<String>, DriverError> {
        self.logged("get values", locator, self.driver.values(locator))
            .await
    }

    /// 等待存在后判断元素是否可用
    pub async fn is_enabled(&self, locator: &Locator) -> Result<bool, DriverError> {
        self.logged("check enabled", locator, async {
            self.await_condition(locator, Condition::Exists, None).await?;
            Ok(self.driver.probe(locator).await?.enabled)
        })
        .await
    }

    /// 轮询匹配数量直到 `accept` 成立，返回最后一次的数量
    pub async fn wait_for_count<F>(
        &self,
        locator: &Locator,
        expectation: &str,
        accept: F,
    ) -> Result<usize, DriverError>
    where
        F: Fn(usize) -> bool + Send + Sync,
    {
        let action = format!("wait for {}", expectation);
        let last_count = Mutex::new(0usize);

        self.logged(&action, locator, async {
            let what = format!("{} to match {}", locator, expectation);
            let driver = &self.driver;
            let (accept, last_count) = (&accept, &last_count);

            wait_until(&self.wait, &what, move || async move {
                let count = driver.count(locator).await?;
                *last_count.lock().await = count;
                Ok(accept(count))
            })
            .await?;

            Ok(*last_count.lock().await)
        })
        .await
    }

    /// 轮询文本直到等于期望值
    ///
    /// 超时后返回断言失败，`actual` 为最后一次读到的文本。
    pub async fn expect_text(
        &self,
        locator: &Locator,
        expected: &str,
        message: &str,
    ) -> Result<(), CheckError> {
        debug!(locator = %locator, expected, "expect text");
        let last_seen: Mutex<Option<String>> = Mutex::new(None);
        let what = format!("{} to read {:?}", locator, expected);
        let driver = &self.driver;
        let last = &last_seen;

        let result = wait_until(&self.wait, &what, move || async move {
            let text = driver.text(locator).await?;
            let matched = text.trim() == expected;
            *last.lock().await = Some(text.trim().to_string());
            Ok(matched)
        })
        .await;

        match (result, last_seen.into_inner()) {
            (Ok(()), _) => Ok(()),
            (Err(_), Some(actual)) => {
                let failure = AssertionFailure::new(message, expected, actual);
                error!(locator = %locator, error = %failure, "expect text failed");
                Err(failure.into())
            }
            (Err(e), None) => {
                error!(locator = %locator, error = %e, "expect text failed");
                Err(e.into())
            }
        }
    }
}
