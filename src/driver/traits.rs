// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::driver::locator::Locator;

/// 驱动错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    /// 浏览器协议错误
    #[error("CDP error: {0}")]
    Cdp(String),
    /// 浏览器启动或连接失败
    #[error("Failed to start browser: {0}")]
    Launch(String),
    /// 元素不存在
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    /// 下标越界
    #[error("No element #{index} for {locator} (found {len})")]
    IndexOutOfRange {
        locator: String,
        index: usize,
        len: usize,
    },
    /// 等待超时
    #[error("Timed out after {timeout_ms} ms waiting for {what}{}", last_error_suffix(.last_error))]
    Timeout {
        what: String,
        timeout_ms: u64,
        last_error: Option<String>,
    },
    /// 页面脚本返回了无法解析的结果
    #[error("Script error: {0}")]
    Script(String),
}

fn last_error_suffix(last_error: &Option<String>) -> String {
    last_error
        .as_ref()
        .map(|e| format!(" (last error: {})", e))
        .unwrap_or_default()
}

/// 元素在某一时刻的状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ElementState {
    pub exists: bool,
    pub displayed: bool,
    pub enabled: bool,
    pub clickable: bool,
}

impl ElementState {
    /// 一个存在、可见、可用且可点击的元素
    pub fn ready() -> Self {
        Self {
            exists: true,
            displayed: true,
            enabled: true,
            clickable: true,
        }
    }

    pub fn satisfies(&self, condition: Condition) -> bool {
        match condition {
            Condition::Exists => self.exists,
            Condition::Displayed => self.exists && self.displayed,
            Condition::Clickable => self.exists && self.displayed && self.clickable,
        }
    }
}

/// 等待条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Exists,
    Displayed,
    Clickable,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::Exists => "exist",
            Condition::Displayed => "be displayed",
            Condition::Clickable => "be clickable",
        };
        f.write_str(name)
    }
}

/// 浏览器驱动特质
///
/// 页面对象只依赖这些原语；等待策略由调用方组合。
/// 所有方法都是单次操作，不包含任何隐式等待。
#[async_trait]
pub trait Driver: Send + Sync {
    /// 导航到指定地址
    async fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// 读取元素当前状态，元素不存在时返回默认状态而不是错误
    async fn probe(&self, locator: &Locator) -> Result<ElementState, DriverError>;

    /// 匹配元素数量
    async fn count(&self, locator: &Locator) -> Result<usize, DriverError>;

    async fn click(&self, locator: &Locator) -> Result<(), DriverError>;

    /// 元素的可见文本
    async fn text(&self, locator: &Locator) -> Result<String, DriverError>;

    /// 所有匹配元素的可见文本，按文档顺序
    async fn texts(&self, locator: &Locator) -> Result<Vec<String>, DriverError>;

    async fn attribute(&self, locator: &Locator, name: &str)
        -> Result<Option<String>, DriverError>;

    /// 清空输入框并输入新值
    async fn set_value(&self, locator: &Locator, value: &str) -> Result<(), DriverError>;

    /// 所有匹配输入框的 `value`，按文档顺序
    async fn values(&self, locator: &Locator) -> Result<Vec<String>, DriverError>;

    /// 关闭会话
    async fn quit(&self) -> Result<(), DriverError>;

    /// 驱动名称
    fn name(&self) -> &'static str;
}
