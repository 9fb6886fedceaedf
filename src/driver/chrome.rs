// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::settings::BrowserSettings;
use crate::driver::locator::{Locator, Strategy};
use crate::driver::traits::{Driver, DriverError, ElementState};

// React keeps its own copy of an input's value; going through the native
// setter and firing `input` is the only way to clear it.
const CLEAR_VALUE_FN: &str = "function() { \
    const proto = this instanceof HTMLTextAreaElement ? HTMLTextAreaElement.prototype : HTMLInputElement.prototype; \
    const setter = Object.getOwnPropertyDescriptor(proto, 'value').set; \
    setter.call(this, ''); \
    this.dispatchEvent(new Event('input', { bubbles: true })); \
}";

fn cdp(e: impl std::fmt::Display) -> DriverError {
    DriverError::Cdp(e.to_string())
}

/// Chrome 驱动
///
/// 基于 chromiumoxide 的 CDP 连接实现 `Driver`。每个实例对应一个浏览器会话和一个标签页。
pub struct ChromeDriver {
    browser: Mutex<Browser>,
    page: Page,
    handler: JoinHandle<()>,
    remote: bool,
}

impl ChromeDriver {
    /// 启动本地 Chrome，或连接到配置的远程调试地址
    ///
    /// # 参数
    ///
    /// * `settings` - 浏览器配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ChromeDriver)` - 已打开空白标签页的驱动
    /// * `Err(DriverError)` - 启动或连接失败
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, DriverError> {
        let remote = settings.remote_debugging_url.is_some();

        let (browser, mut handler) = if let Some(url) = &settings.remote_debugging_url {
            tracing::info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url.as_str()).await.map_err(|e| {
                DriverError::Launch(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            tracing::info!(headless = settings.headless, "Launching Chrome");
            Browser::launch(browser_config(settings)?)
                .await
                .map_err(|e| DriverError::Launch(e.to_string()))?
        };

        // Spawn a handler to process browser events
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler stopped: {}", e);
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await.map_err(cdp)?;

        Ok(Self {
            browser: Mutex::new(browser),
            page,
            handler,
            remote,
        })
    }

    async fn evaluate<T: DeserializeOwned>(&self, script: String) -> Result<T, DriverError> {
        self.page
            .evaluate(script)
            .await
            .map_err(cdp)?
            .into_value::<T>()
            .map_err(|e| DriverError::Script(e.to_string()))
    }

    async fn resolve(&self, locator: &Locator) -> Result<Element, DriverError> {
        let mut elements = match locator.strategy() {
            Strategy::Css => self.page.find_elements(locator.query()).await,
            Strategy::XPath => self.page.find_xpaths(locator.query()).await,
        }
        .map_err(cdp)?;

        let index = locator.index().unwrap_or(0);
        if elements.is_empty() {
            return Err(DriverError::ElementNotFound(locator.to_string()));
        }
        if index >= elements.len() {
            return Err(DriverError::IndexOutOfRange {
                locator: locator.to_string(),
                index,
                len: elements.len(),
            });
        }
        Ok(elements.swap_remove(index))
    }
}

fn browser_config(settings: &BrowserSettings) -> Result<BrowserConfig, DriverError> {
    let mut builder = BrowserConfig::builder()
        .no_sandbox()
        .request_timeout(settings.request_timeout())
        .arg("--disable-dev-shm-usage");

    if settings.headless {
        builder = builder
            .window_size(settings.window_width, settings.window_height)
            .arg("--disable-gpu");
    } else {
        builder = builder.with_head().arg("--start-maximized");
    }

    if let Some(path) = &settings.executable {
        builder = builder.chrome_executable(path);
    }

    builder.build().map_err(DriverError::Launch)
}

#[async_trait]
impl Driver for ChromeDriver {
    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        // goto waits for the load event
        self.page.goto(url).await.map_err(cdp)?;
        Ok(())
    }

    async fn probe(&self, locator: &Locator) -> Result<ElementState, DriverError> {
        self.evaluate(locator.js_state()).await
    }

    async fn count(&self, locator: &Locator) -> Result<usize, DriverError> {
        self.evaluate(locator.js_count()).await
    }

    async fn click(&self, locator: &Locator) -> Result<(), DriverError> {
        self.resolve(locator).await?.click().await.map_err(cdp)?;
        Ok(())
    }

    async fn text(&self, locator: &Locator) -> Result<String, DriverError> {
        let text = self
            .resolve(locator)
            .await?
            .inner_text()
            .await
            .map_err(cdp)?;
        Ok(text.unwrap_or_default())
    }

    async fn texts(&self, locator: &Locator) -> Result<Vec<String>, DriverError> {
        self.evaluate(locator.js_texts()).await
    }

    async fn attribute(
        &self,
        locator: &Locator,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        self.resolve(locator)
            .await?
            .attribute(name)
            .await
            .map_err(cdp)
    }

    async fn set_value(&self, locator: &Locator, value: &str) -> Result<(), DriverError> {
        let element = self.resolve(locator).await?;
        element.click().await.map_err(cdp)?;
        element
            .call_js_fn(CLEAR_VALUE_FN, false)
            .await
            .map_err(cdp)?;
        element.type_str(value).await.map_err(cdp)?;
        Ok(())
    }

    async fn values(&self, locator: &Locator) -> Result<Vec<String>, DriverError> {
        self.evaluate(locator.js_values()).await
    }

    async fn quit(&self) -> Result<(), DriverError> {
        if self.remote {
            // Leave a shared remote browser running, only drop our tab
            self.page.clone().close().await.map_err(cdp)?;
        } else {
            let mut browser = self.browser.lock().await;
            browser.close().await.map_err(cdp)?;
            browser.wait().await.map_err(cdp)?;
        }
        self.handler.abort();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "chrome"
    }
}

impl Drop for ChromeDriver {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
