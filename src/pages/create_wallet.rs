// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::debug;

use crate::domain::models::RECOVERY_PHRASE_WORDS;
use crate::driver::{DriverError, Locator};
use crate::pages::base::BasePage;
use crate::pages::success::SuccessPage;

/// 创建钱包页面
///
/// 覆盖助记词展示、助记词确认和设置密码三个步骤，它们共用同一个路由。
#[derive(Clone)]
pub struct CreateWalletPage {
    base: BasePage,
}

impl CreateWalletPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub fn page_title(&self) -> Locator {
        Locator::xpath("//h1[contains(normalize-space(.),\"Keys to Your Kingdom\")]")
    }

    pub fn new_password_input(&self) -> Locator {
        Locator::test_id("input-new-password")
    }

    pub fn repeat_password_input(&self) -> Locator {
        Locator::test_id("input-repeat-password")
    }

    pub fn password_page_title(&self) -> Locator {
        Locator::css("[data-testid=\"form-onboarding-set-password\"] h2")
    }

    pub fn continue_button(&self) -> Locator {
        Locator::test_id("btn-continue")
    }

    /// 确认页上可编辑的助记词输入框
    pub fn confirm_recovery_phrase_inputs(&self) -> Locator {
        Locator::css(
            "[data-testid=\"form-onboarding-create-confirm-mnemonic\"] \
             input[data-testid^=\"input-recovery-phrase-\"]:not([readonly])",
        )
    }

    /// 展示页上只读的助记词输入框
    pub fn recovery_phrase_inputs(&self) -> Locator {
        Locator::css("input[data-testid^=\"input-recovery-phrase-\"][readonly]")
    }

    pub fn recovery_phrase_title(&self) -> Locator {
        Locator::css("[data-testid=\"form-onboarding-create-confirm-mnemonic\"] h1")
    }

    pub fn save_recovery_phrase_button(&self) -> Locator {
        Locator::test_id("btn-saved-my-recovery-phrase")
    }

    pub async fn page_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.page_title()).await
    }

    pub async fn password_page_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.password_page_title()).await
    }

    pub async fn recovery_phrase_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.recovery_phrase_title()).await
    }

    pub async fn click_save_recovery_phrase(&self) -> Result<(), DriverError> {
        self.base.click(&self.save_recovery_phrase_button()).await
    }

    pub async fn click_continue(&self) -> Result<(), DriverError> {
        self.base.click(&self.continue_button()).await
    }

    /// 密码提交后的“继续”会离开创建流程，进入成功页
    pub async fn submit_password(&self) -> Result<SuccessPage, DriverError> {
        self.click_continue().await?;
        Ok(SuccessPage::new(self.base.clone()))
    }

    pub async fn fill_password(&self, password: &str) -> Result<(), DriverError> {
        self.base.fill_input(&self.new_password_input(), password).await
    }

    pub async fn fill_repeat_password(&self, password: &str) -> Result<(), DriverError> {
        self.base
            .fill_input(&self.repeat_password_input(), password)
            .await
    }

    /// 等待十二个只读输入框全部渲染
    pub async fn wait_for_recovery_phrase(&self) -> Result<(), DriverError> {
        self.base
            .wait_for_count(
                &self.recovery_phrase_inputs(),
                &format!("exactly {} inputs", RECOVERY_PHRASE_WORDS),
                |count| count == RECOVERY_PHRASE_WORDS,
            )
            .await?;
        Ok(())
    }

    /// 按页面顺序读出助记词
    pub async fn recovery_phrase(&self) -> Result<Vec<String>, DriverError> {
        self.wait_for_recovery_phrase().await?;
        self.base.values(&self.recovery_phrase_inputs()).await
    }

    /// 按顺序回填助记词
    ///
    /// 等待可编辑输入框数量不少于单词数，然后逐个输入；两者数量不同时只填较少的一方。
    pub async fn fill_recovery_phrase(&self, words: &[String]) -> Result<(), DriverError> {
        let inputs = self.confirm_recovery_phrase_inputs();
        let needed = words.len();
        let available = self
            .base
            .wait_for_count(&inputs, &format!("at least {} inputs", needed), |count| {
                count >= needed
            })
            .await?;

        let n = needed.min(available);
        debug!(words = n, "filling recovery phrase");
        for (i, word) in words.iter().take(n).enumerate() {
            self.base.set_value(&inputs.nth(i), word).await?;
        }
        Ok(())
    }

    /// 读取确认页输入框的当前值，用于校验回填顺序
    pub async fn entered_recovery_phrase(&self) -> Result<Vec<String>, DriverError> {
        self.base.values(&self.confirm_recovery_phrase_inputs()).await
    }
}
