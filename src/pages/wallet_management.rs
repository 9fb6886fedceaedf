// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use crate::driver::{Condition, DriverError, Locator};
use crate::pages::base::BasePage;

/// 副标题列表渲染前等待分区标题的时间
pub const SECTION_TITLE_TIMEOUT: Duration = Duration::from_secs(5);

/// 钱包管理页
///
/// 包含“我的钱包”列表和通过助记词管理派生钱包的开关列表。
/// 开关和钱包标题都按下标访问，顺序与页面一致。
#[derive(Clone)]
pub struct WalletManagementPage {
    base: BasePage,
}

impl WalletManagementPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub fn page_title(&self) -> Locator {
        Locator::text("span", "My Wallets")
    }

    pub fn main_wallet(&self) -> Locator {
        Locator::text("span", "Main Wallet")
    }

    pub fn add_button(&self) -> Locator {
        Locator::test_id("icon-btn-add")
    }

    pub fn section_title(&self) -> Locator {
        Locator::css("[data-id=\"section-title\"]")
    }

    pub fn manage_recovery_phrase(&self) -> Locator {
        Locator::test_id("li-add-wallet-mnemonic-manage")
    }

    pub fn wallet_subtitles(&self) -> Locator {
        Locator::test_id("list-item-m-subtitle")
    }

    pub fn switch_buttons(&self) -> Locator {
        Locator::xpath("//button[starts-with(@data-testid, \"tgl-li-wallets-\")]")
    }

    pub fn save_button(&self) -> Locator {
        Locator::test_id("btn-save")
    }

    pub fn wallet_titles(&self) -> Locator {
        Locator::xpath(
            "//div[starts-with(@data-testid, \"virtuoso-item-list\")]//span[@class=\"_9rd95r0\"]",
        )
    }

    pub async fn page_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.page_title()).await
    }

    pub async fn main_wallet_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.main_wallet()).await
    }

    pub async fn click_add(&self) -> Result<(), DriverError> {
        self.base.click(&self.add_button()).await
    }

    pub async fn click_manage_recovery_phrase(&self) -> Result<(), DriverError> {
        self.base.click(&self.manage_recovery_phrase()).await
    }

    pub async fn is_switch_disabled(&self, index: usize) -> Result<bool, DriverError> {
        Ok(!self.base.is_enabled(&self.switch_buttons().nth(index)).await?)
    }

    pub async fn switch_value(&self, index: usize) -> Result<Option<String>, DriverError> {
        self.base
            .attribute(&self.switch_buttons().nth(index), "value")
            .await
    }

    pub async fn wallet_title(&self, index: usize) -> Result<String, DriverError> {
        self.base.text(&self.wallet_titles().nth(index)).await
    }

    pub async fn click_switch(&self, index: usize) -> Result<(), DriverError> {
        self.base.click(&self.switch_buttons().nth(index)).await
    }

    pub async fn click_save(&self) -> Result<(), DriverError> {
        self.base.click(&self.save_button()).await
    }

    /// “我的钱包”列表中各钱包的副标题，按页面顺序
    pub async fn my_wallets_subtitles(&self) -> Result<Vec<String>, DriverError> {
        self.base
            .wait_for(
                &self.section_title(),
                Condition::Exists,
                Some(SECTION_TITLE_TIMEOUT),
            )
            .await?;
        self.base.texts(&self.wallet_subtitles()).await
    }
}
