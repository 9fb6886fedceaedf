// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::driver::{DriverError, Locator};
use crate::pages::base::BasePage;
use crate::pages::wallet_management::WalletManagementPage;

/// 资产组合页
#[derive(Clone)]
pub struct PortfolioPage {
    base: BasePage,
}

impl PortfolioPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub fn page_title(&self) -> Locator {
        Locator::text_within_test_id("section-header", "span", "Portfolio")
    }

    /// 钱包选择器里的 `MW`（Main Wallet）头像
    pub fn wallet_avatar(&self) -> Locator {
        Locator::text_within_test_id("section-wallet-picker", "span", "MW")
    }

    pub async fn page_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.page_title()).await
    }

    pub async fn click_wallet_avatar(&self) -> Result<WalletManagementPage, DriverError> {
        self.base.click(&self.wallet_avatar()).await?;
        Ok(WalletManagementPage::new(self.base.clone()))
    }
}
