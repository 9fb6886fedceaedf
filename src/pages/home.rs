// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::driver::{DriverError, Locator};
use crate::pages::base::BasePage;
use crate::pages::create_wallet::CreateWalletPage;

/// 引导首页
#[derive(Clone)]
pub struct HomePage {
    base: BasePage,
}

impl HomePage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn open(&self) -> Result<(), DriverError> {
        self.base.open("").await
    }

    pub fn page_title(&self) -> Locator {
        Locator::css("[data-testid=\"section-onboarding-main-page\"] h1")
    }

    pub fn need_new_wallet_button(&self) -> Locator {
        Locator::test_id("btn-need-new-wallet")
    }

    pub async fn page_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.page_title()).await
    }

    /// 点击“我需要新钱包”，进入创建钱包流程
    pub async fn click_need_new_wallet(&self) -> Result<CreateWalletPage, DriverError> {
        self.base.click(&self.need_new_wallet_button()).await?;
        Ok(CreateWalletPage::new(self.base.clone()))
    }
}
