// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::driver::{DriverError, Locator};
use crate::pages::base::BasePage;
use crate::pages::portfolio::PortfolioPage;

/// 钱包创建成功页
#[derive(Clone)]
pub struct SuccessPage {
    base: BasePage,
}

impl SuccessPage {
    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    // Styled span; the page has no test-id on the title itself
    pub fn page_title(&self) -> Locator {
        Locator::css("[data-testid=\"section-onboarding-success\"] span.css-151sp5y")
    }

    pub fn agree_button(&self) -> Locator {
        Locator::test_id("btn-explore")
    }

    pub async fn page_title_text(&self) -> Result<String, DriverError> {
        self.base.text(&self.page_title()).await
    }

    pub async fn click_agree(&self) -> Result<PortfolioPage, DriverError> {
        self.base.click(&self.agree_button()).await?;
        Ok(PortfolioPage::new(self.base.clone()))
    }
}
