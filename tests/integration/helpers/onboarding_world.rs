// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use walletprobe::application::onboarding_journey::{
    CONFIRM_PHRASE_TITLE, CREATE_WALLET_TITLE, HOME_TITLE, MAIN_WALLET_TITLE, MY_WALLETS_TITLE,
    PORTFOLIO_TITLE, SET_PASSWORD_TITLE, SUCCESS_TITLE,
};
use walletprobe::driver::{Driver, ElementState, WaitConfig};
use walletprobe::pages::{
    BasePage, CreateWalletPage, HomePage, PortfolioPage, SuccessPage, WalletManagementPage,
};

use super::{FakeDriver, FakeElement};

pub const BASE_URL: &str = "https://solflare.com/onboard/";

pub const WORDS: [&str; 12] = [
    "orbit", "canvas", "maple", "drift", "ember", "quartz", "lunar", "pioneer", "velvet", "harbor",
    "signal", "tundra",
];

pub const WALLET_TITLES: [&str; 5] = [
    "Main Wallet",
    "Wallet 2",
    "Wallet 3",
    "Wallet 4",
    "Wallet 5",
];

/// 可调整的引导流程页面内容
pub struct OnboardingWorld {
    pub words: Vec<String>,
    pub subtitles: Vec<String>,
    pub success_title: String,
}

impl Default for OnboardingWorld {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| w.to_string()).collect(),
            subtitles: vec![
                "Main Wallet".to_string(),
                "Wallet 3".to_string(),
                "Wallet 4".to_string(),
            ],
            success_title: SUCCESS_TITLE.to_string(),
        }
    }
}

pub fn base_page(driver: Arc<FakeDriver>) -> BasePage {
    let driver: Arc<dyn Driver> = driver;
    BasePage::new(
        driver,
        WaitConfig::new(Duration::from_secs(10), Duration::from_millis(200)),
        BASE_URL,
    )
}

impl OnboardingWorld {
    /// 按页面对象的定位器登记整个流程需要的元素
    pub fn build(&self) -> (Arc<FakeDriver>, BasePage) {
        let driver = Arc::new(FakeDriver::new());
        let base = base_page(driver.clone());

        let home = HomePage::new(base.clone());
        driver.add(&home.page_title(), FakeElement::new().text(HOME_TITLE));
        driver.add(&home.need_new_wallet_button(), FakeElement::new());

        let create = CreateWalletPage::new(base.clone());
        let save = create.save_recovery_phrase_button();
        let next = create.continue_button();
        driver.add(
            &create.page_title(),
            FakeElement::new().text(CREATE_WALLET_TITLE),
        );
        driver.add_all(
            &create.recovery_phrase_inputs(),
            self.words.iter().map(|w| FakeElement::new().value(w)),
        );
        driver.add(&save, FakeElement::new());
        driver.add(
            &create.recovery_phrase_title(),
            FakeElement::new()
                .text(CONFIRM_PHRASE_TITLE)
                .revealed_by(&save),
        );
        driver.add_all(
            &create.confirm_recovery_phrase_inputs(),
            (0..12).map(|_| FakeElement::new().revealed_by(&save)),
        );
        driver.add(&next, FakeElement::new());
        driver.add(
            &create.password_page_title(),
            FakeElement::new()
                .text(SET_PASSWORD_TITLE)
                .revealed_by(&next),
        );
        driver.add(&create.new_password_input(), FakeElement::new());
        driver.add(&create.repeat_password_input(), FakeElement::new());

        let success = SuccessPage::new(base.clone());
        driver.add(
            &success.page_title(),
            FakeElement::new().text(&self.success_title),
        );
        driver.add(&success.agree_button(), FakeElement::new());

        let portfolio = PortfolioPage::new(base.clone());
        driver.add(
            &portfolio.page_title(),
            FakeElement::new().text(PORTFOLIO_TITLE),
        );
        driver.add(&portfolio.wallet_avatar(), FakeElement::new().text("MW"));

        let wallets = WalletManagementPage::new(base.clone());
        let save_wallets = wallets.save_button();
        driver.add(
            &wallets.page_title(),
            FakeElement::new().text(MY_WALLETS_TITLE),
        );
        driver.add(
            &wallets.main_wallet(),
            FakeElement::new().text(MAIN_WALLET_TITLE),
        );
        driver.add(&wallets.add_button(), FakeElement::new());
        driver.add(&wallets.manage_recovery_phrase(), FakeElement::new());
        driver.add(
            &wallets.switch_buttons(),
            FakeElement::new()
                .attribute("value", "on")
                .state(ElementState {
                    exists: true,
                    displayed: true,
                    enabled: false,
                    clickable: false,
                }),
        );
        driver.add_all(
            &wallets.switch_buttons(),
            (1..WALLET_TITLES.len()).map(|_| FakeElement::new().attribute("value", "off")),
        );
        driver.add_all(
            &wallets.wallet_titles(),
            WALLET_TITLES.iter().map(|t| FakeElement::new().text(t)),
        );
        driver.add(&save_wallets, FakeElement::new());
        driver.add(&wallets.section_title(), FakeElement::new().text("Wallets"));
        driver.add_all(
            &wallets.wallet_subtitles(),
            self.subtitles
                .iter()
                .map(|s| FakeElement::new().text(s).revealed_by(&save_wallets)),
        );

        (driver, base)
    }
}
