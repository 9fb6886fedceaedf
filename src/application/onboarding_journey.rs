// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

use crate::domain::models::{RecoveryPhrase, WalletSelection};
use crate::pages::{BasePage, HomePage};
use crate::utils::errors::{ensure_eq, AssertionFailure, CheckError};

pub const HOME_TITLE: &str = "YOUR WALLET. YOUR KINGDOM.";
pub const CREATE_WALLET_TITLE: &str = "Keys to Your Kingdom";
pub const CONFIRM_PHRASE_TITLE: &str = "Confirm Your Recovery Phrase";
pub const SET_PASSWORD_TITLE: &str = "Set a Password for Your Wallet";
pub const SUCCESS_TITLE: &str = "You\u{2019}re All Set!";
pub const PORTFOLIO_TITLE: &str = "Portfolio";
pub const MY_WALLETS_TITLE: &str = "My Wallets";
pub const MAIN_WALLET_TITLE: &str = "Main Wallet";

/// 钱包管理页上额外打开的派生钱包开关
pub const EXTRA_WALLET_SWITCHES: [usize; 2] = [2, 3];

/// 一次引导流程的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyOutcome {
    /// 页面显示并回填的助记词
    pub phrase: RecoveryPhrase,
    /// 按激活顺序记录的钱包开关
    pub selection: WalletSelection,
    /// 保存后“我的钱包”列表的副标题
    pub subtitles: Vec<String>,
}

/// 新钱包引导流程
///
/// 创建钱包 → 确认助记词 → 设置密码 → 成功页 → 资产页 → 钱包管理，
/// 最后校验“我的钱包”副标题与打开的开关一致。任何一步失败都会终止流程。
pub struct OnboardingJourney {
    base: BasePage,
    password: String,
}

impl OnboardingJourney {
    pub fn new(base: BasePage, password: impl Into<String>) -> Self {
        Self {
            base,
            password: password.into(),
        }
    }

    pub async fn run(&self) -> Result<JourneyOutcome, CheckError> {
        let home = HomePage::new(self.base.clone());
        info!("Opening onboarding home");
        home.open().await?;
        self.base
            .expect_text(&home.page_title(), HOME_TITLE, "Home page title does not match")
            .await?;

        info!("Creating a new wallet");
        let create = home.click_need_new_wallet().await?;
        self.base
            .expect_text(
                &create.page_title(),
                CREATE_WALLET_TITLE,
                "Create Wallet page title does not match",
            )
            .await?;

        let phrase = RecoveryPhrase::new(create.recovery_phrase().await?)?;
        info!(words = phrase.len(), "Recovery phrase read");
        create.click_save_recovery_phrase().await?;

        self.base.wait_displayed(&create.recovery_phrase_title()).await?;
        self.base
            .expect_text(
                &create.recovery_phrase_title(),
                CONFIRM_PHRASE_TITLE,
                "Recovery Phrase title does not match",
            )
            .await?;

        info!("Confirming recovery phrase");
        create.fill_recovery_phrase(phrase.words()).await?;
        phrase.verify_round_trip(&create.entered_recovery_phrase().await?)?;
        create.click_continue().await?;

        self.base.wait_displayed(&create.password_page_title()).await?;
        self.base
            .expect_text(
                &create.password_page_title(),
                SET_PASSWORD_TITLE,
                "Password page title does not match",
            )
            .await?;

        info!("Setting wallet password");
        create.fill_password(&self.password).await?;
        create.fill_repeat_password(&self.password).await?;
        let success = create.submit_password().await?;

        self.base.wait_displayed(&success.page_title()).await?;
        self.base
            .expect_text(&success.page_title(), SUCCESS_TITLE, "Success page title does not match")
            .await?;

        info!("Entering portfolio");
        let portfolio = success.click_agree().await?;
        self.base.wait_displayed(&portfolio.page_title()).await?;
        self.base
            .expect_text(
                &portfolio.page_title(),
                PORTFOLIO_TITLE,
                "Portfolio page title does not match",
            )
            .await?;

        info!("Opening wallet management");
        let wallets = portfolio.click_wallet_avatar().await?;
        self.base.wait_displayed(&wallets.page_title()).await?;
        self.base
            .expect_text(
                &wallets.page_title(),
                MY_WALLETS_TITLE,
                "Wallet Management page title does not match",
            )
            .await?;
        self.base.wait_displayed(&wallets.main_wallet()).await?;
        self.base
            .expect_text(
                &wallets.main_wallet(),
                MAIN_WALLET_TITLE,
                "Main Wallet title does not match",
            )
            .await?;

        info!("Managing recovery phrase wallets");
        wallets.click_add().await?;
        wallets.click_manage_recovery_phrase().await?;

        // The first derived wallet is the main one: locked on
        ensure_eq(
            &wallets.is_switch_disabled(0).await?,
            &true,
            "first wallet switch is disabled",
        )?;
        ensure_eq(
            &wallets.switch_value(0).await?,
            &Some("on".to_string()),
            "first wallet switch value",
        )?;

        let mut selection = WalletSelection::new();
        selection.activate(0, wallets.wallet_title(0).await?);

        for index in EXTRA_WALLET_SWITCHES {
            wallets.click_switch(index).await?;
            let title = wallets.wallet_title(index).await?;
            if !selection.toggle(index, title) {
                return Err(AssertionFailure::new(
                    format!("wallet switch {} turned on", index),
                    true,
                    false,
                )
                .into());
            }
        }
        info!(selected = ?selection.titles(), "Saving wallet selection");
        wallets.click_save().await?;

        self.base.wait_displayed(&wallets.page_title()).await?;
        self.base
            .expect_text(
                &wallets.page_title(),
                MY_WALLETS_TITLE,
                "Wallet Management page title does not match",
            )
            .await?;

        let subtitles = wallets.my_wallets_subtitles().await?;
        selection.verify_displayed(&subtitles)?;
        info!(?subtitles, "Wallet list matches selection");

        Ok(JourneyOutcome {
            phrase,
            selection,
            subtitles,
        })
    }
}
