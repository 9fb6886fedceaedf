// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use walletprobe::application::OnboardingJourney;
use walletprobe::config::settings::Settings;
use walletprobe::driver::{ChromeDriver, Driver};
use walletprobe::pages::BasePage;

#[tokio::test]
#[ignore = "needs Chromium and the live onboarding site"]
async fn test_live_onboarding_journey() {
    let mut settings = Settings::new().unwrap();
    if settings.browser.remote_debugging_url.is_none() {
        settings.browser.headless = true;
    }

    let driver: Arc<dyn Driver> = Arc::new(ChromeDriver::launch(&settings.browser).await.unwrap());
    let base = BasePage::new(
        driver.clone(),
        settings.ui.wait_config(),
        settings.ui.base_url.clone(),
    );

    let result = OnboardingJourney::new(base, settings.ui.password.clone())
        .run()
        .await;
    driver.quit().await.unwrap();

    let outcome = result.unwrap();
    assert_eq!(outcome.phrase.len(), 12);
    assert_eq!(outcome.subtitles.len(), 3);
}
