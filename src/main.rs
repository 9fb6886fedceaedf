// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, error, info};

use walletprobe::api::{ApiClient, PortfolioApi};
use walletprobe::application::{OnboardingJourney, PortfolioChecks};
use walletprobe::config::settings::Settings;
use walletprobe::driver::{ChromeDriver, Driver};
use walletprobe::pages::BasePage;
use walletprobe::runner::SuiteRunner;
use walletprobe::utils::errors::CheckError;
use walletprobe::utils::telemetry;

/// 主函数
///
/// 加载配置，依次运行 API 用例和浏览器引导流程，有失败时以非零状态退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting walletprobe...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    let mut runner = SuiteRunner::new(settings.runner.case_timeout());

    // 3. API cases
    if settings.runner.api_enabled {
        let client = ApiClient::new(&settings.api)?;
        let checks = PortfolioChecks::new(PortfolioApi::new(client), &settings.api.owner_address);
        info!(owner = checks.owner(), "Running portfolio API checks");

        for (name, case) in checks.cases() {
            runner.run_case(name, case).await;
        }
    }

    // 4. Browser journey, one Chrome session for the whole run
    if settings.runner.ui_enabled {
        match ChromeDriver::launch(&settings.browser).await {
            Ok(driver) => {
                let driver: Arc<dyn Driver> = Arc::new(driver);
                let base = BasePage::new(
                    driver.clone(),
                    settings.ui.wait_config(),
                    settings.ui.base_url.clone(),
                );
                let journey = OnboardingJourney::new(base, settings.ui.password.clone());

                runner
                    .run_case("create wallet and manage recovery phrase wallets", async {
                        journey.run().await.map(|outcome| {
                            debug!(wallets = ?outcome.subtitles, "Journey finished");
                        })
                    })
                    .await;

                if let Err(e) = driver.quit().await {
                    error!("Failed to close browser: {}", e);
                }
            }
            Err(e) => {
                let name = "create wallet and manage recovery phrase wallets";
                runner
                    .run_case(name, async move { Err(CheckError::from(e)) })
                    .await;
            }
        }
    }

    // 5. Report
    let report = runner.finish();
    debug!(report = %serde_json::to_string(&report)?, "Suite report");

    if !report.is_success() {
        for failure in report.failures() {
            error!(
                "{}: {}",
                failure.name,
                failure.error.as_deref().unwrap_or("unknown error")
            );
        }
        std::process::exit(1);
    }

    Ok(())
}
