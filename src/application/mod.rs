// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 把页面对象和 API 客户端组合成完整的检查用例：
/// - 组合资产接口检查（portfolio_checks）
/// - 新钱包引导流程（onboarding_journey）
pub mod onboarding_journey;
pub mod portfolio_checks;

pub use onboarding_journey::{JourneyOutcome, OnboardingJourney};
pub use portfolio_checks::PortfolioChecks;
