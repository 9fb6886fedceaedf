// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面对象模块
///
/// 每个逻辑页面一个类型，对外暴露定位器和组合了等待的操作方法。
/// 导航类操作返回下一个页面对象。
pub mod base;
pub mod create_wallet;
pub mod home;
pub mod portfolio;
pub mod success;
pub mod wallet_management;

pub use base::BasePage;
pub use create_wallet::CreateWalletPage;
pub use home::HomePage;
pub use portfolio::PortfolioPage;
pub use success::SuccessPage;
pub use wallet_management::WalletManagementPage;
