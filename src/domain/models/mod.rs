// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 代币（token）：组合资产接口返回的代币账户
/// - 助记词（recovery_phrase）：引导流程中显示并回填的十二个单词
/// - 钱包选择（wallet_selection）：钱包管理页的开关状态记录
pub mod recovery_phrase;
pub mod token;
pub mod wallet_selection;

pub use recovery_phrase::{RecoveryPhrase, RECOVERY_PHRASE_WORDS};
pub use token::{ApiErrorBody, TokenAccount, TokenListResponse, TokenPrice};
pub use wallet_selection::WalletSelection;
