// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;
use tracing::info;

use crate::api::client::ApiResponse;
use crate::api::portfolio::{invalid_network_message, Network, PortfolioApi};
use crate::domain::contracts::{
    check_error_contract, check_sol_entry, check_token_fields, exclusive_names, find_sol_entry,
    first_difference, raw_tokens, token_names, tokens_array, ContractViolations,
};
use crate::domain::models::{ApiErrorBody, TokenListResponse};
use crate::utils::errors::{ensure_eq, AssertionFailure, CheckError};

/// 负面用例使用的非法网络名称
pub const INVALID_NETWORK: &str = "green";

/// 一个具名的 API 检查用例
pub type NamedCase<'a> = (&'static str, BoxFuture<'a, Result<(), CheckError>>);

/// 组合资产接口检查
///
/// 每个方法是一个独立用例，只发请求和断言，不共享状态。
#[derive(Debug, Clone)]
pub struct PortfolioChecks {
    api: PortfolioApi,
    owner: String,
}

impl PortfolioChecks {
    pub fn new(api: PortfolioApi, owner: impl Into<String>) -> Self {
        Self {
            api,
            owner: owner.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// 按名称列出全部用例，顺序固定
    pub fn cases(&self) -> Vec<NamedCase<'_>> {
        vec![
            ("devnet token validation", self.devnet_token_validation().boxed()),
            (
                "mainnet token field contract",
                self.token_field_contract(Network::Mainnet).boxed(),
            ),
            (
                "devnet token field contract",
                self.token_field_contract(Network::Devnet).boxed(),
            ),
            (
                "default network SOL contract",
                self.default_network_sol_contract().boxed(),
            ),
            (
                "network switch is idempotent",
                self.network_switch_is_idempotent().boxed(),
            ),
            (
                "devnet has exclusive tokens",
                self.devnet_has_exclusive_tokens().boxed(),
            ),
            (
                "invalid network is rejected",
                self.invalid_network_is_rejected().boxed(),
            ),
        ]
    }

    /// 取一次代币列表，要求 200
    async fn fetch_ok(&self, network: Option<Network>) -> Result<ApiResponse, CheckError> {
        let response = self.api.tokens(&self.owner, network).await?;
        expect_status(&response, 200, network)?;
        Ok(response)
    }

    /// 取一次代币列表，要求 200 并返回 `tokens` 数组
    async fn fetch_tokens(&self, network: Option<Network>) -> Result<Vec<Value>, CheckError> {
        let body = self.fetch_ok(network).await?.json_value()?;
        Ok(tokens_array(&body)?.clone())
    }

    /// devnet 代币列表的基本校验
    ///
    /// 包含 `Solana`、多于一个代币、字段契约成立，并且至少有一个代币带价格。
    pub async fn devnet_token_validation(&self) -> Result<(), CheckError> {
        let tokens = self.fetch_tokens(Some(Network::Devnet)).await?;
        let names = token_names(&tokens);
        info!(count = tokens.len(), "devnet tokens received");

        if !names.iter().any(|name| name == "Solana") {
            return Err(AssertionFailure::new("devnet token names include Solana", "Solana", &names).into());
        }
        if names.len() <= 1 {
            return Err(AssertionFailure::new("devnet token count", "more than 1", names.len()).into());
        }

        check_token_fields(&tokens)?;

        let list = TokenListResponse {
            tokens: serde_json::from_value(Value::Array(tokens))?,
        };
        if list.priced().next().is_none() {
            return Err(AssertionFailure::new("priced devnet tokens", "at least 1", 0).into());
        }
        Ok(())
    }

    pub async fn token_field_contract(&self, network: Network) -> Result<(), CheckError> {
        let tokens = self.fetch_tokens(Some(network)).await?;
        check_token_fields(&tokens)?;
        Ok(())
    }

    /// 不带 `network` 参数时的 SOL 条目契约
    pub async fn default_network_sol_contract(&self) -> Result<(), CheckError> {
        let tokens = self.fetch_tokens(None).await?;
        let sol = find_sol_entry(&tokens)
            .ok_or_else(|| ContractViolations::single("tokens", "no SOL entry"))?;
        check_sol_entry(sol)?;
        Ok(())
    }

    /// mainnet → devnet → mainnet，两次 mainnet 的 `tokens` 原始字节相同
    ///
    /// 不一致时报告第一个取值不同的代币；取值全部相同时说明只是键顺序或数字写法变了。
    pub async fn network_switch_is_idempotent(&self) -> Result<(), CheckError> {
        let first = self.fetch_ok(Some(Network::Mainnet)).await?;
        self.fetch_tokens(Some(Network::Devnet)).await?;
        let second = self.fetch_ok(Some(Network::Mainnet)).await?;

        let (first_body, second_body) = (first.json_value()?, second.json_value()?);
        let first_tokens = tokens_array(&first_body)?;
        let second_tokens = tokens_array(&second_body)?;

        let (first_raw, second_raw) = (raw_tokens(&first.body)?, raw_tokens(&second.body)?);
        if first_raw == second_raw {
            return Ok(());
        }

        let message = "mainnet token list changed after switching networks";
        let failure = match first_difference(first_tokens, second_tokens) {
            Some(index) => AssertionFailure {
                message: format!("{}: first difference at tokens[{}]", message, index),
                expected: render_token(first_tokens.get(index)),
                actual: render_token(second_tokens.get(index)),
            },
            None => AssertionFailure {
                message: format!("{}: same values, different encoding", message),
                expected: String::from_utf8_lossy(first_raw).into_owned(),
                actual: String::from_utf8_lossy(second_raw).into_owned(),
            },
        };
        Err(failure.into())
    }

    /// devnet 至少有一个 mainnet 没有的代币名称
    pub async fn devnet_has_exclusive_tokens(&self) -> Result<(), CheckError> {
        let mainnet = token_names(&self.fetch_tokens(Some(Network::Mainnet)).await?);
        let devnet = token_names(&self.fetch_tokens(Some(Network::Devnet)).await?);

        let exclusive = exclusive_names(&devnet, &mainnet);
        info!(?exclusive, "devnet-only tokens");
        if exclusive.is_empty() {
            return Err(AssertionFailure::new(
                "devnet tokens absent from mainnet",
                "at least 1",
                devnet,
            )
            .into());
        }
        Ok(())
    }

    /// `network=green` 返回 400 和固定的错误信息
    pub async fn invalid_network_is_rejected(&self) -> Result<(), CheckError> {
        let response = self
            .api
            .tokens_raw(&self.owner, Some(INVALID_NETWORK))
            .await?;
        let body = response.json_value()?;
        check_error_contract(response.status, &body, 400, &invalid_network_message())?;

        let error: ApiErrorBody = response.json()?;
        if let Some(code) = error.status_code {
            ensure_eq(&code, &response.status, "statusCode in error body")?;
        }
        info!(error = ?error.error, "invalid network rejected");
        Ok(())
    }
}

fn render_token(token: Option<&Value>) -> String {
    token.map_or_else(|| "no token".to_string(), Value::to_string)
}

fn expect_status(
    response: &ApiResponse,
    expected: u16,
    network: Option<Network>,
) -> Result<(), AssertionFailure> {
    let network = network.map_or("default", |n| n.as_str());
    ensure_eq(
        &response.status,
        &expected,
        &format!("status for {} network", network),
    )
}
