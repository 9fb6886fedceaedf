// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::api::client::{ApiClient, ApiError, ApiResponse};

/// 区块链网络
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Devnet,
    Testnet,
}

impl Network {
    /// 服务端接受的全部网络，顺序与错误信息一致
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Devnet, Network::Testnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知网络名称
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown network {0:?}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| UnknownNetwork(s.to_string()))
    }
}

/// 非法 `network` 参数时服务端返回的错误信息
///
/// `"network" must be one of [mainnet, devnet, testnet]`
pub fn invalid_network_message() -> String {
    let names: Vec<&str> = Network::ALL.iter().map(Network::as_str).collect();
    format!("\"network\" must be one of [{}]", names.join(", "))
}

/// 组合资产接口
#[derive(Debug, Clone)]
pub struct PortfolioApi {
    client: ApiClient,
}

impl PortfolioApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `GET /v3/portfolio/tokens/{owner}`，`network` 为 `None` 时不带查询参数
    pub async fn tokens(
        &self,
        owner: &str,
        network: Option<Network>,
    ) -> Result<ApiResponse, ApiError> {
        self.tokens_raw(owner, network.map(|n| n.as_str())).await
    }

    /// 与 `tokens` 相同，但接受任意网络字符串，用于负面用例
    pub async fn tokens_raw(
        &self,
        owner: &str,
        network: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let path = format!("/v3/portfolio/tokens/{}", owner);
        match network {
            Some(network) => self.client.get(&path, &[("network", network)]).await,
            None => self.client.get(&path, &[]).await,
        }
    }
}
