// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use walletprobe::config::settings::{ApiSettings, Settings};

pub const OWNER: &str = "HuiTegTpNAU7EJXvn95HKEWBdFMtWZYko4yoFVQyCKUS";
pub const TOKENS_PATH: &str = "/v3/portfolio/tokens/HuiTegTpNAU7EJXvn95HKEWBdFMtWZYko4yoFVQyCKUS";

pub fn api_settings(base_url: &str, token: Option<&str>) -> ApiSettings {
    let mut api = Settings::from_builder(Settings::with_defaults().unwrap())
        .unwrap()
        .api;
    api.base_url = base_url.to_string();
    api.auth_token = token.map(str::to_string);
    api
}

pub fn sol_token() -> Value {
    json!({
        "name": "Solana",
        "symbol": "SOL",
        "mint": "11111111111111111111111111111111",
        "totalUiAmount": 1.25,
        "coingeckoId": "solana",
        "price": {
            "price": 152.31,
            "change": -0.8,
            "usdPrice": 152.31,
            "usdChange": -0.8,
            "liquidity": 91234567.0,
            "volume24h": 1234567.0,
            "volumeChange24h": 4.2,
            "mc": 71234567890.0,
            "currency": "usd"
        }
    })
}

pub fn usdc_token() -> Value {
    json!({
        "name": "USD Coin",
        "symbol": "USDC",
        "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        "totalUiAmount": 10,
        "coingeckoId": "usd-coin",
        "price": {
            "price": 1.0,
            "change": 0.0,
            "usdPrice": 1.0,
            "usdChange": 0.0,
            "liquidity": 1000.0,
            "volume24h": 1000.0,
            "volumeChange24h": 0.0,
            "mc": 1000.0,
            "currency": "usd"
        }
    })
}

pub fn devnet_only_token() -> Value {
    json!({
        "name": "Devnet Test Token",
        "symbol": "DTT",
        "mint": "Gh9ZwEmdLJ8DscKNTkTqPbNwLNNBjuSzaG9Vp2KGtKJr",
        "totalUiAmount": 500,
        "coingeckoId": null,
        "price": null
    })
}

pub fn mainnet_body() -> Value {
    json!({ "tokens": [sol_token(), usdc_token()] })
}

pub fn devnet_body() -> Value {
    json!({ "tokens": [sol_token(), devnet_only_token()] })
}

pub fn invalid_network_body() -> Value {
    json!({
        "statusCode": 400,
        "error": "Bad Request",
        "message": "\"network\" must be one of [mainnet, devnet, testnet]"
    })
}
