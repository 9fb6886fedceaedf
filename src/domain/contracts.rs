// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 组合资产接口的字段契约
//!
//! 所有检查都作用在原始 `serde_json::Value` 上，这样字段类型错误（例如数量是字符串）
//! 会作为契约违规报告，而不是在反序列化阶段丢失细节。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// 原生 SOL 的铸造地址（系统程序地址）
pub const NATIVE_SOL_MINT: &str = "11111111111111111111111111111111";

/// 默认网络 SOL 条目价格对象的完整键集合
pub const SOL_PRICE_KEYS: [&str; 9] = [
    "price",
    "change",
    "usdPrice",
    "usdChange",
    "liquidity",
    "volume24h",
    "volumeChange24h",
    "mc",
    "currency",
];

static BASE58_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("base58 address pattern is valid")
});

/// 单条契约违规
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON 路径，例如 `tokens[3].totalUiAmount`
    pub path: String,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// 一次检查中收集到的全部违规
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} violation(s): {}", .violations.len(), render(.violations))]
pub struct ContractViolations {
    pub violations: Vec<Violation>,
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ContractViolations {
    pub fn single(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut violations = Self::default();
        violations.push(path, reason);
        violations
    }

    pub fn push(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(Violation {
            path: path.into(),
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// 没有违规时返回 `Ok(())`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 响应体中的 `tokens` 数组
pub fn tokens_array(body: &Value) -> Result<&Vec<Value>, ContractViolations> {
    match body.get("tokens") {
        Some(Value::Array(tokens)) => Ok(tokens),
        Some(other) => Err(ContractViolations::single(
            "tokens",
            format!("expected array, got {}", type_name(other)),
        )),
        None => Err(ContractViolations::single("tokens", "missing")),
    }
}

/// 所有字符串类型的 `name`，按响应顺序
pub fn token_names(tokens: &[Value]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|t| t.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

fn check_non_negative(violations: &mut ContractViolations, path: String, value: Option<&Value>) {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => {}
            _ => violations.push(path, format!("expected non-negative number, got {}", n)),
        },
        Some(other) => violations.push(path, format!("expected number, got {}", type_name(other))),
        None => violations.push(path, "missing"),
    }
}

/// 逐个代币检查字段类型和取值范围
///
/// 收集全部违规后一次返回。`price` 为 `null` 或缺失的代币跳过价格检查。
pub fn check_token_fields(tokens: &[Value]) -> Result<(), ContractViolations> {
    let mut violations = ContractViolations::default();

    for (i, token) in tokens.iter().enumerate() {
        let at = |field: &str| format!("tokens[{}].{}", i, field);

        match token.get("name") {
            Some(Value::String(_)) => {}
            Some(other) => violations.push(at("name"), format!("expected string, got {}", type_name(other))),
            None => violations.push(at("name"), "missing"),
        }

        match token.get("mint") {
            Some(Value::String(mint)) if mint.trim().is_empty() => {
                violations.push(at("mint"), "empty")
            }
            Some(Value::String(mint)) if !BASE58_ADDRESS.is_match(mint) => {
                violations.push(at("mint"), format!("not a base58 address: {:?}", mint))
            }
            Some(Value::String(_)) => {}
            Some(other) => violations.push(at("mint"), format!("expected string, got {}", type_name(other))),
            None => violations.push(at("mint"), "missing"),
        }

        check_non_negative(&mut violations, at("totalUiAmount"), token.get("totalUiAmount"));

        match token.get("coingeckoId") {
            Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => violations.push(
                at("coingeckoId"),
                format!("expected null or string, got {}", type_name(other)),
            ),
            None => violations.push(at("coingeckoId"), "missing"),
        }

        match token.get("price") {
            None | Some(Value::Null) => {}
            Some(Value::Object(price)) => {
                check_non_negative(&mut violations, at("price.price"), price.get("price"))
            }
            Some(other) => violations.push(
                at("price"),
                format!("expected object or null, got {}", type_name(other)),
            ),
        }
    }

    violations.into_result()
}

/// 查找原生 SOL 条目：优先按 `symbol`，没有符号字段时按名称 `Solana`
pub fn find_sol_entry(tokens: &[Value]) -> Option<&Value> {
    tokens
        .iter()
        .find(|t| t.get("symbol").and_then(Value::as_str) == Some("SOL"))
        .or_else(|| {
            tokens
                .iter()
                .find(|t| t.get("name").and_then(Value::as_str) == Some("Solana"))
        })
}

/// 检查 SOL 条目的铸造地址和价格对象键集合
pub fn check_sol_entry(token: &Value) -> Result<(), ContractViolations> {
    let mut violations = ContractViolations::default();

    match token.get("mint").and_then(Value::as_str) {
        Some(NATIVE_SOL_MINT) => {}
        Some(other) => violations.push(
            "mint",
            format!("expected {}, got {}", NATIVE_SOL_MINT, other),
        ),
        None => violations.push("mint", "missing or not a string"),
    }

    match token.get("price") {
        Some(Value::Object(price)) => {
            let actual: BTreeSet<&str> = price.keys().map(String::as_str).collect();
            let expected: BTreeSet<&str> = SOL_PRICE_KEYS.into_iter().collect();

            let missing: Vec<&str> = expected.difference(&actual).copied().collect();
            let extra: Vec<&str> = actual.difference(&expected).copied().collect();
            if !missing.is_empty() {
                violations.push("price", format!("missing keys {:?}", missing));
            }
            if !extra.is_empty() {
                violations.push("price", format!("unexpected keys {:?}", extra));
            }
        }
        Some(other) => violations.push(
            "price",
            format!("expected object, got {}", type_name(other)),
        ),
        None => violations.push("price", "missing"),
    }

    violations.into_result()
}

/// 出现在 `left` 中但不在 `right` 中的名称，保持 `left` 的顺序
pub fn exclusive_names(left: &[String], right: &[String]) -> Vec<String> {
    let right: BTreeSet<&str> = right.iter().map(String::as_str).collect();
    left.iter()
        .filter(|name| !right.contains(name.as_str()))
        .cloned()
        .collect()
}

/// 响应体中 `tokens` 字段的原始字节，保留服务端的键顺序和数字写法
pub fn raw_tokens(body: &[u8]) -> Result<&[u8], serde_json::Error> {
    #[derive(Deserialize)]
    struct Envelope<'a> {
        #[serde(borrow)]
        tokens: &'a RawValue,
    }

    let envelope: Envelope<'_> = serde_json::from_slice(body)?;
    Ok(envelope.tokens.get().as_bytes())
}

/// 两个代币列表第一个取值不同的下标，一方缺少的位置也算不同
pub fn first_difference(left: &[Value], right: &[Value]) -> Option<usize> {
    (0..left.len().max(right.len())).find(|&i| left.get(i) != right.get(i))
}

/// 检查错误响应的状态码和 `message`
pub fn check_error_contract(
    status: u16,
    body: &Value,
    expected_status: u16,
    expected_message: &str,
) -> Result<(), ContractViolations> {
    let mut violations = ContractViolations::default();

    if status != expected_status {
        violations.push("status", format!("expected {}, got {}", expected_status, status));
    }

    match body.get("message") {
        Some(Value::String(message)) if message == expected_message => {}
        Some(Value::String(message)) => violations.push(
            "message",
            format!("expected {:?}, got {:?}", expected_message, message),
        ),
        Some(other) => violations.push(
            "message",
            format!("expected string, got {}", type_name(other)),
        ),
        None => violations.push("message", "missing"),
    }

    violations.into_result()
}

#[cfg(test)]
#[path = "contracts_test.rs"]
mod tests;
