// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

use crate::api::client::ApiError;
use crate::domain::contracts::ContractViolations;
use crate::driver::traits::DriverError;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Recovery phrase must have {expected} words, got {actual}")]
    PhraseLength { expected: usize, actual: usize },

    #[error("Recovery phrase word #{position} is empty")]
    EmptyWord { position: usize },

    #[error("Recovery phrase word #{position} differs: expected {expected:?}, entered {actual:?}")]
    PhraseOrderMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("Recovery phrase has {expected} words but {actual} were entered")]
    PhraseEntryLength { expected: usize, actual: usize },

    #[error("Wallet list does not match selection: expected {expected:?}, displayed {actual:?}")]
    SelectionMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// 断言失败
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}: expected {expected}, got {actual}")]
pub struct AssertionFailure {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>, expected: impl Debug, actual: impl Debug) -> Self {
        Self {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }
}

/// 检查两个值相等，否则返回断言失败
pub fn ensure_eq<T>(actual: &T, expected: &T, message: &str) -> Result<(), AssertionFailure>
where
    T: PartialEq + Debug + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::new(message, expected, actual))
    }
}

/// 单个检查用例的错误类型
///
/// 每个用例都返回 `Result<(), CheckError>`，任何一层的失败都会让用例失败。
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),

    #[error("Contract violated: {0}")]
    Contract(#[from] ContractViolations),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Case timed out after {0:?}")]
    CaseTimeout(Duration),
}
