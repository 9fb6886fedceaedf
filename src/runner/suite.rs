// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info};

use crate::utils::errors::CheckError;

/// 单个用例的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// 整个套件的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// 顺序用例运行器
///
/// 用例逐个执行，每个用例受 `case_timeout` 限制。一个用例失败不会中断后续用例。
pub struct SuiteRunner {
    case_timeout: Duration,
    started_at: DateTime<Utc>,
    started: Instant,
    results: Vec<CaseResult>,
}

impl SuiteRunner {
    pub fn new(case_timeout: Duration) -> Self {
        Self {
            case_timeout,
            started_at: Utc::now(),
            started: Instant::now(),
            results: Vec::new(),
        }
    }

    pub fn case_timeout(&self) -> Duration {
        self.case_timeout
    }

    /// 运行一个用例并记录结果
    ///
    /// # 返回值
    ///
    /// 用例是否通过
    pub async fn run_case<F>(&mut self, name: &str, case: F) -> bool
    where
        F: Future<Output = Result<(), CheckError>>,
    {
        info!("Running {}", name);
        let start = Instant::now();

        let outcome = match tokio::time::timeout(self.case_timeout, case).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::CaseTimeout(self.case_timeout)),
        };
        let duration_ms = start.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(()) => {
                info!("✓ {} ({} ms)", name, duration_ms);
                CaseResult {
                    name: name.to_string(),
                    success: true,
                    duration_ms,
                    error: None,
                }
            }
            Err(e) => {
                error!("✗ {} - {}", name, e);
                CaseResult {
                    name: name.to_string(),
                    success: false,
                    duration_ms,
                    error: Some(e.to_string()),
                }
            }
        };

        let success = result.success;
        self.results.push(result);
        success
    }

    /// 汇总全部结果
    pub fn finish(self) -> SuiteReport {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.success).count();
        let failed = total - passed;
        let duration_ms = self.started.elapsed().as_millis() as u64;

        info!(
            "Test Results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        SuiteReport {
            started_at: self.started_at,
            total,
            passed,
            failed,
            duration_ms,
            results: self.results,
        }
    }
}
