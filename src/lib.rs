// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// API 模块
///
/// 钱包后端 REST 接口的 HTTP 客户端和组合资产接口
pub mod api;

/// 应用程序模块
///
/// 由页面对象和 API 客户端组合而成的检查用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 数据模型和接口字段契约
pub mod domain;

/// 驱动模块
///
/// 浏览器驱动抽象、定位器、等待策略和 Chrome 实现
pub mod driver;

/// 页面对象模块
///
/// 引导流程和钱包管理的页面对象
pub mod pages;

/// 运行器模块
///
/// 顺序执行用例并汇总结果
pub mod runner;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;
