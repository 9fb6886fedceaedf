// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ModelError;

/// 钱包选择状态
///
/// 按激活顺序记录被打开的钱包开关。钱包管理页保存后显示的副标题
/// 必须与这里的标题列表在内容和顺序上完全一致。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSelection {
    active: Vec<(usize, String)>,
}

impl WalletSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个默认已打开的开关，重复调用无效
    pub fn activate(&mut self, index: usize, title: impl Into<String>) {
        if !self.is_active(index) {
            self.active.push((index, title.into()));
        }
    }

    /// 切换开关
    ///
    /// # 返回值
    ///
    /// 切换后的状态，`true` 表示打开
    pub fn toggle(&mut self, index: usize, title: impl Into<String>) -> bool {
        if let Some(pos) = self.active.iter().position(|(i, _)| *i == index) {
            self.active.remove(pos);
            false
        } else {
            self.active.push((index, title.into()));
            true
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.iter().any(|(i, _)| *i == index)
    }

    /// 已打开钱包的标题，按激活顺序
    pub fn titles(&self) -> Vec<String> {
        self.active.iter().map(|(_, title)| title.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// 校验页面显示的副标题与选择一致
    pub fn verify_displayed(&self, subtitles: &[String]) -> Result<(), ModelError> {
        let expected = self.titles();
        let actual: Vec<String> = subtitles.iter().map(|s| s.trim().to_string()).collect();

        if expected != actual {
            return Err(ModelError::SelectionMismatch { expected, actual });
        }
        Ok(())
    }
}
