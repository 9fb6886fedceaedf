// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use crate::utils::errors::ModelError;

/// 助记词单词数
pub const RECOVERY_PHRASE_WORDS: usize = 12;

/// 助记词
///
/// 从页面只读输入框中按顺序读出的十二个单词。回填时必须保持相同顺序，
/// 这是引导流程能否通过确认页的唯一条件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryPhrase {
    words: Vec<String>,
}

impl RecoveryPhrase {
    /// 从单词序列创建助记词
    ///
    /// 单词会去除首尾空白；数量必须恰好为 12 且不能有空单词。
    pub fn new<I, S>(words: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .collect();

        if words.len() != RECOVERY_PHRASE_WORDS {
            return Err(ModelError::PhraseLength {
                expected: RECOVERY_PHRASE_WORDS,
                actual: words.len(),
            });
        }
        if let Some(position) = words.iter().position(String::is_empty) {
            return Err(ModelError::EmptyWord {
                position: position + 1,
            });
        }

        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 校验回填结果与读出的顺序完全一致
    pub fn verify_round_trip(&self, entered: &[String]) -> Result<(), ModelError> {
        if entered.len() != self.words.len() {
            return Err(ModelError::PhraseEntryLength {
                expected: self.words.len(),
                actual: entered.len(),
            });
        }

        for (i, (expected, actual)) in self.words.iter().zip(entered).enumerate() {
            if expected != actual.trim() {
                return Err(ModelError::PhraseOrderMismatch {
                    position: i + 1,
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}
