// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 定位策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Css,
    XPath,
}

/// 元素定位器
///
/// 定位器只描述"如何找到元素"，本身不持有任何浏览器状态，可以随意克隆。
/// `index` 为 `None` 时指向第一个匹配元素。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    strategy: Strategy,
    query: String,
    index: Option<usize>,
}

impl Locator {
    pub fn css(query: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            query: query.into(),
            index: None,
        }
    }

    pub fn xpath(query: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            query: query.into(),
            index: None,
        }
    }

    /// `[data-testid="<id>"]`
    pub fn test_id(id: &str) -> Self {
        Self::css(format!("[data-testid=\"{}\"]", id))
    }

    /// `[data-testid^="<prefix>"]`
    pub fn test_id_prefix(prefix: &str) -> Self {
        Self::css(format!("[data-testid^=\"{}\"]", prefix))
    }

    /// 按标签与规范化文本精确匹配
    pub fn text(tag: &str, text: &str) -> Self {
        Self::xpath(format!("//{}[normalize-space()={}]", tag, xpath_literal(text)))
    }

    /// 在指定 test-id 容器内按文本匹配
    pub fn text_within_test_id(scope: &str, tag: &str, text: &str) -> Self {
        Self::xpath(format!(
            "//*[@data-testid={}]//{}[normalize-space()={}]",
            xpath_literal(scope),
            tag,
            xpath_literal(text)
        ))
    }

    /// 指向第 `index` 个匹配元素（从 0 开始）
    pub fn nth(&self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self.clone()
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// 返回匹配元素数组的 JS 表达式
    pub fn js_all(&self) -> String {
        let query = js_string(&self.query);
        match self.strategy {
            Strategy::Css => format!("Array.from(document.querySelectorAll({}))", query),
            Strategy::XPath => format!(
                "(function() {{ \
                 const r = document.evaluate({}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null); \
                 const out = []; \
                 for (let i = 0; i < r.snapshotLength; i++) {{ out.push(r.snapshotItem(i)); }} \
                 return out; }})()",
                query
            ),
        }
    }

    /// 返回元素状态对象的 JS 表达式，字段与 `ElementState` 对应
    pub fn js_state(&self) -> String {
        format!(
            "(function() {{ \
             const el = ({all})[{index}]; \
             if (!el) {{ return {{ exists: false, displayed: false, enabled: false, clickable: false }}; }} \
             const style = window.getComputedStyle(el); \
             const rect = el.getBoundingClientRect(); \
             const displayed = style.display !== 'none' && style.visibility !== 'hidden' && rect.width > 0 && rect.height > 0; \
             const enabled = !el.disabled; \
             let clickable = false; \
             if (displayed && enabled) {{ \
               el.scrollIntoView({{ block: 'center', inline: 'center' }}); \
               const box = el.getBoundingClientRect(); \
               const top = document.elementFromPoint(box.left + box.width / 2, box.top + box.height / 2); \
               clickable = !!top && (top === el || el.contains(top)); \
             }} \
             return {{ exists: true, displayed: displayed, enabled: enabled, clickable: clickable }}; }})()",
            all = self.js_all(),
            index = self.index.unwrap_or(0)
        )
    }

    pub fn js_count(&self) -> String {
        format!("({}).length", self.js_all())
    }

    pub fn js_values(&self) -> String {
        format!("({}).map(el => el.value || '')", self.js_all())
    }

    pub fn js_texts(&self) -> String {
        format!("({}).map(el => el.innerText || '')", self.js_all())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.strategy {
            Strategy::Css => "css",
            Strategy::XPath => "xpath",
        };
        write!(f, "{}={}", prefix, self.query)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

fn js_string(value: &str) -> String {
    // JSON string literals are valid JS string literals
    serde_json::Value::String(value.to_string()).to_string()
}

/// XPath 没有转义语法，同时包含两种引号时只能用 concat()
fn xpath_literal(value: &str) -> String {
    if !value.contains('"') {
        format!("\"{}\"", value)
    } else if !value.contains('\'') {
        format!("'{}'", value)
    } else {
        let parts: Vec<String> = value
            .split('"')
            .map(|part| format!("\"{}\"", part))
            .collect();
        format!("concat({})", parts.join(", '\"', "))
    }
}
