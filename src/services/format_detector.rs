//! 格式检测服务 - 业务能力层
//!
//! 按优先级依次判断：结构化数据 → 代码 → Markdown → 纯文本

use tracing::debug;

use crate::models::FormatCategory;
use crate::services::{patterns, structure};

/// 判定为 Markdown 所需的最少特征数
const MIN_MARKUP_SIGNALS: usize = 2;

/// 检测提交内容的格式，总能返回结果
pub fn detect(content: &str) -> FormatCategory {
    let trimmed = content.trim();

    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && structure::parse(trimmed).is_ok()
    {
        return FormatCategory::Structured;
    }

    if patterns::code_signals()
        .iter()
        .any(|re| re.is_match(trimmed))
    {
        return FormatCategory::Code;
    }

    let markup_hits = patterns::markup_signals()
        .iter()
        .filter(|re| re.is_match(trimmed))
        .count();
    debug!("Markdown 特征数: {}", markup_hits);

    if markup_hits >= MIN_MARKUP_SIGNALS {
        FormatCategory::Markup
    } else {
        FormatCategory::PlainText
    }
}
