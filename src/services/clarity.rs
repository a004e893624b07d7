//! 清晰度评分服务（权重 0.15）
//!
//! 通用扣分项对所有格式生效，代码另外检查注释比例

use crate::models::{Dimension, DimensionScore, FormatCategory};
use crate::services::{patterns, text_metrics, DimensionScorer};

const MAX_AVG_LINE_CHARS: f64 = 100.0;
const MAX_PARAGRAPH_WORDS: usize = 100;
const ABBREVIATION_NOTE_THRESHOLD: usize = 10;

/// 清晰度评分器
#[derive(Debug, Default, Clone, Copy)]
pub struct ClarityScorer;

impl DimensionScorer for ClarityScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Clarity
    }

    fn evaluate(&self, content: &str, format: FormatCategory) -> DimensionScore {
        let mut score = 1.0;
        let mut issues = Vec::new();
        let lines = text_metrics::lines(content);

        let total_chars: usize = lines.iter().map(|line| line.chars().count()).sum();
        let avg_line_len = total_chars as f64 / lines.len().max(1) as f64;
        if avg_line_len > MAX_AVG_LINE_CHARS {
            score -= 0.2;
            issues.push("Long lines reduce readability".to_string());
        }

        let blank_lines = lines.iter().filter(|line| line.trim().is_empty()).count();
        if (blank_lines as f64) < lines.len() as f64 * 0.1 {
            score -= 0.1;
            issues.push("Add more paragraph breaks".to_string());
        }

        let long_paragraphs = text_metrics::paragraphs(content)
            .filter(|p| text_metrics::word_count(p) > MAX_PARAGRAPH_WORDS)
            .count();
        if long_paragraphs > 0 {
            score -= 0.1 * long_paragraphs as f64;
            issues.push("Break up long paragraphs".to_string());
        }

        if format == FormatCategory::Code {
            let comment_lines = patterns::comment_line().find_iter(content).count();
            let code_lines = lines.iter().filter(|line| !line.trim().is_empty()).count();
            if code_lines > 10 && (comment_lines as f64) < code_lines as f64 * 0.1 {
                score -= 0.2;
                issues.push("Add more code comments".to_string());
            }
        }

        // 只提示，不扣分
        let abbreviations = patterns::abbreviation().find_iter(content).count();
        if abbreviations > ABBREVIATION_NOTE_THRESHOLD {
            issues.push("Many abbreviations - consider defining them".to_string());
        }

        DimensionScore::new(
            self.dimension(),
            f64::max(score, 0.0),
            text_metrics::join_feedback(&issues, self.dimension().clear_marker()),
        )
    }
}
