//! 业务能力层（Services）
//!
//! 每个服务只处理一条提交，只描述"我能评什么"，不关心流程：
//!
//! - `format_detector` - 格式检测
//! - `completeness` / `format_compliance` / `coverage` / `clarity` / `validity` - 五个维度评分器
//! - `patterns` / `structure` / `text_metrics` - 共享辅助

pub mod clarity;
pub mod completeness;
pub mod coverage;
pub mod format_compliance;
pub mod format_detector;
pub mod patterns;
pub mod structure;
pub mod text_metrics;
pub mod validity;

use crate::models::{Dimension, DimensionScore, FormatCategory};

pub use clarity::ClarityScorer;
pub use completeness::CompletenessScorer;
pub use coverage::CoverageScorer;
pub use format_compliance::FormatComplianceScorer;
pub use format_detector::detect;
pub use validity::ValidityScorer;

/// 维度评分器
///
/// 实现者不持有可变状态，可以在多个线程间共享
pub trait DimensionScorer: Send + Sync {
    /// 负责的维度
    fn dimension(&self) -> Dimension;

    /// 按已检测出的格式评分
    fn evaluate(&self, content: &str, format: FormatCategory) -> DimensionScore;
}
