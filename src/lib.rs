//! # Quality Scorer
//!
//! 对任意文本提交（结构化数据、Markdown、源代码、纯文本）给出可解释的质量评分
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能评什么"，只处理单条提交
//! - `format_detector` - 格式检测
//! - `CompletenessScorer` / `FormatComplianceScorer` / `CoverageScorer` /
//!   `ClarityScorer` / `ValidityScorer` - 五个互相独立的维度评分器
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一条提交"的完整评分流程
//! - `ScoringFlow` - 检测一次格式 → 五个维度评分 → 加权 → 等级 → 是否通过
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 批量评分，保持输入顺序
//! - `orchestrator/batch_processor` - 加载批次文件、输出报告
//!
//! 评分引擎是纯函数：不读写任何持久状态，不访问网络，任何输入都会得到完整结果。
//!
//! ```
//! use quality_scorer::{score_submission, FormatCategory};
//!
//! let result = score_submission("def calculate(x):\n    return x * 2", 0.6);
//! assert_eq!(result.format_detected, FormatCategory::Code);
//! assert!((0.0..=1.0).contains(&result.weighted_score));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    Dimension, DimensionScore, FormatCategory, QualityRating, ScoringResult,
    DEFAULT_PASS_THRESHOLD,
};
pub use orchestrator::{score_many, score_many_concurrent, App};
pub use services::detect;
pub use workflow::{score, score_submission, ScoringFlow};
