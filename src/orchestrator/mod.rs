//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量评分
//! - 对 `Vec<String>` 逐条调用评分流程
//! - 顺序版本和有限并发版本，结果顺序都与输入一致
//!
//! ### `batch_processor` - 批次处理器
//! - 管理应用生命周期（初始化、运行）
//! - 加载批次文件、输出报告和全局统计
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SubmissionBatch>)
//!     ↓
//! batch_runner (处理 Vec<String>)
//!     ↓
//! workflow::ScoringFlow (处理单条提交)
//!     ↓
//! services (能力层：格式检测 / 五个维度评分器)
//! ```

pub mod batch_processor;
pub mod batch_runner;

pub use batch_processor::{write_report, App};
pub use batch_runner::{score_many, score_many_concurrent};
