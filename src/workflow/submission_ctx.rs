//! 提交处理上下文
//!
//! 封装"我正在处理哪个批次的第几条提交"这一信息，仅用于日志

use std::fmt::Display;

/// 提交处理上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 批次名称
    pub batch_name: String,

    /// 提交在批次中的索引（从1开始）
    pub index: usize,

    /// 提交ID
    pub submission_id: String,
}

impl SubmissionCtx {
    /// 创建新的提交上下文
    pub fn new(batch_name: impl Into<String>, index: usize, submission_id: impl Into<String>) -> Self {
        Self {
            batch_name: batch_name.into(),
            index,
            submission_id: submission_id.into(),
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[批次 {} 提交#{} ID#{}]",
            self.batch_name, self.index, self.submission_id
        )
    }
}
