//! 批量评分 - 编排层
//!
//! 对一组提交逐条调用评分流程，结果顺序与输入一致，条目之间不共享状态

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::models::ScoringResult;
use crate::workflow::ScoringFlow;

/// 顺序批量评分
pub fn score_many<S: AsRef<str>>(contents: &[S], pass_threshold: f64) -> Vec<ScoringResult> {
    let flow = ScoringFlow::new();
    contents
        .iter()
        .map(|content| flow.run(content.as_ref(), pass_threshold))
        .collect()
}

/// 并发批量评分
///
/// 每条提交在阻塞线程池中评分，最多 `max_concurrent` 条同时进行；
/// 返回结果的顺序与输入一致，与 [`score_many`] 逐条相等
pub async fn score_many_concurrent(
    contents: Vec<String>,
    pass_threshold: f64,
    max_concurrent: usize,
) -> Result<Vec<ScoringResult>> {
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let flow = ScoringFlow::new();
    let mut handles = Vec::with_capacity(contents.len());

    for (idx, content) in contents.into_iter().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            debug!("评分第 {} 条提交", idx + 1);
            flow.run(&content, pass_threshold)
        }));
    }

    join_all(handles)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .context("评分任务执行失败")
}
