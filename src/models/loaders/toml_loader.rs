use crate::error::{AppError, FileError};
use crate::models::submission::SubmissionBatch;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文本解析提交批次
pub fn parse_batch(content: &str) -> Result<SubmissionBatch, toml::de::Error> {
    toml::from_str(content)
}

/// 从 TOML 文件加载提交批次
pub async fn load_batch_file(toml_file_path: &Path) -> Result<SubmissionBatch> {
    if !toml_file_path.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: toml_file_path.display().to_string(),
        })
        .into());
    }

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(toml_file_path.display().to_string(), e))?;

    let mut batch = parse_batch(&content)
        .map_err(|e| AppError::toml_parse_failed(toml_file_path.display().to_string(), e))?;

    batch.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(batch)
}

/// 从文件夹中加载所有 TOML 批次（按文件名排序）
///
/// 无法读取或解析的文件会被跳过并记录警告
pub async fn load_all_batches(folder_path: &str) -> Result<Vec<SubmissionBatch>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::directory_not_found(folder_path).into());
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut batches = Vec::new();
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_batch_file(&path).await {
            Ok(batch) => {
                tracing::info!("成功加载 {} 条提交", batch.submissions.len());
                batches.push(batch);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(batches)
}
