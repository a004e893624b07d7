//! 结构化数据（JSON）辅助函数
//!
//! 解析结果使用 `serde_json::Value`，递归深度上限为 [`MAX_DEPTH`]

use serde_json::Value;

use crate::services::text_metrics::truncate_chars;

/// 递归遍历的最大深度
pub const MAX_DEPTH: usize = 64;

/// 错误信息截断长度
const ERROR_PREVIEW_CHARS: usize = 50;

/// 严格解析 JSON
///
/// 解析器自身限制嵌套不超过 128 层，更深的载荷解析失败，
/// 格式检测随之把它当作非结构化内容
pub fn parse(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(content)
}

/// 截断后的解析错误信息
pub fn error_preview(err: &serde_json::Error) -> String {
    truncate_chars(&err.to_string(), ERROR_PREVIEW_CHARS)
}

/// 映射的最大嵌套层数
///
/// 非映射或空映射的深度就是当前深度
pub fn nesting_depth(value: &Value) -> usize {
    depth_from(value, 0)
}

fn depth_from(value: &Value, depth: usize) -> usize {
    match value {
        Value::Object(map) if !map.is_empty() && depth < MAX_DEPTH => map
            .values()
            .map(|child| depth_from(child, depth + 1))
            .max()
            .unwrap_or(depth),
        _ => depth,
    }
}

/// 是否为空值：null、空字符串、空数组或空对象
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// 递归统计空值字段数量
pub fn count_empty_values(value: &Value) -> usize {
    match value {
        Value::Null => 1,
        _ => count_children(value, 0),
    }
}

fn count_children(value: &Value, depth: usize) -> usize {
    if depth >= MAX_DEPTH {
        return 0;
    }

    let children: Box<dyn Iterator<Item = &Value>> = match value {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(items) => Box::new(items.iter()),
        _ => return 0,
    };

    children
        .map(|child| {
            if is_empty_value(child) {
                1
            } else {
                count_children(child, depth + 1)
            }
        })
        .sum()
}
