//! 文本统计辅助函数

use regex::Regex;

/// 按空白分词后的词数
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// 按 `\n` 切分的行（保留空行）
pub fn lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// 按空行切分的段落
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content.split("\n\n")
}

/// 按分隔模式切分后的片段数（包括首尾的空片段）
pub fn piece_count(content: &str, separator: &Regex) -> usize {
    separator.find_iter(content).count() + 1
}

/// 截取前 `max_chars` 个字符
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// 拼接问题列表；没有问题时返回 `clear`
pub fn join_feedback(issues: &[String], clear: &str) -> String {
    if issues.is_empty() {
        clear.to_string()
    } else {
        issues.join("; ")
    }
}
