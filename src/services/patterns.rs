//! 预编译的正则表达式
//!
//! 所有模式只编译一次，由各评分器共享

use regex::Regex;
use std::sync::OnceLock;

macro_rules! pattern {
    ($(#[$meta:meta])* $name:ident, $re:expr) => {
        $(#[$meta])*
        pub fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| Regex::new($re).expect("内置正则表达式无效"))
        }
    };
}

// ========== Markdown ==========

pattern!(
    /// 行首标题标记
    heading, r"(?m)^#{1,6}\s+");
pattern!(
    /// 标题标记后紧跟非空白、非 # 字符
    heading_without_space, r"(?m)^#{1,6}[^\s#]");
pattern!(bold_line, r"(?m)^\*\*.*\*\*");
pattern!(link_line, r"(?m)^\[.*\]\(.*\)");
pattern!(fence_line, r"(?m)^```");
pattern!(bullet_item, r"(?m)^[-*+]\s+");
pattern!(numbered_item, r"(?m)^\d+\.\s+");
pattern!(inline_link, r"\[.*\]\(.*\)");
pattern!(image, r"!\[.*\]\(.*\)");
pattern!(empty_link, r"\[([^\]]*)\]\(\s*\)");
pattern!(
    /// 链接的 `](` 之后到行尾都没有 `)`
    unterminated_link, r"(?m)\]\([^)]*$");

// ========== 代码 ==========

pattern!(definition_signal, r"(?mi)^\s*(def |class |function |import |from |#include |package |func )");
pattern!(declaration_signal, r"(?mi)^\s*(public |private |protected |void |int |string |var |let |const )");
pattern!(php_signal, r"(?mi)^\s*<\?php");
pattern!(document_signal, r"(?mi)^\s*<(!DOCTYPE |html|head|body)");
pattern!(module_signal, r"(?mi)^\s*(import|export)\s+");

pattern!(function_keyword, r"def |function |func ");
pattern!(class_keyword, r"class ");
pattern!(variable_declaration, r"\b(var|let|const|int|string|float)\s+\w+");
pattern!(comment_marker, r"#|//|/\*|\*/");
pattern!(comment_line, r"(?m)^\s*(#|//|/\*|\*/)");
pattern!(return_keyword, r"return|yield");
pattern!(empty_block, r"\{\s*\}");
pattern!(imported_name, r"import\s+(\w+)");

// ========== 纯文本 ==========

pattern!(sentence_run, r"[.!?]+");
pattern!(sentence_mark, r"[.!?]");
pattern!(capitalized_sentence_start, r"[.!?]\s+[A-Z]");
pattern!(abbreviation, r"\b[A-Z]{2,}\b");
pattern!(word, r"\w+");

/// 代码特征模式，按优先级排列
pub fn code_signals() -> [&'static Regex; 5] {
    [
        definition_signal(),
        declaration_signal(),
        php_signal(),
        document_signal(),
        module_signal(),
    ]
}

/// 六种 Markdown 特征模式
pub fn markup_signals() -> [&'static Regex; 6] {
    [
        heading(),
        bold_line(),
        link_line(),
        fence_line(),
        bullet_item(),
        numbered_item(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for re in code_signals().iter().chain(markup_signals().iter()) {
            assert!(!re.as_str().is_empty());
        }
        let _ = (
            heading_without_space(),
            inline_link(),
            image(),
            empty_link(),
            unterminated_link(),
            function_keyword(),
            class_keyword(),
            variable_declaration(),
            comment_marker(),
            comment_line(),
            return_keyword(),
            empty_block(),
            imported_name(),
            sentence_run(),
            sentence_mark(),
            capitalized_sentence_start(),
            abbreviation(),
            word(),
        );
    }

    #[test]
    fn test_code_signals_are_case_insensitive() {
        assert!(definition_signal().is_match("text\nDEF foo"));
        assert!(document_signal().is_match("<!doctype html>"));
    }

    #[test]
    fn test_heading_without_space() {
        assert!(heading_without_space().is_match("#Title"));
        assert!(!heading_without_space().is_match("# Title"));
        assert!(!heading_without_space().is_match("## Title"));
    }

    #[test]
    fn test_unterminated_link() {
        assert!(unterminated_link().is_match("see [docs](http://x"));
        assert!(!unterminated_link().is_match("see [docs](http://x)"));
    }
}
