use serde::Serialize;

use crate::utils::logging::truncate_text;

/// 最终提交的答案值
///
/// 序列化时不带标签，以 JSON 原生类型直接出现在提交体的 `answer` 字段中
/// （`42`、`true`、`{...}`、`"text"`）。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// 整数答案
    Number(i64),
    /// 布尔答案
    Boolean(bool),
    /// 结构化 JSON 答案
    Structured(serde_json::Value),
    /// 纯文本答案
    Text(String),
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Boolean(b) => write!(f, "{}", b),
            Answer::Structured(v) => write!(f, "{}", truncate_text(&v.to_string(), 80)),
            Answer::Text(t) => write!(f, "{}", truncate_text(t, 80)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_serializes_untagged() {
        assert_eq!(serde_json::to_value(Answer::Number(42)).unwrap(), json!(42));
        assert_eq!(
            serde_json::to_value(Answer::Boolean(true)).unwrap(),
            json!(true)
        );
        assert_eq!(
            serde_json::to_value(Answer::Structured(json!({"count": 3}))).unwrap(),
            json!({"count": 3})
        );
        assert_eq!(
            serde_json::to_value(Answer::Text("hello".to_string())).unwrap(),
            json!("hello")
        );
    }

    #[test]
    fn test_answer_display_truncates_long_text() {
        let long = "x".repeat(200);
        let shown = format!("{}", Answer::Text(long));
        assert!(shown.ends_with("..."));
        assert!(shown.chars().count() <= 83);
    }
}
