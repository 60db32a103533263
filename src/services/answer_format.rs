//! 答案格式化 - 业务能力层
//!
//! 把 LLM 的自由文本回答按格式提示收敛成结构化答案。
//! 格式化永不失败，任何分支解析不出来都回退到原文。

use tracing::debug;

use crate::models::Answer;

/// 按格式提示把原始回答转成结构化答案
///
/// 匹配顺序：number / int 优先，其次 boolean / bool，再次 json / object，
/// 命中一个分支后不再尝试其他分支。提示为空或无法识别时原样返回文本。
///
/// # 参数
/// * `raw_text` - LLM 的原始回答文本
/// * `answer_format` - 解析出的格式提示，可能缺失
pub fn format_answer(raw_text: &str, answer_format: Option<&str>) -> Answer {
    let hint = match answer_format {
        Some(h) if !h.trim().is_empty() => h.to_lowercase(),
        _ => return Answer::Text(raw_text.to_string()),
    };

    if hint.contains("number") || hint.contains("int") {
        if let Some(value) = extract_first_number(raw_text) {
            return Answer::Number(value);
        }
        debug!("格式提示要求数字但未提取到，回退为文本: {}", hint);
    } else if hint.contains("boolean") || hint.contains("bool") {
        if let Some(value) = extract_boolean(raw_text) {
            return Answer::Boolean(value);
        }
        debug!("格式提示要求布尔但未提取到，回退为文本: {}", hint);
    } else if hint.contains("json") || hint.contains("object") {
        if let Ok(value) = serde_json::from_str(raw_text.trim()) {
            return Answer::Structured(value);
        }
        debug!("格式提示要求 JSON 但解析失败，回退为文本: {}", hint);
    }

    Answer::Text(raw_text.to_string())
}

/// 提取文本中出现的第一个数字，小数截断取整
fn extract_first_number(text: &str) -> Option<i64> {
    let re = regex::Regex::new(r"-?\d+\.?\d*").ok()?;
    let matched = re.find(text)?;
    let value: f64 = matched.as_str().parse().ok()?;
    Some(value.trunc() as i64)
}

/// 从文本中识别布尔答案，肯定词优先
fn extract_boolean(text: &str) -> Option<bool> {
    let lowered = text.to_lowercase();
    if lowered.contains("true") || lowered.contains("yes") {
        Some(true)
    } else if lowered.contains("false") || lowered.contains("no") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_extracted_from_sentence() {
        let answer = format_answer("The answer is 42.", Some("number"));
        assert_eq!(answer, Answer::Number(42));
    }

    #[test]
    fn test_number_decimal_truncated_toward_zero() {
        assert_eq!(format_answer("-3.7", Some("number")), Answer::Number(-3));
        assert_eq!(format_answer("3.9", Some("integer")), Answer::Number(3));
    }

    #[test]
    fn test_number_not_found_falls_back_to_text() {
        let answer = format_answer("no digits here", Some("number"));
        assert_eq!(answer, Answer::Text("no digits here".to_string()));
    }

    #[test]
    fn test_boolean_affirmative() {
        let answer = format_answer("Yes, that is true.", Some("boolean"));
        assert_eq!(answer, Answer::Boolean(true));
    }

    #[test]
    fn test_boolean_negative() {
        let answer = format_answer("No.", Some("bool"));
        assert_eq!(answer, Answer::Boolean(false));
    }

    #[test]
    fn test_boolean_affirmative_wins_over_negative() {
        // 同时出现肯定词和否定词时取肯定
        let answer = format_answer("yes, not false at all", Some("boolean"));
        assert_eq!(answer, Answer::Boolean(true));
    }

    #[test]
    fn test_boolean_unrecognized_falls_back_to_text() {
        let answer = format_answer("maybe", Some("boolean"));
        assert_eq!(answer, Answer::Text("maybe".to_string()));
    }

    #[test]
    fn test_json_object_parsed() {
        let answer = format_answer(r#"{"count": 3}"#, Some("json object"));
        assert_eq!(answer, Answer::Structured(json!({"count": 3})));
    }

    #[test]
    fn test_json_invalid_falls_back_to_text() {
        let answer = format_answer("not valid json{{", Some("object"));
        assert_eq!(answer, Answer::Text("not valid json{{".to_string()));
    }

    #[test]
    fn test_branch_exclusive_no_cross_fallback() {
        // number 分支失败后不得再尝试 boolean 分支
        let answer = format_answer("yes", Some("number"));
        assert_eq!(answer, Answer::Text("yes".to_string()));
    }

    #[test]
    fn test_hint_case_insensitive() {
        let answer = format_answer("7", Some("NUMBER"));
        assert_eq!(answer, Answer::Number(7));
    }

    #[test]
    fn test_missing_hint_passes_text_through() {
        let answer = format_answer("  raw text  ", None);
        assert_eq!(answer, Answer::Text("  raw text  ".to_string()));
    }

    #[test]
    fn test_blank_hint_passes_text_through() {
        let answer = format_answer("42", Some("   "));
        assert_eq!(answer, Answer::Text("42".to_string()));
    }

    #[test]
    fn test_unrecognized_hint_passes_text_through() {
        let answer = format_answer("42", Some("base64"));
        assert_eq!(answer, Answer::Text("42".to_string()));
    }
}
