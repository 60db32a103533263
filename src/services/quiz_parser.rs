//! 题目解析服务 - 业务能力层
//!
//! 只负责"从渲染后的页面文本提取结构化题目描述"，不关心流程。

use async_trait::async_trait;
use tracing::{debug, info};

use crate::clients::LlmClient;
use crate::config::Config;
use crate::error::ParseError;
use crate::models::{QuizDescription, RawQuizDescription};
use crate::utils::logging::truncate_text;

/// 解析用的系统消息
const PARSE_SYSTEM_MESSAGE: &str =
    "You are a helpful assistant that parses quiz questions and extracts structured information.";

/// 题目解析能力
#[async_trait]
pub trait QuizParser: Send + Sync {
    /// 从页面文本中提取题目描述
    async fn parse(&self, page_text: &str) -> Result<QuizDescription, ParseError>;
}

/// 基于 LLM 的题目解析服务
///
/// 职责：
/// - 单次 JSON 模式调用提取题目结构
/// - 严格解码并校验必填字段
/// - 不重试，不修补模型输出
pub struct LlmQuizParser {
    llm: LlmClient,
    model_name: String,
}

impl LlmQuizParser {
    pub fn new(llm: LlmClient, config: &Config) -> Self {
        Self {
            llm,
            model_name: config.parse_model_name.clone(),
        }
    }
}

#[async_trait]
impl QuizParser for LlmQuizParser {
    async fn parse(&self, page_text: &str) -> Result<QuizDescription, ParseError> {
        debug!("解析题目页面，文本长度: {} 字符", page_text.len());

        let user_message = build_parse_prompt(page_text);
        let response = self
            .llm
            .chat_json(&self.model_name, PARSE_SYSTEM_MESSAGE, &user_message)
            .await?;

        let quiz = decode_quiz_description(&response)?;
        info!("✓ 题目解析成功: {}", truncate_text(&quiz.question, 80));
        debug!(
            "提交地址: {}, 附件数量: {}",
            quiz.submit_url,
            quiz.file_urls.len()
        );

        Ok(quiz)
    }
}

/// 构建题目提取的提示词
fn build_parse_prompt(page_text: &str) -> String {
    format!(
        r#"You are a quiz parser. Extract the following information from this quiz page:

1. The question being asked
2. Any URLs to download files (PDFs, CSVs, etc.)
3. The submit endpoint URL where answers should be posted
4. The expected format of the answer (boolean, number, string, object, base64, etc.)

Quiz page content:
{}

Return your response as a JSON object with keys: question, file_urls, submit_url, answer_format"#,
        page_text
    )
}

/// 解码并校验 LLM 返回的题目描述
///
/// 严格解析：JSON 残缺、字段类型不对、缺必填字段都直接报错，不做修补。
fn decode_quiz_description(response: &str) -> Result<QuizDescription, ParseError> {
    let raw: RawQuizDescription =
        serde_json::from_str(response).map_err(|source| ParseError::InvalidJson { source })?;
    QuizDescription::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_complete_description() {
        let quiz = decode_quiz_description(
            r#"{
                "question": "How many rows are in the CSV?",
                "file_urls": ["https://example.com/data.csv"],
                "submit_url": "https://example.com/submit",
                "answer_format": "number"
            }"#,
        )
        .unwrap();
        assert_eq!(quiz.question, "How many rows are in the CSV?");
        assert_eq!(quiz.file_urls.len(), 1);
    }

    #[test]
    fn test_decode_malformed_json() {
        let result = decode_quiz_description("not json at all");
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn test_decode_markdown_fenced_json_is_rejected() {
        // JSON 模式下模型不应输出围栏，一旦输出就按解析失败处理
        let result = decode_quiz_description("```json\n{\"question\": \"q\"}\n```");
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn test_decode_wrong_field_type() {
        let result = decode_quiz_description(
            r#"{"question": "q", "file_urls": "https://example.com/a.csv", "submit_url": "https://example.com/submit"}"#,
        );
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn test_decode_missing_submit_url() {
        let result = decode_quiz_description(r#"{"question": "q"}"#);
        assert!(matches!(result, Err(ParseError::MissingSubmitUrl)));
    }

    #[test]
    fn test_parse_prompt_names_required_keys() {
        let prompt = build_parse_prompt("page text here");
        assert!(prompt.contains("page text here"));
        assert!(prompt.contains("question, file_urls, submit_url, answer_format"));
    }
}
