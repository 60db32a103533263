use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// LLM 返回的题目描述原始结构
///
/// 所有字段按可缺省处理（缺失与 `null` 等价），未知字段直接忽略，
/// 必填校验在 [`QuizDescription::from_raw`] 中完成。
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuizDescription {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub file_urls: Option<Vec<String>>,
    #[serde(default)]
    pub submit_url: Option<String>,
    #[serde(default)]
    pub answer_format: Option<String>,
}

/// 校验后的题目描述
#[derive(Debug, Clone)]
pub struct QuizDescription {
    /// 题干
    pub question: String,
    /// 附件下载地址列表
    pub file_urls: Vec<String>,
    /// 答案提交地址
    pub submit_url: String,
    /// 期望的答案格式提示（如 "number"、"boolean"、"json object"）
    pub answer_format: Option<String>,
}

impl QuizDescription {
    /// 校验原始结构并转换为可用的题目描述
    ///
    /// `question` 与 `submit_url` 为必填；submit_url 为空白串同样视为缺失，
    /// 绝不猜测或默认填充。
    pub fn from_raw(raw: RawQuizDescription) -> Result<Self, ParseError> {
        let question = raw.question.ok_or(ParseError::MissingQuestion)?;
        let submit_url = match raw.submit_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(ParseError::MissingSubmitUrl),
        };
        Ok(Self {
            question,
            file_urls: raw.file_urls.unwrap_or_default(),
            submit_url,
            answer_format: raw.answer_format.filter(|f| !f.trim().is_empty()),
        })
    }
}

/// 评分服务返回的提交结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// 答案是否正确
    pub correct: bool,
    /// 下一题地址，缺失表示链条到此为止
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// 答错时的原因说明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
