//! 作答服务 - 业务能力层
//!
//! 把题目与附件组装成一次 LLM 调用，返回原始回答文本。
//! 附件按 Content-Type 分流：图片走 Vision API，文本内联，PDF 只附占位说明。

use async_openai::types::chat::{
    ChatCompletionRequestMessageContentPartImage, ChatCompletionRequestMessageContentPartText,
    ChatCompletionRequestUserMessageContentPart, ImageDetail, ImageUrl,
};
use async_trait::async_trait;
use base64::prelude::*;
use tracing::{debug, warn};

use crate::clients::LlmClient;
use crate::config::Config;
use crate::error::AnswerError;
use crate::models::{QuizDescription, ResourceKind, ResourcePayload};
use crate::utils::logging::truncate_text;

/// 作答用的系统消息
const ANSWER_SYSTEM_MESSAGE: &str =
    "You are a data analysis expert. Answer questions about data accurately and concisely.";

/// PDF 附件的占位说明（不解析 PDF 内容，已知限制）
const PDF_PLACEHOLDER: &str = "[PDF file content - analyze the data within]";

/// 作答能力
#[async_trait]
pub trait Answerer: Send + Sync {
    /// 根据题目与附件生成原始回答文本
    async fn answer(
        &self,
        quiz: &QuizDescription,
        resources: &[ResourcePayload],
    ) -> Result<String, AnswerError>;
}

/// 基于 LLM 的作答服务
///
/// 职责：
/// - 一道题只发一次 LLM 请求
/// - 输出受 max_tokens 上限约束
/// - 不做重试，也不修正模型的回答
pub struct LlmAnswerer {
    llm: LlmClient,
    model_name: String,
    max_tokens: u32,
}

impl LlmAnswerer {
    pub fn new(llm: LlmClient, config: &Config) -> Self {
        Self {
            llm,
            model_name: config.answer_model_name.clone(),
            max_tokens: config.answer_max_tokens,
        }
    }
}

#[async_trait]
impl Answerer for LlmAnswerer {
    async fn answer(
        &self,
        quiz: &QuizDescription,
        resources: &[ResourcePayload],
    ) -> Result<String, AnswerError> {
        let parts = build_answer_parts(quiz, resources)?;
        debug!("作答请求组装完成，内容部分: {}", parts.len());

        let raw = self
            .llm
            .chat_parts(
                &self.model_name,
                ANSWER_SYSTEM_MESSAGE,
                parts,
                self.max_tokens,
            )
            .await?;

        debug!("LLM 原始回答: {}", truncate_text(&raw, 200));
        Ok(raw)
    }
}

/// 组装作答消息的内容部分
///
/// 第一部分是题干与格式要求，其后按附件类型逐个追加：
/// 图片转成 base64 data URI，文本 / CSV 原文内联，PDF 附占位说明，
/// 其他类型跳过。
fn build_answer_parts(
    quiz: &QuizDescription,
    resources: &[ResourcePayload],
) -> Result<Vec<ChatCompletionRequestUserMessageContentPart>, AnswerError> {
    let format_hint = quiz
        .answer_format
        .as_deref()
        .unwrap_or("appropriate format");
    let mut parts = vec![text_part(format!(
        "Question: {}\n\nProvide only the answer in the format: {}",
        quiz.question, format_hint
    ))];

    for resource in resources {
        match resource.kind() {
            ResourceKind::Image => {
                let data_uri = format!(
                    "data:{};base64,{}",
                    resource.content_type,
                    BASE64_STANDARD.encode(&resource.bytes)
                );
                parts.push(image_part(data_uri));
            }
            ResourceKind::Pdf => {
                parts.push(text_part(PDF_PLACEHOLDER.to_string()));
            }
            ResourceKind::Text => {
                let text = String::from_utf8(resource.bytes.clone()).map_err(|source| {
                    AnswerError::TextDecodeFailed {
                        content_type: resource.content_type.clone(),
                        source,
                    }
                })?;
                parts.push(text_part(format!("File content:\n{}", text)));
            }
            ResourceKind::Other => {
                warn!("⚠️ 不支持的附件类型，已跳过: {}", resource.content_type);
            }
        }
    }

    Ok(parts)
}

fn text_part(text: String) -> ChatCompletionRequestUserMessageContentPart {
    ChatCompletionRequestUserMessageContentPart::Text(
        ChatCompletionRequestMessageContentPartText { text },
    )
}

fn image_part(url: String) -> ChatCompletionRequestUserMessageContentPart {
    ChatCompletionRequestUserMessageContentPart::ImageUrl(
        ChatCompletionRequestMessageContentPartImage {
            image_url: ImageUrl {
                url,
                detail: Some(ImageDetail::Auto),
            },
        },
    )
}
