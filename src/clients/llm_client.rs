//! LLM 客户端 - 客户端层
//!
//! 对 `async-openai` 的薄封装，题目解析与作答两个服务共用同一个句柄。
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
        ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;

/// LLM 客户端
///
/// 职责：
/// - 持有整条链复用的 OpenAI 客户端句柄
/// - 提供"纯文本 + JSON 模式"与"多部分内容"两种调用
/// - 统一去除返回内容的首尾空白
/// - 不关心提示词内容，也不关心调用方是谁
#[derive(Clone)]
pub struct LlmClient {
    client: Client<OpenAIConfig>,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
        }
    }

    /// 纯文本调用，要求模型以 JSON 对象响应
    ///
    /// # 参数
    /// - `model`: 模型名称
    /// - `system_message`: 系统消息
    /// - `user_message`: 用户消息内容
    ///
    /// # 返回
    /// 返回 LLM 的响应内容（已去除首尾空白）
    pub async fn chat_json(
        &self,
        model: &str,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, LlmError> {
        debug!("调用 LLM API（JSON 模式），模型: {}", model);
        debug!("用户消息长度: {} 字符", user_message.len());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| api_call_failed(model, e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(vec![
                build_system_message(model, system_message)?,
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|e| api_call_failed(model, e))?;

        self.execute(model, request).await
    }

    /// 多部分内容调用（文本 + 图片），用于带附件的作答
    ///
    /// # 参数
    /// - `model`: 模型名称
    /// - `system_message`: 系统消息
    /// - `parts`: 用户消息的内容部分列表
    /// - `max_tokens`: 输出 token 上限
    pub async fn chat_parts(
        &self,
        model: &str,
        system_message: &str,
        parts: Vec<ChatCompletionRequestUserMessageContentPart>,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        debug!(
            "调用 LLM API（多部分内容），模型: {}, 内容部分: {}",
            model,
            parts.len()
        );

        // 构建包含多部分内容的用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(parts))
            .build()
            .map_err(|e| api_call_failed(model, e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(vec![
                build_system_message(model, system_message)?,
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .max_tokens(max_tokens)
            .build()
            .map_err(|e| api_call_failed(model, e))?;

        self.execute(model, request).await
    }

    /// 发送请求并提取响应文本
    async fn execute(
        &self,
        model: &str,
        request: CreateChatCompletionRequest,
    ) -> Result<String, LlmError> {
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            api_call_failed(model, e)
        })?;

        debug!("LLM API 调用成功");

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::EmptyResponse {
                model: model.to_string(),
            })?;

        let content = choice
            .message
            .content
            .clone()
            .ok_or_else(|| LlmError::EmptyContent {
                model: model.to_string(),
            })?;

        // 去除首尾空白后为空同样按空内容处理
        let content = content.trim();
        if content.is_empty() {
            return Err(LlmError::EmptyContent {
                model: model.to_string(),
            });
        }

        Ok(content.to_string())
    }
}

fn build_system_message(
    model: &str,
    system_message: &str,
) -> Result<ChatCompletionRequestMessage, LlmError> {
    let system_msg = ChatCompletionRequestSystemMessageArgs::default()
        .content(system_message)
        .build()
        .map_err(|e| api_call_failed(model, e))?;
    Ok(ChatCompletionRequestMessage::System(system_msg))
}

fn api_call_failed(model: &str, source: async_openai::error::OpenAIError) -> LlmError {
    LlmError::ApiCallFailed {
        model: model.to_string(),
        source,
    }
}
