//! 错误类型定义
//!
//! 答题流程的每个环节（渲染、解析、下载、作答、提交）都有独立的错误类型，
//! 统一汇聚为 [`StepError`]。任何一步失败对当前题目链都是致命的，
//! 但编排层只记录日志，不会向调用方抛出。

use thiserror::Error;

/// 单步处理错误
#[derive(Debug, Error)]
pub enum StepError {
    /// 页面渲染错误
    #[error("渲染错误: {0}")]
    Render(#[from] RenderError),
    /// 题目解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 附件下载错误
    #[error("下载错误: {0}")]
    Fetch(#[from] FetchError),
    /// LLM 作答错误
    #[error("作答错误: {0}")]
    Answer(#[from] AnswerError),
    /// 答案提交错误
    #[error("提交错误: {0}")]
    Submit(#[from] SubmitError),
}

/// 浏览器渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 浏览器配置失败
    #[error("浏览器配置失败: {message}")]
    ConfigurationFailed { message: String },
    /// 启动无头浏览器失败
    #[error("启动无头浏览器失败: {source}")]
    LaunchFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreationFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 页面加载超时
    #[error("页面加载超时 ({url}): 超过 {limit_secs} 秒")]
    Timeout { url: String, limit_secs: u64 },
    /// 读取页面内容失败
    #[error("读取页面内容失败: {source}")]
    ContentReadFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 页面文本提取失败
    #[error("页面文本提取失败: {source}")]
    TextExtractionFailed {
        #[source]
        source: serde_json::Error,
    },
}

/// 题目解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// LLM 调用失败
    #[error("LLM调用失败: {0}")]
    Llm(#[from] LlmError),
    /// 题目描述 JSON 解析失败
    #[error("题目描述JSON解析失败: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    /// 缺少题干
    #[error("题目描述缺少 question 字段")]
    MissingQuestion,
    /// 缺少提交地址（不允许猜测或默认）
    #[error("题目描述缺少 submit_url，无法提交答案")]
    MissingSubmitUrl,
}

/// 附件下载错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("下载请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非 2xx 状态码
    #[error("下载失败 ({url}): 状态码 {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// 读取响应体失败
    #[error("读取下载内容失败 ({url}): {source}")]
    BodyReadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// LLM 作答错误
#[derive(Debug, Error)]
pub enum AnswerError {
    /// LLM 调用失败
    #[error("LLM调用失败: {0}")]
    Llm(#[from] LlmError),
    /// 文本附件解码失败
    #[error("文本附件不是有效的 UTF-8 ({content_type}): {source}")]
    TextDecodeFailed {
        content_type: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// 答案提交错误
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 提交请求失败
    #[error("提交请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 评分响应解析失败
    #[error("评分响应解析失败 ({url}): {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: async_openai::error::OpenAIError,
    },
    /// 返回结果为空
    #[error("LLM返回结果为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

// ========== Result 类型别名 ==========

/// 单步处理结果类型
pub type StepResult<T> = Result<T, StepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_wraps_stage_errors() {
        let err: StepError = ParseError::MissingSubmitUrl.into();
        assert!(matches!(err, StepError::Parse(_)));
        assert!(err.to_string().contains("submit_url"));
    }

    #[test]
    fn test_timeout_error_carries_url_and_limit() {
        let err = RenderError::Timeout {
            url: "https://example.com/q1".to_string(),
            limit_secs: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/q1"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_llm_error_converts_into_parse_and_answer() {
        let parse: ParseError = LlmError::EmptyContent {
            model: "gpt-4o-mini".to_string(),
        }
        .into();
        assert!(matches!(parse, ParseError::Llm(_)));

        let answer: AnswerError = LlmError::EmptyResponse {
            model: "gpt-4o".to_string(),
        }
        .into();
        assert!(matches!(answer, AnswerError::Llm(_)));
    }
}
