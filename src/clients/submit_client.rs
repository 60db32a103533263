//! 答案提交客户端
//!
//! 把格式化后的答案 POST 到题目指定的评分地址，并解码评分结果。

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::SubmitError;
use crate::models::{Answer, SubmissionResult};

/// 答案提交能力
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// 提交答案并返回评分结果
    ///
    /// # 参数
    /// - `submit_url`: 题目描述中给出的提交地址
    /// - `email` / `secret`: 调用方凭据，原样转发
    /// - `quiz_url`: 当前题目页面地址
    /// - `answer`: 格式化后的答案
    async fn submit(
        &self,
        submit_url: &str,
        email: &str,
        secret: &str,
        quiz_url: &str,
        answer: &Answer,
    ) -> Result<SubmissionResult, SubmitError>;
}

/// 提交请求体
#[derive(Debug, Serialize)]
struct SubmissionRequest<'a> {
    email: &'a str,
    secret: &'a str,
    url: &'a str,
    answer: &'a Answer,
}

/// 基于 reqwest 的答案提交客户端
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpSubmissionClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            timeout: config.submit_timeout(),
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(
        &self,
        submit_url: &str,
        email: &str,
        secret: &str,
        quiz_url: &str,
        answer: &Answer,
    ) -> Result<SubmissionResult, SubmitError> {
        debug!("提交答案到: {}", submit_url);

        let payload = SubmissionRequest {
            email,
            secret,
            url: quiz_url,
            answer,
        };

        let response = self
            .http
            .post(submit_url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SubmitError::RequestFailed {
                url: submit_url.to_string(),
                source: e,
            })?;

        // 评分结果以响应体 JSON 为准，不检查 HTTP 状态码
        let result: SubmissionResult =
            response
                .json()
                .await
                .map_err(|e| SubmitError::InvalidResponse {
                    url: submit_url.to_string(),
                    source: e,
                })?;

        info!(
            "评分结果: correct={}, 下一题={}",
            result.correct,
            result.next_url.as_deref().unwrap_or("无")
        );

        Ok(result)
    }
}
