//! 附件下载客户端
//!
//! 负责把题目引用的文件（CSV、图片、PDF 等）拉取到内存。

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::ResourcePayload;

/// 附件下载能力
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// 下载单个附件
    async fn fetch(&self, url: &str) -> Result<ResourcePayload, FetchError>;
}

/// 基于 reqwest 的附件下载客户端
pub struct HttpResourceFetcher {
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpResourceFetcher {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            timeout: config.download_timeout(),
        }
    }
}

#[async_trait]
impl ResourceFetcher for HttpResourceFetcher {
    async fn fetch(&self, url: &str) -> Result<ResourcePayload, FetchError> {
        debug!("下载附件: {}", url);

        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed {
                url: url.to_string(),
                source: e,
            })?;

        // 非 2xx 一律视为下载失败
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyReadFailed {
                url: url.to_string(),
                source: e,
            })?;

        debug!("✓ 下载完成: {} ({} 字节, {})", url, bytes.len(), content_type);

        Ok(ResourcePayload::new(bytes.to_vec(), content_type))
    }
}
