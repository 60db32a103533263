//! 页面渲染器
//!
//! 每次渲染都启动一个全新的无头浏览器实例，内容读取完毕立即销毁，
//! 调用之间不复用任何浏览器资源。

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::RenderError;
use crate::models::RenderedPage;

/// 页面渲染能力
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// 渲染指定 URL，执行页面脚本后返回 HTML 与正文文本
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError>;
}

/// 基于无头 Chromium 的页面渲染器
///
/// 职责：
/// - 每次调用启动独立的浏览器实例
/// - 导航阶段整体限时，超时即失败而不是挂起
/// - 成功或失败都在返回前回收浏览器资源
pub struct ChromeRenderer {
    chrome_executable: Option<String>,
    page_load_timeout: Duration,
    settle_delay: Duration,
}

impl ChromeRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            chrome_executable: config.chrome_executable.clone(),
            page_load_timeout: config.page_load_timeout(),
            settle_delay: config.settle_delay(),
        }
    }

    /// 启动一个全新的无头浏览器
    async fn launch(&self) -> Result<(Browser, JoinHandle<()>), RenderError> {
        info!("🚀 启动无头浏览器...");

        let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
            "--disable-gpu",           // 无头模式禁用 GPU
            "--no-sandbox",            // 禁用沙盒，防止权限问题导致的崩溃
            "--disable-dev-shm-usage", // 防止共享内存不足
        ]);
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(Path::new(path));
        }
        let config = builder
            .build()
            .map_err(|message| RenderError::ConfigurationFailed { message })?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|source| RenderError::LaunchFailed { source })?;
        debug!("无头浏览器启动成功");

        // 在后台处理浏览器事件
        let event_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        Ok((browser, event_task))
    }

    /// 导航到目标页面并读取内容
    async fn render_page(
        &self,
        browser: &Browser,
        url: &str,
    ) -> Result<RenderedPage, RenderError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|source| RenderError::PageCreationFailed { source })?;

        // 导航整体限时，防止页面挂死
        let navigation = async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<(), chromiumoxide::error::CdpError>(())
        };
        match timeout(self.page_load_timeout, navigation).await {
            Ok(Ok(())) => {}
            Ok(Err(source)) => {
                return Err(RenderError::NavigationFailed {
                    url: url.to_string(),
                    source,
                });
            }
            Err(_) => {
                return Err(RenderError::Timeout {
                    url: url.to_string(),
                    limit_secs: self.page_load_timeout.as_secs(),
                });
            }
        }

        // 静置等待，让异步加载的内容渲染完成
        sleep(self.settle_delay).await;

        let html = page
            .content()
            .await
            .map_err(|source| RenderError::ContentReadFailed { source })?;
        let text: String = page
            .evaluate("document.body.innerText")
            .await
            .map_err(|source| RenderError::ContentReadFailed { source })?
            .into_value()
            .map_err(|source| RenderError::TextExtractionFailed { source })?;

        debug!(
            "页面渲染完成: HTML {} 字符, 正文 {} 字符",
            html.len(),
            text.len()
        );

        Ok(RenderedPage { html, text })
    }

    /// 关闭浏览器并回收进程，避免残留僵尸进程
    async fn teardown(mut browser: Browser, event_task: JoinHandle<()>) {
        if let Err(e) = browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        if let Err(e) = browser.wait().await {
            warn!("等待浏览器退出失败: {}", e);
        }
        event_task.abort();
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        let (browser, event_task) = self.launch().await?;

        // 无论成败都要销毁浏览器
        let outcome = self.render_page(&browser, url).await;
        Self::teardown(browser, event_task).await;

        outcome
    }
}
