//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 渲染页面 → 2. 解析题目 → 3. 下载附件
//! 4. LLM 作答 → 5. 格式化答案 → 6. 提交评分

use std::sync::Arc;

use tracing::{debug, info};

use crate::browser::{ChromeRenderer, PageRenderer};
use crate::clients::{
    HttpResourceFetcher, HttpSubmissionClient, LlmClient, ResourceFetcher, SubmissionClient,
};
use crate::config::Config;
use crate::error::StepResult;
use crate::models::{ResourcePayload, SubmissionResult};
use crate::services::{format_answer, Answerer, LlmAnswerer, LlmQuizParser, QuizParser};
use crate::utils::logging::truncate_text;
use crate::workflow::quiz_ctx::QuizCtx;

/// 题目处理流程
///
/// - 编排单道题的完整处理流程
/// - 决定何时渲染、何时作答、何时提交
/// - 不持有浏览器等资源，资源由各能力内部管理
/// - 只依赖业务能力的抽象接口
pub struct QuizFlow {
    renderer: Arc<dyn PageRenderer>,
    parser: Arc<dyn QuizParser>,
    fetcher: Arc<dyn ResourceFetcher>,
    answerer: Arc<dyn Answerer>,
    submitter: Arc<dyn SubmissionClient>,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 创建新的题目处理流程，按配置装配生产实现
    pub fn new(config: &Config) -> Self {
        let llm = LlmClient::new(config);
        let http = reqwest::Client::new();

        Self {
            renderer: Arc::new(ChromeRenderer::new(config)),
            parser: Arc::new(LlmQuizParser::new(llm.clone(), config)),
            fetcher: Arc::new(HttpResourceFetcher::new(http.clone(), config)),
            answerer: Arc::new(LlmAnswerer::new(llm, config)),
            submitter: Arc::new(HttpSubmissionClient::new(http, config)),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 用给定的能力实现装配流程
    pub fn with_services(
        renderer: Arc<dyn PageRenderer>,
        parser: Arc<dyn QuizParser>,
        fetcher: Arc<dyn ResourceFetcher>,
        answerer: Arc<dyn Answerer>,
        submitter: Arc<dyn SubmissionClient>,
    ) -> Self {
        Self {
            renderer,
            parser,
            fetcher,
            answerer,
            submitter,
            verbose_logging: false,
        }
    }

    /// 处理一道题，返回评分结果
    ///
    /// 任何阶段失败都立即返回错误，由上层编排决定链条去留。
    pub async fn run(&self, ctx: &QuizCtx) -> StepResult<SubmissionResult> {
        // ========== 步骤 1: 渲染页面 ==========
        info!(
            "[第 {} 题] 🔍 正在渲染页面: {}",
            ctx.step_index, ctx.quiz_url
        );

        let page = self.renderer.render(&ctx.quiz_url).await?;

        if self.verbose_logging {
            self.log_page_preview(ctx.step_index, &page.text);
        }

        // ========== 步骤 2: 解析题目 ==========
        info!("[第 {} 题] 📖 正在解析题目...", ctx.step_index);

        let quiz = self.parser.parse(&page.text).await?;

        // ========== 步骤 3: 下载附件 ==========
        let resources = self.fetch_resources(ctx, &quiz.file_urls).await?;

        // ========== 步骤 4: LLM 作答 ==========
        info!("[第 {} 题] 🧠 正在作答...", ctx.step_index);

        let raw_answer = self.answerer.answer(&quiz, &resources).await?;

        // ========== 步骤 5: 格式化答案 ==========
        let answer = format_answer(&raw_answer, quiz.answer_format.as_deref());
        info!("[第 {} 题] 答案: {}", ctx.step_index, answer);

        // ========== 步骤 6: 提交评分 ==========
        info!("[第 {} 题] 📤 正在提交答案...", ctx.step_index);

        let result = self
            .submitter
            .submit(
                &quiz.submit_url,
                &ctx.email,
                &ctx.secret,
                &ctx.quiz_url,
                &answer,
            )
            .await?;

        Ok(result)
    }

    /// 逐个下载附件，任一失败立即终止本题
    async fn fetch_resources(
        &self,
        ctx: &QuizCtx,
        file_urls: &[String],
    ) -> StepResult<Vec<ResourcePayload>> {
        if file_urls.is_empty() {
            return Ok(Vec::new());
        }

        info!(
            "[第 {} 题] 📥 正在下载 {} 个附件...",
            ctx.step_index,
            file_urls.len()
        );

        let mut resources = Vec::with_capacity(file_urls.len());
        for url in file_urls {
            let payload = self.fetcher.fetch(url).await?;
            resources.push(payload);
        }

        info!("[第 {} 题] ✓ 附件下载完成", ctx.step_index);
        Ok(resources)
    }

    // ========== 日志辅助方法 ==========

    /// 显示页面正文预览
    fn log_page_preview(&self, step_index: usize, text: &str) {
        debug!(
            "[第 {} 题] 页面正文: {}",
            step_index,
            truncate_text(text, 200)
        );
    }
}
