//! # Quiz Chain Solver
//!
//! 一个自动解答网页题目链的 Rust 应用程序：
//! 渲染题目页面，用 LLM 提取并解答题目，把答案提交评分，
//! 再沿着评分响应里的下一题地址继续，直到链条结束。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Clients / Browser）
//! - `clients/` - LLM、附件下载、答案提交三个外部通道
//! - `browser/` - 无头浏览器渲染，每次渲染独立实例
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题
//! - `LlmQuizParser` - 页面文本 → 结构化题目描述
//! - `LlmAnswerer` - 题目 + 附件 → 原始回答文本
//! - `format_answer` - 原始回答 → 结构化答案
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuizCtx` - 上下文封装（step_index + quiz_url + 凭据）
//! - `QuizFlow` - 流程编排（render → parse → fetch → answer → format → submit）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/chain_runner` - 题目链处理器，串行推进并控制时间预算

pub mod browser;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::{ChromeRenderer, PageRenderer};
pub use clients::{
    HttpResourceFetcher, HttpSubmissionClient, LlmClient, ResourceFetcher, SubmissionClient,
};
pub use config::Config;
pub use error::{
    AnswerError, FetchError, LlmError, ParseError, RenderError, StepError, StepResult, SubmitError,
};
pub use models::{
    Answer, QuizDescription, RenderedPage, ResourceKind, ResourcePayload, SubmissionResult,
};
pub use orchestrator::ChainRunner;
pub use services::{format_answer, Answerer, LlmAnswerer, LlmQuizParser, QuizParser};
pub use workflow::{QuizCtx, QuizFlow};
