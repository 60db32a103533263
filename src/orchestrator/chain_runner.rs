//! 题目链处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责驱动整条题目链，是链条级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **串行推进**：从初始地址开始逐题处理
//! 2. **流程调度**：创建并复用 `QuizFlow`
//! 3. **时间预算**：每题开始前检查链条总耗时
//! 4. **错误收敛**：任何一题失败都终止链条，已有结果原样返回
//! 5. **统计输出**：记录每题的评分结果

use std::time::Duration;

use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::SubmissionResult;
use crate::workflow::{QuizCtx, QuizFlow};

/// 链条推进状态
struct ChainState {
    current_url: String,
    step_index: usize,
    started: Instant,
    results: Vec<SubmissionResult>,
}

/// 题目链处理器
pub struct ChainRunner {
    flow: QuizFlow,
    max_time: Duration,
}

impl ChainRunner {
    /// 创建新的链条处理器
    pub fn new(config: &Config) -> Self {
        Self {
            flow: QuizFlow::new(config),
            max_time: config.max_chain_time(),
        }
    }

    /// 用给定的流程与时间预算装配处理器
    pub fn with_flow(flow: QuizFlow, max_time: Duration) -> Self {
        Self { flow, max_time }
    }

    /// 处理整条题目链，返回所有已评分的结果
    ///
    /// 本方法不返回错误：任何一题失败都终止链条，
    /// 已收集的评分结果原样返回，失败的那一题不产生结果。
    ///
    /// # 参数
    /// - `email` / `secret`: 提交时原样转发的凭据
    /// - `initial_url`: 链条第一题的页面地址
    pub async fn solve_chain(
        &self,
        email: &str,
        secret: &str,
        initial_url: &str,
    ) -> Vec<SubmissionResult> {
        let mut state = ChainState {
            current_url: initial_url.to_string(),
            step_index: 1,
            started: Instant::now(),
            results: Vec::new(),
        };

        loop {
            // ========== 时间预算检查（每题开始前） ==========
            let elapsed = state.started.elapsed();
            if elapsed >= self.max_time {
                warn!(
                    "⏰ 已达时间上限 ({:.1}s >= {:.1}s)，停止处理链条",
                    elapsed.as_secs_f64(),
                    self.max_time.as_secs_f64()
                );
                break;
            }

            log_step_start(state.step_index, &state.current_url);

            let ctx = QuizCtx::new(
                state.step_index,
                state.current_url.clone(),
                email.to_string(),
                secret.to_string(),
            );

            // ========== 处理一道题 ==========
            let result = match self.flow.run(&ctx).await {
                Ok(result) => result,
                Err(e) => {
                    error!(
                        "[第 {} 题] ❌ 处理过程中发生错误: {}",
                        state.step_index, e
                    );
                    break;
                }
            };

            if result.correct {
                info!("[第 {} 题] ✅ 回答正确", state.step_index);
            } else {
                warn!(
                    "[第 {} 题] ⚠️ 回答错误: {}",
                    state.step_index,
                    result.reason.as_deref().unwrap_or("未给出原因")
                );
            }

            let correct = result.correct;
            let next_url = result.next_url.clone();
            state.results.push(result);

            // ========== 推进或终止 ==========
            // 只要评分响应给出下一题地址就继续，答错不重试
            match next_url {
                Some(url) => {
                    if correct {
                        info!("[第 {} 题] ➡️ 前往下一题: {}", state.step_index, url);
                    } else {
                        info!(
                            "[第 {} 题] ⏭️ 跳过本题，前往下一题: {}",
                            state.step_index, url
                        );
                    }
                    state.current_url = url;
                    state.step_index += 1;
                }
                None => {
                    if correct {
                        info!("🎉 题目链全部完成!");
                    } else {
                        warn!("评分响应未给出下一题地址，链条终止");
                    }
                    break;
                }
            }
        }

        info!("题目链处理结束，共 {} 个评分结果", state.results.len());
        state.results
    }
}

// ========== 日志辅助函数 ==========

fn log_step_start(step_index: usize, url: &str) {
    info!("\n{}", "─".repeat(30));
    info!("[第 {} 题] 开始处理: {}", step_index, url);
}
