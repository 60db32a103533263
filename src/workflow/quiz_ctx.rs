//! 题目处理上下文
//!
//! 封装"我正在处理链条上的哪一题"这一信息

use std::fmt::Display;

/// 题目处理上下文
///
/// 包含处理单个题目所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct QuizCtx {
    /// 题目在链条中的序号（从1开始，仅用于日志显示）
    pub step_index: usize,

    /// 当前题目页面地址
    pub quiz_url: String,

    /// 提交时使用的邮箱
    pub email: String,

    /// 提交时使用的密钥
    pub secret: String,
}

impl QuizCtx {
    /// 创建新的题目上下文
    pub fn new(step_index: usize, quiz_url: String, email: String, secret: String) -> Self {
        Self {
            step_index,
            quiz_url,
            email,
            secret,
        }
    }
}

impl Display for QuizCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[第 {} 题 {}]", self.step_index, self.quiz_url)
    }
}
