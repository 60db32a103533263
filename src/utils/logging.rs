/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::models::SubmissionResult;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 运行配置
/// - `initial_url`: 题目链起始地址
pub fn log_startup(config: &Config, initial_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 答题链求解模式");
    info!("🔗 起始地址: {}", initial_url);
    info!(
        "🧠 解析模型: {} / 作答模型: {}",
        config.parse_model_name, config.answer_model_name
    );
    info!("⏱️ 时间预算: {} 秒", config.max_chain_secs);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `results`: 按访问顺序排列的评分结果
/// - `elapsed`: 总耗时
pub fn print_final_stats(results: &[SubmissionResult], elapsed: Duration) {
    let correct = results.iter().filter(|r| r.correct).count();
    info!("\n{}", "=".repeat(60));
    info!("📊 答题链处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 答对: {}/{}", correct, results.len());
    info!("❌ 答错: {}", results.len() - correct);
    info!("⏱️ 总耗时: {:.1} 秒", elapsed.as_secs_f64());
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
