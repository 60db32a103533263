use anyhow::{bail, Result};

use quiz_chain_solver::config::Config;
use quiz_chain_solver::logger;
use quiz_chain_solver::orchestrator::ChainRunner;
use quiz_chain_solver::utils::logging::{log_startup, print_final_stats};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 起始地址：命令行第一个参数，缺省回退到 QUIZ_URL 环境变量
    let initial_url = match std::env::args().nth(1) {
        Some(url) => url,
        None => match std::env::var("QUIZ_URL") {
            Ok(url) => url,
            Err(_) => bail!("用法: quiz_chain_solver <起始题目地址>（或设置 QUIZ_URL 环境变量）"),
        },
    };

    // 提交凭据
    let email = std::env::var("SOLVER_EMAIL").unwrap_or_default();
    let secret = std::env::var("SOLVER_SECRET").unwrap_or_default();

    log_startup(&config, &initial_url);

    // 驱动整条题目链
    let runner = ChainRunner::new(&config);
    let started = std::time::Instant::now();
    let results = runner.solve_chain(&email, &secret, &initial_url).await;

    // 输出最终统计
    print_final_stats(&results, started.elapsed());

    Ok(())
}
