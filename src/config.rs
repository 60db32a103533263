use std::time::Duration;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 整条题目链的时间预算（秒）
    pub max_chain_secs: u64,
    /// 页面加载超时（秒）
    pub page_load_timeout_secs: u64,
    /// 页面渲染后的静置等待（毫秒），等待异步内容加载完成
    pub settle_delay_ms: u64,
    /// 单个附件下载超时（秒）
    pub download_timeout_secs: u64,
    /// 答案提交超时（秒）
    pub submit_timeout_secs: u64,
    /// Chrome 可执行文件路径，留空则自动探测
    pub chrome_executable: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    /// 解析题目页面用的模型
    pub parse_model_name: String,
    /// 作答用的模型
    pub answer_model_name: String,
    /// 作答输出的 token 上限
    pub answer_max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chain_secs: 180,
            page_load_timeout_secs: 30,
            settle_delay_ms: 2000,
            download_timeout_secs: 30,
            submit_timeout_secs: 30,
            chrome_executable: None,
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            parse_model_name: "gpt-4o-mini".to_string(),
            answer_model_name: "gpt-4o".to_string(),
            answer_max_tokens: 2000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_chain_secs: std::env::var("MAX_CHAIN_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_chain_secs),
            page_load_timeout_secs: std::env::var("PAGE_LOAD_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_load_timeout_secs),
            settle_delay_ms: std::env::var("SETTLE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.settle_delay_ms),
            download_timeout_secs: std::env::var("DOWNLOAD_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.download_timeout_secs),
            submit_timeout_secs: std::env::var("SUBMIT_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.submit_timeout_secs),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().filter(|v| !v.is_empty()),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            parse_model_name: std::env::var("PARSE_MODEL_NAME").unwrap_or(default.parse_model_name),
            answer_model_name: std::env::var("ANSWER_MODEL_NAME").unwrap_or(default.answer_model_name),
            answer_max_tokens: std::env::var("ANSWER_MAX_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.answer_max_tokens),
        }
    }

    /// 题目链时间预算
    pub fn max_chain_time(&self) -> Duration {
        Duration::from_secs(self.max_chain_secs)
    }

    /// 页面加载超时
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    /// 渲染后静置等待
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// 附件下载超时
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    /// 答案提交超时
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }
}
