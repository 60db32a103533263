use serde::{Deserialize, Serialize};

/// 渲染完成的页面内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedPage {
    /// 完整 HTML
    pub html: String,
    /// 从 body 提取的纯文本
    pub text: String,
}
