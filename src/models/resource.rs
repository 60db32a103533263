/// 下载完成的附件
#[derive(Debug, Clone)]
pub struct ResourcePayload {
    /// 原始字节内容
    pub bytes: Vec<u8>,
    /// 响应头中的 Content-Type，缺失时为空串
    pub content_type: String,
}

/// 附件类型分类，决定以什么形式喂给 LLM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// PDF 文档，内容不解析，只附占位说明
    Pdf,
    /// 图片，以 base64 data URI 形式附带
    Image,
    /// 文本 / CSV，内容直接内联
    Text,
    /// 其他类型，跳过
    Other,
}

impl ResourcePayload {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// 根据 Content-Type 判断附件类型
    ///
    /// 子串匹配，大小写不敏感；PDF 的判断优先于图片。
    pub fn kind(&self) -> ResourceKind {
        let ct = self.content_type.to_lowercase();
        if ct.contains("pdf") {
            ResourceKind::Pdf
        } else if ct.contains("image") {
            ResourceKind::Image
        } else if ct.contains("text") || ct.contains("csv") {
            ResourceKind::Text
        } else {
            ResourceKind::Other
        }
    }
}
