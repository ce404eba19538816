//! 查询通知
//!
//! 通知是引擎发出的非致命建议。通知记录本身只携带一个目录标识符和
//! 可选的源文本位置；严重级别、稳定代码、标题、描述由外部通知目录解析。
//! 目录以注入的只读查找能力接入，便于用合成目录做测试。

/// 通知严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Information,
}

impl Severity {
    /// 线格式使用的大写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Information => "INFORMATION",
        }
    }
}

/// 查询文本中的源位置
///
/// "无位置"用 `Option<InputPosition>` 的 `None` 表达，
/// 与位置 (0,0,0) 是两种不同状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// 字符偏移
    pub offset: i64,
    /// 行号
    pub line: i64,
    /// 列号
    pub column: i64,
}

impl InputPosition {
    pub fn new(offset: i64, line: i64, column: i64) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// 通知记录
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// 目录标识符，由 [`NotificationCatalog`] 解析
    pub code: String,
    /// 可选源位置
    pub position: Option<InputPosition>,
}

impl Notification {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            position: None,
        }
    }

    pub fn at(mut self, position: InputPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// 目录解析出的通知详情
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDetail {
    pub severity: Severity,
    /// 对外稳定的代码字符串，不是内部枚举名
    pub code: String,
    pub title: String,
    pub description: String,
}

/// 通知目录查找能力
///
/// 纯函数语义：无副作用，不要求缓存。标识符缺失返回 `None`，
/// 由调用方决定如何上报（适配层将其视为数据完整性故障）。
pub trait NotificationCatalog: Send + Sync {
    fn resolve(&self, code: &str) -> Option<NotificationDetail>;
}
