//! 元数据适配层错误类型
//!
//! 适配层遵循快速失败原则：上游契约被破坏时返回明确的错误，
//! 而不是猜测默认值或静默吞掉异常。

use thiserror::Error;

/// 元数据适配结果类型别名
pub type MetadataResult<T> = Result<T, MetadataError>;

/// 元数据适配层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// 执行模式与计划树形态不一致（上游编程契约被破坏）
    #[error("执行模式分类错误: {0}")]
    Classification(String),

    /// 通知标识符在目录中不存在（上游目录数据完整性故障）
    #[error("通知目录查找失败: {0}")]
    NotificationLookup(String),

    /// 时钟回拨导致的负耗时（时间源配置异常，不做静默截断）
    #[error("时间测量异常: 起始采样 {started_ms}ms 晚于结束采样 {finished_ms}ms")]
    MeasurementAnomaly { started_ms: i64, finished_ms: i64 },

    /// 行流迭代失败（来自上游引擎，原样向调用方传播）
    #[error("结果行读取错误: {0}")]
    Record(String),
}
