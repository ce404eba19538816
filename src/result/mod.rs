//! 引擎侧结果模型
//!
//! 定义适配层从查询引擎消费的数据结构：
//! - 执行模式 (`execution_mode.rs`)
//! - 统计快照 (`statistics.rs`)
//! - 执行计划树 (`plan.rs`)
//! - 通知与通知目录 (`notification.rs`)
//! - 查询结果接缝 (`query_result.rs`)

pub mod execution_mode;
pub mod notification;
pub mod plan;
pub mod query_result;
pub mod statistics;

pub use execution_mode::{ExecutionKind, ExecutionMode, QueryKind};
pub use notification::{
    InputPosition, Notification, NotificationCatalog, NotificationDetail, Severity,
};
pub use plan::{ExecutionPlan, PlanDescription, ProfiledPlan, ProfilingCounters};
pub use query_result::{QueryResult, Record};
pub use statistics::StatisticsSnapshot;
