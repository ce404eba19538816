//! GraphDB Bolt - 查询结果元数据适配层
//!
//! 此 crate 将引擎无关的查询执行结果（统计信息、执行计划树、通知、执行模式）
//! 转换为 Bolt 风格线协议 result-summary 消息所需的固定词汇表元数据映射。
//!
//! 职责边界：
//! - 不执行查询，不做逐行值编码，不实现字节级协议帧
//! - 通知目录只消费不拥有，以注入的只读查找能力形式接入

pub mod common;
pub mod core;
pub mod metadata;
pub mod result;

pub use crate::common::time::{Clock, SystemClock};
pub use crate::core::error::{MetadataError, MetadataResult};
pub use crate::core::value::Value;
pub use crate::metadata::adapter::{BoltAdapterStream, ResultVisitor};
pub use crate::result::{
    ExecutionKind, ExecutionMode, ExecutionPlan, InputPosition, Notification, NotificationCatalog,
    NotificationDetail, PlanDescription, ProfiledPlan, ProfilingCounters, QueryKind, QueryResult,
    Record, Severity, StatisticsSnapshot,
};
