//! 元数据装配
//!
//! result-summary 元数据的四个装配件：
//! - 计划树转换 (`plan_format.rs`)
//! - 通知映射 (`notification_format.rs`)
//! - 统计汇总 (`stats_format.rs`)
//! - 结果元数据适配器 (`adapter.rs`)，编排前三者

pub mod adapter;
pub mod notification_format;
pub mod plan_format;
pub mod stats_format;

pub use adapter::{BoltAdapterStream, ResultVisitor};
pub use notification_format::format_notifications;
pub use plan_format::{format_plan, format_profile};
pub use stats_format::format_stats;
