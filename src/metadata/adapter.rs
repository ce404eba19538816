//! 结果元数据适配器
//!
//! 严格的两阶段一次性生成器：先交付行流，再装配元数据，阶段不可重入、
//! 不可重排。`accept` 按值消费适配器，每个查询结果恰好运行一次，
//! 运行后不持有任何状态。
//!
//! 行流与元数据是两条互不解释的输出流，唯一的交汇点是行交付阶段
//! 两端的时钟采样。

use crate::common::time::Clock;
use crate::core::error::{MetadataError, MetadataResult};
use crate::core::value::Value;
use crate::metadata::notification_format::format_notifications;
use crate::metadata::plan_format::{format_plan, format_profile};
use crate::metadata::stats_format::format_stats;
use crate::result::execution_mode::ExecutionMode;
use crate::result::notification::NotificationCatalog;
use crate::result::plan::ExecutionPlan;
use crate::result::query_result::{QueryResult, Record};
use std::sync::Arc;

/// 推式结果访问者
///
/// 行与元数据通过两个回调分别推送，调用方自行决定累积方式。
pub trait ResultVisitor {
    /// 按结果原生顺序接收一行
    fn visit_record(&mut self, record: Record) -> MetadataResult<()>;

    /// 接收一个元数据键值对
    fn add_metadata(&mut self, key: &str, value: Value);
}

/// 查询结果到 result-summary 元数据的适配器
pub struct BoltAdapterStream<R: QueryResult> {
    result: R,
    clock: Arc<dyn Clock>,
    catalog: Arc<dyn NotificationCatalog>,
}

impl<R: QueryResult> BoltAdapterStream<R> {
    pub fn new(
        result: R,
        clock: Arc<dyn Clock>,
        catalog: Arc<dyn NotificationCatalog>,
    ) -> Self {
        Self {
            result,
            clock,
            catalog,
        }
    }

    /// 交付行流并装配元数据
    ///
    /// 输出的固定键词汇表：
    /// - `result_consumed_after`：行交付阶段的毫秒耗时
    /// - `type`：执行模式类型码（r/w/rw/s）
    /// - `stats`：仅在发生更新时出现
    /// - `plan` 或 `profile`：仅在结果携带计划树时出现，二者互斥
    /// - `notifications`：仅在通知序列非空时出现
    pub fn accept<V: ResultVisitor>(mut self, visitor: &mut V) -> MetadataResult<()> {
        // 阶段一：行交付，计时只覆盖这一段
        let started_ms = self.clock.millis();
        let mut delivered = 0u64;
        while let Some(record) = self.result.next_record()? {
            visitor.visit_record(record)?;
            delivered += 1;
        }
        let finished_ms = self.clock.millis();
        log::debug!("行交付完成: {} 行, {}ms 起 {}ms 止", delivered, started_ms, finished_ms);

        if finished_ms < started_ms {
            return Err(MetadataError::MeasurementAnomaly {
                started_ms,
                finished_ms,
            });
        }

        // 阶段二：元数据装配
        let mode = self.result.execution_mode();
        check_plan_consistency(mode, self.result.execution_plan())?;

        visitor.add_metadata("type", Value::from(mode.type_code()));

        let stats = self.result.statistics();
        if stats.contains_updates {
            visitor.add_metadata("stats", format_stats(stats));
        } else {
            log::debug!("结果无更新, 省略 stats 键");
        }

        match self.result.execution_plan() {
            Some(ExecutionPlan::Description(plan)) => {
                visitor.add_metadata("plan", format_plan(plan));
            }
            Some(ExecutionPlan::Profile(plan)) => {
                visitor.add_metadata("profile", format_profile(plan));
            }
            None => {}
        }

        let notifications = self.result.notifications();
        if !notifications.is_empty() {
            visitor.add_metadata(
                "notifications",
                format_notifications(notifications, self.catalog.as_ref())?,
            );
        }

        visitor.add_metadata(
            "result_consumed_after",
            Value::Int(finished_ms - started_ms),
        );
        Ok(())
    }
}

/// 校验执行模式与计划树在场性的一致性
///
/// 计划树当且仅当 EXPLAIN/PROFILE 结果携带。
/// `plan` 与 `profile` 键的选择只看树本身是否携带计数器，
/// 与执行模式无关。
fn check_plan_consistency(
    mode: ExecutionMode,
    plan: Option<&ExecutionPlan>,
) -> MetadataResult<()> {
    match plan {
        None if mode.expects_plan() => Err(MetadataError::Classification(format!(
            "模式 {} 要求计划树, 但结果未携带",
            mode
        ))),
        Some(_) if !mode.expects_plan() => Err(MetadataError::Classification(format!(
            "模式 {} 不应携带计划树",
            mode
        ))),
        _ => Ok(()),
    }
}
