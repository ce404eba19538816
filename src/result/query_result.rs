//! 查询结果接缝
//!
//! 适配层与查询引擎之间的边界。引擎按结果暴露执行模式、统计快照、
//! 可选计划树、通知序列，以及一个惰性的、至多迭代一次的行流。
//! 适配层只搬运行数据，不解释行内容。

use crate::core::error::MetadataResult;
use crate::core::value::Value;
use crate::result::execution_mode::ExecutionMode;
use crate::result::notification::Notification;
use crate::result::plan::ExecutionPlan;
use crate::result::statistics::StatisticsSnapshot;

/// 结果行，值按字段顺序排列
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

/// 引擎产出的单个查询结果
///
/// `next_record` 是惰性行流：每次调用交付一行，耗尽后返回 `Ok(None)`。
/// 行流至多被完整迭代一次；上游中断以 `Err` 形式浮出，由适配层传播。
pub trait QueryResult {
    /// 结果字段名
    fn field_names(&self) -> &[String];

    /// 执行模式
    fn execution_mode(&self) -> ExecutionMode;

    /// 统计快照
    fn statistics(&self) -> &StatisticsSnapshot;

    /// 计划树，仅 EXPLAIN/PROFILE 结果携带
    fn execution_plan(&self) -> Option<&ExecutionPlan>;

    /// 通知序列，可能为空
    fn notifications(&self) -> &[Notification];

    /// 取下一行
    fn next_record(&mut self) -> MetadataResult<Option<Record>>;
}
