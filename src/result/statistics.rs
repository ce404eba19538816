//! 查询统计快照
//!
//! 引擎按结果产出的十一个非负计数器加一个派生的"是否发生更新"标志。
//! 快照不可变，每个结果只被适配层消费一次。

/// 查询统计快照
///
/// `contains_updates` 为 false 与所有计数器为零是两种不同的语义：
/// 前者表示"没有发生更新"，后者可能只是碰巧没有变化。
/// 适配层依据此标志决定是否输出 `stats` 键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatisticsSnapshot {
    pub contains_updates: bool,
    pub nodes_created: u64,
    pub nodes_deleted: u64,
    pub relationships_created: u64,
    pub relationships_deleted: u64,
    pub properties_set: u64,
    pub indexes_added: u64,
    pub indexes_removed: u64,
    pub constraints_added: u64,
    pub constraints_removed: u64,
    pub labels_added: u64,
    pub labels_removed: u64,
}

impl StatisticsSnapshot {
    /// 无更新的空快照
    pub fn empty() -> Self {
        Self::default()
    }
}
