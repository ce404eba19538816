//! 统计汇总
//!
//! 将统计快照压平为十一个固定键的计数映射。
//! 适配器只在 `contains_updates` 为 true 时调用本函数；
//! 无更新的结果完全不输出 `stats` 键，避免把"没有更新"
//! 误报成"更新了零次"。

use crate::core::value::Value;
use crate::result::statistics::StatisticsSnapshot;
use std::collections::HashMap;

/// 生成 `stats` 键对应的平面计数映射
pub fn format_stats(stats: &StatisticsSnapshot) -> Value {
    let mut map = HashMap::new();
    map.insert("nodes-created".to_string(), Value::from(stats.nodes_created));
    map.insert("nodes-deleted".to_string(), Value::from(stats.nodes_deleted));
    map.insert(
        "relationships-created".to_string(),
        Value::from(stats.relationships_created),
    );
    map.insert(
        "relationships-deleted".to_string(),
        Value::from(stats.relationships_deleted),
    );
    map.insert(
        "properties-set".to_string(),
        Value::from(stats.properties_set),
    );
    map.insert("indexes-added".to_string(), Value::from(stats.indexes_added));
    map.insert(
        "indexes-removed".to_string(),
        Value::from(stats.indexes_removed),
    );
    map.insert(
        "constraints-added".to_string(),
        Value::from(stats.constraints_added),
    );
    map.insert(
        "constraints-removed".to_string(),
        Value::from(stats.constraints_removed),
    );
    map.insert("labels-added".to_string(), Value::from(stats.labels_added));
    map.insert(
        "labels-removed".to_string(),
        Value::from(stats.labels_removed),
    );
    Value::Map(map)
}
