//! 通知映射
//!
//! 将通知记录序列逐条映射为线格式映射：`severity`（大写名）、
//! `code`（对外稳定代码）、`title`、`description`，以及仅在记录
//! 携带位置时出现的 `position`。输入顺序原样保留，不去重不排序。

use crate::core::error::{MetadataError, MetadataResult};
use crate::core::value::Value;
use crate::result::notification::{Notification, NotificationCatalog};
use std::collections::HashMap;

/// 生成 `notifications` 键对应的有序序列
///
/// 标识符在目录中缺失是上游数据完整性故障，以查找错误传播，
/// 不用占位文本顶替（标题与描述面向用户）。
pub fn format_notifications(
    notifications: &[Notification],
    catalog: &dyn NotificationCatalog,
) -> MetadataResult<Value> {
    let mut out = Vec::with_capacity(notifications.len());
    for notification in notifications {
        let detail = catalog
            .resolve(&notification.code)
            .ok_or_else(|| MetadataError::NotificationLookup(notification.code.clone()))?;

        let mut map = HashMap::new();
        map.insert(
            "severity".to_string(),
            Value::String(detail.severity.as_str().to_string()),
        );
        map.insert("code".to_string(), Value::String(detail.code));
        map.insert("title".to_string(), Value::String(detail.title));
        map.insert("description".to_string(), Value::String(detail.description));

        if let Some(position) = notification.position {
            let mut pos = HashMap::new();
            pos.insert("offset".to_string(), Value::Int(position.offset));
            pos.insert("line".to_string(), Value::Int(position.line));
            pos.insert("column".to_string(), Value::Int(position.column));
            map.insert("position".to_string(), Value::Map(pos));
        }

        out.push(Value::Map(map));
    }
    Ok(Value::List(out))
}
