//! 集成测试公共夹具
//!
//! 提供脚本化时钟、内存查询结果、合成通知目录和元数据收集器。

use graphdb_bolt::{
    Clock, ExecutionMode, ExecutionPlan, MetadataResult, Notification, NotificationCatalog,
    NotificationDetail, QueryResult, Record, ResultVisitor, Severity, StatisticsSnapshot, Value,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// 脚本化时钟：按给定序列返回采样值，耗尽后停在最后一个值
pub struct FakeClock {
    samples: Mutex<Vec<i64>>,
    last: Mutex<i64>,
}

impl FakeClock {
    pub fn new(samples: Vec<i64>) -> Self {
        Self {
            samples: Mutex::new(samples),
            last: Mutex::new(0),
        }
    }
}

impl Clock for FakeClock {
    fn millis(&self) -> i64 {
        let mut samples = self.samples.lock().expect("时钟锁");
        if samples.is_empty() {
            *self.last.lock().expect("时钟锁")
        } else {
            let value = samples.remove(0);
            *self.last.lock().expect("时钟锁") = value;
            value
        }
    }
}

/// 内存查询结果
pub struct TestResult {
    pub mode: ExecutionMode,
    pub stats: StatisticsSnapshot,
    pub plan: Option<ExecutionPlan>,
    pub notifications: Vec<Notification>,
    pub field_names: Vec<String>,
    pub rows: Vec<Record>,
}

impl TestResult {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            stats: StatisticsSnapshot::empty(),
            plan: None,
            notifications: Vec::new(),
            field_names: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_stats(mut self, stats: StatisticsSnapshot) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_plan(mut self, plan: ExecutionPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }
}

impl QueryResult for TestResult {
    fn field_names(&self) -> &[String] {
        &self.field_names
    }

    fn execution_mode(&self) -> ExecutionMode {
        self.mode
    }

    fn statistics(&self) -> &StatisticsSnapshot {
        &self.stats
    }

    fn execution_plan(&self) -> Option<&ExecutionPlan> {
        self.plan.as_ref()
    }

    fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn next_record(&mut self) -> MetadataResult<Option<Record>> {
        if self.rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.rows.remove(0)))
        }
    }
}

/// 合成通知目录，内容取自引擎内置通知的两个代表条目
pub struct TestCatalog;

impl NotificationCatalog for TestCatalog {
    fn resolve(&self, code: &str) -> Option<NotificationDetail> {
        match code {
            "index.hint_unfulfillable" => Some(NotificationDetail {
                severity: Severity::Warning,
                code: "Neo.ClientError.Schema.IndexNotFound".to_string(),
                title: "The request (directly or indirectly) referred to an index that does not exist."
                    .to_string(),
                description: "The hinted index does not exist, please check the schema".to_string(),
            }),
            "planner.unsupported" => Some(NotificationDetail {
                severity: Severity::Warning,
                code: "Neo.ClientNotification.Statement.PlannerUnsupportedWarning".to_string(),
                title: "This query is not supported by the COST planner.".to_string(),
                description:
                    "Using COST planner is unsupported for this query, please use RULE planner instead"
                        .to_string(),
            }),
            _ => None,
        }
    }
}

/// 元数据收集器
#[derive(Default)]
pub struct MetadataCollector {
    pub records: Vec<Record>,
    pub metadata: HashMap<String, Value>,
}

impl ResultVisitor for MetadataCollector {
    fn visit_record(&mut self, record: Record) -> MetadataResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn add_metadata(&mut self, key: &str, value: Value) {
        self.metadata.insert(key.to_string(), value);
    }
}

/// 由键值对构造映射值
pub fn map_value(pairs: Vec<(&str, Value)>) -> Value {
    Value::Map(
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}
