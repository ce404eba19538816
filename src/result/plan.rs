//! 执行计划树
//!
//! 一次执行的性能画像是全有或全无的：要么整棵树每个节点都携带计数器，
//! 要么任何节点都不携带。这里用两组递归结构从类型层面固化该不变量，
//! 混合形态（部分节点有画像、兄弟节点没有）不可构造。

use crate::core::value::Value;
use std::collections::BTreeSet;

/// 性能画像计数器
///
/// 仅在 PROFILE 执行下出现；缺失与全零是两种不同状态。
/// 计数器统一按 64 位宽度捕获，避免大规模扫描下窄整型溢出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfilingCounters {
    pub rows: u64,
    pub db_hits: u64,
    pub page_cache_hits: u64,
    pub page_cache_misses: u64,
}

/// 无画像的计划描述节点（EXPLAIN 产物）
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDescription {
    /// 算子类型名
    pub operator_type: String,
    /// 算子参数，保持引擎给出的顺序
    pub args: Vec<(String, Value)>,
    /// 节点产出的标识符集合，唯一性由集合保证，顺序无意义
    pub identifiers: BTreeSet<String>,
    /// 有序子节点序列，叶子为空序列
    pub children: Vec<PlanDescription>,
}

impl PlanDescription {
    pub fn new(operator_type: impl Into<String>) -> Self {
        Self {
            operator_type: operator_type.into(),
            args: Vec::new(),
            identifiers: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.args.push((key.into(), value));
        self
    }

    pub fn with_identifier(mut self, id: impl Into<String>) -> Self {
        self.identifiers.insert(id.into());
        self
    }

    pub fn with_child(mut self, child: PlanDescription) -> Self {
        self.children.push(child);
        self
    }
}

/// 带画像的计划节点（PROFILE 产物）
///
/// 计数器为必填字段，构造即满足"整棵树全部携带画像"。
#[derive(Debug, Clone, PartialEq)]
pub struct ProfiledPlan {
    pub operator_type: String,
    pub args: Vec<(String, Value)>,
    pub identifiers: BTreeSet<String>,
    pub counters: ProfilingCounters,
    pub children: Vec<ProfiledPlan>,
}

impl ProfiledPlan {
    pub fn new(operator_type: impl Into<String>, counters: ProfilingCounters) -> Self {
        Self {
            operator_type: operator_type.into(),
            args: Vec::new(),
            identifiers: BTreeSet::new(),
            counters,
            children: Vec::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.args.push((key.into(), value));
        self
    }

    pub fn with_identifier(mut self, id: impl Into<String>) -> Self {
        self.identifiers.insert(id.into());
        self
    }

    pub fn with_child(mut self, child: ProfiledPlan) -> Self {
        self.children.push(child);
        self
    }
}

/// 结果携带的执行计划
///
/// EXPLAIN 结果携带 `Description`，PROFILE 结果携带 `Profile`。
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionPlan {
    Description(PlanDescription),
    Profile(ProfiledPlan),
}

impl ExecutionPlan {
    /// 是否携带性能画像
    pub fn is_profiled(&self) -> bool {
        matches!(self, ExecutionPlan::Profile(_))
    }
}
