//! 执行模式分类
//!
//! 查询结果沿两个维度分类：读写性质（4 种）× 执行方式（3 种）。
//! 两个维度均为封闭枚举，4×3 空间之外的模式在类型层面不可表示。

use std::fmt;

/// 查询读写性质
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// 只读查询
    ReadOnly,
    /// 只写查询
    WriteOnly,
    /// 读写混合查询
    ReadWrite,
    /// Schema 变更查询
    SchemaWrite,
}

impl QueryKind {
    /// 返回 result-summary 中 `type` 键对应的类型码
    pub fn type_code(&self) -> &'static str {
        match self {
            QueryKind::ReadOnly => "r",
            QueryKind::WriteOnly => "w",
            QueryKind::ReadWrite => "rw",
            QueryKind::SchemaWrite => "s",
        }
    }
}

/// 查询执行方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionKind {
    /// 正常执行，无计划描述
    Executed,
    /// EXPLAIN：仅产出计划描述，不执行
    Explained,
    /// PROFILE：执行并产出带性能计数器的计划
    Profiled,
}

/// 执行模式
///
/// 由上游引擎按结果产出，不可变；决定类型码以及计划/画像数据是否出现。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionMode {
    pub query_kind: QueryKind,
    pub execution_kind: ExecutionKind,
}

impl ExecutionMode {
    pub fn new(query_kind: QueryKind, execution_kind: ExecutionKind) -> Self {
        Self {
            query_kind,
            execution_kind,
        }
    }

    /// 正常执行模式
    pub fn executed(query_kind: QueryKind) -> Self {
        Self::new(query_kind, ExecutionKind::Executed)
    }

    /// EXPLAIN 模式
    pub fn explained(query_kind: QueryKind) -> Self {
        Self::new(query_kind, ExecutionKind::Explained)
    }

    /// PROFILE 模式
    pub fn profiled(query_kind: QueryKind) -> Self {
        Self::new(query_kind, ExecutionKind::Profiled)
    }

    /// result-summary 类型码
    pub fn type_code(&self) -> &'static str {
        self.query_kind.type_code()
    }

    /// 此模式下结果是否应携带计划树
    pub fn expects_plan(&self) -> bool {
        matches!(
            self.execution_kind,
            ExecutionKind::Explained | ExecutionKind::Profiled
        )
    }

    /// 是否为 PROFILE 模式
    pub fn is_profiled(&self) -> bool {
        self.execution_kind == ExecutionKind::Profiled
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.query_kind, self.execution_kind)
    }
}
