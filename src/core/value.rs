//! 线协议值类型
//!
//! result-summary 元数据只允许五种值形态：字符串、64 位整数、双精度浮点、
//! 有序序列、嵌套映射。这些形态在常见的紧凑二进制编码中无需 schema 即可表示。
//! 布尔值不在元数据词汇表中使用，因此不提供对应变体。

use serde::Serialize;
use std::collections::HashMap;

/// 元数据值
///
/// 适配层输出的唯一值词汇表，编码层按变体直接映射到线格式。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    /// 构造空映射
    pub fn empty_map() -> Self {
        Value::Map(HashMap::new())
    }

    /// 获取整数值
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// 获取浮点值
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// 获取字符串值
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// 获取序列值
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// 获取映射值
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    /// 超出 `i64` 表示范围的计数器饱和到 `i64::MAX`，不回绕为负数
    fn from(v: u64) -> Self {
        Value::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(v: HashMap<String, Value>) -> Self {
        Value::Map(v)
    }
}
