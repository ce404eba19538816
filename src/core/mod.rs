//! 核心基础类型
//!
//! 包含线协议侧的值类型系统与统一错误处理。

pub mod error;
pub mod value;

pub use error::{MetadataError, MetadataResult};
pub use value::Value;
