//! 通用基础设施
//!
//! 与业务无关的底层能力，目前仅包含时间源抽象。

pub mod time;

pub use time::{Clock, SystemClock};
