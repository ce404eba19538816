//! 单调时间源抽象
//!
//! 适配层在行流开始与结束处各采样一次，计算 `result_consumed_after`。
//! 时间源必须满足：
//! - 同一次适配运行内单调不减（壁钟回拨不得产生负耗时）
//! - 可被多个工作线程并发采样（`Send + Sync`）

use std::time::Instant;

/// 毫秒级时钟
///
/// 以 trait 形式注入，测试可以用脚本化时钟替换真实时钟。
pub trait Clock: Send + Sync {
    /// 返回自时钟自身纪元以来的毫秒数
    fn millis(&self) -> i64;
}

/// 基于 `Instant` 的系统单调时钟
///
/// 纪元为时钟构造时刻。`Instant` 不受壁钟调整影响，
/// 保证同一实例上的连续采样单调不减。
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> i64 {
        self.epoch.elapsed().as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let first = clock.millis();
        let second = clock.millis();
        assert!(second >= first);
        assert!(first >= 0);
    }

    #[test]
    fn test_system_clock_shared_across_threads() {
        use std::sync::Arc;

        let clock = Arc::new(SystemClock::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = Arc::clone(&clock);
                std::thread::spawn(move || clock.millis())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap() >= 0);
        }
    }
}
