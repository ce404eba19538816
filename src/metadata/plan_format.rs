//! 计划树转换
//!
//! 将执行计划树转换为结构同构的嵌套映射树：形状不变，值换成线格式词汇。
//! 每个节点输出 `operatorType`、`args`、`identifiers`、`children` 四个键；
//! 带画像的树在每个节点上额外输出 `rows`、`dbHits`、`pageCacheHits`、
//! `pageCacheMisses` 和派生的 `pageCacheHitRatio`。
//!
//! 遍历使用显式栈的后序构造，树深只受输入本身限制，
//! 病态深度的计划不会压垮调用栈。

use crate::core::value::Value;
use crate::result::plan::{PlanDescription, ProfiledPlan, ProfilingCounters};
use std::collections::HashMap;

/// 转换无画像的计划描述树
///
/// 叶子节点的 `children` 为空序列而非缺失；
/// 五个画像键在任何深度都不出现。
pub fn format_plan(plan: &PlanDescription) -> Value {
    format_tree(NodeRef::Plain(plan))
}

/// 转换带画像的计划树
///
/// 每个节点都携带四个计数器键和 `pageCacheHitRatio`。
pub fn format_profile(plan: &ProfiledPlan) -> Value {
    format_tree(NodeRef::Profiled(plan))
}

/// 页缓存命中率
///
/// 约定：未记录任何缓存访问（分母为零）时命中率为 0.0。
/// 该场景不是错误，不允许触发除零故障。
pub fn page_cache_hit_ratio(counters: &ProfilingCounters) -> f64 {
    let accesses = counters
        .page_cache_hits
        .saturating_add(counters.page_cache_misses);
    if accesses == 0 {
        0.0
    } else {
        counters.page_cache_hits as f64 / accesses as f64
    }
}

/// 对两种节点形态的统一只读视图
#[derive(Clone, Copy)]
enum NodeRef<'a> {
    Plain(&'a PlanDescription),
    Profiled(&'a ProfiledPlan),
}

impl<'a> NodeRef<'a> {
    fn child_count(&self) -> usize {
        match self {
            NodeRef::Plain(node) => node.children.len(),
            NodeRef::Profiled(node) => node.children.len(),
        }
    }

    fn child(&self, index: usize) -> NodeRef<'a> {
        match self {
            NodeRef::Plain(node) => NodeRef::Plain(&node.children[index]),
            NodeRef::Profiled(node) => NodeRef::Profiled(&node.children[index]),
        }
    }

    /// 用已转换的子节点序列构造本节点的输出映射
    fn build(&self, children: Vec<Value>) -> Value {
        let (operator_type, args, identifiers) = match self {
            NodeRef::Plain(node) => (&node.operator_type, &node.args, &node.identifiers),
            NodeRef::Profiled(node) => (&node.operator_type, &node.args, &node.identifiers),
        };

        let mut map = HashMap::new();
        map.insert(
            "operatorType".to_string(),
            Value::String(operator_type.clone()),
        );
        map.insert(
            "args".to_string(),
            Value::Map(args.iter().cloned().collect()),
        );
        map.insert(
            "identifiers".to_string(),
            Value::List(
                identifiers
                    .iter()
                    .map(|id| Value::String(id.clone()))
                    .collect(),
            ),
        );
        map.insert("children".to_string(), Value::List(children));

        if let NodeRef::Profiled(node) = self {
            let counters = &node.counters;
            map.insert("rows".to_string(), Value::from(counters.rows));
            map.insert("dbHits".to_string(), Value::from(counters.db_hits));
            map.insert(
                "pageCacheHits".to_string(),
                Value::from(counters.page_cache_hits),
            );
            map.insert(
                "pageCacheMisses".to_string(),
                Value::from(counters.page_cache_misses),
            );
            map.insert(
                "pageCacheHitRatio".to_string(),
                Value::Float(page_cache_hit_ratio(counters)),
            );
        }

        Value::Map(map)
    }
}

/// 显式栈上的一帧：待处理节点、下一个子节点下标、已完成的子结果
struct Frame<'a> {
    node: NodeRef<'a>,
    next_child: usize,
    children_out: Vec<Value>,
}

impl<'a> Frame<'a> {
    fn new(node: NodeRef<'a>) -> Self {
        Self {
            node,
            next_child: 0,
            children_out: Vec::new(),
        }
    }
}

/// 后序迭代构造：子树先于父节点完成
fn format_tree(root: NodeRef<'_>) -> Value {
    let mut stack = vec![Frame::new(root)];
    let mut finished: Option<Value> = None;

    while let Some(frame) = stack.last_mut() {
        if let Some(done) = finished.take() {
            frame.children_out.push(done);
        }
        if frame.next_child < frame.node.child_count() {
            let child = frame.node.child(frame.next_child);
            frame.next_child += 1;
            stack.push(Frame::new(child));
        } else {
            let built = frame.node.build(std::mem::take(&mut frame.children_out));
            stack.pop();
            finished = Some(built);
        }
    }

    // 栈初始非空，循环结束时根节点结果必然就绪
    finished.unwrap_or_else(Value::empty_map)
}
