//! 顶点定义
//!
//! 顶点持有用户数据和关联边 ID 列表

use super::edge::EdgeId;
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// 顶点 ID（带代数校验，删除后不会指向新顶点）
    pub struct VertexId;
}

/// 关联边列表，顺序无语义
pub(crate) type Incidence = SmallVec<[EdgeId; 4]>;

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    /// 用户数据
    data: V,
    /// 关联边
    edges: Incidence,
}

impl<V> Vertex<V> {
    pub(crate) fn new(data: V) -> Self {
        Self {
            data,
            edges: SmallVec::new(),
        }
    }

    /// 获取顶点数据
    pub fn data(&self) -> &V {
        &self.data
    }

    /// 获取可变顶点数据
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> V {
        self.data
    }

    /// 关联边 ID
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// 度数
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    /// 交换删除：用最后一项覆盖目标后弹出
    pub(crate) fn detach(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.edges.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn pop_edge(&mut self) -> Option<EdgeId> {
        self.edges.pop()
    }
}
