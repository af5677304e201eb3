//! 边定义
//!
//! 无向边：两个端点没有源/目标之分

use super::vertex::VertexId;
use slotmap::new_key_type;

new_key_type! {
    /// 边 ID（带代数校验）
    pub struct EdgeId;
}

/// 边
#[derive(Debug, Clone)]
pub struct Edge<E> {
    /// 用户数据
    data: E,
    /// 两个不同的端点
    vertices: [VertexId; 2],
}

impl<E> Edge<E> {
    pub(crate) fn new(vertices: [VertexId; 2], data: E) -> Self {
        debug_assert_ne!(vertices[0], vertices[1]);
        Self { data, vertices }
    }

    /// 获取边数据
    pub fn data(&self) -> &E {
        &self.data
    }

    /// 获取可变边数据
    pub fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> E {
        self.data
    }

    /// 两个端点（按插入时的参数顺序，不含方向语义）
    pub fn vertices(&self) -> [VertexId; 2] {
        self.vertices
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        match self.vertices {
            [a, b] if a == vertex => Some(b),
            [a, b] if b == vertex => Some(a),
            _ => None,
        }
    }

    /// 是否关联该顶点
    pub fn is_incident(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// 是否连接 a 与 b（不分顺序）
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        self.other(a) == Some(b)
    }
}
