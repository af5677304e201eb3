//! adjgraph - 通用内存无向图容器
//!
//! 基于邻接表的稀疏图存储，支持：
//! - 任意类型的顶点键、顶点数据和边数据
//! - 按键查找、插入与删除顶点和边
//! - 删除时自动维护各顶点的关联边列表
//!
//! 图算法（遍历、最短路径等）不在本库范围内，由调用方基于公开接口实现。

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, ErrorKind, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use metrics::StatsSnapshot;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
