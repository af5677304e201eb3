//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod display;
mod edge;
#[allow(clippy::module_inception)]
mod graph;
mod index;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use index::KeyIndex;
pub use vertex::{Vertex, VertexId};
