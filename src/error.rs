//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(&'static str),

    #[error("顶点不存在")]
    VertexNotFound,

    #[error("边不存在")]
    EdgeNotFound,

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

/// 错误类别
///
/// 容器操作只会产生前两类错误；`Other` 仅来自配置加载等外围功能。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 参数不合法（例如自环）
    InvalidArgument,
    /// 键、顶点或边不存在
    NotFound,
    /// 其他
    Other,
}

impl Error {
    /// 获取错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::VertexNotFound | Error::EdgeNotFound => ErrorKind::NotFound,
            Error::Config(_) | Error::IoError(_) => ErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
