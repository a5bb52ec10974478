// 令牌缓存模块
// 进程内存储，进程退出即丢失

pub mod models;
pub mod operations;

pub use models::TokenRecord;
pub use operations::TokenCache;
