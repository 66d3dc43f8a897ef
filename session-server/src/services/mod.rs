//! 服务模块
//!
//! - [`https`] - HTTP 应用组装 (路由 + 中间件)

pub mod https;

pub use https::build_app;
