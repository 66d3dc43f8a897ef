//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`iban`] - 国内账号转 IBAN
//! - [`seats`] - 座位预订与同桌
//! - [`consumption`] - 消费记录与账单
//!
//! 成功响应直接返回 JSON 实体，错误响应统一为 [`shared::ApiResponse`] 结构。

pub mod health;
pub mod iban;
pub mod seats;
pub mod consumption;

// Re-export common types for handlers
pub use crate::utils::AppResult;
