//! LAN Party Session Server
//!
//! # 架构概述
//!
//! 为线下活动 (LAN party) 提供座位预订、消费记录和收款信息：
//!
//! - **座位** (`seating`): 同桌座位推导、自动预订与覆盖规则
//! - **银行** (`banking`): 捷克国内账号转 IBAN、QR 付款字符串
//! - **账单** (`billing`): 按客人汇总消费 (rust_decimal)
//! - **数据库** (`db`): SQLite (sqlx) 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! session-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── services/      # HTTP 应用组装
//! ├── api/           # HTTP 路由和处理器
//! ├── seating/       # 座位预订协议
//! ├── banking/       # IBAN 与付款
//! ├── billing/       # 消费汇总
//! ├── utils/         # 日志、校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod banking;
pub mod billing;
pub mod core;
pub mod db;
pub mod seating;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use services::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: dotenv、配置、工作目录、日志
pub fn setup_environment() -> Result<Config, ServerError> {
    // .env 文件可选
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir()?;

    let logs_dir = config.logs_dir();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.is_production(),
        Some(logs_dir.as_path()),
    );

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____                _
  / ___/___  __________(_)___  ____
  \__ \/ _ \/ ___/ ___/ / __ \/ __ \
 ___/ /  __(__  |__  ) / /_/ / / / /
/____/\___/____/____/_/\____/_/ /_/
    "#
    );
}
