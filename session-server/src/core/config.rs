use std::path::PathBuf;

/// 服务器配置 - 会话服务器的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | PAYMENT_ACCOUNT | (未设置) | 收款账号，捷克国内格式 `[prefix-]number/bank` |
/// | PAYMENT_CURRENCY | CZK | 收款币种 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/lan HTTP_PORT=8080 PAYMENT_ACCOUNT=19-2000145399/0800 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// tracing 日志级别
    pub log_level: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 主办方收款账号 (未设置时账单不含付款信息)
    pub payment_account: Option<String>,
    /// 收款币种
    pub payment_currency: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            payment_account: std::env::var("PAYMENT_ACCOUNT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            payment_currency: std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "CZK".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// SQLite 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("session.db")
    }

    /// 日志目录
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 创建工作目录和日志目录
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.logs_dir())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_work_dir() {
        let config = Config::with_overrides("/tmp/lan", 8080);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/lan/session.db"));
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/lan/logs"));
    }

    #[test]
    fn ensure_work_dir_creates_logs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = dir.path().join("work");
        let config = Config::with_overrides(work_dir.to_string_lossy(), 0);
        config.ensure_work_dir().unwrap();
        assert!(config.logs_dir().is_dir());
    }
}
