use std::sync::Arc;

use sqlx::SqlitePool;

use crate::banking::PayoutAccount;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::SqliteReservationStore;
use crate::seating::ReservationStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 连接池实现浅拷贝，Clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | seats | Arc<dyn ReservationStore> | 座位预订存储 |
/// | payout | Option<PayoutAccount> | 收款账户 (IBAN) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 座位预订存储
    pub seats: Arc<dyn ReservationStore>,
    /// 收款账户，启动时由 PAYMENT_ACCOUNT 解析
    pub payout: Option<PayoutAccount>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("payout", &self.payout)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let payout = config
            .payment_account
            .as_deref()
            .and_then(|account| PayoutAccount::from_domestic(account, &config.payment_currency));
        Self {
            seats: Arc::new(SqliteReservationStore::new(pool.clone())),
            config,
            pool,
            payout,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/session.db) 和迁移
    /// 3. 收款账户
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir()?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        let state = Self::new(config.clone(), db.pool);
        match &state.payout {
            Some(payout) => tracing::info!(iban = %payout.iban, currency = %payout.currency, "Payout account configured"),
            None => tracing::info!("No payout account, bills carry no payment instructions"),
        }
        Ok(state)
    }

    /// 替换座位存储 (测试或临时会话使用内存存储)
    pub fn with_seat_store(mut self, store: Arc<dyn ReservationStore>) -> Self {
        self.seats = store;
        self
    }
}
