use lottery_backend::config::DatabaseConfig;
use lottery_backend::database::{DbPool, create_pool, run_migrations};
use lottery_backend::services::{DrawService, TicketService};
use lottery_backend::utils::NumberSampler;
use std::sync::Arc;
use tempfile::TempDir;

async fn migrated_pool(url: String, max_connections: u32) -> DbPool {
    let config = DatabaseConfig {
        url,
        max_connections,
    };
    let db = create_pool(&config).await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}

/// 内存 SQLite，单连接，已迁移
pub async fn memory_db() -> DbPool {
    migrated_pool("sqlite::memory:".to_string(), 1).await
}

/// 临时目录下的 SQLite 文件库，多连接，用于并发场景
///
/// 返回的 TempDir 需要一直持有，drop 时删除数据库文件。
#[allow(dead_code)]
pub async fn file_db(max_connections: u32) -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("lottery.db").display()
    );
    let db = migrated_pool(url, max_connections).await;
    (dir, db)
}

pub fn services_on(db: DbPool, sampler: Arc<dyn NumberSampler>) -> (DrawService, TicketService) {
    (DrawService::new(db.clone(), sampler), TicketService::new(db))
}

pub async fn services(sampler: Arc<dyn NumberSampler>) -> (DrawService, TicketService) {
    services_on(memory_db().await, sampler)
}
