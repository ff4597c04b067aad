use crate::error::{AppError, AppResult};
use crate::models::DrawResponse;
use crate::repositories::DrawRepository;
use crate::utils::{NumberSampler, format_numbers, validate_ticket_numbers};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;

pub(crate) const DRAW_NOT_FOUND: &str = "Draw not found";
pub(crate) const DRAW_NOT_ACTIVE: &str = "Draw is not active";
const ACTIVE_DRAW_EXISTS: &str = "There is already an active draw";

/// 期次生命周期管理: 创建 / 关闭（开奖） / 查询
#[derive(Clone)]
pub struct DrawService {
    pool: DatabaseConnection,
    sampler: Arc<dyn NumberSampler>,
}

impl DrawService {
    pub fn new(pool: DatabaseConnection, sampler: Arc<dyn NumberSampler>) -> Self {
        Self { pool, sampler }
    }

    /// 创建新期次
    ///
    /// 先做一次只读检查快速拒绝；事务内第一条语句就是插入，并发创建由 draws
    /// 表上的部分唯一索引裁决，唯一约束冲突同样返回 Conflict。
    /// 事务内不能先读后写: SQLite 升级写锁时不等待，直接报 database is locked。
    pub async fn create_draw(&self) -> AppResult<DrawResponse> {
        if DrawRepository::has_active(&self.pool).await? {
            return Err(AppError::Conflict(ACTIVE_DRAW_EXISTS.into()));
        }

        let txn = self.pool.begin().await?;

        let draw = DrawRepository::create(&txn)
            .await
            .map_err(|e| AppError::from_db_conflict(e, ACTIVE_DRAW_EXISTS))?;

        txn.commit()
            .await
            .map_err(|e| AppError::from_db_conflict(e, ACTIVE_DRAW_EXISTS))?;

        log::info!("Draw {} created", draw.id);
        Ok(draw.into())
    }

    /// 关闭期次并生成中奖号码
    ///
    /// 逻辑:
    /// 1. 期次必须存在且为 Active
    /// 2. 由配置的生成器产生 5 个不重复号码并规范化
    /// 3. 事务内先做条件更新 (where status = active)，未命中说明已被其它请求关闭
    pub async fn close_draw(&self, draw_id: i64) -> AppResult<DrawResponse> {
        let draw = DrawRepository::find_by_id(&self.pool, draw_id)
            .await?
            .ok_or_else(|| AppError::NotFound(DRAW_NOT_FOUND.into()))?;

        if !draw.is_active() {
            return Err(AppError::Conflict(DRAW_NOT_ACTIVE.into()));
        }

        let winning = self.sampler.sample();
        validate_ticket_numbers(&winning).map_err(|e| {
            AppError::InternalError(format!(
                "Sampler {} produced invalid numbers: {e}",
                self.sampler.name()
            ))
        })?;
        let winning_numbers = format_numbers(&winning);

        let txn = self.pool.begin().await?;

        if !DrawRepository::close(&txn, draw_id, &winning_numbers).await? {
            return Err(AppError::Conflict(DRAW_NOT_ACTIVE.into()));
        }

        let closed = DrawRepository::find_by_id(&txn, draw_id)
            .await?
            .ok_or_else(|| AppError::InternalError("Draw disappeared after close".into()))?;

        txn.commit().await?;

        log::info!(
            "Draw {} closed with winning numbers {} (sampler: {})",
            draw_id,
            winning_numbers,
            self.sampler.name()
        );
        Ok(closed.into())
    }

    pub async fn get_draw(&self, draw_id: i64) -> AppResult<DrawResponse> {
        DrawRepository::find_by_id(&self.pool, draw_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(DRAW_NOT_FOUND.into()))
    }

    /// 全部期次，最新的在前
    pub async fn get_all_draws(&self) -> AppResult<Vec<DrawResponse>> {
        let draws = DrawRepository::find_all(&self.pool).await?;
        Ok(draws.into_iter().map(Into::into).collect())
    }
}
