use crate::entities::{DrawStatus, draw_entity as draws};
use chrono::Utc;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

pub struct DrawRepository;

impl DrawRepository {
    /// 插入一条 Active 期次并返回完整记录
    pub async fn create<C: ConnectionTrait>(db: &C) -> Result<draws::Model, DbErr> {
        draws::ActiveModel {
            status: Set(DrawStatus::Active),
            winning_numbers: Set(None),
            created_at: Set(Utc::now()),
            closed_at: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i64,
    ) -> Result<Option<draws::Model>, DbErr> {
        draws::Entity::find_by_id(id).one(db).await
    }

    /// 读取期次并加共享锁 (Postgres: FOR SHARE)，持有到事务结束
    ///
    /// 并发的条件更新会等待该锁释放；SQLite 不支持行锁，写事务本身已串行化。
    pub async fn find_by_id_shared<C: ConnectionTrait>(
        db: &C,
        id: i64,
    ) -> Result<Option<draws::Model>, DbErr> {
        draws::Entity::find_by_id(id).lock_shared().one(db).await
    }

    /// 按创建时间倒序（同一时刻按 id 倒序）
    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<draws::Model>, DbErr> {
        draws::Entity::find()
            .order_by_desc(draws::Column::CreatedAt)
            .order_by_desc(draws::Column::Id)
            .all(db)
            .await
    }

    /// 整条记录更新（status / winning_numbers / closed_at）
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        draw: draws::Model,
    ) -> Result<draws::Model, DbErr> {
        draws::ActiveModel {
            id: Unchanged(draw.id),
            status: Set(draw.status),
            winning_numbers: Set(draw.winning_numbers),
            created_at: Unchanged(draw.created_at),
            closed_at: Set(draw.closed_at),
        }
        .update(db)
        .await
    }

    pub async fn has_active<C: ConnectionTrait>(db: &C) -> Result<bool, DbErr> {
        let count = draws::Entity::find()
            .filter(draws::Column::Status.eq(DrawStatus::Active))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// 关闭期次: 仅当当前仍为 Active 时才会更新
    ///
    /// 返回 false 表示没有行被更新（期次不存在或已被关闭）
    pub async fn close<C: ConnectionTrait>(
        db: &C,
        id: i64,
        winning_numbers: &str,
    ) -> Result<bool, DbErr> {
        let result = draws::Entity::update_many()
            .set(draws::ActiveModel {
                status: Set(DrawStatus::Closed),
                winning_numbers: Set(Some(winning_numbers.to_string())),
                closed_at: Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(draws::Column::Id.eq(id))
            .filter(draws::Column::Status.eq(DrawStatus::Active))
            .exec(db)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
