use crate::entities::ticket_entity as tickets;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

pub struct TicketRepository;

impl TicketRepository {
    /// numbers 必须已经是规范化字符串
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        draw_id: i64,
        numbers: String,
    ) -> Result<tickets::Model, DbErr> {
        tickets::ActiveModel {
            draw_id: Set(draw_id),
            numbers: Set(numbers),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_draw_id<C: ConnectionTrait>(
        db: &C,
        draw_id: i64,
    ) -> Result<Vec<tickets::Model>, DbErr> {
        tickets::Entity::find()
            .filter(tickets::Column::DrawId.eq(draw_id))
            .order_by_asc(tickets::Column::Id)
            .all(db)
            .await
    }
}
