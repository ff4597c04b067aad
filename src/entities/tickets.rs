use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 彩票实体
/// numbers 为规范化号码字符串，中奖状态不落库，查询结果时计算
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 所属期次 (指向 draws.id)
    pub draw_id: i64,
    pub numbers: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::draws::Entity",
        from = "Column::DrawId",
        to = "super::draws::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Draw,
}

impl Related<super::draws::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Draw.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
