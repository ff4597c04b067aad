use sea_orm_migration::prelude::*;

/// Draws (开奖期次)
#[derive(DeriveIden)]
enum Draws {
    Table,
    Id,
    Status,
    WinningNumbers,
    CreatedAt,
    ClosedAt,
}

/// Tickets (投注彩票)
#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    DrawId,
    Numbers,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// status 使用文本存储: active / closed
/// winning_numbers / numbers 使用规范化字符串 (升序, 逗号分隔), 例如 "3,7,12,19,36"
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 期次表
        manager
            .create_table(
                Table::create()
                    .table(Draws::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Draws::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Draws::Status)
                            .string_len(16)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Draws::WinningNumbers).string_len(64).null())
                    .col(
                        ColumnDef::new(Draws::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Draws::ClosedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 全局最多一个 active 期次（部分唯一索引, Postgres / SQLite 均支持）
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_draws_single_active \
                 ON draws (status) WHERE status = 'active'",
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_draws_created_at")
                    .table(Draws::Table)
                    .col(Draws::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // 彩票表（外键在建表时声明，SQLite 不支持 ALTER TABLE ADD CONSTRAINT）
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::DrawId).big_integer().not_null())
                    .col(ColumnDef::new(Tickets::Numbers).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_draw")
                            .from(Tickets::Table, Tickets::DrawId)
                            .to(Draws::Table, Draws::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_draw")
                    .table(Tickets::Table)
                    .col(Tickets::DrawId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除顺序：彩票 -> 期次
        manager
            .drop_table(Table::drop().if_exists().table(Tickets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(Draws::Table).to_owned())
            .await?;

        Ok(())
    }
}
