use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 每个 (judge_id, entry_id) 只允许一条分配记录，
        // 重复分配依赖该约束做幂等跳过
        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_judge_entry")
                    .table(Assignments::Table)
                    .col(Assignments::JudgeId)
                    .col(Assignments::EntryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 每个 (judge_id, entry_id) 只允许一条评审记录，
        // 并发首次访问时靠该约束保证懒创建不产生重复行
        manager
            .create_index(
                Index::create()
                    .name("idx_evaluations_judge_entry")
                    .table(Evaluations::Table)
                    .col(Evaluations::JudgeId)
                    .col(Evaluations::EntryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 记分板按作品聚合可计入评审，走该索引
        manager
            .create_index(
                Index::create()
                    .name("idx_evaluations_entry_status")
                    .table(Evaluations::Table)
                    .col(Evaluations::EntryId)
                    .col(Evaluations::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_evaluations_entry_status")
                    .table(Evaluations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_evaluations_judge_entry")
                    .table(Evaluations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_assignments_judge_entry")
                    .table(Assignments::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    JudgeId,
    EntryId,
}

#[derive(DeriveIden)]
enum Evaluations {
    Table,
    JudgeId,
    EntryId,
    Status,
}
