use crate::accel::model::{BATCH_STATE_COMPLETE, BATCH_STATE_IN_PROGRESS};
use crate::storage::entity::batch::{self, Entity as Batch};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

pub struct BatchRepository;

impl BatchRepository {
    /// Batches the classifier looks at: created inside the sampling window
    /// and either still running or finished (aborted/retired carry no usable
    /// turnaround signal).
    pub async fn recent_classifiable(
        db: &DatabaseConnection,
        cutoff: i64,
    ) -> Result<Vec<batch::Model>, sea_orm::DbErr> {
        Batch::find()
            .filter(batch::Column::CreateTime.gte(cutoff))
            .filter(batch::Column::State.is_in([BATCH_STATE_IN_PROGRESS, BATCH_STATE_COMPLETE]))
            .order_by_asc(batch::Column::Id)
            .all(db)
            .await
    }

    pub async fn in_progress(
        db: &DatabaseConnection,
    ) -> Result<Vec<batch::Model>, sea_orm::DbErr> {
        Batch::find()
            .filter(batch::Column::State.eq(BATCH_STATE_IN_PROGRESS))
            .order_by_asc(batch::Column::Id)
            .all(db)
            .await
    }

    pub async fn set_expire_time(
        db: &DatabaseConnection,
        id: i32,
        expire_time: i64,
    ) -> Result<(), sea_orm::DbErr> {
        Batch::update_many()
            .col_expr(batch::Column::ExpireTime, Expr::value(expire_time))
            .filter(batch::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }

    pub async fn set_fraction_done(
        db: &DatabaseConnection,
        id: i32,
        fraction_done: f64,
    ) -> Result<(), sea_orm::DbErr> {
        Batch::update_many()
            .col_expr(batch::Column::FractionDone, Expr::value(fraction_done))
            .filter(batch::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }

    pub async fn mark_complete(
        db: &DatabaseConnection,
        id: i32,
        now: i64,
    ) -> Result<(), sea_orm::DbErr> {
        Batch::update_many()
            .col_expr(batch::Column::State, Expr::value(BATCH_STATE_COMPLETE))
            .col_expr(batch::Column::FractionDone, Expr::value(1.0))
            .col_expr(batch::Column::CompletedTime, Expr::value(Some(now)))
            .filter(batch::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }
}
