use crate::accel::model::BOOST_PRIORITY;
use crate::storage::entity::workunit::{self, Entity as Workunit};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

pub struct WorkunitRepository;

impl WorkunitRepository {
    pub async fn for_batch(
        db: &DatabaseConnection,
        batch_id: i32,
    ) -> Result<Vec<workunit::Model>, sea_orm::DbErr> {
        Workunit::find()
            .filter(workunit::Column::BatchId.eq(batch_id))
            .order_by_asc(workunit::Column::Id)
            .all(db)
            .await
    }

    /// Apply one pass's decisions for a workunit as a single update:
    /// optionally ask the transitioner for one more replica, optionally raise
    /// the priority, and wake the transitioner immediately.
    pub async fn apply_boost(
        db: &DatabaseConnection,
        id: i32,
        add_replica: bool,
        raise_priority: bool,
        now: i64,
    ) -> Result<(), sea_orm::DbErr> {
        let mut update = Workunit::update_many()
            .col_expr(workunit::Column::TransitionTime, Expr::value(now))
            .filter(workunit::Column::Id.eq(id));
        if add_replica {
            update = update.col_expr(
                workunit::Column::TargetNresults,
                Expr::col(workunit::Column::TargetNresults).add(1),
            );
        }
        if raise_priority {
            update = update.col_expr(workunit::Column::Priority, Expr::value(BOOST_PRIORITY));
        }
        update.exec(db).await?;
        Ok(())
    }

    /// Undo any prior acceleration for a batch.
    pub async fn reset_priorities(
        db: &DatabaseConnection,
        batch_id: i32,
    ) -> Result<u64, sea_orm::DbErr> {
        let res = Workunit::update_many()
            .col_expr(workunit::Column::Priority, Expr::value(0))
            .filter(workunit::Column::BatchId.eq(batch_id))
            .filter(workunit::Column::Priority.ne(0))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
