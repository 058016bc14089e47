use crate::storage::entity::host::{self, Entity as Host};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct HostRepository;

impl HostRepository {
    pub async fn clear_low_turnaround(db: &DatabaseConnection) -> Result<u64, sea_orm::DbErr> {
        let res = Host::update_many()
            .col_expr(host::Column::LowTurnaround, Expr::value(false))
            .filter(host::Column::LowTurnaround.eq(true))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn mark_low_turnaround(
        db: &DatabaseConnection,
        host_ids: &[i32],
    ) -> Result<u64, sea_orm::DbErr> {
        if host_ids.is_empty() {
            return Ok(0);
        }
        let res = Host::update_many()
            .col_expr(host::Column::LowTurnaround, Expr::value(true))
            .filter(host::Column::Id.is_in(host_ids.to_vec()))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
