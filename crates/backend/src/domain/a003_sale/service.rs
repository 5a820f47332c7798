use super::{detail_repository, repository};
use crate::shared::data::db::get_connection;
use contracts::domain::a003_sale::{Sale, SaleDetail, SaleId};

pub async fn list_all() -> anyhow::Result<Vec<Sale>> {
    Ok(repository::list_all(get_connection()).await?)
}

/// Lines of a sale, `None` when the sale does not exist
pub async fn get_details(id: SaleId) -> anyhow::Result<Option<Vec<SaleDetail>>> {
    let db = get_connection();
    if repository::get_by_id(db, id).await?.is_none() {
        return Ok(None);
    }
    Ok(Some(detail_repository::list_by_sale(db, id).await?))
}
