use async_trait::async_trait;
use contracts::domain::a001_client::{Client, NewClient};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_sale::{NewSale, NewSaleDetail, Sale, SaleDetail};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::error::StoreError;
use crate::domain::{a001_client, a002_product, a003_sale};

/// Unit of work of one import run.
///
/// Inserts are staged: they are visible to later lookups of the same session
/// but become durable only on [`ImportSession::commit`]. Dropping a session
/// without committing discards everything it staged.
#[async_trait]
pub trait ImportSession: Send {
    async fn find_client_by_name(&mut self, name: &str) -> Result<Option<Client>, StoreError>;

    async fn find_product_by_name(&mut self, name: &str) -> Result<Option<Product>, StoreError>;

    async fn insert_client(&mut self, client: NewClient) -> Result<Client, StoreError>;

    async fn insert_sale(&mut self, sale: NewSale) -> Result<Sale, StoreError>;

    async fn insert_sale_detail(&mut self, detail: NewSaleDetail)
        -> Result<SaleDetail, StoreError>;

    /// Make every staged insert durable. Returns the number of rows written.
    async fn commit(self) -> Result<u64, StoreError>;

    async fn rollback(self) -> Result<(), StoreError>;
}

/// Session over a sea-orm transaction
pub struct SeaOrmSession {
    txn: DatabaseTransaction,
    rows_written: u64,
}

impl SeaOrmSession {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, StoreError> {
        Ok(Self {
            txn: db.begin().await?,
            rows_written: 0,
        })
    }
}

#[async_trait]
impl ImportSession for SeaOrmSession {
    async fn find_client_by_name(&mut self, name: &str) -> Result<Option<Client>, StoreError> {
        Ok(a001_client::repository::find_by_name_ignore_case(&self.txn, name).await?)
    }

    async fn find_product_by_name(&mut self, name: &str) -> Result<Option<Product>, StoreError> {
        Ok(a002_product::repository::find_by_name_ignore_case(&self.txn, name).await?)
    }

    async fn insert_client(&mut self, client: NewClient) -> Result<Client, StoreError> {
        let client = a001_client::repository::insert(&self.txn, client).await?;
        self.rows_written += 1;
        Ok(client)
    }

    async fn insert_sale(&mut self, sale: NewSale) -> Result<Sale, StoreError> {
        let sale = a003_sale::repository::insert(&self.txn, sale).await?;
        self.rows_written += 1;
        Ok(sale)
    }

    async fn insert_sale_detail(
        &mut self,
        detail: NewSaleDetail,
    ) -> Result<SaleDetail, StoreError> {
        let detail = a003_sale::detail_repository::insert(&self.txn, detail).await?;
        self.rows_written += 1;
        Ok(detail)
    }

    async fn commit(self) -> Result<u64, StoreError> {
        self.txn.commit().await?;
        Ok(self.rows_written)
    }

    async fn rollback(self) -> Result<(), StoreError> {
        self.txn.rollback().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn new_client(name: &str) -> NewClient {
        NewClient {
            name: name.into(),
            document: "N/A".into(),
            email: "N/A".into(),
        }
    }

    #[tokio::test]
    async fn staged_rows_are_visible_inside_the_session() {
        let db = connect_in_memory().await.unwrap();
        let mut session = SeaOrmSession::begin(&db).await.unwrap();
        session.insert_client(new_client("Ana")).await.unwrap();

        assert!(session.find_client_by_name("ANA").await.unwrap().is_some());
        assert_eq!(session.commit().await.unwrap(), 1);
        assert_eq!(a001_client::repository::list_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rollback_discards_staged_rows() {
        let db = connect_in_memory().await.unwrap();
        let mut session = SeaOrmSession::begin(&db).await.unwrap();
        session.insert_client(new_client("Ana")).await.unwrap();
        session.rollback().await.unwrap();

        assert!(a001_client::repository::list_all(&db).await.unwrap().is_empty());
    }
}
