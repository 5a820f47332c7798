//! In-memory [`ImportSession`] for executor tests.

use async_trait::async_trait;
use contracts::domain::a001_client::{Client, ClientId, NewClient};
use contracts::domain::a002_product::{Product, ProductId};
use contracts::domain::a003_sale::{
    NewSale, NewSaleDetail, Sale, SaleDetail, SaleDetailId, SaleId,
};
use contracts::domain::common::normalize_name;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::StoreError;
use super::session::ImportSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Commit,
    ProductLookup,
}

#[derive(Debug, Default, Clone)]
struct Tables {
    clients: Vec<Client>,
    products: Vec<Product>,
    sales: Vec<Sale>,
    details: Vec<SaleDetail>,
}

#[derive(Debug, Default)]
struct State {
    committed: Tables,
    next_id: i64,
    client_lookups: usize,
    product_lookups: usize,
    commits: usize,
    rollbacks: usize,
    fail_at: Option<FailPoint>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn begin(&self) -> MemorySession {
        MemorySession {
            store: self.clone(),
            staged: Tables::default(),
        }
    }

    pub fn fail_at(&self, point: FailPoint) {
        self.lock().fail_at = Some(point);
    }

    pub fn add_product(&self, name: &str, price: &str) -> Product {
        let mut state = self.lock();
        let product = Product {
            id: ProductId(state.next_id()),
            name: name.into(),
            description: None,
            price: Decimal::from_str(price).unwrap(),
            stock: 100,
        };
        state.committed.products.push(product.clone());
        product
    }

    pub fn add_client(&self, name: &str) -> Client {
        let mut state = self.lock();
        let client = NewClient {
            name: name.into(),
            document: "N/A".into(),
            email: "N/A".into(),
        }
        .into_client(ClientId(state.next_id()));
        state.committed.clients.push(client.clone());
        client
    }

    pub fn product(&self, name: &str) -> Product {
        self.lock()
            .committed
            .products
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .unwrap()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.lock().committed.clients.clone()
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.lock().committed.sales.clone()
    }

    pub fn details(&self) -> Vec<SaleDetail> {
        self.lock().committed.details.clone()
    }

    pub fn client_lookups(&self) -> usize {
        self.lock().client_lookups
    }

    pub fn product_lookups(&self) -> usize {
        self.lock().product_lookups
    }

    pub fn commits(&self) -> usize {
        self.lock().commits
    }

    pub fn rollbacks(&self) -> usize {
        self.lock().rollbacks
    }
}

/// Session whose inserts stay in `staged` until commit
pub struct MemorySession {
    store: MemoryStore,
    staged: Tables,
}

#[async_trait]
impl ImportSession for MemorySession {
    async fn find_client_by_name(&mut self, name: &str) -> Result<Option<Client>, StoreError> {
        let key = normalize_name(name);
        let mut state = self.store.lock();
        state.client_lookups += 1;
        Ok(state
            .committed
            .clients
            .iter()
            .chain(self.staged.clients.iter())
            .find(|c| normalize_name(&c.name) == key)
            .cloned())
    }

    async fn find_product_by_name(&mut self, name: &str) -> Result<Option<Product>, StoreError> {
        let key = normalize_name(name);
        let mut state = self.store.lock();
        state.product_lookups += 1;
        if state.fail_at == Some(FailPoint::ProductLookup) {
            return Err(StoreError::Backend("product table unavailable".into()));
        }
        Ok(state
            .committed
            .products
            .iter()
            .find(|p| normalize_name(&p.name) == key)
            .cloned())
    }

    async fn insert_client(&mut self, client: NewClient) -> Result<Client, StoreError> {
        let id = self.store.lock().next_id();
        let client = client.into_client(ClientId(id));
        self.staged.clients.push(client.clone());
        Ok(client)
    }

    async fn insert_sale(&mut self, sale: NewSale) -> Result<Sale, StoreError> {
        let id = self.store.lock().next_id();
        let sale = sale.into_sale(SaleId(id));
        self.staged.sales.push(sale.clone());
        Ok(sale)
    }

    async fn insert_sale_detail(
        &mut self,
        detail: NewSaleDetail,
    ) -> Result<SaleDetail, StoreError> {
        let id = self.store.lock().next_id();
        let detail = detail.into_detail(SaleDetailId(id));
        self.staged.details.push(detail.clone());
        Ok(detail)
    }

    async fn commit(self) -> Result<u64, StoreError> {
        let mut state = self.store.lock();
        if state.fail_at == Some(FailPoint::Commit) {
            return Err(StoreError::Backend("disk I/O error".into()));
        }
        let written =
            self.staged.clients.len() + self.staged.sales.len() + self.staged.details.len();
        state.committed.clients.extend(self.staged.clients);
        state.committed.sales.extend(self.staged.sales);
        state.committed.details.extend(self.staged.details);
        state.commits += 1;
        Ok(written as u64)
    }

    async fn rollback(self) -> Result<(), StoreError> {
        self.store.lock().rollbacks += 1;
        Ok(())
    }
}
