use super::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a001_client::Client;

pub async fn list_all() -> anyhow::Result<Vec<Client>> {
    Ok(repository::list_all(get_connection()).await?)
}
