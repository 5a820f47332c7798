use chrono::Utc;
use contracts::shared::logger::LogEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::try_get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            category: m.category,
            message: m.message,
        }
    }
}

/// Добавить запись в лог в фоне
pub fn log_event_internal(category: &str, message: &str) {
    tracing::info!("[{}] {}", category, message);

    let Some(db) = try_get_connection() else {
        return;
    };
    let category = category.to_string();
    let message = message.to_string();

    tokio::spawn(async move {
        if let Err(e) = log_event(db, &category, &message).await {
            tracing::warn!("Failed to write system log entry: {}", e);
        }
    });
}

pub async fn log_event<C: ConnectionTrait>(
    db: &C,
    category: &str,
    message: &str,
) -> anyhow::Result<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    };

    active.insert(db).await?;
    Ok(())
}

/// Последние записи лога, новые сверху
pub async fn recent<C: ConnectionTrait>(db: &C, limit: u64) -> anyhow::Result<Vec<LogEntry>> {
    let logs = Entity::find()
        .order_by_desc(Column::Id)
        .limit(limit)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn recent_returns_newest_first() {
        let db = connect_in_memory().await.unwrap();
        log_event(&db, "startup", "first").await.unwrap();
        log_event(&db, "u501_import_sales", "second").await.unwrap();
        log_event(&db, "u501_import_sales", "third").await.unwrap();

        let entries = recent(&db, 2).await.unwrap();
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second"]);
        assert_eq!(entries[0].category, "u501_import_sales");
    }
}
