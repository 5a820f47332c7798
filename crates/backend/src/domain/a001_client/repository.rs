use contracts::domain::a001_client::{Client, ClientId, NewClient};
use contracts::domain::common::normalize_name;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub name_key: String,
    pub document: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Client {
    fn from(m: Model) -> Self {
        Client {
            id: ClientId(m.id),
            name: m.name,
            document: m.document,
            email: m.email,
            phone: m.phone,
            address: m.address,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Client>, DbErr> {
    Ok(Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Первый клиент с таким именем (без учета регистра).
/// Matches on `name_key`, folded in Rust so non-ASCII letters compare too.
pub async fn find_by_name_ignore_case<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<Client>, DbErr> {
    let found = Entity::find()
        .filter(Column::NameKey.eq(normalize_name(name)))
        .order_by_asc(Column::Id)
        .one(db)
        .await?;
    Ok(found.map(Into::into))
}

pub async fn insert<C: ConnectionTrait>(db: &C, client: NewClient) -> Result<Client, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(client.name.clone()),
        name_key: Set(normalize_name(&client.name)),
        document: Set(client.document.clone()),
        email: Set(client.email.clone()),
        phone: Set(None),
        address: Set(None),
    };
    let inserted = active.insert(db).await?;
    Ok(client.into_client(ClientId(inserted.id)))
}
