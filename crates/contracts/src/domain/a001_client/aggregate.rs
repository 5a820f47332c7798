use serde::{Deserialize, Serialize};

crate::entity_id!(ClientId);

/// Покупатель
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,

    pub name: String,

    pub document: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// Client that has not been written to the store yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub document: String,
    pub email: String,
}

impl NewClient {
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            document: self.document,
            email: self.email,
            phone: None,
            address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_has_no_contact_extras() {
        let client = NewClient {
            name: "Ana Gómez".into(),
            document: "N/A".into(),
            email: "ana@mail.com".into(),
        }
        .into_client(ClientId(1));
        assert_eq!(client.id, ClientId(1));
        assert_eq!(client.email, "ana@mail.com");
        assert!(client.phone.is_none());
        assert!(client.address.is_none());
    }
}
