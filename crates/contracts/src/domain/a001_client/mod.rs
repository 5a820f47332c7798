pub mod aggregate;

pub use aggregate::{Client, ClientId, NewClient};
