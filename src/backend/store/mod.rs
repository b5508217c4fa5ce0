/**
 * Document Store
 *
 * Wrapper around the MongoDB database holding the three portfolio
 * collections. A `Store` is constructed once during server
 * initialization and injected into handlers through application state,
 * so tests can build their own isolated instances.
 */

use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Collection, Database,
};

use crate::backend::contact::db::ContactMessage;
use crate::backend::error::BackendError;
use crate::backend::projects::db::ProjectLink;

/// Handle to the portfolio document store
#[derive(Clone)]
pub struct Store {
    database: Database,
}

impl Store {
    /// Connect to the store
    ///
    /// The driver connects lazily; this validates the connection string
    /// and resolves the deployment topology in the background.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, BackendError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            database: client.database(database_name),
        })
    }

    /// Round-trip a ping command to confirm the deployment is reachable
    pub async fn ping(&self) -> Result<(), BackendError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Project link collection
    pub fn project_links(&self) -> Collection<ProjectLink> {
        self.database.collection("portfolioWebLinks")
    }

    /// User collection; records are schemaless documents
    pub fn users(&self) -> Collection<Document> {
        self.database.collection("userDB")
    }

    /// Contact message collection
    pub fn messages(&self) -> Collection<ContactMessage> {
        self.database.collection("messages")
    }
}

/// Parse a store-native id from a path parameter
///
/// Malformed ids are a validation failure, not a store error; they never
/// reach the database.
pub fn parse_object_id(id: &str) -> Result<ObjectId, BackendError> {
    ObjectId::parse_str(id).map_err(|_| BackendError::validation(format!("invalid record id: {id}")))
}
