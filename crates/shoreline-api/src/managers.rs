//! Manager CRUD endpoints.

use crate::client::PortalClient;
use crate::types::{ManagerCreate, ManagerResponse, ManagerUpdate};
use crate::Error;

impl PortalClient {
    pub async fn list_managers(&self) -> Result<Vec<ManagerResponse>, Error> {
        self.get("managers/").await
    }

    pub async fn get_manager(&self, id: &str) -> Result<ManagerResponse, Error> {
        self.get(&format!("managers/{id}")).await
    }

    /// Create a manager. The body's `region_slugs` must be non-empty;
    /// callers validate that before reaching the network.
    pub async fn create_manager(&self, body: &ManagerCreate) -> Result<ManagerResponse, Error> {
        self.post("managers/", body).await
    }

    pub async fn update_manager(
        &self,
        id: &str,
        body: &ManagerUpdate,
    ) -> Result<ManagerResponse, Error> {
        self.put(&format!("managers/{id}"), body).await
    }

    pub async fn delete_manager(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("managers/{id}")).await
    }
}
