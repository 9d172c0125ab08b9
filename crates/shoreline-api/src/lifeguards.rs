//! Lifeguard CRUD endpoints plus the phone lookup.

use crate::client::PortalClient;
use crate::types::{LifeguardCreate, LifeguardResponse, LifeguardUpdate};
use crate::Error;

impl PortalClient {
    pub async fn list_lifeguards(&self) -> Result<Vec<LifeguardResponse>, Error> {
        self.get("lifeguards/").await
    }

    pub async fn get_lifeguard(&self, id: &str) -> Result<LifeguardResponse, Error> {
        self.get(&format!("lifeguards/{id}")).await
    }

    /// Look up a lifeguard by phone number (exact match, server-side).
    pub async fn get_lifeguard_by_phone(&self, phone: &str) -> Result<LifeguardResponse, Error> {
        self.get(&format!("lifeguards/phone/{phone}")).await
    }

    pub async fn create_lifeguard(&self, body: &LifeguardCreate) -> Result<LifeguardResponse, Error> {
        self.post("lifeguards/", body).await
    }

    pub async fn update_lifeguard(
        &self,
        id: &str,
        body: &LifeguardUpdate,
    ) -> Result<LifeguardResponse, Error> {
        self.put(&format!("lifeguards/{id}"), body).await
    }

    pub async fn delete_lifeguard(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("lifeguards/{id}")).await
    }
}
