//! Incident endpoints. The portal exposes list and delete only;
//! incidents are filed through a separate reporting channel.

use crate::client::PortalClient;
use crate::types::IncidentResponse;
use crate::Error;

impl PortalClient {
    pub async fn list_incidents(&self) -> Result<Vec<IncidentResponse>, Error> {
        self.get("incident/").await
    }

    pub async fn delete_incident(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("incident/{id}")).await
    }
}
