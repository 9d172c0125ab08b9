//! Region endpoints, including the manager assignment pair.

use crate::client::PortalClient;
use crate::types::{LocationsPatch, RegionCreate, RegionResponse, RegionUpdate};
use crate::Error;

impl PortalClient {
    pub async fn list_regions(&self) -> Result<Vec<RegionResponse>, Error> {
        self.get("regions/").await
    }

    pub async fn get_region(&self, id: &str) -> Result<RegionResponse, Error> {
        self.get(&format!("regions/{id}")).await
    }

    pub async fn create_region(&self, body: &RegionCreate) -> Result<RegionResponse, Error> {
        self.post("regions/", body).await
    }

    pub async fn update_region(
        &self,
        id: &str,
        body: &RegionUpdate,
    ) -> Result<RegionResponse, Error> {
        self.put(&format!("regions/{id}"), body).await
    }

    /// Partial update touching only the `locations` field.
    pub async fn update_region_locations(
        &self,
        id: &str,
        body: &LocationsPatch,
    ) -> Result<RegionResponse, Error> {
        self.patch(&format!("regions/{id}/update-locations"), body)
            .await
    }

    /// Delete a region. The server cascades deletion of its incidents.
    pub async fn delete_region(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("regions/{id}")).await
    }

    // ── Manager assignment (edge mutations) ──────────────────────────
    //
    // No request body; the response is the updated parent Region and is
    // the source of truth for that region's manager list.

    pub async fn assign_manager(
        &self,
        region_id: &str,
        manager_id: &str,
    ) -> Result<RegionResponse, Error> {
        self.post_empty(&format!("regions/{region_id}/managers/{manager_id}"))
            .await
    }

    pub async fn unassign_manager(
        &self,
        region_id: &str,
        manager_id: &str,
    ) -> Result<RegionResponse, Error> {
        self.delete_with_response(&format!("regions/{region_id}/managers/{manager_id}"))
            .await
    }
}
