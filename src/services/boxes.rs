//! Box Service
//!
//! Bindings for `/api/boxes`.

use async_trait::async_trait;

use super::{CrudService, HttpClient, Resource};
use crate::error::ApiResult;
use crate::models::{BoxPayload, BoxStatus, DonationBox, EntityId, Transport};

#[derive(Clone)]
pub struct BoxService {
    resource: Resource,
}

impl BoxService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: Resource::new(http, "/api/boxes"),
        }
    }

    /// Transports leaving this box
    pub async fn outgoing_transports(&self, id: EntityId) -> ApiResult<Vec<Transport>> {
        self.resource.list_at(format!("{}/outgoing-transports", id)).await
    }

    /// Transports arriving at this box
    pub async fn incoming_transports(&self, id: EntityId) -> ApiResult<Vec<Transport>> {
        self.resource.list_at(format!("{}/incoming-transports", id)).await
    }
}

#[async_trait(?Send)]
impl CrudService<DonationBox> for BoxService {
    type Payload = BoxPayload;

    async fn list(&self) -> ApiResult<Vec<DonationBox>> {
        self.resource.list().await
    }

    async fn get(&self, id: EntityId) -> ApiResult<DonationBox> {
        self.resource.get(id).await
    }

    async fn create(&self, payload: &BoxPayload) -> ApiResult<DonationBox> {
        self.resource.create(payload).await
    }

    async fn update(&self, id: EntityId, payload: &BoxPayload) -> ApiResult<DonationBox> {
        self.resource.update(id, payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        self.resource.delete(id).await
    }

    async fn list_by_status(&self, status: BoxStatus) -> ApiResult<Vec<DonationBox>> {
        self.resource.list_at(format!("status/{}", status)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::testing::client_replying;
    use crate::services::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_by_status_path() {
        let (http, backend) = client_replying(json!([{ "id": 1, "status": "INACTIVE" }]));
        let service = BoxService::new(http);

        let boxes = service.list_by_status(BoxStatus::Inactive).await.unwrap();

        assert_eq!(boxes.len(), 1);
        assert_eq!(backend.calls()[0].path, "/api/boxes/status/INACTIVE");
    }

    #[tokio::test]
    async fn test_transport_links() {
        let (http, backend) = client_replying(json!([]));
        let service = BoxService::new(http);

        service.outgoing_transports(4).await.unwrap();
        // Second call gets an empty body, which is not a list
        let incoming = service.incoming_transports(4).await;

        let calls = backend.calls();
        assert_eq!(calls[0].path, "/api/boxes/4/outgoing-transports");
        assert_eq!(calls[1].path, "/api/boxes/4/incoming-transports");
        assert!(matches!(incoming, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_update_is_full_put() {
        let (http, backend) = client_replying(json!({ "id": 2, "donationGroup": "דרום" }));
        let service = BoxService::new(http);
        let payload = BoxPayload {
            location_name: None,
            donation_group: Some("דרום".to_string()),
            responsible_person: None,
            responsible_person_phone: None,
            association_manager: None,
            address: None,
            latitude: None,
            longitude: None,
            status: BoxStatus::Active,
            notes: None,
        };

        let updated = service.update(2, &payload).await.unwrap();

        let call = &backend.calls()[0];
        assert_eq!(call.method, Method::Put);
        assert_eq!(call.path, "/api/boxes/2");
        assert_eq!(call.body.as_ref().unwrap()["donationGroup"], "דרום");
        assert_eq!(updated.donation_group.as_deref(), Some("דרום"));
    }

    #[tokio::test]
    async fn test_boxes_have_no_transition() {
        let (http, backend) = client_replying(json!({}));
        let service = BoxService::new(http);

        let result = service.transition(1, BoxStatus::Inactive).await;

        assert_eq!(result, Err(ApiError::Unsupported("status transition")));
        assert!(backend.calls().is_empty());
    }
}
