//! Flow endpoints: CRUD over JSON plus the raw YAML document routes.

use crate::client::core::{decode_any_status, decode_if_status, text_if_status, ApiClient};
use crate::render;
use crate::types::flow::{CreateFlow, Flow, UpdateFlow};
use crate::Result;
use reqwest::Method;

impl ApiClient {
    /// `GET /api/flows`. Returns the listing payload whatever the HTTP status
    /// is. Kept as loose JSON: the demo only prints it, and the server may
    /// wrap the array in an envelope.
    pub async fn list_flows(&self) -> Result<serde_json::Value> {
        let response = self.transport.get("/api/flows").await?;
        render::print_response("List All Flows", &response);
        decode_any_status(&response)
    }

    /// `GET /api/flows/{id}`. `None` unless the server answers 200.
    pub async fn flow(&self, id: i64) -> Result<Option<Flow>> {
        let response = self.transport.get(&format!("/api/flows/{id}")).await?;
        render::print_response(&format!("Get Flow by ID ({id})"), &response);
        decode_if_status(&response, 200)
    }

    /// `GET /api/flows/external/{externalId}`. `None` unless 200.
    pub async fn flow_by_external_id(&self, external_id: &str) -> Result<Option<Flow>> {
        let response = self
            .transport
            .get(&format!("/api/flows/external/{external_id}"))
            .await?;
        render::print_response(&format!("Get Flow by External ID ({external_id})"), &response);
        decode_if_status(&response, 200)
    }

    /// `POST /api/flows`. `None` unless the server answers 201.
    pub async fn create_flow(&self, flow: CreateFlow) -> Result<Option<Flow>> {
        let body = serde_json::to_value(&flow)?;
        let response = self
            .transport
            .request(Method::POST, "/api/flows", Some(&body))
            .await?;
        render::print_response(&format!("Create Flow ({})", flow.name), &response);
        decode_if_status(&response, 201)
    }

    /// `PUT /api/flows/{id}` with a partial update. `None` unless 200.
    pub async fn update_flow(&self, id: i64, updates: UpdateFlow) -> Result<Option<Flow>> {
        let body = serde_json::to_value(&updates)?;
        let response = self
            .transport
            .request(Method::PUT, &format!("/api/flows/{id}"), Some(&body))
            .await?;
        render::print_response(&format!("Update Flow ({id})"), &response);
        decode_if_status(&response, 200)
    }

    /// `DELETE /api/flows/{id}`. True exactly when the server answers 204.
    pub async fn delete_flow(&self, id: i64) -> Result<bool> {
        let response = self
            .transport
            .request(Method::DELETE, &format!("/api/flows/{id}"), None)
            .await?;
        render::print_response(&format!("Delete Flow ({id})"), &response);
        Ok(response.status == 204)
    }

    /// `GET /api/flows/{id}/flow.yaml`, as raw text. `None` unless 200.
    pub async fn flow_yaml(&self, id: i64) -> Result<Option<String>> {
        self.raw_yaml(
            &format!("/api/flows/{id}/flow.yaml"),
            &format!("Get Raw Flow YAML ({id})"),
        )
        .await
    }

    /// `GET /api/flows/{id}/planspace.yaml`, as raw text. `None` unless 200.
    pub async fn planspace_yaml(&self, id: i64) -> Result<Option<String>> {
        self.raw_yaml(
            &format!("/api/flows/{id}/planspace.yaml"),
            &format!("Get Raw PlanSpace YAML ({id})"),
        )
        .await
    }

    /// `GET /api/flows/external/{externalId}/flow.yaml`.
    pub async fn flow_yaml_by_external_id(&self, external_id: &str) -> Result<Option<String>> {
        self.raw_yaml(
            &format!("/api/flows/external/{external_id}/flow.yaml"),
            &format!("Get Raw Flow YAML by External ID ({external_id})"),
        )
        .await
    }

    /// `GET /api/flows/external/{externalId}/planspace.yaml`.
    pub async fn planspace_yaml_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<String>> {
        self.raw_yaml(
            &format!("/api/flows/external/{external_id}/planspace.yaml"),
            &format!("Get Raw PlanSpace YAML by External ID ({external_id})"),
        )
        .await
    }

    async fn raw_yaml(&self, path: &str, title: &str) -> Result<Option<String>> {
        let response = self.transport.get(path).await?;
        render::print_response(title, &response);
        Ok(text_if_status(&response, 200))
    }
}
