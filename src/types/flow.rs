//! Flow records and the create/update request bodies.

use serde::{Deserialize, Serialize};

/// A flow as the server returns it.
///
/// The server owns the record's lifecycle; this is a read-side view. Fields
/// the server adds beyond these are ignored on deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct Flow {
    pub id: i64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub flow_yaml: Option<String>,
    #[serde(default)]
    pub plan_yaml: Option<String>,
}

/// Body for `POST /api/flows`.
///
/// Optional fields are omitted from the serialized body entirely when unset,
/// never sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFlow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_yaml: Option<String>,
}

impl CreateFlow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            external_id: None,
            flow_yaml: None,
            plan_yaml: None,
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn flow_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.flow_yaml = Some(yaml.into());
        self
    }

    pub fn plan_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.plan_yaml = Some(yaml.into());
        self
    }
}

/// Partial-update body for `PUT /api/flows/{id}`.
///
/// Same omission rule as [`CreateFlow`]: only the fields that were set appear
/// in the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_yaml: Option<String>,
}

impl UpdateFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn flow_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.flow_yaml = Some(yaml.into());
        self
    }

    pub fn plan_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.plan_yaml = Some(yaml.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_flow_omits_unset_fields() {
        let body = serde_json::to_value(CreateFlow::new("X")).unwrap();
        assert_eq!(body, json!({"name": "X"}));
    }

    #[test]
    fn create_flow_includes_exactly_what_was_set() {
        let body = serde_json::to_value(CreateFlow::new("X").external_id("e")).unwrap();
        assert_eq!(body, json!({"name": "X", "external_id": "e"}));
    }

    #[test]
    fn update_flow_serializes_only_set_fields() {
        let body = serde_json::to_value(UpdateFlow::new().name("renamed")).unwrap();
        assert_eq!(body, json!({"name": "renamed"}));
    }

    #[test]
    fn flow_tolerates_missing_optionals_and_unknown_fields() {
        let flow: Flow =
            serde_json::from_value(json!({"id": 7, "name": "n", "created_at": "2024-01-01"}))
                .unwrap();
        assert_eq!(flow.id, 7);
        assert!(flow.external_id.is_none());
        assert!(flow.flow_yaml.is_none());
    }
}
