//! Projects service models.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::deserialize::model::{unmarshal_primitive, unmarshal_required};
use crate::deserialize::{DecodableModel, ModelError, RawFields};

/// An event posted to a project's notification feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationEvent {
    /// The type of event.
    pub event: String,
    /// The target of the event.
    pub target: String,
    /// The source of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Who triggered the flow that posted the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
    /// Actionable URL users can go to in response to the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl DecodableModel for NotificationEvent {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(NotificationEvent {
            event: unmarshal_required(fields, "event")?,
            target: unmarshal_required(fields, "target")?,
            source: unmarshal_primitive(fields, "source")?,
            triggered_by: unmarshal_primitive(fields, "triggered_by")?,
            action_url: unmarshal_primitive(fields, "action_url")?,
            data: unmarshal_primitive(fields, "data")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deserialize;

    const EVENTS: &str = r#"[{"event": "project.create.failed", "target": "234234324-3444-4556-224232432", "source": "id.of.project.service.instance", "action_url": "url.for.project.documentation", "data": {"anyKey": "anyValue"}}]"#;

    #[test]
    fn decodes_notification_list() {
        let events: Vec<NotificationEvent> =
            deserialize::model_slice(EVENTS, "notifications", "NotificationEvent").unwrap();
        assert_eq!(events.len(), 1);
        let e = &events[0];
        assert_eq!(e.event, "project.create.failed");
        assert_eq!(e.source.as_deref(), Some("id.of.project.service.instance"));
        assert_eq!(e.triggered_by, None);
        assert_eq!(e.data.as_ref().unwrap()["anyKey"], "anyValue");
    }

    #[test]
    fn target_is_required() {
        let err = deserialize::model_slice::<NotificationEvent>(
            r#"[{"event": "project.create.failed"}]"#,
            "notifications",
            "NotificationEvent",
        )
        .unwrap_err();
        assert_eq!(
            err.message(),
            "Error parsing flag 'notifications' as 'model NotificationEvent'"
        );
        assert_eq!(
            err.cause().to_string(),
            "element 0: missing required field 'target'"
        );
    }

    #[test]
    fn serializes_without_absent_fields() {
        let e: NotificationEvent =
            deserialize::model(r#"{"event": "e", "target": "t"}"#, "n", "NotificationEvent")
                .unwrap();
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            serde_json::json!({"event": "e", "target": "t"})
        );
    }
}
