use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::message_models::Message;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    pub author: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub body: Option<String>,
    pub author: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SingleMessageResponse {
    pub message: Option<Message>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMessageResponse {
    pub message: String,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_empty_title() {
        let payload = CreateMessageRequest {
            title: String::new(),
            body: "interesting stuff".to_string(),
            author: Uuid::new_v4(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_request_allows_absent_fields() {
        let payload = UpdateMessageRequest {
            title: None,
            body: None,
            author: None,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn update_request_rejects_empty_body() {
        let payload = UpdateMessageRequest {
            title: Some("different title".to_string()),
            body: Some(String::new()),
            author: None,
        };
        assert!(payload.validate().is_err());
    }
}
