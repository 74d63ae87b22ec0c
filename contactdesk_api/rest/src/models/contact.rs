use anyhow::Context;
use chrono::SecondsFormat;
use contactdesk_core_contact_contracts::ContactMessageListResult;
use contactdesk_models::{
    contact::{
        ContactFormSubmission, ContactMessage, ContactMessageContent, ContactMessageFullName,
        ContactMessageId,
    },
    email_address::EmailAddress,
    validation::Submitted,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::ApiPaginationMeta;

/// The contact form. Every field is required.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactFormRequest {
    /// Full name of the sender (2 to 255 characters)
    #[schemars(with = "String")]
    pub full_name: Option<Value>,
    /// Email address of the sender
    #[schemars(with = "EmailAddress")]
    pub email: Option<Value>,
    /// The message (at least 10 characters)
    #[schemars(with = "String")]
    pub message: Option<Value>,
    /// Consent to the processing of personal data, must be `true`
    #[schemars(with = "bool")]
    pub consent: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ApiContactFormParseError {
    #[error("Syntax error")]
    Syntax(#[from] serde_json::Error),
    #[error("The request body must be a JSON object.")]
    NotAnObject,
}

impl ApiContactFormRequest {
    /// Decodes a request body. An empty body, `null` and `[]` are treated
    /// like an empty object.
    pub fn parse(body: &[u8]) -> Result<Self, ApiContactFormParseError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(body)? {
            Value::Null => Ok(Self::default()),
            Value::Array(items) if items.is_empty() => Ok(Self::default()),
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(ApiContactFormParseError::NotAnObject),
        }
    }
}

impl From<ApiContactFormRequest> for ContactFormSubmission {
    fn from(value: ApiContactFormRequest) -> Self {
        Self {
            full_name: string(value.full_name),
            email: string(value.email),
            message: string(value.message),
            consent: boolean(value.consent),
        }
    }
}

fn string(value: Option<Value>) -> Submitted<String> {
    match value {
        None | Some(Value::Null) => Submitted::Missing,
        Some(Value::String(value)) => Submitted::Value(value),
        Some(_) => Submitted::InvalidType("string"),
    }
}

fn boolean(value: Option<Value>) -> Submitted<bool> {
    match value {
        None | Some(Value::Null) => Submitted::Missing,
        Some(Value::Bool(value)) => Submitted::Value(value),
        Some(_) => Submitted::InvalidType("bool"),
    }
}

/// A stored contact message.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactMessage {
    pub id: ContactMessageId,
    pub full_name: ContactMessageFullName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    /// Whether the sender consented to the processing of personal data
    pub consent: bool,
    /// Time of submission (RFC 3339)
    pub created_at: String,
}

impl TryFrom<ContactMessage> for ApiContactMessage {
    type Error = anyhow::Error;

    fn try_from(value: ContactMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id().context("Contact message has not been stored")?,
            created_at: value
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, false),
            full_name: value.full_name,
            email: value.email,
            message: value.message,
            consent: value.consent,
        })
    }
}

/// One page of contact messages, newest first.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiContactMessageList {
    pub items: Vec<ApiContactMessage>,
    pub meta: ApiPaginationMeta,
}

impl TryFrom<ContactMessageListResult> for ApiContactMessageList {
    type Error = anyhow::Error;

    fn try_from(value: ContactMessageListResult) -> Result<Self, Self::Error> {
        Ok(Self {
            items: value
                .messages
                .into_iter()
                .map(TryInto::try_into)
                .collect::<anyhow::Result<_>>()?,
            meta: ApiPaginationMeta {
                page: *value.pagination.page,
                limit: *value.pagination.limit,
                total: value.total,
                pages: value.pages,
            },
        })
    }
}
