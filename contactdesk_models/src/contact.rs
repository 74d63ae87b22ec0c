use chrono::{DateTime, Utc};
use nutype::nutype;

use crate::{
    email_address::EmailAddress,
    macros::nutype_string,
    validation::{Submitted, Violations},
};

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize,
    JsonSchema,
))]
pub struct ContactMessageId(i64);

nutype_string!(ContactMessageFullName(validate(
    len_char_min = ContactMessageFullName::MIN_LENGTH,
    len_char_max = ContactMessageFullName::MAX_LENGTH,
)));

impl ContactMessageFullName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 255;
}

nutype_string!(ContactMessageContent(validate(
    len_char_min = ContactMessageContent::MIN_LENGTH
)));

impl ContactMessageContent {
    pub const MIN_LENGTH: usize = 10;
}

/// A message left by a visitor through the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    id: Option<ContactMessageId>,
    pub full_name: ContactMessageFullName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    pub consent: bool,
    created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Creates a message that has not been stored yet.
    pub fn new(
        full_name: ContactMessageFullName,
        email: EmailAddress,
        message: ContactMessageContent,
        consent: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            full_name,
            email,
            message,
            consent,
            created_at,
        }
    }

    /// Restores a message that has been loaded from storage.
    pub fn persisted(
        id: ContactMessageId,
        full_name: ContactMessageFullName,
        email: EmailAddress,
        message: ContactMessageContent,
        consent: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(full_name, email, message, consent, created_at)
        }
    }

    pub fn into_persisted(self, id: ContactMessageId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Returns `None` until the message has been stored.
    pub fn id(&self) -> Option<ContactMessageId> {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A validated request to store a new contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageCreateRequest {
    pub full_name: ContactMessageFullName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    pub consent: Option<bool>,
}

/// The contact form as it was submitted, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormSubmission {
    pub full_name: Submitted<String>,
    pub email: Submitted<String>,
    pub message: Submitted<String>,
    pub consent: Submitted<bool>,
}

impl ContactFormSubmission {
    pub const FULL_NAME: &'static str = "fullName";
    pub const EMAIL: &'static str = "email";
    pub const MESSAGE: &'static str = "message";
    pub const CONSENT: &'static str = "consent";

    /// Checks every field and returns either the create request or the
    /// complete list of violations.
    pub fn validate(self) -> Result<ContactMessageCreateRequest, Violations> {
        let mut violations = Violations::default();

        let full_name = {
            let mut property = violations.property(Self::FULL_NAME);
            let value = property.submitted(self.full_name);
            property
                .not_blank(value.as_deref(), "Imię i nazwisko jest wymagane.")
                .length(
                    value.as_deref(),
                    Some((
                        ContactMessageFullName::MIN_LENGTH,
                        "Imię i nazwisko musi mieć co najmniej {{ limit }} znaki.",
                    )),
                    Some((
                        ContactMessageFullName::MAX_LENGTH,
                        "Imię i nazwisko nie może mieć więcej niż {{ limit }} znaków.",
                    )),
                );
            value
                .filter(|_| property.is_valid())
                .and_then(|v| ContactMessageFullName::try_new(v).ok())
        };

        let email = {
            let mut property = violations.property(Self::EMAIL);
            let value = property.submitted(self.email);
            property
                .not_blank(value.as_deref(), "Adres e-mail jest wymagany.")
                .email(value.as_deref(), "Podany adres e-mail jest nieprawidłowy.");
            value
                .filter(|_| property.is_valid())
                .and_then(|v| EmailAddress::try_new(v).ok())
        };

        let message = {
            let mut property = violations.property(Self::MESSAGE);
            let value = property.submitted(self.message);
            property
                .not_blank(value.as_deref(), "Treść wiadomości jest wymagana.")
                .length(
                    value.as_deref(),
                    Some((
                        ContactMessageContent::MIN_LENGTH,
                        "Treść wiadomości musi mieć co najmniej {{ limit }} znaków.",
                    )),
                    None,
                );
            value
                .filter(|_| property.is_valid())
                .and_then(|v| ContactMessageContent::try_new(v).ok())
        };

        let consent = {
            let mut property = violations.property(Self::CONSENT);
            let value = property.submitted(self.consent);
            property
                .not_null(
                    value.as_ref(),
                    "Zgoda na przetwarzanie danych osobowych jest wymagana.",
                )
                .is_true(value, "Musisz wyrazić zgodę na przetwarzanie danych osobowych.");
            value.filter(|_| property.is_valid())
        };

        match (full_name, email, message, consent) {
            (Some(full_name), Some(email), Some(message), Some(consent))
                if violations.is_empty() =>
            {
                Ok(ContactMessageCreateRequest {
                    full_name,
                    email,
                    message,
                    consent: Some(consent),
                })
            }
            _ => Err(violations),
        }
    }
}
