use serde::{Deserialize, Serialize};
use std::fmt;

/// Values currently held by the signup form. May be partially filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gdpr_consent_and_updates: bool,
    #[serde(default)]
    pub want_tips: bool,
}

impl SignupRequest {
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.name = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Phone(value) => self.phone = value,
            FieldEdit::Consent(value) => self.gdpr_consent_and_updates = value,
            FieldEdit::WantTips(value) => self.want_tips = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    GdprConsentAndUpdates,
    WantTips,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::GdprConsentAndUpdates,
        Field::WantTips,
    ];

    /// Key used for this field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::GdprConsentAndUpdates => "gdprConsentAndUpdates",
            Field::WantTips => "wantTips",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::GdprConsentAndUpdates => "Course updates and data processing consent",
            Field::WantTips => "AI productivity tips",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user input event on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Phone(String),
    Consent(bool),
    WantTips(bool),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Name(_) => Field::Name,
            FieldEdit::Email(_) => Field::Email,
            FieldEdit::Phone(_) => Field::Phone,
            FieldEdit::Consent(_) => Field::GdprConsentAndUpdates,
            FieldEdit::WantTips(_) => Field::WantTips,
        }
    }
}

/// Body posted to the webhook: the form values plus submission metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    #[serde(flatten)]
    pub request: SignupRequest,
    pub submitted_at: String,
    pub source: String,
}

impl SignupPayload {
    pub fn new(
        request: &SignupRequest,
        submitted_at: chrono::DateTime<chrono::Utc>,
        source: &str,
    ) -> Self {
        Self {
            request: request.clone(),
            submitted_at: submitted_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Result of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Pending,
    Success(SubmissionReceipt),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl From<Option<&SubmissionOutcome>> for FormStatus {
    fn from(outcome: Option<&SubmissionOutcome>) -> Self {
        match outcome {
            None => FormStatus::Idle,
            Some(SubmissionOutcome::Pending) => FormStatus::Submitting,
            Some(SubmissionOutcome::Success(_)) => FormStatus::Success,
            Some(SubmissionOutcome::Failure(reason)) => FormStatus::Error(reason.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anna() -> SignupRequest {
        SignupRequest {
            name: "Anna Weber".to_string(),
            email: "anna@uni.ac.at".to_string(),
            phone: "+436601234567".to_string(),
            gdpr_consent_and_updates: true,
            want_tips: false,
        }
    }

    #[test]
    fn test_payload_wire_format() {
        let at = chrono::Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let payload = SignupPayload::new(&anna(), at, "landing");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Anna Weber",
                "email": "anna@uni.ac.at",
                "phone": "+436601234567",
                "gdprConsentAndUpdates": true,
                "wantTips": false,
                "submittedAt": "2025-03-01T09:30:00.000Z",
                "source": "landing"
            })
        );
    }

    #[test]
    fn test_payload_receiver_recovers_fields() {
        let request = SignupRequest {
            name: "Jürgen O'Neil-Straß".to_string(),
            want_tips: true,
            ..anna()
        };
        let payload = SignupPayload::new(&request, chrono::Utc::now(), "landing");
        let wire = serde_json::to_string(&payload).unwrap();
        let received: SignupPayload = serde_json::from_str(&wire).unwrap();

        assert_eq!(received.request, request);
        assert_eq!(received, payload);
    }

    #[test]
    fn test_want_tips_defaults_to_false_when_absent() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"name":"Anna","email":"a@b.at","phone":"12345678","gdprConsentAndUpdates":true}"#,
        )
        .unwrap();
        assert!(!request.want_tips);
    }

    #[test]
    fn test_status_follows_outcome() {
        assert_eq!(FormStatus::from(None), FormStatus::Idle);
        assert_eq!(
            FormStatus::from(Some(&SubmissionOutcome::Pending)),
            FormStatus::Submitting
        );
        assert_eq!(
            FormStatus::from(Some(&SubmissionOutcome::Failure("boom".to_string()))),
            FormStatus::Error("boom".to_string())
        );
    }
}
