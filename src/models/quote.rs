//! Quote data models and API request/response types.
//!
//! This module defines:
//! - `Quote`: Database entity representing a stored quote
//! - `CreateQuoteRequest`: Request body for adding quotes
//! - `NewQuote`: A validated quote ready to insert
//! - `QuoteResponse`: Response body returned to clients

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

/// Format SQLite's `CURRENT_TIMESTAMP` produces and clients receive.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents a quote record from the database.
///
/// # Database Table
///
/// Maps to the `quotes` table. `id` and `timestamp` are assigned by SQLite
/// on insert and never change; quotes are never updated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Quote {
    /// Row id, assigned by `AUTOINCREMENT` so it is never reused
    pub id: i64,

    /// The quoted remark
    pub text: String,

    /// Who said it
    pub person: String,

    /// Optional surrounding context
    ///
    /// Rows written by this service always carry a value (possibly empty),
    /// but the column itself is nullable.
    pub context: Option<String>,

    /// Creation time in UTC, set by the column default
    ///
    /// Tables created before this service tracked its schema may hold NULL here.
    pub timestamp: Option<NaiveDateTime>,
}

/// Request body for adding a quote.
///
/// # JSON Example
///
/// ```json
/// {
///   "text": "Hello",
///   "person": "Alice",
///   "context": "at the standup"
/// }
/// ```
///
/// # Validation
///
/// - `text`: Required, non-blank (whitespace-only is rejected)
/// - `person`: Required, non-blank (whitespace-only is rejected)
/// - `context`: Optional, missing or `null` becomes an empty string
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub text: String,

    pub person: String,

    #[serde(default)]
    pub context: Option<String>,
}

/// A quote that passed validation and can be written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub text: String,
    pub person: String,
    pub context: String,
}

impl CreateQuoteRequest {
    /// Check required fields, returning `None` if `text` or `person` is blank.
    pub fn validate(self) -> Option<NewQuote> {
        if self.text.trim().is_empty() || self.person.trim().is_empty() {
            return None;
        }

        Some(NewQuote {
            text: self.text,
            person: self.person,
            context: self.context.unwrap_or_default(),
        })
    }
}

/// Response body for listing quotes.
///
/// # JSON Example
///
/// ```json
/// {
///   "text": "Hello",
///   "person": "Alice",
///   "context": "",
///   "timestamp": "2025-12-20 10:00:00"
/// }
/// ```
///
/// `timestamp` is `null` only for legacy rows stored without one.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub text: String,

    pub person: String,

    pub context: String,

    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

/// Convert database Quote to API QuoteResponse.
///
/// Drops the internal `id` and turns a NULL context into an empty string.
impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            text: quote.text,
            person: quote.person,
            context: quote.context.unwrap_or_default(),
            timestamp: quote.timestamp,
        }
    }
}

fn serialize_timestamp<S>(
    timestamp: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(timestamp) => serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT)),
        None => serializer.serialize_none(),
    }
}

/// Response body for a successful insert.
#[derive(Debug, Serialize)]
pub struct CreateQuoteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn request(text: &str, person: &str) -> CreateQuoteRequest {
        CreateQuoteRequest {
            text: text.to_string(),
            person: person.to_string(),
            context: None,
        }
    }

    #[test]
    fn missing_or_null_context_becomes_empty() {
        for payload in [
            json!({ "text": "Hello", "person": "Alice" }),
            json!({ "text": "Hello", "person": "Alice", "context": null }),
        ] {
            let req: CreateQuoteRequest = serde_json::from_value(payload).unwrap();

            assert_eq!(req.validate().unwrap().context, "");
        }
    }

    #[test]
    fn missing_text_fails_to_deserialize() {
        let parsed = serde_json::from_value::<CreateQuoteRequest>(json!({ "person": "Alice" }));

        assert!(parsed.is_err());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert!(request("", "Alice").validate().is_none());
        assert!(request("Hello", "   ").validate().is_none());
        assert_eq!(
            request("Hello", "Alice").validate(),
            Some(NewQuote {
                text: "Hello".to_string(),
                person: "Alice".to_string(),
                context: String::new(),
            })
        );
    }

    #[test]
    fn response_uses_storage_timestamp_format() {
        let quote = Quote {
            id: 7,
            text: "Hello".to_string(),
            person: "Alice".to_string(),
            context: None,
            timestamp: NaiveDate::from_ymd_opt(2025, 12, 20)
                .unwrap()
                .and_hms_opt(10, 0, 5),
        };

        let body = serde_json::to_value(QuoteResponse::from(quote)).unwrap();

        assert_eq!(
            body,
            json!({
                "text": "Hello",
                "person": "Alice",
                "context": "",
                "timestamp": "2025-12-20 10:00:05"
            })
        );
    }

    #[test]
    fn missing_timestamp_is_serialized_as_null() {
        let quote = Quote {
            id: 1,
            text: "Hello".to_string(),
            person: "Alice".to_string(),
            context: Some("legacy".to_string()),
            timestamp: None,
        };

        let body = serde_json::to_value(QuoteResponse::from(quote)).unwrap();

        assert_eq!(body["timestamp"], serde_json::Value::Null);
        assert_eq!(body["context"], "legacy");
    }
}
