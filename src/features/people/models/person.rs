use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::shared::constants::{
    CITY_PLACEHOLDER, EMPTY_PLACEHOLDER, NAME_PLACEHOLDER, PROVIDER_NOT_INFORMED,
};
use crate::shared::text::sanitize;

/// A document as stored, keyed by whatever field names it was written with
pub type RawDocument = Map<String, Value>;

// Accepted source keys per canonical field, in precedence order. The API
// producer and the dashboard consumer both go through `PersonRecord::from_raw`,
// so these lists are the single source of truth.
const ID_KEYS: &[&str] = &["id", "_id"];
const NAME_KEYS: &[&str] = &["nome", "name"];
const CITY_KEYS: &[&str] = &["cidade", "city"];
const PROVIDER_KEYS: &[&str] = &["provedora", "provedor", "provider", "provedoraInternet"];
const PLAN_KEYS: &[&str] = &["plano", "planoInternet", "planoContratado"];
const CONTACT_KEYS: &[&str] = &["contato", "email", "telefone", "phone"];
const UPDATED_AT_KEYS: &[&str] = &[
    "atualizadoEm",
    "updatedAt",
    "criadoEm",
    "createdAt",
    "dataAtualizacao",
];

/// Canonical person record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonRecord {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "provedora")]
    pub provider: String,
    #[serde(rename = "plano")]
    pub plan: String,
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(rename = "atualizadoEm")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Source document, kept for traceability
    #[serde(rename = "original")]
    #[schema(value_type = Object)]
    pub raw: RawDocument,
}

impl PersonRecord {
    /// Canonicalize a raw document. Never fails: missing or blank fields fall
    /// back to their placeholder, unparseable dates become `None`.
    pub fn from_raw(raw: RawDocument) -> Self {
        let id = first_present(&raw, ID_KEYS)
            .map(id_string)
            .filter(|id| !id.is_empty());

        Self {
            id,
            name: display_value(&raw, NAME_KEYS, NAME_PLACEHOLDER),
            city: display_value(&raw, CITY_KEYS, CITY_PLACEHOLDER),
            provider: display_value(&raw, PROVIDER_KEYS, PROVIDER_NOT_INFORMED),
            plan: display_value(&raw, PLAN_KEYS, EMPTY_PLACEHOLDER),
            contact: display_value(&raw, CONTACT_KEYS, EMPTY_PLACEHOLDER),
            last_updated: first_present(&raw, UPDATED_AT_KEYS).and_then(parse_timestamp),
            raw,
        }
    }
}

/// First alias holding a usable value. `null` and empty strings count as absent.
fn first_present<'a>(raw: &'a RawDocument, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
}

fn display_value(raw: &RawDocument, keys: &[&str], placeholder: &str) -> String {
    let value = sanitize(first_present(raw, keys));
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

/// Unwraps `{"$oid": "..."}` as written by extended JSON
fn id_string(value: &Value) -> String {
    match value.get("$oid") {
        Some(oid) => sanitize(Some(oid)),
        None => sanitize(Some(value)),
    }
}

/// Best-effort timestamp parsing. Accepts RFC 3339 / RFC 2822 strings, naive
/// date-times and dates (read as UTC), epoch milliseconds and the extended
/// JSON `$date` forms.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::Object(map) => match map.get("$date")? {
            Value::Object(inner) => inner
                .get("$numberLong")
                .and_then(Value::as_str)
                .and_then(|s| s.parse::<i64>().ok())
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
            other => parse_timestamp(other),
        },
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
