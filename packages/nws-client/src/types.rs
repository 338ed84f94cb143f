//! Wire shapes and response normalization.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Raw result of one upstream call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub headers: HeaderMap,
    pub status: StatusCode,
    pub body: String,
}

/// Body of an upstream response, parsed when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Body that did not parse as JSON, kept verbatim.
    Text(String),
}

impl Payload {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text),
        }
    }
}

/// One upstream response with its body run through the JSON parser.
#[derive(Debug, Clone)]
pub struct ApiEnvelope {
    pub headers: HeaderMap,
    pub status: StatusCode,
    pub payload: Payload,
}

impl ApiEnvelope {
    pub fn from_raw(raw: RawResponse) -> Self {
        Self {
            headers: raw.headers,
            status: raw.status,
            payload: Payload::from_text(raw.body),
        }
    }
}

/// Flat view of one alert feature's properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub effective: Option<String>,
    pub onset: Option<String>,
    pub expires: Option<String>,
    pub ends: Option<String>,
    pub severity: Option<String>,
    pub certainty: Option<String>,
    pub urgency: Option<String>,
    pub event: Option<String>,
    pub sender: Option<String>,
    #[serde(rename = "senderName")]
    pub sender_name: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
    pub response: Option<String>,
}

/// One glossary entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlossaryEntry {
    pub term: Option<String>,
    pub definition: Option<String>,
}

/// Flatten alert responses: one record per element of each feature
/// collection. Non-JSON payloads and payloads without a `features` array
/// contribute nothing.
pub fn parse_alerts(envelopes: &[ApiEnvelope]) -> Vec<AlertRecord> {
    let mut records = Vec::new();
    for envelope in envelopes {
        let Payload::Json(value) = &envelope.payload else {
            continue;
        };
        let Some(features) = value.get("features").and_then(Value::as_array) else {
            continue;
        };
        for feature in features {
            let props = feature.get("properties").cloned().unwrap_or(Value::Null);
            records.push(serde_json::from_value(props).unwrap_or_default());
        }
    }
    records
}

/// Flatten glossary responses into their entries.
pub fn parse_glossary(envelopes: &[ApiEnvelope]) -> Vec<GlossaryEntry> {
    let mut entries = Vec::new();
    for envelope in envelopes {
        let Payload::Json(value) = &envelope.payload else {
            continue;
        };
        let Some(glossary) = value.get("glossary").and_then(Value::as_array) else {
            continue;
        };
        for entry in glossary {
            entries.push(serde_json::from_value(entry.clone()).unwrap_or_default());
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(payload: Payload) -> ApiEnvelope {
        ApiEnvelope {
            headers: HeaderMap::new(),
            status: StatusCode::OK,
            payload,
        }
    }

    fn feature(event: &str, headline: &str) -> Value {
        json!({
            "geometry": { "type": "Polygon", "coordinates": [] },
            "properties": {
                "areaDesc": "Johnson County",
                "effective": "2025-09-12T01:00:00-05:00",
                "onset": "2025-09-12T01:00:00-05:00",
                "expires": "2025-09-12T02:00:00-05:00",
                "ends": null,
                "severity": "Severe",
                "certainty": "Observed",
                "urgency": "Immediate",
                "event": event,
                "sender": "w-nws.webmaster@noaa.gov",
                "senderName": "NWS Kansas City MO",
                "headline": headline,
                "description": "A severe thunderstorm was located near Olathe.",
                "instruction": "Move to an interior room.",
                "response": "Shelter"
            }
        })
    }

    #[test]
    fn test_malformed_body_falls_back_to_raw_text() {
        let raw = RawResponse {
            headers: HeaderMap::new(),
            status: StatusCode::OK,
            body: "<html>not json</html>".to_string(),
        };
        let envelope = ApiEnvelope::from_raw(raw);
        assert_eq!(
            envelope.payload,
            Payload::Text("<html>not json</html>".to_string())
        );
    }

    #[test]
    fn test_parse_alerts_yields_one_record_per_feature() {
        let body = json!({
            "features": [
                feature("Severe Thunderstorm Warning", "Storm near Olathe"),
                feature("Tornado Warning", "Tornado near Gardner"),
            ]
        });
        let records = parse_alerts(&[envelope(Payload::Json(body))]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].area_desc.as_deref(), Some("Johnson County"));
        assert_eq!(
            records[0].event.as_deref(),
            Some("Severe Thunderstorm Warning")
        );
        assert_eq!(records[0].sender_name.as_deref(), Some("NWS Kansas City MO"));
        assert_eq!(records[0].response.as_deref(), Some("Shelter"));
        assert_eq!(records[0].ends, None);
        assert_eq!(records[1].headline.as_deref(), Some("Tornado near Gardner"));
    }

    #[test]
    fn test_parse_alerts_skips_non_json_and_featureless_payloads() {
        let envelopes = vec![
            envelope(Payload::Text("upstream hiccup".to_string())),
            envelope(Payload::Json(json!({ "title": "Not Found" }))),
        ];
        assert!(parse_alerts(&envelopes).is_empty());
    }

    #[test]
    fn test_missing_properties_become_none() {
        let body = json!({ "features": [ { "properties": { "event": "Flood Watch" } } ] });
        let records = parse_alerts(&[envelope(Payload::Json(body))]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event.as_deref(), Some("Flood Watch"));
        assert_eq!(records[0].headline, None);
        assert_eq!(records[0].area_desc, None);
    }

    #[test]
    fn test_parse_glossary_flattens_entries() {
        let body = json!({
            "glossary": [
                { "term": "Advisory", "definition": "Highlights special weather conditions." },
                { "term": "Warning", "definition": "Hazardous weather is imminent." },
            ]
        });
        let entries = parse_glossary(&[envelope(Payload::Json(body))]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].term.as_deref(), Some("Advisory"));
        assert_eq!(
            entries[1].definition.as_deref(),
            Some("Hazardous weather is imminent.")
        );
    }
}
