//! Alert filter construction.

use chrono::{DateTime, SecondsFormat, Utc};

/// Filter set for the alerts listing endpoint.
///
/// Every field is optional; `Default` gives the unfiltered query. List
/// fields go out as repeated query keys, which is what the upstream API
/// expects for multi-valued filters. Blank strings count as "not provided".
#[derive(Debug, Clone, Default)]
pub struct AlertQuery {
    pub active: Option<bool>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: Vec<String>,
    pub message_type: Vec<String>,
    pub event: Vec<String>,
    pub code: Vec<String>,
    pub area: Vec<String>,
    pub point: Vec<String>,
    pub region: Vec<String>,
    /// Only meaningful together with `region`; passed through as-is.
    pub region_type: Option<String>,
    pub zone: Vec<String>,
    pub urgency: Vec<String>,
    pub severity: Vec<String>,
    pub certainty: Vec<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AlertQuery {
    /// At most one of area/point/region/zone may be set.
    ///
    /// Returns the first clashing pair in declaration order, or `None` when
    /// the combination is allowed.
    pub fn location_conflict(&self) -> Option<(&'static str, &'static str)> {
        let groups: [(&'static str, &Vec<String>); 4] = [
            ("area", &self.area),
            ("point", &self.point),
            ("region", &self.region),
            ("zone", &self.zone),
        ];

        let mut set = groups
            .iter()
            .filter(|(_, values)| values.iter().any(|v| !v.trim().is_empty()))
            .map(|(name, _)| *name);

        match (set.next(), set.next()) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }

    /// Flatten into wire parameters, keeping only fields that are set.
    ///
    /// List fields emit one pair per non-blank element; pair order follows
    /// field declaration order.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(active) = self.active {
            params.push(("active".to_string(), active.to_string()));
        }
        if let Some(start) = self.start {
            params.push((
                "start".to_string(),
                start.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(end) = self.end {
            params.push((
                "end".to_string(),
                end.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        push_list(&mut params, "status", &self.status);
        push_list(&mut params, "message_type", &self.message_type);
        push_list(&mut params, "event", &self.event);
        push_list(&mut params, "code", &self.code);
        push_list(&mut params, "area", &self.area);
        push_list(&mut params, "point", &self.point);
        push_list(&mut params, "region", &self.region);
        push_opt(&mut params, "region_type", self.region_type.as_deref());
        push_list(&mut params, "zone", &self.zone);
        push_list(&mut params, "urgency", &self.urgency);
        push_list(&mut params, "severity", &self.severity);
        push_list(&mut params, "certainty", &self.certainty);

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        push_opt(&mut params, "cursor", self.cursor.as_deref());

        params
    }
}

fn push_list(params: &mut Vec<(String, String)>, key: &str, values: &[String]) {
    for value in values {
        let value = value.trim();
        if !value.is_empty() {
            params.push((key.to_string(), value.to_string()));
        }
    }
}

fn push_opt(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            params.push((key.to_string(), value.to_string()));
        }
    }
}
