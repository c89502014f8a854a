use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// One catalog document: a switch family and its hardware variants.
///
/// Every record type rejects keys it does not know, so a typo in the
/// catalog fails decoding instead of being silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Definition {
    pub name: String,
    pub models: Vec<Model>,
    pub last_eos_revision_supported: String,
    pub pdf_datasheet_url: String,
    pub end_of_sale_announced: bool,
    #[serde(deserialize_with = "catalog_date")]
    pub end_of_sale_date: Option<NaiveDate>,
    pub end_of_sale_url: String,
    #[serde(deserialize_with = "catalog_date")]
    pub end_of_support_date: Option<NaiveDate>,
    pub end_of_support_url: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Model {
    pub name: String,
    pub typical_watts: f64,
    pub max_watts: f64,
    pub rack_units: i64,
    pub cpu_cores: i64,
    pub cpu_ram_gb: i64,
    pub cpu_flash_gb: i64,
    pub ports: Vec<Port>,
    pub switch_chip: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Port {
    #[serde(rename = "type")]
    pub port_type: String,
    pub count: i64,
    pub note: String,
}

impl Definition {
    pub fn port_count(&self) -> usize {
        self.models.iter().map(|m| m.ports.len()).sum()
    }
}

/// Accepts a bare date, a space-separated date and time, or an RFC 3339
/// timestamp (either case of `T`), and keeps the calendar date.
fn catalog_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_catalog_date(value.trim())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date {:?}", value))),
    }
}

fn parse_catalog_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(&value.replacen('t', "T", 1))
        .ok()
        .map(|dt| dt.date_naive())
}
