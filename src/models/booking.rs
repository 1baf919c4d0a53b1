use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::add_on::AddOnKey;

/// Raw booking form state as the front-end submits it. Every field may be
/// missing or malformed until it has been through the booking validator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(default)]
    pub package_id: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub adults: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub children: Option<f64>,
    /// Display cache only, never trusted.
    #[serde(default, deserialize_with = "lenient_number")]
    pub nights: Option<f64>,
    #[serde(default)]
    pub add_ons: Vec<String>,
}

/// Single-field transitions applied to a draft as the user fills in the form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    SelectPackage(String),
    SetCheckIn(String),
    SetCheckOut(String),
    SetAdults(f64),
    SetChildren(f64),
    ToggleAddOn(String),
    Reset,
}

impl BookingDraft {
    pub fn apply(self, update: DraftUpdate) -> Self {
        match update {
            DraftUpdate::SelectPackage(package_id) => Self { package_id, ..self },
            DraftUpdate::SetCheckIn(date) => Self {
                check_in: Some(date),
                ..self
            },
            DraftUpdate::SetCheckOut(date) => Self {
                check_out: Some(date),
                ..self
            },
            DraftUpdate::SetAdults(adults) => Self {
                adults: Some(adults),
                ..self
            },
            DraftUpdate::SetChildren(children) => Self {
                children: Some(children),
                ..self
            },
            DraftUpdate::ToggleAddOn(key) => {
                let mut add_ons = self.add_ons;
                match add_ons.iter().position(|k| *k == key) {
                    Some(index) => {
                        add_ons.remove(index);
                    }
                    None => add_ons.push(key),
                }
                Self { add_ons, ..self }
            }
            DraftUpdate::Reset => Self::default(),
        }
    }

    pub fn check_in_date(&self) -> Option<NaiveDate> {
        self.check_in.as_deref().and_then(parse_calendar_date)
    }

    pub fn check_out_date(&self) -> Option<NaiveDate> {
        self.check_out.as_deref().and_then(parse_calendar_date)
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (only its date is kept).
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

/// A booking that passed validation, with `nights` derived from its dates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBooking {
    pub package_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub nights: u32,
    pub add_ons: Vec<AddOnKey>,
}

impl NormalizedBooking {
    pub fn guests(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    PackageId,
    CheckIn,
    CheckOut,
    Adults,
    Children,
    AddOns,
}

/// Field name to the first message recorded against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<BookingField, String>);

impl FieldErrors {
    /// Later messages for an already-failed field are dropped.
    pub fn record(&mut self, field: BookingField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// One-line message for toast-style display. Two missing dates read as a
    /// single prompt; otherwise the first two messages are shown.
    pub fn summary(&self) -> String {
        let missing_in = self.get(BookingField::CheckIn) == Some(MISSING_CHECK_IN);
        let missing_out = self.get(BookingField::CheckOut) == Some(MISSING_CHECK_OUT);
        if missing_in && missing_out {
            return "Please select Check-in & Check-out dates.".to_string();
        }

        let messages: Vec<&str> = self.0.values().take(2).map(String::as_str).collect();
        if messages.is_empty() {
            "Please check the form.".to_string()
        } else {
            messages.join("\n")
        }
    }
}

pub const MISSING_CHECK_IN: &str = "Please select a check-in date";
pub const MISSING_CHECK_OUT: &str = "Please select a check-out date";
