//! Raw event and contact data models.
//! These mirror what a host surface reports for one input event, before any
//! normalization happens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical lifecycle phase every raw event label is mapped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Move,
    End,
    /// Host-initiated invalidation (system gesture took over, etc).
    Cancel,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Move => "move",
            Self::End => "end",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one physical contact, stable while that contact lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
    /// Identifier used for the single-pointer (mouse) fallback path.
    pub const POINTER: ContactId = ContactId(0);
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One contact as reported by the host in a touch list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDatum {
    pub identifier: ContactId,
    #[serde(default)]
    pub client_x: f64,
    #[serde(default)]
    pub client_y: f64,
    #[serde(default)]
    pub page_x: f64,
    #[serde(default)]
    pub page_y: f64,
}

impl ContactDatum {
    pub fn at(identifier: i64, x: f64, y: f64) -> Self {
        Self {
            identifier: ContactId(identifier),
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
        }
    }
}

/// A raw event batch as delivered by the host surface.
///
/// `touches` absent means the host has no multi-contact structure and the
/// single-pointer fallback applies, with coordinates taken from `pointer`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    /// Milliseconds, host clock.
    #[serde(default)]
    pub time_stamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touches: Option<Vec<ContactDatum>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_touches: Option<Vec<ContactDatum>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_touches: Option<Vec<ContactDatum>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<ContactDatum>,
}

impl RawEvent {
    /// Touch event whose contacts all belong to the same target.
    pub fn touch(kind: &str, touches: Vec<ContactDatum>, changed: Vec<ContactDatum>) -> Self {
        Self {
            kind: kind.to_string(),
            target_touches: Some(touches.clone()),
            touches: Some(touches),
            changed_touches: Some(changed),
            ..Default::default()
        }
    }

    /// Single-pointer event without touch lists.
    pub fn pointer(kind: &str, x: f64, y: f64) -> Self {
        Self {
            kind: kind.to_string(),
            pointer: Some(ContactDatum::at(ContactId::POINTER.0, x, y)),
            ..Default::default()
        }
    }

    pub fn with_time_stamp(mut self, time_stamp: f64) -> Self {
        self.time_stamp = time_stamp;
        self
    }

    pub fn is_multi_contact(&self) -> bool {
        self.touches.is_some()
    }
}

/// Position of a contact at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub client_x: f64,
    pub client_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    pub time_stamp: f64,
}

impl Snapshot {
    pub fn from_datum(datum: &ContactDatum, time_stamp: f64) -> Self {
        Self {
            client_x: datum.client_x,
            client_y: datum.client_y,
            page_x: datum.page_x,
            page_y: datum.page_y,
            time_stamp,
        }
    }
}
