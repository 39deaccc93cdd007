use std::collections::BTreeMap;

use serde::Serialize;

pub type TerminalCode = String;

/// departure terminal -> destination terminal -> route.
pub type Schedule = BTreeMap<TerminalCode, BTreeMap<TerminalCode, Route>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sailing {
    #[serde(rename = "date")]
    pub departure_date: String,
    #[serde(rename = "time")]
    pub departure_time: String,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,
    #[serde(rename = "isCancelled")]
    pub is_cancelled: bool,
    pub fill: i32,
    #[serde(rename = "vesselName")]
    pub vessel_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    // Never filled in by the scrapers, kept so consumers see a stable shape.
    #[serde(rename = "sailingDuration")]
    pub sailing_duration: String,
    pub sailings: Vec<Sailing>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }
}
