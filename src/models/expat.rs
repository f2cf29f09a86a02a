use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FieldUpdate;

/// Date format used by arrival and handover dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Procurement state of a provisioning item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Ordered,
    #[default]
    NotOrdered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 2] = [OrderStatus::Ordered, OrderStatus::NotOrdered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordered => "ordered",
            Self::NotOrdered => "not-ordered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ordered => "Ordered",
            Self::NotOrdered => "Not Ordered",
        }
    }

    /// Accepts the machine key or the display label, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Ordered)
    }
}

/// Overall onboarding stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FinalStatus {
    #[default]
    InProgress,
    Completed,
    Pending,
}

impl FinalStatus {
    pub const ALL: [FinalStatus; 3] = [
        FinalStatus::InProgress,
        FinalStatus::Completed,
        FinalStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Accepts the machine key or the display label, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
    }
}

/// One tracked expatriate and their onboarding checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expat {
    pub id: Uuid,
    pub name: String,
    /// `YYYY-MM-DD`, or empty when unset
    pub arrival_date: String,
    pub business_card: OrderStatus,
    pub phone: OrderStatus,
    pub sim_card: OrderStatus,
    pub hotel: OrderStatus,
    pub driver: String,
    pub car: String,
    /// `YYYY-MM-DD`, or empty when unset
    pub handover_date: String,
    pub final_status: FinalStatus,
    pub notes: String,
}

impl Expat {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            arrival_date: String::new(),
            business_card: OrderStatus::default(),
            phone: OrderStatus::default(),
            sim_card: OrderStatus::default(),
            hotel: OrderStatus::default(),
            driver: String::new(),
            car: String::new(),
            handover_date: String::new(),
            final_status: FinalStatus::default(),
            notes: String::new(),
        }
    }

    pub fn driver_assigned(&self) -> bool {
        !self.driver.trim().is_empty()
    }

    pub fn car_assigned(&self) -> bool {
        !self.car.trim().is_empty()
    }

    /// Advisory date-order check: true when both dates are set, both parse,
    /// and the handover falls before the arrival. Never blocks an edit.
    pub fn handover_before_arrival(&self) -> bool {
        if self.arrival_date.is_empty() || self.handover_date.is_empty() {
            return false;
        }
        match (parse_date(&self.arrival_date), parse_date(&self.handover_date)) {
            (Some(arrival), Some(handover)) => handover < arrival,
            _ => false,
        }
    }

    /// Name for display, falling back when the name is blank
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "(unnamed)"
        } else {
            name
        }
    }

    /// Short id used by the CLI to address records
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Replace exactly the field targeted by `update`
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::ArrivalDate(v) => self.arrival_date = v,
            FieldUpdate::BusinessCard(v) => self.business_card = v,
            FieldUpdate::Phone(v) => self.phone = v,
            FieldUpdate::SimCard(v) => self.sim_card = v,
            FieldUpdate::Hotel(v) => self.hotel = v,
            FieldUpdate::Driver(v) => self.driver = v,
            FieldUpdate::Car(v) => self.car = v,
            FieldUpdate::HandoverDate(v) => self.handover_date = v,
            FieldUpdate::FinalStatus(v) => self.final_status = v,
            FieldUpdate::Notes(v) => self.notes = v,
        }
    }
}

impl Default for Expat {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expat_new_defaults() {
        let expat = Expat::new();
        assert!(expat.name.is_empty());
        assert!(expat.arrival_date.is_empty());
        assert!(expat.handover_date.is_empty());
        assert_eq!(expat.business_card, OrderStatus::NotOrdered);
        assert_eq!(expat.phone, OrderStatus::NotOrdered);
        assert_eq!(expat.sim_card, OrderStatus::NotOrdered);
        assert_eq!(expat.hotel, OrderStatus::NotOrdered);
        assert_eq!(expat.final_status, FinalStatus::InProgress);
        assert!(!expat.driver_assigned());
        assert!(!expat.car_assigned());
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(Expat::new().id, Expat::new().id);
    }

    #[test]
    fn test_assigned_ignores_whitespace() {
        let mut expat = Expat::new();
        expat.driver = "   ".to_string();
        expat.car = " Honda CR-V ".to_string();
        assert!(!expat.driver_assigned());
        assert!(expat.car_assigned());
    }

    #[test]
    fn test_handover_before_arrival_flagged() {
        let mut expat = Expat::new();
        expat.arrival_date = "2024-07-20".to_string();
        expat.handover_date = "2024-07-18".to_string();
        assert!(expat.handover_before_arrival());
    }

    #[test]
    fn test_handover_same_day_or_later_ok() {
        let mut expat = Expat::new();
        expat.arrival_date = "2024-07-20".to_string();
        expat.handover_date = "2024-07-20".to_string();
        assert!(!expat.handover_before_arrival());

        expat.handover_date = "2024-07-22".to_string();
        assert!(!expat.handover_before_arrival());
    }

    #[test]
    fn test_handover_check_needs_both_dates() {
        let mut expat = Expat::new();
        expat.handover_date = "2024-07-18".to_string();
        assert!(!expat.handover_before_arrival());

        expat.handover_date.clear();
        expat.arrival_date = "2024-07-20".to_string();
        assert!(!expat.handover_before_arrival());
    }

    #[test]
    fn test_handover_check_ignores_malformed_dates() {
        let mut expat = Expat::new();
        expat.arrival_date = "20/07/2024".to_string();
        expat.handover_date = "2024-07-18".to_string();
        assert!(!expat.handover_before_arrival());
    }

    #[test]
    fn test_status_parse_accepts_key_and_label() {
        assert_eq!(OrderStatus::parse("ordered"), Some(OrderStatus::Ordered));
        assert_eq!(OrderStatus::parse("Not Ordered"), Some(OrderStatus::NotOrdered));
        assert_eq!(OrderStatus::parse("maybe"), None);

        assert_eq!(FinalStatus::parse("IN-PROGRESS"), Some(FinalStatus::InProgress));
        assert_eq!(FinalStatus::parse("completed"), Some(FinalStatus::Completed));
        assert_eq!(FinalStatus::parse(" Pending "), Some(FinalStatus::Pending));
        assert_eq!(FinalStatus::parse("done"), None);
    }

    #[test]
    fn test_display_name_fallback() {
        let mut expat = Expat::new();
        assert_eq!(expat.display_name(), "(unnamed)");
        expat.name = "John Doe".to_string();
        assert_eq!(expat.display_name(), "John Doe");
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut expat = Expat::new();
        expat.sim_card = OrderStatus::Ordered;
        let json = serde_json::to_value(&expat).unwrap();
        assert_eq!(json["simCard"], "ordered");
        assert_eq!(json["finalStatus"], "in-progress");
        assert_eq!(json["arrivalDate"], "");
    }
}
