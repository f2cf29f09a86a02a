use thiserror::Error;

use super::{Expat, FinalStatus, OrderStatus};

/// Errors converting raw text into a typed field value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid order status for {field}: {value} (expected ordered or not-ordered)")]
    InvalidOrderStatus { field: &'static str, value: String },
    #[error("invalid final status: {0} (expected in-progress, completed or pending)")]
    InvalidFinalStatus(String),
}

/// Kind of value a field holds, used by editors to pick an input widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Order,
    Status,
}

/// Editable fields of an expat record (everything except the id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpatField {
    Name,
    ArrivalDate,
    BusinessCard,
    Phone,
    SimCard,
    Hotel,
    Driver,
    Car,
    HandoverDate,
    FinalStatus,
    Notes,
}

impl ExpatField {
    pub const ALL: [ExpatField; 11] = [
        ExpatField::Name,
        ExpatField::ArrivalDate,
        ExpatField::BusinessCard,
        ExpatField::Phone,
        ExpatField::SimCard,
        ExpatField::Hotel,
        ExpatField::Driver,
        ExpatField::Car,
        ExpatField::HandoverDate,
        ExpatField::FinalStatus,
        ExpatField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ArrivalDate => "arrival-date",
            Self::BusinessCard => "business-card",
            Self::Phone => "phone",
            Self::SimCard => "sim-card",
            Self::Hotel => "hotel",
            Self::Driver => "driver",
            Self::Car => "car",
            Self::HandoverDate => "handover-date",
            Self::FinalStatus => "final-status",
            Self::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::ArrivalDate => "Arrival",
            Self::BusinessCard => "Business Card",
            Self::Phone => "Phone",
            Self::SimCard => "SIM Card",
            Self::Hotel => "Hotel",
            Self::Driver => "Driver",
            Self::Car => "Car",
            Self::HandoverDate => "Handover",
            Self::FinalStatus => "Status",
            Self::Notes => "Notes",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::Driver | Self::Car | Self::Notes => FieldKind::Text,
            Self::ArrivalDate | Self::HandoverDate => FieldKind::Date,
            Self::BusinessCard | Self::Phone | Self::SimCard | Self::Hotel => FieldKind::Order,
            Self::FinalStatus => FieldKind::Status,
        }
    }

    pub fn parse(s: &str) -> Result<Self, FieldError> {
        let normalized = s.trim().to_lowercase().replace('_', "-").replace(' ', "-");
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }

    /// Current value of this field on `expat`, as display text
    pub fn current_value(&self, expat: &Expat) -> String {
        match self {
            Self::Name => expat.name.clone(),
            Self::ArrivalDate => expat.arrival_date.clone(),
            Self::BusinessCard => expat.business_card.label().to_string(),
            Self::Phone => expat.phone.label().to_string(),
            Self::SimCard => expat.sim_card.label().to_string(),
            Self::Hotel => expat.hotel.label().to_string(),
            Self::Driver => expat.driver.clone(),
            Self::Car => expat.car.clone(),
            Self::HandoverDate => expat.handover_date.clone(),
            Self::FinalStatus => expat.final_status.label().to_string(),
            Self::Notes => expat.notes.clone(),
        }
    }
}

/// A typed replacement value for exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    ArrivalDate(String),
    BusinessCard(OrderStatus),
    Phone(OrderStatus),
    SimCard(OrderStatus),
    Hotel(OrderStatus),
    Driver(String),
    Car(String),
    HandoverDate(String),
    FinalStatus(FinalStatus),
    Notes(String),
}

impl FieldUpdate {
    /// Build an update from raw text. Text and date fields take the value
    /// as-is; dates are not validated.
    pub fn parse(field: ExpatField, raw: &str) -> Result<Self, FieldError> {
        let order = |raw: &str| {
            OrderStatus::parse(raw).ok_or_else(|| FieldError::InvalidOrderStatus {
                field: field.as_str(),
                value: raw.to_string(),
            })
        };

        let update = match field {
            ExpatField::Name => Self::Name(raw.to_string()),
            ExpatField::ArrivalDate => Self::ArrivalDate(raw.trim().to_string()),
            ExpatField::BusinessCard => Self::BusinessCard(order(raw)?),
            ExpatField::Phone => Self::Phone(order(raw)?),
            ExpatField::SimCard => Self::SimCard(order(raw)?),
            ExpatField::Hotel => Self::Hotel(order(raw)?),
            ExpatField::Driver => Self::Driver(raw.to_string()),
            ExpatField::Car => Self::Car(raw.to_string()),
            ExpatField::HandoverDate => Self::HandoverDate(raw.trim().to_string()),
            ExpatField::FinalStatus => Self::FinalStatus(
                FinalStatus::parse(raw)
                    .ok_or_else(|| FieldError::InvalidFinalStatus(raw.to_string()))?,
            ),
            ExpatField::Notes => Self::Notes(raw.to_string()),
        };
        Ok(update)
    }

    pub fn field(&self) -> ExpatField {
        match self {
            Self::Name(_) => ExpatField::Name,
            Self::ArrivalDate(_) => ExpatField::ArrivalDate,
            Self::BusinessCard(_) => ExpatField::BusinessCard,
            Self::Phone(_) => ExpatField::Phone,
            Self::SimCard(_) => ExpatField::SimCard,
            Self::Hotel(_) => ExpatField::Hotel,
            Self::Driver(_) => ExpatField::Driver,
            Self::Car(_) => ExpatField::Car,
            Self::HandoverDate(_) => ExpatField::HandoverDate,
            Self::FinalStatus(_) => ExpatField::FinalStatus,
            Self::Notes(_) => ExpatField::Notes,
        }
    }
}
