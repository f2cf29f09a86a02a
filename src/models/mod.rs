mod expat;
mod field;

pub use expat::{Expat, FinalStatus, OrderStatus, DATE_FORMAT};
pub use field::{ExpatField, FieldError, FieldKind, FieldUpdate};
