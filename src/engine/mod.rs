//! Pure views over the record list: filtering and dashboard statistics.
//!
//! Nothing here mutates records or holds state between calls; the caller
//! recomputes both views from scratch whenever the records or the filter
//! change.

pub mod filter;
pub mod stats;

pub use filter::{filter_expats, ExpatFilter};
pub use stats::{
    aggregate, BarEntry, DashboardStats, NeedsBreakdown, OrderCount, PieSegment,
    ProvisioningItem, StatusCounts,
};
