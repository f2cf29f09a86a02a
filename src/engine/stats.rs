use serde::{Serialize, Serializer};

use crate::models::{Expat, FinalStatus};

/// Items tracked on the needs chart, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisioningItem {
    BusinessCard,
    Phone,
    SimCard,
    Hotel,
    Driver,
    Car,
}

impl ProvisioningItem {
    pub const ALL: [ProvisioningItem; 6] = [
        ProvisioningItem::BusinessCard,
        ProvisioningItem::Phone,
        ProvisioningItem::SimCard,
        ProvisioningItem::Hotel,
        ProvisioningItem::Driver,
        ProvisioningItem::Car,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessCard => "business-card",
            Self::Phone => "phone",
            Self::SimCard => "sim-card",
            Self::Hotel => "hotel",
            Self::Driver => "driver",
            Self::Car => "car",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessCard => "Business Card",
            Self::Phone => "Phone",
            Self::SimCard => "SIM Card",
            Self::Hotel => "Hotel",
            Self::Driver => "Driver",
            Self::Car => "Car",
        }
    }

    /// Ordered (for procured items) or assigned (for driver and car)
    pub fn is_provided(&self, expat: &Expat) -> bool {
        match self {
            Self::BusinessCard => expat.business_card.is_ordered(),
            Self::Phone => expat.phone.is_ordered(),
            Self::SimCard => expat.sim_card.is_ordered(),
            Self::Hotel => expat.hotel.is_ordered(),
            Self::Driver => expat.driver_assigned(),
            Self::Car => expat.car_assigned(),
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::BusinessCard => 0,
            Self::Phone => 1,
            Self::SimCard => 2,
            Self::Hotel => 3,
            Self::Driver => 4,
            Self::Car => 5,
        }
    }
}

impl Serialize for ProvisioningItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Records per final status. All three counters exist even at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatusCounts {
    pub in_progress: usize,
    pub completed: usize,
    pub pending: usize,
}

impl StatusCounts {
    pub fn get(&self, status: FinalStatus) -> usize {
        match status {
            FinalStatus::InProgress => self.in_progress,
            FinalStatus::Completed => self.completed,
            FinalStatus::Pending => self.pending,
        }
    }

    fn increment(&mut self, status: FinalStatus) {
        match status {
            FinalStatus::InProgress => self.in_progress += 1,
            FinalStatus::Completed => self.completed += 1,
            FinalStatus::Pending => self.pending += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.in_progress + self.completed + self.pending
    }

    pub fn iter(&self) -> impl Iterator<Item = (FinalStatus, usize)> + '_ {
        FinalStatus::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCount {
    pub ordered: usize,
    pub not_ordered: usize,
}

impl OrderCount {
    pub fn total(&self) -> usize {
        self.ordered + self.not_ordered
    }
}

/// Ordered / not-ordered pair for each provisioning item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeedsBreakdown {
    counts: [OrderCount; 6],
}

impl NeedsBreakdown {
    pub fn get(&self, item: ProvisioningItem) -> OrderCount {
        self.counts[item.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProvisioningItem, OrderCount)> + '_ {
        ProvisioningItem::ALL.into_iter().map(move |i| (i, self.get(i)))
    }

    fn record(&mut self, item: ProvisioningItem, provided: bool) {
        let count = &mut self.counts[item.index()];
        if provided {
            count.ordered += 1;
        } else {
            count.not_ordered += 1;
        }
    }
}

impl Serialize for NeedsBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (item, count) in self.iter() {
            map.serialize_entry(item.as_str(), &count)?;
        }
        map.end()
    }
}

/// Slice of the final-status chart. Only nonzero statuses get one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSegment {
    pub status: FinalStatus,
    pub label: &'static str,
    pub value: usize,
}

impl PieSegment {
    /// Whole percentage of `total`, as printed on the slice
    pub fn percent(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        (self.value * 100 + total / 2) / total
    }
}

/// Group on the needs chart. All six items always appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarEntry {
    pub item: ProvisioningItem,
    pub label: &'static str,
    pub ordered: usize,
    pub not_ordered: usize,
}

/// Everything the dashboard displays, derived from one record list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub status_counts: StatusCounts,
    pub needs: NeedsBreakdown,
    pub pie_segments: Vec<PieSegment>,
    pub bar_series: Vec<BarEntry>,
}

/// Pie chart order, which differs from declaration order
const PIE_ORDER: [FinalStatus; 3] = [
    FinalStatus::Completed,
    FinalStatus::InProgress,
    FinalStatus::Pending,
];

/// Compute the dashboard statistics for `expats` in a single pass
pub fn aggregate<'a, I>(expats: I) -> DashboardStats
where
    I: IntoIterator<Item = &'a Expat>,
{
    let mut total = 0;
    let mut status_counts = StatusCounts::default();
    let mut needs = NeedsBreakdown::default();

    for expat in expats {
        total += 1;
        status_counts.increment(expat.final_status);
        for item in ProvisioningItem::ALL {
            needs.record(item, item.is_provided(expat));
        }
    }

    let pie_segments = PIE_ORDER
        .into_iter()
        .map(|status| PieSegment {
            status,
            label: status.label(),
            value: status_counts.get(status),
        })
        .filter(|segment| segment.value > 0)
        .collect();

    let bar_series = needs
        .iter()
        .map(|(item, count)| BarEntry {
            item,
            label: item.label(),
            ordered: count.ordered,
            not_ordered: count.not_ordered,
        })
        .collect();

    DashboardStats {
        total,
        status_counts,
        needs,
        pie_segments,
        bar_series,
    }
}
