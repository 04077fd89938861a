use crate::features::people::models::PersonRecord;
use crate::shared::constants::FILTER_ALL;

/// One dropdown of the dashboard: either unrestricted or an exact value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Absent, blank and `todos` all mean "no restriction"
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(FILTER_ALL) => Self::All,
            Some(v) => Self::Only(v.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Value to put back into a query string or a `<select>`
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(v) => v,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    pub city: Selection,
    pub provider: Selection,
}

impl DashboardFilter {
    pub fn new(city: Selection, provider: Selection) -> Self {
        Self { city, provider }
    }

    pub fn matches(&self, record: &PersonRecord) -> bool {
        self.city.matches(&record.city) && self.provider.matches(&record.provider)
    }
}

/// Stable filter. Input order is preserved and no match yields an empty vec.
pub fn filter_records<'a, I>(records: I, filter: &DashboardFilter) -> Vec<&'a PersonRecord>
where
    I: IntoIterator<Item = &'a PersonRecord>,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect()
}
