use serde::Serialize;
use std::collections::HashSet;

use crate::features::people::models::PersonRecord;
use crate::shared::constants::CANONICAL_PROVIDERS;
use crate::shared::text::compare_base;

/// Display and plot order of the providers present in a dataset.
///
/// Known providers come first in their fixed order, followed by every other
/// provider sorted case- and accent-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProviderOrder(Vec<String>);

impl ProviderOrder {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PersonRecord>,
    {
        let present: HashSet<&str> = records
            .into_iter()
            .map(|record| record.provider.as_str())
            .filter(|provider| !provider.is_empty())
            .collect();

        let mut order: Vec<String> = CANONICAL_PROVIDERS
            .iter()
            .filter(|name| present.contains(*name))
            .map(|name| name.to_string())
            .collect();

        let mut remaining: Vec<&str> = present
            .into_iter()
            .filter(|name| !CANONICAL_PROVIDERS.contains(name))
            .collect();
        remaining.sort_by(|a, b| compare_base(a, b));

        order.extend(remaining.into_iter().map(str::to_string));
        Self(order)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
