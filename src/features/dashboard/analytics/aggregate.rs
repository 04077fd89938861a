use indexmap::IndexMap;

use crate::features::people::models::PersonRecord;
use crate::shared::constants::PROVIDER_NOT_INFORMED;

/// Per-provider occurrence counts, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCounts {
    counts: IndexMap<String, usize>,
    total: usize,
}

impl ProviderCounts {
    pub fn tally<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PersonRecord>,
    {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        let mut total = 0;
        for record in records {
            *counts.entry(record.provider.clone()).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Zero for providers absent from the tallied set
    pub fn get(&self, provider: &str) -> usize {
        self.counts.get(provider).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// `round(100 * count / total)`, 0 when nothing was tallied
    pub fn percentage(&self, provider: &str) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (100.0 * self.get(provider) as f64 / self.total as f64).round() as u32
    }
}

/// Most frequent informed provider. Ties go to whichever appeared first.
pub fn top_provider<'a, I>(records: I) -> Option<String>
where
    I: IntoIterator<Item = &'a PersonRecord>,
{
    let informed = records
        .into_iter()
        .filter(|r| !r.provider.is_empty() && r.provider != PROVIDER_NOT_INFORMED);
    let counts = ProviderCounts::tally(informed);

    let mut best: Option<(&str, usize)> = None;
    for (provider, count) in counts.iter() {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((provider, count));
        }
    }
    best.map(|(provider, _)| provider.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::people::models::RawDocument;
    use serde_json::json;

    fn people(providers: &[Option<&str>]) -> Vec<PersonRecord> {
        providers
            .iter()
            .map(|p| {
                let mut raw = RawDocument::new();
                if let Some(p) = p {
                    raw.insert("provedora".to_string(), json!(p));
                }
                PersonRecord::from_raw(raw)
            })
            .collect()
    }

    #[test]
    fn test_claro_claro_oi_scenario() {
        let records = people(&[Some("Claro"), Some("Claro"), Some("Oi")]);
        let counts = ProviderCounts::tally(&records);

        assert_eq!(counts.get("Claro"), 2);
        assert_eq!(counts.get("Oi"), 1);
        assert_eq!(counts.get("Vivo"), 0);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.percentage("Claro"), 67);
        assert_eq!(counts.percentage("Oi"), 33);
        assert_eq!(top_provider(&records).as_deref(), Some("Claro"));
    }

    #[test]
    fn test_counts_sum_to_total() {
        let records = people(&[Some("Tim"), None, Some("X"), Some("Tim"), Some("  "), Some("Vivo")]);
        let counts = ProviderCounts::tally(&records);
        let sum: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, counts.total());
        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.get("Não informado"), 2);
    }

    #[test]
    fn test_first_occurrence_order() {
        let records = people(&[Some("Vivo"), Some("Claro"), Some("Vivo")]);
        let counts = ProviderCounts::tally(&records);
        let order: Vec<&str> = counts.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["Vivo", "Claro"]);
    }

    #[test]
    fn test_top_provider_tie_goes_to_first_seen() {
        let records = people(&[Some("Oi"), Some("Claro"), Some("Claro"), Some("Oi")]);
        assert_eq!(top_provider(&records).as_deref(), Some("Oi"));
    }

    #[test]
    fn test_top_provider_ignores_not_informed() {
        let records = people(&[None, None, None, Some("Tim")]);
        assert_eq!(top_provider(&records).as_deref(), Some("Tim"));

        let records = people(&[None, Some("")]);
        assert_eq!(top_provider(&records), None);
        assert_eq!(top_provider(&Vec::<PersonRecord>::new()), None);
    }

    #[test]
    fn test_top_provider_counts_no_internet() {
        let records = people(&[Some("Não usa internet"), Some("Não usa internet"), Some("Oi")]);
        assert_eq!(top_provider(&records).as_deref(), Some("Não usa internet"));
    }

    #[test]
    fn test_percentage_of_empty_set() {
        let counts = ProviderCounts::tally(&Vec::<PersonRecord>::new());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.iter().count(), 0);
        assert_eq!(counts.percentage("Claro"), 0);
    }
}
