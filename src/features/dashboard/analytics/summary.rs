use chrono::{DateTime, Datelike, Utc};
use std::collections::HashSet;

use crate::features::dashboard::analytics::aggregate::top_provider;
use crate::features::people::models::PersonRecord;
use crate::shared::constants::{EMPTY_PLACEHOLDER, PROVIDER_NOT_INFORMED, PROVIDER_NO_INTERNET};
use crate::shared::text::{compare_base, pluralize};

const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Figures shown above the list, derived from the filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub visible: usize,
    pub total: usize,
    pub city_count: usize,
    pub top_provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCard {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
}

impl DashboardSummary {
    pub fn compute(filtered: &[&PersonRecord], total: usize) -> Self {
        let cities: HashSet<&str> = filtered
            .iter()
            .map(|r| r.city.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        Self {
            visible: filtered.len(),
            total,
            city_count: cities.len(),
            top_provider: top_provider(filtered.iter().copied()),
        }
    }

    pub fn highlight_cards(&self) -> Vec<HighlightCard> {
        let (top_value, top_detail) = match &self.top_provider {
            Some(provider) => (provider.clone(), "Maior ocorrência nos filtros"),
            None => (EMPTY_PLACEHOLDER.to_string(), "Nenhum dado no filtro atual"),
        };

        vec![
            HighlightCard {
                label: "Registros visíveis",
                value: self.visible.to_string(),
                detail: format!("{} no total", self.total),
            },
            HighlightCard {
                label: "Cidades filtradas",
                value: self.city_count.to_string(),
                detail: pluralize(self.city_count, "cidade", "cidades"),
            },
            HighlightCard {
                label: "Provedora em destaque",
                value: top_value,
                detail: top_detail.to_string(),
            },
        ]
    }

    /// `"0 resultados"`, `"1 resultado"`, `"5 resultados"`
    pub fn results_label(&self) -> String {
        pluralize(self.visible, "resultado", "resultados")
    }

    /// Header counter. The adjective stays plural.
    pub fn visible_label(&self) -> String {
        pluralize(self.visible, "registro visíveis", "registros visíveis")
    }
}

/// Distinct cities for the city dropdown, collation-sorted
pub fn city_options(records: &[PersonRecord]) -> Vec<String> {
    let mut cities: Vec<&str> = records
        .iter()
        .map(|r| r.city.as_str())
        .filter(|c| !c.is_empty())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    cities.sort_by(|a, b| compare_base(a, b));
    cities.into_iter().map(str::to_string).collect()
}

pub fn provider_tag_class(provider: &str) -> &'static str {
    match provider {
        PROVIDER_NO_INTERNET => "person-provider none",
        PROVIDER_NOT_INFORMED => "person-provider neutral",
        _ => "person-provider",
    }
}

/// Short pt-BR date, e.g. `05 de mar. de 2024`. Missing dates show `—`.
pub fn format_date_pt_br(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(date) => format!(
            "{:02} de {} de {}",
            date.day(),
            MONTHS_PT_BR[date.month0() as usize],
            date.year()
        ),
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

/// Success banner after a load
pub fn loaded_message(count: usize) -> String {
    if count > 1 {
        format!("Carregamos {} registros do banco.", count)
    } else {
        format!("Carregamos {} registro do banco.", count)
    }
}
