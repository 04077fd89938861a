use std::sync::{Mutex, PoisonError};

use crate::features::dashboard::analytics::summary::{
    city_options, format_date_pt_br, loaded_message, provider_tag_class,
};
use crate::features::dashboard::analytics::{
    filter_records, DashboardFilter, DashboardSummary, ProviderCounts, ProviderOrder,
};
use crate::features::dashboard::chart::{build_arcs, build_legend, ProviderPalette};
use crate::features::dashboard::dtos::{
    ChartDto, DashboardPage, DashboardViewDto, FeedbackDto, FeedbackKind, FilterOptionsDto,
    FilterStateDto, PageState, PersonCardDto, SummaryDto,
};
use crate::features::people::models::PersonRecord;

const NO_MATCH_MESSAGE: &str = "Nenhum registro encontrado com os filtros selecionados.";
const CHART_EMPTY_MESSAGE: &str = "Nenhum dado disponível para montar o gráfico.";
const CHART_NO_DATA_MESSAGE: &str = "Sem dados para exibir.";
const EMPTY_DATABASE_FEEDBACK: &str = "Nenhum registro encontrado no banco de dados.";
const EMPTY_DATABASE_LIST: &str = "Nenhum registro foi encontrado no banco de dados.";
const LOAD_FAILED_LIST: &str =
    "Erro ao buscar dados. Verifique a conexão com o banco e recarregue a página.";

/// Records loaded for one page lifecycle, plus what is derived once per load.
///
/// Filter interactions are answered from here without touching the network.
pub struct DashboardSession {
    records: Vec<PersonRecord>,
    provider_order: ProviderOrder,
    cities: Vec<String>,
    palette: Mutex<ProviderPalette>,
}

impl DashboardSession {
    pub fn new(records: Vec<PersonRecord>) -> Self {
        let provider_order = ProviderOrder::from_records(&records);
        let cities = city_options(&records);
        Self {
            records,
            provider_order,
            cities,
            palette: Mutex::new(ProviderPalette::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filtered list, summary and chart for one selection
    pub fn view(&self, filter: &DashboardFilter) -> DashboardViewDto {
        let filtered = filter_records(&self.records, filter);
        let summary = DashboardSummary::compute(&filtered, self.records.len());

        let chart = if filtered.is_empty() {
            ChartDto::empty(CHART_EMPTY_MESSAGE)
        } else {
            let counts = ProviderCounts::tally(filtered.iter().copied());
            let mut palette = self.palette.lock().unwrap_or_else(PoisonError::into_inner);
            let arcs = build_arcs(&counts, &self.provider_order, &mut palette);
            let legend = build_legend(&counts, &self.provider_order, &mut palette);
            if arcs.is_empty() {
                ChartDto::empty(CHART_NO_DATA_MESSAGE)
            } else {
                ChartDto::new(
                    counts.total(),
                    arcs.into_iter().map(Into::into).collect(),
                    legend.into_iter().map(Into::into).collect(),
                )
            }
        };

        let list_message = filtered.is_empty().then(|| NO_MATCH_MESSAGE.to_string());
        let records = filtered.into_iter().map(person_card).collect();

        DashboardViewDto {
            filters: FilterStateDto::from(filter),
            options: FilterOptionsDto {
                cidades: self.cities.clone(),
                provedoras: self.provider_order.as_slice().to_vec(),
            },
            summary: summary_dto(&summary),
            chart,
            records,
            list_message,
        }
    }

    /// Page context after a successful load
    pub fn page(&self, filter: &DashboardFilter) -> DashboardPage {
        if self.is_empty() {
            return DashboardPage {
                state: PageState::Empty,
                feedback: FeedbackDto {
                    kind: FeedbackKind::Info,
                    message: EMPTY_DATABASE_FEEDBACK.to_string(),
                },
                filters_disabled: true,
                view: unavailable_view(EMPTY_DATABASE_LIST),
            };
        }

        DashboardPage {
            state: PageState::Ready,
            feedback: FeedbackDto {
                kind: FeedbackKind::Success,
                message: loaded_message(self.records.len()),
            },
            filters_disabled: false,
            view: self.view(filter),
        }
    }
}

/// Page context when the data could not be loaded
pub fn failed_page(reason: &str) -> DashboardPage {
    DashboardPage {
        state: PageState::Error,
        feedback: FeedbackDto {
            kind: FeedbackKind::Error,
            message: format!("Não foi possível carregar os dados ({}).", reason),
        },
        filters_disabled: true,
        view: unavailable_view(LOAD_FAILED_LIST),
    }
}

/// Zeroed summary, empty chart and a single message in place of the list
fn unavailable_view(list_message: &str) -> DashboardViewDto {
    let summary = DashboardSummary::compute(&[], 0);
    DashboardViewDto {
        filters: FilterStateDto::from(&DashboardFilter::default()),
        options: FilterOptionsDto::default(),
        summary: summary_dto(&summary),
        chart: ChartDto::empty(CHART_NO_DATA_MESSAGE),
        records: Vec::new(),
        list_message: Some(list_message.to_string()),
    }
}

fn summary_dto(summary: &DashboardSummary) -> SummaryDto {
    SummaryDto {
        visible: summary.visible,
        total: summary.total,
        city_count: summary.city_count,
        top_provider: summary.top_provider.clone(),
        results_label: summary.results_label(),
        visible_label: summary.visible_label(),
        highlights: summary
            .highlight_cards()
            .into_iter()
            .map(Into::into)
            .collect(),
    }
}

fn person_card(record: &PersonRecord) -> PersonCardDto {
    PersonCardDto {
        id: record.id.clone(),
        name: record.name.clone(),
        provider: record.provider.clone(),
        provider_class: provider_tag_class(&record.provider).to_string(),
        city: record.city.clone(),
        plan: record.plan.clone(),
        contact: record.contact.clone(),
        last_updated: record.last_updated,
        last_updated_label: format_date_pt_br(record.last_updated.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dashboard::analytics::Selection;
    use crate::features::people::models::RawDocument;
    use serde_json::{json, Value};

    fn person(value: Value) -> PersonRecord {
        match value {
            Value::Object(raw) => PersonRecord::from_raw(raw),
            _ => PersonRecord::from_raw(RawDocument::new()),
        }
    }

    fn session() -> DashboardSession {
        DashboardSession::new(vec![
            person(json!({ "nome": "Ana", "cidade": "Recife", "provedora": "Claro",
                           "atualizadoEm": "2024-03-05T10:30:00Z" })),
            person(json!({ "nome": "Bruno", "cidade": "Olinda", "provedora": "Claro" })),
            person(json!({ "nome": "Carla", "cidade": "Recife", "provedora": "Oi" })),
        ])
    }

    fn city(value: &str) -> DashboardFilter {
        DashboardFilter::new(Selection::Only(value.to_string()), Selection::All)
    }

    #[test]
    fn test_unfiltered_view() {
        let view = session().view(&DashboardFilter::default());

        assert_eq!(view.records.len(), 3);
        assert_eq!(view.list_message, None);
        assert_eq!(view.summary.results_label, "3 resultados");
        assert_eq!(view.summary.top_provider.as_deref(), Some("Claro"));
        assert_eq!(view.options.cidades, vec!["Olinda", "Recife"]);
        assert_eq!(view.options.provedoras, vec!["Claro", "Oi"]);

        assert_eq!(view.chart.total, 3);
        assert_eq!(view.chart.arcs.len(), 2);
        assert_eq!(view.chart.legend[0].label, "2 • 67%");
        assert_eq!(view.chart.legend[1].label, "1 • 33%");

        assert_eq!(view.records[0].last_updated_label, "05 de mar. de 2024");
        assert_eq!(view.records[1].last_updated_label, "—");
        assert_eq!(view.records[0].provider_class, "person-provider");
    }

    #[test]
    fn test_unmatched_city_view() {
        let view = session().view(&city("Caruaru"));

        assert!(view.records.is_empty());
        assert_eq!(view.summary.results_label, "0 resultados");
        assert_eq!(view.summary.visible, 0);
        assert_eq!(view.summary.total, 3);
        assert_eq!(view.summary.highlights[0].detail, "3 no total");
        assert_eq!(
            view.list_message.as_deref(),
            Some("Nenhum registro encontrado com os filtros selecionados.")
        );
        assert_eq!(
            view.chart.empty_message.as_deref(),
            Some("Nenhum dado disponível para montar o gráfico.")
        );
        assert_eq!(view.filters.cidade, "Caruaru");
        // options still come from the whole dataset
        assert_eq!(view.options.cidades.len(), 2);
    }

    #[test]
    fn test_single_city_single_provider_is_full_circle() {
        let view = session().view(&DashboardFilter::new(
            Selection::Only("Recife".to_string()),
            Selection::Only("Oi".to_string()),
        ));
        assert_eq!(view.chart.arcs.len(), 1);
        assert!(view.chart.arcs[0].full_circle);
        assert_eq!(view.chart.arcs[0].path, None);
        assert_eq!(view.summary.highlights[1].detail, "1 cidade");
    }

    #[test]
    fn test_palette_is_stable_across_views() {
        let session = DashboardSession::new(vec![
            person(json!({ "provedora": "Brisanet" })),
            person(json!({ "provedora": "Claro" })),
        ]);
        let first = session.view(&DashboardFilter::default());
        let second = session.view(&DashboardFilter::default());
        assert_eq!(first.chart.arcs[1].provider, "Brisanet");
        assert_eq!(first.chart.arcs[1].color, second.chart.arcs[1].color);
    }

    #[test]
    fn test_ready_page() {
        let page = session().page(&DashboardFilter::default());
        assert_eq!(page.state, PageState::Ready);
        assert_eq!(page.feedback.kind, FeedbackKind::Success);
        assert_eq!(page.feedback.message, "Carregamos 3 registros do banco.");
        assert!(!page.filters_disabled);
    }

    #[test]
    fn test_empty_page_is_not_an_error() {
        let page = DashboardSession::new(Vec::new()).page(&DashboardFilter::default());
        assert_eq!(page.state, PageState::Empty);
        assert_eq!(page.feedback.kind, FeedbackKind::Info);
        assert_eq!(page.feedback.message, "Nenhum registro encontrado no banco de dados.");
        assert!(page.filters_disabled);
        assert_eq!(
            page.view.list_message.as_deref(),
            Some("Nenhum registro foi encontrado no banco de dados.")
        );
        assert_eq!(page.view.summary.results_label, "0 resultados");
    }

    #[test]
    fn test_failed_page() {
        let page = failed_page("Status 500");
        assert_eq!(page.state, PageState::Error);
        assert_eq!(page.feedback.kind, FeedbackKind::Error);
        assert_eq!(
            page.feedback.message,
            "Não foi possível carregar os dados (Status 500)."
        );
        assert!(page.filters_disabled);
        assert_eq!(
            page.view.list_message.as_deref(),
            Some("Erro ao buscar dados. Verifique a conexão com o banco e recarregue a página.")
        );
    }
}
