use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::dashboard::analytics::{DashboardFilter, HighlightCard, Selection};
use crate::features::dashboard::chart::{ArcSegment, DonutLayout, LegendEntry};

// ============================================================================
// Query
// ============================================================================

/// Filter selection as sent by the dashboard form
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQueryParams {
    /// Exact city, or `todos` for every city
    pub cidade: Option<String>,
    /// Exact provider, or `todos` for every provider
    pub provedora: Option<String>,
}

impl DashboardQueryParams {
    /// No filter parameter at all means a fresh page load
    pub fn is_page_load(&self) -> bool {
        self.cidade.is_none() && self.provedora.is_none()
    }

    pub fn to_filter(&self) -> DashboardFilter {
        DashboardFilter::new(
            Selection::parse(self.cidade.as_deref()),
            Selection::parse(self.provedora.as_deref()),
        )
    }
}

// ============================================================================
// View
// ============================================================================

/// Everything the dashboard shows for one filter selection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardViewDto {
    pub filters: FilterStateDto,
    pub options: FilterOptionsDto,
    pub summary: SummaryDto,
    pub chart: ChartDto,
    pub records: Vec<PersonCardDto>,
    /// Shown instead of the list when `records` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterStateDto {
    pub cidade: String,
    pub provedora: String,
}

impl From<&DashboardFilter> for FilterStateDto {
    fn from(filter: &DashboardFilter) -> Self {
        Self {
            cidade: filter.city.as_query_value().to_string(),
            provedora: filter.provider.as_query_value().to_string(),
        }
    }
}

/// Dropdown contents, without the leading `todos` entry
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct FilterOptionsDto {
    pub cidades: Vec<String>,
    pub provedoras: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SummaryDto {
    pub visible: usize,
    pub total: usize,
    pub city_count: usize,
    pub top_provider: Option<String>,
    /// e.g. `3 resultados`
    pub results_label: String,
    /// e.g. `3 registros visíveis`
    pub visible_label: String,
    pub highlights: Vec<HighlightCardDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HighlightCardDto {
    pub label: String,
    pub value: String,
    pub detail: String,
}

impl From<HighlightCard> for HighlightCardDto {
    fn from(card: HighlightCard) -> Self {
        Self {
            label: card.label.to_string(),
            value: card.value,
            detail: card.detail,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartDto {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub view_box: String,
    pub center: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub track_color: String,
    pub arcs: Vec<ArcDto>,
    pub legend: Vec<LegendEntryDto>,
}

impl ChartDto {
    pub fn new(total: usize, arcs: Vec<ArcDto>, legend: Vec<LegendEntryDto>) -> Self {
        Self {
            total,
            empty_message: None,
            view_box: DonutLayout::VIEW_BOX.to_string(),
            center: DonutLayout::CENTER,
            radius: DonutLayout::RADIUS,
            stroke_width: DonutLayout::STROKE_WIDTH,
            track_color: DonutLayout::TRACK_COLOR.to_string(),
            arcs,
            legend,
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            empty_message: Some(message.into()),
            ..Self::new(0, Vec::new(), Vec::new())
        }
    }
}

/// One donut segment. `path` is absent when the segment is a full circle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArcDto {
    pub provider: String,
    pub count: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    pub full_circle: bool,
    pub path: Option<String>,
}

impl From<ArcSegment> for ArcDto {
    fn from(arc: ArcSegment) -> Self {
        let path = arc.path();
        Self {
            provider: arc.provider,
            count: arc.count,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            color: arc.color,
            full_circle: arc.full_circle,
            path,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegendEntryDto {
    pub provider: String,
    pub count: usize,
    pub percentage: u32,
    pub color: String,
    /// `"{count} • {percentage}%"`
    pub label: String,
}

impl From<LegendEntry> for LegendEntryDto {
    fn from(entry: LegendEntry) -> Self {
        let label = entry.label();
        Self {
            provider: entry.provider,
            count: entry.count,
            percentage: entry.percentage,
            color: entry.color,
            label,
        }
    }
}

/// A person as listed on the dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonCardDto {
    pub id: Option<String>,
    pub name: String,
    pub provider: String,
    /// CSS class of the provider tag
    pub provider_class: String,
    pub city: String,
    pub plan: String,
    pub contact: String,
    pub last_updated: Option<DateTime<Utc>>,
    /// pt-BR short date, or `—`
    pub last_updated_label: String,
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    Ready,
    Empty,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackDto {
    pub kind: FeedbackKind,
    pub message: String,
}

/// Context of the server-rendered dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub state: PageState,
    pub feedback: FeedbackDto,
    pub filters_disabled: bool,
    pub view: DashboardViewDto,
}
