use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::people::{handlers as people_handlers, models as people_models};
use crate::shared::types::{DataResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // People
        people_handlers::list_people,
        // Dashboard
        dashboard_handlers::dashboard_page,
        dashboard_handlers::dashboard_view,
    ),
    components(
        schemas(
            DataResponse<Vec<people_models::PersonRecord>>,
            ErrorResponse,
            // People
            people_models::PersonRecord,
            // Dashboard
            dashboard_dtos::DashboardViewDto,
            dashboard_dtos::FilterStateDto,
            dashboard_dtos::FilterOptionsDto,
            dashboard_dtos::SummaryDto,
            dashboard_dtos::HighlightCardDto,
            dashboard_dtos::ChartDto,
            dashboard_dtos::ArcDto,
            dashboard_dtos::LegendEntryDto,
            dashboard_dtos::PersonCardDto,
        )
    ),
    tags(
        (name = "People", description = "People records stored in MongoDB"),
        (name = "Dashboard", description = "Provider dashboard over the people records"),
    ),
    info(
        title = "Pessoas Dashboard API",
        version = "0.1.0",
        description = "People records and internet provider dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
