use utoipa::{Modify, OpenApi};

use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports (public)
        reports_handlers::list_reports,
        reports_handlers::create_report,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            // Reports
            reports_models::ReportStatus,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportDto,
            reports_dtos::CreateReportResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Citizen report feed and submission"),
    ),
    info(
        title = "Reporta API",
        version = "0.1.0",
        description = "API documentation for Reporta",
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
