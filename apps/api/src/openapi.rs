use utoipa::OpenApi;

/// Aggregated OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Haven API",
        description = "Contact-form intake with notification delivery"
    ),
    nest(
        (path = "/api/contact", api = domain_contact::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
