use utoipa::OpenApi;

pub const CONTENT_TAG: &str = "Contents";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog",
        description = "A content catalog api server",
    ),
    paths(
        crate::api::handlers::contents::list_contents,
        crate::api::handlers::contents::search_contents,
        crate::api::handlers::contents::get_content,
        crate::api::handlers::contents::create_content,
        crate::api::handlers::contents::update_content,
        crate::api::handlers::contents::delete_content,
        crate::api::handlers::contents::add_genres,
        crate::api::handlers::contents::remove_genres,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = CONTENT_TAG, description = "Content catalog endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
