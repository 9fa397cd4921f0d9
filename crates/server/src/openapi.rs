use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct LinkDoc {
    pub href: String,
    pub rel: String,
}

#[derive(ToSchema)]
pub struct ConfigurationDoc {
    pub id: u32,
    pub link: LinkDoc,
    pub content: String,
    pub status: String,
}

#[derive(ToSchema)]
pub struct ConfigurationInputDoc {
    pub content: Option<String>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::configurations::list_configurations,
        crate::routes::configurations::get_configuration,
        crate::routes::configurations::create_configuration,
        crate::routes::configurations::update_configuration,
        crate::routes::configurations::delete_configuration,
    ),
    components(
        schemas(
            HealthResponse,
            LinkDoc,
            ConfigurationDoc,
            ConfigurationInputDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "configurations")
    )
)]
pub struct ApiDoc;
