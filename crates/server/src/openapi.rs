use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cupcakes::list,
        crate::routes::cupcakes::create,
        crate::routes::cupcakes::get,
        crate::routes::cupcakes::update,
        crate::routes::cupcakes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            crate::routes::cupcakes::CreateCupcakeInput,
            crate::routes::cupcakes::UpdateCupcakeInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "cupcakes")
    )
)]
pub struct ApiDoc;
