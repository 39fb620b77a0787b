use utoipa::OpenApi;

use crate::presentation::app_error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::ideas::list_ideas,
        crate::presentation::handlers::images::proxy_image
    ),
    components(schemas(ErrorBody)),
    tags(
        (name = "ideas", description = "Listing forwarding"),
        (name = "images", description = "Image forwarding")
    )
)]
pub(crate) struct ApiDoc;
