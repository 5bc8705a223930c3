use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the games API.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::create_game,
        crate::routes::game::list_games,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::UpdateGameRequest,
            crate::dto::game::GameResponse,
            crate::dto::game::DeleteGameResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Game catalog CRUD operations"),
    )
)]
pub struct ApiDoc;
