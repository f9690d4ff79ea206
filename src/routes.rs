use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::Result,
    message::{
        message_dto::{
            CreateMessageRequest, DeleteMessageResponse, MessageListResponse,
            SingleMessageResponse, UpdateMessageRequest,
        },
        message_handlers,
        message_models::Message,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::message::message_handlers::get_messages,
        crate::message::message_handlers::get_message,
        crate::message::message_handlers::create_message,
        crate::message::message_handlers::update_message,
        crate::message::message_handlers::delete_message,
    ),
    components(
        schemas(
            Message,
            CreateMessageRequest,
            UpdateMessageRequest,
            MessageListResponse,
            SingleMessageResponse,
            DeleteMessageResponse,
        )
    ),
    tags(
        (name = "messages", description = "Message CRUD endpoints")
    )
)]
struct ApiDoc;

async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await?;

    Ok((StatusCode::OK, "ok"))
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let message_routes = Router::new()
        .route(
            "/",
            get(message_handlers::get_messages).post(message_handlers::create_message),
        )
        .route(
            "/:message_id",
            get(message_handlers::get_message)
                .put(message_handlers::update_message)
                .delete(message_handlers::delete_message),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .nest("/messages", message_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
