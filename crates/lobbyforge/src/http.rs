//! HTTP surface: maps JSON requests onto [`Services`].
//!
//! Handlers are thin. They decode the request, call one service method,
//! and wrap the result. Every failure goes through [`ServiceError`], which
//! renders as `{"error": "..."}` with the matching status code.
//!
//! ## Routes
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/health` | 200 `{"status":"ok"}` |
//! | POST | `/api/account/register` | 201 `{"token"}` |
//! | POST | `/api/account/login` | 200 `{"token"}` |
//! | GET | `/api/player/:id` | 200 player |
//! | GET | `/api/bag/:id` | 200 `{"items"}` |
//! | GET | `/api/items` | 200 `{"items"}` |
//! | GET | `/api/shop/items` | 200 `{"items"}` |
//! | GET | `/api/mail/:id` | 200 `{"messages"}` |
//! | GET | `/api/notice` | 200 `{"notices"}` |
//! | POST | `/api/chat` | 201 message |
//! | GET | `/api/chat?channel=&room_id=` | 200 `{"messages"}` |
//! | POST | `/api/room/create` | 201 room |
//! | GET | `/api/room` | 200 `{"rooms"}` |
//! | POST | `/api/room/:id/join` | 200 room |
//! | POST | `/api/room/:id/close` | 200 room |
//! | POST | `/api/match/enqueue` | 202 `{"match_id","room"}` |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use lobbyforge_model::{PlayerId, RoomId};
use serde::Deserialize;
use serde_json::json;

use crate::services::{CreateRoom, HistoryFilter, NewMessage, Services};
use crate::ServiceError;

type AppState = Arc<Services>;

/// A JSON body, or the reason it couldn't be decoded.
type Body<T> = Result<Json<T>, JsonRejection>;

type ApiResult<T> = Result<T, ServiceError>;

/// Builds the router over `services`.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/account/register", post(register))
        .route("/api/account/login", post(login))
        .route("/api/player/:id", get(player_profile))
        .route("/api/bag/:id", get(bag))
        .route("/api/items", get(items))
        .route("/api/shop/items", get(shop_items))
        .route("/api/mail/:id", get(mail))
        .route("/api/notice", get(notices))
        .route("/api/chat", post(chat_send).get(chat_history))
        .route("/api/room", get(room_list))
        .route("/api/room/create", post(room_create))
        .route("/api/room/:id/join", post(room_join))
        .route("/api/room/:id/close", post(room_close))
        .route("/api/match/enqueue", post(match_enqueue))
        .with_state(services)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Credentials {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn register(
    State(services): State<AppState>,
    body: Body<Credentials>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = body?;
    let token = services.account.register(&input.username, &input.password)?;
    Ok((StatusCode::CREATED, Json(json!({ "token": token }))))
}

async fn login(
    State(services): State<AppState>,
    body: Body<Credentials>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = body?;
    let token = services.account.login(&input.username, &input.password)?;
    Ok(Json(json!({ "token": token })))
}

// ---------------------------------------------------------------------------
// Player data
// ---------------------------------------------------------------------------

async fn player_profile(
    State(services): State<AppState>,
    Path(id): Path<PlayerId>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(services.player.profile(&id)?))
}

async fn bag(
    State(services): State<AppState>,
    Path(id): Path<PlayerId>,
) -> ApiResult<impl IntoResponse> {
    let items = services.bag.bag(&id)?;
    Ok(Json(json!({ "items": items })))
}

async fn mail(
    State(services): State<AppState>,
    Path(id): Path<PlayerId>,
) -> ApiResult<impl IntoResponse> {
    let messages = services.mail.inbox(&id)?;
    Ok(Json(json!({ "messages": messages })))
}

// ---------------------------------------------------------------------------
// Catalog, shop, notices
// ---------------------------------------------------------------------------

async fn items(State(services): State<AppState>) -> impl IntoResponse {
    Json(json!({ "items": services.item.catalog() }))
}

async fn shop_items(State(services): State<AppState>) -> impl IntoResponse {
    Json(json!({ "items": services.shop.listings() }))
}

async fn notices(State(services): State<AppState>) -> impl IntoResponse {
    Json(json!({ "notices": services.notice.notices() }))
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

async fn chat_send(
    State(services): State<AppState>,
    body: Body<NewMessage>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = body?;
    let message = services.chat.send(input)?;
    Ok((StatusCode::CREATED, Json(message)))
}

async fn chat_history(
    State(services): State<AppState>,
    Query(filter): Query<HistoryFilter>,
) -> impl IntoResponse {
    Json(json!({ "messages": services.chat.history(&filter) }))
}

// ---------------------------------------------------------------------------
// Rooms and matchmaking
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct JoinRoom {
    #[serde(default)]
    player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
struct Enqueue {
    #[serde(default)]
    player_id: String,
    #[serde(default)]
    mode: String,
}

async fn room_create(
    State(services): State<AppState>,
    body: Body<CreateRoom>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = body?;
    let room = services.room.create(input)?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn room_list(State(services): State<AppState>) -> impl IntoResponse {
    Json(json!({ "rooms": services.room.list() }))
}

async fn room_join(
    State(services): State<AppState>,
    Path(id): Path<RoomId>,
    body: Body<JoinRoom>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = body?;
    Ok(Json(services.room.join(&id, input.player_id)?))
}

async fn room_close(
    State(services): State<AppState>,
    Path(id): Path<RoomId>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(services.room.close(&id)?))
}

async fn match_enqueue(
    State(services): State<AppState>,
    body: Body<Enqueue>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = body?;
    let (match_id, room) =
        services.matchmaking.enqueue(&input.player_id, &input.mode)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "match_id": match_id, "room": room })),
    ))
}
