use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use service::errors::ServiceError;

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateCupcakeInput {
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateCupcakeInput {
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CupcakeEnvelope {
    pub cupcake: models::cupcake::Model,
}

#[derive(Debug, Serialize)]
pub struct CupcakeListEnvelope {
    pub cupcakes: Vec<models::cupcake::Model>,
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, JsonApiError> {
    value.ok_or_else(|| {
        JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some(format!("{} is required", name)),
        )
    })
}

#[utoipa::path(
    get, path = "/api/cupcakes", tag = "cupcakes",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<CupcakeListEnvelope>, JsonApiError> {
    match state.repo.list().await {
        Ok(cupcakes) => {
            info!(count = cupcakes.len(), "list cupcakes");
            Ok(Json(CupcakeListEnvelope { cupcakes }))
        }
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))),
    }
}

#[utoipa::path(
    post, path = "/api/cupcakes", tag = "cupcakes",
    request_body = CreateCupcakeInput,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateCupcakeInput>,
) -> Result<(StatusCode, Json<CupcakeEnvelope>), JsonApiError> {
    let flavor = required(input.flavor, "flavor")?;
    let size = required(input.size, "size")?;
    let rating = required(input.rating, "rating")?;

    match state.repo.create(&flavor, &size, rating, input.image.as_deref()).await {
        Ok(m) => {
            info!(id = m.id, flavor = %m.flavor, size = %m.size, rating = m.rating, "created cupcake");
            Ok((StatusCode::CREATED, Json(CupcakeEnvelope { cupcake: m })))
        }
        Err(e) => match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "create cupcake failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    get, path = "/api/cupcakes/{id}", tag = "cupcakes",
    params(("id" = i32, Path, description = "Cupcake ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<CupcakeEnvelope>, StatusCode> {
    match state.repo.get(id).await {
        Ok(Some(m)) => Ok(Json(CupcakeEnvelope { cupcake: m })),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    patch, path = "/api/cupcakes/{id}", tag = "cupcakes",
    params(("id" = i32, Path, description = "Cupcake ID")),
    request_body = UpdateCupcakeInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateCupcakeInput>,
) -> Result<Json<CupcakeEnvelope>, JsonApiError> {
    match state
        .repo
        .update(id, input.flavor.as_deref(), input.size.as_deref(), input.rating, input.image.as_deref())
        .await
    {
        Ok(m) => {
            info!(id = m.id, "updated cupcake");
            Ok(Json(CupcakeEnvelope { cupcake: m }))
        }
        Err(e) => match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            ServiceError::NotFound(_) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))),
            _ => {
                error!(err = %e, "update cupcake failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    delete, path = "/api/cupcakes/{id}", tag = "cupcakes",
    params(("id" = i32, Path, description = "Cupcake ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.repo.delete(id).await {
        Ok(true) => {
            info!(id, "deleted cupcake");
            Ok(Json(serde_json::json!({"message": "Deleted"})))
        }
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!(err = %e, "delete cupcake failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
