// src/routes.rs
use log::info;
use std::convert::Infallible;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::chart::{get_cities, post_chart};
use crate::handlers::error::ApiError;

// Add recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        code = warp::http::StatusCode::BAD_REQUEST;
        message = "Invalid request body".to_string();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let chart_route = warp::path!("api" / "v1" / "bazi")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(post_chart);

    let cities_route = warp::path!("api" / "v1" / "cities")
        .and(warp::get())
        .and_then(get_cities);

    info!("All routes configured successfully.");

    chart_route.or(cities_route).recover(handle_rejection)
}
