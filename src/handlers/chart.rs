// src/handlers/chart.rs
use log::{error, info, warn};
use warp::Rejection;

use crate::models::BirthInfo;
use crate::services::bazi::{calculate_ba_zi, validate_birth_info};
use crate::services::cities::CITIES;

use super::error::ApiError;

pub async fn post_chart(info: BirthInfo) -> Result<impl warp::Reply, Rejection> {
    info!(
        "Handling BaZi chart request for {}-{:02}-{:02} {:02}:{:02}",
        info.year, info.month, info.day, info.hour, info.minute
    );

    // 先驗證，驗證不過不進入排盤流程
    if let Err(message) = validate_birth_info(&info) {
        warn!("Rejected chart request: {}", message);
        return Err(warp::reject::custom(ApiError::invalid_input(message)));
    }

    match calculate_ba_zi(&info) {
        Ok(result) => Ok(warp::reply::json(&result)),
        Err(e) => {
            error!("Chart calculation failed: {:?}", e);
            Err(warp::reject::custom(ApiError::internal(e.to_string())))
        }
    }
}

pub async fn get_cities() -> Result<impl warp::Reply, Rejection> {
    Ok(warp::reply::json(&CITIES.as_slice()))
}
