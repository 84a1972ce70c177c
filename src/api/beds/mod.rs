//! Beds API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/beds | GET | 全部床位类别 |
//! | /api/beds/{id} | GET | 单个类别 |
//! | /api/beds/{id}/availability | PUT | 更新可用床位数 |
//! | /api/beds/{id}/release | POST | 归还床位 (出院) |
//! | /api/occupancy | GET | 占用网格 ("All" 或单类别) |

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/beds", get(handler::list))
        .route("/api/beds/{id}", get(handler::get_by_id))
        .route("/api/beds/{id}/availability", put(handler::update_availability))
        .route("/api/beds/{id}/release", post(handler::release))
        .route("/api/occupancy", get(handler::occupancy))
}
