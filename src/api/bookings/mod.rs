//! Bookings API 模块
//!
//! 确认对话框流程：Grid-click -> Pending -> {Confirm, Cancel}
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/bookings | POST | 发起预订 (打开对话框) |
//! | /api/bookings/confirm | POST | 确认预订 (减少可用数) |
//! | /api/bookings/cancel | POST | 取消预订 (无变更) |
//! | /api/bookings/pending | GET | 查询待确认预订 |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/bookings", post(handler::request))
        .route("/api/bookings/confirm", post(handler::confirm))
        .route("/api/bookings/cancel", post(handler::cancel))
        .route("/api/bookings/pending", get(handler::pending))
}
