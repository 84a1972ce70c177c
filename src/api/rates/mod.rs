//! Rates API 模块
//!
//! 价格面板：单个类别的每晚价格，以及可选的周租/月租折扣价。
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/beds/{id}/rates | GET | 价格面板 (`includeDiscounts` 开关) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/beds/{id}/rates", get(handler::get_rates))
}
