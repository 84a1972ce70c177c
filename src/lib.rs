//! Ward Server - 医院床位管理服务
//!
//! # 架构概述
//!
//! 本模块是 Ward Server 的主入口，提供以下核心功能：
//!
//! - **床位目录** (`catalog`): 内存中的床位类别状态，带显式更新接口和预订状态机
//! - **价格计算** (`pricing`): 按晚价格派生周租/月租折扣价
//! - **消息总线** (`message`): 通知和同步信号广播
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! ward-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── models/        # 床位数据模型
//! ├── catalog/       # 床位目录管理和预订流程
//! ├── pricing/       # 派生价格计算
//! ├── message/       # 消息总线
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志中间件
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod message;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use catalog::{BookingState, CatalogError, CatalogManager, PendingBooking};
pub use core::{Config, Server, ServerState};
pub use message::{BusMessage, MessageBus, NotificationPayload, SyncPayload};
pub use models::{BedCategory, BedType};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在读取 [`Config`] 之前调用，否则 `.env` 中的变量不会生效
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在不算错误
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _       __              __
| |     / /___ __________/ /
| | /| / / __ `/ ___/ __  /
| |/ |/ / /_/ / /  / /_/ /
|__/|__/\__,_/_/   \__,_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
