//! 消息总线
//!
//! 通知侧信道：对应仪表盘 toast 的 "show transient message" 能力。
//! 发布是 fire-and-forget 的，投递失败不影响目录状态。
//!
//! - [`MessageBus`] - broadcast 通道封装
//! - [`NotificationPayload`] - 用户可见通知
//! - [`SyncPayload`] - 资源变更同步信号

pub mod bus;
pub mod payload;

pub use bus::MessageBus;
pub use payload::{BusMessage, NotificationLevel, NotificationPayload, SyncPayload};
