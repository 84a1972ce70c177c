use serde::{Deserialize, Serialize};
use std::fmt;

// ==================== Notification Level ====================

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// 普通信息
    Info,
    /// 警告
    Warning,
    /// 错误
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// ==================== Payloads ====================

/// 通知载荷 (服务端 -> 客户端)
///
/// 用于向用户展示业务提示，对应仪表盘的 toast。
/// 核心流程里恰好两处触发：可用性更新后、预订确认后。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// 标题
    pub title: String,
    /// 消息内容
    pub message: String,
    /// 通知级别
    pub level: NotificationLevel,
}

/// 同步信号载荷 (服务端 -> 所有客户端)
///
/// 当某个资源发生变更时，服务端广播此信号，
/// 通知所有感兴趣的客户端刷新数据。
///
/// # 示例
/// - `resource`: "bed_category"
/// - `version`: 42
/// - `action`: "updated"
/// - `id`: "2"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// 资源类型
    pub resource: String,
    /// 版本号 (每种资源独立递增)
    pub version: u64,
    /// 变更类型 (例如: "updated", "booked", "released")
    pub action: String,
    /// 资源 ID
    pub id: String,
    /// 资源数据 (可选)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// 总线消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum BusMessage {
    /// 用户可见通知
    Notification(NotificationPayload),
    /// 资源同步信号
    Sync(SyncPayload),
}

impl BusMessage {
    /// 构造 Info 级别通知
    pub fn notification(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Notification(NotificationPayload {
            title: title.into(),
            message: message.into(),
            level: NotificationLevel::Info,
        })
    }

    /// 构造同步信号
    pub fn sync(payload: &SyncPayload) -> Self {
        Self::Sync(payload.clone())
    }
}
