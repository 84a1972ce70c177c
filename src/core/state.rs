use std::sync::Arc;

use dashmap::DashMap;

use crate::catalog::CatalogManager;
use crate::core::Config;
use crate::message::{BusMessage, MessageBus, SyncPayload};

/// 资源版本管理器
///
/// 使用 DashMap 实现无锁并发的版本号管理。
/// 每种资源类型维护独立的版本号，支持原子递增。
///
/// # 使用场景
///
/// 用于 broadcast_sync 时自动生成递增的版本号，
/// 确保客户端可以通过版本号判断数据新旧。
#[derive(Debug)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// 创建空的版本管理器
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号
    ///
    /// 如果资源不存在，返回 0
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

impl Default for ResourceVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是本服务的核心数据结构，使用 Arc 实现浅拷贝。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<CatalogManager> | 床位目录管理 |
/// | message_bus | MessageBus | 消息总线 |
/// | resource_versions | Arc<ResourceVersions> | 资源版本管理 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 床位目录管理器
    pub catalog: Arc<CatalogManager>,
    /// 消息总线
    pub message_bus: MessageBus,
    /// 资源版本管理器 (用于 broadcast_sync 自动递增版本号)
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 播种床位目录并创建消息总线。目录是进程内状态，
    /// 重启即重置 (无持久化层)。
    pub fn initialize(config: &Config) -> Self {
        Self {
            config: config.clone(),
            catalog: Arc::new(CatalogManager::new()),
            message_bus: MessageBus::with_capacity(config.bus_channel_capacity),
            resource_versions: Arc::new(ResourceVersions::new()),
        }
    }

    /// 获取目录管理器
    pub fn catalog(&self) -> &CatalogManager {
        &self.catalog
    }

    /// 发送用户可见通知 (fire-and-forget)
    ///
    /// 投递失败对目录状态不可见
    pub fn notify(&self, title: impl Into<String>, message: impl Into<String>) {
        self.message_bus
            .publish(BusMessage::notification(title, message));
    }

    /// 广播同步消息
    ///
    /// 向所有订阅者广播资源变更通知。
    /// 版本号由 ResourceVersions 自动递增管理。
    ///
    /// # 参数
    /// - `resource`: 资源类型 (如 "bed_category")
    /// - `action`: 变更类型 ("updated", "booked", "released")
    /// - `id`: 资源 ID
    /// - `data`: 资源数据 (可选)
    pub fn broadcast_sync<T: serde::Serialize>(
        &self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
    ) {
        let version = self.resource_versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        self.message_bus.publish(BusMessage::sync(&payload));
    }
}
