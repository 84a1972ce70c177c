//! 消息总线核心实现
//!
//! # 消息流
//!
//! ```text
//! API Handler ──▶ publish() ──▶ broadcast::Sender ──▶ 所有订阅者
//! ```
//!
//! 发布是 fire-and-forget 的：没有订阅者时消息被丢弃并记录 debug 日志，
//! 目录状态对此不可见。

use tokio::sync::broadcast;

use super::payload::BusMessage;

/// 默认广播通道容量
const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// 消息总线 - 负责通知和同步信号的广播
#[derive(Debug, Clone)]
pub struct MessageBus {
    /// 服务器到客户端的广播通道
    server_tx: broadcast::Sender<BusMessage>,
}

impl MessageBus {
    /// 创建默认容量的消息总线
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// 创建指定容量的消息总线
    pub fn with_capacity(capacity: usize) -> Self {
        let (server_tx, _) = broadcast::channel(capacity);
        Self { server_tx }
    }

    /// 发布消息 (服务器 -> 所有订阅者)
    ///
    /// 没有订阅者不是错误，投递结果对调用方不可观察
    pub fn publish(&self, msg: BusMessage) {
        if let Err(e) = self.server_tx.send(msg) {
            tracing::debug!(error = %e, "Bus message dropped, no subscribers");
        }
    }

    /// 订阅总线消息
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.server_tx.subscribe()
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.server_tx.receiver_count()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}
