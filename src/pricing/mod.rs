//! 派生价格计算
//!
//! 周租/月租价格始终是 `price` 的纯函数，按需计算，从不存储，
//! 因此 `price` 变化时不会出现陈旧的折扣价。

pub mod calculator;

pub use calculator::{RateCard, monthly_rate, rate_card, weekly_rate};
