//! 示例组件

use ioc_macros::{component, configuration, injectable};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// 数据源
#[derive(Debug)]
pub struct DataSource {
    pub url: String,
}

/// 订单号生成器
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// 持久化配置
#[derive(Debug, Default)]
pub struct PersistenceConfig;

#[configuration]
impl PersistenceConfig {
    #[bean]
    fn data_source(&self) -> DataSource {
        DataSource {
            url: "mem://orders".to_string(),
        }
    }

    #[bean]
    fn id_generator(&self) -> IdGenerator {
        IdGenerator::default()
    }
}

/// 系统时钟
#[derive(Debug)]
#[injectable]
pub struct Clock;

impl Clock {
    pub fn now_millis(&self) -> u128 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
    }
}

/// 订单仓储
#[derive(Debug)]
#[component]
pub struct OrderRepository {
    data_source: Arc<DataSource>,
}

impl OrderRepository {
    pub fn save(&self, id: u64) {
        info!("保存订单 #{} 到 {}", id, self.data_source.url);
    }
}

/// 订单服务
#[derive(Debug)]
#[component]
pub struct OrderService {
    repository: Arc<OrderRepository>,
    ids: Arc<IdGenerator>,
    clock: Arc<Clock>,
}

impl OrderService {
    pub fn place_order(&self) -> u64 {
        let id = self.ids.next_id();
        info!("创建订单 #{}, 时间戳 {}", id, self.clock.now_millis());
        self.repository.save(id);
        id
    }
}

/// 通知渠道，扫描时跳过
#[allow(dead_code)]
#[component]
pub trait Notifier {}
