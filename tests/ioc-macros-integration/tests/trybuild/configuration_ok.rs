use ioc_common::{ComponentCatalog, ComponentKind};
use ioc_macros::configuration;
use std::any::TypeId;
use std::sync::Arc;

#[derive(Debug)]
struct Pool {
    size: usize,
}

#[derive(Debug)]
struct Gateway {
    pool: Arc<Pool>,
}

#[derive(Debug)]
struct GatewayError;

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("gateway unavailable")
    }
}

impl std::error::Error for GatewayError {}

#[derive(Debug, Default)]
struct NetworkConfig;

#[configuration]
impl NetworkConfig {
    #[bean]
    fn pool(&self) -> Pool {
        Pool { size: 8 }
    }

    #[bean]
    fn gateway(&self, pool: Arc<Pool>) -> Result<Gateway, GatewayError> {
        Ok(Gateway { pool })
    }
}

fn main() {
    let config = NetworkConfig;
    assert_eq!(config.pool().size, 8);
    let gateway = config.gateway(Arc::new(Pool { size: 2 })).unwrap();
    assert_eq!(gateway.pool.size, 2);

    let catalog = ComponentCatalog::global();
    let descriptor = catalog.find(TypeId::of::<NetworkConfig>()).unwrap();
    assert_eq!(descriptor.kind, ComponentKind::Configuration);
    assert_eq!(descriptor.factory_methods.len(), 2);
}
