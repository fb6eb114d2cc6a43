//! # 示例应用程序
//!
//! 演示组件扫描、配置类工厂方法和按名称/类型获取 Bean

mod demo;

use anyhow::Context;
use clap::Parser;
use ioc_abstractions::BeanContainer;
use ioc_common::ContainerConfig;
use ioc_context::ApplicationContext;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "IoC 容器示例应用")]
struct Args {
    /// 扫描的根命名空间
    #[arg(short, long, default_value = "example_app::demo")]
    namespace: String,

    /// 日志级别，RUST_LOG 优先
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 按名称获取并展示的 Bean
    #[arg(short, long)]
    bean: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("启动 IoC 示例应用");

    let config = ContainerConfig::load().context("加载容器配置失败")?;
    let mut context = ApplicationContext::new(args.namespace.as_str()).with_config(config);

    if let Err(e) = context.init() {
        error!("根因: {}", e.root_cause());
        return Err(e).context("容器初始化失败");
    }

    let stats = context.stats();
    info!(
        "扫描 {} 个组件, 构造 {} 次, 工厂方法调用 {} 次",
        stats.scanned_components, stats.constructions, stats.factory_invocations
    );
    for name in context.bean_names() {
        println!("{}", name);
    }

    if let Some(name) = &args.bean {
        context
            .get_bean_by_name(name)
            .with_context(|| format!("获取 Bean '{}' 失败", name))?;
        info!("Bean '{}' 已就绪", name);
    }

    if args.namespace == "example_app::demo" {
        let service = context.get_bean::<demo::OrderService>()?;
        let first = service.place_order();
        let second = context.get_bean::<demo::OrderService>()?.place_order();
        info!("同一实例连续生成订单号: {}, {}", first, second);
    }

    Ok(())
}
