use ioc_common::{Bean, BeanArgs, ComponentCatalog, ComponentKind};
use ioc_macros::{component, injectable};
use std::any::TypeId;
use std::sync::Arc;

#[derive(Debug)]
#[injectable]
struct Clock;

#[derive(Debug)]
#[component]
struct Ticker(Arc<Clock>, u64);

#[derive(Debug)]
#[component]
struct Scheduler {
    ticker: Arc<Ticker>,
    name: String,
}

#[component]
trait Job {}

fn main() {
    let catalog = ComponentCatalog::global();

    let scheduler = catalog.find(TypeId::of::<Scheduler>()).unwrap();
    assert_eq!(scheduler.kind, ComponentKind::Component);
    assert_eq!(scheduler.constructors[0].parameter_types[0].name, "Ticker");

    let ticker: Bean = Arc::new(Ticker(Arc::new(Clock), 30));
    let bean = scheduler.constructors[0]
        .invoke(BeanArgs::new(vec![ticker]))
        .unwrap();
    let scheduler = bean.downcast::<Scheduler>().unwrap();
    assert_eq!(scheduler.ticker.1, 30);
    assert!(scheduler.name.is_empty());

    let ticker = catalog.find(TypeId::of::<Ticker>()).unwrap();
    let clock: Bean = Arc::new(Clock);
    let bean = ticker.constructors[0]
        .invoke(BeanArgs::new(vec![clock]))
        .unwrap();
    assert_eq!(bean.downcast::<Ticker>().unwrap().1, 0);

    let clock = catalog.find(TypeId::of::<Clock>()).unwrap();
    assert_eq!(clock.kind, ComponentKind::Plain);

    let job = catalog.find(TypeId::of::<dyn Job>()).unwrap();
    assert_eq!(job.kind, ComponentKind::Interface);
}
