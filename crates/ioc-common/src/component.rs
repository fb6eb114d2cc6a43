//! 组件描述符定义
//!
//! 描述符是组件元数据的声明式表示：类型、种类、构造器签名以及工厂方法。
//! 过程宏在程序启动时生成并注册描述符，也可以手动构建。

use crate::errors::{BoxError, ContainerError, ContainerResult};
use crate::metadata::TypeInfo;
use crate::naming;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 容器持有的 Bean 实例
pub type Bean = Arc<dyn Any + Send + Sync>;

/// 构造器调用函数类型
pub type ConstructorFn = Arc<dyn Fn(BeanArgs) -> Result<Bean, BoxError> + Send + Sync>;

/// 工厂方法调用函数类型，第一个参数为配置类实例
pub type FactoryMethodFn = Arc<dyn Fn(&Bean, BeanArgs) -> Result<Bean, BoxError> + Send + Sync>;

/// 组件种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// 可构造的普通类型，不参与扫描
    Plain,
    /// 组件
    Component,
    /// 配置类，通过工厂方法产出 Bean
    Configuration,
    /// 标注在 trait 上的组件标记，不可实例化
    Interface,
}

impl ComponentKind {
    /// 是否带有组件标记（配置类也是组件）
    pub fn is_component(self) -> bool {
        matches!(self, Self::Component | Self::Configuration | Self::Interface)
    }
}

/// 已解析的构造参数
///
/// 按参数声明顺序依次取出。
pub struct BeanArgs {
    values: std::vec::IntoIter<Bean>,
    index: usize,
}

impl BeanArgs {
    /// 创建参数列表
    pub fn new(values: Vec<Bean>) -> Self {
        Self {
            values: values.into_iter(),
            index: 0,
        }
    }

    /// 空参数列表
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// 取出下一个参数并转换为具体类型
    pub fn take<T: Any + Send + Sync>(&mut self) -> ContainerResult<Arc<T>> {
        let index = self.index;
        self.index += 1;

        let value = self
            .values
            .next()
            .ok_or_else(|| ContainerError::MissingArgument {
                index,
                expected: std::any::type_name::<T>().to_string(),
            })?;

        value
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                bean_name: format!("参数 #{}", index),
                expected: std::any::type_name::<T>().to_string(),
            })
    }

    /// 剩余参数数量
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

/// 构造器描述符
#[derive(Clone)]
pub struct ConstructorDescriptor {
    /// 参数类型，按声明顺序
    pub parameter_types: Vec<TypeInfo>,
    /// 是否为优先使用的必需参数构造器
    pub required_args: bool,
    invoke: ConstructorFn,
}

impl ConstructorDescriptor {
    /// 创建构造器描述符
    pub fn new<T, F>(parameter_types: Vec<TypeInfo>, constructor: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(BeanArgs) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            parameter_types,
            required_args: false,
            invoke: Arc::new(move |args: BeanArgs| -> Result<Bean, BoxError> {
                Ok(Arc::new(constructor(args)?) as Bean)
            }),
        }
    }

    /// 使用 `Default` 的无参构造器
    pub fn from_default<T>() -> Self
    where
        T: Default + Any + Send + Sync,
    {
        Self::new(Vec::new(), |_| Ok(T::default()))
    }

    /// 标记为必需参数构造器
    pub fn required_args(mut self) -> Self {
        self.required_args = true;
        self
    }

    /// 调用构造器
    pub fn invoke(&self, args: BeanArgs) -> Result<Bean, BoxError> {
        (self.invoke)(args)
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("parameter_types", &self.parameter_types)
            .field("required_args", &self.required_args)
            .field("invoke", &"<function>")
            .finish()
    }
}

/// 工厂方法描述符
#[derive(Clone)]
pub struct FactoryMethodDescriptor {
    /// 声明的方法名
    pub method_name: String,
    /// 参数类型，按声明顺序
    pub parameter_types: Vec<TypeInfo>,
    /// 产出值的类型
    pub return_type: TypeInfo,
    invoke: FactoryMethodFn,
}

impl FactoryMethodDescriptor {
    /// 创建工厂方法描述符
    ///
    /// `C` 为声明该方法的配置类，`T` 为产出值的类型。
    pub fn new<C, T, F>(
        method_name: impl Into<String>,
        parameter_types: Vec<TypeInfo>,
        method: F,
    ) -> Self
    where
        C: Any + Send + Sync,
        T: Any + Send + Sync,
        F: Fn(&C, BeanArgs) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            method_name: method_name.into(),
            parameter_types,
            return_type: TypeInfo::of::<T>(),
            invoke: Arc::new(move |config: &Bean, args: BeanArgs| -> Result<Bean, BoxError> {
                let config = config.downcast_ref::<C>().ok_or_else(|| {
                    ContainerError::TypeMismatch {
                        bean_name: "配置类实例".to_string(),
                        expected: std::any::type_name::<C>().to_string(),
                    }
                })?;
                Ok(Arc::new(method(config, args)?) as Bean)
            }),
        }
    }

    /// 工厂方法产出的 Bean 名称
    pub fn bean_name(&self) -> String {
        naming::bean_name(&self.method_name)
    }

    /// 在配置类实例上调用方法
    pub fn invoke(&self, config: &Bean, args: BeanArgs) -> Result<Bean, BoxError> {
        (self.invoke)(config, args)
    }
}

impl fmt::Debug for FactoryMethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryMethodDescriptor")
            .field("method_name", &self.method_name)
            .field("parameter_types", &self.parameter_types)
            .field("return_type", &self.return_type)
            .field("invoke", &"<function>")
            .finish()
    }
}

/// 组件描述符
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 组件种类
    pub kind: ComponentKind,
    /// 声明的构造器，按声明顺序
    pub constructors: Vec<ConstructorDescriptor>,
    /// 声明的工厂方法，按声明顺序
    pub factory_methods: Vec<FactoryMethodDescriptor>,
}

impl ComponentDescriptor {
    /// 创建新的组件描述符
    pub fn new<T: ?Sized + 'static>(kind: ComponentKind) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            kind,
            constructors: Vec::new(),
            factory_methods: Vec::new(),
        }
    }

    /// 组件
    pub fn component<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(ComponentKind::Component)
    }

    /// 配置类，使用 `Default` 作为无参构造器
    pub fn configuration<T>() -> Self
    where
        T: Default + Any + Send + Sync,
    {
        Self::new::<T>(ComponentKind::Configuration)
            .with_constructor(ConstructorDescriptor::from_default::<T>())
    }

    /// 普通可构造类型
    pub fn plain<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(ComponentKind::Plain)
    }

    /// trait 上的组件标记
    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(ComponentKind::Interface)
    }

    /// 添加构造器
    pub fn with_constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// 添加工厂方法
    pub fn with_factory_method(mut self, method: FactoryMethodDescriptor) -> Self {
        self.factory_methods.push(method);
        self
    }

    /// 由类型名推导的 Bean 名称
    pub fn bean_name(&self) -> String {
        naming::bean_name_of(&self.type_info)
    }

    /// 是否为配置类
    pub fn is_configuration(&self) -> bool {
        self.kind == ComponentKind::Configuration
    }

    /// 是否为 trait 标记
    pub fn is_interface(&self) -> bool {
        self.kind == ComponentKind::Interface
    }

    /// 选择用于实例化的构造器
    ///
    /// 优先使用标记为必需参数的构造器，否则退回第一个声明的构造器。
    /// 退回规则依赖声明顺序，不保证稳定。
    pub fn select_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors
            .iter()
            .find(|c| c.required_args)
            .or_else(|| self.constructors.first())
    }
}
