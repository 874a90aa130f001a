//! 코어 등록 데코레이터
//!
//! ```rust,ignore
//! fn define(class: &mut ClassDefinition<'_>) {
//!     class.decorate(repository(ComponentOptions::default().with_id("userRepo")));
//! }
//! ```

use serde_json::json;

use crate::components::factory::{ClassDecorator, ComponentFactory, PropertyDecorator};
use crate::components::registration::{ComponentOptions, ComponentType, CoreDecorator};

pub fn component(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Component, options)
}

pub fn service(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Service, options)
}

pub fn repository(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Repository, options)
}

pub fn controller(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Controller, options)
}

pub fn config(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Config, options)
}

pub fn cli(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Cli, options)
}

/// 데이터 타입 컴포넌트. [`field`]와 함께 데이터 레지스트리에 수집됩니다.
pub fn data(options: ComponentOptions) -> ClassDecorator {
    ComponentFactory::decorator(ComponentType::Data, options)
}

/// 데이터 컴포넌트의 필드 선언
///
/// `data_type`은 필드의 자료형 이름입니다 (예: `"string"`, `"UserDto"`).
pub fn field(data_type: &str) -> PropertyDecorator {
    let data_type = data_type.to_string();

    ComponentFactory::property_decorator(CoreDecorator::FIELD, move |ctx| {
        json!({ "property": ctx.member, "dataType": data_type })
    })
}
