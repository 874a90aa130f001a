//! # Component Factory
//!
//! 클래스/메서드/파라미터/프로퍼티 데코레이터를 만드는 빌더입니다.
//! 만들어진 데코레이터를 적용하면 데이터 추출 함수가 데코레이션 컨텍스트와 함께
//! 실행되고, 결과가 [`DecoratorEntry`]로 포장되어 소유 클래스의 메타데이터에
//! 누적됩니다.
//!
//! 등록 데코레이터(`component`, `service`, `repository` ...)는 추가로
//! 단일 슬롯 [`Registration`]을 기록합니다.
//!
//! ## 익스텐션 데코레이터 정의 예제
//!
//! ```rust,ignore
//! use serde_json::json;
//! use component_registry::components::{ComponentFactory, MethodDecorator, ParameterDecorator};
//!
//! pub fn http_get(path: &str) -> MethodDecorator {
//!     let path = path.to_string();
//!     ComponentFactory::method_decorator("http/method", move |ctx| {
//!         json!({ "name": ctx.member, "method": "GET", "path": path })
//!     })
//! }
//!
//! pub fn path_param(key: &str) -> ParameterDecorator {
//!     let key = key.to_string();
//!     ComponentFactory::parameter_decorator("http/param", move |_| json!({ "type": "path", "key": key }))
//! }
//! ```
//!
//! ## 적용 예제
//!
//! ```rust,ignore
//! impl Class for UserController {
//!     fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError> { ... }
//!
//!     fn define(class: &mut ClassDefinition<'_>) {
//!         class
//!             .decorate(controller(ComponentOptions::default()))
//!             .method("get_user", http_get("/users/:id"))
//!             .parameter("get_user", 0, path_param("id"));
//!     }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::components::class::ClassId;
use crate::components::decorator::{DecoratorEntry, DecoratorKind};
use crate::components::metadata::{ComponentMetadata, ControllerMetadata, MetadataStore};
use crate::components::registration::{ComponentOptions, ComponentType, Registration};

/// 데코레이터가 적용되는 위치 정보
///
/// 데이터 추출 함수에 전달됩니다.
#[derive(Debug, Clone, Copy)]
pub struct DecorationContext<'a> {
    pub class: &'a ClassId,
    pub member: Option<&'a str>,
    pub index: Option<usize>,
}

/// 데이터 추출 함수
pub type DataFn = Arc<dyn Fn(&DecorationContext<'_>) -> Value + Send + Sync>;

#[derive(Clone)]
struct DecoratorSpec {
    id: String,
    data: Option<DataFn>,
}

impl DecoratorSpec {
    fn new(id: impl Into<String>, data: Option<DataFn>) -> Self {
        Self { id: id.into(), data }
    }

    fn record(&self, store: &MetadataStore, kind: DecoratorKind, context: DecorationContext<'_>) {
        let data = self
            .data
            .as_ref()
            .map(|extract| extract(&context))
            .unwrap_or(Value::Null);

        ComponentMetadata::add_decorator(
            store,
            context.class,
            DecoratorEntry {
                id: self.id.clone(),
                kind,
                member: context.member.map(str::to_string),
                index: context.index,
                data,
            },
        );
    }
}

/// 클래스 데코레이터
///
/// `registration`이 있으면 등록 데코레이터로 동작합니다.
#[derive(Clone)]
pub struct ClassDecorator {
    spec: DecoratorSpec,
    registration: Option<(ComponentType, ComponentOptions)>,
}

impl ClassDecorator {
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn apply(&self, store: &MetadataStore, class: &ClassId) {
        if let Some((component_type, options)) = &self.registration {
            ComponentMetadata::set_registration(
                store,
                class,
                Registration::new(component_type.clone(), options.clone()),
            );
        }

        self.spec.record(
            store,
            DecoratorKind::Class,
            DecorationContext { class, member: None, index: None },
        );
    }
}

/// 메서드 데코레이터
#[derive(Clone)]
pub struct MethodDecorator {
    spec: DecoratorSpec,
}

impl MethodDecorator {
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn apply(&self, store: &MetadataStore, class: &ClassId, method: &str) {
        self.spec.record(
            store,
            DecoratorKind::Method,
            DecorationContext { class, member: Some(method), index: None },
        );
    }
}

/// 파라미터 데코레이터
#[derive(Clone)]
pub struct ParameterDecorator {
    spec: DecoratorSpec,
}

impl ParameterDecorator {
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn apply(&self, store: &MetadataStore, class: &ClassId, method: &str, index: usize) {
        self.spec.record(
            store,
            DecoratorKind::Parameter,
            DecorationContext { class, member: Some(method), index: Some(index) },
        );
    }
}

/// 프로퍼티 데코레이터
#[derive(Clone)]
pub struct PropertyDecorator {
    spec: DecoratorSpec,
}

impl PropertyDecorator {
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn apply(&self, store: &MetadataStore, class: &ClassId, property: &str) {
        self.spec.record(
            store,
            DecoratorKind::Property,
            DecorationContext { class, member: Some(property), index: None },
        );
    }
}

/// 데코레이터 빌더
pub struct ComponentFactory;

impl ComponentFactory {
    /// 등록 데코레이터를 만듭니다.
    ///
    /// 데코레이터 ID는 컴포넌트 종류에서 정해지며, 옵션이 항목 데이터로 기록됩니다.
    pub fn decorator(component_type: ComponentType, options: ComponentOptions) -> ClassDecorator {
        let data = json!({
            "id": options.id,
            "scope": options.scope,
            "export": options.export,
        });

        Self::component_decorator(component_type, options, move |_| data.clone())
    }

    /// 데이터 추출 함수를 가진 등록 데코레이터를 만듭니다.
    ///
    /// 익스텐션이 자신만의 컴포넌트 종류를 정의할 때 사용합니다.
    pub fn component_decorator<F>(component_type: ComponentType, options: ComponentOptions, data: F) -> ClassDecorator
    where
        F: Fn(&DecorationContext<'_>) -> Value + Send + Sync + 'static,
    {
        ClassDecorator {
            spec: DecoratorSpec::new(component_type.decorator_id(), Some(Arc::new(data))),
            registration: Some((component_type, options)),
        }
    }

    pub fn class_decorator<F>(id: impl Into<String>, data: F) -> ClassDecorator
    where
        F: Fn(&DecorationContext<'_>) -> Value + Send + Sync + 'static,
    {
        ClassDecorator {
            spec: DecoratorSpec::new(id, Some(Arc::new(data))),
            registration: None,
        }
    }

    pub fn method_decorator<F>(id: impl Into<String>, data: F) -> MethodDecorator
    where
        F: Fn(&DecorationContext<'_>) -> Value + Send + Sync + 'static,
    {
        MethodDecorator {
            spec: DecoratorSpec::new(id, Some(Arc::new(data))),
        }
    }

    pub fn parameter_decorator<F>(id: impl Into<String>, data: F) -> ParameterDecorator
    where
        F: Fn(&DecorationContext<'_>) -> Value + Send + Sync + 'static,
    {
        ParameterDecorator {
            spec: DecoratorSpec::new(id, Some(Arc::new(data))),
        }
    }

    pub fn property_decorator<F>(id: impl Into<String>, data: F) -> PropertyDecorator
    where
        F: Fn(&DecorationContext<'_>) -> Value + Send + Sync + 'static,
    {
        PropertyDecorator {
            spec: DecoratorSpec::new(id, Some(Arc::new(data))),
        }
    }

    /// 데이터가 없는 마커 메서드 데코레이터
    pub fn method_marker(id: impl Into<String>) -> MethodDecorator {
        MethodDecorator {
            spec: DecoratorSpec::new(id, None),
        }
    }
}

/// [`Class::define`](crate::components::class::Class::define)에 전달되는 정의 컨텍스트
///
/// 데코레이터 적용 대상을 현재 클래스로 고정하고, 체이닝 가능한 적용 메서드를 제공합니다.
pub struct ClassDefinition<'a> {
    store: &'a MetadataStore,
    class: ClassId,
}

impl<'a> ClassDefinition<'a> {
    pub(crate) fn new(store: &'a MetadataStore, class: ClassId) -> Self {
        Self { store, class }
    }

    pub fn class(&self) -> &ClassId {
        &self.class
    }

    pub fn store(&self) -> &'a MetadataStore {
        self.store
    }

    pub fn decorate(&mut self, decorator: ClassDecorator) -> &mut Self {
        decorator.apply(self.store, &self.class);
        self
    }

    pub fn method(&mut self, method: &str, decorator: MethodDecorator) -> &mut Self {
        decorator.apply(self.store, &self.class, method);
        self
    }

    pub fn parameter(&mut self, method: &str, index: usize, decorator: ParameterDecorator) -> &mut Self {
        decorator.apply(self.store, &self.class, method, index);
        self
    }

    pub fn property(&mut self, property: &str, decorator: PropertyDecorator) -> &mut Self {
        decorator.apply(self.store, &self.class, property);
        self
    }

    /// 컨트롤러 인터셉터 정보를 추가합니다.
    pub fn interceptor<T: Any + Send + Sync + Clone>(&mut self, info: T) -> &mut Self {
        ControllerMetadata::set_interceptor(self.store, &self.class, info);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::registration::Scope;
    use serde_json::json;

    struct UserController;

    #[test]
    fn test_member_decorators_record_context() {
        let store = MetadataStore::new();
        let class = ClassId::of::<UserController>();

        let route = ComponentFactory::method_decorator("http/method", |ctx| {
            json!({ "name": ctx.member, "method": "GET" })
        });
        let param = ComponentFactory::parameter_decorator("http/param", |ctx| json!({ "index": ctx.index }));
        let field = ComponentFactory::property_decorator("json/get", |_| json!({ "path": "$.user" }));

        let mut definition = ClassDefinition::new(&store, class);
        definition
            .method("get_user", route)
            .parameter("get_user", 0, param)
            .property("profile", field);

        let entries = ComponentMetadata::get_decorators(&store, &class);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].kind, DecoratorKind::Method);
        assert_eq!(entries[0].member.as_deref(), Some("get_user"));
        assert_eq!(entries[0].data, json!({ "name": "get_user", "method": "GET" }));

        assert_eq!(entries[1].kind, DecoratorKind::Parameter);
        assert_eq!(entries[1].index, Some(0));
        assert_eq!(entries[1].data, json!({ "index": 0 }));

        assert_eq!(entries[2].kind, DecoratorKind::Property);
        assert_eq!(entries[2].member.as_deref(), Some("profile"));
    }

    #[test]
    fn test_registration_decorator_writes_single_slot() {
        let store = MetadataStore::new();
        let class = ClassId::of::<UserController>();

        let decorator = ComponentFactory::decorator(
            ComponentType::Controller,
            ComponentOptions::default().with_id("users").exported(),
        );
        assert_eq!(decorator.id(), "core/controller");

        ClassDefinition::new(&store, class).decorate(decorator);

        let registration = ComponentMetadata::get_registration(&store, &class).unwrap();
        assert_eq!(registration.component_type, ComponentType::Controller);
        assert_eq!(registration.id.as_deref(), Some("users"));
        assert!(registration.export);

        // 등록 데코레이터도 클래스 항목을 하나 남김
        let entries = ComponentMetadata::get_decorators(&store, &class);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DecoratorKind::Class);
        assert_eq!(entries[0].data["id"], json!("users"));
    }

    #[test]
    fn test_registration_decorator_data_keeps_every_option() {
        let store = MetadataStore::new();
        let class = ClassId::of::<UserController>();

        ClassDefinition::new(&store, class).decorate(ComponentFactory::decorator(
            ComponentType::Service,
            ComponentOptions::default().with_scope(Scope::Transient),
        ));

        let entries = ComponentMetadata::get_decorators(&store, &class);
        assert_eq!(
            entries[0].data,
            json!({ "id": null, "scope": "transient", "export": false })
        );
    }

    #[test]
    fn test_plain_class_decorator_has_no_registration() {
        let store = MetadataStore::new();
        let class = ClassId::of::<UserController>();

        ClassDefinition::new(&store, class)
            .decorate(ComponentFactory::class_decorator("socket/namespace", |_| json!({ "name": "/chat" })));

        assert!(ComponentMetadata::get_registration(&store, &class).is_none());
        assert_eq!(ComponentMetadata::get_decorators(&store, &class).len(), 1);
    }

    #[test]
    fn test_method_marker_has_null_data() {
        let store = MetadataStore::new();
        let class = ClassId::of::<UserController>();

        ClassDefinition::new(&store, class).method("on_init", ComponentFactory::method_marker("lifecycle/init"));

        let entries = ComponentMetadata::get_decorators(&store, &class);
        assert_eq!(entries[0].data, Value::Null);
    }
}
