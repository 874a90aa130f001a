//! # Metadata Store
//!
//! 클래스 식별자에 구조화된 데이터를 붙이는 프로세스 전역 사이드 테이블입니다.
//! 키는 `(네임스페이스, 클래스)` 쌍이므로 서로 관계없는 기능 영역이
//! 각자 네임스페이스를 점유해도 충돌하지 않습니다.
//!
//! 숨겨진 전역 싱글톤이 아니라, 부트스트랩 코드가 `Arc<MetadataStore>`를 만들어
//! 호스트 앱과 모든 익스텐션에 명시적으로 전달합니다. 항목은 삭제되지 않으며
//! 저장소가 해제될 때 함께 사라집니다.
//!
//! ## 네임스페이스
//!
//! | 네임스페이스 | 값 | 관리 타입 |
//! |--------------|----|-----------|
//! | `core/component/registration` | [`Registration`] | [`ComponentMetadata`] |
//! | `core/component/decorators` | `Vec<DecoratorEntry>` | [`ComponentMetadata`] |
//! | `core/component/controller-interceptors` | `Vec<T>` | [`ControllerMetadata`] |

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, warn};

use crate::components::class::{ClassId, ClassRef};
use crate::components::decorator::DecoratorEntry;
use crate::components::registration::Registration;

type MetadataKey = (&'static str, TypeId);

/// 네임스페이스로 분리된 클래스 메타데이터 저장소
#[derive(Default)]
pub struct MetadataStore {
    entries: RwLock<HashMap<MetadataKey, Arc<dyn Any + Send + Sync>>>,
    defined: RwLock<HashSet<TypeId>>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(namespace, class)`에 값을 기록합니다. 기존 값은 덮어씁니다.
    pub fn set_class_metadata<V: Any + Send + Sync>(&self, namespace: &'static str, class: &ClassId, value: V) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((namespace, class.type_id()), Arc::new(value));
    }

    /// `(namespace, class)`에 기록된 값을 반환합니다.
    ///
    /// 값이 없거나 저장된 타입이 `V`와 다르면 `None`입니다.
    pub fn get_class_metadata<V: Any + Send + Sync + Clone>(&self, namespace: &'static str, class: &ClassId) -> Option<V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(namespace, class.type_id()))
            .and_then(|value| value.downcast_ref::<V>())
            .cloned()
    }

    /// 기존 값(없으면 기본값)을 꺼내 수정한 뒤 다시 기록합니다.
    ///
    /// 읽기-수정-쓰기가 하나의 쓰기 락 안에서 이루어집니다.
    pub fn update_class_metadata<V, F>(&self, namespace: &'static str, class: &ClassId, update: F)
    where
        V: Any + Send + Sync + Clone + Default,
        F: FnOnce(&mut V),
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let key = (namespace, class.type_id());

        let mut value = entries
            .get(&key)
            .and_then(|value| value.downcast_ref::<V>())
            .cloned()
            .unwrap_or_default();

        update(&mut value);
        entries.insert(key, Arc::new(value));
    }

    /// 클래스의 데코레이터 정의 블록을 실행합니다.
    ///
    /// 클래스당 한 번만 실행되며, 이미 정의된 클래스면 `false`를 반환합니다.
    /// `register()`보다 먼저 호출되어야 하며, 그렇지 않으면 해당 클래스는
    /// 등록 정보가 없는 것으로 취급됩니다.
    pub fn define(&self, class: &ClassRef) -> bool {
        let newly_defined = self
            .defined
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(class.id().type_id());

        if newly_defined {
            debug!("Defining class {}", class.id().short_name());
            class.run_definition(self);
        }

        newly_defined
    }

    pub fn define_all(&self, classes: &[ClassRef]) {
        for class in classes {
            self.define(class);
        }
    }

    pub fn is_defined(&self, class: &ClassId) -> bool {
        self.defined
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&class.type_id())
    }
}

/// 컴포넌트 등록 정보와 데코레이터 목록을 다루는 메타데이터 접근자
pub struct ComponentMetadata;

impl ComponentMetadata {
    pub const PREFIX: &'static str = "core/component";
    pub const REGISTRATION: &'static str = "core/component/registration";
    pub const DECORATORS: &'static str = "core/component/decorators";

    pub fn get_registration(store: &MetadataStore, class: &ClassId) -> Option<Registration> {
        store.get_class_metadata(Self::REGISTRATION, class)
    }

    /// 단일 슬롯 등록 정보를 기록합니다.
    ///
    /// 한 클래스에 등록 데코레이터가 두 번 적용되면 마지막 값이 남고 경고를 남깁니다.
    pub fn set_registration(store: &MetadataStore, class: &ClassId, registration: Registration) {
        if let Some(previous) = Self::get_registration(store, class) {
            warn!(
                "{} is already registered as {}, overriding with {}",
                class.short_name(),
                previous.component_type,
                registration.component_type
            );
        }

        store.set_class_metadata(Self::REGISTRATION, class, registration);
    }

    /// 적용 순서대로 기록된 데코레이터 목록 (정렬 전)
    pub fn get_decorators(store: &MetadataStore, class: &ClassId) -> Vec<DecoratorEntry> {
        store
            .get_class_metadata(Self::DECORATORS, class)
            .unwrap_or_default()
    }

    pub fn add_decorator(store: &MetadataStore, class: &ClassId, entry: DecoratorEntry) {
        store.update_class_metadata(Self::DECORATORS, class, |entries: &mut Vec<DecoratorEntry>| {
            entries.push(entry);
        });
    }
}

/// 컨트롤러 인터셉터 메타데이터 접근자
///
/// 인터셉터 정보의 타입은 사용하는 어댑터가 정합니다.
pub struct ControllerMetadata;

impl ControllerMetadata {
    // TODO: 인터셉터 접두사를 ComponentMetadata::PREFIX 체계로 통합
    pub const PREFIX: &'static str = "core/component/controller";
    pub const INTERCEPTOR_PREFIX: &'static str = "core/component/controller-interceptors";

    pub fn get_interceptors<T: Any + Send + Sync + Clone>(store: &MetadataStore, class: &ClassId) -> Vec<T> {
        store
            .get_class_metadata(Self::INTERCEPTOR_PREFIX, class)
            .unwrap_or_default()
    }

    pub fn set_interceptor<T: Any + Send + Sync + Clone>(store: &MetadataStore, class: &ClassId, info: T) {
        store.update_class_metadata(Self::INTERCEPTOR_PREFIX, class, |interceptors: &mut Vec<T>| {
            interceptors.push(info);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::class::Class;
    use crate::components::factory::{ClassDefinition, ComponentFactory};
    use crate::components::registration::{ComponentOptions, ComponentType};
    use crate::core::container::Resolver;
    use crate::core::errors::ContainerError;

    struct Cache;
    struct Mailer;

    struct Scheduler;

    impl Class for Scheduler {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(Scheduler)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.method("start", ComponentFactory::method_marker("lifecycle/init"));
        }
    }

    #[test]
    fn test_define_runs_once_per_class() {
        let store = MetadataStore::new();
        let scheduler = ClassRef::of::<Scheduler>();

        assert!(!store.is_defined(scheduler.id()));
        assert!(store.define(&scheduler));
        assert!(!store.define(&scheduler));
        assert!(store.is_defined(scheduler.id()));

        // 두 번째 호출은 데코레이터를 다시 기록하지 않음
        assert_eq!(ComponentMetadata::get_decorators(&store, scheduler.id()).len(), 1);
    }

    #[test]
    fn test_set_and_get_class_metadata() {
        let store = MetadataStore::new();
        let cache = ClassId::of::<Cache>();

        assert_eq!(store.get_class_metadata::<String>("feature/a", &cache), None);

        store.set_class_metadata("feature/a", &cache, "first".to_string());
        store.set_class_metadata("feature/a", &cache, "second".to_string());

        // 덮어쓰기
        assert_eq!(store.get_class_metadata::<String>("feature/a", &cache), Some("second".to_string()));
        // 타입이 다르면 없는 것으로 취급
        assert_eq!(store.get_class_metadata::<u32>("feature/a", &cache), None);
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let store = MetadataStore::new();
        let cache = ClassId::of::<Cache>();
        let mailer = ClassId::of::<Mailer>();

        store.set_class_metadata("feature/a", &cache, 1u32);
        store.set_class_metadata("feature/b", &cache, 2u32);

        assert_eq!(store.get_class_metadata::<u32>("feature/a", &cache), Some(1));
        assert_eq!(store.get_class_metadata::<u32>("feature/b", &cache), Some(2));
        assert_eq!(store.get_class_metadata::<u32>("feature/a", &mailer), None);
    }

    #[test]
    fn test_registration_slot_is_overwritten() {
        let store = MetadataStore::new();
        let cache = ClassId::of::<Cache>();

        ComponentMetadata::set_registration(
            &store,
            &cache,
            Registration::new(ComponentType::Component, ComponentOptions::default()),
        );
        ComponentMetadata::set_registration(
            &store,
            &cache,
            Registration::new(ComponentType::Service, ComponentOptions::default().with_id("cache")),
        );

        let registration = ComponentMetadata::get_registration(&store, &cache).unwrap();
        assert_eq!(registration.component_type, ComponentType::Service);
        assert_eq!(registration.id.as_deref(), Some("cache"));
    }

    #[test]
    fn test_controller_interceptors_accumulate() {
        let store = MetadataStore::new();
        let controller = ClassId::of::<Mailer>();

        assert!(ControllerMetadata::get_interceptors::<&'static str>(&store, &controller).is_empty());

        ControllerMetadata::set_interceptor(&store, &controller, "auth");
        ControllerMetadata::set_interceptor(&store, &controller, "audit");

        assert_eq!(
            ControllerMetadata::get_interceptors::<&'static str>(&store, &controller),
            vec!["auth", "audit"]
        );
    }
}
