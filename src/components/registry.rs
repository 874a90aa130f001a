//! # Component Registry
//!
//! 애플리케이션 하나의 컴포넌트 카탈로그입니다. 로더가 넘긴 클래스 목록에서
//! 등록 정보를 가진 클래스만 골라 [`ComponentInfo`]를 만들고, 컨테이너에 바인딩한 뒤
//! 등록 순서대로 보관합니다.
//!
//! ## 부트스트랩 순서
//!
//! ```text
//! 1. extension.register(ext_classes)          익스텐션이 먼저 자신의 등록을 마침
//! 2. host.register_extension(&ext, &ext_c)    내보낸(export) 컴포넌트만 가져옴
//! 3. host.register(classes)                   호스트 자신의 클래스
//! 4. host.register_data_components()          데이터 컴포넌트 수집
//! 5. host.get_decorators(filter)              라우트/이벤트 테이블 구성
//! ```
//!
//! 모든 등록은 요청 처리 전에 단일 스레드에서 끝나야 하며, 실패하면 부트스트랩
//! 전체가 중단됩니다. 부분 등록 상태로 계속 진행하는 모드는 없습니다.
//!
//! ## 조회 규칙
//!
//! - `get`: `id`는 정확히 일치, `decorator_ids`는 하나라도 가지고 있으면 일치 (OR)
//! - `get_info`: 이 카탈로그만 조회합니다. 내보내지 않은 익스텐션 컴포넌트는 `None`
//! - `get_decorators`: 컴포넌트는 등록 순서, 데코레이터는 컴포넌트 내부 정렬 순서

use std::any::Any;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::components::binder::ComponentBinder;
use crate::components::class::{ClassId, ClassRef};
use crate::components::data::{DataComponentInfo, DataRegistry};
use crate::components::decorator::{DecoratorEntry, DecoratorFilter};
use crate::components::info::ComponentInfo;
use crate::components::metadata::{ComponentMetadata, MetadataStore};
use crate::components::registration::{ComponentType, Scope};
use crate::core::container::{Container, Instance};
use crate::core::errors::RegistrationError;

/// 컴포넌트 조회 필터
///
/// ```rust,ignore
/// let repo = registry.get(&ComponentFilter::new().id("userRepo"));
/// let handlers = registry.get(&ComponentFilter::new().decorator_ids(["http/method", "event/subscribe"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    pub id: Option<String>,
    /// `None`이면 조건 없음, 빈 목록이면 어떤 컴포넌트와도 일치하지 않음
    pub decorator_ids: Option<Vec<String>>,
}

impl ComponentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn decorator_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decorator_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, info: &ComponentInfo) -> bool {
        let id_matches = self.id.as_deref().is_none_or(|id| info.id() == id);
        let decorators_match = self
            .decorator_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| info.has_decorator(id)));

        id_matches && decorators_match
    }
}

/// 소유 컴포넌트 정보가 붙은 데코레이터 항목
#[derive(Debug, Clone, Copy)]
pub struct ComponentDecoratorInfo<'a> {
    pub entry: &'a DecoratorEntry,
    pub component: &'a Arc<ComponentInfo>,
}

/// 진단용 카탈로그 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub total: usize,
    pub exported: usize,
    pub by_type: BTreeMap<String, usize>,
    pub data_components: usize,
}

pub struct ComponentRegistry {
    container: Arc<Container>,
    metadata: Arc<MetadataStore>,
    binder: ComponentBinder,
    registered: Vec<Arc<ComponentInfo>>,
    classes: HashSet<ClassId>,
    data_registry: DataRegistry,
    default_scope: Scope,
}

impl ComponentRegistry {
    pub fn new(container: Arc<Container>, metadata: Arc<MetadataStore>) -> Self {
        Self {
            binder: ComponentBinder::new(Arc::clone(&container)),
            container,
            metadata,
            registered: Vec::new(),
            classes: HashSet::new(),
            data_registry: DataRegistry::new(),
            default_scope: Scope::default(),
        }
    }

    /// 스코프를 지정하지 않은 등록 정보에 적용할 기본 스코프
    pub fn with_default_scope(mut self, scope: Scope) -> Self {
        self.default_scope = scope;
        self
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn metadata(&self) -> &Arc<MetadataStore> {
        &self.metadata
    }

    /// 클래스 목록을 등록합니다.
    ///
    /// 등록 정보가 없는 클래스는 조용히 건너뜁니다. 같은 클래스를 두 번 등록하면
    /// (익스텐션에서 가져온 클래스 포함) [`RegistrationError::Duplicate`]입니다.
    /// 클래스의 정의 블록은 이 호출 전에 [`MetadataStore::define`]으로 실행되어 있어야 합니다.
    ///
    /// 새로 등록된 컴포넌트 수를 반환합니다.
    pub fn register(&mut self, classes: &[ClassRef]) -> Result<usize, RegistrationError> {
        let before = self.registered.len();

        for class in classes {
            let Some(registration) = ComponentMetadata::get_registration(&self.metadata, class.id()) else {
                debug!("Skipping {}: no registration", class.id().short_name());
                continue;
            };

            self.ensure_unique(class.id())?;

            let decorators = ComponentMetadata::get_decorators(&self.metadata, class.id());
            let info = Arc::new(ComponentInfo::new(*class, registration, decorators, self.default_scope));

            self.binder.bind_component(&info)?;
            self.push(info);
        }

        let added = self.registered.len() - before;
        info!("Registered {} component(s), {} in catalog", added, self.registered.len());

        Ok(added)
    }

    /// 익스텐션의 내보낸 컴포넌트를 이 카탈로그로 가져옵니다.
    ///
    /// 익스텐션은 자신의 `register()`를 모두 마친 상태여야 합니다. 가져온 컴포넌트는
    /// 익스텐션 컨테이너로 위임하는 바인딩을 가지므로, 싱글톤은 양쪽에서 같은
    /// 인스턴스로 해결됩니다.
    pub fn register_extension(
        &mut self,
        extension: &ComponentRegistry,
        extension_container: &Arc<Container>,
    ) -> Result<usize, RegistrationError> {
        let exported = extension.get_exported();

        for info in &exported {
            self.ensure_unique(info.class_id())?;
            self.binder.bind_extension_component(info, extension_container)?;
            self.push(Arc::clone(info));
        }

        info!(
            "Imported {} exported component(s) of {} from extension",
            exported.len(),
            extension.count()
        );

        Ok(exported.len())
    }

    /// 필터와 일치하는 컴포넌트를 등록 순서대로 반환합니다.
    pub fn get(&self, filter: &ComponentFilter) -> Vec<Arc<ComponentInfo>> {
        self.registered
            .iter()
            .filter(|info| filter.matches(info))
            .cloned()
            .collect()
    }

    pub fn get_info<T: Any>(&self) -> Option<Arc<ComponentInfo>> {
        self.get_info_for(&ClassId::of::<T>())
    }

    /// 컨테이너가 해결한 인스턴스의 컴포넌트 정보를 찾습니다.
    pub fn get_info_of<T: Any>(&self, _instance: &Arc<T>) -> Option<Arc<ComponentInfo>> {
        self.get_info::<T>()
    }

    /// 타입 소거된 인스턴스([`Container::resolve_token`]의 결과)의 실제 타입으로 찾습니다.
    pub fn get_info_of_instance(&self, instance: &Instance) -> Option<Arc<ComponentInfo>> {
        let instance: &dyn Any = instance.as_ref();
        let type_id = instance.type_id();

        self.registered
            .iter()
            .find(|info| info.class_id().type_id() == type_id)
            .cloned()
    }

    pub fn get_info_for(&self, class: &ClassId) -> Option<Arc<ComponentInfo>> {
        self.registered
            .iter()
            .find(|info| info.class_id() == class)
            .cloned()
    }

    /// 모든 컴포넌트의 데코레이터를 하나의 목록으로 펼칩니다.
    ///
    /// 라우트 테이블, 이벤트 구독 테이블 등을 만들 때 사용하는 주 조회 수단입니다.
    pub fn get_decorators(&self, filter: &DecoratorFilter) -> Vec<ComponentDecoratorInfo<'_>> {
        self.registered
            .iter()
            .flat_map(|component| {
                component
                    .get_decorators(filter)
                    .into_iter()
                    .map(move |entry| ComponentDecoratorInfo { entry, component })
            })
            .collect()
    }

    pub fn get_exported(&self) -> Vec<Arc<ComponentInfo>> {
        self.registered
            .iter()
            .filter(|info| info.is_exported())
            .cloned()
            .collect()
    }

    pub fn components(&self) -> &[Arc<ComponentInfo>] {
        &self.registered
    }

    /// 카탈로그 크기 (진단용)
    pub fn count(&self) -> usize {
        self.registered.len()
    }

    /// `data` 타입 컴포넌트를 데이터 레지스트리에 넘깁니다. 여러 번 호출해도 안전합니다.
    pub fn register_data_components(&mut self) -> usize {
        let data_components = self
            .registered
            .iter()
            .filter(|info| *info.component_type() == ComponentType::Data)
            .cloned()
            .collect();

        self.data_registry.register_data_components(data_components);
        self.data_registry.len()
    }

    pub fn get_data_component(&self, class: &ClassId) -> Option<&DataComponentInfo> {
        self.data_registry.get_data_component(class)
    }

    pub fn data_registry(&self) -> &DataRegistry {
        &self.data_registry
    }

    pub fn summary(&self) -> RegistrySummary {
        let mut by_type = BTreeMap::new();
        for info in &self.registered {
            *by_type.entry(info.component_type().to_string()).or_insert(0) += 1;
        }

        RegistrySummary {
            total: self.registered.len(),
            exported: self.registered.iter().filter(|info| info.is_exported()).count(),
            by_type,
            data_components: self.data_registry.len(),
        }
    }

    fn ensure_unique(&self, class: &ClassId) -> Result<(), RegistrationError> {
        if self.classes.contains(class) {
            return Err(RegistrationError::Duplicate { class: class.name() });
        }
        Ok(())
    }

    fn push(&mut self, info: Arc<ComponentInfo>) {
        debug!("Registered {} ({}, {})", info.id(), info.component_type(), info.scope());
        self.classes.insert(*info.class_id());
        self.registered.push(info);
    }
}
