//! # Components Module
//!
//! 컴포넌트 메타데이터와 레지스트리 서브시스템입니다.
//!
//! ## 모듈 구성
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`metadata`] | `(네임스페이스, 클래스)` 키의 메타데이터 저장소 |
//! | [`factory`] | 클래스/메서드/파라미터/프로퍼티 데코레이터 빌더 |
//! | [`annotations`] | 코어 등록 데코레이터 (`component`, `service`, `repository` ...) |
//! | [`info`] | 등록된 클래스 하나의 서술자 |
//! | [`binder`] | 서술자 → 컨테이너 바인딩 |
//! | [`registry`] | 애플리케이션 단위 컴포넌트 카탈로그 |
//! | [`data`] | 데이터 컴포넌트 하위 카탈로그 |
//!
//! ## 흐름
//!
//! ```text
//! Class::define ──► MetadataStore ──► ComponentRegistry::register
//!   (데코레이터 적용)   (등록 정보, 항목)     ├─ ComponentInfo::new (정렬)
//!                                          ├─ ComponentBinder::bind_component
//!                                          └─ 카탈로그에 추가
//! ```

pub mod annotations;
pub mod binder;
pub mod class;
pub mod data;
pub mod decorator;
pub mod factory;
pub mod info;
pub mod metadata;
pub mod registration;
pub mod registry;

pub use annotations::{cli, component, config, controller, data, field, repository, service};
pub use binder::ComponentBinder;
pub use class::{Class, ClassEntry, ClassId, ClassRef};
pub use data::{DataComponentInfo, DataField, DataRegistry};
pub use decorator::{DecoratorEntry, DecoratorFilter, DecoratorKind};
pub use factory::{
    ClassDecorator, ClassDefinition, ComponentFactory, DecorationContext, MethodDecorator, ParameterDecorator,
    PropertyDecorator,
};
pub use info::ComponentInfo;
pub use metadata::{ComponentMetadata, ControllerMetadata, MetadataStore};
pub use registration::{ComponentOptions, ComponentType, CoreDecorator, Registration, Scope};
pub use registry::{ComponentDecoratorInfo, ComponentFilter, ComponentRegistry, RegistrySummary};
