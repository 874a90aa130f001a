//! 컴포넌트 메타데이터 및 레지스트리
//!
//! 데코레이터로 기록된 클래스 메타데이터를 읽어 컴포넌트 카탈로그를 만들고,
//! IoC 컨테이너에 바인딩하며, 호스트 앱과 익스텐션 사이의 export 경계를 관리합니다.
//!
//! # Features
//!
//! - **메타데이터 저장소**: `(네임스페이스, 클래스)` 키의 명시적 사이드 테이블
//! - **데코레이터 빌더**: 클래스/메서드/파라미터/프로퍼티 데코레이터
//! - **컴포넌트 레지스트리**: 등록, 조회, 데코레이터 테이블
//! - **익스텐션 합성**: export된 싱글톤을 호스트와 공유
//! - **클래스 로더**: `inventory` 기반 정적 클래스 테이블 스캔
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │     App / Loader     │ ← 부트스트랩, 클래스 스캔
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │       Registry       │ ← 카탈로그, 조회, export 경계
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │    Info + Binder     │ ← 서술자, 바인딩 정책
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │ Metadata + Container │ ← 데코레이터 기록, 인스턴스
//! └──────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use component_registry::prelude::*;
//!
//! let metadata = Arc::new(MetadataStore::new());
//! let mut app = App::new(
//!     AppOptions::new(AppInfo::new("host", "0.1.0"))
//!         .with_class_loader(ClassLoaderOptions::new().with_path("my_app::users")),
//!     metadata,
//! );
//! app.init()?;
//!
//! let routes = app.registry().get_decorators(&DecoratorFilter::new().id("http/method"));
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod utils;

#[doc(hidden)]
pub use inventory;

/// 컴포넌트 정의에 필요한 타입 모음
pub mod prelude {
    pub use std::sync::Arc;

    pub use crate::app::{App, AppContext, AppInfo, AppOptions, ClassLoaderOptions};
    pub use crate::component_class;
    pub use crate::components::{
        cli, component, config, controller, data, field, repository, service, Class, ClassDefinition, ClassRef,
        ComponentFactory, ComponentFilter, ComponentOptions, ComponentRegistry, ComponentType, DecoratorFilter,
        MetadataStore, Scope,
    };
    pub use crate::core::container::{Container, Resolver};
    pub use crate::core::errors::{AppError, ContainerError, RegistrationError};
}
