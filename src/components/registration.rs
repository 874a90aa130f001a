//! # Component Registration Model
//!
//! 클래스 수준 등록 데코레이터(`service`, `repository`, `controller` 등)가 기록하는
//! 단일 슬롯 메타데이터를 정의합니다. 레지스트리는 이 정보가 있는 클래스만
//! 컴포넌트로 등록합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@Component` | [`ComponentType::Component`] |
//! | `@Service` | [`ComponentType::Service`] |
//! | `@Repository` | [`ComponentType::Repository`] |
//! | `@Scope("prototype")` | [`Scope::Transient`] |
//! | `@RequestScope` | [`Scope::Request`] |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string};

/// 코어가 사용하는 데코레이터 ID 모음
///
/// 익스텐션은 자신만의 ID 접두사를 사용해야 코어 ID와 충돌하지 않습니다.
pub struct CoreDecorator;

impl CoreDecorator {
    pub const COMPONENT: &'static str = "core/component";
    pub const SERVICE: &'static str = "core/service";
    pub const REPOSITORY: &'static str = "core/repository";
    pub const CONTROLLER: &'static str = "core/controller";
    pub const CONFIG: &'static str = "core/config";
    pub const CLI: &'static str = "core/cli";
    pub const DATA: &'static str = "core/data";
    pub const FIELD: &'static str = "core/data/field";
}

/// 인스턴스 공유 정책
///
/// 컨테이너에 바인딩될 때 적용됩니다.
///
/// - `Singleton`: 컨테이너당 하나의 인스턴스
/// - `Transient`: 해결할 때마다 새 인스턴스
/// - `Request`: 하나의 최상위 해결 그래프 안에서 하나의 인스턴스
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Singleton,
    Transient,
    Request,
}

impl Scope {
    /// 스코프의 소문자 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Singleton => "singleton",
            Scope::Transient => "transient",
            Scope::Request => "request",
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    /// 대소문자를 구분하지 않고 스코프를 파싱합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "singleton" => Ok(Scope::Singleton),
            "transient" => Ok(Scope::Transient),
            "request" => Ok(Scope::Request),
            _ => Err(format!("Unsupported component scope: {}", s)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 컴포넌트 종류
///
/// `Custom`은 익스텐션이 정의한 컴포넌트 데코레이터를 위한 변형이며,
/// 값은 해당 데코레이터의 ID입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Component,
    Service,
    Repository,
    Controller,
    Config,
    Cli,
    Data,
    Custom(String),
}

impl ComponentType {
    /// 이 종류의 등록 데코레이터가 남기는 데코레이터 ID
    pub fn decorator_id(&self) -> &str {
        match self {
            ComponentType::Component => CoreDecorator::COMPONENT,
            ComponentType::Service => CoreDecorator::SERVICE,
            ComponentType::Repository => CoreDecorator::REPOSITORY,
            ComponentType::Controller => CoreDecorator::CONTROLLER,
            ComponentType::Config => CoreDecorator::CONFIG,
            ComponentType::Cli => CoreDecorator::CLI,
            ComponentType::Data => CoreDecorator::DATA,
            ComponentType::Custom(id) => id,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Component => "component",
            ComponentType::Service => "service",
            ComponentType::Repository => "repository",
            ComponentType::Controller => "controller",
            ComponentType::Config => "config",
            ComponentType::Cli => "cli",
            ComponentType::Data => "data",
            ComponentType::Custom(id) => id,
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 등록 데코레이터에 전달하는 옵션
///
/// ```rust,ignore
/// use crate::components::{repository, ComponentOptions, Scope};
///
/// let decorator = repository(
///     ComponentOptions::default()
///         .with_id("userRepo")
///         .with_scope(Scope::Transient)
///         .exported(),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOptions {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub export: bool,
}

impl ComponentOptions {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// 익스텐션 경계 밖으로 내보냅니다.
    pub fn exported(mut self) -> Self {
        self.export = true;
        self
    }
}

/// 클래스당 하나만 기록되는 등록 정보
///
/// `scope`가 비어 있으면 `register()` 시점에 레지스트리의 기본 스코프가 적용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub component_type: ComponentType,
    pub id: Option<String>,
    pub scope: Option<Scope>,
    pub export: bool,
}

impl Registration {
    pub fn new(component_type: ComponentType, options: ComponentOptions) -> Self {
        Self {
            component_type,
            id: clean_optional_string(options.id),
            scope: options.scope,
            export: options.export,
        }
    }

    /// 명시된 스코프가 없으면 `default_scope`를 사용합니다.
    pub fn effective_scope(&self, default_scope: Scope) -> Scope {
        self.scope.unwrap_or(default_scope)
    }
}
