//! # Container - 토큰 기반 의존성 주입 컨테이너
//!
//! 레지스트리가 컴포넌트를 바인딩하는 최소한의 IoC 컨테이너입니다.
//! 전역 싱글톤이 아니라 애플리케이션(또는 익스텐션)마다 하나씩 명시적으로 생성되며,
//! `Arc<Container>`로 공유됩니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 컨테이너 |
//! |--------|-------------|
//! | `BeanFactory.getBean(Class)` | [`Container::resolve`] |
//! | `registerSingleton()` | [`Container::bind_instance`] |
//! | `BeanDefinition` + scope | [`Container::bind`] + [`Scope`] |
//! | `BeanCurrentlyInCreationException` | [`ContainerError::CircularDependency`] |
//!
//! ## 바인딩 종류 ([`Provider`])
//!
//! ```text
//! Class(constructor)   → 스코프에 따라 생성/캐싱
//! Constant(instance)   → 미리 만들어진 인스턴스를 그대로 반환
//! Extension(weak)      → 익스텐션 컨테이너에 위임 (소유하지 않음)
//! ```
//!
//! ## 해결 과정
//!
//! ```text
//! resolve::<T>()
//!    ├─ Resolver 생성 (해결 스택 + Request 스코프 캐시)
//!    ├─ 순환 참조 검사 → 스택에 이미 있으면 CircularDependency
//!    ├─ 바인딩 조회 → 없으면 NotBound
//!    ├─ 스코프별 인스턴스 생성/캐시 조회
//!    └─ Arc<dyn Any> → Arc<T> 다운캐스트
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use log::debug;
use once_cell::sync::OnceCell;

use crate::components::class::ClassId;
use crate::components::registration::Scope;
use crate::core::errors::ContainerError;

/// 컨테이너가 보관하는 타입 소거된 인스턴스
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 타입 소거된 생성자
///
/// 생성자는 [`Resolver`]를 통해 자신의 의존성을 해결합니다.
pub type Constructor = fn(&mut Resolver<'_>) -> Result<Instance, ContainerError>;

/// 바인딩이 인스턴스를 얻는 방법
pub enum Provider {
    /// 생성자를 호출하여 인스턴스를 만듭니다. 캐싱 여부는 스코프가 결정합니다.
    Class(Constructor),
    /// 외부에서 만든 인스턴스를 항상 반환합니다.
    Constant(Instance),
    /// 익스텐션 컨테이너에서 같은 토큰을 해결합니다.
    ///
    /// 호스트는 약한 참조만 보관하므로 인스턴스의 수명은 익스텐션 컨테이너가 결정합니다.
    Extension(Weak<Container>),
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Class(_) => f.write_str("Class"),
            Provider::Constant(_) => f.write_str("Constant"),
            Provider::Extension(_) => f.write_str("Extension"),
        }
    }
}

struct Binding {
    token: ClassId,
    scope: Scope,
    provider: Provider,
    singleton: OnceCell<Instance>,
}

/// 토큰 → 인스턴스 해결기
///
/// 토큰은 컴포넌트 타입의 [`ClassId`]입니다. 하나의 토큰에는 하나의 바인딩만
/// 허용되며, 중복 바인딩은 [`ContainerError::AlreadyBound`]로 거부됩니다.
#[derive(Default)]
pub struct Container {
    bindings: RwLock<HashMap<TypeId, Arc<Binding>>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰을 스코프와 프로바이더로 바인딩합니다.
    ///
    /// # Errors
    ///
    /// 같은 토큰이 이미 바인딩되어 있으면 [`ContainerError::AlreadyBound`]를 반환합니다.
    pub fn bind(&self, token: ClassId, scope: Scope, provider: Provider) -> Result<(), ContainerError> {
        let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);

        if bindings.contains_key(&token.type_id()) {
            return Err(ContainerError::AlreadyBound { token: token.name() });
        }

        debug!("Binding {} ({}, {:?})", token.short_name(), scope, provider);

        bindings.insert(
            token.type_id(),
            Arc::new(Binding {
                token,
                scope,
                provider,
                singleton: OnceCell::new(),
            }),
        );

        Ok(())
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 레지스트리가 관리하지 않는 인프라 객체(설정, 앱 컨텍스트 등)를
    /// 등록할 때 사용합니다.
    ///
    /// ```rust,ignore
    /// let settings = Arc::new(Settings::load()?);
    /// container.bind_instance(settings)?;
    /// ```
    pub fn bind_instance<T: Any + Send + Sync>(&self, instance: Arc<T>) -> Result<(), ContainerError> {
        self.bind(ClassId::of::<T>(), Scope::Singleton, Provider::Constant(instance))
    }

    pub fn is_bound(&self, token: &ClassId) -> bool {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&token.type_id())
    }

    /// 바인딩된 토큰 수
    pub fn len(&self) -> usize {
        self.bindings.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 타입으로 인스턴스를 해결합니다.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::NotBound`]: 바인딩 없음
    /// - [`ContainerError::CircularDependency`]: 생성 중인 타입을 다시 요청
    /// - [`ContainerError::TypeMismatch`]: 바인딩된 인스턴스 타입이 다름
    /// - 생성자가 반환한 에러는 그대로 전파됩니다.
    pub fn resolve<T: Any + Send + Sync>(&self) -> Result<Arc<T>, ContainerError> {
        Resolver::new(self).resolve::<T>()
    }

    /// 토큰으로 타입 소거된 인스턴스를 해결합니다.
    pub fn resolve_token(&self, token: &ClassId) -> Result<Instance, ContainerError> {
        Resolver::new(self).resolve_token(token)
    }

    fn binding(&self, token: &ClassId) -> Result<Arc<Binding>, ContainerError> {
        // 생성자가 중첩 해결을 하는 동안 락을 잡고 있지 않도록 Arc만 복제
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&token.type_id())
            .cloned()
            .ok_or(ContainerError::NotBound { token: token.name() })
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
        let mut tokens: Vec<&str> = bindings.values().map(|b| b.token.short_name()).collect();
        tokens.sort_unstable();

        f.debug_struct("Container").field("bindings", &tokens).finish()
    }
}

/// 하나의 최상위 해결 호출 동안 유지되는 해결 컨텍스트
///
/// 해결 스택으로 순환 참조를 감지하고, `Request` 스코프 인스턴스를 캐싱합니다.
/// 컴포넌트 생성자는 이 타입을 통해 의존성을 요청합니다.
///
/// ```rust,ignore
/// impl Class for UserService {
///     fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError> {
///         Ok(Self { repo: resolver.resolve::<UserRepository>()? })
///     }
/// }
/// ```
pub struct Resolver<'c> {
    container: &'c Container,
    stack: Vec<ClassId>,
    request: HashMap<TypeId, Instance>,
}

impl<'c> Resolver<'c> {
    fn new(container: &'c Container) -> Self {
        Self {
            container,
            stack: Vec::new(),
            request: HashMap::new(),
        }
    }

    /// 해결이 진행 중인 컨테이너
    pub fn container(&self) -> &'c Container {
        self.container
    }

    pub fn resolve<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>, ContainerError> {
        let token = ClassId::of::<T>();

        self.resolve_token(&token)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                token: token.name(),
                expected: std::any::type_name::<T>(),
            })
    }

    pub fn resolve_token(&mut self, token: &ClassId) -> Result<Instance, ContainerError> {
        if self.stack.contains(token) {
            let path = self
                .stack
                .iter()
                .chain(std::iter::once(token))
                .map(ClassId::short_name)
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(ContainerError::CircularDependency { path });
        }

        let binding = self.container.binding(token)?;

        self.stack.push(*token);
        let result = self.instantiate(&binding);
        self.stack.pop();

        result
    }

    /// 다른 컨테이너(익스텐션)에서 토큰을 해결합니다.
    ///
    /// 해결 스택은 새로 시작하고 `Request` 스코프 캐시는 이어받으므로, 익스텐션의
    /// `Request` 컴포넌트도 하나의 최상위 해결 그래프 안에서 공유됩니다.
    fn resolve_in(&mut self, container: &Container, token: &ClassId) -> Result<Instance, ContainerError> {
        let mut delegate = Resolver {
            container,
            stack: Vec::new(),
            request: std::mem::take(&mut self.request),
        };

        let result = delegate.resolve_token(token);
        self.request = delegate.request;

        result
    }

    fn instantiate(&mut self, binding: &Binding) -> Result<Instance, ContainerError> {
        let construct = match &binding.provider {
            Provider::Constant(instance) => return Ok(Arc::clone(instance)),
            Provider::Extension(extension) => {
                let extension = extension.upgrade().ok_or(ContainerError::ExtensionUnavailable {
                    token: binding.token.name(),
                })?;
                return self.resolve_in(&extension, &binding.token);
            }
            Provider::Class(construct) => *construct,
        };

        match binding.scope {
            Scope::Singleton => binding
                .singleton
                .get_or_try_init(|| construct(self))
                .cloned(),
            Scope::Transient => construct(self),
            Scope::Request => {
                let type_id = binding.token.type_id();
                if let Some(instance) = self.request.get(&type_id) {
                    return Ok(Arc::clone(instance));
                }

                let instance = construct(self)?;
                self.request.insert(type_id, Arc::clone(&instance));
                Ok(instance)
            }
        }
    }
}
