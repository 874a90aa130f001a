//! # Class Handles
//!
//! 컴포넌트 타입을 런타임에 다루기 위한 핸들을 정의합니다.
//!
//! - [`ClassId`]: 클래스 식별자 (`TypeId` + 타입 이름). 모든 맵의 키이자 컨테이너 토큰입니다.
//! - [`Class`]: 컴포넌트 타입이 구현하는 trait (생성자 + 데코레이터 정의 블록)
//! - [`ClassRef`]: 타입 소거된 클래스 핸들. 로더가 레지스트리에 넘기는 목록의 원소입니다.
//! - [`ClassEntry`]: `inventory`로 수집되는 정적 등록 레코드
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use component_registry::prelude::*;
//!
//! pub struct UserRepository;
//!
//! impl Class for UserRepository {
//!     fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
//!         Ok(Self)
//!     }
//!
//!     fn define(class: &mut ClassDefinition<'_>) {
//!         class.decorate(repository(ComponentOptions::default().with_id("userRepo")));
//!     }
//! }
//!
//! // 클래스 로더가 스캔할 수 있도록 정적 테이블에 제출
//! component_class!(UserRepository);
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::components::factory::ClassDefinition;
use crate::components::metadata::MetadataStore;
use crate::core::container::{Constructor, Instance, Resolver};
use crate::core::errors::ContainerError;
use crate::utils::string_utils::short_type_name;

/// 클래스 식별자
///
/// 동등성과 해시는 `TypeId`만으로 결정됩니다.
#[derive(Clone, Copy)]
pub struct ClassId {
    type_id: TypeId,
    name: &'static str,
}

impl ClassId {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// 모듈 경로를 포함한 전체 타입 이름
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 마지막 경로 세그먼트만 남긴 타입 이름 (예: `UserRepository`)
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

impl PartialEq for ClassId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ClassId {}

impl Hash for ClassId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.name)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 컴포넌트 타입이 구현하는 trait
///
/// `define`은 클래스 정의 시점에 한 번만 실행되며, 등록 데코레이터와
/// 멤버 데코레이터를 메타데이터 저장소에 기록합니다. 등록 데코레이터를
/// 적용하지 않은 클래스는 레지스트리에서 조용히 제외됩니다.
pub trait Class: Any + Send + Sync + Sized {
    /// 컨테이너가 인스턴스를 만들 때 호출합니다.
    fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError>;

    /// 데코레이터 정의 블록. 기본 구현은 아무것도 기록하지 않습니다.
    fn define(_class: &mut ClassDefinition<'_>) {}
}

/// 타입 소거된 클래스 핸들
#[derive(Clone, Copy)]
pub struct ClassRef {
    id: ClassId,
    constructor: Constructor,
    define: fn(&mut ClassDefinition<'_>),
}

impl ClassRef {
    pub fn of<T: Class>() -> Self {
        Self {
            id: ClassId::of::<T>(),
            constructor: construct_erased::<T>,
            define: T::define,
        }
    }

    pub fn id(&self) -> &ClassId {
        &self.id
    }

    pub fn constructor(&self) -> Constructor {
        self.constructor
    }

    /// 데코레이터 정의 블록을 실행합니다. 한 번만 실행되도록 보장하는 것은
    /// [`MetadataStore::define`]의 책임입니다.
    pub(crate) fn run_definition(&self, store: &MetadataStore) {
        let mut definition = ClassDefinition::new(store, self.id);
        (self.define)(&mut definition);
    }
}

fn construct_erased<T: Class>(resolver: &mut Resolver<'_>) -> Result<Instance, ContainerError> {
    Ok(Arc::new(T::construct(resolver)?))
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClassRef {}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassRef({})", self.id.name)
    }
}

/// 정적 클래스 테이블 레코드
///
/// [`component_class!`](crate::component_class) 매크로가 생성하며,
/// 클래스 로더가 모듈 경로 기준으로 스캔합니다.
pub struct ClassEntry {
    module_path: &'static str,
    class: fn() -> ClassRef,
}

impl ClassEntry {
    pub const fn new<T: Class>(module_path: &'static str) -> Self {
        Self {
            module_path,
            class: ClassRef::of::<T>,
        }
    }

    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    pub fn class(&self) -> ClassRef {
        (self.class)()
    }
}

inventory::collect!(ClassEntry);

/// 컴포넌트 타입을 정적 클래스 테이블에 제출합니다.
///
/// 제출 위치의 `module_path!()`가 함께 기록되어 클래스 로더의 경로 필터에 사용됩니다.
#[macro_export]
macro_rules! component_class {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::components::class::ClassEntry::new::<$ty>(module_path!())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Plain;

    impl Class for Plain {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(Plain)
        }
    }

    struct Other;

    #[test]
    fn test_class_id_identity() {
        let a = ClassId::of::<Plain>();
        let b = ClassId::of::<Plain>();
        let c = ClassId::of::<Other>();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.short_name(), "Plain");
        assert!(a.name().ends_with("::Plain"));

        let set: HashSet<ClassId> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_class_ref_constructs_erased_instance() {
        let class = ClassRef::of::<Plain>();
        let container = crate::core::container::Container::new();
        container
            .bind(*class.id(), Default::default(), crate::core::container::Provider::Class(class.constructor()))
            .unwrap();

        let instance = container.resolve_token(class.id()).unwrap();
        assert!(instance.downcast::<Plain>().is_ok());
    }

    #[test]
    fn test_class_entry_records_module_path() {
        let entry = ClassEntry::new::<Plain>(module_path!());

        assert_eq!(entry.module_path(), module_path!());
        assert_eq!(entry.class(), ClassRef::of::<Plain>());
    }
}
