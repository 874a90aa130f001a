//! # Component Info
//!
//! 등록된 클래스 하나에 대한 서술자입니다. 등록 정보, 컨테이너 바인딩 토큰,
//! 정렬된 데코레이터 목록을 묶고, 해당 클래스로 한정된 데코레이터 조회를 제공합니다.
//!
//! `register()` 중에 클래스당 한 번 생성되며 이후 변경되지 않습니다.
//! 모든 메서드는 부수 효과 없는 읽기 연산입니다.

use std::collections::BTreeSet;

use crate::components::class::{ClassId, ClassRef};
use crate::components::decorator::{aggregate, DecoratorEntry, DecoratorFilter};
use crate::components::registration::{ComponentType, Registration, Scope};

#[derive(Debug)]
pub struct ComponentInfo {
    class: ClassRef,
    registration: Registration,
    scope: Scope,
    decorators: Vec<DecoratorEntry>,
    decorator_ids: BTreeSet<String>,
}

impl ComponentInfo {
    /// 서술자를 생성합니다.
    ///
    /// `decorators`는 적용 순서 그대로 전달되며, 생성 시점에 파라미터 인덱스 기준으로
    /// 정렬됩니다. 등록 정보에 스코프가 없으면 `default_scope`가 적용됩니다.
    pub fn new(class: ClassRef, registration: Registration, decorators: Vec<DecoratorEntry>, default_scope: Scope) -> Self {
        let scope = registration.effective_scope(default_scope);
        let decorators = aggregate(decorators);
        let decorator_ids = decorators.iter().map(|entry| entry.id.clone()).collect();

        Self {
            class,
            registration,
            scope,
            decorators,
            decorator_ids,
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn class_id(&self) -> &ClassId {
        self.class.id()
    }

    /// 컨테이너 바인딩 토큰. 클래스 자신의 식별자입니다.
    pub fn token(&self) -> &ClassId {
        self.class.id()
    }

    /// 등록 정보의 ID, 없으면 타입 이름 (예: `UserRepository`)
    pub fn id(&self) -> &str {
        self.registration
            .id
            .as_deref()
            .unwrap_or_else(|| self.class.id().short_name())
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn component_type(&self) -> &ComponentType {
        &self.registration.component_type
    }

    /// 바인딩에 사용된 실제 스코프
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn is_exported(&self) -> bool {
        self.registration.export
    }

    /// 필터와 일치하는 데코레이터를 조회 순서대로 반환합니다.
    pub fn get_decorators(&self, filter: &DecoratorFilter) -> Vec<&DecoratorEntry> {
        self.decorators
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    /// 이 컴포넌트가 가진 데코레이터 ID 집합 (중복 제거)
    pub fn get_decorator_ids(&self) -> &BTreeSet<String> {
        &self.decorator_ids
    }

    pub fn has_decorator(&self, id: &str) -> bool {
        self.decorator_ids.contains(id)
    }
}

impl PartialEq for ComponentInfo {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
    }
}

impl Eq for ComponentInfo {}
