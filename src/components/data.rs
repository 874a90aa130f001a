//! # Data Registry
//!
//! 데이터 타입 컴포넌트(`data` 데코레이터)를 위한 최소한의 하위 카탈로그입니다.
//! 각 컴포넌트의 `field` 데코레이터에서 필드 목록을 모읍니다.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::components::class::ClassId;
use crate::components::decorator::DecoratorFilter;
use crate::components::info::ComponentInfo;
use crate::components::registration::CoreDecorator;

/// 데이터 컴포넌트의 필드 하나
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataField {
    pub property: String,
    pub data_type: Value,
}

#[derive(Debug, Clone)]
pub struct DataComponentInfo {
    pub component: Arc<ComponentInfo>,
    pub fields: Vec<DataField>,
}

impl DataComponentInfo {
    fn from_component(component: Arc<ComponentInfo>) -> Self {
        let fields = component
            .get_decorators(&DecoratorFilter::new().id(CoreDecorator::FIELD))
            .into_iter()
            .filter_map(|entry| {
                Some(DataField {
                    property: entry.member.clone()?,
                    data_type: entry.data.get("dataType").cloned().unwrap_or(Value::Null),
                })
            })
            .collect();

        Self { component, fields }
    }
}

#[derive(Debug, Default)]
pub struct DataRegistry {
    components: HashMap<ClassId, DataComponentInfo>,
}

impl DataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 걸러진 데이터 컴포넌트 목록을 수집합니다. 이미 수집된 클래스는 건너뜁니다.
    pub fn register_data_components(&mut self, components: Vec<Arc<ComponentInfo>>) {
        for component in components {
            self.components
                .entry(*component.class_id())
                .or_insert_with(|| DataComponentInfo::from_component(component));
        }
    }

    pub fn get_data_component(&self, class: &ClassId) -> Option<&DataComponentInfo> {
        self.components.get(class)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
