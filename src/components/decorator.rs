//! 데코레이터 항목과 조회 필터
//!
//! 데코레이터 항목은 클래스, 메서드, 프로퍼티, 파라미터에 대해 기록된 사실 하나입니다.
//! 클래스별로 적용 순서대로 누적되며, 읽는 시점에 파라미터 항목만
//! 인덱스 오름차순으로 재정렬됩니다 ([`aggregate`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 데코레이터가 적용된 대상의 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoratorKind {
    Class,
    Method,
    Parameter,
    Property,
}

/// 기록된 데코레이터 하나
///
/// `member`는 메서드/프로퍼티/파라미터가 속한 멤버 이름이고,
/// `index`는 파라미터 데코레이터에만 존재합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratorEntry {
    pub id: String,
    pub kind: DecoratorKind,
    pub member: Option<String>,
    pub index: Option<usize>,
    pub data: Value,
}

/// 데코레이터 조회 필터
///
/// 비어 있는 조건은 모든 항목과 일치합니다.
///
/// ```rust,ignore
/// let routes = registry.get_decorators(&DecoratorFilter::new().id("http/method"));
/// let params = info.get_decorators(&DecoratorFilter::new().id("http/param").member("get_user"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoratorFilter {
    pub id: Option<String>,
    pub member: Option<String>,
}

impl DecoratorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    pub fn matches(&self, entry: &DecoratorEntry) -> bool {
        let id_matches = self.id.as_deref().is_none_or(|id| entry.id == id);
        let member_matches = self
            .member
            .as_deref()
            .is_none_or(|member| entry.member.as_deref() == Some(member));

        id_matches && member_matches
    }
}

/// 적용 순서대로 쌓인 항목을 조회 순서로 정렬합니다.
///
/// 같은 멤버의 파라미터 항목들은 자신들이 차지하던 위치 안에서 인덱스 오름차순으로
/// 재배치되고, 인덱스가 없는 항목은 원래 위치를 유지합니다. 같은 인덱스끼리는
/// 적용 순서가 유지됩니다 (안정 정렬).
pub fn aggregate(mut entries: Vec<DecoratorEntry>) -> Vec<DecoratorEntry> {
    let mut slots: HashMap<String, Vec<usize>> = HashMap::new();

    for (position, entry) in entries.iter().enumerate() {
        if let (Some(member), Some(_)) = (&entry.member, entry.index) {
            slots.entry(member.clone()).or_default().push(position);
        }
    }

    for positions in slots.values().filter(|positions| positions.len() > 1) {
        let mut group: Vec<DecoratorEntry> = positions.iter().map(|&p| entries[p].clone()).collect();
        group.sort_by_key(|entry| entry.index);

        for (&position, entry) in positions.iter().zip(group) {
            entries[position] = entry;
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, kind: DecoratorKind, member: Option<&str>, index: Option<usize>) -> DecoratorEntry {
        DecoratorEntry {
            id: id.to_string(),
            kind,
            member: member.map(str::to_string),
            index,
            data: json!(null),
        }
    }

    fn order(entries: &[DecoratorEntry]) -> Vec<(String, Option<usize>)> {
        entries.iter().map(|e| (e.id.clone(), e.index)).collect()
    }

    #[test]
    fn test_parameters_sorted_by_index() {
        // 인덱스 1 → 0 순서로 적용
        let entries = vec![
            entry("http/param", DecoratorKind::Parameter, Some("get_user"), Some(1)),
            entry("http/param", DecoratorKind::Parameter, Some("get_user"), Some(0)),
        ];

        let aggregated = aggregate(entries);
        assert_eq!(aggregated[0].index, Some(0));
        assert_eq!(aggregated[1].index, Some(1));
    }

    #[test]
    fn test_non_parameter_entries_keep_insertion_order() {
        let entries = vec![
            entry("core/controller", DecoratorKind::Class, None, None),
            entry("http/body", DecoratorKind::Parameter, Some("create"), Some(2)),
            entry("http/method", DecoratorKind::Method, Some("create"), None),
            entry("http/param", DecoratorKind::Parameter, Some("create"), Some(0)),
            entry("http/method", DecoratorKind::Method, Some("list"), None),
            entry("http/query", DecoratorKind::Parameter, Some("create"), Some(1)),
        ];

        let aggregated = aggregate(entries);
        assert_eq!(
            order(&aggregated),
            vec![
                ("core/controller".to_string(), None),
                ("http/param".to_string(), Some(0)),
                ("http/method".to_string(), None),
                ("http/query".to_string(), Some(1)),
                ("http/method".to_string(), None),
                ("http/body".to_string(), Some(2)),
            ]
        );
    }

    #[test]
    fn test_members_are_sorted_independently() {
        let entries = vec![
            entry("p", DecoratorKind::Parameter, Some("a"), Some(1)),
            entry("p", DecoratorKind::Parameter, Some("b"), Some(3)),
            entry("p", DecoratorKind::Parameter, Some("a"), Some(0)),
            entry("p", DecoratorKind::Parameter, Some("b"), Some(2)),
        ];

        let aggregated = aggregate(entries);
        let members: Vec<(Option<&str>, Option<usize>)> = aggregated
            .iter()
            .map(|e| (e.member.as_deref(), e.index))
            .collect();

        assert_eq!(
            members,
            vec![(Some("a"), Some(0)), (Some("b"), Some(2)), (Some("a"), Some(1)), (Some("b"), Some(3))]
        );
    }

    #[test]
    fn test_filter_matches() {
        let method = entry("http/method", DecoratorKind::Method, Some("list"), None);

        assert!(DecoratorFilter::new().matches(&method));
        assert!(DecoratorFilter::new().id("http/method").matches(&method));
        assert!(DecoratorFilter::new().member("list").matches(&method));
        assert!(!DecoratorFilter::new().id("http/param").matches(&method));
        assert!(!DecoratorFilter::new().id("http/method").member("create").matches(&method));
    }
}
