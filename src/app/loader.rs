//! # Class Loader
//!
//! 정적 클래스 테이블(`component_class!`로 제출된 항목)에서 설정된 모듈 경로 아래의
//! 클래스를 찾아 정의 블록을 실행하고, 레지스트리에 넘길 목록을 만듭니다.
//!
//! 결과 순서는 모듈 경로, 타입 이름 순으로 정렬되어 실행마다 같으며, 명시적으로
//! 지정한 클래스가 그 뒤에 붙습니다.

use std::collections::HashSet;

use log::debug;

use crate::components::class::{ClassEntry, ClassId, ClassRef};
use crate::components::metadata::MetadataStore;
use crate::utils::string_utils::matches_module_path;

#[derive(Debug, Clone, Default)]
pub struct ClassLoaderOptions {
    /// 스캔할 모듈 경로 (예: `my_app::users`). 하위 모듈을 포함합니다.
    pub paths: Vec<String>,
    /// 스캔과 무관하게 항상 포함할 클래스
    pub classes: Vec<ClassRef>,
}

impl ClassLoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    pub fn with_class(mut self, class: ClassRef) -> Self {
        self.classes.push(class);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClassLoader {
    options: ClassLoaderOptions,
}

impl ClassLoader {
    pub fn new(options: ClassLoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ClassLoaderOptions {
        &self.options
    }

    /// 정의 블록을 실행하지 않고 클래스 목록만 만듭니다.
    pub fn scan(&self) -> Vec<ClassRef> {
        let mut entries: Vec<&ClassEntry> = inventory::iter::<ClassEntry>
            .into_iter()
            .filter(|entry| {
                self.options
                    .paths
                    .iter()
                    .any(|path| matches_module_path(entry.module_path(), path))
            })
            .collect();

        entries.sort_by_key(|entry| (entry.module_path(), entry.class().id().name()));

        let mut seen: HashSet<ClassId> = HashSet::new();
        entries
            .into_iter()
            .map(ClassEntry::class)
            .chain(self.options.classes.iter().copied())
            .filter(|class| seen.insert(*class.id()))
            .collect()
    }

    /// 클래스 목록을 만들고 각 클래스의 정의 블록을 저장소에 실행합니다.
    pub fn load(&self, store: &MetadataStore) -> Vec<ClassRef> {
        let classes = self.scan();
        store.define_all(&classes);

        debug!("Loaded {} class(es) from {:?}", classes.len(), self.options.paths);
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::annotations::service;
    use crate::components::class::Class;
    use crate::components::factory::ClassDefinition;
    use crate::components::metadata::ComponentMetadata;
    use crate::components::registration::ComponentOptions;
    use crate::core::container::Resolver;
    use crate::core::errors::ContainerError;

    mod scanned {
        use super::*;

        pub struct AlphaService;

        impl Class for AlphaService {
            fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
                Ok(AlphaService)
            }

            fn define(class: &mut ClassDefinition<'_>) {
                class.decorate(service(ComponentOptions::default()));
            }
        }

        pub struct BetaHelper;

        impl Class for BetaHelper {
            fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
                Ok(BetaHelper)
            }
        }

        crate::component_class!(BetaHelper);
        crate::component_class!(AlphaService);
    }

    struct Explicit;

    impl Class for Explicit {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(Explicit)
        }
    }

    #[test]
    fn test_scan_filters_by_module_path_and_sorts() {
        let loader = ClassLoader::new(
            ClassLoaderOptions::new()
                .with_path(concat!(module_path!(), "::scanned"))
                .with_class(ClassRef::of::<Explicit>())
                .with_class(ClassRef::of::<scanned::AlphaService>()),
        );

        let names: Vec<&str> = loader.scan().iter().map(|class| class.id().short_name()).collect();
        assert_eq!(names, vec!["AlphaService", "BetaHelper", "Explicit"]);
    }

    #[test]
    fn test_unrelated_path_finds_nothing() {
        let loader = ClassLoader::new(ClassLoaderOptions::new().with_path(concat!(module_path!(), "::scan")));

        assert!(loader.scan().is_empty());
    }

    #[test]
    fn test_load_defines_classes() {
        let store = MetadataStore::new();
        let loader = ClassLoader::new(ClassLoaderOptions::new().with_path(concat!(module_path!(), "::scanned")));

        let classes = loader.load(&store);
        assert_eq!(classes.len(), 2);

        let alpha = ClassId::of::<scanned::AlphaService>();
        assert!(store.is_defined(&alpha));
        assert!(ComponentMetadata::get_registration(&store, &alpha).is_some());
        assert!(ComponentMetadata::get_registration(&store, &ClassId::of::<scanned::BetaHelper>()).is_none());
    }
}
