//! # App Composition
//!
//! 호스트 애플리케이션과 익스텐션을 조립하는 부트스트랩 계층입니다.
//! 각 앱은 자신만의 컨테이너와 컴포넌트 레지스트리를 가지며, 메타데이터 저장소는
//! 부트스트랩 코드가 만든 하나를 모든 앱이 공유합니다.
//!
//! ## 초기화 순서 (`App::init`)
//!
//! ```text
//! 1. 익스텐션 init            (재귀, 의존성 순서)
//! 2. 익스텐션 export 가져오기  register_extension(ext.registry, ext.container)
//! 3. AppContext 바인딩
//! 4. 클래스 로드 + 등록        loader.load → registry.register
//! 5. 데이터 컴포넌트 수집
//! 6. 싱글톤 즉시 생성          해결 실패 시 부트스트랩 중단
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let metadata = Arc::new(MetadataStore::new());
//!
//! let auth = App::new(
//!     AppOptions::new(AppInfo::new("auth", "0.1.0"))
//!         .with_class_loader(ClassLoaderOptions::new().with_path("my_app::auth")),
//!     Arc::clone(&metadata),
//! );
//!
//! let mut host = App::new(
//!     AppOptions::new(AppInfo::new("host", "0.1.0"))
//!         .with_class_loader(ClassLoaderOptions::new().with_path("my_app::users"))
//!         .with_extension(auth),
//!     metadata,
//! );
//!
//! host.init()?;
//! let users = host.get::<UserService>()?;
//! ```

pub mod context;
pub mod loader;

use std::any::Any;
use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::components::metadata::MetadataStore;
use crate::components::registration::Scope;
use crate::components::registry::ComponentRegistry;
use crate::core::container::Container;
use crate::core::errors::AppError;
use crate::utils::display_terminal::{print_boxed_title, print_step_complete, print_step_start, print_sub_task};

pub use context::AppContext;
pub use loader::{ClassLoader, ClassLoaderOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

pub struct AppOptions {
    pub app_info: AppInfo,
    pub class_loader: ClassLoaderOptions,
    /// 이 앱보다 먼저 초기화되어 export를 제공하는 익스텐션
    pub extensions: Vec<App>,
    pub default_scope: Scope,
}

impl AppOptions {
    pub fn new(app_info: AppInfo) -> Self {
        Self {
            app_info,
            class_loader: ClassLoaderOptions::default(),
            extensions: Vec::new(),
            default_scope: Scope::default(),
        }
    }

    pub fn with_class_loader(mut self, class_loader: ClassLoaderOptions) -> Self {
        self.class_loader = class_loader;
        self
    }

    pub fn with_extension(mut self, extension: App) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn with_default_scope(mut self, scope: Scope) -> Self {
        self.default_scope = scope;
        self
    }
}

pub struct App {
    info: AppInfo,
    metadata: Arc<MetadataStore>,
    container: Arc<Container>,
    registry: ComponentRegistry,
    loader: ClassLoader,
    extensions: Vec<App>,
    initialized: bool,
}

impl App {
    pub fn new(options: AppOptions, metadata: Arc<MetadataStore>) -> Self {
        let container = Arc::new(Container::new());
        let registry = ComponentRegistry::new(Arc::clone(&container), Arc::clone(&metadata))
            .with_default_scope(options.default_scope);

        Self {
            info: options.app_info,
            metadata,
            container,
            registry,
            loader: ClassLoader::new(options.class_loader),
            extensions: options.extensions,
            initialized: false,
        }
    }

    /// 앱을 초기화합니다. 한 번만 호출할 수 있습니다.
    ///
    /// 이미 초기화된 익스텐션은 다시 초기화하지 않고 export만 가져옵니다.
    /// 어느 단계든 실패하면 에러를 그대로 반환하며, 부분 초기화된 앱은 사용하면 안 됩니다.
    pub fn init(&mut self) -> Result<(), AppError> {
        if self.initialized {
            return Err(AppError::AlreadyInitialized(self.info.name.clone()));
        }

        print_boxed_title(&format!("{} v{}", self.info.name, self.info.version));

        print_step_start(1, "Initializing extensions");
        for extension in &mut self.extensions {
            if !extension.is_initialized() {
                extension.init()?;
            }
        }
        print_step_complete(1, "Extensions initialized", self.extensions.len());

        print_step_start(2, "Importing exported components");
        let mut imported = 0;
        for extension in &self.extensions {
            let count = self.registry.register_extension(&extension.registry, &extension.container)?;
            print_sub_task(&extension.info.name, &format!("{} exported", count));
            imported += count;
        }
        print_step_complete(2, "Exported components imported", imported);

        let context = AppContext::new(self.info.clone(), Arc::downgrade(&self.container));
        self.container.bind_instance(Arc::new(context))?;

        print_step_start(3, "Registering components");
        let classes = self.loader.load(&self.metadata);
        let registered = self.registry.register(&classes)?;
        print_step_complete(3, "Components registered", registered);

        let data_components = self.registry.register_data_components();
        print_sub_task("Data components", &data_components.to_string());

        print_step_start(4, "Instantiating singletons");
        let mut instantiated = 0;
        for component in self.registry.components() {
            if component.scope() == Scope::Singleton {
                self.container.resolve_token(component.token())?;
                instantiated += 1;
            }
        }
        print_step_complete(4, "Singletons instantiated", instantiated);

        self.initialized = true;
        info!(
            "{} initialized: {} component(s), {} imported from {} extension(s)",
            self.info.name,
            self.registry.count(),
            imported,
            self.extensions.len()
        );

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 이 앱의 컨테이너에서 컴포넌트를 해결합니다.
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>, AppError> {
        Ok(self.container.resolve::<T>()?)
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn metadata(&self) -> &Arc<MetadataStore> {
        &self.metadata
    }

    pub fn extensions(&self) -> &[App] {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::annotations::{repository, service};
    use crate::components::class::{Class, ClassRef};
    use crate::components::factory::ClassDefinition;
    use crate::components::registration::ComponentOptions;
    use crate::core::container::Resolver;
    use crate::core::errors::{ContainerError, RegistrationError};

    struct TokenStore;

    impl Class for TokenStore {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(TokenStore)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(repository(ComponentOptions::default().exported()));
        }
    }

    struct SessionService {
        tokens: Arc<TokenStore>,
        context: Arc<AppContext>,
    }

    impl Class for SessionService {
        fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(Self {
                tokens: resolver.resolve()?,
                context: resolver.resolve()?,
            })
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(service(ComponentOptions::default()));
        }
    }

    struct BrokenService;

    impl Class for BrokenService {
        fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            resolver.resolve::<TokenStore>()?;
            Ok(BrokenService)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(service(ComponentOptions::default()));
        }
    }

    fn app(name: &str, loader: ClassLoaderOptions, metadata: &Arc<MetadataStore>) -> App {
        App::new(
            AppOptions::new(AppInfo::new(name, "0.1.0")).with_class_loader(loader),
            Arc::clone(metadata),
        )
    }

    #[test]
    fn test_host_resolves_extension_exports() {
        let metadata = Arc::new(MetadataStore::new());
        let auth = app(
            "auth",
            ClassLoaderOptions::new().with_class(ClassRef::of::<TokenStore>()),
            &metadata,
        );

        let mut host = App::new(
            AppOptions::new(AppInfo::new("host", "0.1.0"))
                .with_class_loader(ClassLoaderOptions::new().with_class(ClassRef::of::<SessionService>()))
                .with_extension(auth),
            Arc::clone(&metadata),
        );
        host.init().unwrap();

        let session = host.get::<SessionService>().unwrap();
        let from_extension = host.extensions()[0].get::<TokenStore>().unwrap();
        assert!(Arc::ptr_eq(&session.tokens, &from_extension));
        assert_eq!(session.context.info().name, "host");

        assert_eq!(host.registry().count(), 2);
        assert!(host.extensions()[0].is_initialized());
    }

    #[test]
    fn test_unresolved_dependency_aborts_init() {
        let metadata = Arc::new(MetadataStore::new());
        let mut host = app(
            "host",
            ClassLoaderOptions::new().with_class(ClassRef::of::<BrokenService>()),
            &metadata,
        );

        assert!(matches!(
            host.init(),
            Err(AppError::Container(ContainerError::NotBound { .. }))
        ));
        assert!(!host.is_initialized());
    }

    #[test]
    fn test_init_twice_is_rejected() {
        let metadata = Arc::new(MetadataStore::new());
        let mut host = app("host", ClassLoaderOptions::new(), &metadata);

        host.init().unwrap();
        assert!(matches!(host.init(), Err(AppError::AlreadyInitialized(_))));
    }

    #[test]
    fn test_same_class_in_host_and_extension_is_duplicate() {
        let metadata = Arc::new(MetadataStore::new());
        let loader = || ClassLoaderOptions::new().with_class(ClassRef::of::<TokenStore>());
        let auth = app("auth", loader(), &metadata);

        let mut host = App::new(
            AppOptions::new(AppInfo::new("host", "0.1.0"))
                .with_class_loader(loader())
                .with_extension(auth),
            metadata,
        );

        assert!(matches!(
            host.init(),
            Err(AppError::Registration(RegistrationError::Duplicate { .. }))
        ));
    }
}
