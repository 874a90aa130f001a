//! 컴포넌트 레지스트리 데모 애플리케이션
//!
//! `auth` 익스텐션과 호스트 앱을 조립하고, 레지스트리 요약과
//! 데코레이터로 만든 라우트 테이블을 출력합니다.

use std::path::PathBuf;
use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use serde_json::{Value, json};

use component_registry::components::{ControllerMetadata, MethodDecorator, ParameterDecorator};
use component_registry::config::CoreConfig;
use component_registry::prelude::*;
use component_registry::utils::display_terminal::{print_boxed_title, print_registry_summary, print_sub_task};

/// HTTP 라우트 메서드 데코레이터
fn http_route(method: &'static str, path: &str) -> MethodDecorator {
    let path = path.to_string();
    ComponentFactory::method_decorator("http/method", move |ctx| {
        json!({ "name": ctx.member, "method": method, "path": path })
    })
}

fn path_param(key: &str) -> ParameterDecorator {
    let key = key.to_string();
    ComponentFactory::parameter_decorator("http/param", move |ctx| {
        json!({ "type": "path", "key": key, "index": ctx.index })
    })
}

fn body() -> ParameterDecorator {
    ComponentFactory::parameter_decorator("http/param", |ctx| json!({ "type": "body", "index": ctx.index }))
}

mod auth {
    use super::*;

    /// 호스트와 공유되는 토큰 저장소
    pub struct TokenStore;

    impl Class for TokenStore {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(TokenStore)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(repository(ComponentOptions::default().with_id("tokenStore").exported()));
        }
    }

    /// 익스텐션 내부 전용
    pub struct PasswordHasher;

    impl Class for PasswordHasher {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(PasswordHasher)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(service(ComponentOptions::default()));
        }
    }

    component_class!(TokenStore);
    component_class!(PasswordHasher);
}

mod users {
    use super::*;
    use crate::auth::TokenStore;

    pub struct UserRepository;

    impl Class for UserRepository {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(UserRepository)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(repository(ComponentOptions::default().with_id("userRepo")));
        }
    }

    pub struct UserService {
        pub repo: Arc<UserRepository>,
        pub tokens: Arc<TokenStore>,
    }

    impl Class for UserService {
        fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(Self {
                repo: resolver.resolve()?,
                tokens: resolver.resolve()?,
            })
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class.decorate(service(ComponentOptions::default()));
        }
    }

    pub struct UserController {
        pub users: Arc<UserService>,
    }

    impl Class for UserController {
        fn construct(resolver: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(Self { users: resolver.resolve()? })
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class
                .decorate(controller(ComponentOptions::default().with_id("users")))
                .interceptor("AuthGuard")
                .method("get_user", http_route("GET", "/users/:id"))
                .parameter("get_user", 0, path_param("id"))
                .method("update_user", http_route("PUT", "/users/:id"))
                .parameter("update_user", 1, body())
                .parameter("update_user", 0, path_param("id"));
        }
    }

    pub struct UserDto;

    impl Class for UserDto {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(UserDto)
        }

        fn define(class: &mut ClassDefinition<'_>) {
            class
                .decorate(data(ComponentOptions::default()))
                .property("email", field("string"))
                .property("name", field("string"));
        }
    }

    /// 등록 데코레이터가 없으므로 레지스트리에서 제외됨
    pub struct StringUtils;

    impl Class for StringUtils {
        fn construct(_: &mut Resolver<'_>) -> Result<Self, ContainerError> {
            Ok(StringUtils)
        }
    }

    component_class!(UserRepository);
    component_class!(UserService);
    component_class!(UserController);
    component_class!(UserDto);
    component_class!(StringUtils);
}

fn main() -> ExitCode {
    // 로거 필터도 env 파일 값을 읽으므로 env 파일이 먼저
    let env_file = CoreConfig::env_file();
    let loaded = load_env_file(&env_file);
    init_logging();

    match loaded {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) => warn!("{} 파일 로드 실패: {}", env_file, e),
    }

    info!("🚀 컴포넌트 레지스트리 데모 시작중... (profile: {})", CoreConfig::profile());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("부트스트랩 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let metadata = Arc::new(MetadataStore::new());
    let default_scope = CoreConfig::default_scope();

    let auth = App::new(
        AppOptions::new(AppInfo::new("auth", env!("CARGO_PKG_VERSION")))
            .with_class_loader(ClassLoaderOptions::new().with_path(concat!(module_path!(), "::auth")))
            .with_default_scope(default_scope),
        Arc::clone(&metadata),
    );

    let mut host = App::new(
        AppOptions::new(AppInfo::new(CoreConfig::app_name(), env!("CARGO_PKG_VERSION")))
            .with_class_loader(ClassLoaderOptions::new().with_path(concat!(module_path!(), "::users")))
            .with_extension(auth)
            .with_default_scope(default_scope),
        metadata,
    );

    host.init()?;

    print_registry_summary(&host.registry().summary());
    print_route_table(host.registry());

    let controller = host.get::<users::UserController>()?;
    let tokens = host.extensions()[0].get::<auth::TokenStore>()?;
    info!(
        "UserController → UserService → TokenStore shared with auth: {}",
        Arc::ptr_eq(&controller.users.tokens, &tokens)
    );

    Ok(())
}

/// `http/method` 데코레이터로 라우트 테이블을 만들어 출력합니다.
fn print_route_table(registry: &ComponentRegistry) {
    print_boxed_title("ROUTES");

    for route in registry.get_decorators(&DecoratorFilter::new().id("http/method")) {
        let member = route.entry.member.as_deref().unwrap_or_default();
        let params: Vec<String> = route
            .component
            .get_decorators(&DecoratorFilter::new().id("http/param").member(member))
            .iter()
            .map(|param| {
                let kind = param.data["type"].as_str().unwrap_or("?");
                match param.data.get("key").and_then(Value::as_str) {
                    Some(key) => format!("{}:{}", kind, key),
                    None => kind.to_string(),
                }
            })
            .collect();

        let interceptors: Vec<&'static str> =
            ControllerMetadata::get_interceptors(registry.metadata(), route.component.class_id());

        print_sub_task(
            &format!(
                "{} {}",
                route.entry.data["method"].as_str().unwrap_or("?"),
                route.entry.data["path"].as_str().unwrap_or("?")
            ),
            &format!(
                "{}.{}({}) {:?}",
                route.component.id(),
                member,
                params.join(", "),
                interceptors
            ),
        );
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 `.env.<profile>` 파일을 로드하고,
/// 없으면 기본 `.env` 파일을 시도합니다. 로거 초기화 전에 호출되므로
/// 결과는 호출자가 로깅합니다. 둘 다 실패하면 처음 파일의 에러를 돌려줍니다.
///
/// # Examples
///
/// ```bash
/// PROFILE=dev COMPONENT_DEFAULT_SCOPE=transient cargo run
/// ```
fn load_env_file(env_file: &str) -> dotenv::Result<PathBuf> {
    dotenv::from_filename(env_file).or_else(|e| dotenv().map_err(|_| e))
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=component_registry=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or(CoreConfig::log_filter()));
}
