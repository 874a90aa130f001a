//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 읽는 상태 없는 접근자 모음입니다.
//! 바이너리는 설정을 읽기 전에 `dotenv`로 `.env.<PROFILE>` 파일을 로드합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"                        # .env.dev 로드
//! export COMPONENT_DEFAULT_SCOPE="singleton"  # singleton | transient | request
//! export RUST_LOG="info"
//! export APP_NAME="demo-host"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::CoreConfig;
//!
//! let options = AppOptions::new(AppInfo::new(CoreConfig::app_name(), "0.1.0"))
//!     .with_default_scope(CoreConfig::default_scope());
//! ```

pub mod core_config;

pub use core_config::*;
