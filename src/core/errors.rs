//! # Component Error Handling System
//!
//! 컴포넌트 레지스트리와 컨테이너를 위한 통합 에러 처리 시스템입니다.
//! 부트스트랩 단계에서 발생하는 모든 실패는 치명적(fatal)이며,
//! 부분 성공이나 롤백 모드는 존재하지 않습니다.
//!
//! ## 에러 계층
//!
//! | 계층 | 타입 | 발생 위치 |
//! |------|------|-----------|
//! | 컨테이너 | [`ContainerError`] | 바인딩 충돌, 의존성 해결 실패 |
//! | 레지스트리 | [`RegistrationError`] | 중복 등록, 바인딩 거부 |
//! | 애플리케이션 | [`AppError`] | 부트스트랩 전체 (위 두 계층을 포함) |
//!
//! ## 에러가 아닌 경우
//!
//! - 등록 정보가 없는 클래스는 조용히 건너뜁니다 (SilentSkip).
//! - 내보내지 않은 익스텐션 컴포넌트 조회는 `None`을 반환합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! fn bootstrap(app: &mut App) -> Result<(), AppError> {
//!     app.init()?;                        // RegistrationError → AppError
//!     let repo = app.get::<UserRepository>()?; // ContainerError → AppError
//!     Ok(())
//! }
//! ```

use std::error::Error as StdError;

use thiserror::Error;

/// 컨테이너 바인딩/해결 과정에서 발생하는 에러
///
/// 의존성 해결 실패는 가공 없이 그대로 전파되어 부트스트랩을 즉시 중단시킵니다.
#[derive(Error, Debug)]
pub enum ContainerError {
    /// 같은 토큰이 이미 바인딩되어 있음
    #[error("Token already bound: {token}")]
    AlreadyBound { token: &'static str },

    /// 해결하려는 토큰에 바인딩이 없음
    #[error("No binding found for token: {token}")]
    NotBound { token: &'static str },

    /// 생성 중인 타입을 다시 요청함
    ///
    /// `path`는 순환이 감지된 시점의 해결 경로입니다 (예: `A -> B -> A`).
    #[error("Circular dependency detected: {path}")]
    CircularDependency { path: String },

    /// 바인딩된 인스턴스가 요청한 타입과 다름
    #[error("Type mismatch for token {token}: expected {expected}")]
    TypeMismatch {
        token: &'static str,
        expected: &'static str,
    },

    /// 익스텐션 컨테이너가 이미 해제되어 위임 해결이 불가능함
    #[error("Extension container for {token} is no longer available")]
    ExtensionUnavailable { token: &'static str },

    /// 생성자 내부에서 발생한 에러
    #[error("Failed to construct {token}: {source}")]
    Construction {
        token: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ContainerError {
    /// 생성자 내부 에러를 [`ContainerError::Construction`]으로 감쌉니다.
    ///
    /// ```rust,ignore
    /// let pool = Pool::connect(&url)
    ///     .map_err(|e| ContainerError::construction::<Database>(e))?;
    /// ```
    pub fn construction<T: ?Sized>(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ContainerError::Construction {
            token: std::any::type_name::<T>(),
            source: source.into(),
        }
    }
}

/// 컴포넌트 등록 과정에서 발생하는 에러
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// 같은 클래스가 하나의 레지스트리에 두 번 등록됨
    ///
    /// 이중 바인딩을 조용히 허용하지 않고 즉시 실패합니다.
    #[error("Component already registered: {class}")]
    Duplicate { class: &'static str },

    /// 컨테이너가 바인딩을 거부함
    #[error(transparent)]
    Binding(#[from] ContainerError),
}

/// 애플리케이션 부트스트랩 에러
///
/// 부트스트랩 중 발생한 모든 에러를 포괄합니다. `main`은 이 에러를 받으면
/// 0이 아닌 종료 코드로 프로세스를 끝냅니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 레지스트리 등록 실패
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// 의존성 해결 실패
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// 필요한 협력 컴포넌트를 찾을 수 없음 (설정 오류)
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    /// `init()`이 두 번 호출됨
    #[error("App already initialized: {0}")]
    AlreadyInitialized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Database;

    #[test]
    fn test_construction_error_carries_type_name() {
        let err = ContainerError::construction::<Database>("connection refused");
        let message = err.to_string();

        assert!(message.contains("Database"));
        assert!(message.contains("connection refused"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_registration_error_wraps_container_error() {
        let err: RegistrationError = ContainerError::AlreadyBound { token: "UserRepo" }.into();

        // transparent 이므로 내부 메시지가 그대로 노출됨
        assert_eq!(err.to_string(), "Token already bound: UserRepo");
    }

    #[test]
    fn test_app_error_from_layers() {
        let err: AppError = RegistrationError::Duplicate { class: "UserRepo" }.into();
        assert!(matches!(err, AppError::Registration(RegistrationError::Duplicate { .. })));

        let err: AppError = ContainerError::NotBound { token: "Cache" }.into();
        assert_eq!(err.to_string(), "Container error: No binding found for token: Cache");
    }
}
