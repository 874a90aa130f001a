//! # Core Module
//!
//! 컴포넌트 레지스트리가 의존하는 최소한의 IoC 컨테이너와 에러 타입입니다.
//!
//! ## 모듈 구성
//!
//! ### [`container`] - 의존성 주입 컨테이너
//! - **Container**: 토큰(클래스 식별자) → 바인딩 맵
//! - **Provider**: 클래스 생성자, 상수 인스턴스, 익스텐션 위임
//! - **Scope**: Singleton / Transient / Request
//! - **Resolver**: 해결 스택 기반 순환 참조 감지
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ContainerError**: 바인딩 충돌, 해결 실패
//! - **RegistrationError**: 중복 등록
//! - **AppError**: 부트스트랩 전체
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! Container error: Circular dependency detected: UserService -> AuthService -> UserService
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! Container error: No binding found for token: my_app::mail::EmailService
//! ```
//! **해결**: 등록 데코레이터를 적용하고 클래스 로더 경로에 포함되었는지 확인.
//! 익스텐션 컴포넌트라면 `export` 옵션이 켜져 있는지 확인

pub mod container;
pub mod errors;

pub use container::*;
pub use errors::*;
