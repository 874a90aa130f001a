//! 공통 유틸리티 함수 모듈
//! 
//! 크레이트 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 타입 이름, 모듈 경로, 선택적 문자열 처리
//! - [`display_terminal`] - 부트스트랩 터미널 출력 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::short_type_name;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert_eq!(short_type_name("my_app::users::UserRepository"), "UserRepository");
//!
//! print_boxed_title("host v0.1.0");
//! ```

pub mod string_utils;
pub mod display_terminal;
