//! 애플리케이션 컨텍스트
//!
//! 모든 앱 컨테이너에 상수로 바인딩되어, 컴포넌트나 어댑터가 생성 시점에
//! 자신이 속한 앱과 컨테이너에 접근할 수 있게 합니다.

use std::any::Any;
use std::sync::{Arc, Weak};

use crate::app::AppInfo;
use crate::components::class::ClassId;
use crate::core::container::Container;
use crate::core::errors::AppError;

#[derive(Debug, Clone)]
pub struct AppContext {
    info: AppInfo,
    // 컨테이너가 컨텍스트를 소유하므로 역방향은 약한 참조
    container: Weak<Container>,
}

impl AppContext {
    pub fn new(info: AppInfo, container: Weak<Container>) -> Self {
        Self { info, container }
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    pub fn get_container(&self) -> Result<Arc<Container>, AppError> {
        self.container.upgrade().ok_or_else(|| {
            AppError::MissingCollaborator(format!("container of {} is no longer available", self.info.name))
        })
    }

    /// 이름이 아닌 타입으로 협력 컴포넌트를 찾습니다.
    ///
    /// 바인딩이 없으면 [`AppError::MissingCollaborator`]이며, 설정 오류이므로
    /// 재시도하지 않고 부트스트랩을 중단해야 합니다.
    pub fn get_component<T: Any + Send + Sync>(&self) -> Result<Arc<T>, AppError> {
        let container = self.get_container()?;
        let token = ClassId::of::<T>();

        if !container.is_bound(&token) {
            return Err(AppError::MissingCollaborator(format!(
                "{} is not registered in {}",
                token.short_name(),
                self.info.name
            )));
        }

        Ok(container.resolve::<T>()?)
    }
}
