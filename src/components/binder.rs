//! # Component Binder
//!
//! 컴포넌트 서술자를 컨테이너 바인딩으로 옮기는 바인딩 정책입니다.
//!
//! ```text
//! bind_component(info)
//!    └─ host.bind(token, info.scope, Class(constructor))
//!
//! bind_extension_component(info, ext)
//!    └─ host.bind(token, info.scope, Extension(Weak<ext>))
//!          └─ resolve 시 ext.resolve_token(token)  → 익스텐션이 소유한 인스턴스
//! ```

use std::sync::Arc;

use log::debug;

use crate::components::info::ComponentInfo;
use crate::core::container::{Container, Provider};
use crate::core::errors::ContainerError;

pub struct ComponentBinder {
    container: Arc<Container>,
}

impl ComponentBinder {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    /// 클래스를 자신의 토큰으로 바인딩합니다.
    ///
    /// 컨테이너가 바인딩을 거부하면 (예: 토큰 충돌) 에러가 그대로 전파되며
    /// 재시도하지 않습니다.
    pub fn bind_component(&self, info: &ComponentInfo) -> Result<(), ContainerError> {
        debug!("Binding component {} as {}", info.id(), info.scope());

        self.container
            .bind(*info.token(), info.scope(), Provider::Class(info.class().constructor()))
    }

    /// 익스텐션 컨테이너가 소유한 컴포넌트를 호스트에서 해결할 수 있게 합니다.
    ///
    /// 호스트는 익스텐션 컨테이너에 대한 약한 참조만 보관하며, 해결할 때마다
    /// 익스텐션 컨테이너에 위임합니다. 따라서 싱글톤 컴포넌트는 양쪽에서 같은
    /// 인스턴스로 해결되고, 인스턴스의 수명은 익스텐션이 결정합니다.
    pub fn bind_extension_component(
        &self,
        info: &ComponentInfo,
        extension_container: &Arc<Container>,
    ) -> Result<(), ContainerError> {
        debug!("Binding extension component {} as {}", info.id(), info.scope());

        self.container.bind(
            *info.token(),
            info.scope(),
            Provider::Extension(Arc::downgrade(extension_container)),
        )
    }
}
