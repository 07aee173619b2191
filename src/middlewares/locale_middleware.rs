//! 로케일 라우팅 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 요청 로케일을 결정합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::LocaleConfig;
use crate::middlewares::locale_inner::LocaleMiddlewareService;

/// 로케일 라우팅 미들웨어
pub struct LocaleMiddleware {
    config: LocaleConfig,
}

impl LocaleMiddleware {
    pub fn new(config: LocaleConfig) -> Self {
        Self { config }
    }
}

impl Default for LocaleMiddleware {
    fn default() -> Self {
        Self::new(LocaleConfig::default())
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for LocaleMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = LocaleMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleMiddlewareService {
            service: Rc::new(service),
            config: Rc::new(self.config.clone()),
        }))
    }
}
