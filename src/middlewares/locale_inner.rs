//! LocaleMiddleware 로케일 라우팅의 핵심 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderValue, ACCEPT_LANGUAGE, CONTENT_LANGUAGE, LOCATION};
use actix_web::http::Uri;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::LocaleConfig;
use crate::middlewares::locale_resolver::{resolve, LocaleDecision, RequestLocale};

/// 실제 로케일 결정을 수행하는 서비스
pub struct LocaleMiddlewareService<S> {
    pub service: Rc<S>,
    pub config: Rc<LocaleConfig>,
}

impl<S, B> Service<ServiceRequest> for LocaleMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let accept_language = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|h| h.to_str().ok());
        let decision = resolve(&self.config, req.path(), accept_language);

        Box::pin(async move {
            let locale = match decision {
                LocaleDecision::Skip => {
                    let res = service.call(req).await?;
                    return Ok(res.map_into_left_body());
                },
                LocaleDecision::Redirect { locale, location } => {
                    let location = append_query(location, req.query_string());
                    log::debug!("로케일 리다이렉트: {} -> {} ({})", req.path(), location, locale);

                    let response = HttpResponse::TemporaryRedirect()
                        .insert_header((LOCATION, location))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                LocaleDecision::Serve { locale, rewrite } => {
                    if let Some(path) = rewrite {
                        rewrite_path(&mut req, &path);
                    }
                    locale
                },
            };

            // 핸들러에서 RequestLocale 추출기로 사용
            req.extensions_mut().insert(RequestLocale(locale));
            log::debug!("요청 로케일: {} ({})", locale, req.path());

            let mut res = service.call(req).await?;
            res.headers_mut()
                .insert(CONTENT_LANGUAGE, HeaderValue::from_static(locale));
            Ok(res.map_into_left_body())
        })
    }
}

fn append_query(location: String, query: &str) -> String {
    if query.is_empty() {
        location
    } else {
        format!("{}?{}", location, query)
    }
}

/// 로케일 접두사를 제거한 경로로 내부 재작성 (쿼리 문자열 유지)
fn rewrite_path(req: &mut ServiceRequest, path: &str) {
    let target = append_query(path.to_string(), req.query_string());

    match target.parse::<Uri>() {
        Ok(uri) => {
            req.match_info_mut().get_mut().update(&uri);
            req.head_mut().uri = uri;
        },
        Err(e) => {
            log::warn!("경로 재작성 실패 ({}): {}", target, e);
        },
    }
}
