use crate::helpers::{ApiError, Claims};
use crate::middleware::authentication::method::Rejection;
use actix_web::{
    body::EitherBody,
    dev::{ResourceDef, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error, HttpMessage, ResponseError,
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

const MISSING_TOKEN: &str = "Missing or malformed JWT";

#[derive(Clone)]
struct Rule {
    method: Method,
    pattern: ResourceDef,
}

/// Route policy: requests matching a protected (method, path pattern) pair
/// need claims verified by [`crate::middleware::authentication::Manager`].
/// Everything else is public.
#[derive(Clone, Default)]
pub struct Gate {
    rules: Rc<Vec<Rule>>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the `/product` scope: writes need a login token, reads stay public.
    pub fn catalog_policy() -> Self {
        Self::new()
            .protect(Method::POST, "/product")
            .protect(Method::PUT, "/product")
            .protect(Method::PUT, "/product/{id}")
            .protect(Method::DELETE, "/product/{id}")
    }

    pub fn protect(mut self, method: Method, pattern: &str) -> Self {
        Rc::make_mut(&mut self.rules).push(Rule {
            method,
            pattern: ResourceDef::new(pattern),
        });
        self
    }

    pub fn is_protected(&self, method: &Method, path: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.method == *method && rule.pattern.is_match(path))
    }
}

impl<S, B> Transform<S, ServiceRequest> for Gate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GateMiddleware {
            service: Rc::new(service),
            gate: self.clone(),
        }))
    }
}

pub struct GateMiddleware<S> {
    service: Rc<S>,
    gate: Gate,
}

impl<S, B> Service<ServiceRequest> for GateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let denied = self.gate.is_protected(req.method(), req.path())
            && req.extensions().get::<Arc<Claims>>().is_none();

        if denied {
            let reason = req
                .extensions()
                .get::<Rejection>()
                .map(|rejection| rejection.0.clone())
                .unwrap_or_else(|| MISSING_TOKEN.to_string());
            tracing::warn!("Denied {} {}: {}", req.method(), req.path(), reason);

            let response = ApiError::Unauthorized(reason).error_response();
            return ready(Ok(req.into_response(response).map_into_right_body())).boxed_local();
        }

        let service = self.service.clone();
        async move {
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::JwtManager;
    use crate::middleware::authentication::Manager;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    #[actix_web::test]
    async fn only_product_writes_are_protected() {
        let gate = Gate::catalog_policy();

        assert!(gate.is_protected(&Method::POST, "/product"));
        assert!(gate.is_protected(&Method::PUT, "/product"));
        assert!(gate.is_protected(&Method::PUT, "/product/3"));
        assert!(gate.is_protected(&Method::DELETE, "/product/3"));

        assert!(!gate.is_protected(&Method::GET, "/product"));
        assert!(!gate.is_protected(&Method::GET, "/product/3"));
        assert!(!gate.is_protected(&Method::GET, "/product/filter"));
        assert!(!gate.is_protected(&Method::POST, "/owner"));
        assert!(!gate.is_protected(&Method::PUT, "/owner/3"));
        assert!(!gate.is_protected(&Method::POST, "/login"));
    }

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().body("done")
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(JwtManager::new("gate-secret")))
                    .wrap(Gate::catalog_policy())
                    .wrap(Manager::new())
                    .service(
                        web::resource("/product")
                            .route(web::get().to(ok))
                            .route(web::post().to(ok)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn protected_route_without_token_is_unauthorized() {
        let app = app!();

        let req = test::TestRequest::post().uri("/product").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], MISSING_TOKEN);
    }

    #[actix_web::test]
    async fn protected_route_with_valid_token_passes() {
        let app = app!();
        let token = JwtManager::new("gate-secret").issue("shop@wearlab.test").unwrap();

        let req = test::TestRequest::post()
            .uri("/product")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn protected_route_with_forged_token_is_unauthorized() {
        let app = app!();
        let token = JwtManager::new("other-secret").issue("shop@wearlab.test").unwrap();

        let req = test::TestRequest::post()
            .uri("/product")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn public_route_ignores_a_bad_token() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/product")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
