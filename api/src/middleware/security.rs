//! Security middleware for enforcing HTTPS and response security headers.
//!
//! In production the middleware rejects plain-HTTP requests (honoring
//! `X-Forwarded-Proto` behind a reverse proxy) and stamps standard security
//! headers on every response. In development both behaviors are off.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorForbidden,
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    env,
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Security middleware factory
pub struct SecurityMiddleware {
    /// Whether to enforce HTTPS (disabled in development)
    enforce_https: bool,
    /// Whether to add security headers
    add_security_headers: bool,
}

impl SecurityMiddleware {
    /// Creates a new security middleware with environment-based configuration
    pub fn new() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let production = environment == "production";

        log::info!(
            "Security middleware configured: enforce_https={}, add_headers={}",
            production,
            production
        );

        Self {
            enforce_https: production,
            add_security_headers: production,
        }
    }

    /// Creates a security middleware for development (no HTTPS enforcement)
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
        }
    }

    /// Creates a security middleware for production (full security)
    pub fn production() -> Self {
        Self {
            enforce_https: true,
            add_security_headers: true,
        }
    }
}

impl Default for SecurityMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;

        Box::pin(async move {
            if enforce_https {
                let is_https = {
                    let connection_info = req.connection_info();
                    connection_info.scheme() == "https"
                };
                let forwarded_https = req
                    .headers()
                    .get("X-Forwarded-Proto")
                    .and_then(|v| v.to_str().ok())
                    .map(|proto| proto.eq_ignore_ascii_case("https"))
                    .unwrap_or(false);

                if !is_https && !forwarded_https {
                    log::warn!("Rejecting non-HTTPS request to {}", req.path());
                    return Err(ErrorForbidden("HTTPS is required"));
                }
            }

            let mut response = service.call(req).await?;

            if add_security_headers {
                let headers = response.headers_mut();
                headers.insert(
                    header::STRICT_TRANSPORT_SECURITY,
                    HeaderValue::from_static("max-age=31536000; includeSubDomains"),
                );
                headers.insert(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                );
                headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
                headers.insert(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                );
            }

            Ok(response)
        })
    }
}
