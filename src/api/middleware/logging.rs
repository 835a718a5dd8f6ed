use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use futures::future::BoxFuture;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::application::RequestLog;

/// Layer that wraps a service in a [`RequestLogger`].
#[derive(Clone, Default)]
pub struct RequestLoggerLayer {
    log: RequestLog,
}

impl RequestLoggerLayer {
    pub fn new(log: RequestLog) -> Self {
        Self { log }
    }
}

impl<S> Layer<S> for RequestLoggerLayer {
    type Service = RequestLogger<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogger {
            inner,
            log: self.log.clone(),
        }
    }
}

/// Wraps `service` so every call emits one line through `log`.
pub fn wrap<S>(service: S, log: RequestLog) -> RequestLogger<S> {
    RequestLoggerLayer::new(log).layer(service)
}

/// Service that times the wrapped service and logs
/// `<METHOD> <PATH> <STATUS> <DURATION>` for every request.
///
/// Responses and errors from the inner service pass through untouched. If
/// the inner service fails, panics, or its future is dropped, the line is
/// still written with an `unknown` status.
#[derive(Clone)]
pub struct RequestLogger<S> {
    inner: S,
    log: RequestLog,
}

impl<S, ReqBody, ResBody> Service<axum::http::Request<ReqBody>> for RequestLogger<S>
where
    S: Service<axum::http::Request<ReqBody>, Response = axum::http::Response<ResBody>> + 'static,
    S::Future: Send + 'static,
    ReqBody: 'static,
    ResBody: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: axum::http::Request<ReqBody>) -> Self::Future {
        let invocation = self
            .log
            .begin(request.method().as_str(), request.uri().path());
        let future = self.inner.call(request);

        Box::pin(async move {
            let result = future.await;
            if let Ok(response) = &result {
                invocation.finish(response.status().into());
            }
            result
        })
    }
}

/// Function-style variant for `axum::middleware::from_fn_with_state`.
pub async fn request_logger(
    State(log): State<RequestLog>,
    request: Request,
    next: Next,
) -> Response {
    let invocation = log.begin(request.method().as_str(), request.uri().path());

    let response = next.run(request).await;

    invocation.finish(response.status().into());
    response
}
