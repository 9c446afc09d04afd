//! The seam between the client and the network.
//!
//! A [`Transport`] executes one fully-formed request and returns the response
//! or fails. Retries, circuit breaking, timeouts, TLS and connection pooling
//! all belong to the transport; the client performs exactly one
//! [`Transport::execute`] call per post and inspects nothing but the status.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use http::{Request, Response};

/// Executes HTTP requests on behalf of a [`Client`](crate::Client).
pub trait Transport {
    /// Response body type. The client never reads it.
    type Body;
    /// Failure to complete the round trip.
    type Error: Error + Send + Sync + 'static;

    /// Sends `request` and waits for the response.
    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Self::Body>, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Body = T::Body;
    type Error = T::Error;

    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Self::Body>, Self::Error> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    type Body = T::Body;
    type Error = T::Error;

    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Self::Body>, Self::Error> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Body = T::Body;
    type Error = T::Error;

    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Self::Body>, Self::Error> {
        (**self).execute(request)
    }
}

/// A [`Transport`] backed by a closure. Created with [`transport_fn`].
#[derive(Clone, Copy)]
pub struct TransportFn<F> {
    f: F,
}

/// Wraps `f` so it can be handed to a client as its transport.
///
/// ```
/// use client::{Client, Stream, transport_fn};
/// use http::{Response, StatusCode};
///
/// let transport = transport_fn(|_request| {
///     Ok::<_, std::io::Error>(Response::builder().status(StatusCode::ACCEPTED).body(()).unwrap())
/// });
/// let client = Client::new("http://sink.example.com", transport).unwrap();
/// client.post(&Stream::new("orders"), b"{}").unwrap();
/// ```
pub fn transport_fn<F, B, E>(f: F) -> TransportFn<F>
where
    F: Fn(Request<Vec<u8>>) -> Result<Response<B>, E>,
    E: Error + Send + Sync + 'static,
{
    TransportFn { f }
}

impl<F, B, E> Transport for TransportFn<F>
where
    F: Fn(Request<Vec<u8>>) -> Result<Response<B>, E>,
    E: Error + Send + Sync + 'static,
{
    type Body = B;
    type Error = E;

    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<B>, E> {
        (self.f)(request)
    }
}

impl<F> fmt::Debug for TransportFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use std::io;

    fn teapot() -> impl Transport<Body = (), Error = io::Error> {
        transport_fn(|_request| -> Result<Response<()>, io::Error> {
            Ok(Response::builder()
                .status(StatusCode::IM_A_TEAPOT)
                .body(())
                .expect("valid response"))
        })
    }

    fn status_via<T: Transport>(transport: T) -> StatusCode {
        let request = Request::post("http://sink.example.com/archives/x")
            .body(Vec::new())
            .expect("valid request");
        transport.execute(request).expect("response").status()
    }

    #[test]
    fn closures_and_wrappers_forward_to_the_inner_transport() {
        let transport = teapot();
        assert_eq!(status_via(&transport), StatusCode::IM_A_TEAPOT);
        assert_eq!(status_via(Box::new(teapot())), StatusCode::IM_A_TEAPOT);
        assert_eq!(status_via(Arc::new(teapot())), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn closure_errors_are_returned_unchanged() {
        let transport = transport_fn(|_request| -> Result<Response<()>, io::Error> {
            Err(io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded"))
        });
        let request = Request::post("http://sink.example.com/archives/x")
            .body(Vec::new())
            .expect("valid request");
        let err = transport.execute(request).expect_err("transport fails");
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }
}
