use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wraps a `(request, response, next)` handler whose body is a future.
///
/// The returned handler has the same shape. It runs the original and, if its
/// future resolves to `Err`, hands the error to `next` exactly once. A
/// successful handler never touches `next` through the wrapper.
pub fn catch_async<H, Req, Res, N, E, Fut>(handler: H) -> impl Fn(Req, Res, N) -> Forwarded<Fut, N>
where
    H: Fn(Req, Res, N) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    N: FnOnce(E) + Clone,
{
    move |req, res, next: N| Forwarded {
        inner: Box::pin(handler(req, res, next.clone())),
        next: Some(next),
    }
}

/// Future returned by a [`catch_async`] handler. Resolves once the wrapped
/// handler's future does, after routing any failure to the continuation.
#[must_use = "futures do nothing unless polled"]
pub struct Forwarded<Fut, N> {
    inner: Pin<Box<Fut>>,
    next: Option<N>,
}

// `inner` is boxed and `next` is never pinned.
impl<Fut, N> Unpin for Forwarded<Fut, N> {}

impl<Fut, N, E> Future for Forwarded<Fut, N>
where
    Fut: Future<Output = Result<(), E>>,
    N: FnOnce(E),
{
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match self.inner.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(())) => Poll::Ready(()),
            Poll::Ready(Err(err)) => {
                if let Some(next) = self.next.take() {
                    next(err);
                }
                Poll::Ready(())
            }
        }
    }
}
