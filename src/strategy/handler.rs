//! Handlers and the transforms strategies wrap around them.

use std::sync::Arc;

use crate::error::GraphResult;

/// One graph operation: takes the operation's arguments and produces its result.
///
/// Operations without arguments take `()`. Handlers are shared so a transform may call the
/// next handler any number of times (or not at all).
pub type Handler<A, R> = Arc<dyn Fn(A) -> GraphResult<R> + Send + Sync>;

/// Endofunction over handlers. Receives the next handler in the chain and returns the handler
/// to run in its place.
pub type Transform<A, R> = Box<dyn FnOnce(Handler<A, R>) -> Handler<A, R> + Send>;

/// The transform that returns the next handler unchanged.
pub fn identity<A: 'static, R: 'static>() -> Transform<A, R> {
  Box::new(|next| next)
}

/// Wraps a closure as a [Handler].
pub fn handler<A, R, F>(f: F) -> Handler<A, R>
where
  F: Fn(A) -> GraphResult<R> + Send + Sync + 'static,
{
  Arc::new(f)
}

/// Wraps a closure as a [Transform].
pub fn transform<A, R, F>(f: F) -> Transform<A, R>
where
  F: FnOnce(Handler<A, R>) -> Handler<A, R> + Send + 'static,
{
  Box::new(f)
}

/// Applies `transforms` around `base`, the first transform outermost.
pub fn chain<A: 'static, R: 'static>(
  transforms: Vec<Transform<A, R>>,
  base: Handler<A, R>,
) -> Handler<A, R> {
  transforms
    .into_iter()
    .rev()
    .fold(base, |next, transform| transform(next))
}
