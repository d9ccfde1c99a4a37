use core::fmt::Debug;

/// Fundamental constraints for values stored in a persistent queue.
///
/// Every mutating operation copies the whole backing store, so elements must be `Clone`. On
/// targets that provide atomic pointer support we additionally demand `Send + Sync` so that queue
/// values can be shared across threads. On single-threaded targets (e.g. RP2040) only
/// `Clone + Debug + 'static` is required.
#[cfg(target_has_atomic = "ptr")]
pub trait Element: Clone + Debug + Send + Sync + 'static {}

#[cfg(target_has_atomic = "ptr")]
impl<T> Element for T where T: Clone + Debug + Send + Sync + 'static {}

/// Fundamental constraints for values stored in a persistent queue on single-threaded targets.
#[cfg(not(target_has_atomic = "ptr"))]
pub trait Element: Clone + Debug + 'static {}

#[cfg(not(target_has_atomic = "ptr"))]
impl<T> Element for T where T: Clone + Debug + 'static {}
