//! Lock shim: `std::sync::Mutex` with poison recovery, or `spin` without `std`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

/// A mutex whose `lock` never fails.
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> spin::MutexGuard<'_, T> {
        self.0.lock()
    }
}
