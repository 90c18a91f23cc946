//! Boilerplate for newtype wrappers.

/// Implement [core::ops::Deref] from a newtype to the wrapped type stored in `inner`.
#[macro_export]
macro_rules! impl_deref {
    ($outer:ty, $inner:ty) => {
        impl core::ops::Deref for $outer {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }
    };
}

/// Implement `From` in both directions between a newtype and the wrapped type.
#[macro_export]
macro_rules! impl_conversion {
    ($outer:ty, $inner:ty) => {
        impl From<$inner> for $outer {
            fn from(value: $inner) -> Self {
                Self { inner: value }
            }
        }

        impl From<$outer> for $inner {
            fn from(value: $outer) -> Self {
                value.inner
            }
        }
    };
}

/// [impl_deref] and [impl_conversion] together.
#[macro_export]
macro_rules! impl_basic {
    ($outer:ty, $inner:ty) => {
        $crate::impl_deref!($outer, $inner);
        $crate::impl_conversion!($outer, $inner);
    };
}
