#![allow(unused_imports)]

#[cfg(any(feature = "std", feature = "error_in_core"))]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "error_in_core")] {
            pub use core::error::Error;
        } else {
            pub use std::error::Error;
        }
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
pub(crate) use definitions::Error;
