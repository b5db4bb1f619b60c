//! Diagnostic output
//!
//! Lines go to `esp_println` when the `esp32-log` feature is enabled and are
//! compiled out otherwise. The arguments are still type-checked in both cases.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

pub(crate) use debug;
