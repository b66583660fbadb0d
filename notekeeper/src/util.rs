#[doc(hidden)]
pub use log;

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => ({
        $crate::util::log::error!($($arg)+);
        std::process::exit(1)
    });
}
