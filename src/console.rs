// Browser console logging.
//
// On wasm32 every macro forwards to `gloo_console`. Native builds (unit tests)
// have no console to talk to, so the same call sites print to stderr instead.

#[cfg(target_arch = "wasm32")]
macro_rules! log {
    ($($arg:tt)*) => { gloo_console::log!(format!($($arg)*)) };
}

#[cfg(target_arch = "wasm32")]
macro_rules! warning {
    ($($arg:tt)*) => { gloo_console::warn!(format!($($arg)*)) };
}

#[cfg(target_arch = "wasm32")]
macro_rules! error {
    ($($arg:tt)*) => { gloo_console::error!(format!($($arg)*)) };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log {
    ($($arg:tt)*) => { eprintln!($($arg)*) };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! warning {
    ($($arg:tt)*) => { eprintln!("warn: {}", format!($($arg)*)) };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error {
    ($($arg:tt)*) => { eprintln!("error: {}", format!($($arg)*)) };
}

pub(crate) use {error, log, warning};
