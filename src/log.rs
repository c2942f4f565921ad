#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    tracing::info!("{message}");
}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log::log(&format!($($t)*))
    };
}
