pub mod http;
pub mod rendering;

#[cfg(target_arch = "wasm32")]
pub mod services;
