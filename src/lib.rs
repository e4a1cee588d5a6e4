//! # Game Engine Web Runtime
//!
//! Browser-side runtime of the game engine, compiled to WebAssembly with
//! `wasm-bindgen`. The JS host owns the canvas, the keyboard and the frame
//! scheduler; this crate owns everything behind the boundary: the WebGL
//! render context, the shader library and the event dispatch layer.
//!
//! ## 架构
//!
//! 宿主（JS）通过导出的边界函数驱动引擎：
//! - `main(canvas)` - 一次性入口，绑定画布并启动引擎
//! - `keyboard_event_down` / `keyboard_event_up` - 按键状态转换
//! - `update_event` - 每帧一次（通常由 requestAnimationFrame 驱动）
//! - `resize_event` - 画布尺寸变化
//!
//! All state lives behind the boundary; the host never touches engine
//! internals beyond these calls.
//!
//! ## Modules
//!
//! - [`core`]: Engine state, event model and dispatch
//! - [`platform`]: Web platform helpers (canvas lookup, key state)
//! - [`render`]: WebGL rendering context and shader library
//! - [`config`]: Configuration system
//! - [`bindings`]: The exported host boundary

/// Core engine functionality: event model, dispatch and engine state
pub mod core;
/// Platform helpers for the web target
pub mod platform;
/// WebGL rendering context and shaders
pub mod render;
/// Configuration system
pub mod config;
/// Host boundary exported through wasm-bindgen
pub mod bindings;

use wasm_bindgen::prelude::*;

/// Module load hook. Runs once when the wasm module is instantiated,
/// before the host calls `main` or any event function.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // 重复初始化（热重载时）不视为错误
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("wasm module instantiated");
}
