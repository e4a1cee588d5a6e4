//! 宿主边界
//!
//! 通过 wasm-bindgen 导出的全部函数。宿主（JS）把原生输入、帧节拍
//! 与尺寸变化翻译成这些调用；除此之外引擎内部状态对宿主不可见。
//!
//! `initSync` / 默认异步初始化器 / `memory` / `__wbindgen_malloc` /
//! `__wbindgen_realloc` 由 wasm-bindgen 生成，不在本模块内实现。

pub mod js;

pub use js::{
    keyboard_event_down, keyboard_event_up, main, resize_event, touch_event_down, touch_event_up,
    update_event,
};
