//! 导出的边界函数
//!
//! 调用约定（宿主侧约束，本层不强制）：
//! - `main` 在模块实例化后调用一次，之后才驱动事件函数；
//!   提前到达的事件会被原样转发给默认空处理器，不会报错
//! - 同一键不应在没有 up 的情况下重复 down；违反时分发层会过滤
//! - 所有调用来自同一条 JS 线程，串行进入模块

use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::core::engine::{self, Event};

/// 按键抬起
#[wasm_bindgen]
pub fn keyboard_event_up(ev: &str) {
    engine::dispatch(Event::KeyUp(ev));
}

/// 按键按下
#[wasm_bindgen]
pub fn keyboard_event_down(ev: &str) {
    engine::dispatch(Event::KeyDown(ev));
}

/// 帧节拍，宿主每个调度周期调用一次
#[wasm_bindgen]
pub fn update_event() {
    engine::dispatch(Event::Update);
}

/// 画布尺寸变化（CSS 像素）
#[wasm_bindgen]
pub fn resize_event(width: u32, height: u32) {
    engine::dispatch(Event::Resize(width, height));
}

/// 触摸抬起
#[wasm_bindgen]
pub fn touch_event_up(x: u32, y: u32) {
    engine::dispatch(Event::TouchUp(x, y));
}

/// 触摸按下
#[wasm_bindgen]
pub fn touch_event_down(x: u32, y: u32) {
    engine::dispatch(Event::TouchDown(x, y));
}

/// 一次性入口：绑定画布并启动引擎
///
/// `canvas` 是宿主命名方案下的画布元素 id。画布缺失、WebGL 不可用
/// 或重复调用都会以异常抛回宿主。
#[wasm_bindgen]
pub fn main(canvas: &str) -> Result<(), JsValue> {
    engine::boot(canvas, EngineConfig::default())?;
    Ok(())
}
