//! Web 平台抽象层
//!
//! 画布查找与键盘状态跟踪。宿主以字符串标识按键（浏览器的
//! `KeyboardEvent.code`，如 `"ArrowUp"`、`"KeyW"`），引擎不做按键映射，
//! 只跟踪按下/抬起状态转换。

use std::collections::HashSet;

use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::core::error::{PlatformError, PlatformResult};

/// 按 id 查找画布元素
///
/// 宿主在 `main(canvas)` 里传入画布 id，命名方案由宿主决定。
pub fn canvas_by_id(id: &str) -> PlatformResult<HtmlCanvasElement> {
    let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
    let document = window.document().ok_or(PlatformError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError::CanvasNotFound(id.to_string()))?;
    element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PlatformError::NotACanvas(id.to_string()))
}

/// 键盘状态跟踪器
///
/// The boundary contract makes the host responsible for clean down/up
/// ordering, but the browser host violates it routinely: holding a key
/// fires auto-repeat `keydown` storms, and focus loss can swallow the
/// matching `keyup`. The tracker absorbs both so the user handler only
/// ever sees real transitions.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    pressed: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录按下。返回 `true` 表示这是一次真实的状态转换
    /// （之前未按下），`false` 表示重复的 down（自动重复）。
    pub fn press(&mut self, key: &str) -> bool {
        self.pressed.insert(key.to_string())
    }

    /// 记录抬起。返回 `true` 表示这是一次真实的状态转换，
    /// `false` 表示该键从未报告过按下。
    pub fn release(&mut self, key: &str) -> bool {
        self.pressed.remove(key)
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// 清空全部按键状态（例如画布失焦时）
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
