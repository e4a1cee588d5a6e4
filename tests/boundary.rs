//! 浏览器内边界一致性测试
//!
//! 用 wasm-bindgen-test 在真实浏览器里驱动导出的边界函数，
//! 验证调用顺序宽容性与完整驱动序列。
//!
//! 运行：`wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use game_engine_web::bindings::js;
use game_engine_web::core::engine;

wasm_bindgen_test_configure!(run_in_browser);

/// 在文档里创建一块画布
fn install_canvas(id: &str, width: u32, height: u32) {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn events_before_main_do_not_raise() {
    // 契约不强制调用顺序：main 之前的事件必须静默通过
    js::resize_event(800, 600);
    js::keyboard_event_down("ArrowUp");
    js::keyboard_event_up("ArrowUp");
    js::update_event();
    js::touch_event_down(10, 10);
    js::touch_event_up(10, 10);
}

#[wasm_bindgen_test]
fn declared_drive_sequence_completes() {
    install_canvas("canvas-1", 320, 240);
    js::main("canvas-1").expect("main should attach to the canvas");

    js::resize_event(800, 600);
    js::keyboard_event_down("ArrowUp");
    assert!(engine::is_key_pressed("ArrowUp"));
    js::update_event();
    js::keyboard_event_up("ArrowUp");
    assert!(!engine::is_key_pressed("ArrowUp"));

    engine::shutdown();
}

#[wasm_bindgen_test]
fn zero_dimension_resize_is_tolerated() {
    install_canvas("canvas-zero", 100, 100);
    js::main("canvas-zero").unwrap();

    js::resize_event(0, 100);
    // 退化表面下帧仍然推进，绘制被跳过
    js::update_event();
    js::resize_event(100, 100);
    js::update_event();

    engine::shutdown();
}

#[wasm_bindgen_test]
fn second_main_is_rejected() {
    install_canvas("canvas-a", 100, 100);
    install_canvas("canvas-b", 100, 100);
    js::main("canvas-a").unwrap();
    assert!(js::main("canvas-b").is_err());

    engine::shutdown();
}

#[wasm_bindgen_test]
fn main_with_missing_canvas_errors() {
    assert!(js::main("no-such-canvas").is_err());
}
