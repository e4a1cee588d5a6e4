//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `engine` - 引擎主体、事件模型与分发
//! - `error` - 错误类型定义

pub mod engine;
pub mod error;

// 重新导出错误类型
pub use error::{
    EngineError, EngineResult, PlatformError, PlatformResult, RenderError, RenderResult,
};

// 重新导出主要类型
pub use engine::{
    boot, dispatch, is_key_pressed, on_event, shutdown, Engine, Event, FixedStepAccumulator,
    MouseButton,
};
