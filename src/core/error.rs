//! 统一错误处理模块
//!
//! 提供引擎范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - `PlatformError` - 平台层错误（window/document/canvas 查找）
//! - `RenderError` - 渲染层错误（WebGL 上下文、着色器、缓冲区）
//! - `EngineError` - 顶层错误，聚合以上两层与生命周期错误
//!
//! 边界函数（`bindings::js`）在最外层把 `EngineError` 转成 `JsValue`
//! 抛回宿主。

use thiserror::Error;
use wasm_bindgen::JsValue;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Engine is already running")]
    AlreadyRunning,

    #[error("General error: {0}")]
    General(String),
}

/// 渲染系统错误
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Failed to acquire webgl context: {0}")]
    ContextAcquisition(String),

    #[error("Failed to create shader object")]
    ShaderAllocation,

    #[error("Shader compilation failed: {0}")]
    ShaderCompilation(String),

    #[error("Program link failed: {0}")]
    ProgramLink(String),

    #[error("Failed to create buffer")]
    BufferAllocation,

    #[error("Invalid render state: {0}")]
    InvalidState(String),
}

/// 平台层错误
#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    #[error("No window object in this environment")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("Canvas element not found: {0}")]
    CanvasNotFound(String),

    #[error("Element {0} is not a canvas")]
    NotACanvas(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
pub type RenderResult<T> = Result<T, RenderError>;
pub type PlatformResult<T> = Result<T, PlatformError>;
