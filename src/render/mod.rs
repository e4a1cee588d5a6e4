//! 渲染系统
//!
//! WebGL1 渲染上下文、着色器库与相机矩阵。
//!
//! - [`context`] - 画布绑定、着色器编译/链接、顶点缓冲与绘制
//! - [`shaders`] - 内置 GLSL 着色器源码
//! - [`camera`] - 视图矩阵构建

pub mod camera;
pub mod context;
pub mod shaders;

pub use camera::view_matrix;
pub use context::{RenderContext, RenderObject};
