//! 内置着色器库
//!
//! WebGL1 (GLSL ES 1.00) 源码。`webgl` 上下文不支持桌面 GLSL 的
//! `in`/`out` 限定符，统一使用 `attribute`/`varying`。

/// 直通顶点着色器：顶点位置原样进入裁剪空间
pub const VS_PASSTHROUGH: &str = r#"
    attribute vec3 pos;
    varying vec3 v_pos;

    void main() {
        gl_Position = vec4(pos, 1.0);
        v_pos = pos;
    }
"#;

/// 变换顶点着色器：模型矩阵 + 相机矩阵，模型空间坐标传给片元着色器
pub const VS_TRANSFORM: &str = r#"
    attribute vec3 pos;
    uniform mat4 matrix;
    uniform mat4 camera;
    varying vec3 v_pos;

    void main() {
        gl_Position = camera * matrix * vec4(pos, 1.0);
        v_pos = pos;
    }
"#;

/// 单色片元着色器，与 [`VS_PASSTHROUGH`] 配对
pub const FS_SOLID: &str = r#"
    precision mediump float;
    uniform vec4 color;

    void main() {
        gl_FragColor = color;
    }
"#;

/// 位置染色片元着色器，与 [`VS_TRANSFORM`] 配对
///
/// 颜色由模型空间坐标推导，深度方向做 1/(1-z) 增强。
pub const FS_POSITION_TINT: &str = r#"
    precision mediump float;
    varying vec3 v_pos;

    void main() {
        float z = 1.0 / (1.0 - v_pos.z);
        gl_FragColor = vec4(cos(v_pos.x) * z, cos(v_pos.y) * z, v_pos.z * z, 1.0);
    }
"#;
