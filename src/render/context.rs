//! WebGL 渲染上下文
//!
//! 画布绑定、着色器编译/链接、顶点缓冲上传与绘制遍历。
//! 所有 WebGL 失败路径都走 [`RenderError`]，不吞编译日志。

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext, WebGlShader,
};

use crate::config::GraphicsConfig;
use crate::core::error::{EngineResult, RenderError, RenderResult};
use crate::platform;

/// 单个可绘制对象：链接好的着色器程序加一组顶点属性缓冲
#[derive(Debug, Clone)]
pub struct RenderObject {
    pub program: WebGlProgram,
    /// 属性位置，与 `buffers` 一一对应
    pub attributes: Vec<u32>,
    pub buffers: Vec<WebGlBuffer>,
    pub vertex_count: i32,
    /// WebGL 图元类型（`TRIANGLES` 等）
    pub draw_type: u32,
}

/// WebGL 渲染上下文
///
/// 持有画布与 `webgl` 上下文，维护待绘制对象列表。
#[derive(Debug, Clone)]
pub struct RenderContext {
    gl: WebGlRenderingContext,
    canvas: HtmlCanvasElement,
    objects: Vec<RenderObject>,
    clear_color: [f32; 4],
}

impl RenderContext {
    /// 绑定到指定 id 的画布并获取 `webgl` 上下文
    ///
    /// 视口初始化为画布当前尺寸，清屏色来自图形配置。
    pub fn new(canvas_id: &str, graphics: &GraphicsConfig) -> EngineResult<Self> {
        let canvas = platform::canvas_by_id(canvas_id)?;

        let gl = canvas
            .get_context("webgl")
            .map_err(|e| RenderError::ContextAcquisition(format!("{:?}", e)))?
            .ok_or_else(|| {
                RenderError::ContextAcquisition("webgl context unavailable".to_string())
            })?
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| {
                RenderError::ContextAcquisition("unexpected context object type".to_string())
            })?;

        gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

        let clear_color = graphics.clear_color;
        gl.clear_color(
            clear_color[0],
            clear_color[1],
            clear_color[2],
            clear_color[3],
        );

        Ok(Self {
            gl,
            canvas,
            objects: vec![],
            clear_color,
        })
    }

    pub fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color = [r, g, b, a];
        self.gl.clear_color(r, g, b, a);
    }

    pub fn clear(&self) {
        self.gl.clear(WebGlRenderingContext::COLOR_BUFFER_BIT);
    }

    /// 画布尺寸变化：同步画布像素尺寸与视口
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// 绘制遍历：逐对象启用程序、绑定缓冲、提交顶点
    pub fn draw(&self) {
        let (width, height) = self.surface_size();
        if width == 0 || height == 0 {
            // 退化表面，跳过本帧
            return;
        }

        for object in &self.objects {
            self.gl.use_program(Some(&object.program));

            for (buffer, attribute) in object.buffers.iter().zip(&object.attributes) {
                self.gl
                    .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(buffer));
                self.gl.vertex_attrib_pointer_with_i32(
                    *attribute,
                    3,
                    WebGlRenderingContext::FLOAT,
                    false,
                    0,
                    0,
                );
                self.gl.enable_vertex_attrib_array(*attribute);
            }

            self.gl.draw_arrays(object.draw_type, 0, object.vertex_count);
        }
    }

    /// 编译着色器对、链接程序并上传顶点属性，注册为可绘制对象
    ///
    /// `attributes` 是 (属性名, 顶点数据) 对，每个属性 3 个 f32 分量。
    /// 顶点数取第一个属性的长度 / 3。
    pub fn create_render_object(
        &mut self,
        vs_source: &str,
        fs_source: &str,
        attributes: &[(&str, &[f32])],
        draw_type: u32,
    ) -> RenderResult<()> {
        let vertex_count = attributes
            .first()
            .map(|(_, data)| data.len() as i32 / 3)
            .unwrap_or(0);
        if vertex_count == 0 {
            return Err(RenderError::InvalidState(
                "render object needs at least one non-empty attribute".to_string(),
            ));
        }

        let program = self.link_program(vs_source, fs_source)?;

        let mut buffers = Vec::with_capacity(attributes.len());
        let mut locations = Vec::with_capacity(attributes.len());

        for (name, data) in attributes {
            let buffer = self
                .gl
                .create_buffer()
                .ok_or(RenderError::BufferAllocation)?;
            self.gl
                .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(&buffer));

            // Safety: the view aliases wasm linear memory and is only valid
            // until the next allocation; buffer_data copies it out before
            // anything else can allocate.
            unsafe {
                let view = js_sys::Float32Array::view(data);
                self.gl.buffer_data_with_array_buffer_view(
                    WebGlRenderingContext::ARRAY_BUFFER,
                    &view,
                    WebGlRenderingContext::STATIC_DRAW,
                );
            }

            let location = self.gl.get_attrib_location(&program, name);
            if location < 0 {
                return Err(RenderError::InvalidState(format!(
                    "attribute {} not found in program",
                    name
                )));
            }
            locations.push(location as u32);
            buffers.push(buffer);
        }

        self.objects.push(RenderObject {
            program,
            attributes: locations,
            buffers,
            vertex_count,
            draw_type,
        });

        log::debug!(
            "render object created: {} attributes, {} vertices",
            attributes.len(),
            vertex_count
        );
        Ok(())
    }

    fn compile_shader(&self, shader_type: u32, source: &str) -> RenderResult<WebGlShader> {
        let shader = self
            .gl
            .create_shader(shader_type)
            .ok_or(RenderError::ShaderAllocation)?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        let compiled = self
            .gl
            .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !compiled {
            let info = self
                .gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown shader error".to_string());
            self.gl.delete_shader(Some(&shader));
            return Err(RenderError::ShaderCompilation(info));
        }
        Ok(shader)
    }

    fn link_program(&self, vs_source: &str, fs_source: &str) -> RenderResult<WebGlProgram> {
        let vertex_shader =
            self.compile_shader(WebGlRenderingContext::VERTEX_SHADER, vs_source)?;
        let fragment_shader =
            self.compile_shader(WebGlRenderingContext::FRAGMENT_SHADER, fs_source)?;

        let program = self
            .gl
            .create_program()
            .ok_or(RenderError::ShaderAllocation)?;
        self.gl.attach_shader(&program, &vertex_shader);
        self.gl.attach_shader(&program, &fragment_shader);
        self.gl.link_program(&program);

        // 着色器对象链接后即可删除，程序保有引用
        self.gl.delete_shader(Some(&vertex_shader));
        self.gl.delete_shader(Some(&fragment_shader));

        let linked = self
            .gl
            .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let info = self
                .gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| "unknown link error".to_string());
            self.gl.delete_program(Some(&program));
            return Err(RenderError::ProgramLink(info));
        }
        Ok(program)
    }
}
