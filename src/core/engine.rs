//! 引擎主体与事件分发
//!
//! 宿主通过边界函数（见 [`crate::bindings`]）把输入、帧节拍和尺寸变化
//! 送进来；本模块把它们整理成 [`Event`] 并交给用户注册的处理器。
//!
//! 分发层拥有两块线程本地状态：
//! - 引擎槽位：`main(canvas)` 之后才有引擎；之前的事件照常转发给
//!   处理器（默认空处理器），不会报错
//! - 键盘状态：过滤浏览器自动重复与失配的 up/down，处理器只看到
//!   真实转换
//!
//! wasm 里所有边界调用都在同一条 JS 线程上串行到达，线程本地状态
//! 不需要加锁。

use std::cell::RefCell;

use web_sys::WebGlRenderingContext;

use crate::config::{EngineConfig, FrameConfig};
use crate::core::error::{EngineError, EngineResult};
use crate::platform::KeyState;
use crate::render::{shaders, RenderContext};

/// 鼠标按键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

/// 跨边界事件
///
/// 按键以宿主给定的字符串标识（浏览器 `KeyboardEvent.code`），
/// 坐标与尺寸单位是 CSS 像素。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'k> {
    KeyUp(&'k str),
    KeyDown(&'k str),

    /// 每帧一次，由宿主的帧调度器驱动
    Update,
    /// 固定步进，由 [`FixedStepAccumulator`] 从 Update 节拍推导
    FixedUpdate,
    Resize(u32, u32),

    TouchUp(u32, u32),
    TouchDown(u32, u32),

    MouseUp(MouseButton, u32, u32),
    MouseDown(MouseButton, u32, u32),
}

/// 固定步进累加器
///
/// `update_event` 不携带时间戳，按配置的标称帧周期推进：每帧加入
/// `frame_period`，每溢出一个 `fixed_timestep` 派发一次 FixedUpdate。
/// 不读壁钟，行为确定。
#[derive(Debug, Clone)]
pub struct FixedStepAccumulator {
    accumulated: f32,
    frame_period: f32,
    fixed_timestep: f32,
}

impl FixedStepAccumulator {
    pub fn new(frame: &FrameConfig) -> Self {
        Self {
            accumulated: 0.0,
            frame_period: frame.frame_period,
            fixed_timestep: frame.fixed_timestep,
        }
    }

    /// 推进一帧，返回本帧应派发的固定步数
    pub fn tick(&mut self) -> u32 {
        self.accumulated += self.frame_period;
        let steps = (self.accumulated / self.fixed_timestep) as u32;
        self.accumulated -= steps as f32 * self.fixed_timestep;
        steps
    }
}

/// 引擎主结构
///
/// 持有渲染上下文、帧计数与固定步进累加器。生命周期：
/// `main(canvas)` 构建并安装（Uninstantiated → Running），之后由
/// 事件分发驱动。每线程至多一个实例。
pub struct Engine {
    context: RenderContext,
    accumulator: FixedStepAccumulator,
    frame_count: u64,
    config: EngineConfig,
}

impl Engine {
    /// 绑定画布并初始化渲染上下文
    pub fn new(canvas: &str, config: EngineConfig) -> EngineResult<Self> {
        config.validate().map_err(EngineError::Config)?;
        let context = RenderContext::new(canvas, &config.graphics)?;
        let accumulator = FixedStepAccumulator::new(&config.frame);
        Ok(Self {
            context,
            accumulator,
            frame_count: 0,
            config,
        })
    }

    /// 推进一帧：清屏、绘制、推进累加器
    ///
    /// 返回本帧应派发的 FixedUpdate 数量。
    pub fn frame(&mut self) -> u32 {
        self.frame_count += 1;
        self.context.clear();
        self.context.draw();
        self.accumulator.tick()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

thread_local! {
    static EVENT_HANDLER: RefCell<Box<dyn FnMut(Event)>> = RefCell::new(Box::new(|_| {}));
    static ENGINE: RefCell<Option<Engine>> = const { RefCell::new(None) };
    static KEYS: RefCell<KeyState> = RefCell::new(KeyState::new());
}

/// 注册事件处理器，替换之前注册的处理器
///
/// 处理器内再次触发分发会因 `RefCell` 重入而 panic，属使用错误。
pub fn on_event(handler: impl FnMut(Event) + 'static) {
    EVENT_HANDLER.with(|slot| {
        *slot.borrow_mut() = Box::new(handler);
    });
}

/// 查询某键当前是否按下
pub fn is_key_pressed(key: &str) -> bool {
    KEYS.with(|keys| keys.borrow().is_pressed(key))
}

/// 分发一个边界事件
///
/// 引擎未安装时事件原样转发；按键事件先过键盘状态跟踪器，
/// 非转换（自动重复、无配对的 up）被吸收。
pub fn dispatch(event: Event) {
    match event {
        Event::KeyDown(key) => {
            let transition = KEYS.with(|keys| keys.borrow_mut().press(key));
            if transition {
                emit(Event::KeyDown(key));
            }
        }
        Event::KeyUp(key) => {
            let transition = KEYS.with(|keys| keys.borrow_mut().release(key));
            if transition {
                emit(Event::KeyUp(key));
            }
        }
        Event::Resize(width, height) => {
            ENGINE.with(|slot| {
                if let Some(engine) = slot.borrow_mut().as_mut() {
                    engine.resize(width, height);
                }
            });
            emit(Event::Resize(width, height));
        }
        Event::Update => {
            let fixed_steps = ENGINE.with(|slot| {
                slot.borrow_mut()
                    .as_mut()
                    .map(|engine| engine.frame())
                    .unwrap_or(0)
            });
            emit(Event::Update);
            for _ in 0..fixed_steps {
                emit(Event::FixedUpdate);
            }
        }
        other => emit(other),
    }
}

fn emit(event: Event) {
    EVENT_HANDLER.with(|handler| (handler.borrow_mut())(event));
}

/// 启动引擎：构建、装载演示场景并安装到当前线程
///
/// 对应宿主的一次性入口 `main(canvas)`。重复调用返回
/// [`EngineError::AlreadyRunning`]。
pub fn boot(canvas: &str, config: EngineConfig) -> EngineResult<()> {
    let already = ENGINE.with(|slot| slot.borrow().is_some());
    if already {
        return Err(EngineError::AlreadyRunning);
    }

    let mut engine = Engine::new(canvas, config)?;
    spawn_demo_scene(&mut engine)?;
    ENGINE.with(|slot| *slot.borrow_mut() = Some(engine));

    log::info!("engine running on canvas '{}'", canvas);
    Ok(())
}

/// 卸载引擎并清空键盘状态
///
/// 之后的事件重新回到未安装路径（原样转发）。
pub fn shutdown() {
    ENGINE.with(|slot| *slot.borrow_mut() = None);
    KEYS.with(|keys| keys.borrow_mut().clear());
    log::info!("engine shut down");
}

/// 演示场景：位置染色三角形
fn spawn_demo_scene(engine: &mut Engine) -> EngineResult<()> {
    const TRIANGLE: [f32; 9] = [
        -0.5, -0.5, 0.0, //
        0.5, -0.5, 0.0, //
        0.0, 0.5, 0.0,
    ];
    engine
        .context_mut()
        .create_render_object(
            shaders::VS_PASSTHROUGH,
            shaders::FS_POSITION_TINT,
            &[("pos", &TRIANGLE)],
            WebGlRenderingContext::TRIANGLES,
        )
        .map_err(EngineError::Render)?;
    Ok(())
}
