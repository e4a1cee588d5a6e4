/// 统一配置系统
///
/// 提供 JSON 配置与运行时默认值。浏览器环境没有文件系统，宿主把配置
/// 作为 JSON 字符串传入（或完全省略，使用默认值）。
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 引擎配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 引擎主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 图形配置
    #[serde(default)]
    pub graphics: GraphicsConfig,

    /// 帧循环配置
    #[serde(default)]
    pub frame: FrameConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            graphics: GraphicsConfig::default(),
            frame: FrameConfig::default(),
        }
    }
}

impl EngineConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 JSON 字符串
    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 验证配置有效性
    pub fn validate(&self) -> ConfigResult<()> {
        self.graphics.validate()?;
        self.frame.validate()?;
        Ok(())
    }
}

/// 图形配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicsConfig {
    /// 清屏颜色 (RGBA, 0.0-1.0)
    pub clear_color: [f32; 4],
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl GraphicsConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (i, c) in self.clear_color.iter().enumerate() {
            if !(0.0..=1.0).contains(c) {
                return Err(ConfigError::ValidationError(format!(
                    "clear_color[{}] out of range: {}",
                    i, c
                )));
            }
        }
        Ok(())
    }
}

/// 帧循环配置
///
/// `update_event` 不携带时间戳，固定步进从标称帧周期推导：
/// 每次 update 向累加器加入 `frame_period`，每溢出一个
/// `fixed_timestep` 派发一次 `FixedUpdate`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    /// 标称帧周期（秒），宿主通常按显示刷新率驱动
    pub frame_period: f32,

    /// 固定更新步长（秒）
    pub fixed_timestep: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_period: 1.0 / 60.0,
            fixed_timestep: 1.0 / 50.0,
        }
    }
}

impl FrameConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.frame_period <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "frame_period must be positive: {}",
                self.frame_period
            )));
        }
        if self.fixed_timestep <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "fixed_timestep must be positive: {}",
                self.fixed_timestep
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::default();
        let json = config.to_json_string().unwrap();
        let parsed = EngineConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed.graphics.clear_color, config.graphics.clear_color);
        assert_eq!(parsed.frame.fixed_timestep, config.frame.fixed_timestep);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{"graphics":{"clear_color":[0.1,0.2,0.3,1.0]}}"#)
                .unwrap();
        assert_eq!(config.graphics.clear_color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(config.frame.frame_period, 1.0 / 60.0);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = EngineConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_out_of_range_clear_color_is_rejected() {
        let result =
            EngineConfig::from_json_str(r#"{"graphics":{"clear_color":[2.0,0.0,0.0,1.0]}}"#);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_zero_timestep_is_rejected() {
        let result = EngineConfig::from_json_str(
            r#"{"frame":{"frame_period":0.016,"fixed_timestep":0.0}}"#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
