//! TUI 常量定义
//!
//! 集中管理 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 35;

/// 错误横幅自动隐藏时间
pub const ERROR_AUTO_HIDE: Duration = Duration::from_secs(8);

/// 复制确认恢复时间
pub const COPY_CONFIRM_REVERT: Duration = Duration::from_secs(5);

/// 事件轮询间隔（同时驱动定时器和加载动画）
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// 加载动画帧
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
