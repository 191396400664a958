//! lonescode - 多标签编辑会话核心库
//!
//! 模块结构：
//! - core: 命令与按键（Command, Key）
//! - kernel: 会话状态、目录树、host 边界与服务适配（Store, Session, Explorer）
//! - app: 应用层（Workbench）

pub mod app;
pub mod core;
pub mod kernel;
