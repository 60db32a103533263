//! 浏览器渲染模块

pub mod renderer;

pub use renderer::{ChromeRenderer, PageRenderer};
