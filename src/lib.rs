//! # parity_hide 库
//!
//! 本库包含奇偶校验位隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod bits;
pub mod carrier;
pub mod cli;
pub mod constants;
pub mod handler;
pub mod steganography;
