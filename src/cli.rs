//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构。三个动作 (`--encode`、
//! `--decode`、`--scramble`) 互斥且必选其一，通过 `ArgGroup` 约束。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::carrier::Channel;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// 一款基于奇偶校验位隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 的单个颜色通道中隐藏、恢复或销毁文本信息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于奇偶校验位隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 的单个颜色通道中隐藏、恢复或销毁文本信息。"
)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["encode", "decode", "scramble"])
))]
pub struct Cli {
    /// 输入图像文件的路径。
    pub filename: PathBuf,

    /// 将 MESSAGE 隐藏到图像中；结果保存为当前目录下的 encoded.png，不会覆盖输入文件。
    #[arg(short, long, value_name = "MESSAGE")]
    pub encode: Option<String>,

    /// 从图像中读取隐藏的信息并打印到标准输出。
    #[arg(short, long)]
    pub decode: bool,

    /// 销毁指定通道中隐藏的任何信息；原地覆盖输入文件（破坏性操作，无备份）。
    #[arg(short, long)]
    pub scramble: bool,

    /// 承载信息的颜色通道。
    #[arg(short, long, value_enum, default_value = "red")]
    pub channel: Channel,
}
