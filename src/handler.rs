//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `scramble` 动作的高级业务逻辑。
//! 本模块负责协调载体的加载与保存、调用核心隐写算法以及向用户报告结果。

use crate::bits::{decode_bits, encode_text};
use crate::carrier::{Carrier, Channel};
use crate::constants::ENCODED_OUTPUT;
use crate::steganography::{embed, extract, scramble, transmission_len};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// 处理 'encode' 动作的执行逻辑。
///
/// 负责加载载体图像、检查隐写空间是否足够、将信息编码为位流并
/// 写入指定通道，最后把结果保存为当前目录下的 `encoded.png`。
///
/// # Arguments
///
/// * `image` - 输入图像文件的路径。
/// * `message` - 要隐藏的文本信息。
/// * `channel` - 承载信息的颜色通道。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解析输入图像。
/// * 图像的像素数不足以容纳完整的传输流。
/// * 信息中含有码点超出 255 的字符。
/// * 无法写入输出文件 `encoded.png`。
pub fn handle_encode(image: &Path, message: &str, channel: Channel) -> Result<()> {
    let mut carrier = Carrier::open(image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            image.to_string_lossy().red().bold()
        )
    })?;

    let required_bits = transmission_len(message.chars().count());
    let available_pixels = carrier.pixel_count();

    anyhow::ensure!(
        available_pixels >= required_bits,
        "Not enough space in the image to hide the message. \nRequired: {} bits, Available: {} pixels",
        required_bits.to_string().red().bold(),
        available_pixels.to_string().green().bold()
    );

    let bits = encode_text(message).with_context(|| {
        "Failed to encode the message as a bitstream. \nOnly characters with code points 0-255 can be hidden."
    })?;

    let written = embed(&mut carrier, &bits, channel, &mut rand::rng());

    let dest = Path::new(ENCODED_OUTPUT);
    carrier.save(dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            ENCODED_OUTPUT.red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden ({} bits written) and saved: {}",
        written.to_string().green(),
        ENCODED_OUTPUT.green().bold()
    );

    Ok(())
}

/// 处理 'decode' 动作的执行逻辑。
///
/// 负责加载载体图像、从指定通道提取位流并解码为文本，
/// 最后将结果打印到标准输出。未找到头部哨兵时打印
/// "no message found!"，这不是错误。
///
/// # Arguments
///
/// * `image` - 已隐藏信息的图像文件路径。
/// * `channel` - 承载信息的颜色通道。
///
/// # Errors
///
/// 无法读取或解析输入图像时返回错误。
pub fn handle_decode(image: &Path, channel: Channel) -> Result<()> {
    let carrier = Carrier::open(image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            image.to_string_lossy().red().bold()
        )
    })?;

    let bits = extract(&carrier, channel);
    println!("{}", decode_bits(&bits));

    Ok(())
}

/// 处理 'scramble' 动作的执行逻辑。
///
/// 负责加载载体图像、随机扰动指定通道的奇偶性以销毁其中隐藏的
/// 任何信息，然后原地覆盖输入文件。
///
/// # Arguments
///
/// * `image` - 要清除信息的图像文件路径。
/// * `channel` - 要扰动的颜色通道。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解析输入图像。
/// * 无法写回输入文件。
pub fn handle_scramble(image: &Path, channel: Channel) -> Result<()> {
    let mut carrier = Carrier::open(image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            image.to_string_lossy().red().bold()
        )
    })?;

    scramble(&mut carrier, channel, &mut rand::rng());

    carrier.save(image).with_context(|| {
        format!(
            "Unable to write back to image file: {}",
            image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Any hidden message has been scrambled in place: {}",
        image.to_string_lossy().green().bold()
    );

    Ok(())
}
