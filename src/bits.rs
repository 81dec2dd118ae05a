//! # 位流编解码模块
//!
//! 在文本与二进制位序列之间转换。每个字符占 8 位（高位在前），
//! 因此仅支持码点在 0-255 范围内的字符。

use crate::constants::BITS_PER_CHAR;
use std::io::{self, ErrorKind};

/// 将文本编码为位序列；每个字符的码点按无符号 8 位、
/// 高位在前展开后依次拼接。
///
/// # Errors
///
/// 信息中出现码点大于 255 的字符时返回错误：8 位无法表示它，
/// 强行编码会导致解码结果与原文不符。
pub fn encode_text(message: &str) -> Result<Vec<u8>, io::Error> {
    let mut bits = Vec::with_capacity(message.chars().count() * BITS_PER_CHAR);

    for ch in message.chars() {
        let code = u32::from(ch);
        if code > 255 {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Character '{ch}' (U+{code:04X}) cannot be represented in 8 bits."),
            ));
        }
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }

    Ok(bits)
}

/// 将位序列按连续 8 位一组解析回文本；每组解释为一个字符的码点。
/// 末尾不足 8 位的残组被直接丢弃。
pub fn decode_bits(bits: &[u8]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| {
            // 每组 8 位，码点必然落在 0-255 内，可无失败地转换。
            let code = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(code)
        })
        .collect()
}
