use crate::carrier::{Carrier, Channel};
use crate::constants::{BITS_PER_CHAR, NO_MESSAGE_FOUND, SENTINEL, SENTINEL_LEN};
use rand::Rng;

/// 通道数值的奇偶性；每个像素承载的一位信息。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    fn of(value: u8) -> Self {
        if value % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    fn from_bit(bit: u8) -> Self {
        if bit == 0 { Parity::Even } else { Parity::Odd }
    }
}

/// 隐藏 `message_len` 个字符所需的传输流总位数（含两端哨兵）。
pub fn transmission_len(message_len: usize) -> usize {
    2 * SENTINEL_LEN + BITS_PER_CHAR * message_len
}

/// 把通道数值调整到目标奇偶性：已符合则原样返回，否则随机 ±1。
/// 边界值只有一个合法方向：0 只能升到 1，255 只能降到 254。
pub fn round_to_parity(value: u8, parity: Parity, rng: &mut impl Rng) -> u8 {
    if Parity::of(value) == parity {
        return value;
    }
    match value {
        0 => 1,
        255 => 254,
        _ => {
            if rng.random_bool(0.5) {
                value + 1
            } else {
                value - 1
            }
        }
    }
}

/// 将位序列连同两端哨兵写入载体的指定通道。
///
/// 按固定遍历顺序（x 外层 0..width，y 内层 0..height）逐像素
/// 写入一位，传输流耗尽后立即停止，其余像素保持不变。
/// 载体容量不足时不会报错：能写多少写多少，返回值是实际写入
/// 的位数，由调用方决定是否把截断当作问题。
pub fn embed(carrier: &mut Carrier, bits: &[u8], channel: Channel, rng: &mut impl Rng) -> usize {
    let mut transmission = Vec::with_capacity(transmission_len(0) + bits.len());
    transmission.extend_from_slice(&SENTINEL);
    transmission.extend_from_slice(bits);
    transmission.extend_from_slice(&SENTINEL);

    let mut pos = 0;
    for x in 0..carrier.width() {
        for y in 0..carrier.height() {
            if pos >= transmission.len() {
                return pos;
            }
            let target = Parity::from_bit(transmission[pos]);
            let value = carrier.channel_value(x, y, channel);
            carrier.set_channel_value(x, y, channel, round_to_parity(value, target, rng));
            pos += 1;
        }
    }
    pos
}

/// 从载体的指定通道提取先前嵌入的位序列。
///
/// 按与写入完全相同的遍历顺序累积每个像素的奇偶位。累满 24 位
/// 时与哨兵比对，不匹配（或像素总数不足 24）则返回
/// "no message found!" 重新编码成的位流——这是正常返回值而非
/// 错误。匹配则继续累积，遇到第二个哨兵时停止，仅返回两个哨兵
/// 之间的信息位；走完全部像素仍未出现结束哨兵时，返回头部之后
/// 的全部位。
pub fn extract(carrier: &Carrier, channel: Channel) -> Vec<u8> {
    let mut bits = Vec::new();
    for x in 0..carrier.width() {
        for y in 0..carrier.height() {
            bits.push(carrier.channel_value(x, y, channel) % 2);

            // 头部检查依据实际累积的位数，而不是坐标换算。
            if bits.len() == SENTINEL_LEN && bits[..] != SENTINEL[..] {
                return no_message_bits();
            }
            if bits.len() >= 2 * SENTINEL_LEN
                && bits[bits.len() - SENTINEL_LEN..] == SENTINEL[..]
            {
                return bits[SENTINEL_LEN..bits.len() - SENTINEL_LEN].to_vec();
            }
        }
    }

    if bits.len() < SENTINEL_LEN {
        return no_message_bits();
    }
    // 没有结束哨兵（传输流被截断）：返回头部之后的全部位。
    bits.split_off(SENTINEL_LEN)
}

/// 随机扰动整个载体指定通道的奇偶性，破坏先前嵌入的任何信息。
///
/// 每个像素有一半概率保持不变，否则数值随机 ±1；结果被夹在
/// [0, 255] 内，边界值不会越界。
pub fn scramble(carrier: &mut Carrier, channel: Channel, rng: &mut impl Rng) {
    for x in 0..carrier.width() {
        for y in 0..carrier.height() {
            if rng.random_bool(0.5) {
                continue;
            }
            let value = carrier.channel_value(x, y, channel);
            let perturbed = if rng.random_bool(0.5) {
                value.saturating_add(1)
            } else {
                value.saturating_sub(1)
            };
            carrier.set_channel_value(x, y, channel, perturbed);
        }
    }
}

/// 提示文本全部是 ASCII，逐字节展开即可，无需经过可失败的编码。
fn no_message_bits() -> Vec<u8> {
    NO_MESSAGE_FOUND
        .bytes()
        .flat_map(|byte| (0..BITS_PER_CHAR).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}
