/// 标记隐藏信息开始和结束的 24 位哨兵序列。
/// 由 "10" 重复 12 次构成；写入载体的完整传输流总是
/// `哨兵 + 信息位 + 哨兵`。
pub const SENTINEL: [u8; 24] = [
    1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0,
];

/// 哨兵序列的位数。
pub const SENTINEL_LEN: usize = 24;

/// 每个字符占用的位数。
/// 信息字符按 `u8`（码点 0-255）处理，因此每个字符恰好 8 位，
/// 也就是每个字符消耗 8 个像素。
pub const BITS_PER_CHAR: usize = 8;

/// 'encode' 命令固定的输出文件名（写入当前工作目录），
/// 保证永远不会覆盖输入图像。
pub const ENCODED_OUTPUT: &str = "encoded.png";

/// 解码时未找到头部哨兵的提示文本。
/// 按设计它不是错误：提取函数把这段文本重新编码为位流返回，
/// 调用方照常解码并展示给用户。
pub const NO_MESSAGE_FOUND: &str = "no message found!";
