//! # 载体模块
//!
//! 把像素网格和它自身的宽高封装在一起，替代在各函数之间
//! 隐式共享的全局尺寸。编解码核心只通过本模块按 (x, y)
//! 和通道读写像素，从不直接解释文件字节。

use clap::ValueEnum;
use image::RgbImage;
use std::io::{self, ErrorKind};
use std::path::Path;

/// 携带信息的颜色通道。
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 通道在像素三元组中的下标。
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// 用于隐藏数据的像素网格。持有图像及其尺寸，原地修改像素值，
/// 从不改变图像大小。
pub struct Carrier {
    image: RgbImage,
}

impl Carrier {
    /// 从文件加载载体图像，统一转换为 RGB8。
    ///
    /// # Errors
    ///
    /// 文件不存在、无法读取或不是受支持的图像格式时返回错误。
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        let image = image::open(path)
            .map_err(|err| io::Error::new(ErrorKind::InvalidData, err))?
            .to_rgb8();
        Ok(Self { image })
    }

    /// 直接从内存中的图像构造载体。
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// 将载体保存到指定路径；格式由扩展名决定。
    ///
    /// # Errors
    ///
    /// 目标路径不可写或扩展名对应的格式不受支持时返回错误。
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        self.image
            .save(path)
            .map_err(|err| io::Error::new(ErrorKind::InvalidData, err))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// 载体的像素总数，即可写入的最大位数。
    pub fn pixel_count(&self) -> usize {
        (self.image.width() as usize) * (self.image.height() as usize)
    }

    /// 读取 (x, y) 处指定通道的数值。
    pub fn channel_value(&self, x: u32, y: u32, channel: Channel) -> u8 {
        self.image.get_pixel(x, y).0[channel.index()]
    }

    /// 将 (x, y) 处指定通道替换为新值，其余两个通道保持不变。
    pub fn set_channel_value(&mut self, x: u32, y: u32, channel: Channel, value: u8) {
        self.image.get_pixel_mut(x, y).0[channel.index()] = value;
    }

    /// 借出底层图像，供测试检查像素。
    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}
