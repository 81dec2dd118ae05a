use clap::Parser;

use parity_hide::{
    cli::Cli,
    handler::{handle_decode, handle_encode, handle_scramble},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的动作（`encode`、`decode` 或
/// `scramble`）将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据动作调用相应的处理函数；ArgGroup 保证三者必居其一
    if let Some(message) = &cli.encode {
        handle_encode(&cli.filename, message, cli.channel)
    } else if cli.decode {
        handle_decode(&cli.filename, cli.channel)
    } else {
        handle_scramble(&cli.filename, cli.channel)
    }
}
