//! # uvspec - Gaussian TD-DFT UV-Vis 光谱生成器
//!
//! 读取 Gaussian .log/.out 输出中的激发态（波长 + 振子强度），
//! 高斯展宽为连续吸收光谱，渲染图像或导出数据文件。
//!
//! ## 流水线
//! Parser → Spectrum Calculator → Sink（绘图 / 数据导出）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs       (命令行参数定义)
//!   ├── commands.rs  (流水线编排)
//!   │     ├── parsers/   (Gaussian 输出解析)
//!   │     ├── spectrum/  (展宽计算、绘图、导出)
//!   │     └── batch/     (批量处理)
//!   ├── models/      (数据模型)
//!   ├── utils/       (工具函数)
//!   └── error.rs     (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod spectrum;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
