// src/main.rs
use anyhow::Context;
use scopeplot::{plot_csv_data, DEFAULT_CAPTURE_PATH};
// 入口函数: 路径固定, 不读取命令行参数
fn main() -> anyhow::Result<()> {
    env_logger::init();
    plot_csv_data(DEFAULT_CAPTURE_PATH)
        .with_context(|| format!("failed to plot capture {DEFAULT_CAPTURE_PATH}"))
}
