//! adjgraph CLI 工具
//!
//! 交互式命令行界面，操作一个字符串键的内存图

use adjgraph::cli::{
    execute_console_command, execute_script, CommandResult, ConsoleState, ShellCompleter, ShellGraph,
};
use adjgraph::GraphConfig;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "adjgraph 命令行工具")]
struct Args {
    /// 图配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 执行命令后退出，多条命令以 ; 分隔
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("无法加载配置 {}", path.display()))?,
        None => GraphConfig::default(),
    };
    tracing::debug!(?config, "图配置");

    let mut state = ConsoleState::new(ShellGraph::with_config(&config));

    // 单次执行模式
    if let Some(script) = args.execute {
        for result in execute_script(&script, &mut state) {
            report(result);
        }
        return Ok(());
    }

    println!("adjgraph CLI {}", adjgraph::VERSION);
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<ShellCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellCompleter::new()));

    loop {
        match rl.readline("adjgraph> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                if !report(execute_console_command(&line, &mut state)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("再见！");
    Ok(())
}

/// 输出命令结果，返回 false 表示退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(m) => {
            println!("{}", m);
            true
        }
        CommandResult::Error(e) => {
            println!("{} {}", "错误:".red().bold(), e);
            true
        }
    }
}
