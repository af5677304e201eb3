//! 交互式控制台
//!
//! 命令解析、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_console_command, execute_script, CommandResult, ConsoleState, ShellGraph};
pub use completer::ShellCompleter;
pub use printer::{PrintMode, Printer};
