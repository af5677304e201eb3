//! 控制台命令处理
//!
//! 解析一行命令并作用于字符串键的图

use super::printer::{PrintMode, Printer};
use crate::error::Error;
use crate::graph::Graph;

/// 控制台使用的图：键、顶点数据、边数据都是字符串
pub type ShellGraph = Graph<String, String, String>;

/// 控制台命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

impl From<Error> for CommandResult {
    fn from(e: Error) -> Self {
        CommandResult::Error(e.to_string())
    }
}

/// 控制台状态
pub struct ConsoleState {
    pub graph: ShellGraph,
    pub printer: Printer,
}

impl ConsoleState {
    pub fn new(graph: ShellGraph) -> Self {
        Self {
            graph,
            printer: Printer::default(),
        }
    }
}

/// 解析并执行控制台命令
pub fn execute_console_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let parts: Vec<&str> = input.splitn(2, char::is_whitespace).collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).map(|s| s.trim()).unwrap_or("");

    let graph = &mut state.graph;

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "stats" | "info" => {
            let stats = graph.stats();
            if args.eq_ignore_ascii_case("json") {
                match stats.to_json() {
                    Ok(json) => CommandResult::Message(json),
                    Err(e) => CommandResult::Error(format!("序列化失败: {}", e)),
                }
            } else {
                CommandResult::Message(state.printer.print_stats(&stats))
            }
        }

        "mode" => match args.to_lowercase().as_str() {
            "table" => {
                state.printer.set_mode(PrintMode::Table);
                CommandResult::Message("输出格式: table".to_string())
            }
            "vertical" => {
                state.printer.set_mode(PrintMode::Vertical);
                CommandResult::Message("输出格式: vertical".to_string())
            }
            _ => CommandResult::Error("用法: mode <table|vertical>".to_string()),
        },

        "add-vertex" | "av" => {
            let (key, data) = split_first(args);
            if key.is_empty() {
                return CommandResult::Error("用法: add-vertex <键> [数据]".to_string());
            }
            match graph.add_vertex(key.to_string(), data.to_string()) {
                Some(_) => CommandResult::Error(format!("顶点 {} 已存在，忽略插入", key)),
                None => CommandResult::Message(format!("顶点 {} 已添加", key)),
            }
        }

        "add-edge" | "ae" => {
            let (key_0, rest) = split_first(args);
            let (key_1, data) = split_first(rest);
            if key_1.is_empty() {
                return CommandResult::Error("用法: add-edge <键> <键> [数据]".to_string());
            }
            match graph.add_edge(&key_0.to_string(), &key_1.to_string(), data.to_string()) {
                Ok(_) => CommandResult::Message(format!("边 {} - {} 已添加", key_0, key_1)),
                Err(e) => e.into(),
            }
        }

        "vertex" | "v" => {
            if args.is_empty() {
                return CommandResult::Error("用法: vertex <键>".to_string());
            }
            let key = args.to_string();
            match graph.get_vertex(&key) {
                Ok(vertex) => {
                    let rows = vec![vec![key, vertex.data().clone(), vertex.degree().to_string()]];
                    CommandResult::Message(state.printer.print_rows(&["key", "data", "degree"], &rows))
                }
                Err(e) => e.into(),
            }
        }

        "edge" | "e" => {
            let (key_0, key_1) = split_first(args);
            if key_1.is_empty() {
                return CommandResult::Error("用法: edge <键> <键>".to_string());
            }
            match graph.get_edge(&key_0.to_string(), &key_1.to_string()) {
                Ok(edge) => {
                    let rows = vec![vec![key_0.to_string(), key_1.to_string(), edge.data().clone()]];
                    CommandResult::Message(state.printer.print_rows(&["from", "to", "data"], &rows))
                }
                Err(e) => e.into(),
            }
        }

        "neighbors" | "n" => {
            if args.is_empty() {
                return CommandResult::Error("用法: neighbors <键>".to_string());
            }
            match graph.neighbors(&args.to_string()) {
                Ok(neighbors) => {
                    let mut keys: Vec<&String> = neighbors.collect();
                    keys.sort();
                    let listed: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
                    CommandResult::Message(format!("邻居: [{}]", listed.join(", ")))
                }
                Err(e) => e.into(),
            }
        }

        "remove-vertex" | "rv" => {
            if args.is_empty() {
                return CommandResult::Error("用法: remove-vertex <键>".to_string());
            }
            match graph.remove_vertex(&args.to_string()) {
                Ok(_) => CommandResult::Message(format!("顶点 {} 已删除", args)),
                Err(e) => e.into(),
            }
        }

        "remove-edge" | "re" => {
            let (key_0, key_1) = split_first(args);
            if key_1.is_empty() {
                return CommandResult::Error("用法: remove-edge <键> <键>".to_string());
            }
            match graph.remove_edge(&key_0.to_string(), &key_1.to_string()) {
                Ok(_) => CommandResult::Message(format!("边 {} - {} 已删除", key_0, key_1)),
                Err(e) => e.into(),
            }
        }

        "vertices" => {
            let mut rows: Vec<Vec<String>> = graph
                .vertices()
                .map(|(k, v)| vec![k.clone(), v.data().clone(), v.degree().to_string()])
                .collect();
            rows.sort();
            CommandResult::Message(state.printer.print_rows(&["key", "data", "degree"], &rows))
        }

        "edges" => {
            let mut rows: Vec<Vec<String>> = graph
                .edges()
                .filter_map(|(_, edge)| {
                    let [a, b] = edge.vertices();
                    let ka = graph.get_key(a).ok()?;
                    let kb = graph.get_key(b).ok()?;
                    Some(vec![ka.clone(), kb.clone(), edge.data().clone()])
                })
                .collect();
            rows.sort();
            CommandResult::Message(state.printer.print_rows(&["from", "to", "data"], &rows))
        }

        "dump" => CommandResult::Message(graph.to_string()),

        "clear" => {
            graph.clear();
            CommandResult::Message("图已清空".to_string())
        }

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

/// 执行以 `;` 分隔的多条命令，遇到退出命令时停止
pub fn execute_script(script: &str, state: &mut ConsoleState) -> Vec<CommandResult> {
    let mut results = Vec::new();
    for line in script.split(';') {
        let result = execute_console_command(line, state);
        let exit = result == CommandResult::Exit;
        results.push(result);
        if exit {
            break;
        }
    }
    results
}

/// 切出第一个单词，返回 (单词, 剩余部分)
fn split_first(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (s, ""),
    }
}
