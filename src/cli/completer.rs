//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "stats", "mode",
    "add-vertex", "vertex", "neighbors", "remove-vertex", "vertices",
    "add-edge", "edge", "remove-edge", "edges",
    "dump", "clear",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "stats" | "info" => Some(&["json"]),
        "mode" => Some(&["table", "vertical"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'static str>) -> Vec<Pair> {
    candidates
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// adjgraph CLI 补全器
#[derive(Default)]
pub struct ShellCompleter;

impl ShellCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 计算补全候选，返回 (替换起点, 候选)
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(char::is_whitespace);

        match (words.as_slice(), at_word_end) {
            ([], _) => (pos, pairs(COMMANDS.iter())),
            ([word], true) => {
                let prefix = word.to_lowercase();
                (
                    pos - word.len(),
                    pairs(COMMANDS.iter().filter(|c| c.starts_with(&prefix))),
                )
            }
            ([command, word], true) => match get_sub_commands(&command.to_lowercase()) {
                Some(subs) => {
                    let prefix = word.to_lowercase();
                    (
                        pos - word.len(),
                        pairs(subs.iter().filter(|s| s.starts_with(&prefix))),
                    )
                }
                None => (pos, vec![]),
            },
            ([command], false) => match get_sub_commands(&command.to_lowercase()) {
                Some(subs) => (pos, pairs(subs.iter())),
                None => (pos, vec![]),
            },
            _ => (pos, vec![]),
        }
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
