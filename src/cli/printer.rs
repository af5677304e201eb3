//! 结果打印器
//!
//! 提供表格和垂直格式的输出

use crate::metrics::StatsSnapshot;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印结果行
    pub fn print_rows(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));
            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, stats: &StatsSnapshot) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", stats.vertex_count]);
        table.add_row(row!["Edge Count", stats.edge_count]);
        table.add_row(row!["Max Degree", stats.max_degree]);
        table.add_row(row!["Vertices Inserted", stats.vertices_inserted]);
        table.add_row(row!["Vertices Removed", stats.vertices_removed]);
        table.add_row(row!["Duplicate Keys", stats.duplicate_keys]);
        table.add_row(row!["Edges Inserted", stats.edges_inserted]);
        table.add_row(row!["Edges Removed", stats.edges_removed]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                    adjgraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                     显示帮助
  quit, exit, q                  退出程序
  stats [json]                   显示图统计信息
  mode <table|vertical>          切换输出格式

顶点:
  add-vertex, av <键> [数据]     添加顶点（重复键被忽略）
  vertex, v <键>                 查看顶点详情
  neighbors, n <键>              查看邻居
  remove-vertex, rv <键>         删除顶点及其关联边
  vertices                       列出所有顶点

边:
  add-edge, ae <键> <键> [数据]  添加无向边
  edge, e <键> <键>              查看边
  remove-edge, re <键> <键>      删除边
  edges                          列出所有边

其他:
  dump                           打印内部结构
  clear                          清空图

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::GraphStats;

    #[test]
    fn test_print_rows_empty() {
        let printer = Printer::default();
        assert_eq!(printer.print_rows(&["key"], &[]), "Empty set\n");
    }

    #[test]
    fn test_print_rows_vertical() {
        let printer = Printer::new(PrintMode::Vertical);
        let out = printer.print_rows(
            &["key", "degree"],
            &[vec!["a".to_string(), "2".to_string()]],
        );
        assert!(out.contains("1. row"));
        assert!(out.contains("   key: a\n"));
        assert!(out.contains("degree: 2\n"));
        assert!(out.ends_with("1 row(s) in set\n"));
    }

    #[test]
    fn test_print_table_contains_values() {
        let printer = Printer::default();
        let out = printer.print_rows(&["key"], &[vec!["vertex-a".to_string()]]);
        assert!(out.contains("vertex-a"));
    }

    #[test]
    fn test_print_stats() {
        let printer = Printer::default();
        let out = printer.print_stats(&GraphStats::new().snapshot(5, 4, 3));
        assert!(out.contains("Vertex Count"));
        assert!(out.contains('5'));
    }
}
