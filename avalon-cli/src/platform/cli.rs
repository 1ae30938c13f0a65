//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示、源码上下文和源码清单打印。

use avalon_api::AvalonError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误，错误指向源码时附带上下文
pub fn print_error_with_source(e: &AvalonError, source: Option<&str>) {
    eprintln!("error: {}", e);

    if let (Some(source), Some(line), Some(column)) = (source, e.line(), e.column()) {
        if let Some(context) = format_source_context(source, line, column) {
            eprint!("{}", context);
        }
    }
}

/// 带行号的源码清单（`--show-source` 时在 token 之前打印）
pub fn print_source_listing(source: &str) {
    println!("[Source]");
    for (i, line) in source.lines().enumerate() {
        println!("{:3} | {}", i + 1, line);
    }
    println!("[Tokens]");
}

/// Render the lines around `error_line` with a caret under `error_col`
///
/// Returns `None` when the line is outside the source.
pub fn format_source_context(source: &str, error_line: usize, error_col: usize) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    if error_line == 0 || error_line > lines.len() {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(lines.len());
    let width = end_line.to_string().len();

    let mut out = String::new();
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{:>width$} | {}\n", line_idx, lines[line_idx - 1]));
        if line_idx == error_line {
            let marker = caret_indent(lines[line_idx - 1], error_col);
            out.push_str(&format!("{:>width$} | {}^\n", "", marker));
        }
    }
    Some(out)
}

/// Indentation that puts a caret under byte column `error_col`
///
/// Tabs are copied from the line so the caret lines up with the source as
/// printed; every other character counts as one column.
fn caret_indent(line: &str, error_col: usize) -> String {
    let offset = error_col.saturating_sub(1);
    let mut marker: String = line
        .char_indices()
        .take_while(|(idx, _)| *idx < offset)
        .map(|(_, c)| if c == '\t' { '\t' } else { ' ' })
        .collect();
    // Columns past the end of the line (e.g. the position after the last char)
    let extra = offset.saturating_sub(line.len());
    marker.extend(std::iter::repeat(' ').take(extra));
    marker
}
