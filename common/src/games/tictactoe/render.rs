use std::io::{self, Write};

use super::board::Board;
use super::types::{Cell, RenderStyle};

fn format_cell(cell: Cell, style: RenderStyle) -> String {
    match style {
        RenderStyle::Numeric => format!(" {} ", cell.value()),
        RenderStyle::Symbols => format!(" {} ", cell.symbol()),
    }
}

pub fn render_board<W: Write>(board: &Board, style: RenderStyle, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for row in board.rows() {
        let line: String = row.iter().map(|&cell| format_cell(cell, style)).collect();
        writeln!(out, "|{}|", line)?;
    }
    writeln!(out)?;
    Ok(())
}
