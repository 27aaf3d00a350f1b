use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use dots_ai::board::Board;
use dots_ai::grid::Dot;

/// Draws the board: dots, claimed edges, cell values and row/column labels
///
/// Open cell values are dimmed; a completed cell's value turns green.
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();
    let size = board.size();
    let grid = board.grid();

    // column labels
    stdout.queue(PrintStyledContent(style("   ".to_string())))?;
    for y in 0..size {
        stdout.queue(PrintStyledContent(style(format!("{:<4}", y))))?;
    }
    stdout.queue(PrintStyledContent(style("\n".to_string())))?;

    for x in 0..size {
        // dots and horizontal edges
        stdout.queue(PrintStyledContent(style(format!("{:<3}", x))))?;
        for y in 0..size {
            stdout.queue(PrintStyledContent(
                style("•".to_string()).attribute(Attribute::Bold),
            ))?;
            if y + 1 < size {
                if grid.has_connection(Dot::new(x, y), Dot::new(x, y + 1)) {
                    stdout.queue(PrintStyledContent(
                        style("───".to_string()).with(Color::Red),
                    ))?;
                } else {
                    stdout.queue(PrintStyledContent(style("   ".to_string())))?;
                }
            }
        }
        stdout.queue(PrintStyledContent(style("\n".to_string())))?;

        // vertical edges and cell values
        if x + 1 < size {
            stdout.queue(PrintStyledContent(style("   ".to_string())))?;
            for y in 0..size {
                if grid.has_connection(Dot::new(x, y), Dot::new(x + 1, y)) {
                    stdout.queue(PrintStyledContent(style("│".to_string()).with(Color::Red)))?;
                } else {
                    stdout.queue(PrintStyledContent(style(" ".to_string())))?;
                }
                if y + 1 < size {
                    let cell = grid.cell(x, y);
                    let value = format!(" {} ", cell.score());
                    if cell.is_credited() {
                        stdout.queue(PrintStyledContent(
                            style(value).attribute(Attribute::Bold).with(Color::Green),
                        ))?;
                    } else {
                        stdout.queue(PrintStyledContent(style(value).with(Color::DarkGrey)))?;
                    }
                }
            }
            stdout.queue(PrintStyledContent(style("\n".to_string())))?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Parses a human move entered as 'row col row col'
///
/// Returns None for anything that is not four in-range numbers; adjacency
/// and duplicate edges are the session's concern.
pub fn parse_move(input: &str, size: usize) -> Option<(Dot, Dot)> {
    let fields = input
        .split_whitespace()
        .map(|field| field.parse().ok())
        .collect::<Option<Vec<usize>>>()?;
    if fields.len() != 4 {
        return None;
    }
    if fields.iter().any(|&coord| coord >= size) {
        return None;
    }
    Some((Dot::new(fields[0], fields[1]), Dot::new(fields[2], fields[3])))
}
