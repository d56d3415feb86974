use crate::report::{SummaryRow, SummaryTable};

pub const COLUMN_WIDTH: usize = 15;

pub fn render_summary_text(table: &SummaryTable) -> String {
    let n_fields = table.columns.len() + 1;
    let line_break = "-".repeat(COLUMN_WIDTH * n_fields + (n_fields - 1));

    let mut header = format!("{:<w$}", "contribution", w = COLUMN_WIDTH);
    for col in &table.columns {
        header.push(' ');
        header.push_str(&format!("{:>w$}", col.heading, w = COLUMN_WIDTH));
    }

    let mut out = String::new();
    push_line(&mut out, &line_break);
    push_line(&mut out, &header);
    push_line(&mut out, &line_break);
    for row in table.groups.iter().chain(std::iter::once(&table.mc_stat)) {
        push_line(&mut out, &render_row(row));
    }
    push_line(&mut out, &line_break);
    push_line(&mut out, &render_row(&table.total));
    push_line(&mut out, &line_break);
    push_line(&mut out, &render_row(&table.yields));
    push_line(&mut out, &line_break);
    out
}

pub fn render_row(row: &SummaryRow) -> String {
    let mut line = format!("{:<w$}", row.label, w = COLUMN_WIDTH);
    for v in &row.values {
        line.push(' ');
        line.push_str(&format!("{:>w$.2}", v, w = COLUMN_WIDTH));
    }
    line
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
