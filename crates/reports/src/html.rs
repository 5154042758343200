//! Minimal HTML table rendering for the report responses.

use db::models::DepartmentHireRow;

use crate::pivot::QuarterPivotRow;

/// Escape text for use inside an HTML text node.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a table with a header row and one row per data tuple.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table border=\"1\">\n<thead>\n<tr>");
    for header in headers {
        html.push_str("<th>");
        html.push_str(&escape(header));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// The hires-by-quarter pivot as an HTML table.
///
/// Columns: department, job, Q1, Q2, Q3, Q4.
pub fn quarter_table(rows: &[QuarterPivotRow]) -> String {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            let mut cells = vec![r.department.clone(), r.job.clone()];
            cells.extend(r.quarters.iter().map(|q| q.to_string()));
            cells
        })
        .collect();
    render_table(&["department", "job", "Q1", "Q2", "Q3", "Q4"], &data)
}

/// The departments-above-mean ranking as an HTML table.
pub fn above_mean_table(rows: &[DepartmentHireRow]) -> String {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.department_id.to_string(),
                r.department_name.clone(),
                r.num_hired.to_string(),
            ]
        })
        .collect();
    render_table(&["department_id", "department_name", "num_hired"], &data)
}
