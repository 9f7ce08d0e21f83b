const MIN_WIDTH: usize = 10;

/// Tabla de texto: columnas de al menos 10 caracteres separadas por " | ",
/// con una regla de guiones arriba y debajo del encabezado.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers
        .iter()
        .map(|h| h.chars().count().max(MIN_WIDTH))
        .collect::<Vec<_>>();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let rule = "-".repeat(widths.iter().sum::<usize>() + widths.len() * 3);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(rule.clone());
    lines.push(format_row(headers, &widths));
    if !rows.is_empty() {
        lines.push(rule);
    }
    for row in rows {
        let cells = row.iter().map(|c| c.as_str()).collect::<Vec<_>>();
        lines.push(format_row(&cells, &widths));
    }

    lines.join("\n")
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$} | ", cell, width = width))
        .collect::<String>();
    line.trim_end().to_string()
}
