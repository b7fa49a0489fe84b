/// Render a simple aligned table for string rows.
///
/// Numeric cells are right-aligned. When `max_width` is set, the widest
/// shrinkable column loses characters until the table fits.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    max_width: Option<usize>,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    format_cell(&truncated, *width, numeric)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].chars().count().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

// Width is measured in characters, not bytes: the truncation ellipsis is
// multi-byte but occupies one column.
fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::render_entity_table;

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "vendor", "value"];
        let rows = vec![
            vec![
                "ctr-1".to_string(),
                "Acme".to_string(),
                "250.00".to_string(),
            ],
            vec![
                "ctr-200".to_string(),
                "A much longer vendor name".to_string(),
                "1200.00".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, None);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("vendor"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // numeric cells right-aligned
        assert!(lines[2].ends_with("250.00"));
    }

    #[test]
    fn columns_shrink_to_fit_max_width() {
        let headers = ["id", "name"];
        let rows = vec![vec![
            "ctr-1".to_string(),
            "x".repeat(100),
        ]];

        let table = render_entity_table(&headers, &rows, Some(40));
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn truncated_cells_stay_aligned_with_following_columns() {
        // The ellipsis is multi-byte but one column wide; the padded cell
        // must come out at exactly the column width in characters.
        let headers = ["name", "value"];
        let rows = vec![
            vec!["y".repeat(30), "100.00".to_string()],
            vec!["short".to_string(), "7.00".to_string()],
        ];

        let table = render_entity_table(&headers, &rows, Some(20));
        let lines: Vec<&str> = table.lines().collect();
        let widths: Vec<usize> = lines.iter().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|w| *w <= 20));
        // Both data rows end at the same column despite the truncation.
        assert_eq!(widths[2], widths[3]);
        assert!(lines[2].contains('…'));
    }

    #[test]
    fn missing_cells_render_placeholder() {
        let headers = ["id", "vendor"];
        let rows = vec![vec!["ctr-1".to_string()]];
        let table = render_entity_table(&headers, &rows, None);
        assert!(table.lines().nth(2).is_some_and(|line| line.contains('-')));
    }
}
