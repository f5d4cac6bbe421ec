use storage::dto::analytics::ActivityHeatmap;

use super::layout::escape;

/// Horizontal bar chart; bar widths are relative to the largest value.
pub fn bar_chart(title: &str, rows: &[(String, f64)], unit: &str) -> String {
    let mut html = format!("<div class=\"chart\"><h3>{}</h3>", escape(title));

    if rows.is_empty() {
        html.push_str("<p>No data yet.</p></div>");
        return html;
    }

    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    for (label, value) in rows {
        let width = if max > 0.0 { value / max * 100.0 } else { 0.0 };
        html.push_str(&format!(
            "<div class=\"bar-row\"><span class=\"bar-label\">{}</span>\
             <span class=\"bar\" style=\"width: {width:.1}%\"></span>{}</div>",
            escape(label),
            format_value(*value, unit)
        ));
    }

    html.push_str("</div>");
    html
}

fn format_value(value: f64, unit: &str) -> String {
    let number = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    };

    if unit.is_empty() {
        number
    } else {
        format!("{number} {}", escape(unit))
    }
}

/// Weekday × week-of-month grid, cell shade scaled to the busiest cell.
pub fn heatmap(title: &str, data: &ActivityHeatmap) -> String {
    let max = data.max_count();

    let header: String = data
        .weeks
        .iter()
        .map(|week| format!("<th>{}</th>", escape(week)))
        .collect();

    let rows: String = data
        .weekdays
        .iter()
        .zip(&data.counts)
        .map(|(day, counts)| {
            let cells: String = counts
                .iter()
                .map(|count| {
                    let alpha = if max > 0 {
                        *count as f64 / max as f64
                    } else {
                        0.0
                    };
                    format!(
                        "<td style=\"background: rgba(34, 197, 94, {alpha:.2})\">{count}</td>"
                    )
                })
                .collect();
            format!("<tr><th>{}</th>{cells}</tr>", escape(day))
        })
        .collect();

    format!(
        "<div class=\"chart\"><h3>{}</h3><table class=\"heatmap\"><tr><th></th>{header}</tr>{rows}</table></div>",
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::dto::analytics::HeatmapCell;

    #[test]
    fn test_bar_widths_are_relative_to_max() {
        let html = bar_chart(
            "Popular",
            &[("Squat".to_string(), 4.0), ("Deadlift".to_string(), 2.0)],
            "times",
        );
        assert!(html.contains("width: 100.0%"));
        assert!(html.contains("width: 50.0%"));
        assert!(html.contains("4 times"));
    }

    #[test]
    fn test_empty_chart() {
        assert!(bar_chart("Calories", &[], "kcal").contains("No data yet."));
    }

    #[test]
    fn test_labels_are_escaped() {
        let html = bar_chart("<x>", &[("<script>".to_string(), 1.5)], "");
        assert!(!html.contains("<script>"));
        assert!(html.contains("1.5"));
    }

    #[test]
    fn test_heatmap_has_full_grid() {
        let data = ActivityHeatmap::from_cells(&[HeatmapCell {
            weekday: 1,
            week: 2,
            workout_count: 4,
        }]);

        let html = heatmap("Activity", &data);

        assert_eq!(html.matches("<tr>").count(), 8);
        assert_eq!(html.matches("<td").count(), 28);
        assert!(html.contains("rgba(34, 197, 94, 1.00)\">4</td>"));
        assert!(html.contains("<th>Monday</th>"));
    }
}
