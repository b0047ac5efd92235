use anyhow::anyhow;
use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;

const SERIES_COLORS: [RGBColor; 2] = [RED, BLUE];

/// Render one chart of up to two lines as an SVG string. The x axis is indexed
/// by position and labelled with the series time labels.
pub fn plot_series_svg(labels: &[&str], series: &[(&str, Vec<f64>)]) -> anyhow::Result<String> {
    if labels.len() < 2 || series.iter().any(|(_, values)| values.len() != labels.len()) {
        return Err(anyhow!("Invalid input for plot"));
    }

    let minmax = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .minmax();

    if let MinMaxResult::MinMax(min_y, max_y) = minmax {
        let mut buf = String::new();

        let y_diff = max_y - min_y;
        let min_y = min_y - 0.05 * y_diff - 0.1;
        let max_y = max_y + 0.05 * y_diff + 0.1;

        {
            let root = SVGBackend::with_string(&mut buf, (480, 240)).into_drawing_area();
            let mut chart = ChartBuilder::on(&root)
                .margin(5)
                .x_label_area_size(20)
                .y_label_area_size(30)
                .build_cartesian_2d(0..labels.len() - 1, min_y..max_y)?;

            chart
                .configure_mesh()
                .y_labels(5)
                .x_labels(6)
                .x_label_formatter(&|idx| {
                    labels.get(*idx).map(|l| (*l).to_string()).unwrap_or_default()
                })
                .disable_mesh()
                .draw()?;

            for (idx, (label, values)) in series.iter().enumerate() {
                let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                chart
                    .draw_series(LineSeries::new(
                        values.iter().copied().enumerate(),
                        color,
                    ))?
                    .label(*label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color));
            }

            if series.len() > 1 {
                chart.configure_series_labels().border_style(BLACK).draw()?;
            }

            root.present()?;
        }

        Ok(buf)
    } else {
        Err(anyhow!("Cannot create plot"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_line_chart() {
        let labels = ["00:00", "02:00", "04:00"];
        let series = [
            ("Voltage (V)", vec![228.0, 225.0, 226.0]),
            ("Current (A)", vec![5.2, 5.1, 5.0]),
        ];

        let svg = plot_series_svg(&labels, &series).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn rejects_mismatched_series_length() {
        let labels = ["00:00", "02:00"];
        let series = [("Power (kW)", vec![0.0])];

        assert!(plot_series_svg(&labels, &series).is_err());
    }
}
