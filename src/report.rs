//! Text rendering of the monthly charts.
//!
//! Pure string builders; the binary decides where they go. Output is
//! deterministic for identical inputs.

/// Renders one labelled, scaled bar per value.
///
/// Bars are scaled so the largest value fills `width` characters. Values
/// at or below zero render as empty bars. Returns just the title when
/// `rows` is empty or `width` is zero.
pub fn bar_chart(title: &str, rows: &[(&str, f64)], width: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    if rows.is_empty() || width == 0 {
        return out;
    }

    let max = rows.iter().map(|&(_, v)| v).fold(0.0_f64, f64::max);
    for &(label, value) in rows {
        let len = if max > 0.0 && value > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar: String = "#".repeat(len);
        out.push_str(&format!("{label:>4} | {bar:<w$} {value:.1}\n", w = width));
    }
    out
}

/// Renders a fixed-width histogram with `bins` equal bins over [min, max].
///
/// The last bin is closed on both ends so the maximum lands in it. All
/// identical values fall into a single bin. Returns just the title when
/// `values` or `bins` is empty.
pub fn histogram(title: &str, values: &[f64], bins: usize, width: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    if values.is_empty() || bins == 0 || width == 0 {
        return out;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = if span > 0.0 {
            (((v - min) / span) * bins as f64).floor() as usize
        } else {
            0
        };
        counts[idx.min(bins - 1)] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(0);
    let bin_width = if span > 0.0 { span / bins as f64 } else { 0.0 };
    for (i, &count) in counts.iter().enumerate() {
        let lo = min + bin_width * i as f64;
        let hi = if i + 1 == bins {
            max
        } else {
            min + bin_width * (i + 1) as f64
        };
        let len = if peak > 0 {
            ((count as f64 / peak as f64) * width as f64).round() as usize
        } else {
            0
        };
        let bar: String = "#".repeat(len);
        out.push_str(&format!(
            "[{lo:>7.1}, {hi:>7.1}] | {bar:<w$} {count}\n",
            w = width
        ));
    }
    out
}

/// Renders one labelled row per value with a marker at the scaled position.
///
/// The marker column tracks the value between the series minimum (left
/// edge) and maximum (right edge), so the page reads top to bottom as a
/// rotated line plot. A flat series keeps every marker on the left edge.
/// Returns just the title when `rows` is empty or `width` is zero.
pub fn line_chart(title: &str, rows: &[(&str, f64)], width: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    if rows.is_empty() || width == 0 {
        return out;
    }

    let min = rows.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let max = rows.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    for &(label, value) in rows {
        let col = if span > 0.0 {
            (((value - min) / span) * (width - 1) as f64).round() as usize
        } else {
            0
        };
        let mut track = " ".repeat(width);
        track.replace_range(col..col + 1, "*");
        out.push_str(&format!("{label:>4} | {track} {value:.1}\n"));
    }
    out
}

/// Renders an x/y scatter as a character grid with a range footer.
///
/// Points are scaled so the x range spans `width` columns and the y range
/// spans `height` rows, largest y on the top row. Coinciding points share
/// one mark. Returns just the title when `points` is empty or either
/// dimension is zero.
pub fn scatter(title: &str, points: &[(f64, f64)], width: usize, height: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    if points.is_empty() || width == 0 || height == 0 {
        return out;
    }

    let x_min = points.iter().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|&(x, _)| x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    let x_span = x_max - x_min;
    let y_span = y_max - y_min;

    let mut grid = vec![vec![' '; width]; height];
    for &(x, y) in points {
        let col = if x_span > 0.0 {
            (((x - x_min) / x_span) * (width - 1) as f64).round() as usize
        } else {
            0
        };
        let row = if y_span > 0.0 {
            (((y_max - y) / y_span) * (height - 1) as f64).round() as usize
        } else {
            0
        };
        grid[row][col] = 'x';
    }

    for row in &grid {
        out.push('|');
        out.extend(row.iter());
        out.push('\n');
    }
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "x: [{x_min:.1}, {x_max:.1}]  y: [{y_min:.1}, {y_max:.1}]\n"
    ));
    out
}
