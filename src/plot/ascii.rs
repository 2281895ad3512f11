//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Two plots:
//! - trajectory: path `.`, start `S`, end `E`
//! - log-log MSD: observed `o`, fitted line `-`

use crate::domain::{FitResult, LagCurve, Trajectory};

/// Render the walk in the x/y plane.
pub fn render_trajectory_plot(trajectory: &Trajectory, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = pad_range(value_range(trajectory.x()), 0.05);
    let (y_min, y_max) = pad_range(value_range(trajectory.y()), 0.05);

    let mut grid = vec![vec![' '; width]; height];
    let bounds = Bounds {
        x_min,
        x_max,
        y_min,
        y_max,
    };

    let path: Vec<(f64, f64)> = trajectory.points().collect();
    draw_path(&mut grid, &path, &bounds, '.');

    // Endpoints overwrite the path.
    if let Some((x, y)) = trajectory.start() {
        let (c, r) = bounds.cell(x, y, width, height);
        grid[r][c] = 'S';
    }
    if let Some((x, y)) = trajectory.end() {
        let (c, r) = bounds.cell(x, y, width, height);
        grid[r][c] = 'E';
    }

    let header = format!(
        "Trajectory: x=[{x_min:.2}, {x_max:.2}] | y=[{y_min:.2}, {y_max:.2}] | S=start E=end\n"
    );
    finish(header, grid)
}

/// Render MSD against lag on log-log axes with the fitted power law.
pub fn render_msd_plot(curve: &LagCurve, fit: &FitResult, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    // Zero MSD values have no log; they are skipped rather than plotted.
    let observed: Vec<(f64, f64)> = curve
        .iter()
        .filter(|&(_, msd)| msd > 0.0)
        .map(|(lag, msd)| ((lag as f64).ln(), msd.ln()))
        .collect();
    let fitted: Vec<(f64, f64)> = curve
        .lags()
        .iter()
        .map(|&lag| {
            let t = (lag as f64).ln();
            (t, fit.line.eval(t))
        })
        .collect();

    let xs: Vec<f64> = fitted.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = observed.iter().chain(fitted.iter()).map(|p| p.1).collect();
    let (x_min, x_max) = pad_range(value_range(&xs), 0.0);
    let (y_min, y_max) = pad_range(value_range(&ys), 0.05);
    let bounds = Bounds {
        x_min,
        x_max,
        y_min,
        y_max,
    };

    let mut grid = vec![vec![' '; width]; height];

    // Draw the line first so observed points overlay it.
    draw_path(&mut grid, &fitted, &bounds, '-');
    for &(x, y) in &observed {
        let (c, r) = bounds.cell(x, y, width, height);
        grid[r][c] = 'o';
    }

    let header = format!(
        "MSD vs lag (log-log): lag=[{:.0}, {:.0}] | msd=[{:.3e}, {:.3e}] | fit slope={:.2}\n",
        x_min.exp(),
        x_max.exp(),
        y_min.exp(),
        y_max.exp(),
        fit.exponent
    );
    finish(header, grid)
}

struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    /// Grid cell `(column, row)`; row 0 is the top (largest y).
    fn cell(&self, x: f64, y: f64, width: usize, height: usize) -> (usize, usize) {
        (
            map_x(x, self.x_min, self.x_max, width),
            map_y(y, self.y_min, self.y_max, height),
        )
    }
}

fn finish(header: String, grid: Vec<Vec<char>>) -> String {
    let mut out = header;
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

/// Finite min/max of `values`, widened when the span is zero.
fn value_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values.iter().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    if max <= min {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

fn pad_range((min, max): (f64, f64), frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = span * frac;
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_path(grid: &mut [Vec<char>], path: &[(f64, f64)], bounds: &Bounds, ch: char) {
    let height = grid.len();
    let Some(width) = grid.first().map(Vec::len) else {
        return;
    };

    let mut prev = None;
    for &(x, y) in path {
        let (c, r) = bounds.cell(x, y, width, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, c, r, ch),
            None => grid[r][c] = ch,
        }
        prev = Some((c, r));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
