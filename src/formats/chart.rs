use std::path::Path;

use image::{Rgb, RgbImage};

use crate::model::SummaryGrid;

use super::Result;
use super::draw::{Rect, draw_line, fill_disc, fill_rect, put, stroke_rect};
use super::text::{Align, TextPainter};

/// Line colors, assigned to phases in sorted order and cycled.
const PALETTE: [[u8; 3]; 10] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([200, 200, 200]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([232, 232, 232]);
const TEXT: Rgb<u8> = Rgb([32, 32, 32]);

const TITLE_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 14.0;

const Y_TICKS: i64 = 5;
const MARKER_RADIUS: i64 = 5;
const LINE_RADIUS: i64 = 1;

pub fn phase_color(index: usize) -> Rgb<u8> {
    Rgb(PALETTE[index % PALETTE.len()])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub columns: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            columns: 2,
        }
    }
}

impl ChartLayout {
    fn panels(&self, count: usize) -> Vec<Rect> {
        let count = count.max(1) as i64;
        let columns = i64::from(self.columns.max(1)).min(count);
        let rows = (count + columns - 1) / columns;
        let cell_width = i64::from(self.width) / columns;
        let cell_height = i64::from(self.height) / rows;
        (0..count)
            .map(|index| {
                Rect::new(
                    (index % columns) * cell_width,
                    (index / columns) * cell_height,
                    cell_width,
                    cell_height,
                )
                .inset(20, 20, 20, 20)
            })
            .collect()
    }
}

/// Draws one panel per entry of `ram_panels`: x is the core count, y the
/// summed seconds, one polyline per phase of the grid.
pub fn draw_chart(
    grid: &SummaryGrid,
    ram_panels: &[u32],
    layout: &ChartLayout,
) -> Result<RgbImage> {
    let text = TextPainter::new()?;
    let mut image = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
    let y_max = match grid.max_total() {
        max if max > 0.0 => max * 1.1,
        _ => 1.0,
    };

    for (panel, &ram_gb) in layout.panels(ram_panels.len()).into_iter().zip(ram_panels) {
        stroke_rect(&mut image, panel, FRAME);
        let plot = panel.inset(80, 56, 170, 56);
        text.draw(
            &mut image,
            (plot.x + plot.width / 2, panel.y + 8),
            Align::Center,
            &format!("Total time for each phase (RAM {ram_gb}GB)"),
            TITLE_SIZE,
            TEXT,
        );
        draw_axes(&mut image, &text, plot, grid, y_max);

        for (index, phase) in grid.phases.iter().enumerate() {
            let color = phase_color(index);
            let points = grid
                .series(phase, ram_gb)
                .into_iter()
                .enumerate()
                .map(|(slot, seconds)| to_pixel(plot, grid, slot, seconds, y_max))
                .collect::<Vec<_>>();
            for pair in points.windows(2) {
                draw_line(&mut image, pair[0], pair[1], LINE_RADIUS, color);
            }
            for &(x, y) in &points {
                fill_disc(&mut image, x, y, MARKER_RADIUS, color);
            }
        }

        draw_legend(&mut image, &text, plot, &grid.phases);
    }

    Ok(image)
}

pub fn render_chart(
    path: impl AsRef<Path>,
    grid: &SummaryGrid,
    ram_panels: &[u32],
    layout: &ChartLayout,
) -> Result<()> {
    draw_chart(grid, ram_panels, layout)?.save(path.as_ref())?;
    Ok(())
}

/// Core labels are categories: `slot` is the label's position on the axis.
fn to_pixel(plot: Rect, grid: &SummaryGrid, slot: usize, seconds: f64, y_max: f64) -> (i64, i64) {
    let slots = grid.cpu_cores.len();
    let x_fraction = if slots > 1 {
        slot as f64 / (slots - 1) as f64
    } else {
        0.5
    };
    let y_fraction = (seconds / y_max).clamp(0.0, 1.0);
    let x = plot.x as f64 + x_fraction * plot.width as f64;
    let y = plot.bottom() as f64 - y_fraction * plot.height as f64;
    (x.round() as i64, y.round() as i64)
}

/// Enough decimals to tell neighbouring ticks apart.
fn tick_label(value: f64, y_max: f64) -> String {
    match y_max {
        max if max >= 10.0 => format!("{value:.1}"),
        max if max >= 0.1 => format!("{value:.3}"),
        _ => format!("{value:.5}"),
    }
}

fn draw_axes(image: &mut RgbImage, text: &TextPainter, plot: Rect, grid: &SummaryGrid, y_max: f64) {
    for tick in 0..=Y_TICKS {
        let y = plot.bottom() - tick * plot.height / Y_TICKS;
        if tick > 0 {
            for x in plot.x..=plot.right() {
                put(image, x, y, GRID);
            }
        }
        for x in plot.x - 6..plot.x {
            put(image, x, y, AXIS);
        }
        let value = y_max * tick as f64 / Y_TICKS as f64;
        text.draw(
            image,
            (plot.x - 10, y - 8),
            Align::Right,
            &tick_label(value, y_max),
            LABEL_SIZE,
            TEXT,
        );
    }
    for x in plot.x..=plot.right() {
        put(image, x, plot.bottom(), AXIS);
    }
    for y in plot.y..=plot.bottom() {
        put(image, plot.x, y, AXIS);
    }
    for (slot, cores) in grid.cpu_cores.iter().enumerate() {
        let (x, _) = to_pixel(plot, grid, slot, 0.0, y_max);
        for y in plot.bottom()..plot.bottom() + 6 {
            put(image, x, y, AXIS);
        }
        text.draw(
            image,
            (x, plot.bottom() + 10),
            Align::Center,
            &cores.to_string(),
            LABEL_SIZE,
            TEXT,
        );
    }

    text.draw(
        image,
        (plot.x + plot.width / 2, plot.bottom() + 30),
        Align::Center,
        "CPU cores",
        LABEL_SIZE,
        TEXT,
    );
    text.draw(
        image,
        (plot.x - 70, plot.y - 26),
        Align::Left,
        "Total time (s)",
        LABEL_SIZE,
        TEXT,
    );
}

/// Swatch and name per phase, to the right of the plot.
fn draw_legend(image: &mut RgbImage, text: &TextPainter, plot: Rect, phases: &[String]) {
    let x = plot.right() + 20;
    for (index, phase) in phases.iter().enumerate() {
        let y = plot.y + index as i64 * 20;
        let swatch = Rect::new(x, y + 4, 24, 10);
        fill_rect(image, swatch, phase_color(index));
        stroke_rect(image, swatch, AXIS);
        text.draw(image, (x + 32, y), Align::Left, phase, LABEL_SIZE, TEXT);
    }
}
