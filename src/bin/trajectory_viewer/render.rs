use dragless_projectile::core::{AxisWindow, Frame};
use dragless_projectile::render::gif::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, HEAD_RADIUS, LABEL_COLOR, LEFT_MARGIN, PATH_COLOR,
    PATH_THICKNESS, RIGHT_MARGIN, TITLE_Y, TOP_MARGIN, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen-space rectangle the chart is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn for_screen(screen_w: f32, screen_h: f32) -> Self {
        Self {
            left: LEFT_MARGIN,
            right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
            top: TOP_MARGIN,
            bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + 1.0),
        }
    }
}

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn world_to_screen(world: (f64, f64), axes: &AxisWindow, area: PlotArea) -> Vec2 {
    let plot_w = (area.right - area.left).max(1.0);
    let plot_h = (area.bottom - area.top).max(1.0);
    let tx = ((world.0 - axes.x_min) / axes.x_span()) as f32;
    let ty = ((world.1 - axes.y_min) / axes.y_span()) as f32;
    vec2(area.left + tx * plot_w, area.bottom - ty * plot_h)
}

fn draw_grid(area: PlotArea) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, GRID_COLOR);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

fn draw_axis_tick_labels(axes: &AxisWindow, area: PlotArea) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let x = area.left + t as f32 * (area.right - area.left);
        let label = format_axis_value(axes.x_min + t * axes.x_span(), axes.x_span());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let y = area.bottom - t as f32 * (area.bottom - area.top);
        let label = format_axis_value(axes.y_min + t * axes.y_span(), axes.y_span());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    let x_label_size = measure_text(X_AXIS_LABEL, None, 18, 1.0);
    draw_text(
        X_AXIS_LABEL,
        area.right - x_label_size.width,
        area.bottom + 52.0,
        18.0,
        LABEL_COLOR,
    );
    draw_text(Y_AXIS_LABEL, area.left + 10.0, area.top - 10.0, 18.0, LABEL_COLOR);
}

fn draw_path(points: &[(f64, f64)], axes: &AxisWindow, area: PlotArea) {
    let mut screen = points
        .iter()
        .map(|&point| world_to_screen(point, axes, area));
    let Some(mut prev) = screen.next() else {
        return;
    };
    for cur in screen {
        draw_line(prev.x, prev.y, cur.x, cur.y, PATH_THICKNESS, PATH_COLOR);
        prev = cur;
    }
}

fn draw_legend(legend: &str, area: PlotArea) {
    let font_size: u16 = 20;
    let size = measure_text(legend, None, font_size, 1.0);
    let pad = 10.0;
    let x = area.right - size.width - 2.0 * pad - 8.0;
    let y = area.top + 8.0;
    draw_rectangle(x, y, size.width + 2.0 * pad, size.height + 2.0 * pad, WHITE);
    draw_rectangle_lines(
        x,
        y,
        size.width + 2.0 * pad,
        size.height + 2.0 * pad,
        1.0,
        DARKGRAY,
    );
    draw_text(
        legend,
        x + pad,
        y + pad + size.offset_y,
        font_size as f32,
        BLACK,
    );
}

/// Clears the screen and draws one animation frame: title, grid, ticks, the
/// path so far with a marker at its head, and the elapsed-time legend.
pub(crate) fn draw_frame(frame: &Frame<'_>, screen_w: f32, screen_h: f32) {
    let area = PlotArea::for_screen(screen_w, screen_h);

    clear_background(BACKGROUND);
    let title_size = measure_text(CHART_TITLE, None, 28, 1.0);
    draw_text(
        CHART_TITLE,
        (screen_w - title_size.width) * 0.5,
        TITLE_Y,
        28.0,
        Color::from_rgba(30, 30, 35, 255),
    );

    draw_grid(area);
    draw_axis_tick_labels(&frame.axes, area);
    draw_path(frame.path, &frame.axes, area);

    if let Some(head) = frame.head() {
        let p = world_to_screen(head, &frame.axes, area);
        draw_circle(p.x, p.y, HEAD_RADIUS, RED);
        draw_circle_lines(p.x, p.y, HEAD_RADIUS, 2.0, MAROON);
    }

    draw_legend(&frame.legend, area);
}
