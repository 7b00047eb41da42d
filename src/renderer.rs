//! Canvas 2D painting for the background engine. The surface is fully
//! cleared and redrawn every tick; entity counts are capped upstream so the
//! full redraw stays cheap.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use hoshikuzu_core::field::Entity;
use hoshikuzu_core::spotlight::{
    grid_line_positions, spotlight_band, EDGE_FADE_INNER_FRAC, GRID_BASE_ALPHA,
    GRID_BRIGHT_ALPHA, GRID_LINE_WIDTH, SPOTLIGHT_RADIUS,
};
use hoshikuzu_core::viewport::ViewportState;

pub(crate) fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    viewport: &ViewportState,
    entities: &[Entity],
    icons: &[HtmlImageElement],
    tint_filter: &str,
) -> Result<(), JsValue> {
    let width = viewport.width() as f64;
    let height = viewport.height() as f64;
    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }
    ctx.clear_rect(0.0, 0.0, width, height);

    let columns = grid_line_positions(viewport.width());
    let rows = grid_line_positions(viewport.height());
    let (pointer_x, pointer_y) = viewport.pointer();

    draw_grid_lines(ctx, &columns, &rows, width, height, GRID_BASE_ALPHA);
    draw_spotlight_pass(ctx, &columns, &rows, width, height, pointer_x, pointer_y)?;
    apply_edge_fade(ctx, width, height)?;
    draw_entities(ctx, entities, icons, tint_filter)?;
    Ok(())
}

fn grid_style(alpha: f32) -> String {
    format!("rgba(255,255,255,{alpha})")
}

fn draw_grid_lines(
    ctx: &CanvasRenderingContext2d,
    columns: &[f32],
    rows: &[f32],
    width: f64,
    height: f64,
    alpha: f32,
) {
    ctx.set_fill_style_str(&grid_style(alpha));
    let line = GRID_LINE_WIDTH as f64;
    for &x in columns {
        ctx.fill_rect(x as f64, 0.0, line, height);
    }
    for &y in rows {
        ctx.fill_rect(0.0, y as f64, width, line);
    }
}

/// Brighter copy of the grid, clipped to the spotlight circle around the
/// pointer. Only lines crossing the circle's bounding box are drawn.
fn draw_spotlight_pass(
    ctx: &CanvasRenderingContext2d,
    columns: &[f32],
    rows: &[f32],
    width: f64,
    height: f64,
    pointer_x: f32,
    pointer_y: f32,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.begin_path();
    ctx.arc(pointer_x as f64, pointer_y as f64, SPOTLIGHT_RADIUS as f64, 0.0, TAU)?;
    ctx.clip();
    let bright_columns = spotlight_band(columns, pointer_x, SPOTLIGHT_RADIUS);
    let bright_rows = spotlight_band(rows, pointer_y, SPOTLIGHT_RADIUS);
    draw_grid_lines(ctx, bright_columns, bright_rows, width, height, GRID_BRIGHT_ALPHA);
    ctx.restore();
    Ok(())
}

/// Fade the grid out toward the surface edges so lines do not end abruptly.
fn apply_edge_fade(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = (center_x * center_x + center_y * center_y).sqrt();
    let gradient =
        ctx.create_radial_gradient(center_x, center_y, 0.0, center_x, center_y, radius)?;
    gradient.add_color_stop(EDGE_FADE_INNER_FRAC, "rgba(0,0,0,1)")?;
    gradient.add_color_stop(1.0, "rgba(0,0,0,0)")?;
    ctx.save();
    ctx.set_global_composite_operation("destination-in")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.restore();
    Ok(())
}

/// Sprites rotate around their own centers; a shared tint filter flattens
/// every icon into the same silhouette color.
fn draw_entities(
    ctx: &CanvasRenderingContext2d,
    entities: &[Entity],
    icons: &[HtmlImageElement],
    tint_filter: &str,
) -> Result<(), JsValue> {
    if icons.is_empty() {
        return Ok(());
    }
    ctx.save();
    ctx.set_filter(tint_filter);
    for entity in entities {
        let icon = &icons[entity.icon_index % icons.len()];
        let size = entity.size as f64;
        let half = size / 2.0;
        ctx.save();
        ctx.set_global_alpha(entity.opacity as f64);
        ctx.translate(entity.x as f64 + half, entity.y as f64 + half)?;
        ctx.rotate((entity.rotation_deg as f64).to_radians())?;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(icon, -half, -half, size, size)?;
        ctx.restore();
    }
    ctx.restore();
    Ok(())
}
