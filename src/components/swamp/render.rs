//! Canvas rendering for the swamp scene.
//!
//! Draws back to front in screen space:
//! 1. Backdrop (sky gradient, fog, moon, water, lily pads, trees)
//! 2. Fireflies
//! 3. Footprints, then the character on top of its own trail
//! 4. Speech bubble

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::fireflies::pulse;
use super::state::SwampState;
use super::theme::{BubbleStyle, CharacterStyle, Color, Theme};

const FOOTPRINT_W: f64 = 30.0;
const FOOTPRINT_H: f64 = 20.0;

/// Renders the complete scene to the canvas.
pub fn render(state: &SwampState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let time = state.elapsed_secs();
	let (width, height) = (state.viewport.width, state.viewport.height);

	draw_backdrop(ctx, theme, width, height, time);
	draw_fireflies(state, ctx, theme, time);
	draw_footprints(state, ctx, theme);
	draw_character(state, ctx, &theme.character, time);

	if let Some((announcement, (x, y))) = state.speech_bubble() {
		draw_bubble(ctx, &theme.bubble, announcement.text, x, y, state.direction.sign());
	}
}

fn draw_backdrop(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64, time: f64) {
	let backdrop = &theme.backdrop;

	let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
	let _ = sky.add_color_stop(0.0, &backdrop.sky[0].to_css());
	let _ = sky.add_color_stop(0.5, &backdrop.sky[1].to_css());
	let _ = sky.add_color_stop(1.0, &backdrop.sky[2].to_css());
	#[allow(deprecated)]
	ctx.set_fill_style(&sky);
	ctx.fill_rect(0.0, 0.0, width, height);

	for &(top, band, color, period, delay) in &backdrop.fog {
		let alpha = backdrop.fog_opacity * pulse(time, delay, period);
		let fog = ctx.create_linear_gradient(0.0, 0.0, width, 0.0);
		let _ = fog.add_color_stop(0.0, &color.with_alpha(0.0).to_css());
		let _ = fog.add_color_stop(0.5, &color.with_alpha(alpha).to_css());
		let _ = fog.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
		#[allow(deprecated)]
		ctx.set_fill_style(&fog);
		ctx.fill_rect(0.0, height * top, width, band);
	}

	draw_moon(ctx, theme, width);

	let water_top = height * (1.0 - backdrop.water_height);
	let water = ctx.create_linear_gradient(0.0, height, 0.0, water_top);
	let _ = water.add_color_stop(0.0, &backdrop.water.to_css());
	let _ = water.add_color_stop(0.4, &backdrop.water.with_alpha(0.8).to_css());
	let _ = water.add_color_stop(1.0, &backdrop.water.with_alpha(0.0).to_css());
	#[allow(deprecated)]
	ctx.set_fill_style(&water);
	ctx.fill_rect(0.0, water_top, width, height - water_top);

	// (centre x as fraction of width, distance from bottom, pad width)
	for (fx, bottom, pad_w) in [(0.10, 16.0, 64.0), (0.80, 32.0, 80.0), (0.60, 8.0, 48.0)] {
		let (cx, cy) = (width * fx, height - bottom - pad_w * 0.375);
		ctx.set_fill_style_str(&backdrop.lily_pad.to_css());
		ctx.begin_path();
		let _ = ctx.ellipse(cx, cy, pad_w * 0.44, pad_w * 0.28, 0.0, 0.0, PI * 2.0);
		ctx.fill();
		ctx.set_stroke_style_str(&backdrop.lily_vein.to_css());
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(cx, cy - pad_w * 0.28);
		ctx.line_to(cx, cy);
		ctx.stroke();
	}

	// Pine silhouettes: (left edge, trunk-to-tip height, base width)
	ctx.set_fill_style_str(&backdrop.tree.to_css());
	for (left, tree_h, tree_w) in [(0.0, 256.0, 128.0), (width - 160.0, 288.0, 160.0), (width * 0.25, 192.0, 96.0)] {
		draw_tree(ctx, left, height, tree_w, tree_h);
	}
}

fn draw_tree(ctx: &CanvasRenderingContext2d, left: f64, ground: f64, w: f64, h: f64) {
	let top = ground - h;
	let canopy_base = top + h * 0.7;
	let trunk_half = w * 0.11;
	let mid = left + w / 2.0;

	ctx.begin_path();
	ctx.move_to(mid, top);
	ctx.line_to(left + w * 0.14, canopy_base);
	ctx.line_to(mid - trunk_half, canopy_base);
	ctx.line_to(mid - trunk_half, ground);
	ctx.line_to(mid + trunk_half, ground);
	ctx.line_to(mid + trunk_half, canopy_base);
	ctx.line_to(left + w * 0.86, canopy_base);
	ctx.close_path();
	ctx.fill();
}

fn draw_moon(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64) {
	let backdrop = &theme.backdrop;
	let (radius, inset_x, inset_y) = if width >= 768.0 {
		(48.0, 80.0, 48.0)
	} else {
		(32.0, 48.0, 32.0)
	};
	let (cx, cy) = (width - inset_x - radius, inset_y + radius);

	if let Ok(glow) = ctx.create_radial_gradient(cx, cy, radius, cx, cy, radius + 80.0) {
		let _ = glow.add_color_stop(0.0, &backdrop.moon_glow.to_css());
		let _ = glow.add_color_stop(1.0, &backdrop.moon_glow.with_alpha(0.0).to_css());
		#[allow(deprecated)]
		ctx.set_fill_style(&glow);
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, radius + 80.0, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_fill_style_str(&backdrop.moon.to_css());
	ctx.begin_path();
	let _ = ctx.arc(cx, cy, radius, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_fireflies(state: &SwampState, ctx: &CanvasRenderingContext2d, theme: &Theme, time: f64) {
	let style = &theme.fireflies;
	let (width, height) = (state.viewport.width, state.viewport.height);

	for f in state.fireflies.iter() {
		let alpha = f.pulse_alpha(time);
		let (left, top) = f.screen_position(width, height);
		let (cx, cy) = (left + f.size / 2.0, top + f.size / 2.0);
		let glow_radius = f.size * 2.5;

		if let Ok(glow) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, glow_radius) {
			let _ = glow.add_color_stop(0.0, &style.glow.fade(alpha).to_css());
			let _ = glow.add_color_stop(1.0, &style.glow.with_alpha(0.0).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&glow);
			ctx.begin_path();
			let _ = ctx.arc(cx, cy, glow_radius, 0.0, PI * 2.0);
			ctx.fill();
		}

		ctx.set_fill_style_str(&style.core.fade(alpha).to_css());
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, f.size / 2.0, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_footprints(state: &SwampState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.footprints;

	for mark in state.trail.iter() {
		let opacity = state.trail.visual_opacity(mark, state.now);
		if opacity <= 0.0 {
			continue;
		}

		ctx.save();
		ctx.set_global_alpha(opacity);
		let _ = ctx.translate(mark.x + FOOTPRINT_W / 2.0, mark.y + FOOTPRINT_H / 2.0);
		let _ = ctx.rotate(mark.rotation.to_radians());
		let _ = ctx.translate(-FOOTPRINT_W / 2.0, -FOOTPRINT_H / 2.0);

		ctx.set_fill_style_str(&style.sole.to_css());
		ctx.begin_path();
		let _ = ctx.ellipse(15.0, 12.0, 10.0, 6.0, 0.0, 0.0, PI * 2.0);
		ctx.fill();

		ctx.set_fill_style_str(&style.toes.to_css());
		for (tx, ty) in [(8.0, 5.0), (15.0, 3.0), (22.0, 5.0)] {
			ctx.begin_path();
			let _ = ctx.arc(tx, ty, 3.0, 0.0, PI * 2.0);
			ctx.fill();
		}

		ctx.restore();
	}
}

fn fill_ellipse(ctx: &CanvasRenderingContext2d, color: Color, x: f64, y: f64, rx: f64, ry: f64, rotation: f64) {
	ctx.set_fill_style_str(&color.to_css());
	ctx.begin_path();
	let _ = ctx.ellipse(x, y, rx, ry, rotation, 0.0, PI * 2.0);
	ctx.fill();
}

fn fill_circle(ctx: &CanvasRenderingContext2d, color: Color, x: f64, y: f64, r: f64) {
	ctx.set_fill_style_str(&color.to_css());
	ctx.begin_path();
	let _ = ctx.arc(x, y, r, 0.0, PI * 2.0);
	ctx.fill();
}

/// Draws the ogre in an 80x100 box anchored at the character's position,
/// mirrored to face its direction of travel.
fn draw_character(state: &SwampState, ctx: &CanvasRenderingContext2d, style: &CharacterStyle, time: f64) {
	let sprite = &state.config().sprite;
	let bob = if style.bob_period > 0.0 {
		-(time * PI / style.bob_period).sin().abs() * style.bob_height
	} else {
		0.0
	};
	let arm_alpha = pulse(time, 0.0, 2.0);

	ctx.save();
	let _ = ctx.translate(state.position.x + sprite.width / 2.0, state.position.y + bob);
	let _ = ctx.scale(state.direction.sign() * sprite.width / 80.0, sprite.height / 100.0);
	let _ = ctx.translate(-40.0, 0.0);

	// Body and vest
	fill_ellipse(ctx, style.skin_light, 40.0, 70.0, 25.0, 28.0, 0.0);
	ctx.set_fill_style_str(&style.vest.to_css());
	ctx.begin_path();
	ctx.move_to(20.0, 55.0);
	ctx.quadratic_curve_to(40.0, 50.0, 60.0, 55.0);
	ctx.line_to(55.0, 90.0);
	ctx.quadratic_curve_to(40.0, 95.0, 25.0, 90.0);
	ctx.close_path();
	ctx.fill();
	ctx.set_stroke_style_str(&style.vest_seam.to_css());
	ctx.set_line_width(2.0);
	ctx.begin_path();
	ctx.move_to(40.0, 55.0);
	ctx.line_to(40.0, 90.0);
	ctx.stroke();

	// Head and ears
	fill_ellipse(ctx, style.skin, 40.0, 30.0, 22.0, 25.0, 0.0);
	let tilt = 20f64.to_radians();
	fill_ellipse(ctx, style.skin, 12.0, 20.0, 8.0, 12.0, -tilt);
	fill_ellipse(ctx, style.skin_dark, 12.0, 20.0, 5.0, 8.0, -tilt);
	fill_ellipse(ctx, style.skin, 68.0, 20.0, 8.0, 12.0, tilt);
	fill_ellipse(ctx, style.skin_dark, 68.0, 20.0, 5.0, 8.0, tilt);

	// Eyes
	for (ex, ix) in [(30.0, 32.0), (50.0, 52.0)] {
		fill_ellipse(ctx, style.eye_white, ex, 25.0, 8.0, 9.0, 0.0);
		fill_circle(ctx, style.iris, ix, 26.0, 4.0);
		fill_circle(ctx, Color::rgb(255, 255, 255), ix + 1.0, 25.0, 1.5);
	}

	// Brows and mouth
	ctx.set_stroke_style_str(&style.skin_dark.to_css());
	ctx.set_line_cap("round");
	ctx.set_line_width(3.0);
	for (x0, x1) in [(22.0, 38.0), (42.0, 58.0)] {
		ctx.begin_path();
		ctx.move_to(x0, 18.0);
		ctx.quadratic_curve_to((x0 + x1) / 2.0, 14.0, x1, 18.0);
		ctx.stroke();
	}
	ctx.set_line_width(2.0);
	ctx.begin_path();
	ctx.move_to(30.0, 45.0);
	ctx.quadratic_curve_to(40.0, 52.0, 50.0, 45.0);
	ctx.stroke();

	// Nose
	fill_ellipse(ctx, Color::rgb(90, 138, 58), 40.0, 35.0, 6.0, 5.0, 0.0);
	fill_circle(ctx, style.skin_dark, 36.0, 35.0, 2.0);
	fill_circle(ctx, style.skin_dark, 44.0, 35.0, 2.0);

	// Arms pulse while running
	fill_ellipse(ctx, style.skin_light.with_alpha(arm_alpha), 12.0, 65.0, 8.0, 12.0, 0.0);
	fill_ellipse(ctx, style.skin_light.with_alpha(arm_alpha), 68.0, 65.0, 8.0, 12.0, 0.0);

	// Boots
	fill_ellipse(ctx, style.boots, 30.0, 95.0, 10.0, 6.0, 0.0);
	fill_ellipse(ctx, style.boots, 50.0, 95.0, 10.0, 6.0, 0.0);

	ctx.restore();
}

/// Greedy word wrap against the current canvas font.
fn wrap_text(ctx: &CanvasRenderingContext2d, text: &str, max_width: f64) -> Vec<String> {
	let measure = |s: &str| ctx.measure_text(s).map(|m| m.width()).unwrap_or(0.0);
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();

	for word in text.split_whitespace() {
		let candidate = if current.is_empty() {
			word.to_string()
		} else {
			format!("{current} {word}")
		};
		if !current.is_empty() && measure(&candidate) > max_width {
			lines.push(std::mem::replace(&mut current, word.to_string()));
		} else {
			current = candidate;
		}
	}
	if !current.is_empty() {
		lines.push(current);
	}
	lines
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

/// Speech bubble with its tail under the side nearest the character.
fn draw_bubble(ctx: &CanvasRenderingContext2d, style: &BubbleStyle, text: &str, x: f64, y: f64, facing: f64) {
	ctx.save();
	ctx.set_font(style.font);
	let inner_max = style.max_width - style.padding * 2.0;
	let lines = wrap_text(ctx, text, inner_max);
	let text_w = lines
		.iter()
		.filter_map(|l| ctx.measure_text(l).ok())
		.map(|m| m.width())
		.fold(0.0, f64::max)
		.min(inner_max);
	let (w, h) = (
		text_w + style.padding * 2.0,
		lines.len() as f64 * style.line_height + style.padding * 2.0,
	);

	ctx.set_shadow_blur(12.0);
	ctx.set_shadow_color("rgba(0, 0, 0, 0.35)");
	ctx.set_fill_style_str(&style.fill.to_css());
	rounded_rect(ctx, x, y, w, h, style.radius);
	ctx.fill();
	ctx.set_shadow_blur(0.0);

	let tail_x = if facing > 0.0 { x + 10.0 } else { x + w - 26.0 };
	ctx.begin_path();
	ctx.move_to(tail_x, y + h);
	ctx.line_to(tail_x + 16.0, y + h);
	ctx.line_to(tail_x + 8.0, y + h + 8.0);
	ctx.close_path();
	ctx.fill();

	ctx.set_fill_style_str(&style.text.to_css());
	ctx.set_text_baseline("top");
	ctx.set_text_align("left");
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, x + style.padding, y + style.padding + i as f64 * style.line_height);
	}
	ctx.restore();
}
