//! Leptos component wrapping the swamp canvas.
//!
//! The component creates a fullscreen canvas, builds the scene once the canvas
//! is mounted, and drives it from a `requestAnimationFrame` loop. A window
//! resize listener keeps the canvas and the walkable bounds in sync. Both are
//! torn down in `on_cleanup` so nothing touches the scene after unmount.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::SwampConfig;
use super::jitter::BrowserRandom;
use super::render;
use super::state::SwampState;
use super::theme::Theme;
use super::viewport::Viewport;

/// Bundles scene state with the canvas it draws to and its theme.
struct SceneContext {
	state: SwampState,
	theme: Theme,
	ctx: CanvasRenderingContext2d,
}

/// Milliseconds from the page's monotonic clock, falling back to wall time.
fn now_ms(window: &Window) -> f64 {
	window
		.performance()
		.map(|p| p.now())
		.unwrap_or_else(js_sys::Date::now)
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Renders the animated swamp on a fullscreen canvas.
///
/// Scene constants come from the reactive `config` signal, read once when the
/// canvas mounts.
#[component]
pub fn SwampCanvas(#[prop(into)] config: Signal<SwampConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let stopped = Arc::new(AtomicBool::new(false));
	let frame_id = Arc::new(AtomicI32::new(0));
	let (scene_init, animate_init, stopped_init, frame_init) =
		(scene.clone(), animate.clone(), stopped.clone(), frame_id.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("swamp: no window, not starting");
			return;
		};
		let Some((w, h)) = window_size(&window) else {
			warn!("swamp: could not read window size");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("swamp: 2d canvas context unavailable");
			return;
		};

		let theme = Theme::default();
		info!("swamp: rendering with theme {}", theme.name);
		*scene_init.borrow_mut() = Some(SceneContext {
			state: SwampState::new(
				config.get_untracked(),
				Viewport::new(w, h),
				now_ms(&window),
				&mut BrowserRandom,
			),
			theme,
			ctx,
		});

		let (scene_anim, animate_inner, stopped_anim, frame_anim) = (
			scene_init.clone(),
			animate_init.clone(),
			stopped_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if stopped_anim.load(Ordering::Relaxed) {
				return;
			}
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Some(ref mut s) = *scene_anim.borrow_mut() {
				s.state.tick(now_ms(&window), &mut BrowserRandom);
				render::render(&s.state, &s.ctx, &s.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_anim.store(id, Ordering::Relaxed);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.store(id, Ordering::Relaxed);
			}
		}
	});

	let scene_resize = scene.clone();
	let resize_handle = window_event_listener(ev::resize, move |_| {
		let Some((w, h)) = web_sys::window().as_ref().and_then(window_size) else {
			return;
		};
		if let Some(canvas) = canvas_ref.get_untracked() {
			let canvas: HtmlCanvasElement = canvas.into();
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
		}
		if let Some(ref mut s) = *scene_resize.borrow_mut() {
			s.state.resize(Viewport::new(w, h));
		}
	});

	on_cleanup(move || {
		stopped.store(true, Ordering::Relaxed);
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(frame_id.load(Ordering::Relaxed));
		}
		resize_handle.remove();
		info!("swamp: animation stopped");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="swamp-canvas"
			style="display: block; position: fixed; inset: 0;"
		/>
	}
}
