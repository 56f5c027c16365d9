//! swamp-vibes: a decorative animated swamp page.
//!
//! This crate provides a WASM canvas component in which an ogre wanders around
//! a night-time swamp, leaving fading footprints between pulsing fireflies and
//! now and then shouting a quote.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::swamp::{SwampCanvas, SwampConfig, SwampState, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("swamp-vibes: logging initialized");
}

/// Load scene overrides from a script element with id="swamp-config".
/// Expected format: partial JSON matching [`SwampConfig`].
fn load_config() -> Option<SwampConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("swamp-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SwampConfig::from_json(&json_text) {
		Ok(config) => {
			info!("swamp-vibes: loaded config overrides");
			Some(config)
		}
		Err(e) => {
			warn!("swamp-vibes: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the swamp canvas with the title and footer overlays.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Get Out Of My Swamp!" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="swamp-page">
			<SwampCanvas config=config_signal />
			<div class="swamp-title">
				<h1>"GET OUT OF MY SWAMP!"</h1>
				<p class="subtitle">"(Shrek is just vibing... leave him alone)"</p>
			</div>
			<footer class="swamp-footer">
				<p>
					"Requested by " <span>"@trustnoneisakey"</span>
					" · Built by " <span>"@clonkbot"</span>
				</p>
			</footer>
		</div>
	}
}
