use leptos::prelude::*;

use crate::config::{COLLISION_RADIUS_RANGE, ForceSettings, LINK_STRENGTH_RANGE, REPULSION_RANGE};

/// Shown on the collision slider until it is first moved.
const DEFAULT_COLLISION_RADIUS: f64 = 8.0;

#[component]
fn Slider(
	label: &'static str,
	range: (f64, f64, f64),
	#[prop(into)] value: Signal<f64>,
	#[prop(into)] on_input: Callback<f64>,
) -> impl IntoView {
	let (min, max, step) = range;
	view! {
		<label class="slider">
			<span>{label}</span>
			<input
				type="range"
				min=min.to_string()
				max=max.to_string()
				step=step.to_string()
				prop:value=move || value.get().to_string()
				on:input=move |ev| {
					if let Ok(v) = event_target_value(&ev).parse::<f64>() {
						on_input.run(v);
					}
				}
			/>
			<span class="slider-value">{move || format!("{:.2}", value.get())}</span>
		</label>
	}
}

/// Sliders for the simulation's repulsion, link strength and collision radius.
#[component]
pub fn ForceControls(forces: RwSignal<ForceSettings>) -> impl IntoView {
	view! {
		<div class="controls">
			<Slider
				label="Repulsion"
				range=REPULSION_RANGE
				value=Signal::derive(move || forces.get().repulsion as f64)
				on_input=move |v: f64| forces.update(|f| f.repulsion = v as f32)
			/>
			<Slider
				label="Link strength"
				range=LINK_STRENGTH_RANGE
				value=Signal::derive(move || forces.get().link_strength as f64)
				on_input=move |v: f64| forces.update(|f| f.link_strength = v as f32)
			/>
			<Slider
				label="Collision radius"
				range=COLLISION_RADIUS_RANGE
				value=Signal::derive(move || {
					forces.get().collision_radius.unwrap_or(DEFAULT_COLLISION_RADIUS)
				})
				on_input=move |v: f64| forces.update(|f| f.collision_radius = Some(v))
			/>
		</div>
	}
}
