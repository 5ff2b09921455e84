use drawrs::view::{self, NavLink, RollButtonSize, Screen};
use drawrs::{DrawOptions, DrawOutcome, DrawPhase, DrawUpdate, Drawer, TurnState};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDrawer {
    drawer: Drawer,
}

#[wasm_bindgen]
impl WasmDrawer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmDrawer, JsValue> {
        let drawer = Drawer::new(DrawOptions::default(), seed as u64).map_err(js_err)?;
        Ok(Self { drawer })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.drawer.teardown();
        self.drawer = Drawer::new(DrawOptions::default(), seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn request_draw(&self) -> Result<JsValue, JsValue> {
        to_js_updates(&self.drawer.request_draw())
    }

    pub fn toggle_auto_continue(&self) -> bool {
        self.drawer.toggle_auto_continue()
    }

    pub fn set_auto_continue(&self, enabled: bool) -> Result<JsValue, JsValue> {
        to_js_updates(&self.drawer.set_auto_continue(enabled))
    }

    /// Call from the page's animation loop with the milliseconds since the last call.
    pub fn advance(&self, elapsed_ms: u32) -> Result<JsValue, JsValue> {
        to_js_updates(&self.drawer.advance(elapsed_ms as u64))
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.drawer.next_deadline().map(|due| due as f64)
    }

    pub fn now(&self) -> f64 {
        self.drawer.now() as f64
    }

    pub fn teardown(&self) -> u32 {
        self.drawer.teardown() as u32
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.drawer.snapshot();
        let options = &self.drawer.options;
        let size = RollButtonSize::for_state(&state);

        let snapshot = Snapshot {
            phase: phase_to_str(state.phase()),
            draws_taken: state.draws_taken as u32,
            draws_per_turn: options.draws_per_turn as u32,
            results: state.draw_results.iter().copied().map(outcome_to_str).collect(),
            current_outcome: state.current_outcome.map(outcome_to_str),
            preview_outcome: state.preview_outcome.map(outcome_to_str),
            is_animating: state.is_animating,
            auto_continue: state.auto_continue,
            flicker_steps_taken: state.flicker_steps_taken as u32,
            button_label: view::roll_button_label(&state, options, size),
            button_large: size == RollButtonSize::Large,
            heading: view::outcome_heading(&state),
            deck_hint: deck_hint(&state),
            counter: view::draw_counter(&state, options),
            previous_draws: view::results_list(&state)
                .into_iter()
                .map(|(caption, label)| JsResultRow { caption, label })
                .collect(),
        };

        to_js_value(&snapshot)
    }

    pub fn route(&self, path: &str) -> Result<JsValue, JsValue> {
        let screen = Screen::from_path(path)
            .ok_or_else(|| JsValue::from_str(&format!("unknown route: {path}")))?;
        to_js_value(&JsScreen::from(screen))
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    draws_taken: u32,
    draws_per_turn: u32,
    results: Vec<&'static str>,
    current_outcome: Option<&'static str>,
    preview_outcome: Option<&'static str>,
    is_animating: bool,
    auto_continue: bool,
    flicker_steps_taken: u32,
    button_label: &'static str,
    button_large: bool,
    heading: Option<&'static str>,
    deck_hint: Option<&'static str>,
    counter: String,
    previous_draws: Vec<JsResultRow>,
}

#[derive(Serialize)]
struct JsResultRow {
    caption: String,
    label: &'static str,
}

#[derive(Serialize)]
struct JsScreen {
    path: &'static str,
    title: &'static str,
    links: Vec<JsLink>,
}

impl From<Screen> for JsScreen {
    fn from(screen: Screen) -> Self {
        Self {
            path: screen.path(),
            title: screen.title(),
            links: screen.nav_links().iter().map(JsLink::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsLink {
    to: &'static str,
    label: &'static str,
}

impl From<&NavLink> for JsLink {
    fn from(link: &NavLink) -> Self {
        Self {
            to: link.target.path(),
            label: link.label,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsUpdate {
    TurnReset,
    RollStarted { draw_number: u32, automatic: bool },
    Flicker { step: u32, preview: &'static str },
    Resolved { draw_number: u32, outcome: &'static str },
    AutoContinueChanged { enabled: bool },
    RollAbandoned,
}

impl From<DrawUpdate> for JsUpdate {
    fn from(update: DrawUpdate) -> Self {
        match update {
            DrawUpdate::TurnReset => Self::TurnReset,
            DrawUpdate::RollStarted {
                draw_number,
                automatic,
            } => Self::RollStarted {
                draw_number: draw_number as u32,
                automatic,
            },
            DrawUpdate::Flicker { step, preview } => Self::Flicker {
                step: step as u32,
                preview: outcome_to_str(preview),
            },
            DrawUpdate::Resolved {
                draw_number,
                outcome,
            } => Self::Resolved {
                draw_number: draw_number as u32,
                outcome: outcome_to_str(outcome),
            },
            DrawUpdate::AutoContinueChanged(enabled) => Self::AutoContinueChanged { enabled },
            DrawUpdate::RollAbandoned => Self::RollAbandoned,
        }
    }
}

fn deck_hint(state: &TurnState) -> Option<&'static str> {
    if state.is_animating {
        return None;
    }
    state.current_outcome.map(DrawOutcome::deck_hint)
}

fn outcome_to_str(outcome: DrawOutcome) -> &'static str {
    match outcome {
        DrawOutcome::ActionCard => "action",
        DrawOutcome::BodyPart => "bodyPart",
    }
}

fn phase_to_str(phase: DrawPhase) -> &'static str {
    match phase {
        DrawPhase::Idle => "Idle",
        DrawPhase::Rolling { .. } => "Rolling",
        DrawPhase::Resolved { .. } => "Resolved",
    }
}

fn to_js_updates(updates: &[DrawUpdate]) -> Result<JsValue, JsValue> {
    let js: Vec<JsUpdate> = updates.iter().copied().map(JsUpdate::from).collect();
    to_js_value(&js)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
