use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::config::SimulationConfig;
use crate::domain::input::SAMPLE_INPUT;

use super::driver::StepDriver;
use super::render_extract::to_scene;
use super::sim_stats::SimStats;
use super::step::StepEvent;
use super::SandSimulation;

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing handle: simulation plus its step gate
#[wasm_bindgen]
pub struct Simulation {
    core: SandSimulation,
    driver: StepDriver,
    last_event: Option<StepEvent>,
}

#[wasm_bindgen]
impl Simulation {
    /// Build from wall input text and an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(input: &str, config_json: Option<String>) -> Result<Simulation, JsValue> {
        let config = match config_json {
            Some(json) => SimulationConfig::from_json(&json)
                .map_err(|e| to_js_error(e.into()))?,
            None => SimulationConfig::default(),
        };
        let core = SandSimulation::from_input(input, config).map_err(to_js_error)?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(js_name = withSampleInput)]
    pub fn with_sample_input() -> Result<Simulation, JsValue> {
        Self::new(SAMPLE_INPUT, None)
    }

    /// Advance one step unconditionally; returns the event code
    /// (0 moved, 1 settled, 2 lost, 3 full).
    pub fn step(&mut self) -> u8 {
        let event = self.core.step();
        self.last_event = Some(event);
        event.code()
    }

    /// Gate on the configured interval; returns the event code or -1 when
    /// no step was due.
    pub fn tick(&mut self, now_secs: f64) -> i32 {
        match self.driver.tick(&mut self.core, now_secs) {
            Some(event) => {
                self.last_event = Some(event);
                event.code() as i32
            }
            None => -1,
        }
    }

    /// Discard settled sand and restart the step clock.
    pub fn reset(&mut self) {
        self.core.reset();
        self.driver.restart();
        self.last_event = None;
    }

    #[wasm_bindgen(getter)]
    pub fn grain_x(&self) -> Option<i32> {
        self.core.current_grain_position().map(|c| c.x)
    }

    #[wasm_bindgen(getter)]
    pub fn grain_y(&self) -> Option<i32> {
        self.core.current_grain_position().map(|c| c.y)
    }

    #[wasm_bindgen(getter)]
    pub fn grain_scene_x(&self) -> Option<f32> {
        let bounds = self.core.bounds();
        self.core.current_grain_position().map(|c| to_scene(&bounds, c).0)
    }

    #[wasm_bindgen(getter)]
    pub fn grain_scene_y(&self) -> Option<f32> {
        let bounds = self.core.bounds();
        self.core.current_grain_position().map(|c| to_scene(&bounds, c).1)
    }

    /// Cell of the last Moved/Settled event
    #[wasm_bindgen(getter)]
    pub fn last_event_x(&self) -> Option<i32> {
        self.last_event.and_then(|e| e.position()).map(|c| c.x)
    }

    #[wasm_bindgen(getter)]
    pub fn last_event_y(&self) -> Option<i32> {
        self.last_event.and_then(|e| e.position()).map(|c| c.y)
    }

    #[wasm_bindgen(getter)]
    pub fn min_x(&self) -> i32 { self.core.bounds().min_x }

    #[wasm_bindgen(getter)]
    pub fn max_x(&self) -> i32 { self.core.bounds().max_x }

    #[wasm_bindgen(getter)]
    pub fn max_y(&self) -> i32 { self.core.bounds().max_y }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 { self.core.bounds().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 { self.core.bounds().height() }

    #[wasm_bindgen(getter)]
    pub fn occupied_count(&self) -> usize { self.core.occupancy().len() }

    #[wasm_bindgen(getter)]
    pub fn is_full(&self) -> bool { self.core.is_full() }

    pub fn stats(&self) -> SimStats {
        self.core.stats()
    }

    /// Flat `[x0, y0, x1, y1, ..]` wall cells
    pub fn wall_cells(&self) -> Vec<i32> {
        self.core.wall_cells_flat()
    }

    /// Flat `[x0, y0, x1, y1, ..]` settled sand cells
    pub fn sand_cells(&self) -> Vec<i32> {
        self.core.sand_cells_flat()
    }

    /// Bounds and framing for camera placement, as JSON
    pub fn scene_frame_json(&self) -> String {
        serde_json::to_string(&self.core.scene_frame()).unwrap_or_default()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl Simulation {
    pub fn wrap(core: SandSimulation) -> Self {
        let driver = StepDriver::from_config(core.config());
        Self { core, driver, last_event: None }
    }

    pub fn core(&self) -> &SandSimulation {
        &self.core
    }
}
