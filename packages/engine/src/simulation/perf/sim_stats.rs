use wasm_bindgen::prelude::*;

/// Running counters for one simulation run (cleared by reset/seed)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub(super) steps: u64,
    pub(super) grains_settled: u32,
    pub(super) grains_lost: u32,
    pub(super) first_loss_after: Option<u32>,
}

#[wasm_bindgen]
impl SimStats {
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u64 { self.steps }

    #[wasm_bindgen(getter)]
    pub fn grains_settled(&self) -> u32 { self.grains_settled }

    #[wasm_bindgen(getter)]
    pub fn grains_lost(&self) -> u32 { self.grains_lost }

    /// Grains settled before the first one fell into the abyss
    #[wasm_bindgen(getter)]
    pub fn first_loss_after(&self) -> Option<u32> { self.first_loss_after }

    /// Grains that reached a terminal state
    #[wasm_bindgen(getter)]
    pub fn grains_resolved(&self) -> u32 { self.grains_settled + self.grains_lost }
}
