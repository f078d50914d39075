/// Seconds elapsed since creation. Browser builds read `Date.now()`,
/// native builds a monotonic `Instant`.
#[derive(Clone, Copy)]
pub(crate) struct StepClock {
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl StepClock {
    pub(crate) fn started_now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            StepClock { origin_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            StepClock { origin: std::time::Instant::now() }
        }
    }

    pub(crate) fn now_secs(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.origin_ms) / 1000.0
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64()
        }
    }
}
