//! Two-thumb price slider.
//!
//! Dragging only moves the local thumb positions; nothing reaches the
//! filters until [`PriceSlider::commit`].

use storefront_filter::config::DEFAULT_PRICE_STEP;
use storefront_filter::filter::{FilterAction, PriceRange, MAX_PRICE_KEY, MIN_PRICE_KEY};
use storefront_filter::FilterConfig;

/// Which end of the range a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSlider {
    value: PriceRange,
    bounds: PriceRange,
    step: u32,
    /// Uncommitted thumb positions; may be crossed while dragging.
    drag: Option<(u32, u32)>,
}

impl PriceSlider {
    /// Create a slider over `bounds`. A zero step is treated as 1.
    pub fn new(value: PriceRange, bounds: PriceRange, step: u32) -> Self {
        Self {
            value: value.clamp_to(&bounds),
            bounds,
            step: step.max(1),
            drag: None,
        }
    }

    pub fn from_config(value: PriceRange, config: &FilterConfig) -> Self {
        Self::new(value, config.price_bounds, config.price_step)
    }

    /// Committed range.
    pub fn value(&self) -> PriceRange {
        self.value
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Current thumb positions, ordered.
    pub fn position(&self) -> PriceRange {
        match self.drag {
            Some((min, max)) => PriceRange::ordered(min, max),
            None => self.value,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Take a new committed value from the parent, dropping any drag.
    pub fn sync(&mut self, value: PriceRange) {
        self.value = value.clamp_to(&self.bounds);
        self.drag = None;
    }

    /// Move a thumb to `raw`, snapped to the step and clamped to bounds.
    pub fn drag(&mut self, thumb: Thumb, raw: u32) {
        let snapped = self.snap(raw);
        let (min, max) = self.drag.unwrap_or((self.value.min(), self.value.max()));
        self.drag = Some(match thumb {
            Thumb::Min => (snapped, max),
            Thumb::Max => (min, snapped),
        });
    }

    pub fn drag_min(&mut self, raw: u32) {
        self.drag(Thumb::Min, raw);
    }

    pub fn drag_max(&mut self, raw: u32) {
        self.drag(Thumb::Max, raw);
    }

    /// Abandon the drag.
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Finish the drag. Emits the new range only if it differs from the
    /// committed one.
    pub fn commit(&mut self) -> Option<FilterAction> {
        let (min, max) = self.drag.take()?;
        let range = PriceRange::ordered(min, max);
        if range == self.value {
            return None;
        }
        self.value = range;
        Some(FilterAction::SetPriceRange(range))
    }

    fn snap(&self, raw: u32) -> u32 {
        if raw >= self.bounds.max() {
            return self.bounds.max();
        }
        let offset = raw.saturating_sub(self.bounds.min());
        let steps = offset.saturating_add(self.step / 2) / self.step;
        self.bounds.min().saturating_add(steps.saturating_mul(self.step)).min(self.bounds.max())
    }

    pub fn render(&self) -> String {
        let position = self.position();
        format!(
            r#"<div class="filter-price" data-facet="price">
    <h3 class="facet-title">Price</h3>
    <div class="price-slider">
        <input type="range" name="{}" min="{}" max="{}" step="{}" value="{}" data-thumb="min" aria-label="Minimum price">
        <input type="range" name="{}" min="{}" max="{}" step="{}" value="{}" data-thumb="max" aria-label="Maximum price">
    </div>
    <p class="price-display">${} - ${}</p>
</div>"#,
            MIN_PRICE_KEY,
            self.bounds.min(),
            self.bounds.max(),
            self.step,
            position.min(),
            MAX_PRICE_KEY,
            self.bounds.min(),
            self.bounds.max(),
            self.step,
            position.max(),
            position.min(),
            position.max()
        )
    }
}

impl Default for PriceSlider {
    fn default() -> Self {
        Self::new(PriceRange::DEFAULT, PriceRange::DEFAULT, DEFAULT_PRICE_STEP)
    }
}
