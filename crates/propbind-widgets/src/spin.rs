//! Numeric reference widgets.
//!
//! Both widgets clamp writes into their range; [`Slider`] additionally
//! rounds to whole steps. `value_changed` fires only when the stored value
//! changes.

use std::cell::Cell;

use crate::signal::Signal;
use crate::{NumericInput, Widget};

/// A floating-point spin box with an inclusive range.
#[derive(Debug)]
pub struct SpinBox {
    value: Cell<f64>,
    minimum: Cell<f64>,
    maximum: Cell<f64>,
    value_changed: Signal<f64>,
}

impl SpinBox {
    /// Create a spin box over `0.0..=99.99` holding `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_range(0.0, 99.99)
    }

    /// Create a spin box over `minimum..=maximum`, holding `minimum`.
    ///
    /// # Panics
    ///
    /// Panics if `minimum > maximum`.
    #[must_use]
    pub fn with_range(minimum: f64, maximum: f64) -> Self {
        assert!(minimum <= maximum, "SpinBox range is inverted");
        Self {
            value: Cell::new(minimum),
            minimum: Cell::new(minimum),
            maximum: Cell::new(maximum),
            value_changed: Signal::new(),
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.minimum.get(), self.maximum.get())
    }

    #[must_use]
    pub fn value_changed(&self) -> &Signal<f64> {
        &self.value_changed
    }
}

impl Default for SpinBox {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericInput for SpinBox {
    fn value(&self) -> f64 {
        self.value.get()
    }

    fn set_value(&self, value: f64) {
        if value.is_nan() {
            return;
        }
        let clamped = value.clamp(self.minimum.get(), self.maximum.get());
        if self.value.replace(clamped) != clamped {
            self.value_changed.emit(&clamped);
        }
    }
}

impl Widget for SpinBox {
    fn as_numeric(&self) -> Option<&dyn NumericInput> {
        Some(self)
    }
}

/// An integer slider with an inclusive range.
#[derive(Debug)]
pub struct Slider {
    value: Cell<i64>,
    minimum: i64,
    maximum: i64,
    value_changed: Signal<i64>,
}

impl Slider {
    /// Create a slider over `0..=99` holding `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_range(0, 99)
    }

    /// Create a slider over `minimum..=maximum`, holding `minimum`.
    ///
    /// # Panics
    ///
    /// Panics if `minimum > maximum`.
    #[must_use]
    pub fn with_range(minimum: i64, maximum: i64) -> Self {
        assert!(minimum <= maximum, "Slider range is inverted");
        Self {
            value: Cell::new(minimum),
            minimum,
            maximum,
            value_changed: Signal::new(),
        }
    }

    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        (self.minimum, self.maximum)
    }

    #[must_use]
    pub fn value_changed(&self) -> &Signal<i64> {
        &self.value_changed
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericInput for Slider {
    fn value(&self) -> f64 {
        self.value.get() as f64
    }

    fn set_value(&self, value: f64) {
        if value.is_nan() {
            return;
        }
        // Saturating float-to-int cast, then clamp into range.
        let stepped = (value.round() as i64).clamp(self.minimum, self.maximum);
        if self.value.replace(stepped) != stepped {
            self.value_changed.emit(&stepped);
        }
    }
}

impl Widget for Slider {
    fn as_numeric(&self) -> Option<&dyn NumericInput> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spin_box_clamps() {
        let spin = SpinBox::with_range(-1.0, 1.0);
        spin.set_value(5.0);
        assert_eq!(spin.value(), 1.0);
        spin.set_value(-5.0);
        assert_eq!(spin.value(), -1.0);
        spin.set_value(f64::NAN);
        assert_eq!(spin.value(), -1.0);
    }

    #[test]
    fn slider_rounds_and_clamps() {
        let slider = Slider::new();
        slider.set_value(41.6);
        assert_eq!(slider.value(), 42.0);
        slider.set_value(1e30);
        assert_eq!(slider.value(), 99.0);
        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn value_changed_fires_once_per_change() {
        let slider = Slider::new();
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&hits);
        let _sub = slider
            .value_changed()
            .connect(move |_| counter.set(counter.get() + 1));
        slider.set_value(3.0);
        slider.set_value(3.2);
        slider.set_value(4.0);
        assert_eq!(hits.get(), 2);
    }

    proptest! {
        #[test]
        fn spin_box_round_trips_in_range(v in 0.0f64..=99.99) {
            let spin = SpinBox::new();
            spin.set_value(v);
            prop_assert_eq!(spin.value(), v);
        }

        #[test]
        fn slider_round_trips_integers_in_range(v in 0i64..=99) {
            let slider = Slider::new();
            slider.set_value(v as f64);
            prop_assert_eq!(slider.value(), v as f64);
        }
    }
}
