/// Stateless check of a value against an inclusive `[min, max]` range.
///
/// Comparisons follow IEEE 754: a comparison against NaN is false both ways,
/// so a NaN value, or NaN for both bounds, is reported as in range. A single
/// NaN bound only disables its own side of the check. Bounds are not checked
/// for `min <= max`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RangeValidator;

impl RangeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when `value` is *outside* `[min, max]`.
    ///
    /// The name is inverted: `false` means in range, boundaries included.
    /// Prefer [`RangeValidator::is_out_of_range`], which has the same truth
    /// table.
    pub fn is_within_range(&self, value: f64, min: f64, max: f64) -> bool {
        self.is_out_of_range(value, min, max)
    }

    pub fn is_out_of_range(&self, value: f64, min: f64, max: f64) -> bool {
        value < min || value > max
    }
}
