//! The random-source seam.

/// A deterministic generator of uniform values in `[0, 1)`.
///
/// The engine draws exactly one value per tip expansion. A source that
/// yields anything outside `[0, 1)` (including NaN) is broken, and the
/// engine halts with [`StepError::InvalidDraw`](crate::StepError::InvalidDraw)
/// rather than guessing.
pub trait RandomSource {
    /// Draw the next uniform value.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
