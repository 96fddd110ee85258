/// Single source of randomness for outfit suggestions.
///
/// Every random decision the recommendation engine makes goes through this
/// trait, so a scripted implementation reproduces an exact suggestion.
pub trait RandomSourcePort: Send {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_unit() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}
