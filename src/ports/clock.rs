/// Port for reading the host clock.
///
/// Alerts are stamped with their creation time so logs and ordering stay
/// meaningful even when several banners share the screen.
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;

    /// Checks if high-resolution timing is available
    fn is_available(&self) -> bool;
}
