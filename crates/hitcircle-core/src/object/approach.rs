/// Normalized approach progress of an object.
///
/// `0.0` when the object first appears (`start_time - approach_duration`),
/// `1.0` at `start_time`, clamped outside that range.
pub fn approach_progress(current_time: i64, start_time: i64, approach_duration: i64) -> f64 {
    if approach_duration <= 0 {
        return if current_time >= start_time { 1.0 } else { 0.0 };
    }
    let appear_time = start_time.saturating_sub(approach_duration);
    let progress = current_time.saturating_sub(appear_time) as f64 / approach_duration as f64;
    progress.clamp(0.0, 1.0)
}

/// Size of the approach ring relative to the object: 2.0 on appearance, 1.0 at hit time.
pub fn approach_scale(progress: f64) -> f64 {
    2.0 - progress.clamp(0.0, 1.0)
}

/// Fade-in opacity: fully transparent on appearance, opaque at hit time.
pub fn fade_alpha(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert_eq!(approach_progress(0, 1000, 1000), 0.0);
        assert_eq!(approach_progress(500, 1000, 1000), 0.5);
        assert_eq!(approach_progress(1000, 1000, 1000), 1.0);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(approach_progress(-500, 1000, 1000), 0.0);
        assert_eq!(approach_progress(1500, 1000, 1000), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(approach_progress(999, 1000, 0), 0.0);
        assert_eq!(approach_progress(1000, 1000, 0), 1.0);
    }

    #[test]
    fn test_approach_scale() {
        assert_eq!(approach_scale(0.0), 2.0);
        assert_eq!(approach_scale(0.5), 1.5);
        assert_eq!(approach_scale(1.0), 1.0);
        assert_eq!(approach_scale(3.0), 1.0);
    }

    #[test]
    fn test_fade_alpha() {
        assert_eq!(fade_alpha(0.25), 0.25);
        assert_eq!(fade_alpha(-1.0), 0.0);
    }
}
