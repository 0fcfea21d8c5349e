use super::types::TimingPoint;

/// Total slider duration used when the chart does not provide enough timing data (ms).
pub const DEFAULT_SLIDER_DURATION_MS: i64 = 1000;

/// Chart-space units a slider travels per beat at velocity 1.0 and multiplier 1.0.
const BASE_SLIDER_VELOCITY: f64 = 100.0;

pub const DEFAULT_SLIDER_MULTIPLIER: f64 = 1.4;

/// Longest slider duration taken from chart data (ms); anything longer is treated as malformed.
pub const MAX_SLIDER_DURATION_MS: i64 = 24 * 60 * 60 * 1000;

/// Beat length (ms) in effect at `time`.
///
/// Uses the last uninherited point at or before `time`, or the first one when
/// `time` precedes all of them.
pub fn beat_length_at(points: &[TimingPoint], time: i64) -> Option<f64> {
    let mut uninherited = points.iter().filter(|p| p.uninherited);
    let first = uninherited.next()?;
    let current = std::iter::once(first)
        .chain(uninherited)
        .take_while(|p| p.time <= time)
        .last()
        .unwrap_or(first);
    Some(current.beat_length)
}

/// Slider velocity multiplier in effect at `time`.
///
/// An inherited point applies from its time until the next uninherited point.
pub fn velocity_at(points: &[TimingPoint], time: i64) -> f64 {
    let mut velocity = 1.0;
    for point in points.iter().take_while(|p| p.time <= time) {
        if point.uninherited {
            velocity = 1.0;
        } else if point.beat_length < 0.0 {
            velocity = (-100.0 / point.beat_length).clamp(0.1, 10.0);
        }
    }
    velocity
}

/// Total slider duration (ms) across all repeats.
///
/// Returns `None` when the chart has no usable uninherited timing point, the
/// pixel length is not positive, or the result is not finite or exceeds
/// [`MAX_SLIDER_DURATION_MS`].
pub fn slider_duration(
    points: &[TimingPoint],
    slider_multiplier: f64,
    time: i64,
    pixel_length: f64,
    repeats: u32,
) -> Option<i64> {
    if pixel_length <= 0.0 || slider_multiplier <= 0.0 {
        return None;
    }
    let beat_length = beat_length_at(points, time)?;
    if beat_length <= 0.0 {
        return None;
    }
    let velocity = velocity_at(points, time);
    let beats = pixel_length / (slider_multiplier * BASE_SLIDER_VELOCITY * velocity);
    let duration = (beats * beat_length * repeats.max(1) as f64).round();
    if !duration.is_finite() || duration > MAX_SLIDER_DURATION_MS as f64 {
        return None;
    }
    Some((duration as i64).max(1))
}
