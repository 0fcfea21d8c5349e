use tracing::debug;

use super::{Replay, ReplayFrame};
use crate::chart::{Beatmap, HitObjectKind};
use crate::object::Slider;
use crate::session::InputKey;

/// Spacing of follow frames while holding a slider (ms)
pub const AUTOPLAY_FOLLOW_INTERVAL_MS: i64 = 10;

/// Delay between the last object ending and releasing all keys (ms)
const RELEASE_DELAY_MS: i64 = 100;

/// Build a replay that presses every object on time.
///
/// Keys alternate between K1 and K2 so that every object starts with a
/// fresh key-down. Slider balls are followed until the slider ends or the
/// next object starts, whichever comes first.
pub fn autoplay(beatmap: &Beatmap) -> Replay {
    let mut objects: Vec<_> = beatmap.objects.iter().collect();
    objects.sort_by_key(|o| o.start_time);

    let mut frames = Vec::new();
    let mut last_time = i64::MIN;
    for (i, object) in objects.iter().enumerate() {
        let key = if i % 2 == 0 { InputKey::K1 } else { InputKey::K2 };
        let start = object.start_time.max(last_time);
        frames.push(ReplayFrame::new(start, object.position, vec![key]));
        last_time = start;

        let HitObjectKind::Slider(shape) = &object.kind else {
            continue;
        };
        let slider = Slider::new(
            object.position,
            &shape.control_points,
            object.start_time,
            shape.duration,
            shape.repeats,
        );
        let follow_until = objects
            .get(i + 1)
            .map_or(slider.end_time(), |next| next.start_time.min(slider.end_time()));

        let mut t = start.saturating_add(AUTOPLAY_FOLLOW_INTERVAL_MS);
        while t < follow_until {
            frames.push(ReplayFrame::new(t, slider.ball_position_at(t), vec![key]));
            t = t.saturating_add(AUTOPLAY_FOLLOW_INTERVAL_MS);
        }
        if follow_until == slider.end_time() && follow_until > start {
            frames.push(ReplayFrame::new(
                follow_until,
                slider.ball_position_at(follow_until),
                vec![key],
            ));
        }
        last_time = frames.last().map_or(last_time, |f| f.time);
    }

    if let Some(last) = frames.last() {
        let release = ReplayFrame::new(last.time.saturating_add(RELEASE_DELAY_MS), last.position(), Vec::new());
        frames.push(release);
    }

    debug!(
        "Autoplay generated {} frames for {} objects",
        frames.len(),
        objects.len()
    );
    Replay::new(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::HitObjectDescriptor;
    use crate::object::Point;

    #[test]
    fn test_empty_chart() {
        assert!(autoplay(&Beatmap::default()).frames.is_empty());
    }

    #[test]
    fn test_circles_alternate_keys() {
        let beatmap = Beatmap {
            objects: vec![
                HitObjectDescriptor::circle(10.0, 10.0, 1000),
                HitObjectDescriptor::circle(20.0, 20.0, 1100),
                HitObjectDescriptor::circle(30.0, 30.0, 1200),
            ],
            ..Default::default()
        };
        let replay = autoplay(&beatmap);
        assert_eq!(replay.frames.len(), 4);
        assert_eq!(replay.frames[0].keys, vec![InputKey::K1]);
        assert_eq!(replay.frames[1].keys, vec![InputKey::K2]);
        assert_eq!(replay.frames[2].keys, vec![InputKey::K1]);
        assert_eq!(replay.frames[1].position(), Point::new(20.0, 20.0));
        assert!(replay.frames[3].keys.is_empty());
        assert_eq!(replay.frames[3].time, 1300);
        assert!(replay.validate().is_ok());
    }

    #[test]
    fn test_slider_is_followed() {
        let beatmap = Beatmap {
            objects: vec![HitObjectDescriptor::slider(
                0.0,
                0.0,
                2000,
                vec![Point::new(100.0, 0.0)],
                1,
                1000,
            )],
            ..Default::default()
        };
        let replay = autoplay(&beatmap);
        // Press, 99 follow frames, end frame, release
        assert_eq!(replay.frames.len(), 102);
        assert_eq!(replay.frames[50].time, 2500);
        assert_eq!(replay.frames[50].position(), Point::new(50.0, 0.0));
        assert_eq!(replay.frames[100].time, 3000);
        assert_eq!(replay.frames[100].position(), Point::new(100.0, 0.0));
        assert!(replay.frames[..101].iter().all(|f| f.keys == vec![InputKey::K1]));
        assert!(replay.validate().is_ok());
    }

    #[test]
    fn test_follow_stops_at_next_object() {
        let beatmap = Beatmap {
            objects: vec![
                HitObjectDescriptor::slider(0.0, 0.0, 0, vec![Point::new(100.0, 0.0)], 1, 1000),
                HitObjectDescriptor::circle(300.0, 300.0, 500),
            ],
            ..Default::default()
        };
        let replay = autoplay(&beatmap);
        let circle_frame = replay
            .frames
            .iter()
            .find(|f| f.keys == vec![InputKey::K2])
            .unwrap();
        assert_eq!(circle_frame.time, 500);
        assert!(replay.validate().is_ok());
    }
}
