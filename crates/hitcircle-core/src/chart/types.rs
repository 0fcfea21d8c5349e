use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::object::Point;

/// Descriptive chart data read from the sections before `[HitObjects]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub title: String,
    pub artist: String,
    pub creator: String,
    /// Difficulty name
    pub version: String,
    pub audio_filename: Option<String>,
    pub background_filename: Option<String>,
    pub slider_multiplier: f64,
}

impl ChartMetadata {
    /// "Artist - Title [Version]", leaving out empty parts
    pub fn display_name(&self) -> String {
        let mut name = match (self.artist.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} - {}", self.artist, self.title),
            (true, false) => self.title.clone(),
            (false, true) => self.artist.clone(),
            (true, true) => "Untitled".to_string(),
        };
        if !self.version.is_empty() {
            name.push_str(&format!(" [{}]", self.version));
        }
        name
    }
}

/// Slider-specific shape and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderShape {
    /// Control points after the start position, in chart space
    pub control_points: Vec<Point>,
    /// Number of spans (1 = no repeat)
    pub repeats: u32,
    /// Total duration across all spans (ms)
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoStaticStr)]
pub enum HitObjectKind {
    Circle,
    Slider(SliderShape),
}

/// Immutable parser output for one hit object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitObjectDescriptor {
    pub position: Point,
    /// Chart-relative start time (ms, never negative)
    pub start_time: i64,
    pub kind: HitObjectKind,
}

impl HitObjectDescriptor {
    pub fn circle(x: f64, y: f64, start_time: i64) -> Self {
        Self {
            position: Point::new(x, y),
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    pub fn slider(
        x: f64,
        y: f64,
        start_time: i64,
        control_points: Vec<Point>,
        repeats: u32,
        duration: i64,
    ) -> Self {
        Self {
            position: Point::new(x, y),
            start_time,
            kind: HitObjectKind::Slider(SliderShape {
                control_points,
                repeats: repeats.max(1),
                duration: duration.max(0),
            }),
        }
    }

    pub fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider(_))
    }

    /// Time the object stops being playable (ignoring the hit window)
    pub fn end_time(&self) -> i64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(shape) => self.start_time.saturating_add(shape.duration),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        (&self.kind).into()
    }
}

/// A `[TimingPoints]` record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    pub time: i64,
    /// Milliseconds per beat for uninherited points, negative slider-velocity percentage otherwise
    pub beat_length: f64,
    pub uninherited: bool,
}

/// A parsed chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    pub metadata: ChartMetadata,
    /// Ordered by start time, ties in parse order
    pub objects: Vec<HitObjectDescriptor>,
    pub timing_points: Vec<TimingPoint>,
}

impl Beatmap {
    pub fn circle_count(&self) -> usize {
        self.objects.iter().filter(|o| !o.is_slider()).count()
    }

    pub fn slider_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_slider()).count()
    }

    /// End time of the last object to finish (ms)
    pub fn length_ms(&self) -> i64 {
        self.objects
            .iter()
            .map(HitObjectDescriptor::end_time)
            .max()
            .unwrap_or(0)
    }

    /// Highest score reachable: 300 per circle, start plus completion per slider
    pub fn max_score(&self) -> u32 {
        self.objects
            .iter()
            .map(|o| if o.is_slider() { 400 } else { 300 })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_beatmap() -> Beatmap {
        Beatmap {
            metadata: ChartMetadata {
                title: "Test Song".to_string(),
                artist: "Test Artist".to_string(),
                version: "Hard".to_string(),
                ..Default::default()
            },
            objects: vec![
                HitObjectDescriptor::circle(100.0, 100.0, 1000),
                HitObjectDescriptor::slider(
                    0.0,
                    0.0,
                    2000,
                    vec![Point::new(100.0, 0.0)],
                    1,
                    1500,
                ),
                HitObjectDescriptor::circle(200.0, 100.0, 2500),
            ],
            timing_points: Vec::new(),
        }
    }

    #[test]
    fn test_counts() {
        let beatmap = make_test_beatmap();
        assert_eq!(beatmap.circle_count(), 2);
        assert_eq!(beatmap.slider_count(), 1);
    }

    #[test]
    fn test_length_uses_slider_end() {
        let beatmap = make_test_beatmap();
        assert_eq!(beatmap.length_ms(), 3500);
        assert_eq!(Beatmap::default().length_ms(), 0);
    }

    #[test]
    fn test_max_score() {
        assert_eq!(make_test_beatmap().max_score(), 1000);
    }

    #[test]
    fn test_display_name() {
        let beatmap = make_test_beatmap();
        assert_eq!(
            beatmap.metadata.display_name(),
            "Test Artist - Test Song [Hard]"
        );
        assert_eq!(ChartMetadata::default().display_name(), "Untitled");
    }

    #[test]
    fn test_slider_constructor_clamps_repeats() {
        let slider = HitObjectDescriptor::slider(0.0, 0.0, 0, Vec::new(), 0, 1000);
        match slider.kind {
            HitObjectKind::Slider(ref shape) => assert_eq!(shape.repeats, 1),
            HitObjectKind::Circle => panic!("expected slider"),
        }
        assert_eq!(slider.kind_name(), "Slider");
    }
}
