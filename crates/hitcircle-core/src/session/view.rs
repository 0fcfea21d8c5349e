use serde::Serialize;

use crate::config::GameplayConfig;
use crate::object::{HitObject, Playfield, Point, approach_scale, fade_alpha};

/// Slider-only parts of a view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    /// Path vertices in display space
    pub path: Vec<Point>,
    /// Ball position in display space
    pub ball: Point,
    pub held: bool,
}

/// Render-ready snapshot of one visible object, in display coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectView {
    pub index: usize,
    pub kind: &'static str,
    pub state: &'static str,
    pub position: Point,
    /// Hit radius scaled to the display width
    pub radius: f64,
    pub approach_progress: f64,
    pub approach_scale: f64,
    pub alpha: f64,
    pub slider: Option<SliderView>,
}

impl ObjectView {
    pub fn new(
        index: usize,
        object: &HitObject,
        time: i64,
        config: &GameplayConfig,
        playfield: &Playfield,
    ) -> Self {
        let progress = object.approach_progress(time, config);
        let slider = match object {
            HitObject::Circle(_) => None,
            HitObject::Slider(s) => Some(SliderView {
                path: s
                    .path()
                    .points()
                    .iter()
                    .map(|p| playfield.to_display(*p))
                    .collect(),
                ball: playfield.to_display(s.ball_position_at(time)),
                held: s.is_held(),
            }),
        };
        Self {
            index,
            kind: object.kind_name(),
            state: object.state_name(),
            position: playfield.to_display(object.position()),
            radius: config.hit_radius * playfield.scale_x(),
            approach_progress: progress,
            approach_scale: approach_scale(progress),
            alpha: fade_alpha(progress),
            slider,
        }
    }
}
