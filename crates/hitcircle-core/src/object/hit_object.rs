use strum::IntoStaticStr;

use super::{Circle, Point, Slider, approach_progress};
use crate::chart::{HitObjectDescriptor, HitObjectKind};
use crate::config::GameplayConfig;
use crate::judge::Judgement;

/// A playable object on the timeline.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum HitObject {
    Circle(Circle),
    Slider(Slider),
}

impl HitObject {
    pub fn start_time(&self) -> i64 {
        match self {
            Self::Circle(c) => c.start_time(),
            Self::Slider(s) => s.start_time(),
        }
    }

    pub fn end_time(&self) -> i64 {
        match self {
            Self::Circle(c) => c.start_time(),
            Self::Slider(s) => s.end_time(),
        }
    }

    /// Head position in chart space
    pub fn position(&self) -> Point {
        match self {
            Self::Circle(c) => c.position(),
            Self::Slider(s) => s.position(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            Self::Circle(c) => c.is_resolved(),
            Self::Slider(s) => s.is_resolved(),
        }
    }

    pub fn visible_at(&self, time: i64, config: &GameplayConfig) -> bool {
        match self {
            Self::Circle(c) => c.visible_at(time, config),
            Self::Slider(s) => s.visible_at(time, config),
        }
    }

    pub fn approach_progress(&self, time: i64, config: &GameplayConfig) -> f64 {
        approach_progress(time, self.start_time(), config.approach_duration_ms)
    }

    /// Judge a press against this object.
    pub fn judge(&mut self, input: Point, time: i64, config: &GameplayConfig) -> Option<Judgement> {
        match self {
            Self::Circle(c) => c.judge(input, time, config),
            Self::Slider(s) => s.judge_start(input, time, config),
        }
    }

    /// Time-driven update: expiry for both kinds, tracking for held sliders.
    pub fn update(
        &mut self,
        pointer: Point,
        time: i64,
        config: &GameplayConfig,
    ) -> Option<Judgement> {
        match self {
            Self::Circle(c) => c.update(time, config),
            Self::Slider(s) => s.update(pointer, time, config),
        }
    }

    /// State name, for views and logs
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Circle(c) => c.state().into(),
            Self::Slider(s) => s.state().into(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.into()
    }
}

impl From<&HitObjectDescriptor> for HitObject {
    fn from(descriptor: &HitObjectDescriptor) -> Self {
        match &descriptor.kind {
            HitObjectKind::Circle => {
                Self::Circle(Circle::new(descriptor.position, descriptor.start_time))
            }
            HitObjectKind::Slider(shape) => Self::Slider(Slider::new(
                descriptor.position,
                &shape.control_points,
                descriptor.start_time,
                shape.duration,
                shape.repeats,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_descriptor() {
        let circle = HitObject::from(&HitObjectDescriptor::circle(10.0, 20.0, 500));
        assert_eq!(circle.kind_name(), "Circle");
        assert_eq!(circle.position(), Point::new(10.0, 20.0));
        assert_eq!(circle.end_time(), 500);

        let slider = HitObject::from(&HitObjectDescriptor::slider(
            0.0,
            0.0,
            1000,
            vec![Point::new(100.0, 0.0)],
            2,
            600,
        ));
        assert_eq!(slider.kind_name(), "Slider");
        assert_eq!(slider.start_time(), 1000);
        assert_eq!(slider.end_time(), 1600);
        assert_eq!(slider.state_name(), "Pending");
    }

    #[test]
    fn test_judge_dispatch() {
        let config = GameplayConfig::default();
        let mut circle = HitObject::from(&HitObjectDescriptor::circle(0.0, 0.0, 1000));
        let mut slider = HitObject::from(&HitObjectDescriptor::slider(
            0.0,
            0.0,
            1000,
            vec![Point::new(100.0, 0.0)],
            1,
            1000,
        ));
        assert_eq!(
            circle.judge(Point::default(), 1000, &config),
            Some(Judgement::Great)
        );
        assert_eq!(
            slider.judge(Point::default(), 1000, &config),
            Some(Judgement::Ok)
        );
        assert_eq!(circle.state_name(), "Hit");
        assert_eq!(slider.state_name(), "Held");
    }

    #[test]
    fn test_approach_progress() {
        let config = GameplayConfig::default();
        let circle = HitObject::from(&HitObjectDescriptor::circle(0.0, 0.0, 2000));
        assert_eq!(circle.approach_progress(1000, &config), 0.0);
        assert_eq!(circle.approach_progress(1500, &config), 0.5);
        assert_eq!(circle.approach_progress(2500, &config), 1.0);
    }
}
