//! Chart text parser.
//!
//! The format is line oriented: `[Section]` headers, `Key: value` metadata,
//! and comma-separated records in `[Events]`, `[TimingPoints]` and
//! `[HitObjects]`. Malformed records are skipped rather than failing the
//! whole chart.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::timing::{DEFAULT_SLIDER_DURATION_MS, DEFAULT_SLIDER_MULTIPLIER, slider_duration};
use super::types::{Beatmap, ChartMetadata, HitObjectDescriptor, TimingPoint};
use crate::error::Result;
use crate::object::Point;

/// `x,y,time,type,hitsound` are required on every hit-object record
const MIN_HIT_OBJECT_FIELDS: usize = 5;

const CIRCLE_BIT: u32 = 1 << 0;
const SLIDER_BIT: u32 = 1 << 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    KeyValue,
    Events,
    TimingPoints,
    HitObjects,
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name {
            "Events" => Self::Events,
            "TimingPoints" => Self::TimingPoints,
            "HitObjects" => Self::HitObjects,
            _ => Self::KeyValue,
        }
    }
}

/// Hit object before slider durations are resolved against timing points
enum RawObject {
    Circle {
        position: Point,
        time: i64,
    },
    Slider {
        position: Point,
        time: i64,
        control_points: Vec<Point>,
        repeats: u32,
        pixel_length: Option<f64>,
    },
}

/// Parse chart text into a [`Beatmap`].
///
/// Pure and deterministic: the same text always yields the same beatmap.
pub fn parse(text: &str) -> Beatmap {
    let mut metadata = ChartMetadata {
        slider_multiplier: DEFAULT_SLIDER_MULTIPLIER,
        ..Default::default()
    };
    let mut timing_points = Vec::new();
    let mut raw_objects = Vec::new();
    let mut section = Section::KeyValue;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = Section::from_header(name.trim());
            continue;
        }

        match section {
            Section::HitObjects => match parse_hit_object(line) {
                Ok(object) => raw_objects.push(object),
                Err(reason) => debug!("Skipping hit object on line {}: {}", index + 1, reason),
            },
            Section::TimingPoints => match parse_timing_point(line) {
                Some(point) => timing_points.push(point),
                None => debug!("Skipping timing point on line {}", index + 1),
            },
            Section::Events => {
                if metadata.background_filename.is_none() {
                    metadata.background_filename = parse_background(line);
                }
            }
            Section::KeyValue => {
                if let Some((key, value)) = line.split_once(':') {
                    apply_metadata(&mut metadata, key.trim(), value.trim());
                }
            }
        }
    }

    timing_points.sort_by_key(|p| p.time);

    let mut objects: Vec<HitObjectDescriptor> = raw_objects
        .into_iter()
        .map(|raw| resolve_object(raw, &timing_points, metadata.slider_multiplier))
        .collect();
    // Stable: objects sharing a start time keep their parse order
    objects.sort_by_key(|o| o.start_time);

    Beatmap {
        metadata,
        objects,
        timing_points,
    }
}

/// Read and parse a chart file.
///
/// The file is decoded as UTF-8 (BOM aware); invalid sequences are replaced.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Beatmap> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        warn!("Chart {:?} contains invalid UTF-8, replaced", path);
    }

    let beatmap = parse(&text);
    info!(
        "Parsed {:?}: {} objects ({} circles, {} sliders)",
        path.file_name().unwrap_or(path.as_os_str()),
        beatmap.objects.len(),
        beatmap.circle_count(),
        beatmap.slider_count()
    );
    Ok(beatmap)
}

fn apply_metadata(metadata: &mut ChartMetadata, key: &str, value: &str) {
    match key {
        "AudioFilename" if !value.is_empty() => metadata.audio_filename = Some(value.to_string()),
        "Title" => metadata.title = value.to_string(),
        "Artist" => metadata.artist = value.to_string(),
        "Creator" => metadata.creator = value.to_string(),
        "Version" => metadata.version = value.to_string(),
        "SliderMultiplier" => {
            if let Ok(multiplier) = value.parse::<f64>()
                && multiplier > 0.0
            {
                metadata.slider_multiplier = multiplier;
            }
        }
        _ => {}
    }
}

/// Background event: `0,0,"file.jpg",xOffset,yOffset`
fn parse_background(line: &str) -> Option<String> {
    let mut parts = line.split(',').map(str::trim);
    if parts.next()? != "0" || parts.next()? != "0" {
        return None;
    }
    let file = parts.next()?.trim_matches('"');
    (!file.is_empty()).then(|| file.to_string())
}

fn parse_timing_point(line: &str) -> Option<TimingPoint> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 2 {
        return None;
    }
    let time = parts[0].parse::<f64>().ok()?.round() as i64;
    let beat_length = parts[1].parse::<f64>().ok()?;
    if !beat_length.is_finite() {
        return None;
    }
    // Pre-v6 charts omit the flag; every point is uninherited there
    let uninherited = parts.get(6).is_none_or(|flag| *flag != "0");
    Some(TimingPoint {
        time,
        beat_length,
        uninherited: uninherited && beat_length > 0.0,
    })
}

fn parse_hit_object(line: &str) -> std::result::Result<RawObject, &'static str> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < MIN_HIT_OBJECT_FIELDS {
        return Err("too few fields");
    }

    let x = parse_coordinate(parts[0]).ok_or("invalid x")?;
    let y = parse_coordinate(parts[1]).ok_or("invalid y")?;
    let time = parts[2].parse::<i64>().map_err(|_| "invalid time")?;
    let object_type = parts[3].parse::<u32>().map_err(|_| "invalid type")?;
    if time < 0 {
        return Err("negative time");
    }
    let position = Point::new(x, y);

    if object_type & SLIDER_BIT != 0 {
        let control_points = parts
            .get(5)
            .map(|field| parse_control_points(field))
            .unwrap_or_default();
        let repeats = parts
            .get(6)
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(1)
            .max(1);
        let pixel_length = parts.get(7).and_then(|s| s.parse::<f64>().ok());
        Ok(RawObject::Slider {
            position,
            time,
            control_points,
            repeats,
            pixel_length,
        })
    } else if object_type & CIRCLE_BIT != 0 {
        Ok(RawObject::Circle { position, time })
    } else {
        Err("unsupported object type")
    }
}

fn parse_coordinate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `B|x1:y1|x2:y2|...` → control points; the curve type is ignored
fn parse_control_points(field: &str) -> Vec<Point> {
    field
        .split('|')
        .skip(1)
        .filter_map(|pair| {
            let (x, y) = pair.split_once(':')?;
            Some(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
        })
        .collect()
}

fn resolve_object(
    raw: RawObject,
    timing_points: &[TimingPoint],
    slider_multiplier: f64,
) -> HitObjectDescriptor {
    match raw {
        RawObject::Circle { position, time } => {
            HitObjectDescriptor::circle(position.x, position.y, time)
        }
        RawObject::Slider {
            position,
            time,
            control_points,
            repeats,
            pixel_length,
        } => {
            let duration = pixel_length
                .and_then(|length| {
                    slider_duration(timing_points, slider_multiplier, time, length, repeats)
                })
                .unwrap_or(DEFAULT_SLIDER_DURATION_MS);
            HitObjectDescriptor::slider(
                position.x,
                position.y,
                time,
                control_points,
                repeats,
                duration,
            )
        }
    }
}
