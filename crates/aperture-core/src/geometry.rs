//! Plain layout geometry shared by the controllers.
//!
//! Units are abstract pixels; the terminal host maps one cell to 8 x 16 units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A position in document or viewport space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Whether the point lies inside the box (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Overlapping region of two boxes, `None` when they do not touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Move the box by the given offsets
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Grow (positive) or shrink (negative) each edge by the margin
    pub fn with_margin(&self, margin: &RootMargin) -> Rect {
        let left = self.left - margin.left;
        let top = self.top - margin.top;
        let right = self.right() + margin.right;
        let bottom = self.bottom() + margin.bottom;
        Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    /// Fraction of `self` that lies within `root`, in `[0, 1]`
    ///
    /// A zero-area target counts as fully visible when it touches the root,
    /// matching how browsers report degenerate targets.
    pub fn visible_fraction(&self, root: &Rect) -> f64 {
        let Some(overlap) = self.intersection(root) else {
            return 0.0;
        };
        let area = self.area();
        if area <= 0.0 {
            return 1.0;
        }
        (overlap.area() / area).clamp(0.0, 1.0)
    }
}

/// Adjustment applied to the observing root before intersection tests
///
/// Positive values expand the root outward on that edge, negative values
/// shrink it. Written in config the CSS way: `"0px 0px -100px 0px"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for RootMargin {
    /// Trigger slightly before the natural entry point
    fn default() -> Self {
        Self::new(0.0, 0.0, -100.0, 0.0)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl FromStr for RootMargin {
    type Err = String;

    /// Parse one to four CSS-style lengths (`px` suffix optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|part| {
                let number = part.strip_suffix("px").unwrap_or(part);
                number
                    .parse::<f64>()
                    .map_err(|_| format!("invalid margin length: {part}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Self::new(*all, *all, *all, *all)),
            [vertical, horizontal] => Ok(Self::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            _ => Err(format!("expected 1 to 4 margin values, got {}", values.len())),
        }
    }
}

impl Serialize for RootMargin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

// Accept either a CSS-style string or a table with named edges
impl<'de> Deserialize<'de> for RootMargin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct RootMarginVisitor;

        impl<'de> Visitor<'de> for RootMarginVisitor {
            type Value = RootMargin;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a margin string like \"0px 0px -100px 0px\" or a table of edges")
            }

            fn visit_str<E>(self, value: &str) -> Result<RootMargin, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }

            fn visit_map<M>(self, mut map: M) -> Result<RootMargin, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut margin = RootMargin::ZERO;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margin.top = map.next_value()?,
                        "right" => margin.right = map.next_value()?,
                        "bottom" => margin.bottom = map.next_value()?,
                        "left" => margin.left = map.next_value()?,
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(margin)
            }
        }

        deserializer.deserialize_any(RootMarginVisitor)
    }
}
