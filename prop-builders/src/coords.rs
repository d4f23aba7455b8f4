//! Coordinate templates for the `coords` attribute of `<area>`.

use std::sync::LazyLock;

use htmlprop_core::{BuildError, Result};
use regex::Regex;

static RADIUS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)(%|)$").unwrap());
static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// A shape that can be rendered as a `coords` template.
pub trait CoordsSet {
    /// Render the template, validating the shape first.
    fn try_template(&self) -> Result<String>;

    /// Render the template.
    ///
    /// # Panics
    ///
    /// Panics if the shape is malformed.
    #[track_caller]
    fn template(&self) -> String {
        self.try_template().unwrap_or_else(|e| e.fail())
    }
}

/// Rectangle given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectCoords {
    pub x_left_top: i64,
    pub y_left_top: i64,
    pub x_bottom_right: i64,
    pub y_bottom_right: i64,
}

impl RectCoords {
    pub fn new(x_left_top: i64, y_left_top: i64, x_bottom_right: i64, y_bottom_right: i64) -> Self {
        Self {
            x_left_top,
            y_left_top,
            x_bottom_right,
            y_bottom_right,
        }
    }
}

impl CoordsSet for RectCoords {
    fn try_template(&self) -> Result<String> {
        if self.x_left_top >= self.x_bottom_right {
            return Err(BuildError::RectHorizontal {
                left: self.x_left_top,
                right: self.x_bottom_right,
            });
        }
        if self.y_left_top >= self.y_bottom_right {
            return Err(BuildError::RectVertical {
                top: self.y_left_top,
                bottom: self.y_bottom_right,
            });
        }

        Ok(format!(
            "{},{},{},{}",
            self.x_left_top, self.y_left_top, self.x_bottom_right, self.y_bottom_right
        ))
    }
}

/// Circle given by its center and a radius in pixels or percent (`"50"`, `"50%"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CircleCoords {
    pub x: i64,
    pub y: i64,
    pub radius: String,
}

impl CircleCoords {
    pub fn new(x: i64, y: i64, radius: impl Into<String>) -> Self {
        Self {
            x,
            y,
            radius: radius.into(),
        }
    }
}

impl CoordsSet for CircleCoords {
    fn try_template(&self) -> Result<String> {
        if !RADIUS.is_match(&self.radius) {
            // "12%%" and "%" both fail on a '%', so the offending character
            // is whatever comes first outside [0-9], wherever it sits.
            return Err(match NON_DIGIT.find(&self.radius) {
                Some(m) => BuildError::InvalidRadius {
                    found: m.as_str().chars().next().unwrap_or_default(),
                },
                None => BuildError::EmptyRadius,
            });
        }

        Ok(format!("{},{},{}", self.x, self.y, self.radius))
    }
}

/// Polygon given by at least three `(x, y)` points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolyCoords(pub Vec<[i64; 2]>);

impl PolyCoords {
    pub fn new(points: impl IntoIterator<Item = [i64; 2]>) -> Self {
        Self(points.into_iter().collect())
    }

    /// Append a point (mutable).
    pub fn push_point(&mut self, x: i64, y: i64) -> &mut Self {
        self.0.push([x, y]);
        self
    }
}

impl CoordsSet for PolyCoords {
    fn try_template(&self) -> Result<String> {
        if self.0.len() < 3 {
            return Err(BuildError::TooFewPoints { count: self.0.len() });
        }

        Ok(self
            .0
            .iter()
            .map(|[x, y]| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect() {
        assert_eq!(RectCoords::new(0, 0, 10, 10).template(), "0,0,10,10");
        assert_eq!(RectCoords::new(-5, -5, 0, 1).template(), "-5,-5,0,1");
    }

    #[test]
    fn test_rect_order() {
        assert_eq!(
            RectCoords::new(10, 0, 0, 10).try_template(),
            Err(BuildError::RectHorizontal { left: 10, right: 0 })
        );
        assert_eq!(
            RectCoords::new(0, 5, 10, 5).try_template(),
            Err(BuildError::RectVertical { top: 5, bottom: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "the first integer must be less than the third")]
    fn test_rect_panics() {
        RectCoords::new(10, 0, 0, 10).template();
    }

    #[test]
    fn test_circle() {
        assert_eq!(CircleCoords::new(5, 5, "50%").template(), "5,5,50%");
        assert_eq!(CircleCoords::new(5, -5, "12").template(), "5,-5,12");
    }

    #[test]
    fn test_circle_invalid_radius() {
        let err = CircleCoords::new(0, 0, "abc").try_template().unwrap_err();
        assert_eq!(err, BuildError::InvalidRadius { found: 'a' });
        assert!(err.to_string().contains("'a'"));

        assert_eq!(
            CircleCoords::new(0, 0, "12px").try_template(),
            Err(BuildError::InvalidRadius { found: 'p' })
        );
        assert_eq!(
            CircleCoords::new(0, 0, "%").try_template(),
            Err(BuildError::InvalidRadius { found: '%' })
        );
        assert_eq!(
            CircleCoords::new(0, 0, "5%%").try_template(),
            Err(BuildError::InvalidRadius { found: '%' })
        );
    }

    #[test]
    fn test_circle_empty_radius() {
        assert_eq!(
            CircleCoords::new(0, 0, "").try_template(),
            Err(BuildError::EmptyRadius)
        );
    }

    #[test]
    #[should_panic(expected = "expected a digit but saw 'x' instead")]
    fn test_circle_panics() {
        CircleCoords::new(0, 0, "x1").template();
    }

    #[test]
    fn test_poly() {
        let poly = PolyCoords::new([[0, 0], [1, 1], [2, 2]]);
        assert_eq!(poly.template(), "0,0,1,1,2,2");
    }

    #[test]
    fn test_poly_push_point() {
        let mut poly = PolyCoords::default();
        poly.push_point(0, 0).push_point(10, 0);
        assert_eq!(
            poly.try_template(),
            Err(BuildError::TooFewPoints { count: 2 })
        );

        poly.push_point(5, 8);
        assert_eq!(poly.template(), "0,0,10,0,5,8");
    }

    #[test]
    fn test_template_is_idempotent() {
        let circle = CircleCoords::new(1, 2, "3");
        assert_eq!(circle.template(), circle.template());
    }
}
