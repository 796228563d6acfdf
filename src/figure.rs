//! Figuras geometricas: lados, perimetro, area y rotacion de sus vertices.
use std::fmt;

use log::debug;
use serde::Deserialize;

use crate::{
    angle_source::{degrees_to_radians, AngleSource},
    constants::MIN_FIGURE_POINTS,
    errors::StrategyError,
    point::Point,
};

/// Informacion completa de una figura
#[derive(Debug, Clone, PartialEq)]
pub struct FigureInfo {
    pub label: &'static str,
    pub sides: (f64, f64),
    pub perimeter: f64,
    pub area: f64,
    pub rotated_points: Vec<Point>,
}

impl fmt::Display for FigureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotation: Vec<String> = self.rotated_points.iter().map(Point::to_string).collect();
        write!(
            f,
            "{}:\nPerimeter {}\nRotation [{}]",
            self.label,
            self.perimeter,
            rotation.join(", ")
        )
    }
}

pub trait Figure {
    fn name(&self) -> &'static str;

    fn full_info(
        &self,
        points: &[Point],
        angle_source: &mut dyn AngleSource,
    ) -> Result<FigureInfo, StrategyError>;
}

/// Rectangulo a partir de sus vertices en orden. Los lados salen de los tres
/// primeros puntos, sin verificar que la figura sea realmente un rectangulo.
pub struct Rectangle;

impl Rectangle {
    fn sides(a: &Point, b: &Point, c: &Point) -> (f64, f64) {
        (a.distance_to(b), b.distance_to(c))
    }
}

impl Figure for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn full_info(
        &self,
        points: &[Point],
        angle_source: &mut dyn AngleSource,
    ) -> Result<FigureInfo, StrategyError> {
        if points.len() < MIN_FIGURE_POINTS {
            return Err(StrategyError::InvalidInput {
                points: points.len(),
            });
        }
        let (width, height) = Rectangle::sides(&points[0], &points[1], &points[2]);

        let degrees = angle_source.rotation_degrees()?;
        let radians = degrees_to_radians(degrees);
        debug!(
            "[FIGURE] Rotating {} points by {} degrees ({} rad)",
            points.len(),
            degrees,
            radians
        );

        Ok(FigureInfo {
            label: self.name(),
            sides: (width, height),
            perimeter: 2.0 * width + 2.0 * height,
            area: width * height,
            rotated_points: points.iter().map(|point| point.rotated(radians)).collect(),
        })
    }
}

/// Seleccion de figura tal como aparece en el archivo de escenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Rectangle,
}

impl FigureKind {
    pub fn build(self) -> Box<dyn Figure> {
        match self {
            FigureKind::Rectangle => Box::new(Rectangle),
        }
    }
}
