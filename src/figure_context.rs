//! Contexto que delega en la figura actual el calculo de su informacion.
use log::debug;

use crate::{
    angle_source::AngleSource,
    errors::StrategyError,
    figure::{Figure, FigureInfo},
    point::Point,
};

pub struct FigureContext {
    figure: Box<dyn Figure>,
    angle_source: Box<dyn AngleSource>,
}

impl FigureContext {
    pub fn new(figure: Box<dyn Figure>, angle_source: Box<dyn AngleSource>) -> FigureContext {
        FigureContext {
            figure,
            angle_source,
        }
    }

    pub fn set_figure(&mut self, figure: Box<dyn Figure>) {
        self.figure = figure;
    }

    pub fn set_angle_source(&mut self, angle_source: Box<dyn AngleSource>) {
        self.angle_source = angle_source;
    }

    pub fn full_info(&mut self, points: &[Point]) -> Result<FigureInfo, StrategyError> {
        let info = self.figure.full_info(points, self.angle_source.as_mut())?;
        debug!(
            "[FIGURE] {} with sides {:?}, perimeter {} and area {}",
            info.label, info.sides, info.perimeter, info.area
        );
        Ok(info)
    }
}
