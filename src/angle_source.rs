//! Fuentes del angulo de rotacion de las figuras.
//!
//! La figura no sabe de donde sale el angulo: puede ser un valor fijo del
//! escenario, una pregunta por consola o un valor aleatorio.
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    constants::{MAX_RANDOM_DEGREES, PI_APPROXIMATION, ROTATION_PROMPT},
    errors::StrategyError,
};

pub trait AngleSource {
    /// Angulo de rotacion en grados enteros
    fn rotation_degrees(&mut self) -> Result<i64, StrategyError>;
}

/// Convierte grados a radianes con pi aproximado en 3.14
pub fn degrees_to_radians(degrees: i64) -> f64 {
    degrees as f64 * (PI_APPROXIMATION / 180.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAngle(pub i64);

impl AngleSource for FixedAngle {
    fn rotation_degrees(&mut self) -> Result<i64, StrategyError> {
        Ok(self.0)
    }
}

/// Pregunta el angulo escribiendo en `output` y leyendo una linea de `input`
pub struct PromptAngleSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptAngleSource<R, W> {
    pub fn new(input: R, output: W) -> PromptAngleSource<R, W> {
        PromptAngleSource { input, output }
    }
}

/// Usa el buffer compartido de stdin, asi la entrada que sobra queda para la
/// proxima pregunta.
impl PromptAngleSource<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        PromptAngleSource::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> AngleSource for PromptAngleSource<R, W> {
    fn rotation_degrees(&mut self) -> Result<i64, StrategyError> {
        write!(self.output, "{}", ROTATION_PROMPT)
            .and_then(|_| self.output.flush())
            .map_err(|error| StrategyError::InvalidAngleSource(error.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|error| StrategyError::InvalidAngleSource(error.to_string()))?;
        if read == 0 {
            return Err(StrategyError::InvalidAngleSource(
                "no more input".to_string(),
            ));
        }

        let answer = line.trim();
        debug!("[ANGLE] Read rotation {:?}", answer);
        answer
            .parse::<i64>()
            .map_err(|_| StrategyError::InvalidAngleSource(format!("{:?} is not an integer", answer)))
    }
}

/// Angulo aleatorio entre 0 y 359 grados
pub struct RandomAngle {
    rng: StdRng,
}

impl RandomAngle {
    pub fn new() -> RandomAngle {
        RandomAngle {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> RandomAngle {
        RandomAngle {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAngle {
    fn default() -> Self {
        RandomAngle::new()
    }
}

impl AngleSource for RandomAngle {
    fn rotation_degrees(&mut self) -> Result<i64, StrategyError> {
        let degrees = self.rng.gen_range(0, MAX_RANDOM_DEGREES);
        debug!("[ANGLE] Random rotation of {} degrees", degrees);
        Ok(degrees)
    }
}
