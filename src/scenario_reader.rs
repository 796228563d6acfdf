//! Lectura y ejecucion de un escenario de la cafeteria y de las figuras.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{error, info};
use serde::Deserialize;

use crate::{
    angle_source::{AngleSource, FixedAngle, PromptAngleSource, RandomAngle},
    barista::{initial_mood_notice, Barista},
    errors::StrategyError,
    figure::{FigureInfo, FigureKind},
    figure_context::FigureContext,
    mood::Mood,
    point::Point,
    strategy::StrategyKind,
};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BaristaStep {
    TakeOrder(i64),
    SetMood(Mood),
    SetStrategy(StrategyKind),
}

#[derive(Deserialize, Debug)]
pub struct BaristaScenario {
    pub strategy: StrategyKind,
    pub mood: Mood,
    #[serde(default)]
    pub steps: Vec<BaristaStep>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationConfig {
    Degrees(i64),
    #[default]
    Prompt,
    Random,
    RandomSeed(u64),
}

impl RotationConfig {
    fn angle_source(self) -> Box<dyn AngleSource> {
        match self {
            RotationConfig::Degrees(degrees) => Box::new(FixedAngle(degrees)),
            RotationConfig::Prompt => Box::new(PromptAngleSource::stdio()),
            RotationConfig::Random => Box::new(RandomAngle::new()),
            RotationConfig::RandomSeed(seed) => Box::new(RandomAngle::seeded(seed)),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct FigureScenario {
    pub figure: FigureKind,
    pub points: Vec<Point>,
    #[serde(default)]
    pub rotation: RotationConfig,
}

#[derive(Deserialize, Debug)]
pub struct Scenario {
    pub barista: Option<BaristaScenario>,
    #[serde(default)]
    pub figures: Vec<FigureScenario>,
}

pub fn read_scenario_from_file<P: AsRef<Path>>(path: P) -> Result<Scenario, StrategyError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let scenario: Scenario = serde_json::from_reader(reader)?;
    Ok(scenario)
}

/// Ejecuta los pasos del barista y devuelve las notificaciones en orden
pub fn run_barista(scenario: &BaristaScenario) -> Vec<String> {
    let mut barista = Barista::new(scenario.strategy.build(), scenario.mood);
    let mut notices = vec![initial_mood_notice(barista.mood())];
    for step in &scenario.steps {
        match *step {
            BaristaStep::TakeOrder(amount) => notices.extend(barista.take_order(amount).lines()),
            BaristaStep::SetMood(mood) => notices.push(barista.set_mood(mood)),
            BaristaStep::SetStrategy(kind) => barista.set_strategy(kind.build()),
        }
    }
    notices
}

/// Calcula la informacion de cada figura y la entrega a `report` apenas esta
/// lista, antes de pasar a la siguiente. Una figura invalida no corta el resto.
pub fn run_figures<F>(figures: &[FigureScenario], mut report: F)
where
    F: FnMut(usize, Result<FigureInfo, StrategyError>),
{
    let mut context: Option<FigureContext> = None;
    for (index, scenario) in figures.iter().enumerate() {
        let figure = scenario.figure.build();
        let angle_source = scenario.rotation.angle_source();
        let result = if let Some(context) = context.as_mut() {
            context.set_figure(figure);
            context.set_angle_source(angle_source);
            context.full_info(&scenario.points)
        } else {
            context
                .insert(FigureContext::new(figure, angle_source))
                .full_info(&scenario.points)
        };
        report(index, result);
    }
}

pub fn run_scenario<P: AsRef<Path>>(path: P) -> Result<(), StrategyError> {
    let scenario = read_scenario_from_file(path)?;
    if let Some(barista) = &scenario.barista {
        for notice in run_barista(barista) {
            println!("{}", notice);
        }
    } else {
        info!("[READER] Scenario without barista");
    }
    run_figures(&scenario.figures, |index, result| match result {
        Ok(info) => println!("{}", info),
        Err(err) => error!("[READER] Figure {} failed: {}", index, err),
    });
    info!("[READER] No more steps left");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "barista": {
            "strategy": "normal",
            "mood": "BETTER_STAY_AWAY",
            "steps": [
                {"take_order": 20},
                {"set_strategy": "bad"},
                {"take_order": 40},
                {"set_strategy": "good"},
                {"take_order": 40},
                {"set_mood": "GOOD"},
                {"take_order": 0}
            ]
        },
        "figures": [
            {"figure": "rectangle", "points": [[-4, -2], [4, -2], [4, 2], [-4, 2]], "rotation": {"degrees": 0}},
            {"figure": "rectangle", "points": [[0, 0], [1, 1]], "rotation": "random"},
            {"figure": "rectangle", "points": [[1, 0], [0, 0], [0, 1]], "rotation": {"random_seed": 7}}
        ]
    }"#;

    #[test]
    fn should_parse_the_scenario() {
        let scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        let barista = scenario.barista.unwrap();
        assert_eq!(StrategyKind::Normal, barista.strategy);
        assert_eq!(Mood::BetterStayAway, barista.mood);
        assert_eq!(BaristaStep::TakeOrder(20), barista.steps[0]);
        assert_eq!(BaristaStep::SetMood(Mood::Good), barista.steps[5]);
        assert_eq!(3, scenario.figures.len());
        assert_eq!(RotationConfig::Degrees(0), scenario.figures[0].rotation);
        assert_eq!(RotationConfig::Random, scenario.figures[1].rotation);
        assert_eq!(RotationConfig::RandomSeed(7), scenario.figures[2].rotation);
    }

    #[test]
    fn should_default_to_prompting_the_rotation() {
        let figure: FigureScenario =
            serde_json::from_str(r#"{"figure": "rectangle", "points": []}"#).unwrap();
        assert_eq!(RotationConfig::Prompt, figure.rotation);
    }

    #[test]
    fn should_replay_the_barista_notices() {
        let scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        let notices = run_barista(&scenario.barista.unwrap());
        assert_eq!(
            vec![
                "Chief's initial mood: BETTER_STAY_AWAY",
                "Customer pays 20 for the order",
                "Make a fine coffee",
                "Customer pays 40 for the order",
                "A glass of water will do!",
                "Customer pays 40 for the order",
                "Pretend not to notice the customer!",
                "Chief's current mood: GOOD",
                "Customer pays 0 for the order",
                "The best possible drink!",
            ],
            notices
        );
    }

    #[test]
    fn should_keep_going_after_an_invalid_figure() {
        let scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        let mut results = Vec::new();
        run_figures(&scenario.figures, |index, result| results.push((index, result)));
        assert_eq!(3, results.len());
        assert_eq!(
            vec![0, 1, 2],
            results.iter().map(|(index, _)| *index).collect::<Vec<_>>()
        );
        let first = results[0].1.as_ref().unwrap();
        assert_eq!(
            true,
            first.to_string().starts_with("Rectangle:\nPerimeter 24\n")
        );
        assert_eq!(
            true,
            matches!(results[1].1, Err(StrategyError::InvalidInput { points: 2 }))
        );
        assert_eq!(true, results[2].1.is_ok());
    }

    #[test]
    fn should_report_each_figure_before_computing_the_next() {
        let figures: Vec<FigureScenario> = serde_json::from_str(
            r#"[
                {"figure": "rectangle", "points": [[0, 0], [2, 0], [2, 1]], "rotation": {"degrees": 0}},
                {"figure": "rectangle", "points": [[0, 0], [3, 0], [3, 1]], "rotation": {"degrees": 0}}
            ]"#,
        )
        .unwrap();
        let mut reported = Vec::new();
        run_figures(&figures, |index, result| {
            assert_eq!(index, reported.len());
            reported.push(result.unwrap().perimeter);
        });
        assert_eq!(vec![6.0, 8.0], reported);
    }

    #[test]
    fn should_repeat_the_rotation_with_the_same_seed() {
        let figures: Vec<FigureScenario> = serde_json::from_str(
            r#"[
                {"figure": "rectangle", "points": [[1, 0], [0, 0], [0, 1]], "rotation": {"random_seed": 3}},
                {"figure": "rectangle", "points": [[1, 0], [0, 0], [0, 1]], "rotation": {"random_seed": 3}}
            ]"#,
        )
        .unwrap();
        let mut rotated = Vec::new();
        run_figures(&figures, |_, result| rotated.push(result.unwrap().rotated_points));
        assert_eq!(rotated[0], rotated[1]);
    }

    #[test]
    fn should_fail_reading_a_missing_file() {
        let result = read_scenario_from_file("this-scenario-does-not-exist.json");
        assert_eq!(
            true,
            matches!(result, Err(StrategyError::FileReaderError(_)))
        );
    }
}
