//! Estrategias con las que el barista atiende a los clientes.
use serde::Deserialize;

use crate::{
    constants::{
        BEST_DRINK_MIN_AMOUNT, CAPPUCCINO_MIN_AMOUNT, ESPRESSO_MIN_AMOUNT, FINE_COFFEE_MIN_AMOUNT,
    },
    mood::Mood,
    order::Drink,
};

/// Forma de atender un pedido. Primero se decide si se atiende segun el humor
/// del jefe y, si se atiende, que se prepara con el monto pagado.
pub trait OrderStrategy {
    fn accepts_order(&self, mood: Mood) -> bool;

    fn prepare(&self, amount: i64) -> Drink;

    fn name(&self) -> &'static str;
}

/// Atiende salvo que convenga alejarse del jefe, y siempre sirve lo mejor.
pub struct GoodStrategy;

impl OrderStrategy for GoodStrategy {
    fn accepts_order(&self, mood: Mood) -> bool {
        match mood {
            Mood::Good | Mood::Bad => true,
            Mood::BetterStayAway => false,
        }
    }

    fn prepare(&self, _amount: i64) -> Drink {
        Drink::BestPossible
    }

    fn name(&self) -> &'static str {
        "good"
    }
}

/// Solo atiende con el jefe de mal humor, y sirve agua.
pub struct BadStrategy;

impl OrderStrategy for BadStrategy {
    fn accepts_order(&self, mood: Mood) -> bool {
        match mood {
            Mood::Bad | Mood::BetterStayAway => true,
            Mood::Good => false,
        }
    }

    fn prepare(&self, _amount: i64) -> Drink {
        Drink::GlassOfWater
    }

    fn name(&self) -> &'static str {
        "bad"
    }
}

/// El humor del jefe no es problema del cliente: siempre atiende, y prepara
/// segun lo que se pago.
pub struct NormalStrategy;

impl OrderStrategy for NormalStrategy {
    fn accepts_order(&self, _mood: Mood) -> bool {
        true
    }

    fn prepare(&self, amount: i64) -> Drink {
        if amount < ESPRESSO_MIN_AMOUNT {
            Drink::PoliteDecline
        } else if amount < CAPPUCCINO_MIN_AMOUNT {
            Drink::Espresso
        } else if amount < FINE_COFFEE_MIN_AMOUNT {
            Drink::Cappuccino
        } else if amount < BEST_DRINK_MIN_AMOUNT {
            Drink::FineCoffee
        } else {
            Drink::BestPossible
        }
    }

    fn name(&self) -> &'static str {
        "normal"
    }
}

/// Seleccion de estrategia tal como aparece en el archivo de escenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Good,
    Bad,
    Normal,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn OrderStrategy> {
        match self {
            StrategyKind::Good => Box::new(GoodStrategy),
            StrategyKind::Bad => Box::new(BadStrategy),
            StrategyKind::Normal => Box::new(NormalStrategy),
        }
    }
}
