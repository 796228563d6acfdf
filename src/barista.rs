//! Barista de la cafeteria. Delega en su estrategia actual la decision de
//! atender y lo que se prepara.
use log::debug;

use crate::{
    mood::Mood,
    order::{OrderOutcome, OrderReport},
    strategy::OrderStrategy,
};

/// Tiene el humor actual del jefe y la estrategia actual. Ambos se pueden
/// reemplazar en cualquier momento; no se guarda historial de pedidos.
pub struct Barista {
    strategy: Box<dyn OrderStrategy>,
    mood: Mood,
}

/// Notificacion del humor con el que arranca el jefe
pub fn initial_mood_notice(mood: Mood) -> String {
    format!("Chief's initial mood: {}", mood)
}

impl Barista {
    pub fn new(strategy: Box<dyn OrderStrategy>, mood: Mood) -> Barista {
        debug!("[BARISTA] {}", initial_mood_notice(mood));
        Barista { strategy, mood }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Cambia el humor del jefe y devuelve la notificacion del cambio
    pub fn set_mood(&mut self, mood: Mood) -> String {
        let notice = format!("Chief's current mood: {}", mood);
        debug!("[BARISTA] {}", notice);
        self.mood = mood;
        notice
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn OrderStrategy>) {
        debug!(
            "[BARISTA] Strategy changed from {} to {}",
            self.strategy_name(),
            strategy.name()
        );
        self.strategy = strategy;
    }

    pub fn take_order(&self, amount: i64) -> OrderReport {
        let outcome = if self.strategy.accepts_order(self.mood) {
            OrderOutcome::Served(self.strategy.prepare(amount))
        } else {
            OrderOutcome::Ignored
        };
        let report = OrderReport::new(amount, outcome);
        for line in report.lines() {
            debug!("[BARISTA] {}", line);
        }
        report
    }
}
