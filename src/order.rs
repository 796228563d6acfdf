//! Resultado de tomar un pedido
use std::fmt;

/// Lo que prepara el barista. Las variantes de la escala normal estan
/// ordenadas de menor a mayor calidad; `GlassOfWater` queda por fuera de esa escala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Drink {
    PoliteDecline,
    Espresso,
    Cappuccino,
    FineCoffee,
    BestPossible,
    GlassOfWater,
}

impl Drink {
    pub fn description(&self) -> &'static str {
        match self {
            Drink::PoliteDecline => "Politely decline the customer's order",
            Drink::Espresso => "Make an espresso",
            Drink::Cappuccino => "Make a cappuccino",
            Drink::FineCoffee => "Make a fine coffee",
            Drink::BestPossible => "The best possible drink!",
            Drink::GlassOfWater => "A glass of water will do!",
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Served(Drink),
    Ignored,
}

impl fmt::Display for OrderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderOutcome::Served(drink) => write!(f, "{}", drink),
            OrderOutcome::Ignored => write!(f, "Pretend not to notice the customer!"),
        }
    }
}

/// Registro de un pedido: cuanto pago el cliente y que se hizo con el pedido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderReport {
    pub amount: i64,
    pub outcome: OrderOutcome,
}

impl OrderReport {
    pub fn new(amount: i64, outcome: OrderOutcome) -> OrderReport {
        OrderReport { amount, outcome }
    }

    pub fn payment_notice(&self) -> String {
        format!("Customer pays {} for the order", self.amount)
    }

    /// Notificaciones en el orden en que se emiten
    pub fn lines(&self) -> Vec<String> {
        vec![self.payment_notice(), self.outcome.to_string()]
    }
}
