//! Parametros de configuracion de la cafeteria y de las figuras

/// Por debajo de este monto se rechaza el pedido
pub const ESPRESSO_MIN_AMOUNT: i64 = 5;

/// Monto minimo para un capuchino
pub const CAPPUCCINO_MIN_AMOUNT: i64 = 10;

/// Monto minimo para un cafe de especialidad
pub const FINE_COFFEE_MIN_AMOUNT: i64 = 20;

/// A partir de este monto se prepara la mejor bebida posible
pub const BEST_DRINK_MIN_AMOUNT: i64 = 50;

/// Aproximacion de pi usada para convertir grados a radianes.
/// No es `std::f64::consts::PI`, las rotaciones dependen de este valor.
pub const PI_APPROXIMATION: f64 = 3.14;

/// Cantidad minima de puntos para calcular los lados de una figura
pub const MIN_FIGURE_POINTS: usize = 3;

/// Archivo de escenario que se usa si no se pasa uno por parametro
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.json";

/// Mensaje que se muestra al pedir el angulo de rotacion
pub const ROTATION_PROMPT: &str = "Grade rotation: ";

/// Limite superior (exclusivo) de los angulos aleatorios, en grados
pub const MAX_RANDOM_DEGREES: i64 = 360;
