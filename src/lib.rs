//! Calculatrice automate : évaluation d’expressions infixes sur les réels (f64).
//!
//! Un automate à états finis lit l’entrée caractère par caractère et alimente
//! un évaluateur à deux piles qui réduit au fil de l’eau selon les précédences.

pub mod noyau;

pub use noyau::{evaluate, evaluate_traced, evaluate_with, Demarche, ErrorKind, EvalError, Limites};
