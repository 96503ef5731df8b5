//! Noyau automate
//!
//! Organisation interne :
//! - operateurs.rs  : table statique des opérateurs (rang, associativité, fonction)
//! - transitions.rs : table (état, caractère) -> (état suivant, action)
//! - pile.rs        : pile bornée typée
//! - evaluateur.rs  : deux piles + réductions (shunting-yard contraint)
//! - pilote.rs      : automate pas-à-pas + lecture des nombres
//! - demarche.rs    : journal pas-à-pas (optionnel)
//! - limites.rs     : capacités des piles
//! - erreur.rs      : EvalError
//! - eval.rs        : API publique

pub mod demarche;
pub mod erreur;
pub mod eval;
pub mod evaluateur;
pub mod limites;
pub mod operateurs;
pub mod pile;
pub mod pilote;
pub mod transitions;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use demarche::Demarche;
pub use erreur::{ErrorKind, EvalError, QuellePile, Raison};
pub use eval::{evaluate, evaluate_traced, evaluate_with};
pub use limites::Limites;
