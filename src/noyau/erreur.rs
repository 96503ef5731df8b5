//! Erreurs du noyau.
//!
//! Une seule surface d’erreur pour tout `evaluate` : la première panne
//! rencontrée remonte telle quelle, aucun résultat partiel.

use thiserror::Error;

/// Quelle pile bornée est concernée par une panne de capacité / d’allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuellePile {
    Operandes,
    Operateurs,
}

impl std::fmt::Display for QuellePile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuellePile::Operandes => write!(f, "pile des opérandes"),
            QuellePile::Operateurs => write!(f, "pile des opérateurs"),
        }
    }
}

/// Cause précise d’une expression invalide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Raison {
    #[error("caractère inattendu: '{}'", .0.escape_default())]
    CaractereInattendu(char),

    #[error("fin d’expression prématurée")]
    FinPrematuree,

    #[error("nombre invalide")]
    LitteralInvalide,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseSansOuvrante,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    /// Réduction demandée sans deux opérandes (ne doit pas arriver via l’automate).
    #[error("opérande manquante")]
    OperandeManquante,
}

/// Classification nue, pour comparer deux échecs sans leurs détails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidExpression,
    MathError,
    CapacityExceeded,
    AllocationFailed,
}

/// Toutes les pannes possibles d’une évaluation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Syntaxe fautive : caractère inattendu, nombre illisible,
    /// parenthèses déséquilibrées, fin prématurée.
    #[error("expression invalide (position {position}): {raison}")]
    InvalidExpression { position: usize, raison: Raison },

    /// Division par zéro au moment de la réduction.
    #[error("division par zéro")]
    MathError,

    #[error("capacité dépassée: {pile} (max {capacite})")]
    CapacityExceeded { pile: QuellePile, capacite: usize },

    #[error("allocation impossible: {pile} (capacité {capacite})")]
    AllocationFailed { pile: QuellePile, capacite: usize },
}

impl EvalError {
    pub fn invalide(position: usize, raison: Raison) -> Self {
        EvalError::InvalidExpression { position, raison }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            EvalError::MathError => ErrorKind::MathError,
            EvalError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            EvalError::AllocationFailed { .. } => ErrorKind::AllocationFailed,
        }
    }
}
