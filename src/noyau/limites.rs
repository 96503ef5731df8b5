//! Limites d’une évaluation (capacités des deux piles).

/// Capacité par défaut de chaque pile (100 opérandes, 100 opérateurs).
pub const CAPACITE_DEFAUT: usize = 100;

/// Garde-fou pour les réglages venant de l’UI.
pub const CAPACITE_MAX: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub capacite_operandes: usize,
    pub capacite_operateurs: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            capacite_operandes: CAPACITE_DEFAUT,
            capacite_operateurs: CAPACITE_DEFAUT,
        }
    }
}

impl Limites {
    /// Même capacité pour les deux piles, bornée à `1..=CAPACITE_MAX`.
    pub fn uniforme(capacite: usize) -> Self {
        let c = capacite.clamp(1, CAPACITE_MAX);
        Self {
            capacite_operandes: c,
            capacite_operateurs: c,
        }
    }
}
