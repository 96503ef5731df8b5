// src/noyau/pile.rs
//
// Pile bornée typée.
// - capacité fixée à la création, réservée d’un seul coup (try_reserve_exact)
// - empiler au-delà de la capacité => CapacityExceeded (jamais de réallocation)
// - réservation impossible => AllocationFailed

use super::erreur::{EvalError, QuellePile};

#[derive(Debug)]
pub struct PileBornee<T> {
    elements: Vec<T>,
    capacite: usize,
    quelle: QuellePile,
}

impl<T> PileBornee<T> {
    pub fn avec_capacite(capacite: usize, quelle: QuellePile) -> Result<Self, EvalError> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacite)
            .map_err(|_| EvalError::AllocationFailed {
                pile: quelle,
                capacite,
            })?;

        Ok(Self {
            elements,
            capacite,
            quelle,
        })
    }

    pub fn empiler(&mut self, x: T) -> Result<(), EvalError> {
        if self.elements.len() >= self.capacite {
            return Err(EvalError::CapacityExceeded {
                pile: self.quelle,
                capacite: self.capacite,
            });
        }
        self.elements.push(x);
        Ok(())
    }

    pub fn depiler(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub fn sommet(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn est_vide(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }
}
