// src/noyau/evaluateur.rs
//
// Évaluateur à deux piles (shunting-yard contraint, réduction immédiate).
//
// Règles:
// - opérandes empilées dans l’ordre de lecture
// - empiler un opérateur réduit d’abord le sommet tant qu’il lie au moins autant
//   (rang strictement supérieur, ou égal en associativité gauche-droite)
// - '(' bloque les réductions ; ')' réduit jusqu’à la '(' correspondante
// - vidage final : réduit tout ce qui reste, refuse une '(' orpheline

use tracing::trace;

use super::demarche::{Demarche, Etape};
use super::erreur::{EvalError, QuellePile, Raison};
use super::limites::Limites;
use super::operateurs::{Operateur, OUVRANTE, SENTINELLE_VIDE};
use super::pile::PileBornee;

/// Élément de la pile des opérateurs.
#[derive(Clone, Copy, Debug)]
pub enum Marqueur {
    Operateur(&'static Operateur),
    Ouvrante,
}

impl Marqueur {
    fn operateur(self) -> &'static Operateur {
        match self {
            Marqueur::Operateur(op) => op,
            Marqueur::Ouvrante => &OUVRANTE,
        }
    }
}

/// Contexte d’une évaluation : possédé par un seul appel, libéré à sa sortie.
#[derive(Debug)]
pub struct Contexte {
    operandes: PileBornee<f64>,
    operateurs: PileBornee<Marqueur>,
    demarche: Option<Demarche>,
}

impl Contexte {
    pub fn nouveau(limites: &Limites) -> Result<Self, EvalError> {
        Ok(Self {
            operandes: PileBornee::avec_capacite(
                limites.capacite_operandes,
                QuellePile::Operandes,
            )?,
            operateurs: PileBornee::avec_capacite(
                limites.capacite_operateurs,
                QuellePile::Operateurs,
            )?,
            demarche: None,
        })
    }

    /// Active le journal pas-à-pas.
    pub fn avec_demarche(mut self) -> Self {
        self.demarche = Some(Demarche::default());
        self
    }

    pub fn noter(&mut self, etape: Etape) {
        if let Some(d) = self.demarche.as_mut() {
            d.noter(etape);
        }
    }

    pub fn prendre_demarche(&mut self) -> Demarche {
        self.demarche.take().unwrap_or_default()
    }

    pub fn nb_operandes(&self) -> usize {
        self.operandes.len()
    }

    pub fn nb_operateurs(&self) -> usize {
        self.operateurs.len()
    }

    /// Sommet vu comme opérateur : sentinelle de rang minimal si la pile est vide.
    fn sommet(&self) -> &'static Operateur {
        match self.operateurs.sommet() {
            Some(m) => m.operateur(),
            None => &SENTINELLE_VIDE,
        }
    }

    pub fn push_operand(&mut self, x: f64) -> Result<(), EvalError> {
        self.operandes.empiler(x)?;
        trace!(x, "empile opérande");
        self.noter(Etape::Operande(x));
        Ok(())
    }

    pub fn push_open_paren(&mut self) -> Result<(), EvalError> {
        self.operateurs.empiler(Marqueur::Ouvrante)?;
        trace!("empile (");
        self.noter(Etape::Ouvrante);
        Ok(())
    }

    pub fn push_operator(
        &mut self,
        op: &'static Operateur,
        position: usize,
    ) -> Result<(), EvalError> {
        loop {
            let haut = self.sommet();
            if haut.est_binaire() && self.operandes.len() >= 2 && haut.reduit_avant(op) {
                self.fold(position)?;
            } else {
                break;
            }
        }

        self.operateurs.empiler(Marqueur::Operateur(op))?;
        trace!(op = %op.symbole, "empile opérateur");
        self.noter(Etape::Operateur(op.symbole));
        Ok(())
    }

    pub fn close_paren(&mut self, position: usize) -> Result<(), EvalError> {
        loop {
            match self.operateurs.sommet().copied() {
                None => {
                    return Err(EvalError::invalide(
                        position,
                        Raison::ParentheseSansOuvrante,
                    ))
                }
                Some(Marqueur::Ouvrante) => {
                    self.operateurs.depiler();
                    trace!("dépile (");
                    self.noter(Etape::Fermante);
                    return Ok(());
                }
                Some(Marqueur::Operateur(_)) => self.fold(position)?,
            }
        }
    }

    /// Une réduction : dépile a puis b, dépile l’opérateur, empile `b OP a`.
    fn fold(&mut self, position: usize) -> Result<(), EvalError> {
        let manque = || EvalError::invalide(position, Raison::OperandeManquante);

        let op = match self.operateurs.sommet().copied() {
            Some(Marqueur::Operateur(op)) if self.operandes.len() >= 2 => op,
            _ => return Err(manque()),
        };
        self.operateurs.depiler();
        let a = self.operandes.depiler().ok_or_else(manque)?;
        let b = self.operandes.depiler().ok_or_else(manque)?;

        let resultat = (op.appliquer)(a, b)?;
        trace!(b, op = %op.symbole, a, resultat, "réduction");
        self.noter(Etape::Reduction {
            b,
            op: op.symbole,
            a,
            resultat,
        });

        self.operandes.empiler(resultat)
    }

    /// Vidage final : une seule valeur doit rester, aucune '(' ouverte.
    pub fn drain(&mut self, position: usize) -> Result<f64, EvalError> {
        while self.operandes.len() >= 2 && self.sommet().est_binaire() {
            self.fold(position)?;
        }

        if let Some(Marqueur::Ouvrante) = self.operateurs.sommet() {
            return Err(EvalError::invalide(position, Raison::ParentheseNonFermee));
        }
        if self.operandes.len() != 1 || !self.operateurs.est_vide() {
            return Err(EvalError::invalide(position, Raison::OperandeManquante));
        }

        let resultat = self
            .operandes
            .depiler()
            .ok_or_else(|| EvalError::invalide(position, Raison::OperandeManquante))?;
        self.noter(Etape::Resultat(resultat));
        Ok(resultat)
    }
}
