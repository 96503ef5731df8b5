//! Démarche : journal pas-à-pas d’une évaluation (transitions, empilements, réductions).
//!
//! Optionnel : seul `evaluate_traced` le remplit ; l’appli l’affiche tel quel.

use std::fmt;

use super::transitions::{Action, Etat};

#[derive(Clone, Debug, PartialEq)]
pub enum Etape {
    Transition {
        position: usize,
        /// `None` = fin d’entrée.
        entree: Option<char>,
        depuis: Etat,
        vers: Etat,
        action: Action,
    },
    Operande(f64),
    Operateur(char),
    Ouvrante,
    Fermante,
    Reduction {
        b: f64,
        op: char,
        a: f64,
        resultat: f64,
    },
    Resultat(f64),
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Etape::Transition {
                position,
                entree,
                depuis,
                vers,
                action,
            } => {
                let lu = match entree {
                    Some(c) => format!("'{}'", c.escape_default()),
                    None => "<fin>".to_string(),
                };
                write!(f, "[{position}] {depuis:?} --{lu}/{action:?}--> {vers:?}")
            }
            Etape::Operande(x) => write!(f, "    empile {x}"),
            Etape::Operateur(c) => write!(f, "    empile {c}"),
            Etape::Ouvrante => write!(f, "    empile ("),
            Etape::Fermante => write!(f, "    dépile ("),
            Etape::Reduction { b, op, a, resultat } => {
                write!(f, "    réduit {b} {op} {a} = {resultat}")
            }
            Etape::Resultat(x) => write!(f, "résultat = {x}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demarche {
    pub etapes: Vec<Etape>,
}

impl Demarche {
    pub fn noter(&mut self, etape: Etape) {
        self.etapes.push(etape);
    }

    /// Nombre de réductions effectuées.
    pub fn nb_reductions(&self) -> usize {
        self.etapes
            .iter()
            .filter(|e| matches!(e, Etape::Reduction { .. }))
            .count()
    }
}

impl fmt::Display for Demarche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.etapes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
