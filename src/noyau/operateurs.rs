// src/noyau/operateurs.rs
//
// Table des opérateurs (statique, construite à la compilation).
//
// Règles:
// - précédences : + - => 1 ; * / => 2
// - sentinelles : '(' => 0 (sous tout opérateur), ')' => 3 (au-dessus de tout),
//   pile vide => 0 (comparaison toujours définie)
// - appliquer(a, b) : a = dernier empilé, b = le précédent => calcule `b OP a`

use num_traits::Zero;

use super::erreur::EvalError;

pub const PRE_VIDE: u8 = 0;
pub const PRE_OUVRANTE: u8 = 0;
pub const PRE_ADD: u8 = 1;
pub const PRE_SUB: u8 = 1;
pub const PRE_MUL: u8 = 2;
pub const PRE_DIV: u8 = 2;
pub const PRE_FERMANTE: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    GaucheDroite,
    /// Réservé (aucun opérateur actuel).
    DroiteGauche,
}

/// Fonction binaire pure : `(a, b) -> b OP a`.
pub type FonctionBinaire = fn(f64, f64) -> Result<f64, EvalError>;

#[derive(Debug)]
pub struct Operateur {
    pub symbole: char,
    pub precedence: u8,
    pub associativite: Associativite,
    pub appliquer: FonctionBinaire,
}

impl Operateur {
    /// Vrai pour + - * / (faux pour les marqueurs et la sentinelle).
    pub fn est_binaire(&self) -> bool {
        matches!(self.symbole, '+' | '-' | '*' | '/')
    }

    /// `self` (au sommet) doit-il être réduit avant d’empiler `entrant` ?
    pub fn reduit_avant(&self, entrant: &Operateur) -> bool {
        match entrant.associativite {
            Associativite::GaucheDroite => self.precedence >= entrant.precedence,
            Associativite::DroiteGauche => self.precedence > entrant.precedence,
        }
    }
}

fn addition(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(b + a)
}

fn soustraction(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(b - a)
}

fn multiplication(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(b * a)
}

fn division(a: f64, b: f64) -> Result<f64, EvalError> {
    if a.is_zero() {
        return Err(EvalError::MathError);
    }
    Ok(b / a)
}

// Marqueurs : jamais appliqués par l’évaluateur.
fn neutre(_a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(b)
}

pub static ADDITION: Operateur = Operateur {
    symbole: '+',
    precedence: PRE_ADD,
    associativite: Associativite::GaucheDroite,
    appliquer: addition,
};

pub static SOUSTRACTION: Operateur = Operateur {
    symbole: '-',
    precedence: PRE_SUB,
    associativite: Associativite::GaucheDroite,
    appliquer: soustraction,
};

pub static MULTIPLICATION: Operateur = Operateur {
    symbole: '*',
    precedence: PRE_MUL,
    associativite: Associativite::GaucheDroite,
    appliquer: multiplication,
};

pub static DIVISION: Operateur = Operateur {
    symbole: '/',
    precedence: PRE_DIV,
    associativite: Associativite::GaucheDroite,
    appliquer: division,
};

pub static OUVRANTE: Operateur = Operateur {
    symbole: '(',
    precedence: PRE_OUVRANTE,
    associativite: Associativite::GaucheDroite,
    appliquer: neutre,
};

pub static FERMANTE: Operateur = Operateur {
    symbole: ')',
    precedence: PRE_FERMANTE,
    associativite: Associativite::GaucheDroite,
    appliquer: neutre,
};

/// Sommet “virtuel” d’une pile d’opérateurs vide.
pub static SENTINELLE_VIDE: Operateur = Operateur {
    symbole: '\0',
    precedence: PRE_VIDE,
    associativite: Associativite::GaucheDroite,
    appliquer: neutre,
};

/// Recherche par symbole : `+ - * /` et les deux parenthèses.
pub fn lookup(symbole: char) -> Option<&'static Operateur> {
    match symbole {
        '+' => Some(&ADDITION),
        '-' => Some(&SOUSTRACTION),
        '*' => Some(&MULTIPLICATION),
        '/' => Some(&DIVISION),
        '(' => Some(&OUVRANTE),
        ')' => Some(&FERMANTE),
        _ => None,
    }
}
