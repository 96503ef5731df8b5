//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, capacité, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas d’automate, pas de piles).
//! - Actions déterministes, sans effet de bord caché.
//! - Capacité des piles bornée (1..=CAPACITE_MAX).

use calculatrice_automate::noyau::limites::{CAPACITE_DEFAUT, CAPACITE_MAX};
use calculatrice_automate::Limites;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub etapes: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub capacite: usize, // capacité de chaque pile

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            capacite: CAPACITE_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + capacité par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.capacite = CAPACITE_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute,
    /// et on garde la démarche partielle : elle montre où l’automate s’est arrêté.
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, x: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_nombre(x);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_capacite(&mut self, capacite: usize) {
        self.capacite = capacite.clamp(1, CAPACITE_MAX);
        self.focus_entree = true;
    }

    pub fn limites(&self) -> Limites {
        Limites::uniforme(self.capacite)
    }
}

/// Affichage d’un résultat : entier sans “.0”, infinis et NaN lisibles.
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "∞".to_string()
    } else if x == f64::NEG_INFINITY {
        "-∞".to_string()
    } else if x == 0.0 {
        // -0 affiché 0
        "0".to_string()
    } else {
        format!("{x}")
    }
}
