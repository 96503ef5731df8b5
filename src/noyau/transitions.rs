// src/noyau/transitions.rs
//
// Table de transitions de l’automate : (état, octet courant | fin) -> (état suivant, action).
//
// Construite une seule fois (OnceLock), lecture seule ensuite : partageable entre threads.
// Tout octet non listé (y compris non-ASCII) suit le défaut de l’état : Erreur.

use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Etat {
    AttenteOperande,
    AttenteOperateur,
    /// Absorbant : boucle sur lui-même, échoue toujours.
    Erreur,
    /// Terminal : l’évaluateur peut vider ses piles.
    Termine,
}

impl Etat {
    const NB: usize = 4;

    fn index(self) -> usize {
        match self {
            Etat::AttenteOperande => 0,
            Etat::AttenteOperateur => 1,
            Etat::Erreur => 2,
            Etat::Termine => 3,
        }
    }

    pub fn est_final(self) -> bool {
        matches!(self, Etat::Erreur | Etat::Termine)
    }
}

/// Gestionnaire invoqué par le pilote (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Lit un nombre (longueur variable), l’empile.
    Nombre,
    /// Empile un opérateur binaire (avec réduction éventuelle).
    Operateur,
    Ouvrante,
    Fermante,
    /// Fin d’entrée acceptée.
    Rien,
    /// Échoue toujours.
    Erreur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub suivant: Etat,
    pub action: Action,
}

const ERREUR: Transition = Transition {
    suivant: Etat::Erreur,
    action: Action::Erreur,
};

const NB_OCTETS: usize = 128;
const COLONNE_FIN: usize = NB_OCTETS;
const NB_COLONNES: usize = NB_OCTETS + 1;

pub struct TableTransitions {
    cases: [[Transition; NB_COLONNES]; Etat::NB],
    defauts: [Transition; Etat::NB],
}

impl TableTransitions {
    fn construire() -> Self {
        let mut defauts = [ERREUR; Etat::NB];
        defauts[Etat::Termine.index()] = Transition {
            suivant: Etat::Termine,
            action: Action::Rien,
        };

        let mut cases = [[ERREUR; NB_COLONNES]; Etat::NB];
        for (etat, ligne) in cases.iter_mut().enumerate() {
            ligne.fill(defauts[etat]);
        }

        let mut fixer = |etat: Etat, octet: u8, suivant: Etat, action: Action| {
            cases[etat.index()][octet as usize] = Transition { suivant, action };
        };

        // Attente d’opérande : nombre (signe compris) ou '('
        for c in b'0'..=b'9' {
            fixer(Etat::AttenteOperande, c, Etat::AttenteOperateur, Action::Nombre);
        }
        for c in [b'.', b'+', b'-'] {
            fixer(Etat::AttenteOperande, c, Etat::AttenteOperateur, Action::Nombre);
        }
        fixer(Etat::AttenteOperande, b'(', Etat::AttenteOperande, Action::Ouvrante);

        // Attente d’opérateur : binaire, ')' ou fin
        for c in [b'+', b'-', b'*', b'/'] {
            fixer(Etat::AttenteOperateur, c, Etat::AttenteOperande, Action::Operateur);
        }
        fixer(Etat::AttenteOperateur, b')', Etat::AttenteOperateur, Action::Fermante);

        cases[Etat::AttenteOperateur.index()][COLONNE_FIN] = Transition {
            suivant: Etat::Termine,
            action: Action::Rien,
        };

        Self { cases, defauts }
    }

    /// `None` = fin d’entrée.
    pub fn get(&self, etat: Etat, entree: Option<u8>) -> Transition {
        let colonne = match entree {
            None => COLONNE_FIN,
            Some(o) if (o as usize) < NB_OCTETS => o as usize,
            Some(_) => return self.defauts[etat.index()],
        };
        self.cases[etat.index()][colonne]
    }
}

static TABLE: OnceLock<TableTransitions> = OnceLock::new();

/// Table partagée du processus.
pub fn table() -> &'static TableTransitions {
    TABLE.get_or_init(TableTransitions::construire)
}
