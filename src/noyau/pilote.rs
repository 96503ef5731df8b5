// src/noyau/pilote.rs
//
// Pilote de l’automate : lit l’entrée une décision à la fois.
//
// Boucle:
// - (état, octet courant) -> transition (table partagée)
// - le gestionnaire agit (nombre, opérateur, parenthèse, erreur) et avance le curseur
// - adopte l’état suivant, jusqu’à Termine ou première erreur
//
// Espaces : un seul ' ' est avalé, et seulement juste après un nombre,
// un opérateur binaire ou ')'. Partout ailleurs l’espace est une erreur.

use tracing::trace;

use super::demarche::{Demarche, Etape};
use super::erreur::{EvalError, Raison};
use super::evaluateur::Contexte;
use super::operateurs::lookup;
use super::transitions::{table, Action, Etat};

/// Lit le plus long nombre valide à partir de `debut` :
/// `[+-]? ( chiffres ( '.' chiffres* )? | '.' chiffres+ )`.
///
/// Retourne la valeur et l’indice juste après le nombre, ou `None`
/// si rien n’a pu être lu.
pub fn lire_nombre(texte: &str, debut: usize) -> Option<(f64, usize)> {
    let octets = texte.as_bytes();
    let est_chiffre = |i: usize| octets.get(i).is_some_and(u8::is_ascii_digit);

    let mut i = debut;
    if matches!(octets.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let debut_entier = i;
    while est_chiffre(i) {
        i += 1;
    }
    let mut nb_chiffres = i - debut_entier;

    if octets.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while est_chiffre(j) {
            j += 1;
        }
        let nb_decimales = j - (i + 1);
        if nb_chiffres + nb_decimales > 0 {
            nb_chiffres += nb_decimales;
            i = j;
        }
    }

    if nb_chiffres == 0 {
        return None;
    }

    texte[debut..i].parse::<f64>().ok().map(|x| (x, i))
}

pub struct Analyseur<'a> {
    texte: &'a str,
    curseur: usize,
    etat: Etat,
    ctx: Contexte,
}

impl<'a> Analyseur<'a> {
    pub fn nouveau(texte: &'a str, ctx: Contexte) -> Self {
        Self {
            texte,
            curseur: 0,
            etat: Etat::AttenteOperande,
            ctx,
        }
    }

    /// Exécute jusqu’au bout ; rend aussi la démarche (vide si non demandée).
    /// Le contexte est consommé ici, quelle que soit l’issue.
    pub fn evaluer(mut self) -> (Result<f64, EvalError>, Demarche) {
        let resultat = self.boucle();
        let demarche = self.ctx.prendre_demarche();
        (resultat, demarche)
    }

    fn boucle(&mut self) -> Result<f64, EvalError> {
        while !self.etat.est_final() {
            let t = table().get(self.etat, self.octet_courant());

            trace!(
                position = self.curseur,
                depuis = ?self.etat,
                vers = ?t.suivant,
                action = ?t.action,
                "transition"
            );
            self.ctx.noter(Etape::Transition {
                position: self.curseur,
                entree: self.car_courant(),
                depuis: self.etat,
                vers: t.suivant,
                action: t.action,
            });

            self.executer(t.action)?;
            self.etat = t.suivant;
        }

        match self.etat {
            Etat::Termine => self.ctx.drain(self.curseur),
            _ => Err(EvalError::invalide(self.curseur, Raison::FinPrematuree)),
        }
    }

    fn octet_courant(&self) -> Option<u8> {
        self.texte.as_bytes().get(self.curseur).copied()
    }

    fn car_courant(&self) -> Option<char> {
        self.texte.get(self.curseur..)?.chars().next()
    }

    fn sauter_un_espace(&mut self) {
        if self.octet_courant() == Some(b' ') {
            self.curseur += 1;
        }
    }

    fn executer(&mut self, action: Action) -> Result<(), EvalError> {
        match action {
            Action::Nombre => self.gerer_nombre(),
            Action::Operateur => self.gerer_operateur(),
            Action::Ouvrante => self.gerer_ouvrante(),
            Action::Fermante => self.gerer_fermante(),
            Action::Rien => Ok(()),
            Action::Erreur => Err(self.erreur_ici()),
        }
    }

    fn erreur_ici(&self) -> EvalError {
        let raison = match self.car_courant() {
            Some(c) => Raison::CaractereInattendu(c),
            None => Raison::FinPrematuree,
        };
        EvalError::invalide(self.curseur, raison)
    }

    fn gerer_nombre(&mut self) -> Result<(), EvalError> {
        let (x, fin) = lire_nombre(self.texte, self.curseur)
            .ok_or_else(|| EvalError::invalide(self.curseur, Raison::LitteralInvalide))?;

        self.ctx.push_operand(x)?;
        self.curseur = fin;
        self.sauter_un_espace();
        Ok(())
    }

    fn gerer_operateur(&mut self) -> Result<(), EvalError> {
        let op = self
            .car_courant()
            .and_then(lookup)
            .filter(|op| op.est_binaire())
            .ok_or_else(|| self.erreur_ici())?;

        self.ctx.push_operator(op, self.curseur)?;
        self.curseur += 1;
        self.sauter_un_espace();
        Ok(())
    }

    fn gerer_ouvrante(&mut self) -> Result<(), EvalError> {
        self.ctx.push_open_paren()?;
        self.curseur += 1;
        Ok(())
    }

    fn gerer_fermante(&mut self) -> Result<(), EvalError> {
        self.ctx.close_paren(self.curseur)?;
        self.curseur += 1;
        self.sauter_un_espace();
        Ok(())
    }
}
