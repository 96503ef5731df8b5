//! Noyau — évaluation (API publique)
//!
//! texte -> automate (transitions + gestionnaires) -> deux piles -> vidage -> f64
//!
//! Chaque appel crée son propre contexte et le libère à la sortie, succès ou échec.
//! Les tables (opérateurs, transitions) sont partagées en lecture seule.

use tracing::debug;

use super::demarche::Demarche;
use super::erreur::EvalError;
use super::evaluateur::Contexte;
use super::limites::Limites;
use super::pilote::Analyseur;

/// Évalue une expression avec les limites par défaut.
///
/// ```
/// use calculatrice_automate::evaluate;
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert!(evaluate("10/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with(expression, &Limites::default())
}

/// Évalue une expression avec des capacités de piles choisies.
pub fn evaluate_with(expression: &str, limites: &Limites) -> Result<f64, EvalError> {
    let ctx = Contexte::nouveau(limites)?;
    let (resultat, _) = Analyseur::nouveau(expression, ctx).evaluer();
    journaliser(expression, &resultat);
    resultat
}

/// Comme [`evaluate_with`], plus la démarche pas-à-pas (remplie même en cas d’échec).
pub fn evaluate_traced(expression: &str, limites: &Limites) -> (Result<f64, EvalError>, Demarche) {
    let ctx = match Contexte::nouveau(limites) {
        Ok(ctx) => ctx.avec_demarche(),
        Err(e) => {
            journaliser(expression, &Err(e.clone()));
            return (Err(e), Demarche::default());
        }
    };

    let (resultat, demarche) = Analyseur::nouveau(expression, ctx).evaluer();
    journaliser(expression, &resultat);
    (resultat, demarche)
}

fn journaliser(expression: &str, resultat: &Result<f64, EvalError>) {
    match resultat {
        Ok(x) => debug!(expression, resultat = x, "évaluation réussie"),
        Err(e) => debug!(expression, erreur = %e, kind = ?e.kind(), "évaluation échouée"),
    }
}
