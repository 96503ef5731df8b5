//! Tests de propriétés (campagne) : invariants de l’évaluateur sur des familles d’expressions.
//!
//! - un seul rang (que + -, ou que * /) : égal à l’évaluation stricte gauche -> droite
//! - deux rangs sans parenthèses : égal à “termes d’abord, puis somme gauche -> droite”
//! - parenthèses redondantes autour d’un terme : sans effet
//! - bornes : imbrication exactement à la capacité, puis une de trop

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::erreur::{ErrorKind, EvalError, QuellePile};
use super::limites::{Limites, CAPACITE_DEFAUT};
use super::{evaluate, evaluate_with};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

struct Rng(u64);

impl Rng {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        self.next_u32() % n.max(1)
    }
}

/// Nombre non nul (évite la division par zéro dans les campagnes).
fn gen_litteral(rng: &mut Rng) -> String {
    let entier = 1 + rng.pick(30);
    let signe = if rng.pick(5) == 0 { "-" } else { "" };
    match rng.pick(3) {
        0 => format!("{signe}{entier}"),
        1 => format!("{signe}{entier}.5"),
        _ => format!("{signe}{entier}.25"),
    }
}

fn appliquer(b: f64, op: char, a: f64) -> f64 {
    match op {
        '+' => b + a,
        '-' => b - a,
        '*' => b * a,
        '/' => b / a,
        _ => unreachable!("opérateur {op:?}"),
    }
}

/// Suite plate : n0 op1 n1 op2 n2 ...
fn gen_suite(rng: &mut Rng, ops: &[char], n: usize) -> (String, Vec<f64>, Vec<char>) {
    let mut texte = String::new();
    let mut nombres = Vec::new();
    let mut operateurs = Vec::new();

    for i in 0..n {
        if i > 0 {
            let op = ops[rng.pick(ops.len() as u32) as usize];
            texte.push(op);
            operateurs.push(op);
        }
        let lit = gen_litteral(rng);
        nombres.push(lit.parse::<f64>().unwrap());
        texte.push_str(&lit);
    }
    (texte, nombres, operateurs)
}

fn gauche_droite(nombres: &[f64], ops: &[char]) -> f64 {
    let mut acc = nombres[0];
    for (op, x) in ops.iter().zip(&nombres[1..]) {
        acc = appliquer(acc, *op, *x);
    }
    acc
}

/// Référence deux rangs : réduit * / d’abord (gauche -> droite), puis + - (gauche -> droite).
fn reference_deux_rangs(nombres: &[f64], ops: &[char]) -> f64 {
    let mut termes = vec![nombres[0]];
    let mut additifs = Vec::new();
    for (op, x) in ops.iter().zip(&nombres[1..]) {
        match op {
            '*' | '/' => {
                let dernier = termes.len() - 1;
                termes[dernier] = appliquer(termes[dernier], *op, *x);
            }
            _ => {
                additifs.push(*op);
                termes.push(*x);
            }
        }
    }
    gauche_droite(&termes, &additifs)
}

#[test]
fn prop_un_seul_rang_additif() {
    let t0 = Instant::now();
    let mut rng = Rng(0xADD);

    for _ in 0..300 {
        budget(t0, Duration::from_millis(300));
        let n = 2 + rng.pick(12) as usize;
        let (texte, nombres, ops) = gen_suite(&mut rng, &['+', '-'], n);
        assert_eq!(evaluate(&texte), Ok(gauche_droite(&nombres, &ops)), "expr={texte:?}");
    }
}

#[test]
fn prop_un_seul_rang_multiplicatif() {
    let t0 = Instant::now();
    let mut rng = Rng(0x3171);

    for _ in 0..300 {
        budget(t0, Duration::from_millis(300));
        let n = 2 + rng.pick(10) as usize;
        let (texte, nombres, ops) = gen_suite(&mut rng, &['*', '/'], n);
        assert_eq!(evaluate(&texte), Ok(gauche_droite(&nombres, &ops)), "expr={texte:?}");
    }
}

#[test]
fn prop_deux_rangs_sans_parentheses() {
    let t0 = Instant::now();
    let mut rng = Rng(0x2_2A2);

    for _ in 0..400 {
        budget(t0, Duration::from_millis(400));
        let n = 2 + rng.pick(14) as usize;
        let (texte, nombres, ops) = gen_suite(&mut rng, &['+', '-', '*', '/'], n);
        assert_eq!(
            evaluate(&texte),
            Ok(reference_deux_rangs(&nombres, &ops)),
            "expr={texte:?}"
        );
    }
}

#[test]
fn prop_parentheses_redondantes() {
    let mut rng = Rng(0x9A2E);

    for _ in 0..200 {
        let (texte, _, _) = gen_suite(&mut rng, &['*', '/'], 3);
        let avec = format!("1+({texte})-2");
        let sans = format!("1+{texte}-2");
        assert_eq!(evaluate(&avec), evaluate(&sans), "expr={avec:?}");
    }
}

#[test]
fn prop_exemples_de_reference() {
    // soustraction et division : l’ordre compte
    assert_eq!(evaluate("8-3-2"), Ok(3.0));
    assert_eq!(evaluate("8/4/2"), Ok(1.0));
    assert_eq!(evaluate("2*3/4"), Ok(1.5));
    assert_eq!(evaluate("10-4+3"), Ok(9.0));
    assert_eq!(evaluate("1-2*3+4"), Ok(-1.0));
    assert_eq!(evaluate("1 - 2 * 3 + 4"), Ok(-1.0));
}

#[test]
fn prop_imbrication_a_la_borne() {
    let n = CAPACITE_DEFAUT;
    let pile_pleine = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&pile_pleine), Ok(7.0));

    let une_de_trop = format!("{}7{}", "(".repeat(n + 1), ")".repeat(n + 1));
    assert_eq!(
        evaluate(&une_de_trop),
        Err(EvalError::CapacityExceeded {
            pile: QuellePile::Operateurs,
            capacite: n
        })
    );
}

#[test]
fn prop_borne_configurable() {
    for cap in [1usize, 2, 5, 17] {
        let limites = Limites::uniforme(cap);
        let ok = format!("{}1{}", "(".repeat(cap), ")".repeat(cap));
        let ko = format!("{}1{}", "(".repeat(cap + 1), ")".repeat(cap + 1));
        assert_eq!(evaluate_with(&ok, &limites), Ok(1.0), "cap={cap}");
        assert_eq!(
            evaluate_with(&ko, &limites).map_err(|e| e.kind()),
            Err(ErrorKind::CapacityExceeded),
            "cap={cap}"
        );
    }
}
