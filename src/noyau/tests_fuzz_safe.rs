//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’automate sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - entrées valides ET bruitées : jamais de panique, seulement Ok ou une erreur classée
//! - invariant clé : même texte => même sortie (appels successifs, threads concurrents)

use std::time::{Duration, Instant};

use super::erreur::{ErrorKind, EvalError};
use super::limites::Limites;
use super::{evaluate, evaluate_with};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(20);
    let signe = match rng.pick(6) {
        0 => "-",
        1 => "+",
        _ => "",
    };
    if rng.coin() {
        format!("{signe}{entier}")
    } else {
        format!("{signe}{entier}.{}", rng.pick(100))
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    let op = gen_op(rng);

    // espaces seulement aux positions tolérées (après un terme, après l’opérateur)
    let sep = if rng.coin() { " " } else { "" };
    let e = format!("{a}{sep}{op}{sep}{b}");
    if rng.coin() {
        format!("({e})")
    } else {
        e
    }
}

/// Bruit : alphabet complet + quelques intrus.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '7', '9', '.', '+', '-', '*', '/', '(', ')', ' ', ' ', 'e', 'x', '\t', 'π',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_valides() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match evaluate(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // syntaxe générée valide : seule la division par zéro est admise
                assert_eq!(e, EvalError::MathError, "expr={expr:?}");
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_invalid = 0usize;

    for i in 0..2000 {
        budget(t0, max);

        let len = 1 + (i % 24);
        let expr = gen_bruit(&mut rng, len);

        if let Err(e) = evaluate(&expr) {
            assert_ne!(e.kind(), ErrorKind::AllocationFailed, "expr={expr:?}");
            assert_ne!(e.kind(), ErrorKind::CapacityExceeded, "expr={expr:?}");
            if e.kind() == ErrorKind::InvalidExpression {
                seen_invalid += 1;
            }
        }
    }

    assert!(seen_invalid > 1000, "le bruit devrait surtout échouer: {seen_invalid}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut rng = Rng::new(0x5EED);
    let exprs: Vec<String> = (0..200)
        .map(|i| {
            if i % 2 == 0 {
                gen_expr(&mut rng, 4)
            } else {
                gen_bruit(&mut rng, 12)
            }
        })
        .collect();

    let premier: Vec<_> = exprs.iter().map(|e| evaluate(e)).collect();
    let second: Vec<_> = exprs.iter().map(|e| evaluate(e)).collect();

    for ((e, a), b) in exprs.iter().zip(&premier).zip(&second) {
        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={e:?}"),
            (Err(x), Err(y)) => assert_eq!(x, y, "expr={e:?}"),
            _ => panic!("résultats différents pour {e:?}: {a:?} / {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_threads_concurrents() {
    let mut rng = Rng::new(0xFACADE);
    let exprs: Vec<String> = (0..64).map(|_| gen_expr(&mut rng, 4)).collect();
    let reference: Vec<_> = exprs.iter().map(|e| evaluate(e)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| exprs.iter().map(|e| evaluate(e)).collect::<Vec<_>>()))
            .collect();

        for h in handles {
            let obtenu = h.join().unwrap_or_else(|_| panic!("thread en panique"));
            assert_eq!(obtenu.len(), reference.len());
            for (a, b) in obtenu.iter().zip(&reference) {
                assert_eq!(a.as_ref().map(|x| x.to_bits()), b.as_ref().map(|x| x.to_bits()));
            }
        }
    });
}

#[test]
fn fuzz_safe_capacites_minuscules() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xD1CE);
    let limites = Limites {
        capacite_operandes: 2,
        capacite_operateurs: 2,
    };

    for _ in 0..200 {
        budget(t0, max);
        let expr = gen_expr(&mut rng, 4);

        // jamais de panique ; si ça passe avec 2/2, le résultat est celui des limites par défaut
        match evaluate_with(&expr, &limites) {
            Ok(x) => assert_eq!(evaluate(&expr).map(f64::to_bits), Ok(x.to_bits())),
            Err(e) => assert!(
                matches!(
                    e.kind(),
                    ErrorKind::CapacityExceeded | ErrorKind::MathError
                ),
                "expr={expr:?} err={e}"
            ),
        }
    }
}
