//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : toute erreur de `try_calculate` donne exactement 0.0 via `calculate`

use std::time::{Duration, Instant};

use super::eval::try_calculate;
use super::{calculate, Operateur};

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

/* ------------------------ Génération de jetons (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(100)),
        2 => format!("-{}", rng.pick(50)),
        3 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        4 => format!("{}e{}", rng.pick(9) + 1, rng.pick(4)),
        _ => format!("{}", rng.pick(10_000)),
    }
}

fn gen_operateur(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => "*",
        1 => "/",
        n => Operateur::TOUS[(n - 2) as usize].symbole(),
    }
}

/// Jeton “sale” : ce qu’un clavier manuel peut produire.
fn gen_bruit(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => String::new(),
        1 => "?".to_string(),
        2 => "abc".to_string(),
        3 => "1..2".to_string(),
        4 => "×÷".to_string(),
        5 => "(".to_string(),
        _ => "--3".to_string(),
    }
}

fn gen_expr_bien_formee(rng: &mut Rng, paires: usize) -> String {
    let mut s = gen_nombre(rng);
    for _ in 0..paires {
        s.push(' ');
        s.push_str(gen_operateur(rng));
        s.push(' ');
        s.push_str(&gen_nombre(rng));
    }
    s
}

fn gen_expr_bruitee(rng: &mut Rng, longueur: usize) -> String {
    let mut jetons = Vec::with_capacity(longueur);
    for i in 0..longueur {
        let j = if rng.pick(4) == 0 {
            gen_bruit(rng)
        } else if i % 2 == 0 {
            gen_nombre(rng)
        } else {
            gen_operateur(rng).to_string()
        };
        jetons.push(j);
    }
    // séparateur parfois doublé
    let sep = if rng.coin() { " " } else { "  " };
    jetons.join(sep)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees_toujours_ok() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let paires = 1 + rng.pick(10) as usize;
        let expr = gen_expr_bien_formee(&mut rng, paires);

        let r = try_calculate(&expr);
        assert!(r.is_ok(), "expr bien formée refusée: {expr:?} => {r:?}");
    }
}

#[test]
fn fuzz_safe_determinisme_et_invariant_repli() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = rng_a.clone();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = rng_a.pick(12) as usize;
        let expr = gen_expr_bruitee(&mut rng_a, longueur);

        let longueur_b = rng_b.pick(12) as usize;
        let expr_b = gen_expr_bruitee(&mut rng_b, longueur_b);
        assert_eq!(expr, expr_b);

        let v = calculate(&expr);
        match try_calculate(&expr) {
            Ok(attendu) => {
                assert!(
                    v == attendu || (v.is_nan() && attendu.is_nan()),
                    "expr={expr:?}"
                );
                seen_ok += 1;
            }
            Err(_) => {
                assert_eq!(v, 0.0, "erreur non repliée: expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 5, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // 1 + 1 + ... (10 000 termes) : linéaire, pas de récursion
    let mut expr = "1".to_string();
    for _ in 1..10_000 {
        expr.push_str(" + 1");
    }
    budget(t0, max);

    assert_eq!(calculate(&expr), 10_000.0);
    budget(t0, max);
}
