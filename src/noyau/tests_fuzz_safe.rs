//! Tests fuzz safe : robustesse du lecteur de littéraux + déterminisme.
//!
//! But : marteler lire_poly sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - aucune entrée ne doit paniquer ; toute valeur acceptée est canonique
//!   et se relit à l’identique depuis son affichage

use std::time::{Duration, Instant};

use super::tests_poly::est_canonique;
use super::{lire_poly, ErreurLecture, Poly};

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

/* ------------------------ Génération de littéraux (bornée) ------------------------ */

fn gen_coeff(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("-{}", rng.pick(20)),
        2 => "9223372036854775807".to_string(),
        _ => format!("{}", rng.pick(20)),
    }
}

fn gen_poly(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_coeff(rng);
    }
    let n = 1 + rng.pick(3);
    let termes: Vec<String> = (0..n)
        .map(|_| format!("({},{})", gen_poly(rng, depth - 1), rng.pick(6)))
        .collect();
    termes.join("+")
}

/* ------------------------ Mutations ------------------------ */

const ALPHABET: &[u8] = b"(),+-0123456789 x";

fn muter(rng: &mut Rng, s: &str) -> Vec<u8> {
    let mut octets = s.as_bytes().to_vec();
    for _ in 0..=rng.pick(3) {
        let n = octets.len() as u32;
        match rng.pick(4) {
            0 if n > 0 => {
                octets.remove(rng.pick(n) as usize);
            }
            1 => {
                let c = ALPHABET[rng.pick(ALPHABET.len() as u32) as usize];
                octets.insert(rng.pick(n + 1) as usize, c);
            }
            2 if n > 1 => {
                let i = rng.pick(n) as usize;
                let j = rng.pick(n) as usize;
                octets.swap(i, j);
            }
            _ if n > 0 => {
                // exposant géant
                let i = rng.pick(n) as usize;
                octets.splice(i..i, b"99999999999".iter().copied());
            }
            _ => {}
        }
    }
    octets
}

/* ------------------------ Vérification ------------------------ */

fn verifier(entree: &[u8]) -> Result<Poly, ErreurLecture> {
    let res = lire_poly(entree);
    if let Ok(q) = &res {
        assert!(est_canonique(q), "non canonique: entree={:?}", String::from_utf8_lossy(entree));
        let texte = q.to_string();
        assert_eq!(lire_poly(texte.as_bytes()).as_ref(), Ok(q), "relecture: {texte}");
    }
    res
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_litteraux_generes_toujours_acceptes() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let s = gen_poly(&mut rng, 4);
        let res = verifier(s.as_bytes());
        assert!(res.is_ok(), "rejeté: {s:?} err={res:?}");
    }
}

#[test]
fn fuzz_safe_mutations_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let base = gen_poly(&mut rng, 3);
        let entree = muter(&mut rng, &base);
        match verifier(&entree) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’échecs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let sa = gen_poly(&mut a, 3);
        let sb = gen_poly(&mut b, 3);
        assert_eq!(sa, sb);
        assert_eq!(lire_poly(sa.as_bytes()), lire_poly(sb.as_bytes()));
    }
}

#[test]
fn fuzz_safe_longue_somme_et_imbrication() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 800 fois (1,0) => 800
    let somme = vec!["(1,0)"; 800].join("+");
    assert_eq!(lire_poly(somme.as_bytes()), Ok(Poly::from_coeff(800)));
    budget(t0, max);

    // x0 x1 ... x63
    let mut s = "1".to_string();
    for _ in 0..64 {
        s = format!("({s},1)");
    }
    let q = lire_poly(s.as_bytes()).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(q.deg(), 64);
    assert_eq!(q.deg_by(63), 1);
    budget(t0, max);
}
