// src/noyau/arith.rs
//
// Arithmétique exacte sur Poly : +, ×, −, puissance.
// - Entrées jamais modifiées (on clone ce qu’on garde)
// - Sorties toujours canoniques (voir poly.rs)
// - Coefficients en wrapping (i64 modulo 2^64)

use num_traits::{One, Zero};

use super::poly::{Coeff, Exp, Mono, Poly};

impl Poly {
    /* ------------------------ Somme ------------------------ */

    pub fn add(&self, q: &Poly) -> Poly {
        match (self, q) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_add(*b)),
            (Poly::Coeff(c), Poly::Somme(monos)) | (Poly::Somme(monos), Poly::Coeff(c)) => {
                ajoute_coeff(monos, *c)
            }
            (Poly::Somme(a), Poly::Somme(b)) => Poly::reduit(fusionne(a, b)),
        }
    }

    /* ------------------------ Produit ------------------------ */

    /// Distribue chaque terme de self sur chaque terme de q (quadratique par niveau),
    /// puis regroupe via from_monos.
    pub fn mul(&self, q: &Poly) -> Poly {
        if let (Poly::Coeff(a), Poly::Coeff(b)) = (self, q) {
            return Poly::Coeff(a.wrapping_mul(*b));
        }
        if self.is_zero() || q.is_zero() {
            return Poly::zero();
        }

        let gauche = self.comme_monos();
        let droite = q.comme_monos();

        let mut produits = Vec::with_capacity(gauche.len() * droite.len());
        for a in gauche.iter() {
            for b in droite.iter() {
                let p = a.p().mul(b.p());
                if !p.is_zero() {
                    produits.push(Mono::new(a.exp().wrapping_add(b.exp()), p));
                }
            }
        }

        Poly::from_monos(produits)
    }

    /* ------------------------ Opposé / différence ------------------------ */

    pub fn neg(&self) -> Poly {
        match self {
            Poly::Coeff(c) => Poly::Coeff(c.wrapping_neg()),
            Poly::Somme(monos) => Poly::Somme(
                monos
                    .iter()
                    .map(|m| Mono::new(m.exp(), m.p().neg()))
                    .collect(),
            ),
        }
    }

    pub fn sub(&self, q: &Poly) -> Poly {
        self.add(&q.neg())
    }

    /* ------------------------ Puissance ------------------------ */

    /// Exponentiation rapide. pow(p, 0) = 1, y compris pour p = 0.
    pub fn pow(&self, exp: Exp) -> Poly {
        debug_assert!(exp >= 0, "exposant négatif: {exp}");

        let mut acc = Poly::one();
        let mut base = self.clone();
        let mut e = exp;

        while e > 0 {
            if (e & 1) == 1 {
                acc = Poly::mul(&acc, &base);
            }
            e >>= 1;
            if e > 0 {
                base = Poly::mul(&base, &base);
            }
        }
        acc
    }
}

/// Puissance rapide sur les coefficients (wrapping).
pub(crate) fn coeff_pow(mut x: Coeff, mut exp: Exp) -> Coeff {
    debug_assert!(exp >= 0);

    let mut acc: Coeff = 1;
    while exp > 0 {
        if (exp & 1) == 1 {
            acc = acc.wrapping_mul(x);
        }
        x = x.wrapping_mul(x);
        exp >>= 1;
    }
    acc
}

/* ------------------------ Helpers internes ------------------------ */

/// Somme + constante : fusion dans le terme x^0 (s’il existe), sinon insertion en tête.
fn ajoute_coeff(monos: &[Mono], c: Coeff) -> Poly {
    let mut res = monos.to_vec();
    if c == 0 {
        return Poly::reduit(res);
    }

    match res.first() {
        Some(m) if m.exp() == 0 => {
            let p = m.p().add(&Poly::Coeff(c));
            if p.is_zero() {
                res.remove(0);
            } else {
                res[0] = Mono::new(0, p);
            }
        }
        _ => res.insert(0, Mono::new(0, Poly::Coeff(c))),
    }

    Poly::reduit(res)
}

/// Fusion linéaire de deux listes triées par exposant.
/// Exposants égaux : somme récursive, abandonnée si nulle.
fn fusionne(a: &[Mono], b: &[Mono]) -> Vec<Mono> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (ma, mb) = (&a[i], &b[j]);
        if ma.exp() == mb.exp() {
            let p = ma.p().add(mb.p());
            if !p.is_zero() {
                out.push(Mono::new(ma.exp(), p));
            }
            i += 1;
            j += 1;
        } else if ma.exp() < mb.exp() {
            out.push(ma.clone());
            i += 1;
        } else {
            out.push(mb.clone());
            j += 1;
        }
    }

    // reste de l’une ou l’autre
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/* ------------------------ Opérateurs ------------------------ */

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, q: Poly) -> Poly {
        Poly::add(&self, &q)
    }
}

impl<'a> std::ops::Add<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn add(self, q: &'a Poly) -> Poly {
        Poly::add(self, q)
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, q: Poly) -> Poly {
        Poly::sub(&self, &q)
    }
}

impl<'a> std::ops::Sub<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn sub(self, q: &'a Poly) -> Poly {
        Poly::sub(self, q)
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, q: Poly) -> Poly {
        Poly::mul(&self, &q)
    }
}

impl<'a> std::ops::Mul<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn mul(self, q: &'a Poly) -> Poly {
        Poly::mul(self, q)
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly::neg(&self)
    }
}

impl std::ops::Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly::neg(self)
    }
}

impl Zero for Poly {
    fn zero() -> Poly {
        Poly::Coeff(0)
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Poly {
        Poly::Coeff(1)
    }
}
