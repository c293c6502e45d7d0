// src/noyau/subst.rs
//
// Substitutions :
// - at(x)        : x0 := x (entier), le résultat peut encore dépendre de x1, x2, ...
// - compose(q)   : x0 := q[0], x1 := q[1], ... ; au-delà de q.len(), la variable disparaît
//                  (seul le terme d’exposant 0 survit).

use super::arith::coeff_pow;
use super::poly::{Coeff, Mono, Poly};

impl Poly {
    /// Valeur en x0 = x : Σ p_i · x^e_i.
    pub fn at(&self, x: Coeff) -> Poly {
        match self {
            Poly::Coeff(_) => self.clone(),
            Poly::Somme(monos) => monos.iter().fold(Poly::zero(), |acc, m| {
                let terme = m.p().mul(&Poly::from_coeff(coeff_pow(x, m.exp())));
                acc.add(&terme)
            }),
        }
    }

    /// Composition : q[0] pour la variable la plus externe, q[1] pour la suivante, etc.
    pub fn compose(&self, q: &[Poly]) -> Poly {
        let monos = match self {
            Poly::Coeff(_) => return self.clone(),
            Poly::Somme(monos) => monos,
        };

        let Some((tete, reste)) = q.split_first() else {
            // plus de substitution : x^e (e > 0) s’annule, on descend dans le terme x^0
            return match monos.first() {
                Some(m) if m.exp() == 0 => m.p().compose(&[]),
                _ => Poly::zero(),
            };
        };

        let mut termes: Vec<Mono> = Vec::new();
        for m in monos {
            let produit = m.p().compose(reste).mul(&tete.pow(m.exp()));
            match produit {
                Poly::Coeff(_) => termes.push(Mono::new(0, produit)),
                Poly::Somme(ms) => termes.extend(ms),
            }
        }

        Poly::from_monos(termes)
    }
}
