//! Tests par propriétés (proptest) : lois algébriques, puissance, degrés,
//! forme canonique et relecture de l’affichage.

use proptest::prelude::*;

use super::tests_poly::est_canonique;
use super::{lire_poly, Mono, Poly};

/* ------------------------ Générateurs ------------------------ */

fn petit_coeff() -> impl Strategy<Value = i64> {
    -9i64..=9
}

/// Polynômes canoniques : profondeur ≤ 3, quelques monômes par niveau.
/// Passent tous par from_monos (doublons et zéros compris).
fn poly() -> impl Strategy<Value = Poly> {
    let feuille = petit_coeff().prop_map(Poly::from_coeff);
    feuille.prop_recursive(3, 32, 4, |interne| {
        prop::collection::vec((0i32..5, interne), 1..4).prop_map(|termes| {
            Poly::from_monos(termes.into_iter().map(|(e, p)| Mono::new(e, p)).collect())
        })
    })
}

/// x_i comme polynôme : 1 · x_i, imbriqué i fois en x^0.
fn variable(i: usize) -> Poly {
    let mut v = Poly::from_monos(vec![Mono::new(1, Poly::from_coeff(1))]);
    for _ in 0..i {
        v = Poly::from_monos(vec![Mono::new(0, v)]);
    }
    v
}

proptest! {
    /* ------------------------ Forme canonique ------------------------ */

    #[test]
    fn operations_rendent_des_formes_canoniques(p in poly(), q in poly(), x in petit_coeff()) {
        prop_assert!(est_canonique(&p));
        prop_assert!(est_canonique(&p.add(&q)));
        prop_assert!(est_canonique(&p.mul(&q)));
        prop_assert!(est_canonique(&p.neg()));
        prop_assert!(est_canonique(&p.sub(&q)));
        prop_assert!(est_canonique(&p.pow(3)));
        prop_assert!(est_canonique(&p.at(x)));
        prop_assert!(est_canonique(&p.compose(&[q.clone()])));
    }

    /* ------------------------ Lois algébriques ------------------------ */

    #[test]
    fn add_commutative(p in poly(), q in poly()) {
        prop_assert_eq!(p.add(&q), q.add(&p));
    }

    #[test]
    fn add_associative(p in poly(), q in poly(), r in poly()) {
        prop_assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
    }

    #[test]
    fn neutres_et_absorbant(p in poly()) {
        prop_assert_eq!(p.add(&Poly::zero()), p.clone());
        prop_assert!(p.add(&p.neg()).is_zero());
        prop_assert_eq!(p.mul(&Poly::from_coeff(1)), p.clone());
        prop_assert!(p.mul(&Poly::zero()).is_zero());
    }

    #[test]
    fn mul_commutative_et_distributive(p in poly(), q in poly(), r in poly()) {
        prop_assert_eq!(p.mul(&q), q.mul(&p));
        prop_assert_eq!(p.mul(&q.add(&r)), p.mul(&q).add(&p.mul(&r)));
    }

    #[test]
    fn sub_est_add_de_l_oppose(p in poly(), q in poly()) {
        prop_assert_eq!(p.sub(&q), p.add(&q.neg()));
        prop_assert_eq!(p.neg().neg(), p);
    }

    /* ------------------------ Puissance ------------------------ */

    #[test]
    fn puissances(p in poly(), a in 0i32..3, b in 0i32..3) {
        prop_assert_eq!(p.pow(0), Poly::from_coeff(1));
        prop_assert_eq!(p.pow(a + b), p.pow(a).mul(&p.pow(b)));
        prop_assert_eq!(p.pow(1), p);
    }

    /* ------------------------ Substitutions ------------------------ */

    #[test]
    fn compose_par_les_variables_est_l_identite(p in poly()) {
        let vars: Vec<Poly> = (0..4).map(variable).collect();
        prop_assert_eq!(p.compose(&vars), p);
    }

    #[test]
    fn at_est_un_morphisme(p in poly(), q in poly(), x in petit_coeff()) {
        prop_assert_eq!(p.add(&q).at(x), p.at(x).add(&q.at(x)));
        prop_assert_eq!(p.mul(&q).at(x), p.at(x).mul(&q.at(x)));
    }

    /* ------------------------ Degrés ------------------------ */

    #[test]
    fn bornes_des_degres(p in poly(), q in poly(), i in 0usize..5) {
        prop_assert!(p.deg_by(i) <= p.deg());
        prop_assert!(p.deg() >= -1);
        if !p.is_zero() && !q.is_zero() {
            prop_assert_eq!(p.mul(&q).deg(), p.deg() + q.deg());
        }
    }

    /* ------------------------ Égalité / affichage ------------------------ */

    #[test]
    fn egalite_reflexive_symetrique(p in poly(), q in poly()) {
        prop_assert!(p.is_eq(&p.clone()));
        prop_assert_eq!(p.is_eq(&q), q.is_eq(&p));
        prop_assert_eq!(p.is_eq(&q), p.to_string() == q.to_string());
    }

    #[test]
    fn affichage_puis_lecture(p in poly()) {
        let texte = p.to_string();
        let relu = lire_poly(texte.as_bytes());
        prop_assert_eq!(relu, Ok(p));
    }
}
