// src/noyau/poly.rs
//
// Polynôme creux à plusieurs variables, coefficients entiers.
// - Coeff(c)     : polynôme constant (dont le zéro, Coeff(0))
// - Somme(monos) : Σ p_i · x^e_i, x = variable du niveau d’imbrication courant
//
// Les variables n’ont pas de nom : x0 est la variable la plus externe,
// x1 celle des coefficients de x0, etc.
//
// Forme canonique (rétablie par TOUTE opération avant de rendre la main) :
// 1. exposants deux à deux distincts dans une Somme
// 2. monômes triés par exposant croissant
// 3. aucun coefficient nul dans une Somme
// 4. Somme[(0, Coeff(c))] s’écrit Coeff(c)
// 5. une Somme vide s’écrit Coeff(0)
//
// Arithmétique des coefficients : modulo 2^64 (wrapping), partout.

use std::borrow::Cow;

/// Coefficient (plage i64).
pub type Coeff = i64;

/// Exposant : [0, i32::MAX]. Les degrés rendent -1 pour le polynôme nul.
pub type Exp = i32;

/// Un terme p · x^exp. Possède son coefficient (pas de partage).
#[derive(Clone, Debug)]
pub struct Mono {
    exp: Exp,
    p: Poly,
}

#[derive(Clone, Debug)]
pub enum Poly {
    Coeff(Coeff),
    Somme(Vec<Mono>),
}

impl Mono {
    pub fn new(exp: Exp, p: Poly) -> Self {
        Self { exp, p }
    }

    pub fn exp(&self) -> Exp {
        self.exp
    }

    pub fn p(&self) -> &Poly {
        &self.p
    }
}

impl Poly {
    /* ------------------------ Constructeurs ------------------------ */

    pub fn zero() -> Poly {
        Poly::Coeff(0)
    }

    pub fn from_coeff(c: Coeff) -> Poly {
        Poly::Coeff(c)
    }

    /// Seul point de regroupement / tri.
    ///
    /// Prend possession des monômes (coefficients déjà canoniques), additionne
    /// ceux de même exposant, retire les groupes nuls, trie, puis réduit.
    pub fn from_monos(mut monos: Vec<Mono>) -> Poly {
        monos.sort_by_key(|m| m.exp);

        let mut groupes: Vec<Mono> = Vec::with_capacity(monos.len());
        for m in monos {
            match groupes.last_mut() {
                Some(dernier) if dernier.exp == m.exp => {
                    dernier.p = dernier.p.add(&m.p);
                }
                _ => groupes.push(m),
            }
        }
        groupes.retain(|m| !m.p.is_zero());

        Poly::reduit(groupes)
    }

    /// Invariants 4 et 5 sur une liste déjà triée, sans doublon ni zéro.
    pub(crate) fn reduit(monos: Vec<Mono>) -> Poly {
        match monos.as_slice() {
            [] => Poly::zero(),
            [Mono {
                exp: 0,
                p: Poly::Coeff(c),
            }] => Poly::Coeff(*c),
            _ => Poly::Somme(monos),
        }
    }

    /* ------------------------ Tests de forme (O(1)) ------------------------ */

    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Coeff(0))
    }

    /// Monômes du niveau courant (vide pour une constante).
    pub fn monos(&self) -> &[Mono] {
        match self {
            Poly::Coeff(_) => &[],
            Poly::Somme(monos) => monos,
        }
    }

    /// Vue “Somme” : une constante c devient [(0, c)].
    /// Sert au produit, qui distribue terme à terme.
    pub(crate) fn comme_monos(&self) -> Cow<'_, [Mono]> {
        match self {
            Poly::Coeff(_) => Cow::Owned(vec![Mono::new(0, self.clone())]),
            Poly::Somme(monos) => Cow::Borrowed(monos),
        }
    }

    /* ------------------------ Degrés ------------------------ */

    /// Degré par rapport à x_var (0 = variable la plus externe), les autres fixées.
    /// -1 pour le polynôme nul, 0 pour une constante non nulle.
    pub fn deg_by(&self, var: usize) -> Exp {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Somme(monos) if var == 0 => monos.iter().map(|m| m.exp).max().unwrap_or(0),
            Poly::Somme(monos) => monos
                .iter()
                .map(|m| m.p.deg_by(var - 1))
                .fold(0, Exp::max),
        }
    }

    /// Degré total : max des exp + deg(coefficient).
    pub fn deg(&self) -> Exp {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Somme(monos) => monos
                .iter()
                .map(|m| m.exp.wrapping_add(m.p.deg()))
                .fold(0, Exp::max),
        }
    }

    /* ------------------------ Égalité structurelle ------------------------ */

    /// Égalité sur formes canoniques (donc déjà triées).
    /// Une constante n’est jamais égale à une Somme.
    pub fn is_eq(&self, q: &Poly) -> bool {
        match (self, q) {
            (Poly::Coeff(a), Poly::Coeff(b)) => a == b,
            (Poly::Somme(a), Poly::Somme(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(m, n)| m.exp == n.exp && m.p.is_eq(&n.p))
            }
            _ => false,
        }
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Poly) -> bool {
        self.is_eq(other)
    }
}

impl Eq for Poly {}
