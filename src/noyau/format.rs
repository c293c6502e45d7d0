// src/noyau/format.rs
//
// Affichage (commande PRINT) :
// - constante : décimal simple, ex. -7
// - Somme     : (c0,e0)+(c1,e1)+... par exposant croissant, coefficients récursifs
//
// Le texte produit est relisible par lecture.rs.

use std::fmt;

use super::poly::Poly;

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Coeff(c) => write!(f, "{c}"),
            Poly::Somme(monos) => {
                for (i, m) in monos.iter().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    write!(f, "({},{})", m.p(), m.exp())?;
                }
                Ok(())
            }
        }
    }
}
