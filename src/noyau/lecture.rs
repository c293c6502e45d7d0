// src/noyau/lecture.rs
//
// Lecture d’un littéral polynôme :
//
//   Poly  := Coeff | '(' Mono ('+' Mono)* ')'
//   Mono  := Poly ',' Exp
//   Coeff := '-'? Chiffre+
//   Exp   := Chiffre+
//
// Découpage en UN passage, sans pile de parenthèses :
// - les monômes sont séparés par les '+' de profondeur 0
// - dans un monôme, la DERNIÈRE virgule rencontrée sépare le coefficient de l’exposant
// - seule la plage entière (et chaque sous-plage coefficient) doit être entourée de ( )
//
// Heuristique assumée : certaines entrées mal formées (virgules ou délimiteurs mal placés)
// sont classées autrement qu’avec une vraie analyse. Ne pas “corriger” : les diagnostics
// observables en dépendent.

use super::erreur::ErreurLecture;
use super::nombres::{est_coeff, lire_coeff, lire_exp};
use super::poly::{Mono, Poly};

/// API : texte complet -> polynôme canonique.
pub fn lire_poly(texte: &[u8]) -> Result<Poly, ErreurLecture> {
    lire_plage(texte, 0, texte.len())
}

/// Plage [debut, fin) : constante directe, sinon Somme.
fn lire_plage(s: &[u8], debut: usize, fin: usize) -> Result<Poly, ErreurLecture> {
    if est_coeff(&s[debut..fin]) {
        return lire_coeff(&s[debut..fin]).map(Poly::from_coeff);
    }
    lire_somme(s, debut, fin)
}

fn lire_somme(s: &[u8], debut: usize, fin: usize) -> Result<Poly, ErreurLecture> {
    // Sans ( ) externes, le premier contrôle de monôme échoue de toute façon.
    if fin < debut + 2 || s[debut] != b'(' || s[fin - 1] != b')' {
        return Err(ErreurLecture::Malforme);
    }

    let mut monos: Vec<Mono> = Vec::new();
    let mut i = debut;

    while i < fin {
        let debut_mono = i;
        let (fin_mono, virgule) = borne_mono(s, i, fin);

        // coefficient : [debut_mono+1, virgule) ; exposant : [virgule+1, fin_mono-1)
        let virgule = match virgule {
            Some(v) if v + 1 < fin_mono - 1 => v,
            _ => return Err(ErreurLecture::Malforme),
        };
        let champ_exp = &s[virgule + 1..fin_mono - 1];
        if !champ_exp.iter().all(u8::is_ascii_digit) || virgule <= debut_mono + 1 {
            return Err(ErreurLecture::Malforme);
        }

        let exp = lire_exp(champ_exp)?;
        let p = lire_plage(s, debut_mono + 1, virgule)?;
        monos.push(Mono::new(exp, p));

        // saute le '+'
        i = fin_mono + 1;
    }

    Ok(Poly::from_monos(monos))
}

/// Avance jusqu’au '+' de profondeur 0 (ou jusqu’à fin).
/// Rend (position d’arrêt, dernière virgule vue).
fn borne_mono(s: &[u8], mut i: usize, fin: usize) -> (usize, Option<usize>) {
    let mut profondeur: isize = 0;
    let mut virgule = None;

    while i < fin && !(s[i] == b'+' && profondeur == 0) {
        match s[i] {
            b',' => virgule = Some(i),
            b'(' => profondeur += 1,
            b')' => profondeur -= 1,
            _ => {}
        }
        i += 1;
    }
    (i, virgule)
}
