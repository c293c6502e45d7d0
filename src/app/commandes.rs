// src/app/commandes.rs
//
// Commandes de la calculatrice (une ligne = une commande ou un littéral)
// ----------------------------------------------------------------------
// Règles de lecture d’une ligne :
// - vide, ou commençant par '#'  => ignorée
// - commençant par une lettre    => commande : MOT, ou MOT + ' ' + argument
// - sinon                        => littéral polynôme (voir noyau/lecture.rs)
//
// Arguments :
// - DEG_BY <chiffres>   (u64)
// - AT <'-'? chiffres>  (i64)
// - COMPOSE <chiffres>  (u64)
// Un argument invalide est signalé AVANT de regarder la pile.

use thiserror::Error;
use tracing::debug;

use super::etat::Calculatrice;
use crate::noyau::nombres::{lire_coeff, lire_indice};
use crate::noyau::{lire_poly, Coeff, ErreurLecture, Poly};

/// Diagnostics ; le texte est celui écrit après `ERROR <ligne> `.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCommande {
    #[error("STACK UNDERFLOW")]
    PileVide,
    #[error("WRONG COMMAND")]
    MauvaiseCommande,
    #[error("WRONG POLY")]
    MauvaisPoly,
    #[error("WRONG POLY RANGE")]
    PolyHorsBornes,
    #[error("DEG BY WRONG VARIABLE")]
    MauvaiseVariable,
    #[error("AT WRONG VALUE")]
    MauvaiseValeur,
    #[error("COMPOSE WRONG PARAMETER")]
    MauvaisParametre,
}

impl From<ErreurLecture> for ErreurCommande {
    fn from(e: ErreurLecture) -> Self {
        match e {
            ErreurLecture::Malforme => ErreurCommande::MauvaisPoly,
            ErreurLecture::HorsBornes => ErreurCommande::PolyHorsBornes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy(u64),
    At(Coeff),
    Compose(u64),
    Print,
    Pop,
}

/// Blancs au sens C : ' ' et \t \n \v \f \r.
fn est_blanc(c: u8) -> bool {
    c == b' ' || (9..=13).contains(&c)
}

impl Commande {
    /// Ligne (sans '\n' final) commençant par une lettre -> commande.
    pub fn lire(ligne: &[u8]) -> Result<Commande, ErreurCommande> {
        use ErreurCommande::*;

        let fin_mot = ligne
            .iter()
            .position(|&c| est_blanc(c))
            .unwrap_or(ligne.len());
        let (mot, reste) = ligne.split_at(fin_mot);

        if mot.contains(&0) {
            return Err(MauvaiseCommande);
        }

        // un seul espace avant l’argument ; tout autre blanc => pas d’argument lisible
        let arg = match reste {
            [] => None,
            [b' ', arg @ ..] => Some(arg),
            _ => return Err(erreur_argument(mot)),
        };

        let cmd = match (mot, arg) {
            (b"ZERO", None) => Commande::Zero,
            (b"IS_COEFF", None) => Commande::IsCoeff,
            (b"IS_ZERO", None) => Commande::IsZero,
            (b"CLONE", None) => Commande::Clone,
            (b"ADD", None) => Commande::Add,
            (b"MUL", None) => Commande::Mul,
            (b"NEG", None) => Commande::Neg,
            (b"SUB", None) => Commande::Sub,
            (b"IS_EQ", None) => Commande::IsEq,
            (b"DEG", None) => Commande::Deg,
            (b"PRINT", None) => Commande::Print,
            (b"POP", None) => Commande::Pop,

            (b"DEG_BY", Some(a)) => {
                Commande::DegBy(lire_indice(a).map_err(|_| MauvaiseVariable)?)
            }
            (b"AT", Some(a)) => Commande::At(lire_coeff(a).map_err(|_| MauvaiseValeur)?),
            (b"COMPOSE", Some(a)) => {
                Commande::Compose(lire_indice(a).map_err(|_| MauvaisParametre)?)
            }

            (_, None) => return Err(erreur_argument(mot)),
            _ => return Err(MauvaiseCommande),
        };
        Ok(cmd)
    }
}

/// Commande à argument sans argument valide => son propre diagnostic.
fn erreur_argument(mot: &[u8]) -> ErreurCommande {
    match mot {
        b"AT" => ErreurCommande::MauvaiseValeur,
        b"DEG_BY" => ErreurCommande::MauvaiseVariable,
        b"COMPOSE" => ErreurCommande::MauvaisParametre,
        _ => ErreurCommande::MauvaiseCommande,
    }
}

fn bool01(b: bool) -> String {
    let s = if b { "1" } else { "0" };
    s.to_string()
}

impl Calculatrice {
    /// Traite une ligne (sans '\n' final).
    /// Ok(Some(texte)) => à écrire sur la sortie ; Err(e) => diagnostic pour cette ligne.
    pub fn traite_ligne(&mut self, ligne: &[u8]) -> Result<Option<String>, ErreurCommande> {
        let numero = self.ligne_suivante();

        match ligne.first() {
            None | Some(b'#') => Ok(None),

            Some(c) if c.is_ascii_alphabetic() => {
                let cmd = Commande::lire(ligne)?;
                debug!(ligne = numero, ?cmd, "commande");
                self.applique(cmd)
            }

            Some(_) => {
                let p = lire_poly(ligne).inspect_err(|e| {
                    debug!(ligne = numero, erreur = %e, "littéral rejeté");
                })?;
                self.empile(p);
                Ok(None)
            }
        }
    }

    /// Exécute une commande sur la pile.
    pub fn applique(&mut self, cmd: Commande) -> Result<Option<String>, ErreurCommande> {
        let sortie = match cmd {
            Commande::Zero => {
                self.empile(Poly::zero());
                None
            }
            Commande::IsCoeff => Some(bool01(self.sommet()?.is_coeff())),
            Commande::IsZero => Some(bool01(self.sommet()?.is_zero())),
            Commande::Clone => {
                let copie = self.sommet()?.clone();
                self.empile(copie);
                None
            }

            // sommet = opérande gauche (SUB : sommet - dessous)
            Commande::Add | Commande::Mul | Commande::Sub => {
                let (p, q) = self.depile_deux()?;
                let r = match cmd {
                    Commande::Add => p.add(&q),
                    Commande::Mul => p.mul(&q),
                    _ => p.sub(&q),
                };
                self.empile(r);
                None
            }
            Commande::Neg => {
                let p = self.depile()?;
                self.empile(p.neg());
                None
            }

            Commande::IsEq => {
                let (p, q) = self.sommets()?;
                Some(bool01(p.is_eq(q)))
            }
            Commande::Deg => Some(self.sommet()?.deg().to_string()),
            Commande::DegBy(var) => {
                let var = usize::try_from(var).unwrap_or(usize::MAX);
                Some(self.sommet()?.deg_by(var).to_string())
            }

            Commande::At(x) => {
                let p = self.depile()?;
                self.empile(p.at(x));
                None
            }
            Commande::Compose(k) => {
                // base puis k substitutions ; la plus profonde remplace x0
                let mut pris = self.depile_n(k.saturating_add(1))?;
                let base = pris.remove(0);
                pris.reverse();
                self.empile(base.compose(&pris));
                None
            }

            Commande::Print => Some(self.sommet()?.to_string()),
            Commande::Pop => {
                self.depile()?;
                None
            }
        };
        Ok(sortie)
    }
}
