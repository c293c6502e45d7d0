// src/app.rs
//
// Calculatrice — module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + commandes.rs)
// - Ré-exporter Calculatrice (pour main.rs: use crate::app::Calculatrice;)
// - Fournir la boucle ligne à ligne (entrée -> sortie / diagnostics)
//
// Important:
// - Résultats sur `sortie`, diagnostics `ERROR <ligne> <message>` sur `erreurs`.
// - Aucun diagnostic n’arrête la boucle ; seule une erreur d’E/S la coupe.

pub mod commandes;
pub mod etat;


// Ré-export pratique : `use crate::app::Calculatrice;`
pub use etat::Calculatrice;

use std::io::{self, BufRead, Write};

use tracing::trace;

impl Calculatrice {
    /// Lit `entree` jusqu’à la fin ; une dernière ligne sans '\n' est traitée aussi.
    pub fn execute<R, O, E>(
        &mut self,
        mut entree: R,
        sortie: &mut O,
        erreurs: &mut E,
    ) -> io::Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut tampon: Vec<u8> = Vec::new();

        loop {
            tampon.clear();
            if entree.read_until(b'\n', &mut tampon)? == 0 {
                break;
            }
            if tampon.last() == Some(&b'\n') {
                tampon.pop();
            }

            match self.traite_ligne(&tampon) {
                Ok(Some(texte)) => writeln!(sortie, "{texte}")?,
                Ok(None) => {}
                Err(e) => writeln!(erreurs, "ERROR {} {e}", self.ligne())?,
            }
        }

        trace!(lignes = self.ligne(), pile = self.len(), "fin de l’entrée");
        sortie.flush()?;
        erreurs.flush()
    }
}
