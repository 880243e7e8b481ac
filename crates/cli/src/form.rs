// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use planif_domain::SessionForm;

/// Session form fields given on the command line.
///
/// Values are passed through as typed; the form is validated as a whole
/// before anything is sent.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SessionFormArgs {
    /// Course title
    #[arg(long)]
    pub nom_cours: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Duration in hours, 1 to 8
    #[arg(long)]
    pub duree: Option<String>,

    /// Status, e.g. `PLANIFIE`
    #[arg(long)]
    pub statut: Option<String>,

    /// Instructor id
    #[arg(long)]
    pub formateur: Option<String>,

    /// Room id
    #[arg(long)]
    pub salle: Option<String>,

    /// Group id
    #[arg(long)]
    pub groupe: Option<String>,

    #[arg(long)]
    pub date_debut: Option<String>,

    #[arg(long)]
    pub date_fin: Option<String>,

    /// Slot id; repeat for several slots. Replaces the current selection.
    #[arg(long = "creneau")]
    pub creneaux: Vec<String>,

    /// Required equipment id; repeat for several. Replaces the current selection.
    #[arg(long = "materiel")]
    pub materiels: Vec<String>,
}

impl SessionFormArgs {
    /// Copies the given fields onto `form`, leaving the others untouched.
    pub fn apply_to(self, form: &mut SessionForm) {
        let fields: [(Option<String>, &mut String); 9] = [
            (self.nom_cours, &mut form.nom_cours),
            (self.description, &mut form.description),
            (self.duree, &mut form.duree),
            (self.statut, &mut form.statut),
            (self.formateur, &mut form.formateur_id),
            (self.salle, &mut form.salle_id),
            (self.groupe, &mut form.groupe_id),
            (self.date_debut, &mut form.date_debut),
            (self.date_fin, &mut form.date_fin),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        if !self.creneaux.is_empty() {
            form.creneau_ids = self.creneaux;
        }
        if !self.materiels.is_empty() {
            form.materiel_ids = self.materiels;
        }
    }
}
