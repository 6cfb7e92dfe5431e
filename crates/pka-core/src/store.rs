use crate::core::models::label::{AtomClass, ResidueCategory, ResidueLabel};
use crate::core::models::record::HBondRecord;
use crate::core::params::file::{ParamFile, ParamLoadError};
use crate::core::params::hbond::{
    self, GapPolicy, HydrogenBondParameters, InteractionContext, SideChainMatrix,
    UnsupportedContextError,
};
use crate::core::params::interaction::{InteractionClass, InteractionMatrix};
use crate::core::params::models::{
    CoulombModel, CoulombParameters, DesolvationModel, DesolvationParameters,
};
use crate::core::params::table::{LookupError, ModelPka, ParamTable};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const BUILTIN_SOURCE: &str = "<builtin>";
const STRING_SOURCE: &str = "<string>";

/// An immutable snapshot of every parameter table used by the pKa model.
///
/// A store is built once, completing the side-chain hydrogen-bond matrix on
/// the way, and is read-only afterwards. It is `Send + Sync` and can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    categories: ParamTable<ResidueLabel, ResidueCategory>,
    charges: ParamTable<ResidueLabel>,
    model_pka: ParamTable<ResidueLabel>,
    local_radii: Arc<ParamTable<ResidueLabel>>,
    vdw_volumes: Arc<ParamTable<AtomClass>>,
    coulomb: ParamTable<CoulombModel, CoulombParameters>,
    desolvation: ParamTable<DesolvationModel, DesolvationParameters>,
    interaction: InteractionMatrix,
    back_bone: ParamTable<ResidueCategory, HBondRecord>,
    side_chain: SideChainMatrix,
}

impl ParameterStore {
    /// Builds the store from the embedded default parameter set.
    pub fn builtin() -> Result<Self, ParamLoadError> {
        Self::builtin_with_policy(GapPolicy::default())
    }

    pub fn builtin_with_policy(policy: GapPolicy) -> Result<Self, ParamLoadError> {
        let file = ParamFile::from_str_named(crate::BUILTIN_PARAMETERS, BUILTIN_SOURCE)?;
        Self::from_param_file(file, policy)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ParamLoadError> {
        Self::from_toml_str_with_policy(content, GapPolicy::default())
    }

    pub fn from_toml_str_with_policy(
        content: &str,
        policy: GapPolicy,
    ) -> Result<Self, ParamLoadError> {
        let file = ParamFile::from_str_named(content, STRING_SOURCE)?;
        Self::from_param_file(file, policy)
    }

    /// Loads a parameter set from a TOML file with the same layout as the
    /// embedded default.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        Self::load_with_policy(path, GapPolicy::default())
    }

    pub fn load_with_policy(path: &Path, policy: GapPolicy) -> Result<Self, ParamLoadError> {
        let file = ParamFile::from_path(path)?;
        debug!("Parsed parameter file '{}'.", path.display());
        Self::from_param_file(file, policy)
    }

    fn from_param_file(file: ParamFile, policy: GapPolicy) -> Result<Self, ParamLoadError> {
        if let Some(label) = file.categories.keys().find(|l| !l.is_residue_name()) {
            return Err(ParamLoadError::NotAResidueName(label));
        }
        file.check_model_shapes()?;

        let interaction = InteractionMatrix::new(file.interaction)?;
        let side_chain = hbond::complete(&file.hydrogen_bond.side_chain, policy)?;
        debug!(
            "Completed side-chain hydrogen-bond matrix over {} categories.",
            side_chain.categories().len()
        );

        let local_radii = Arc::new(file.local_radii);
        let vdw_volumes = Arc::new(file.vdw_volumes);
        let desolvation = file
            .desolvation
            .into_iter()
            .map(|(model, entry)| {
                (
                    model,
                    DesolvationParameters::resolve(entry, &local_radii, &vdw_volumes),
                )
            })
            .collect();

        Ok(Self {
            categories: file.categories,
            charges: file.charges,
            model_pka: file.model_pka,
            local_radii,
            vdw_volumes,
            coulomb: file.coulomb,
            desolvation,
            interaction,
            back_bone: file.hydrogen_bond.back_bone,
            side_chain,
        })
    }

    // --- Residue typing and charges ---

    /// Reduced category of a raw residue name such as `"ASP"` or `"N+ "`.
    pub fn residue_category(&self, name: &str) -> Result<ResidueCategory, LookupError> {
        let label = name
            .parse::<ResidueLabel>()
            .map_err(|_| LookupError::NotFound {
                table: "residue category",
                key: name.to_string(),
            })?;
        self.category_of(label)
    }

    pub fn category_of(&self, label: ResidueLabel) -> Result<ResidueCategory, LookupError> {
        self.categories.get(label, "residue category").copied()
    }

    pub fn residue_categories(&self) -> &ParamTable<ResidueLabel, ResidueCategory> {
        &self.categories
    }

    /// Residue names that reduce to `category`.
    pub fn members(&self, category: ResidueCategory) -> Vec<ResidueLabel> {
        self.categories
            .iter()
            .filter(|&(_, &c)| c == category)
            .map(|(&label, _)| label)
            .collect()
    }

    pub fn charge(&self, label: ResidueLabel) -> Result<f64, LookupError> {
        self.charges.get(label, "charge").copied()
    }

    pub fn charges(&self) -> &ParamTable<ResidueLabel> {
        &self.charges
    }

    // --- Model pKa values ---

    pub fn model_pka(&self, label: ResidueLabel) -> ModelPka {
        match self.model_pka.get(label, "model pKa") {
            Ok(&pka) => ModelPka::Tabulated(pka),
            Err(_) => ModelPka::NonIonizable,
        }
    }

    /// Like [`ParameterStore::model_pka`], but accepts any string. Unknown or
    /// empty names are non-ionizable.
    pub fn model_pka_by_name(&self, name: &str) -> ModelPka {
        name.parse::<ResidueLabel>()
            .map(|label| self.model_pka(label))
            .unwrap_or(ModelPka::NonIonizable)
    }

    pub fn model_pkas(&self) -> &ParamTable<ResidueLabel> {
        &self.model_pka
    }

    // --- Coulomb and desolvation models ---

    pub fn coulomb(&self, model: CoulombModel) -> Result<&CoulombParameters, LookupError> {
        self.coulomb.get(model, "Coulomb model")
    }

    pub fn coulomb_models(&self) -> &ParamTable<CoulombModel, CoulombParameters> {
        &self.coulomb
    }

    pub fn desolvation(
        &self,
        model: DesolvationModel,
    ) -> Result<&DesolvationParameters, LookupError> {
        self.desolvation.get(model, "desolvation model")
    }

    pub fn desolvation_models(&self) -> &ParamTable<DesolvationModel, DesolvationParameters> {
        &self.desolvation
    }

    pub fn local_radius(&self, label: ResidueLabel) -> Result<f64, LookupError> {
        self.local_radii.get(label, "local radius").copied()
    }

    pub fn local_radii(&self) -> &ParamTable<ResidueLabel> {
        &self.local_radii
    }

    pub fn vdw_volume(&self, class: AtomClass) -> Result<f64, LookupError> {
        self.vdw_volumes.get(class, "van der Waals volume").copied()
    }

    pub fn vdw_volumes(&self) -> &ParamTable<AtomClass> {
        &self.vdw_volumes
    }

    // --- Interactions ---

    pub fn interaction(
        &self,
        a: ResidueCategory,
        b: ResidueCategory,
    ) -> Result<InteractionClass, LookupError> {
        self.interaction.classify(a, b)
    }

    pub fn interaction_matrix(&self) -> &InteractionMatrix {
        &self.interaction
    }

    pub fn hydrogen_bond_parameters(
        &self,
        context: InteractionContext,
    ) -> HydrogenBondParameters<'_> {
        match context {
            InteractionContext::BackBone => HydrogenBondParameters::BackBone(&self.back_bone),
            InteractionContext::SideChain => HydrogenBondParameters::SideChain(&self.side_chain),
        }
    }

    /// Resolves the context identifier (`"back-bone"` or `"side-chain"`)
    /// before returning its parameters.
    pub fn hydrogen_bond_parameters_for(
        &self,
        context: &str,
    ) -> Result<HydrogenBondParameters<'_>, UnsupportedContextError> {
        Ok(self.hydrogen_bond_parameters(context.parse()?))
    }

    pub fn back_bone_record(&self, category: ResidueCategory) -> Result<HBondRecord, LookupError> {
        self.back_bone.get(category, "back-bone hydrogen-bond").copied()
    }

    pub fn side_chain_record(
        &self,
        a: ResidueCategory,
        b: ResidueCategory,
    ) -> Result<HBondRecord, LookupError> {
        self.side_chain.get(a, b)
    }

    pub fn side_chain_matrix(&self) -> &SideChainMatrix {
        &self.side_chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BUILTIN_PARAMETERS;
    use crate::core::params::hbond::CompletionError;
    use crate::core::params::table::Lookup;
    use crate::core::models::label::ResidueCategory::*;
    use std::fs;
    use tempfile::tempdir;

    fn store() -> ParameterStore {
        ParameterStore::builtin().unwrap()
    }

    fn without_histidine_tryptophan_cell() -> String {
        BUILTIN_PARAMETERS.replace(
            "TRP = [0.00, [0.00, 0.00]]\n\n[hydrogen-bond.side-chain.\"N+\"]",
            "\n[hydrogen-bond.side-chain.\"N+\"]",
        )
    }

    fn label(name: &str) -> ResidueLabel {
        name.parse().unwrap()
    }

    #[test]
    fn store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParameterStore>();
    }

    #[test]
    fn residue_names_map_to_reduced_categories() {
        let store = store();
        assert_eq!(store.residue_category("ASP"), Ok(Carboxyl));
        assert_eq!(store.residue_category("GLU"), Ok(Carboxyl));
        assert_eq!(store.residue_category("C- "), Ok(Carboxyl));
        assert_eq!(store.residue_category("N+ "), Ok(NTerminus));
        assert_eq!(store.residue_category("SER"), Ok(Hydroxyl));
        assert_eq!(store.residue_category("THR"), Ok(Hydroxyl));
        assert_eq!(store.residue_category("ASN"), Ok(Amide));
        assert_eq!(store.residue_category("GLN"), Ok(Amide));
        assert_eq!(store.residue_category("TRP"), Ok(Tryptophan));
        assert_eq!(store.residue_categories().len(), 14);
    }

    #[test]
    fn unknown_residue_name_has_no_category() {
        let store = store();
        assert!(matches!(
            store.residue_category("ALA"),
            Err(LookupError::NotFound { .. })
        ));
        assert!(matches!(
            store.residue_category("COO"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn members_lists_residue_names_of_category() {
        let store = store();
        assert_eq!(
            store.members(Carboxyl),
            vec![
                ResidueLabel::CTerminus,
                ResidueLabel::AsparticAcid,
                ResidueLabel::GlutamicAcid
            ]
        );
        assert_eq!(
            store.members(Hydroxyl),
            vec![ResidueLabel::Serine, ResidueLabel::Threonine]
        );
    }

    #[test]
    fn charges_are_unit_for_documented_labels() {
        let store = store();
        assert_eq!(store.charge(label("HIS")), Ok(1.0));
        assert_eq!(store.charge(label("ASP")), Ok(-1.0));
        assert_eq!(store.charge(label("N+ ")), Ok(1.0));
        for (_, &charge) in store.charges() {
            assert!(charge == 1.0 || charge == -1.0);
        }
        assert_eq!(store.charges().len(), 10);
    }

    #[test]
    fn unknown_charge_key_reports_not_found_and_falls_back_to_table() {
        let store = store();
        assert!(matches!(
            store.charge(label("SER")),
            Err(LookupError::NotFound { table: "charge", .. })
        ));
        assert_eq!(
            store.charges().lookup_or_all(Some(label("SER"))),
            Lookup::Table(store.charges())
        );
    }

    #[test]
    fn model_pka_returns_tabulated_values() {
        let store = store();
        assert_eq!(store.model_pka(label("ASP")), ModelPka::Tabulated(3.80));
        assert_eq!(store.model_pka(label("C-")), ModelPka::Tabulated(3.20));
        assert_eq!(store.model_pka(label("ARG")), ModelPka::Tabulated(12.50));
        assert_eq!(store.model_pka(label("ASP")).value(), 3.80);
        assert_eq!(store.model_pkas().len(), 9);
    }

    #[test]
    fn model_pka_falls_back_to_non_ionizable_sentinel() {
        let store = store();
        assert_eq!(store.model_pka(label("ASN")), ModelPka::NonIonizable);
        assert_eq!(store.model_pka(label("ASN")).value(), 20.00);
        assert_eq!(store.model_pka_by_name("GLN").value(), 20.00);
        assert_eq!(store.model_pka_by_name("XYZ").value(), 20.00);
        assert_eq!(store.model_pka_by_name("").value(), 20.00);
        assert_eq!(store.model_pka_by_name("HIS").value(), 6.50);
    }

    #[test]
    fn coulomb_model_has_documented_cutoff_and_dielectric() {
        let store = store();
        let coulomb = store.coulomb(CoulombModel::Coulomb).unwrap();
        assert_eq!(coulomb.cutoff().near, 4.0);
        assert_eq!(coulomb.cutoff().far, 10.0);
        assert_eq!(coulomb.dielectric(), Some(80.00));
        assert!(coulomb.scaled());

        let linear = store.coulomb(CoulombModel::Linear).unwrap();
        assert_eq!(linear.max_dpka(), Some(2.40));
        assert_eq!(linear.cutoff().far, 7.0);
    }

    #[test]
    fn contact_models_share_the_local_radius_table() {
        let store = store();
        for model in [DesolvationModel::Propka2, DesolvationModel::Contact] {
            match store.desolvation(model).unwrap() {
                DesolvationParameters::Contact {
                    allowance,
                    prefactor,
                    local,
                    radii,
                } => {
                    assert_eq!(*allowance, 400.00);
                    assert_eq!(*prefactor, -0.01);
                    assert_eq!(*local, -0.07);
                    assert_eq!(radii.as_ref(), store.local_radii());
                }
                other => panic!("expected a contact model, got {other:?}"),
            }
        }
    }

    #[test]
    fn volume_models_differ_only_in_surface_term() {
        let store = store();
        let surface = |model| match store.desolvation(model).unwrap() {
            DesolvationParameters::Volume {
                surface, volumes, ..
            } => {
                assert_eq!(volumes.as_ref(), store.vdw_volumes());
                *surface
            }
            other => panic!("expected a volume model, got {other:?}"),
        };
        assert_eq!(surface(DesolvationModel::Volume), 0.25);
        assert_eq!(surface(DesolvationModel::ScaledVolume), 0.00);
        let volume = store.desolvation(DesolvationModel::Volume).unwrap();
        assert_eq!(volume.prefactor(), -13.50);
        assert_eq!(volume.allowance(), 0.00);
    }

    #[test]
    fn radius_and_volume_lookups() {
        let store = store();
        assert_eq!(store.local_radius(label("ARG")), Ok(5.0));
        assert_eq!(store.local_radius(label("CYS")), Ok(3.5));
        assert!(store.local_radius(label("SER")).is_err());
        assert_eq!(store.vdw_volume(AtomClass::HydrophobicCarbon), Ok(2.64));
        assert_eq!(store.vdw_volume(AtomClass::Sulphur), Ok(1.66));
    }

    #[test]
    fn interaction_classes_follow_lower_triangle() {
        let store = store();
        assert_eq!(
            store.interaction(Carboxyl, Carboxyl),
            Ok(InteractionClass::Iterative)
        );
        assert_eq!(
            store.interaction(Arginine, Lysine),
            Ok(InteractionClass::NonIterative)
        );
        assert_eq!(
            store.interaction(Lysine, Arginine),
            Ok(InteractionClass::NonIterative)
        );
        assert_eq!(
            store.interaction(Tryptophan, Histidine),
            Ok(InteractionClass::NoInteraction)
        );
        assert_eq!(
            store.interaction(Amide, Histidine),
            Ok(InteractionClass::NonIterative)
        );
    }

    #[test]
    fn side_chain_matrix_is_complete_and_symmetric() {
        let store = store();
        let matrix = store.side_chain_matrix();
        assert_eq!(matrix.categories(), &ResidueCategory::ALL);
        for a in ResidueCategory::ALL {
            for b in ResidueCategory::ALL {
                let forward = store.side_chain_record(a, b).unwrap();
                let reverse = store.side_chain_record(b, a).unwrap();
                assert_eq!(forward, reverse, "{a}/{b}");
            }
            assert!(store.side_chain_record(a, a).unwrap().is_finite());
        }
    }

    #[test]
    fn tyrosine_histidine_record_is_derived_from_reverse() {
        let store = store();
        let expected = HBondRecord::new(-0.80, 2.00, 3.00);
        assert_eq!(store.side_chain_record(Tyrosine, Histidine), Ok(expected));
        assert_eq!(store.side_chain_record(Histidine, Tyrosine), Ok(expected));
        assert_eq!(
            store.side_chain_record(Amide, Histidine),
            Ok(HBondRecord::new(0.80, 2.00, 3.00))
        );
        assert_eq!(
            store.side_chain_record(NTerminus, Cysteine),
            Ok(HBondRecord::new(-2.40, 3.00, 4.50))
        );
    }

    #[test]
    fn back_bone_parameters_are_returned_as_authored() {
        let store = store();
        assert_eq!(
            store.back_bone_record(Cysteine),
            Ok(HBondRecord::new(-2.40, 3.50, 4.50))
        );
        assert_eq!(
            store.back_bone_record(NTerminus),
            Ok(HBondRecord::new(1.20, 2.00, 3.50))
        );
        assert!(store.back_bone_record(Hydroxyl).is_err());
        match store.hydrogen_bond_parameters(InteractionContext::BackBone) {
            HydrogenBondParameters::BackBone(table) => assert_eq!(table.len(), 7),
            other => panic!("expected back-bone parameters, got {other:?}"),
        }
    }

    #[test]
    fn context_identifiers_select_parameters() {
        let store = store();
        assert!(matches!(
            store.hydrogen_bond_parameters_for("side-chain"),
            Ok(HydrogenBondParameters::SideChain(_))
        ));
        assert!(matches!(
            store.hydrogen_bond_parameters_for("back-bone"),
            Ok(HydrogenBondParameters::BackBone(_))
        ));
        assert_eq!(
            store.hydrogen_bond_parameters_for("hydrogen"),
            Err(UnsupportedContextError("hydrogen".to_string()))
        );
    }

    #[test]
    fn authoring_gap_is_rejected_at_build_time() {
        let content = without_histidine_tryptophan_cell();
        let result = ParameterStore::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(ParamLoadError::Completion(CompletionError::Gap {
                row: Histidine,
                column: Tryptophan
            }))
        ));
    }

    #[test]
    fn authoring_gap_is_filled_when_policy_allows() {
        let content = without_histidine_tryptophan_cell();
        let store =
            ParameterStore::from_toml_str_with_policy(&content, GapPolicy::FillDegenerate).unwrap();
        assert_eq!(
            store.side_chain_record(Tryptophan, Histidine),
            Ok(HBondRecord::DEGENERATE)
        );
        assert!(store.side_chain_matrix().is_symmetric());
    }

    #[test]
    fn non_finite_record_in_parameter_file_is_rejected() {
        let content = BUILTIN_PARAMETERS.replace(
            "AMD = [0.80, [2.00, 3.00]]\nTRP = [0.00, [0.00, 0.00]]",
            "AMD = [nan, [2.00, 3.00]]\nTRP = [0.00, [0.00, 0.00]]",
        );
        assert_ne!(content, BUILTIN_PARAMETERS);
        let result =
            ParameterStore::from_toml_str_with_policy(&content, GapPolicy::FillDegenerate);
        assert!(matches!(
            result,
            Err(ParamLoadError::Completion(CompletionError::NonFinite {
                row: Histidine,
                column: Amide,
                ..
            }))
        ));
    }

    #[test]
    fn model_bundles_with_extra_fields_are_rejected() {
        let content =
            BUILTIN_PARAMETERS.replace("local = -0.07\n", "local = -0.07\nsurface = 0.25\n");
        assert_ne!(content, BUILTIN_PARAMETERS);
        assert!(matches!(
            ParameterStore::from_toml_str(&content),
            Err(ParamLoadError::Toml { .. })
        ));
    }

    #[test]
    fn category_table_must_use_residue_names() {
        let content = BUILTIN_PARAMETERS.replace("SER = \"ROH\"", "ROH = \"ROH\"");
        let result = ParameterStore::from_toml_str(&content);
        assert!(matches!(
            result,
            Err(ParamLoadError::NotAResidueName(ResidueLabel::Hydroxyl))
        ));
    }

    #[test]
    fn malformed_interaction_row_is_rejected() {
        let content = BUILTIN_PARAMETERS.replace("CYS = [\"I\", \"I\"]", "CYS = [\"I\"]");
        let result = ParameterStore::from_toml_str(&content);
        assert!(matches!(result, Err(ParamLoadError::Interaction(_))));
    }

    #[test]
    fn load_reads_custom_parameter_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("custom.toml");
        fs::write(
            &file_path,
            BUILTIN_PARAMETERS.replace("dielectric = 80.00", "dielectric = 40.00"),
        )
        .unwrap();
        let store = ParameterStore::load(&file_path).unwrap();
        assert_eq!(
            store.coulomb(CoulombModel::Coulomb).unwrap().dielectric(),
            Some(40.00)
        );
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ParameterStore::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }
}
