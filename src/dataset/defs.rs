#[derive(Debug, Clone, Copy)]
pub struct SampleDef {
    pub sample_id: &'static str,
    pub sequence: &'static str,
    pub predicted_species: &'static str,
    pub annotation: &'static str,
}

const BUILTIN_SAMPLES: &[SampleDef] = &[
    SampleDef {
        sample_id: "S1",
        sequence: "ATCGTACGATCG",
        predicted_species: "Species A",
        annotation: "GeneX: Present, GeneY: Absent",
    },
    SampleDef {
        sample_id: "S2",
        sequence: "GCTAGCTAGCTA",
        predicted_species: "Species B",
        annotation: "GeneX: Absent, GeneY: Present",
    },
    SampleDef {
        sample_id: "S3",
        sequence: "TTAGGCATCGAT",
        predicted_species: "Species C",
        annotation: "GeneX: Present, GeneY: Present",
    },
    SampleDef {
        sample_id: "S4",
        sequence: "CGATCGTACGTA",
        predicted_species: "Species D",
        annotation: "GeneX: Absent, GeneY: Absent",
    },
    SampleDef {
        sample_id: "S5",
        sequence: "ATGCGTACGTAG",
        predicted_species: "Species E",
        annotation: "GeneX: Present, GeneY: Partial",
    },
];

pub fn builtin_samples() -> &'static [SampleDef] {
    BUILTIN_SAMPLES
}
