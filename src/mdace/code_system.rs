use std::fmt;

/// Coding system an annotation belongs to
///
/// Derived from the free-form `code_system` string by exact comparison.
/// Anything that is not one of the two ICD-10 systems is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSystem {
    /// ICD-10-CM, diagnoses
    Diagnosis,
    /// ICD-10-PCS, procedures
    Procedure,
    Other,
}

impl CodeSystem {
    pub const DIAGNOSIS_TAG: &'static str = "ICD-10-CM";
    pub const PROCEDURE_TAG: &'static str = "ICD-10-PCS";

    pub fn classify(tag: &str) -> Self {
        match tag {
            Self::DIAGNOSIS_TAG => CodeSystem::Diagnosis,
            Self::PROCEDURE_TAG => CodeSystem::Procedure,
            _ => CodeSystem::Other,
        }
    }
}

impl fmt::Display for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CodeSystem::Diagnosis => "diagnosis",
            CodeSystem::Procedure => "procedure",
            CodeSystem::Other => "other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_match_only() {
        assert_eq!(CodeSystem::classify("ICD-10-CM"), CodeSystem::Diagnosis);
        assert_eq!(CodeSystem::classify("ICD-10-PCS"), CodeSystem::Procedure);
        assert_eq!(CodeSystem::classify("icd-10-cm"), CodeSystem::Other);
        assert_eq!(CodeSystem::classify(""), CodeSystem::Other);
    }
}
