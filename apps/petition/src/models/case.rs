//! Case input — the flat form submitted by a front end and its validated, typed form.
//!
//! Every categorical field is a closed vocabulary. Conversion from `CaseForm`
//! into `CaseInput` is the only place an unknown option can be rejected, and it
//! happens before any fragment is looked up.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Closed vocabularies
// ────────────────────────────────────────────────────────────────────────────

/// Declares a closed-vocabulary enum together with its wire name, its
/// canonical lower-case spellings and any accepted aliases.
macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Form field carrying this option.
            pub const FIELD: &'static str = $field;
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Case-insensitive lookup; surrounding whitespace is ignored.
            pub fn parse(value: &str) -> Result<Self, AppError> {
                match value.trim().to_lowercase().as_str() {
                    $($text $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(AppError::UnknownOption {
                        field: $field,
                        value: value.trim().to_string(),
                    }),
                }
            }

            pub fn vocabulary() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }
    };
}

closed_vocabulary! {
    /// Health plan the petition is filed against.
    HealthPlan, field = "plano" {
        Unimed => "unimed",
        Bradesco => "bradesco",
        NotreDame => "notredame",
        Samaritano => "samaritano",
        Amil => "amil",
        SulAmerica => "sulamerica",
    }
}

closed_vocabulary! {
    /// Priority of processing (tramitação prioritária).
    Priority, field = "prioridade" {
        None => "none" | "nenhuma",
        Elderly => "idoso",
        Disabled => "deficiente",
    }
}

closed_vocabulary! {
    /// Free-justice (gratuidade) eligibility.
    FreeJustice, field = "gratuidade" {
        None => "none" | "nenhuma",
        ElderlyOrWard => "idoso_ou_tutelado",
        Minor => "menor",
    }
}

closed_vocabulary! {
    DenialType, field = "negativa" {
        Tacit => "tacita",
        Other => "outra",
    }
}

closed_vocabulary! {
    DemandType, field = "tipo_demanda" {
        DisabilityClinical => "deficiencia_clinico",
        DisabilityHomeCare => "deficiencia_domiciliar",
        ElderlyClinical => "idoso_clinico",
        ElderlyHomeCare => "idoso_domiciliar",
        Other => "outros",
    }
}

closed_vocabulary! {
    UrgencyType, field = "urgencia_tipo" {
        Clinical => "clinica",
        HomeCare => "domiciliar",
    }
}

closed_vocabulary! {
    RequestType, field = "pedido" {
        Clinical => "clinica",
        HomeCare => "domiciliar",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form and validated input
// ────────────────────────────────────────────────────────────────────────────

/// Flat field-name → value mapping as produced by the web form or the CLI.
/// Every field is optional on the wire; `into_case` enforces what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseForm {
    pub comarca: Option<String>,
    pub requerente: Option<String>,
    pub plano: Option<String>,
    pub prioridade: Option<String>,
    pub gratuidade: Option<String>,
    pub doenca: Option<String>,
    pub negativa: Option<String>,
    pub tipo_demanda: Option<String>,
    pub urgencia: Option<String>,
    pub urgencia_tipo: Option<String>,
    pub pedido: Option<String>,
}

/// Validated case. Holding one guarantees every option is in its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInput {
    pub venue: String,
    pub claimant: String,
    pub plan: HealthPlan,
    pub priority: Priority,
    pub free_justice: FreeJustice,
    pub illness: String,
    pub denial: DenialType,
    pub demand: DemandType,
    pub urgency: String,
    pub urgency_type: UrgencyType,
    pub request: RequestType,
}

impl CaseForm {
    /// Validates the form into a `CaseInput`.
    ///
    /// Order of checks:
    /// 1. required fields (comarca, requerente, plano, doenca, tipo_demanda, pedido)
    /// 2. every categorical value against its closed vocabulary
    ///
    /// Blank optional options fall back to their defaults (`none`, `tacita`, `clinica`).
    pub fn into_case(self) -> Result<CaseInput, AppError> {
        let venue = required(self.comarca, "comarca")?;
        let claimant = required(self.requerente, "requerente")?;
        let plan = required(self.plano, HealthPlan::FIELD)?;
        let illness = required(self.doenca, "doenca")?;
        let demand = required(self.tipo_demanda, DemandType::FIELD)?;
        let request = required(self.pedido, RequestType::FIELD)?;

        Ok(CaseInput {
            venue,
            claimant,
            plan: HealthPlan::parse(&plan)?,
            priority: optional(self.prioridade, Priority::parse, Priority::None)?,
            free_justice: optional(self.gratuidade, FreeJustice::parse, FreeJustice::None)?,
            illness,
            denial: optional(self.negativa, DenialType::parse, DenialType::Tacit)?,
            demand: DemandType::parse(&demand)?,
            urgency: self.urgencia.map(|u| u.trim().to_string()).unwrap_or_default(),
            urgency_type: optional(self.urgencia_tipo, UrgencyType::parse, UrgencyType::Clinical)?,
            request: RequestType::parse(&request)?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::MissingField(field)),
    }
}

fn optional<T>(
    value: Option<String>,
    parse: fn(&str) -> Result<T, AppError>,
    default: T,
) -> Result<T, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse(&v),
        _ => Ok(default),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> CaseForm {
        CaseForm {
            comarca: Some("São Paulo".to_string()),
            requerente: Some("JOÃO SILVA".to_string()),
            plano: Some("unimed".to_string()),
            prioridade: Some("none".to_string()),
            gratuidade: None,
            doenca: Some("diabetes".to_string()),
            negativa: Some("tacita".to_string()),
            tipo_demanda: Some("outros".to_string()),
            urgencia: Some("Risco de morte.".to_string()),
            urgencia_tipo: Some("clinica".to_string()),
            pedido: Some("clinica".to_string()),
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let case = complete_form().into_case().expect("form is complete");
        assert_eq!(case.venue, "São Paulo");
        assert_eq!(case.plan, HealthPlan::Unimed);
        assert_eq!(case.priority, Priority::None);
        assert_eq!(case.free_justice, FreeJustice::None);
        assert_eq!(case.demand, DemandType::Other);
        assert_eq!(case.request, RequestType::Clinical);
    }

    #[test]
    fn test_unknown_plan_rejected_with_field_name() {
        let mut form = complete_form();
        form.plano = Some("unknown_plan".to_string());
        match form.into_case() {
            Err(AppError::UnknownOption { field, value }) => {
                assert_eq!(field, "plano");
                assert_eq!(value, "unknown_plan");
            }
            other => panic!("expected UnknownOption, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_required_field_is_missing() {
        let mut form = complete_form();
        form.doenca = Some("   ".to_string());
        assert!(matches!(form.into_case(), Err(AppError::MissingField("doenca"))));

        let mut form = complete_form();
        form.pedido = None;
        assert!(matches!(form.into_case(), Err(AppError::MissingField("pedido"))));
    }

    #[test]
    fn test_missing_field_reported_before_unknown_option() {
        let mut form = complete_form();
        form.plano = Some("unknown_plan".to_string());
        form.comarca = None;
        assert!(matches!(form.into_case(), Err(AppError::MissingField("comarca"))));
    }

    #[test]
    fn test_blank_optional_options_take_defaults() {
        let mut form = complete_form();
        form.prioridade = Some(String::new());
        form.negativa = None;
        form.urgencia_tipo = None;
        form.urgencia = None;
        let case = form.into_case().unwrap();
        assert_eq!(case.priority, Priority::None);
        assert_eq!(case.denial, DenialType::Tacit);
        assert_eq!(case.urgency_type, UrgencyType::Clinical);
        assert_eq!(case.urgency, "");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_alias() {
        assert_eq!(Priority::parse("NENHUMA").unwrap(), Priority::None);
        assert_eq!(FreeJustice::parse(" Menor ").unwrap(), FreeJustice::Minor);
        assert_eq!(HealthPlan::parse("SulAmerica").unwrap(), HealthPlan::SulAmerica);
    }

    #[test]
    fn test_unknown_optional_option_rejected() {
        let mut form = complete_form();
        form.gratuidade = Some("rico".to_string());
        assert!(matches!(
            form.into_case(),
            Err(AppError::UnknownOption { field: "gratuidade", .. })
        ));
    }

    #[test]
    fn test_vocabulary_lists_canonical_values() {
        assert_eq!(Priority::vocabulary(), vec!["none", "idoso", "deficiente"]);
        assert_eq!(DemandType::vocabulary().len(), 5);
        assert_eq!(HealthPlan::vocabulary().len(), 6);
    }
}
