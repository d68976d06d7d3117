//! Trade-finance flow variants.
//!
//! Three application flows share the wizard machinery: bank guarantees,
//! letters of credit, and outward remittances. The type-selection step of a
//! flow fixes a variant (project type or LC type) which in turn drives clause
//! suggestions and preview wording.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which application flow a wizard instance drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    BankGuarantee,
    LetterOfCredit,
    Remittance,
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowKind::BankGuarantee => "bank_guarantee",
            FlowKind::LetterOfCredit => "letter_of_credit",
            FlowKind::Remittance => "remittance",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FlowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank_guarantee" => Ok(FlowKind::BankGuarantee),
            "letter_of_credit" => Ok(FlowKind::LetterOfCredit),
            "remittance" => Ok(FlowKind::Remittance),
            other => Err(format!("unknown flow kind: '{other}'")),
        }
    }
}

/// Bank guarantee project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Guarantees fulfillment of contractual obligations.
    Performance,
    /// Security for tender participation.
    Bid,
    /// Secures an advance payment made to the applicant.
    Advance,
    /// Covers retention money released early.
    Retention,
}

impl ProjectType {
    /// Title used in clause headings and previews.
    pub fn title(&self) -> &'static str {
        match self {
            ProjectType::Performance => "Performance Guarantee",
            ProjectType::Bid => "Bid Bond",
            ProjectType::Advance => "Advance Payment Guarantee",
            ProjectType::Retention => "Retention Money Guarantee",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performance" => Ok(ProjectType::Performance),
            "bid" => Ok(ProjectType::Bid),
            "advance" => Ok(ProjectType::Advance),
            "retention" => Ok(ProjectType::Retention),
            other => Err(format!("unknown project type: '{other}'")),
        }
    }
}

/// Letter of credit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LcType {
    /// Security against non-performance.
    Standby,
    /// Standard trade payment guarantee.
    Commercial,
    /// Multiple shipments without reapplication.
    Revolving,
    /// Can be transferred to another beneficiary.
    Transferable,
}

impl LcType {
    pub fn title(&self) -> &'static str {
        match self {
            LcType::Standby => "Standby LC",
            LcType::Commercial => "Commercial LC",
            LcType::Revolving => "Revolving LC",
            LcType::Transferable => "Transferable LC",
        }
    }
}

impl FromStr for LcType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standby" => Ok(LcType::Standby),
            "commercial" => Ok(LcType::Commercial),
            "revolving" => Ok(LcType::Revolving),
            "transferable" => Ok(LcType::Transferable),
            other => Err(format!("unknown LC type: '{other}'")),
        }
    }
}

/// Context handed to a step source when opening a wizard.
///
/// Carries the flow and, once the type-selection step has run, the chosen
/// variant. Clause catalogs differ per variant (e.g. the reducing-value
/// clause is only suggested for performance guarantees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowContext {
    pub flow: FlowKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lc_type: Option<LcType>,
}

impl FlowContext {
    pub fn new(flow: FlowKind) -> Self {
        Self {
            flow,
            project_type: None,
            lc_type: None,
        }
    }

    pub fn with_project_type(flow: FlowKind, project_type: ProjectType) -> Self {
        Self {
            flow,
            project_type: Some(project_type),
            lc_type: None,
        }
    }

    pub fn with_lc_type(flow: FlowKind, lc_type: LcType) -> Self {
        Self {
            flow,
            project_type: None,
            lc_type: Some(lc_type),
        }
    }
}
