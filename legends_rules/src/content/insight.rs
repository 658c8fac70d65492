//! Educational metadata attached to choices.

use serde::{Deserialize, Serialize};

/// Kind of legal authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorityKind {
    Case,
    Statute,
    Regulation,
    Rule,
    Commentary,
}

impl AuthorityKind {
    /// Link caption used for the authority's full text.
    pub fn read_more_label(&self) -> &'static str {
        match self {
            AuthorityKind::Case => "Read Full Case",
            _ => "Read Full Authority",
        }
    }
}

/// A cited legal authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalAuthority {
    #[serde(rename = "type")]
    pub kind: AuthorityKind,
    pub citation: String,
    pub bluebook_citation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub summary: String,
    pub jurisdiction: String,
    pub year: i32,
}

/// A concept related to the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedConcept {
    pub name: String,
    pub description: String,
    /// e.g. "distinguishes", "supports", "conflicts with".
    pub relationship: String,
}

/// How a rule differs in another jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionalVariation {
    pub jurisdiction: String,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    pub difference: String,
}

/// Explanatory bundle shown after a choice is submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceInsight {
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_authority: Option<LegalAuthority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_authorities: Vec<LegalAuthority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_concepts: Vec<RelatedConcept>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposing_argument: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdictional_variations: Vec<JurisdictionalVariation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_considerations: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub practice_area_applications: Vec<String>,

    // Older content cites a single case by name and link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_explanation: Option<String>,
}

/// Which citation block to show for a choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CitationView<'a> {
    Authority {
        primary: &'a LegalAuthority,
        related: &'a [LegalAuthority],
    },
    Legacy {
        citation: &'a str,
        url: &'a str,
    },
    Summary(&'a str),
}

const GENERIC_LEGAL_EXPLANATION: &str = "This question tests fundamental legal principles that \
    are essential for practice. The reasoning provided above explains the key concepts and their \
    application.";

impl ChoiceInsight {
    /// Pick the richest citation information available.
    ///
    /// A structured primary authority wins, then a legacy citation with a
    /// link, then the free-text legal explanation or a generic note.
    pub fn citation_view(&self) -> CitationView<'_> {
        if let Some(primary) = &self.primary_authority {
            return CitationView::Authority {
                primary,
                related: &self.related_authorities,
            };
        }
        if let (Some(citation), Some(url)) = (&self.legal_citation, &self.citation_url) {
            return CitationView::Legacy { citation, url };
        }
        CitationView::Summary(
            self.legal_explanation
                .as_deref()
                .unwrap_or(GENERIC_LEGAL_EXPLANATION),
        )
    }

    /// Whether any multi-perspective analysis is present.
    pub fn has_perspectives(&self) -> bool {
        self.opposing_argument.is_some()
            || !self.jurisdictional_variations.is_empty()
            || self.policy_considerations.is_some()
            || !self.practice_area_applications.is_empty()
            || !self.related_concepts.is_empty()
    }
}
