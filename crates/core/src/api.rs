//! Wire types of the `/check` and `/translate` endpoints.

use serde::{Deserialize, Serialize};

use crate::model::{ClaimInput, DomainCheck, FactCheckClaim, SearchHit, VerificationResult};

/// `POST /check` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckRequest {
    /// Claim text, empty in link mode.
    pub text: String,
    /// Link, empty in text mode.
    pub link: String,
    /// Language code the backend answers in.
    pub lang: String,
}

impl From<&ClaimInput> for CheckRequest {
    fn from(claim: &ClaimInput) -> Self {
        Self {
            text: claim.text_or_empty().to_string(),
            link: claim.link_or_empty().to_string(),
            lang: claim.language.code().to_string(),
        }
    }
}

/// `POST /check` success response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckResponse {
    /// Credibility score; clamped to 0-100 on conversion.
    #[serde(default)]
    pub score: i64,
    /// AI analysis.
    #[serde(default)]
    pub gemini: Option<AiAnalysis>,
    /// Fact-check database matches.
    #[serde(default)]
    pub google_factcheck: Option<Vec<FactCheckEntry>>,
    /// Web search hits.
    #[serde(default)]
    pub google_search: Option<Vec<SearchEntry>>,
    /// Domain reputation of the link.
    #[serde(default)]
    pub domain_check: Option<DomainCheckEntry>,
}

/// AI analysis block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AiAnalysis {
    /// Explanation, possibly with markdown emphasis.
    #[serde(default)]
    pub explanation: Option<String>,
    /// URLs the explanation cites.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

/// One fact-check database match.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FactCheckEntry {
    /// Claim as worded in the database.
    #[serde(default)]
    pub text: Option<String>,
    /// Reviews; only the first rating is shown.
    #[serde(default, rename = "claimReview")]
    pub claim_review: Option<Vec<ClaimReview>>,
}

/// One review of a fact-check match.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClaimReview {
    /// Rating such as "False" or "Misleading".
    #[serde(default, rename = "textualRating")]
    pub textual_rating: Option<String>,
}

/// One search hit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchEntry {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Page URL; hits without one are dropped.
    #[serde(default)]
    pub link: Option<String>,
}

/// Domain reputation block. Both parts are absent when no link was checked.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DomainCheckEntry {
    /// Safe-browsing lookup.
    #[serde(default)]
    pub safe_browsing: Option<SafeBrowsing>,
    /// Blocklist lookup.
    #[serde(default)]
    pub spamhaus: Option<Spamhaus>,
}

/// Safe-browsing part of the domain check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SafeBrowsing {
    /// No threat found.
    #[serde(default)]
    pub safe: bool,
}

/// Blocklist part of the domain check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Spamhaus {
    /// Domain is listed.
    #[serde(default)]
    pub listed: bool,
}

/// Body of a non-2xx `/check` response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /translate` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslateRequest {
    /// Text to translate.
    pub text: String,
    /// Target language code.
    pub target: String,
}

/// `POST /translate` response. A missing `translated` field is a failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslateResponse {
    /// Translated text.
    #[serde(default)]
    pub translated: Option<String>,
}

impl From<CheckResponse> for VerificationResult {
    fn from(resp: CheckResponse) -> Self {
        let (explanation, explanation_sources) = match resp.gemini {
            Some(ai) => (ai.explanation, ai.sources.unwrap_or_default()),
            None => (None, vec![]),
        };

        let fact_check_claims = resp
            .google_factcheck
            .unwrap_or_default()
            .into_iter()
            .map(|c| FactCheckClaim {
                claim_text: c.text.unwrap_or_default(),
                rating: c
                    .claim_review
                    .unwrap_or_default()
                    .into_iter()
                    .next()
                    .and_then(|r| r.textual_rating)
                    .filter(|r| !r.trim().is_empty()),
            })
            .collect();

        let search_results = resp
            .google_search
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| {
                let url = s.link.filter(|l| !l.trim().is_empty())?;
                Some(SearchHit {
                    title: s.title.unwrap_or_else(|| url.clone()),
                    url,
                })
            })
            .collect();

        let domain_check = resp.domain_check.and_then(|dc| {
            if dc.safe_browsing.is_none() && dc.spamhaus.is_none() {
                return None;
            }
            Some(DomainCheck {
                is_safe: dc.safe_browsing.map(|s| s.safe).unwrap_or(false),
                is_blacklisted: dc.spamhaus.map(|s| s.listed).unwrap_or(false),
            })
        });

        VerificationResult {
            score: resp.score.clamp(0, 100) as u8,
            explanation,
            explanation_sources,
            fact_check_claims,
            search_results,
            domain_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_domain_check_object_means_no_domain_data() {
        let resp: CheckResponse =
            serde_json::from_str(r#"{"score": 40, "domain_check": {}}"#).unwrap();
        let result = VerificationResult::from(resp);
        assert_eq!(result.score, 40);
        assert!(result.domain_check.is_none());
    }

    #[test]
    fn decodes_full_payload() {
        let raw = r#"{
            "score": 140,
            "mode": "both",
            "gemini": {"explanation": "**Yes**", "sources": ["https://a.org/x"], "verdict": "true"},
            "google_factcheck": [
                {"text": "Claim A", "claimReview": [{"textualRating": "False"}]},
                {"text": "Claim B", "claimReview": []}
            ],
            "google_search": [
                {"title": "Hit", "link": "https://b.org", "snippet": "s"},
                {"title": "No link"}
            ],
            "domain_check": {"spamhaus": {"listed": true}}
        }"#;
        let result = VerificationResult::from(serde_json::from_str::<CheckResponse>(raw).unwrap());

        assert_eq!(result.score, 100);
        assert_eq!(result.explanation.as_deref(), Some("**Yes**"));
        assert_eq!(result.explanation_sources, vec!["https://a.org/x".to_string()]);
        assert_eq!(result.fact_check_claims[0].rating.as_deref(), Some("False"));
        assert_eq!(result.fact_check_claims[1].rating, None);
        assert_eq!(result.search_results.len(), 1);
        assert_eq!(
            result.domain_check,
            Some(DomainCheck { is_safe: false, is_blacklisted: true })
        );
    }

    #[test]
    fn null_lists_are_treated_as_empty() {
        let raw = r#"{"score": 60, "gemini": {"explanation": null, "sources": null}, "google_factcheck": null, "google_search": null}"#;
        let result = VerificationResult::from(serde_json::from_str::<CheckResponse>(raw).unwrap());
        assert!(result.explanation.is_none());
        assert!(result.explanation_sources.is_empty());
        assert!(result.fact_check_claims.is_empty());
        assert!(result.search_results.is_empty());
    }

    #[test]
    fn negative_score_clamps_to_zero() {
        let resp: CheckResponse = serde_json::from_str(r#"{"score": -5}"#).unwrap();
        assert_eq!(VerificationResult::from(resp).score, 0);
    }

    #[test]
    fn check_request_uses_empty_strings_for_absent_fields() {
        let claim = ClaimInput::new(crate::model::Mode::Link, "  ", " https://x.org ", crate::model::Language::En);
        let req = CheckRequest::from(&claim);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"text": "", "link": "https://x.org", "lang": "en"})
        );
    }
}
