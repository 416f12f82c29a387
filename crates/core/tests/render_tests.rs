use factcheck_core::api::CheckResponse;
use factcheck_core::i18n::Catalog;
use factcheck_core::model::{DomainCheck, FactCheckClaim, Language, SearchHit, VerificationResult};
use factcheck_core::render::{
    DisplayError, EntryKey, LinkTitle, ResultsRenderer, SectionBody, SectionKind, Tone,
};
use factcheck_core::validation::ValidationError;

fn kinds(sections: &[factcheck_core::render::Section]) -> Vec<SectionKind> {
    sections.iter().map(|s| s.kind).collect()
}

#[test]
fn score_and_domain_check_only() {
    let catalog = Catalog::builtin();
    let mut result = VerificationResult::with_score(82);
    result.domain_check = Some(DomainCheck {
        is_safe: true,
        is_blacklisted: false,
    });

    let sections = ResultsRenderer::new(&catalog, Language::En).render(&result);
    assert_eq!(kinds(&sections), vec![SectionKind::Verdict, SectionKind::DomainCheck]);

    match &sections[0].body {
        SectionBody::Verdict { score, tone, label } => {
            assert_eq!(*score, 82);
            assert_eq!(*tone, Tone::Success);
            assert_eq!(label, "Likely True");
        }
        other => panic!("unexpected body {other:?}"),
    }
    assert_eq!(sections[0].heading, "📊 Credibility Score");

    match &sections[1].body {
        SectionBody::DomainCheck {
            safety_label,
            blacklist_label,
            ..
        } => {
            assert_eq!(safety_label, "✅ Safe");
            assert_eq!(blacklist_label, "✅ Not in blacklist");
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn tone_bands() {
    assert_eq!(Tone::for_score(100), Tone::Success);
    assert_eq!(Tone::for_score(70), Tone::Success);
    assert_eq!(Tone::for_score(69), Tone::Warning);
    assert_eq!(Tone::for_score(50), Tone::Warning);
    assert_eq!(Tone::for_score(49), Tone::Danger);
    assert_eq!(Tone::for_score(0), Tone::Danger);
}

#[test]
fn full_result_keeps_section_order() {
    let catalog = Catalog::builtin();
    let result = VerificationResult {
        score: 55,
        explanation: Some("The claim is **mostly** __accurate__.".into()),
        explanation_sources: vec!["https://www.who.int/news".into(), "::not a url::".into()],
        fact_check_claims: vec![FactCheckClaim {
            claim_text: "Claim".into(),
            rating: None,
        }],
        search_results: vec![SearchHit {
            title: "Hit".into(),
            url: "https://example.org".into(),
        }],
        domain_check: Some(DomainCheck {
            is_safe: false,
            is_blacklisted: true,
        }),
    };

    let sections = ResultsRenderer::new(&catalog, Language::Uk).render(&result);
    assert_eq!(
        kinds(&sections),
        vec![
            SectionKind::Verdict,
            SectionKind::Explanation,
            SectionKind::Sources,
            SectionKind::FactChecks,
            SectionKind::SearchResults,
            SectionKind::DomainCheck,
        ]
    );

    assert_eq!(
        sections[1].dynamic_text(),
        Some((EntryKey::Explanation, "The claim is mostly accurate."))
    );

    let SectionBody::Links { items } = &sections[2].body else {
        panic!("sources body");
    };
    assert_eq!(items[0].title, "www.who.int");
    assert_eq!(items[1].title_source, LinkTitle::Fallback);
    assert_eq!(items[1].title, "Джерело");
    assert_eq!(items[1].href, "::not a url::");

    let SectionBody::FactChecks { items } = &sections[3].body else {
        panic!("fact-check body");
    };
    assert_eq!(items[0].rating_label, "Нічого не знайдено");

    let SectionBody::DomainCheck {
        safety_label,
        blacklist_label,
        ..
    } = &sections[5].body
    else {
        panic!("domain body");
    };
    assert_eq!(safety_label, "❌ Небезпечно");
    assert_eq!(blacklist_label, "❌ У чорному списку");
}

#[test]
fn lists_are_capped_at_three() {
    let catalog = Catalog::builtin();
    let mut result = VerificationResult::with_score(10);
    result.fact_check_claims = (0..5)
        .map(|i| FactCheckClaim {
            claim_text: format!("claim {i}"),
            rating: Some("False".into()),
        })
        .collect();
    result.search_results = (0..5)
        .map(|i| SearchHit {
            title: format!("hit {i}"),
            url: format!("https://example.org/{i}"),
        })
        .collect();

    let sections = ResultsRenderer::new(&catalog, Language::En).render(&result);
    for section in &sections[1..] {
        let len = match &section.body {
            SectionBody::FactChecks { items } => items.len(),
            SectionBody::Links { items } => items.len(),
            other => panic!("unexpected body {other:?}"),
        };
        assert_eq!(len, 3);
    }
}

#[test]
fn search_cap_counts_only_hits_with_links() {
    let raw = r#"{
        "score": 40,
        "google_search": [
            {"title": "no link"},
            {"title": "blank", "link": "  "},
            {"title": "a", "link": "https://a.org"},
            {"title": "b", "link": "https://b.org"},
            {"title": "c", "link": "https://c.org"},
            {"title": "d", "link": "https://d.org"}
        ]
    }"#;
    let response: CheckResponse = serde_json::from_str(raw).unwrap();
    let result = VerificationResult::from(response);
    assert_eq!(result.search_results.len(), 4);

    let sections = ResultsRenderer::new(&Catalog::builtin(), Language::En).render(&result);
    let SectionBody::Links { items } = &sections[1].body else {
        panic!("links body");
    };
    let hrefs: Vec<&str> = items.iter().map(|i| i.href.as_str()).collect();
    assert_eq!(hrefs, ["https://a.org", "https://b.org", "https://c.org"]);
}

#[test]
fn long_urls_are_shortened_for_display_only() {
    let catalog = Catalog::builtin();
    let url = format!("https://example.org/{}", "segment/".repeat(10));
    let mut result = VerificationResult::with_score(90);
    result.search_results = vec![SearchHit {
        title: "Long".into(),
        url: url.clone(),
    }];

    let sections = ResultsRenderer::new(&catalog, Language::En).render(&result);
    let SectionBody::Links { items } = &sections[1].body else {
        panic!("links body");
    };
    assert_eq!(items[0].href, url);
    assert!(items[0].display_url.ends_with("..."));
    assert_eq!(items[0].display_url.chars().count(), 53);
}

#[test]
fn blank_explanation_is_omitted() {
    let catalog = Catalog::builtin();
    let mut result = VerificationResult::with_score(60);
    result.explanation = Some("  ".into());
    let sections = ResultsRenderer::new(&catalog, Language::En).render(&result);
    assert_eq!(kinds(&sections), vec![SectionKind::Verdict]);
}

#[test]
fn error_renders_as_single_section() {
    let catalog = Catalog::builtin();
    let renderer = ResultsRenderer::new(&catalog, Language::En);

    let sections = renderer.render_error(DisplayError::Validation(ValidationError::IsQuestion));
    assert_eq!(kinds(&sections), vec![SectionKind::Error]);
    let SectionBody::Error { message, .. } = &sections[0].body else {
        panic!("error body");
    };
    assert_eq!(message, "❌ Enter a statement, not a question");
    assert!(sections[0].dynamic_text().is_none());

    let sections = renderer.render_error(DisplayError::Server {
        message: Some("❌ Введіть текст".into()),
    });
    assert_eq!(sections[0].dynamic_text(), Some((EntryKey::ServerError, "❌ Введіть текст")));

    let sections = renderer.render_error(DisplayError::Server { message: None });
    let SectionBody::Error { message, .. } = &sections[0].body else {
        panic!("error body");
    };
    assert_eq!(message, "❌ Error");
}

#[test]
fn relabel_rederives_from_semantics() {
    let catalog = Catalog::builtin();
    let mut result = VerificationResult::with_score(30);
    result.fact_check_claims = vec![FactCheckClaim {
        claim_text: "c".into(),
        rating: None,
    }];
    let mut sections = ResultsRenderer::new(&catalog, Language::En).render(&result);

    for section in &mut sections {
        section.heading = "garbage".into();
        section.relabel(&catalog, Language::Uk);
    }
    assert_eq!(sections[0].heading, "📊 Оцінка достовірності");
    assert_eq!(sections[1].heading, "📰 Google FactCheck");
    let SectionBody::FactChecks { items } = &sections[1].body else {
        panic!("fact-check body");
    };
    assert_eq!(items[0].rating_label, "Нічого не знайдено");
}

#[test]
fn relabel_keeps_text_when_key_is_missing() {
    let mut catalog = Catalog::default();
    catalog.extend(
        Language::En,
        [("results.score".to_string(), "Score".to_string())],
    );
    let mut sections =
        ResultsRenderer::new(&catalog, Language::En).render(&VerificationResult::with_score(75));
    assert_eq!(sections[0].heading, "📊 Score");

    sections[0].relabel(&catalog, Language::Uk);
    assert_eq!(sections[0].heading, "📊 Score");
}

#[test]
fn dynamic_text_can_be_replaced_only_on_its_section() {
    let catalog = Catalog::builtin();
    let mut result = VerificationResult::with_score(75);
    result.explanation = Some("Original".into());
    let mut sections = ResultsRenderer::new(&catalog, Language::En).render(&result);

    assert!(!sections[0].set_dynamic_text(EntryKey::Explanation, "x"));
    assert!(sections[1].set_dynamic_text(EntryKey::Explanation, "Оригінал"));
    assert!(!sections[1].set_dynamic_text(EntryKey::ServerError, "x"));
    assert_eq!(sections[1].dynamic_text(), Some((EntryKey::Explanation, "Оригінал")));
}
