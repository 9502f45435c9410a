use std::sync::Arc;

use pretty_assertions::assert_eq;

use skilllens_core::{
    extract_fields, normalize, normalize_lines, DocumentDecoder, ResumeExtractor, ResumeParser,
    SkillEntry, SkillStrategy, SkillVocabulary,
};

const RESUME: &str = "John A. Smith\r\n\
Portland, OR\talice.smith@example.com\u{0}(503) 555-0142\n\
\n\
Skills: Python, SQL, Docker\n\
Experience\n\
Senior engineer building Kubernetes and JavaScript tooling\n";

#[test]
fn extraction_is_total() {
    let inputs = [
        "",
        "\0\0\0",
        "   \n\t ",
        "@@@ ... +++ (((",
        "Skills:",
        "Skills:\nExperience",
        "\u{FFFD}\u{2028}ñ",
    ];

    for input in inputs {
        let result = extract_fields(input);
        assert_eq!(result.text, normalize(input));
        assert!(result.skills.iter().all(|s| !s.is_empty()));
    }
}

#[test]
fn normalization_is_idempotent() {
    for input in [RESUME, "", "a\u{000B}b\u{2029}c", " x \0 y "] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);

        let lines = normalize_lines(input);
        assert_eq!(normalize_lines(&lines), lines);
    }
}

#[test]
fn full_resume() {
    let result = extract_fields(RESUME);

    assert_eq!(result.name.as_deref(), Some("John A. Smith"));
    assert_eq!(result.email.as_deref(), Some("alice.smith@example.com"));
    assert_eq!(result.phone.as_deref(), Some("(503) 555-0142"));
    assert_eq!(result.skills, vec!["docker", "python", "sql"]);
}

#[test]
fn no_email_is_none() {
    let result = extract_fields("Jane Doe\nreach me at jane at example dot com");
    assert_eq!(result.email, None);
}

#[test]
fn heading_first_line_is_not_a_name() {
    let result = extract_fields("SUMMARY OF QUALIFICATIONS\nJohn A. Smith");
    assert_eq!(result.name, None);
}

#[test]
fn whole_word_case_insensitive_matching() {
    let parser = ResumeParser::new().with_skill_strategy(SkillStrategy::Document);

    let result = parser.extract_fields("Wrote JAVASCRIPT every day");
    assert!(result.has_skill("javascript"));
    assert!(!result.has_skill("java"));

    let result = parser.extract_fields("Wrote javascript and some Java");
    assert!(result.has_skill("javascript"));
    assert!(result.has_skill("java"));
}

#[test]
fn repeated_skills_are_deduplicated() {
    let parser = ResumeParser::new().with_skill_strategy(SkillStrategy::Document);
    let result = parser.extract_fields("Docker docker DOCKER, postgres and PostgreSQL");

    assert_eq!(result.skills, vec!["docker", "postgresql"]);
}

#[test]
fn decoded_text_flows_into_parser() {
    let document = DocumentDecoder::new()
        .decode_to_text(RESUME.as_bytes(), "")
        .unwrap();
    let result = extract_fields(&document.text);

    assert_eq!(result.name.as_deref(), Some("John A. Smith"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_extraction_shares_one_parser() {
    let vocabulary = Arc::new(
        SkillVocabulary::new([
            SkillEntry::new("python"),
            SkillEntry::new("sql"),
            SkillEntry::with_aliases("docker", ["containers"]),
        ])
        .unwrap(),
    );
    let parser = Arc::new(ResumeParser::new().with_vocabulary(vocabulary));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let parser = Arc::clone(&parser);
            tokio::task::spawn_blocking(move || {
                let text = format!("Candidate {}\nSkills: Python, SQL, Docker\nExperience\n", i);
                parser.extract_fields(&text)
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert_eq!(result.skills, vec!["docker", "python", "sql"]);
    }
}
