//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern. With a `+` country code: optional (area code), then
    // 3-4 digit groups. Without one: 3-3-4, area code optionally in
    // parentheses. Digit totals are checked by the extractor.
    pub static ref PHONE: Regex = Regex::new(
        r"\+\d{1,3}[\s.\-]?(?:\(\d{1,4}\)[\s.\-]?)?\d{3,4}(?:[\s.\-]?\d{3,4}){1,2}|(?:\(\d{3}\)[\s.\-]?|\d{3}[\s.\-]?)\d{3}[\s.\-]?\d{4}"
    ).unwrap();

    // Letters, spaces and periods only
    pub static ref NAME_SHAPE: Regex = Regex::new(
        r"^[\p{L}. ]+$"
    ).unwrap();

    // Heading that opens a skills section, followed by ':' / '-' or end of line
    pub static ref SKILLS_HEADING: Regex = Regex::new(
        r"(?i)^\s*(?:technical\s+skills|core\s+skills|key\s+skills|professional\s+skills|areas\s+of\s+expertise|skills|expertise)\s*(?:[:\-–]|$)"
    ).unwrap();

    // Heading of any other section; closes a skills section
    pub static ref SECTION_HEADING: Regex = Regex::new(
        r"(?i)^\s*(?:work\s+experience|professional\s+experience|employment\s+history|experience|education|projects|certifications|summary|profile|objective|interests|references|awards|publications|volunteer(?:ing)?)\s*(?:[:\-–]|$)"
    ).unwrap();

    // Separators between skill tokens
    pub static ref SKILL_SEPARATOR: Regex = Regex::new(
        r"[,;|\n•●▪◦·‣∙■□➢►✓]"
    ).unwrap();
}

/// Words that mark a line as a heading rather than a person's name.
pub const HEADING_WORDS: &[&str] = &[
    "resume",
    "résumé",
    "curriculum",
    "vitae",
    "cv",
    "summary",
    "qualifications",
    "objective",
    "profile",
    "experience",
    "education",
    "skills",
    "contact",
    "references",
    "projects",
    "certifications",
    "expertise",
];
