use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("invalid content in {file}: {reason}")]
    Invalid { file: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Development,
    Design,
    Data,
    Devops,
    Business,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Expert => "Expert",
        }
    }
}

/// A certificate or credential with a link to its full document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub document_ref: String,
    #[serde(default)]
    pub preview_ref: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tier: Option<Tier>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillArea {
    Frontend,
    Backend,
    Devops,
    Design,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Proficient,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Proficient => "Proficient",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    /// Percentage in `0..=100`.
    pub level: u8,
    pub area: SkillArea,
    pub technologies: Vec<String>,
}

impl SkillRecord {
    pub const INDICATOR_DOTS: u8 = 5;

    pub fn proficiency(&self) -> Proficiency {
        match self.level {
            90..=u8::MAX => Proficiency::Expert,
            80..=89 => Proficiency::Advanced,
            70..=79 => Proficiency::Proficient,
            60..=69 => Proficiency::Intermediate,
            _ => Proficiency::Beginner,
        }
    }

    /// Number of filled dots in the five-dot level indicator.
    pub fn filled_dots(&self) -> u8 {
        (self.level / 20).min(Self::INDICATOR_DOTS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Name used to greet the owner in generated contact emails.
    pub greeting_name: String,
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub phone_href: String,
    pub location: String,
    pub response_time: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Everything the pages render, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub certificates: Vec<DocumentRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillRecord>,
    pub timeline: Timeline,
    pub faqs: Vec<Faq>,
}

impl SiteContent {
    fn load() -> Result<Self, ContentError> {
        let content = Self {
            profile: read_asset("profile.json")?,
            certificates: read_asset("certificates.json")?,
            projects: read_asset("projects.json")?,
            skills: read_asset("skills.json")?,
            timeline: read_asset("timeline.json")?,
            faqs: read_asset("faq.json")?,
        };
        content.validate()?;
        log::debug!(
            "loaded site content: {} certificates, {} projects, {} skills",
            content.certificates.len(),
            content.projects.len(),
            content.skills.len()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        validate_certificates(&self.certificates)?;
        validate_skills(&self.skills)
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter().filter(|p| p.featured)
    }
}

/// Returns the embedded site content, parsing it on first use.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

fn read_asset<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    parse_json(name, &file.data)
}

fn parse_json<T: DeserializeOwned>(name: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

fn validate_certificates(records: &[DocumentRecord]) -> Result<(), ContentError> {
    match records.iter().find(|r| r.document_ref.trim().is_empty()) {
        Some(r) => Err(ContentError::Invalid {
            file: "certificates.json".to_string(),
            reason: format!("'{}' has no document", r.title),
        }),
        None => Ok(()),
    }
}

fn validate_skills(skills: &[SkillRecord]) -> Result<(), ContentError> {
    match skills.iter().find(|s| s.level > 100) {
        Some(s) => Err(ContentError::Invalid {
            file: "skills.json".to_string(),
            reason: format!("'{}' has level {} (max 100)", s.name, s.level),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: u8) -> SkillRecord {
        SkillRecord {
            name: "Rust".to_string(),
            level,
            area: SkillArea::Backend,
            technologies: vec![],
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = site_content().expect("embedded content should be valid");

        let cert = &content.certificates[0];
        assert_eq!(cert.title, "Frontend Web Development");
        assert_eq!(cert.document_ref, "/certificates/frontend.pdf");
        assert_eq!(cert.tier, Some(Tier::Advanced));
        assert_eq!(cert.category, Category::Development);
        assert_eq!(
            cert.tags,
            vec!["React", "Next.js", "TypeScript", "Tailwind CSS"]
        );

        assert!(!content.profile.email.is_empty());
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.featured_projects().count(), content.projects.len());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = br#"[{
            "title": "Data Analysis",
            "issuer": "Somewhere",
            "date": "May 2024",
            "document_ref": "/certificates/data.pdf",
            "category": "data"
        }]"#;
        let records: Vec<DocumentRecord> = parse_json("certificates.json", json).unwrap();

        let record = &records[0];
        assert_eq!(record.preview_ref, None);
        assert_eq!(record.credential_id, None);
        assert!(record.tags.is_empty());
        assert_eq!(record.tier, None);
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let json = br#"{
            "title": "Cooking",
            "issuer": "Kitchen",
            "date": "2023",
            "document_ref": "/certificates/cooking.pdf",
            "category": "culinary"
        }"#;
        let record: DocumentRecord = parse_json("certificates.json", json).unwrap();
        assert_eq!(record.category, Category::Other);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_json::<Vec<DocumentRecord>>("certificates.json", b"{ nope").unwrap_err();
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, "certificates.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_asset() {
        let err = read_asset::<Vec<Faq>>("does-not-exist.json").unwrap_err();
        assert_eq!(err, ContentError::Missing("does-not-exist.json".to_string()));
    }

    #[test]
    fn test_validation_rejects_bad_records() {
        let record = DocumentRecord {
            title: "Blank".to_string(),
            issuer: "Nobody".to_string(),
            date: "2024".to_string(),
            document_ref: "  ".to_string(),
            preview_ref: None,
            credential_id: None,
            tags: vec![],
            tier: None,
            category: Category::Other,
        };
        assert!(matches!(
            validate_certificates(&[record]),
            Err(ContentError::Invalid { .. })
        ));
        assert!(matches!(
            validate_skills(&[skill(101)]),
            Err(ContentError::Invalid { .. })
        ));
        assert!(validate_skills(&[skill(100)]).is_ok());
    }

    #[test]
    fn test_proficiency_thresholds() {
        assert_eq!(skill(95).proficiency(), Proficiency::Expert);
        assert_eq!(skill(90).proficiency(), Proficiency::Expert);
        assert_eq!(skill(89).proficiency(), Proficiency::Advanced);
        assert_eq!(skill(70).proficiency(), Proficiency::Proficient);
        assert_eq!(skill(60).proficiency(), Proficiency::Intermediate);
        assert_eq!(skill(59).proficiency(), Proficiency::Beginner);
        assert_eq!(skill(0).proficiency().label(), "Beginner");
    }

    #[test]
    fn test_filled_dots() {
        assert_eq!(skill(0).filled_dots(), 0);
        assert_eq!(skill(50).filled_dots(), 2);
        assert_eq!(skill(70).filled_dots(), 3);
        assert_eq!(skill(100).filled_dots(), 5);
    }
}
