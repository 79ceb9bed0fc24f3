use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six ordered section collections a CV is made of. The `as_str`
/// form is also the discriminator value stored alongside every
/// persisted section row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    WorkExperience,
    Education,
    Skills,
    Languages,
    Certifications,
    Projects,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::WorkExperience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Certifications,
        SectionKind::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::WorkExperience => "work_experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill proficiency, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

/// Language proficiency, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageLevel {
    Basic,
    Conversational,
    Fluent,
    Native,
}

impl LanguageLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LanguageLevel::Basic => "Basic",
            LanguageLevel::Conversational => "Conversational",
            LanguageLevel::Fluent => "Fluent",
            LanguageLevel::Native => "Native",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub grade: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Free-text display-grouping key. Empty for prefilled skills.
    pub category: String,
    pub level: Option<SkillLevel>,
    pub years_of_experience: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: LanguageLevel,
    pub certification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub organization: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub role: String,
}

/// The CV aggregate: one root record plus the six section collections,
/// loaded and saved as a unit. List position is the presentation order;
/// the stores mirror it into a `display_order` column on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAggregate {
    /// None until the first save assigns a persisted root.
    pub id: Option<Uuid>,
    pub summary: String,
    pub citizenship: String,
    pub work_permit: String,
    pub has_driving_license: bool,
    pub experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
}

impl CvAggregate {
    /// An aggregate with the given root fields and all sections empty.
    pub fn root_only(
        id: Uuid,
        summary: String,
        citizenship: String,
        work_permit: String,
        has_driving_license: bool,
    ) -> Self {
        Self {
            id: Some(id),
            summary,
            citizenship,
            work_permit,
            has_driving_license,
            experiences: Vec::new(),
            educations: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
        }
    }

    /// A blank, unpersisted aggregate.
    pub fn empty() -> Self {
        Self {
            id: None,
            summary: String::new(),
            citizenship: String::new(),
            work_permit: String::new(),
            has_driving_license: false,
            experiences: Vec::new(),
            educations: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn section_len(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::WorkExperience => self.experiences.len(),
            SectionKind::Education => self.educations.len(),
            SectionKind::Skills => self.skills.len(),
            SectionKind::Languages => self.languages.len(),
            SectionKind::Certifications => self.certifications.len(),
            SectionKind::Projects => self.projects.len(),
        }
    }
}
