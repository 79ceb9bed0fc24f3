//! Renders a fully merged CV aggregate into the structured document
//! consumed by both the on-screen preview and the print/export
//! collaborator. The two presentations differ only in layout; they read
//! the identical structure produced here, so they cannot drift.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cv::domain::entities::CvAggregate;
use crate::profile::domain::entities::ProfileView;

/// Group label for skills whose category was left blank (prefilled
/// skills arrive without one).
const DEFAULT_SKILL_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub period: String,
    pub grade: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLine {
    pub name: String,
    pub level: Option<String>,
    pub years_of_experience: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
    pub certification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub organization: String,
    pub issued: String,
    pub expires: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub role: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub period: String,
}

/// A document section in its final presentation order. Sections with no
/// content are omitted entirely rather than rendered empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentSection {
    Summary(String),
    WorkExperience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<SkillGroup>),
    Languages(Vec<LanguageEntry>),
    Certifications(Vec<CertificationEntry>),
    Projects(Vec<ProjectEntry>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedCvDocument {
    pub header: DocumentHeader,
    pub sections: Vec<DocumentSection>,
}

/// Renders the aggregate into the stable, section-ordered document.
///
/// The aggregate must be fully merged (or prefilled); rendering the
/// root-only phase of a load is a caller error and silently produces a
/// document without sections.
pub fn render_cv_document(profile: &ProfileView, cv: &CvAggregate) -> RenderedCvDocument {
    let header = DocumentHeader {
        name: profile.display_name.clone(),
        title: profile.title.clone(),
        location: profile.location.clone(),
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        photo_url: profile.photo_url.clone(),
    };

    let mut sections = Vec::new();

    if !cv.summary.trim().is_empty() {
        sections.push(DocumentSection::Summary(cv.summary.clone()));
    }

    if !cv.experiences.is_empty() {
        let entries = cv
            .experiences
            .iter()
            .map(|e| ExperienceEntry {
                job_title: e.job_title.clone(),
                company: e.company.clone(),
                location: e.location.clone(),
                period: format_period(e.start_date, e.end_date, e.is_current),
                responsibilities: e.responsibilities.clone(),
                achievements: e.achievements.clone(),
            })
            .collect();
        sections.push(DocumentSection::WorkExperience(entries));
    }

    if !cv.educations.is_empty() {
        let entries = cv
            .educations
            .iter()
            .map(|e| EducationEntry {
                institution: e.institution.clone(),
                degree: e.degree.clone(),
                field_of_study: e.field_of_study.clone(),
                location: e.location.clone(),
                period: format_period(e.start_date, e.end_date, e.is_ongoing),
                grade: e.grade.clone(),
                description: e.description.clone(),
            })
            .collect();
        sections.push(DocumentSection::Education(entries));
    }

    if !cv.skills.is_empty() {
        sections.push(DocumentSection::Skills(group_skills(cv)));
    }

    if !cv.languages.is_empty() {
        let entries = cv
            .languages
            .iter()
            .map(|l| LanguageEntry {
                name: l.name.clone(),
                level: l.level.label().to_string(),
                certification: l.certification.clone(),
            })
            .collect();
        sections.push(DocumentSection::Languages(entries));
    }

    if !cv.certifications.is_empty() {
        let entries = cv
            .certifications
            .iter()
            .map(|c| CertificationEntry {
                name: c.name.clone(),
                organization: c.organization.clone(),
                issued: format_month_year(c.issue_date),
                expires: c.expiry_date.map(format_month_year),
                credential_id: c.credential_id.clone(),
                credential_url: c.credential_url.clone(),
                description: c.description.clone(),
            })
            .collect();
        sections.push(DocumentSection::Certifications(entries));
    }

    if !cv.projects.is_empty() {
        let entries = cv
            .projects
            .iter()
            .map(|p| ProjectEntry {
                name: p.name.clone(),
                role: p.role.clone(),
                description: p.description.clone(),
                technologies: p.technologies.clone(),
                url: p.url.clone(),
                period: format_period(p.start_date, p.end_date, p.is_ongoing),
            })
            .collect();
        sections.push(DocumentSection::Projects(entries));
    }

    RenderedCvDocument { header, sections }
}

/// Groups skills by category, categories in first-seen order, skills in
/// list order within a category.
fn group_skills(cv: &CvAggregate) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in &cv.skills {
        let category = if skill.category.trim().is_empty() {
            DEFAULT_SKILL_CATEGORY.to_string()
        } else {
            skill.category.clone()
        };
        let line = SkillLine {
            name: skill.name.clone(),
            level: skill.level.map(|l| l.label().to_string()),
            years_of_experience: skill.years_of_experience,
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(line),
            None => groups.push(SkillGroup {
                category,
                skills: vec![line],
            }),
        }
    }
    groups
}

/// "Month Year", e.g. "January 2020".
fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// An open-ended range renders its end as "Present"; a closed range with
/// no end date renders the start alone.
fn format_period(start: NaiveDate, end: Option<NaiveDate>, open_ended: bool) -> String {
    let start = format_month_year(start);
    if open_ended {
        return format!("{} – Present", start);
    }
    match end {
        Some(end) => format!("{} – {}", start, format_month_year(end)),
        None => start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::domain::entities::{
        Certification, Education, Language, LanguageLevel, Project, Skill, SkillLevel,
        WorkExperience,
    };
    use uuid::Uuid;

    fn profile() -> ProfileView {
        ProfileView {
            user_id: Uuid::new_v4(),
            display_name: "Jo Smit".to_string(),
            title: "Engineer".to_string(),
            location: "Rotterdam".to_string(),
            bio: "bio".to_string(),
            email: "jo@example.com".to_string(),
            phone: "+31 6 1234 5678".to_string(),
            skill_names: vec![],
            photo_url: "https://example.com/jo.jpg".to_string(),
        }
    }

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
            level: None,
            years_of_experience: None,
        }
    }

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn current_experience_renders_end_as_present() {
        let mut cv = CvAggregate::empty();
        cv.experiences.push(WorkExperience {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Utrecht".to_string(),
            start_date: date(2020, 1),
            end_date: None,
            is_current: true,
            responsibilities: vec![],
            achievements: vec![],
        });

        let doc = render_cv_document(&profile(), &cv);

        let entries = doc
            .sections
            .iter()
            .find_map(|s| match s {
                DocumentSection::WorkExperience(entries) => Some(entries),
                _ => None,
            })
            .expect("work experience section missing");
        assert_eq!(entries[0].period, "January 2020 – Present");
    }

    #[test]
    fn closed_experience_renders_both_ends() {
        let mut cv = CvAggregate::empty();
        cv.experiences.push(WorkExperience {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Utrecht".to_string(),
            start_date: date(2018, 3),
            end_date: Some(date(2019, 11)),
            is_current: false,
            responsibilities: vec![],
            achievements: vec![],
        });

        let doc = render_cv_document(&profile(), &cv);

        match &doc.sections[0] {
            DocumentSection::WorkExperience(entries) => {
                assert_eq!(entries[0].period, "March 2018 – November 2019");
            }
            other => panic!("Expected work experience first, got {:?}", other),
        }
    }

    #[test]
    fn skills_group_by_category_in_first_seen_order() {
        let mut cv = CvAggregate::empty();
        cv.skills = vec![
            skill("Go", "Programming"),
            skill("Welding", "Trades"),
            skill("Rust", "Programming"),
        ];

        let doc = render_cv_document(&profile(), &cv);

        let groups = doc
            .sections
            .iter()
            .find_map(|s| match s {
                DocumentSection::Skills(groups) => Some(groups),
                _ => None,
            })
            .expect("skills section missing");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Programming");
        let programming: Vec<&str> =
            groups[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(programming, vec!["Go", "Rust"]);
        assert_eq!(groups[1].category, "Trades");
        assert_eq!(groups[1].skills[0].name, "Welding");
    }

    #[test]
    fn blank_skill_category_falls_back_to_general() {
        let mut cv = CvAggregate::empty();
        cv.skills = vec![skill("X", ""), skill("Y", "")];

        let doc = render_cv_document(&profile(), &cv);

        match &doc.sections[0] {
            DocumentSection::Skills(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].category, "General");
                assert_eq!(groups[0].skills.len(), 2);
            }
            other => panic!("Expected skills section, got {:?}", other),
        }
    }

    #[test]
    fn empty_sections_are_omitted_and_order_is_fixed() {
        let mut cv = CvAggregate::empty();
        cv.summary = "A summary".to_string();
        cv.skills = vec![skill("Go", "Programming")];
        cv.languages = vec![Language {
            name: "Dutch".to_string(),
            level: LanguageLevel::Native,
            certification: None,
        }];
        cv.projects = vec![Project {
            name: "Tool".to_string(),
            description: "A tool".to_string(),
            technologies: vec!["Rust".to_string()],
            url: None,
            start_date: date(2022, 5),
            end_date: None,
            is_ongoing: true,
            role: "Author".to_string(),
        }];

        let doc = render_cv_document(&profile(), &cv);

        let tags: Vec<&str> = doc
            .sections
            .iter()
            .map(|s| match s {
                DocumentSection::Summary(_) => "summary",
                DocumentSection::WorkExperience(_) => "work_experience",
                DocumentSection::Education(_) => "education",
                DocumentSection::Skills(_) => "skills",
                DocumentSection::Languages(_) => "languages",
                DocumentSection::Certifications(_) => "certifications",
                DocumentSection::Projects(_) => "projects",
            })
            .collect();
        assert_eq!(tags, vec!["summary", "skills", "languages", "projects"]);
    }

    #[test]
    fn header_comes_from_the_profile() {
        let cv = CvAggregate::empty();
        let doc = render_cv_document(&profile(), &cv);

        assert_eq!(doc.header.name, "Jo Smit");
        assert_eq!(doc.header.title, "Engineer");
        assert_eq!(doc.header.email, "jo@example.com");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn full_document_keeps_all_sections_in_canonical_order() {
        let mut cv = CvAggregate::empty();
        cv.summary = "S".to_string();
        cv.experiences = vec![WorkExperience {
            job_title: "T".to_string(),
            company: "C".to_string(),
            location: "L".to_string(),
            start_date: date(2020, 1),
            end_date: None,
            is_current: true,
            responsibilities: vec![],
            achievements: vec![],
        }];
        cv.educations = vec![Education {
            institution: "I".to_string(),
            degree: "D".to_string(),
            field_of_study: "F".to_string(),
            location: "L".to_string(),
            start_date: date(2015, 9),
            end_date: Some(date(2019, 6)),
            is_ongoing: false,
            grade: "8/10".to_string(),
            description: String::new(),
        }];
        cv.skills = vec![skill("Go", "Programming")];
        cv.languages = vec![Language {
            name: "English".to_string(),
            level: LanguageLevel::Fluent,
            certification: Some("IELTS 8.0".to_string()),
        }];
        cv.certifications = vec![Certification {
            name: "CKA".to_string(),
            organization: "CNCF".to_string(),
            issue_date: date(2021, 3),
            expiry_date: Some(date(2024, 3)),
            credential_id: Some("abc-123".to_string()),
            credential_url: None,
            description: String::new(),
        }];
        cv.projects = vec![Project {
            name: "Tool".to_string(),
            description: "A tool".to_string(),
            technologies: vec![],
            url: None,
            start_date: date(2022, 5),
            end_date: Some(date(2023, 1)),
            is_ongoing: false,
            role: "Author".to_string(),
        }];

        let doc = render_cv_document(&profile(), &cv);

        assert_eq!(doc.sections.len(), 7);
        assert!(matches!(doc.sections[0], DocumentSection::Summary(_)));
        assert!(matches!(
            doc.sections[1],
            DocumentSection::WorkExperience(_)
        ));
        assert!(matches!(doc.sections[2], DocumentSection::Education(_)));
        assert!(matches!(doc.sections[3], DocumentSection::Skills(_)));
        assert!(matches!(doc.sections[4], DocumentSection::Languages(_)));
        assert!(matches!(
            doc.sections[5],
            DocumentSection::Certifications(_)
        ));
        assert!(matches!(doc.sections[6], DocumentSection::Projects(_)));

        match &doc.sections[5] {
            DocumentSection::Certifications(entries) => {
                assert_eq!(entries[0].issued, "March 2021");
                assert_eq!(entries[0].expires.as_deref(), Some("March 2024"));
            }
            _ => unreachable!(),
        }
    }
}
