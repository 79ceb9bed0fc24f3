use crate::cv::domain::entities::{
    Certification, CvAggregate, Education, Language, Project, SectionKind, Skill, WorkExperience,
};

/// A section item tagged with the section it belongs to. The variant is
/// the section, so an entry can never be appended to the wrong list.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionEntry {
    WorkExperience(WorkExperience),
    Education(Education),
    Skill(Skill),
    Language(Language),
    Certification(Certification),
    Project(Project),
}

impl SectionEntry {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionEntry::WorkExperience(_) => SectionKind::WorkExperience,
            SectionEntry::Education(_) => SectionKind::Education,
            SectionEntry::Skill(_) => SectionKind::Skills,
            SectionEntry::Language(_) => SectionKind::Languages,
            SectionEntry::Certification(_) => SectionKind::Certifications,
            SectionEntry::Project(_) => SectionKind::Projects,
        }
    }
}

/// In-memory editing surface over a loaded or prefilled aggregate.
///
/// All operations are synchronous and total: an out-of-range index or a
/// kind mismatch is a programming error and panics. Nothing here talks
/// to a store; the caller persists by handing a [`CvEditor::snapshot`]
/// to the save use case.
#[derive(Debug, Clone)]
pub struct CvEditor {
    cv: CvAggregate,
}

impl CvEditor {
    pub fn new(cv: CvAggregate) -> Self {
        Self { cv }
    }

    pub fn aggregate(&self) -> &CvAggregate {
        &self.cv
    }

    /// The current state of the aggregate, cloned for a save call. The
    /// save path reads this snapshot once and never the live editor.
    pub fn snapshot(&self) -> CvAggregate {
        self.cv.clone()
    }

    pub fn into_aggregate(self) -> CvAggregate {
        self.cv
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.cv.summary = summary.into();
    }

    pub fn set_citizenship(&mut self, citizenship: impl Into<String>) {
        self.cv.citizenship = citizenship.into();
    }

    pub fn set_work_permit(&mut self, work_permit: impl Into<String>) {
        self.cv.work_permit = work_permit.into();
    }

    pub fn set_driving_license(&mut self, has_driving_license: bool) {
        self.cv.has_driving_license = has_driving_license;
    }

    /// Appends the entry to its section, preserving insertion order.
    pub fn add_item(&mut self, entry: SectionEntry) {
        match normalize(entry) {
            SectionEntry::WorkExperience(item) => self.cv.experiences.push(item),
            SectionEntry::Education(item) => self.cv.educations.push(item),
            SectionEntry::Skill(item) => self.cv.skills.push(item),
            SectionEntry::Language(item) => self.cv.languages.push(item),
            SectionEntry::Certification(item) => self.cv.certifications.push(item),
            SectionEntry::Project(item) => self.cv.projects.push(item),
        }
    }

    /// Removes the item at `index`; later items shift down one position.
    ///
    /// Panics if `index` is out of range.
    pub fn remove_item(&mut self, section: SectionKind, index: usize) {
        match section {
            SectionKind::WorkExperience => drop(self.cv.experiences.remove(index)),
            SectionKind::Education => drop(self.cv.educations.remove(index)),
            SectionKind::Skills => drop(self.cv.skills.remove(index)),
            SectionKind::Languages => drop(self.cv.languages.remove(index)),
            SectionKind::Certifications => drop(self.cv.certifications.remove(index)),
            SectionKind::Projects => drop(self.cv.projects.remove(index)),
        }
    }

    /// Replaces the item at `index` in place, keeping its position.
    ///
    /// Panics if `index` is out of range or if the entry does not belong
    /// to `section`.
    pub fn update_item(&mut self, section: SectionKind, index: usize, entry: SectionEntry) {
        assert_eq!(
            entry.kind(),
            section,
            "entry kind {} does not match section {}",
            entry.kind(),
            section
        );
        match normalize(entry) {
            SectionEntry::WorkExperience(item) => self.cv.experiences[index] = item,
            SectionEntry::Education(item) => self.cv.educations[index] = item,
            SectionEntry::Skill(item) => self.cv.skills[index] = item,
            SectionEntry::Language(item) => self.cv.languages[index] = item,
            SectionEntry::Certification(item) => self.cv.certifications[index] = item,
            SectionEntry::Project(item) => self.cv.projects[index] = item,
        }
    }
}

/// An open-ended range keeps no end date: `is_current`/`is_ongoing`
/// wins over whatever end date the caller left behind.
fn normalize(entry: SectionEntry) -> SectionEntry {
    match entry {
        SectionEntry::WorkExperience(mut item) => {
            if item.is_current {
                item.end_date = None;
            }
            SectionEntry::WorkExperience(item)
        }
        SectionEntry::Education(mut item) => {
            if item.is_ongoing {
                item.end_date = None;
            }
            SectionEntry::Education(item)
        }
        SectionEntry::Project(mut item) => {
            if item.is_ongoing {
                item.end_date = None;
            }
            SectionEntry::Project(item)
        }
        other => other,
    }
}
