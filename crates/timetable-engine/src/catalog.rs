//! Read-only course catalog: load once, then search and pick sections.
//!
//! The catalog never changes after [`Catalog::from_json`] returns, so a
//! shared reference can serve concurrent readers without locking.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::label::MeetingLabel;
use crate::projector::{MeetingDuration, MeetingSpec};

/// One course with all of its sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    /// Subject code, e.g. `"CS"`.
    #[serde(default)]
    pub subject: String,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// `"SUBJ NUMBER"`, or just the number when the subject is unknown.
    pub fn code(&self) -> String {
        if self.subject.is_empty() {
            self.number.clone()
        } else {
            format!("{} {}", self.subject, self.number)
        }
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.id.clone(),
            subject: self.subject.clone(),
            number: self.number.clone(),
            title: self.title.clone(),
            section_count: self.sections.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub crn: String,
    /// Section type, e.g. `"Lecture"`, `"Laboratory"`.
    #[serde(default)]
    pub kind: String,
    /// `YYYY-MM-DD` or an ISO 8601 date-time; unrecognized text loads as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    /// Campus id, e.g. `"West Lafayette"`.
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub meetings: Vec<CatalogMeeting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeeting {
    #[serde(default)]
    pub days: DayList,
    #[serde(default)]
    pub start: Option<String>,
    /// Missing or null durations become zero minutes, which the projector
    /// skips for this meeting alone.
    #[serde(default)]
    pub duration: Option<MeetingDuration>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub instructors: Vec<String>,
}

impl CatalogMeeting {
    /// `"BLDG ROOM"` when both parts are known.
    pub fn location(&self) -> Option<String> {
        match (self.building.as_deref(), self.room.as_deref()) {
            (Some(building), Some(room)) if !building.is_empty() && !room.is_empty() => {
                Some(format!("{building} {room}"))
            }
            _ => None,
        }
    }
}

/// Meeting days as stored: either a JSON array or one comma-joined string
/// (`"Monday,Wednesday"`). `"None"` and blank strings mean no days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayList {
    List(Vec<String>),
    Joined(String),
}

impl Default for DayList {
    fn default() -> Self {
        DayList::List(Vec::new())
    }
}

impl DayList {
    pub fn to_vec(&self) -> Vec<String> {
        let parts: Vec<&str> = match self {
            DayList::List(days) => days.iter().map(String::as_str).collect(),
            DayList::Joined(joined) if joined.trim().eq_ignore_ascii_case("none") => Vec::new(),
            DayList::Joined(joined) => joined.split(',').collect(),
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Search result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub subject: String,
    pub number: String,
    pub title: String,
    pub section_count: usize,
}

/// In-memory index over a list of courses.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Sorted by title, then number.
    courses: Vec<Course>,
    course_by_id: HashMap<String, usize>,
    /// Section id to `(course, section)` positions.
    section_by_id: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// Load a JSON array of courses.
    pub fn from_json(reader: impl Read) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_reader(reader)?;
        Ok(Self::from_courses(courses))
    }

    /// Index courses, sorting them by title then number and each course's
    /// sections by CRN.
    pub fn from_courses(mut courses: Vec<Course>) -> Self {
        courses.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.number.cmp(&b.number)));
        for course in &mut courses {
            course.sections.sort_by(|a, b| a.crn.cmp(&b.crn));
        }

        let mut course_by_id = HashMap::with_capacity(courses.len());
        let mut section_by_id = HashMap::new();
        for (ci, course) in courses.iter().enumerate() {
            course_by_id.insert(course.id.clone(), ci);
            for (si, section) in course.sections.iter().enumerate() {
                section_by_id.insert(section.id.clone(), (ci, si));
            }
        }

        debug!(
            courses = courses.len(),
            sections = section_by_id.len();
            "Indexed catalog"
        );

        Self {
            courses,
            course_by_id,
            section_by_id,
        }
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.course_by_id.get(id).map(|&ci| &self.courses[ci])
    }

    /// Case-insensitive course search, at most `limit` results (0 = no limit).
    ///
    /// - Empty query: the first `limit` courses in title order.
    /// - `"SUBJ NUM"`: subject equal to the first word and number containing
    ///   the second.
    /// - Otherwise: substring of `"SUBJ NUM"`, title, number or subject.
    pub fn search(&self, query: &str, limit: usize) -> Vec<CourseSummary> {
        self.search_where(query, limit, |_| true)
    }

    /// [`Catalog::search`] restricted to courses with at least one section on
    /// `campus`. The limit counts matches after filtering. A blank campus
    /// means no filter.
    pub fn search_on_campus(&self, query: &str, limit: usize, campus: &str) -> Vec<CourseSummary> {
        let campus = campus.trim();
        if campus.is_empty() {
            return self.search(query, limit);
        }
        self.search_where(query, limit, |course| offered_on(course, campus))
    }

    fn search_where(
        &self,
        query: &str,
        limit: usize,
        keep: impl Fn(&Course) -> bool,
    ) -> Vec<CourseSummary> {
        let query = query.trim().to_lowercase();
        let cap = if limit == 0 { usize::MAX } else { limit };
        let words: Vec<&str> = query.split_whitespace().collect();

        self.courses
            .iter()
            .filter(|&course| keep(course))
            .filter(|course| query.is_empty() || matches_query(course, &query, &words))
            .take(cap)
            .map(Course::summary)
            .collect()
    }

    /// Distinct subject codes, sorted.
    pub fn departments(&self) -> Vec<String> {
        departments_of(self.courses.iter())
    }

    /// Subjects with at least one section on `campus`. A blank campus means
    /// no filter.
    pub fn departments_on_campus(&self, campus: &str) -> Vec<String> {
        let campus = campus.trim();
        if campus.is_empty() {
            return self.departments();
        }
        departments_of(self.courses.iter().filter(|c| offered_on(c, campus)))
    }

    /// Sorted distinct campus ids across every section.
    pub fn campuses(&self) -> Vec<String> {
        self.courses
            .iter()
            .flat_map(|c| &c.sections)
            .filter_map(|s| s.campus.as_deref().map(str::trim))
            .filter(|campus| !campus.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn sections_for(&self, course_id: &str) -> &[Section] {
        self.course(course_id)
            .map(|c| c.sections.as_slice())
            .unwrap_or_default()
    }

    /// Sections of a course held on `campus`, in CRN order. A blank campus
    /// returns every section.
    pub fn sections_for_campus(&self, course_id: &str, campus: &str) -> Vec<&Section> {
        let campus = campus.trim();
        self.sections_for(course_id)
            .iter()
            .filter(|s| campus.is_empty() || on_campus(s, campus))
            .collect()
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.section_by_id
            .get(section_id)
            .map(|&(ci, si)| &self.courses[ci].sections[si])
    }

    pub fn course_for_section(&self, section_id: &str) -> Option<&Course> {
        self.section_by_id
            .get(section_id)
            .map(|&(ci, _)| &self.courses[ci])
    }

    /// Meetings of the given sections, ready for layout.
    ///
    /// Unknown section ids are skipped; callers that want to report them
    /// can check [`Catalog::section`] first. Output follows the order
    /// of `section_ids`, then each section's meeting order.
    pub fn meeting_specs<S: AsRef<str>>(&self, section_ids: &[S]) -> Vec<MeetingSpec<MeetingLabel>> {
        let mut specs = Vec::new();

        for id in section_ids {
            let id = id.as_ref();
            let Some(&(ci, si)) = self.section_by_id.get(id) else {
                debug!("Unknown section id {id:?}");
                continue;
            };
            let course = &self.courses[ci];
            let section = &course.sections[si];

            for meeting in &section.meetings {
                let label = MeetingLabel {
                    title: course.code(),
                    kind: Some(section.kind.clone()).filter(|k| !k.is_empty()),
                    instructor: Some(
                        meeting
                            .instructors
                            .iter()
                            .map(|name| name.trim())
                            .find(|name| !name.is_empty())
                            .unwrap_or("TBA")
                            .to_string(),
                    ),
                    location: meeting.location(),
                    category: Some(course.subject.clone()).filter(|s| !s.is_empty()),
                };
                specs.push(MeetingSpec {
                    days: meeting.days.to_vec(),
                    start: meeting.start.clone(),
                    duration: meeting
                        .duration
                        .clone()
                        .unwrap_or(MeetingDuration::Minutes(0)),
                    payload: label,
                });
            }
        }

        specs
    }
}

fn on_campus(section: &Section, campus: &str) -> bool {
    section.campus.as_deref().map(str::trim) == Some(campus)
}

fn offered_on(course: &Course, campus: &str) -> bool {
    course.sections.iter().any(|s| on_campus(s, campus))
}

fn departments_of<'a>(courses: impl Iterator<Item = &'a Course>) -> Vec<String> {
    courses
        .filter(|c| !c.subject.is_empty())
        .map(|c| c.subject.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.as_deref().and_then(parse_catalog_date))
}

fn parse_catalog_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    if date.is_none() && !text.is_empty() {
        debug!("Ignoring unrecognized section date {text:?}");
    }
    date
}

fn matches_query(course: &Course, query: &str, words: &[&str]) -> bool {
    let subject = course.subject.to_lowercase();
    let number = course.number.to_lowercase();

    if let [first, second, ..] = words {
        if subject == *first && number.contains(second) {
            return true;
        }
    }

    format!("{subject} {number}").contains(query)
        || course.title.to_lowercase().contains(query)
        || number.contains(query)
        || subject.contains(query)
}
