use crate::projects::{tech_keywords, Project};
use crate::refs::{ObjectReferences, RefType};
use chrono::prelude::*;
use pdf_writer::{Finish, Name, Pdf, Str, TextStr};

const CREATOR: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Document metadata shown in a reader's properties dialog
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    /// Whoever the CV belongs to
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Comma separated, e.g. the technologies a CV mentions
    pub keywords: Option<String>,
}

impl Info {
    /// An info block with nothing set
    pub fn new() -> Info {
        Info::default()
    }

    /// Metadata for a projects export: titled "Projects", with every
    /// technology the projects list as keywords
    pub fn for_projects(projects: &[Project]) -> Info {
        let keywords = tech_keywords(projects);
        Info {
            title: Some("Projects".to_string()),
            subject: Some("CV projects section".to_string()),
            keywords: (!keywords.is_empty()).then_some(keywords),
            ..Info::default()
        }
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    fn entries(&self) -> [(&'static [u8], Option<&str>); 4] {
        [
            (b"Title".as_slice(), self.title.as_deref()),
            (b"Author".as_slice(), self.author.as_deref()),
            (b"Subject".as_slice(), self.subject.as_deref()),
            (b"Keywords".as_slice(), self.keywords.as_deref()),
        ]
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        for (key, value) in self.entries() {
            if let Some(value) = value {
                info.pair(Name(key), TextStr(value));
            }
        }
        info.creator(TextStr(CREATOR));
        info.pair(Name(b"CreationDate"), Str(pdf_date(Local::now()).as_bytes()));
        info.finish();
    }
}

/// A PDF date string (`D:YYYYMMDDHHmmSSOHH'mm`) for a timestamp, keeping
/// its UTC offset. The sign comes from the whole offset, so offsets under an
/// hour west of UTC stay negative.
fn pdf_date<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let offset_seconds = at.offset().fix().local_minus_utc();
    let stamp = at.format("D:%Y%m%d%H%M%S");
    if offset_seconds == 0 {
        return format!("{stamp}Z");
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let minutes = offset_seconds.unsigned_abs() / 60;
    format!("{stamp}{sign}{:02}'{:02}", minutes / 60, minutes % 60)
}
