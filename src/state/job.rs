//! Job listing record and its editable fields.

use super::error::StateError;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Defines job listing data structure.
///
/// Dates are ISO `YYYY-MM-DD` strings. No field is checked at construction;
/// validation happens in the job form.
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>, // None until stored on the board
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub skills: String,
    pub category: String,
    pub date_of_post: String,
    pub last_date: String,
}

impl JobRecord {
    /// Return the value of the given field.
    ///
    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::Description => &self.description,
            JobField::Location => &self.location,
            JobField::Salary => &self.salary,
            JobField::Skills => &self.skills,
            JobField::Category => &self.category,
            JobField::DateOfPost => &self.date_of_post,
            JobField::LastDate => &self.last_date,
        }
    }

    /// Return a mutable reference to the value of the given field.
    ///
    pub fn get_mut(&mut self, field: JobField) -> &mut String {
        match field {
            JobField::Title => &mut self.title,
            JobField::Description => &mut self.description,
            JobField::Location => &mut self.location,
            JobField::Salary => &mut self.salary,
            JobField::Skills => &mut self.skills,
            JobField::Category => &mut self.category,
            JobField::DateOfPost => &mut self.date_of_post,
            JobField::LastDate => &mut self.last_date,
        }
    }
}

/// Specifying the editable fields of a job listing, in form order.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum JobField {
    Title,
    Description,
    Location,
    Salary,
    Skills,
    Category,
    DateOfPost,
    LastDate,
}

impl JobField {
    pub const ALL: [JobField; 8] = [
        JobField::Title,
        JobField::Description,
        JobField::Location,
        JobField::Salary,
        JobField::Skills,
        JobField::Category,
        JobField::DateOfPost,
        JobField::LastDate,
    ];

    /// Return the serialized field name.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Description => "description",
            JobField::Location => "location",
            JobField::Salary => "salary",
            JobField::Skills => "skills",
            JobField::Category => "category",
            JobField::DateOfPost => "dateOfPost",
            JobField::LastDate => "lastDate",
        }
    }

    /// Return the label shown next to the field.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            JobField::Title => "Job Title",
            JobField::Description => "Job Description",
            JobField::Location => "Location",
            JobField::Salary => "Salary",
            JobField::Skills => "Skills",
            JobField::Category => "Category",
            JobField::DateOfPost => "Date of Post",
            JobField::LastDate => "Last Date",
        }
    }

    /// Return the placeholder shown while the field is empty.
    ///
    pub fn placeholder(&self) -> &'static str {
        match self {
            JobField::Title => "Enter job title",
            JobField::Description => "Enter job description",
            JobField::Location => "Enter job location",
            JobField::Salary => "Enter job salary",
            JobField::Skills => "Enter required skills",
            JobField::Category => "Enter job category",
            JobField::DateOfPost => "YYYY-MM-DD",
            JobField::LastDate => "YYYY-MM-DD",
        }
    }

    /// Return the next field, wrapping to the first.
    ///
    pub fn next(&self) -> JobField {
        let index = self.index();
        JobField::ALL[(index + 1) % JobField::ALL.len()]
    }

    /// Return the previous field, wrapping to the last.
    ///
    pub fn previous(&self) -> JobField {
        let index = self.index();
        JobField::ALL[(index + JobField::ALL.len() - 1) % JobField::ALL.len()]
    }

    fn index(&self) -> usize {
        JobField::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for JobField {
    type Err = StateError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        JobField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| StateError::UnknownField(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn get_and_get_mut_cover_every_field() {
        let mut record = JobRecord::default();
        for field in JobField::ALL {
            *record.get_mut(field) = field.name().to_string();
        }
        for field in JobField::ALL {
            assert_eq!(record.get(field), field.name());
        }
        assert_eq!(record.date_of_post, "dateOfPost");
        assert_eq!(record.id, None);
    }

    #[test]
    fn field_from_name() {
        for field in JobField::ALL {
            assert_eq!(field.name().parse::<JobField>().unwrap(), field);
        }
        let error = "salaryRange".parse::<JobField>().unwrap_err();
        assert!(error.to_string().contains("salaryRange"));
    }

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(JobField::Title.next(), JobField::Description);
        assert_eq!(JobField::LastDate.next(), JobField::Title);
        assert_eq!(JobField::Title.previous(), JobField::LastDate);
        assert_eq!(JobField::DateOfPost.previous(), JobField::Category);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = JobRecord {
            id: None,
            title: "Engineer".to_string(),
            date_of_post: "2024-01-10".to_string(),
            last_date: "2024-02-10".to_string(),
            ..JobRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["dateOfPost"], "2024-01-10");
        assert_eq!(value["lastDate"], "2024-02-10");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn record_deserializes_without_id() {
        let record: JobRecord = serde_json::from_str(
            r#"{"title":"t","description":"d","location":"l","salary":"s",
                "skills":"k","category":"c","dateOfPost":"2024-01-01","lastDate":"2024-02-01"}"#,
        )
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.last_date, "2024-02-01");
    }

    #[test]
    fn fake_record_is_cloned_faithfully() {
        let record: JobRecord = Faker.fake();
        assert_eq!(record.clone(), record);
    }
}
