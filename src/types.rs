use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of project categories. The lowercase forms are what the
/// frontend's category filter sends.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fullstack,
    Backend,
    Frontend,
    Api,
}

impl Category {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fullstack" => Some(Category::Fullstack),
            "backend" => Some(Category::Backend),
            "frontend" => Some(Category::Frontend),
            "api" => Some(Category::Api),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fullstack => "fullstack",
            Category::Backend => "backend",
            Category::Frontend => "frontend",
            Category::Api => "api",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Portrait,
    Landscape,
    Square,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub aspect_ratio: AspectRatio,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One portfolio entry. `slug` is the external lookup key used in URLs;
/// `id` stays internal to the dataset.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub year: String,
    pub slug: String,
    pub cover_image: String,
    pub images: Vec<ProjectImage>,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub cgpa: String,
    pub period: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Extracurricular {
    pub role: String,
    pub organization: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// The single record describing the site owner. Built once from the literal
/// dataset and never mutated. `biography` and `approach` hold paragraphs
/// separated by a blank line.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInfo {
    pub name: String,
    pub tagline: String,
    pub hero_introduction: String,
    pub biography: String,
    pub approach: String,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub education: Education,
    pub certificates: Vec<Certificate>,
    pub extracurricular: Vec<Extracurricular>,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub availability: String,
    pub social_links: SocialLinks,
    pub portrait_image: String,
}

impl DeveloperInfo {
    pub fn biography_paragraphs(&self) -> Vec<&str> {
        self.biography.split("\n\n").collect()
    }

    pub fn approach_paragraphs(&self) -> Vec<&str> {
        self.approach.split("\n\n").collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Collaboration,
    Job,
    Freelance,
    Other,
}

/// Payload shape produced by the contact section of the site.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn category_parse_covers_the_closed_set() {
        assert_eq!(Category::parse("fullstack"), Some(Category::Fullstack));
        assert_eq!(Category::parse("backend"), Some(Category::Backend));
        assert_eq!(Category::parse("frontend"), Some(Category::Frontend));
        assert_eq!(Category::parse("api"), Some(Category::Api));
        assert_eq!(Category::parse("all"), None);
        assert_eq!(Category::parse("Backend"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn category_parse_round_trips_as_str() {
        for category in [
            Category::Fullstack,
            Category::Backend,
            Category::Frontend,
            Category::Api,
        ] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Fullstack).unwrap();
        assert_eq!(json, "\"fullstack\"");
        let parsed: Category = serde_json::from_str("\"api\"").unwrap();
        assert_eq!(parsed, Category::Api);
    }

    #[test]
    fn contact_submission_serializes_camel_case() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            project_type: ProjectType::Freelance,
            message: "Hello".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"projectType\":\"freelance\""));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn optional_project_fields_are_omitted_when_absent() {
        let project = Project {
            id: "x".to_string(),
            title: "X".to_string(),
            category: Category::Frontend,
            year: "2025".to_string(),
            slug: "x".to_string(),
            cover_image: String::new(),
            images: Vec::new(),
            description: String::new(),
            tech_stack: Vec::new(),
            live_url: None,
            github_url: None,
            location: None,
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(!json.contains("liveUrl"));
        assert!(!json.contains("githubUrl"));
        assert!(!json.contains("location"));
    }
}
