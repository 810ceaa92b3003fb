use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Free-text introduction shown on the landing section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct About {
    pub passion: String,
    pub seeking: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub degree: String,
    pub university: String,
    /// Kept as text so formats like "4.0/4.0" survive round-trips.
    pub gpa: String,
    pub grad_year: i32,
    pub awards: Vec<String>,
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub linkedin: String,
    pub github_user: String,
    pub about: About,
    /// Category name -> ordered skill list. Categories are free-form; every
    /// present category must carry a list, possibly empty.
    pub skills: BTreeMap<String, Vec<String>>,
    pub education: Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    /// Ordered bullets; the sequence is the narrative.
    pub description: Vec<String>,
}

/// A portfolio project. Having neither link is unusual but valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
}

/// The complete content triple served by the API. Replaced as a whole on
/// every load; readers never observe a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentSnapshot {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

impl ContentSnapshot {
    /// Minimal snapshot served when the content source cannot be used.
    /// Must always satisfy the content validator.
    pub fn fallback() -> Self {
        Self {
            profile: Profile {
                name: "Arjun Bojja".to_string(),
                title: "Aspiring Software Engineer & Product Manager".to_string(),
                location: "Herndon, VA".to_string(),
                email: "arjunbojja1@gmail.com".to_string(),
                phone: None,
                linkedin: "https://www.linkedin.com/in/arjun-bojja/".to_string(),
                github_user: "arjunbojja1".to_string(),
                about: About {
                    passion: "I'm passionate about making technology more usable and accessible for everyone.".to_string(),
                    seeking: "I am currently seeking Software Engineering and Product Management internships.".to_string(),
                },
                skills: BTreeMap::from([
                    (
                        "Languages & Frameworks".to_string(),
                        vec![
                            "Python".to_string(),
                            "Java".to_string(),
                            "JavaScript".to_string(),
                            "TypeScript".to_string(),
                        ],
                    ),
                    (
                        "Tools & Libraries".to_string(),
                        vec![
                            "AWS".to_string(),
                            "Docker".to_string(),
                            "Git/GitHub".to_string(),
                        ],
                    ),
                ]),
                education: Education {
                    degree: "Bachelor of Science in Information Science".to_string(),
                    university: "University of Maryland, College Park".to_string(),
                    gpa: "4.0/4.0".to_string(),
                    grad_year: 2027,
                    awards: vec!["Presidential Scholar".to_string()],
                    coursework: vec![
                        "Database Design (MySQL)".to_string(),
                        "Object-Oriented Programming for Information Science".to_string(),
                    ],
                },
            },
            experience: Vec::new(),
            projects: Vec::new(),
        }
    }
}
