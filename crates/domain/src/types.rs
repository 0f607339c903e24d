//! Portfolio aggregate and section types
//!
//! The whole system revolves around one aggregate: a single `Portfolio`
//! document holding every section of the site. All JSON field names follow
//! the wire contract consumed by the front end (camelCase).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from skill category name to its items.
///
/// `IndexMap` keeps category order stable across read-modify-write cycles so
/// repeated reads of an unchanged aggregate serialize identically.
pub type SkillMap = IndexMap<String, Vec<SkillItem>>;

/// The single aggregate holding all portfolio sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: SkillMap,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// The About section: bio text plus a list of highlights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// A single highlight card in the About section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// One education entry. The `id` is a client-generated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

/// One experience entry. The `id` is a client-generated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub position: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
}

/// One project card. `image` carries a base64 data-URI when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

/// One skill inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub name: String,
    pub icon: String,
}

// ============================================================================
// Patch types (shallow merge)
// ============================================================================
//
// Partial updates are shallow merges: a field present in the patch overwrites
// the stored value, an absent field keeps it. For stored fields that are
// themselves optional the patch uses a double `Option` so "absent" and
// "explicit null" stay distinguishable on the wire (null clears the field).

/// Partial update for the About section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<Highlight>>,
}

impl AboutPatch {
    /// Merge this patch into `about`, overwriting only present fields.
    pub fn apply_to(self, about: &mut About) {
        if let Some(bio) = self.bio {
            about.bio = bio;
        }
        if let Some(highlights) = self.highlights {
            about.highlights = highlights;
        }
    }
}

/// Partial update for one education entry. The `id` is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub grade: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub achievements: Option<Option<Vec<String>>>,
}

impl EducationPatch {
    /// Merge this patch into `entry`, overwriting only present fields.
    pub fn apply_to(self, entry: &mut EducationEntry) {
        if let Some(degree) = self.degree {
            entry.degree = degree;
        }
        if let Some(institution) = self.institution {
            entry.institution = institution;
        }
        if let Some(period) = self.period {
            entry.period = period;
        }
        if let Some(location) = self.location {
            entry.location = location;
        }
        if let Some(grade) = self.grade {
            entry.grade = grade;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
        if let Some(achievements) = self.achievements {
            entry.achievements = achievements;
        }
    }
}

/// Partial update for one experience entry. The `id` is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub responsibilities: Option<Option<Vec<String>>>,
}

impl ExperiencePatch {
    /// Merge this patch into `entry`, overwriting only present fields.
    pub fn apply_to(self, entry: &mut ExperienceEntry) {
        if let Some(position) = self.position {
            entry.position = position;
        }
        if let Some(company) = self.company {
            entry.company = company;
        }
        if let Some(period) = self.period {
            entry.period = period;
        }
        if let Some(location) = self.location {
            entry.location = location;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
        if let Some(responsibilities) = self.responsibilities {
            entry.responsibilities = responsibilities;
        }
    }
}

/// Partial update for one project. The `id` is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub full_description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub technologies: Option<Option<Vec<String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub github: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub demo: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub image: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub features: Option<Option<Vec<String>>>,
}

impl ProjectPatch {
    /// Merge this patch into `project`, overwriting only present fields.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(full_description) = self.full_description {
            project.full_description = full_description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(github) = self.github {
            project.github = github;
        }
        if let Some(demo) = self.demo {
            project.demo = demo;
        }
        if let Some(image) = self.image {
            project.image = image;
        }
        if let Some(features) = self.features {
            project.features = features;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: "p1".into(),
            title: "Underwater Robot".into(),
            description: "IMU-stabilized platform".into(),
            full_description: Some("Long form".into()),
            technologies: Some(vec!["Rust".into()]),
            github: Some("https://github.com/example".into()),
            demo: None,
            image: Some("data:image/png;base64,AAAA".into()),
            features: None,
        }
    }

    #[test]
    fn portfolio_serializes_with_camel_case_field_names() {
        let portfolio = Portfolio {
            projects: vec![sample_project()],
            profile_image: Some("data:image/png;base64,BBBB".into()),
            ..Portfolio::default()
        };

        let json = serde_json::to_value(&portfolio).unwrap();
        assert!(json.get("profileImage").is_some());
        assert!(json["projects"][0].get("fullDescription").is_some());
        assert!(json["projects"][0].get("full_description").is_none());
    }

    #[test]
    fn default_portfolio_has_empty_sections() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.about.bio, "");
        assert!(portfolio.about.highlights.is_empty());
        assert!(portfolio.education.is_empty());
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.profile_image.is_none());
    }

    #[test]
    fn about_patch_overwrites_only_present_fields() {
        let mut about = About {
            bio: "old bio".into(),
            highlights: vec![Highlight {
                icon: "fas fa-code".into(),
                title: "Programming".into(),
                description: "desc".into(),
            }],
        };

        let patch: AboutPatch = serde_json::from_str(r#"{"bio": "new bio"}"#).unwrap();
        patch.apply_to(&mut about);

        assert_eq!(about.bio, "new bio");
        assert_eq!(about.highlights.len(), 1);
    }

    #[test]
    fn project_patch_absent_field_keeps_prior_value() {
        let mut project = sample_project();
        let patch: ProjectPatch = serde_json::from_str(r#"{"title": "Renamed"}"#).unwrap();
        patch.apply_to(&mut project);

        assert_eq!(project.title, "Renamed");
        assert_eq!(project.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn project_patch_null_clears_optional_field() {
        let mut project = sample_project();
        let patch: ProjectPatch = serde_json::from_str(r#"{"image": null}"#).unwrap();
        patch.apply_to(&mut project);

        assert_eq!(project.image, None);
        assert_eq!(project.title, "Underwater Robot");
    }

    #[test]
    fn skill_map_preserves_insertion_order() {
        let mut skills = SkillMap::new();
        skills.insert("Programming".into(), Vec::new());
        skills.insert("Embedded Systems".into(), Vec::new());
        skills.insert("Tools".into(), Vec::new());

        let keys: Vec<&String> = skills.keys().collect();
        assert_eq!(keys, ["Programming", "Embedded Systems", "Tools"]);

        let json = serde_json::to_string(&skills).unwrap();
        let embedded = json.find("Embedded Systems").unwrap();
        assert!(json.find("Programming").unwrap() < embedded);
        assert!(embedded < json.find("Tools").unwrap());
    }
}
