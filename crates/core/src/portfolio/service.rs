//! Portfolio service - core business logic
//!
//! Every operation is an independent read-modify-write of the whole
//! aggregate: load the document (creating the empty default if absent),
//! apply one mutation, persist the document. There is no locking or
//! versioning; concurrent writers race with last-write-wins semantics,
//! which is the accepted model for a single-admin site.

use std::sync::Arc;

use folio_domain::constants::DEFAULT_SKILL_ICON;
use folio_domain::{
    About, AboutPatch, EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch,
    FolioError, Portfolio, Project, ProjectPatch, Result, SkillItem, SkillMap,
};
use tracing::debug;

use super::ports::PortfolioRepository;

/// Portfolio service owning all aggregate operations.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepository>,
}

impl PortfolioService {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// Return the full aggregate, creating and persisting the empty default
    /// when no document exists yet.
    pub async fn get_portfolio(&self) -> Result<Portfolio> {
        self.load_or_default().await
    }

    /// Persist `initial` only when no aggregate exists yet.
    ///
    /// Returns `true` when the seed was applied.
    pub async fn seed_if_empty(&self, initial: Portfolio) -> Result<bool> {
        if self.repository.load().await?.is_some() {
            return Ok(false);
        }
        self.repository.save(initial).await?;
        Ok(true)
    }

    /// Shallow-merge `patch` into the About section and return the result.
    pub async fn update_about(&self, patch: AboutPatch) -> Result<About> {
        let mut portfolio = self.load_or_default().await?;
        patch.apply_to(&mut portfolio.about);
        let about = portfolio.about.clone();
        self.repository.save(portfolio).await?;
        Ok(about)
    }

    // ------------------------------------------------------------------
    // Education
    // ------------------------------------------------------------------

    /// Return the education list.
    pub async fn list_education(&self) -> Result<Vec<EducationEntry>> {
        Ok(self.load_or_default().await?.education)
    }

    /// Append an entry to the education list. The caller supplies the id;
    /// no uniqueness check is made.
    pub async fn add_education(&self, entry: EducationEntry) -> Result<EducationEntry> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.education.push(entry.clone());
        self.repository.save(portfolio).await?;
        Ok(entry)
    }

    /// Shallow-merge `patch` over the first education entry with `id`,
    /// preserving its position. `NotFound` when no entry matches.
    pub async fn update_education(&self, id: &str, patch: EducationPatch) -> Result<EducationEntry> {
        let mut portfolio = self.load_or_default().await?;
        let Some(entry) = portfolio.education.iter_mut().find(|e| e.id == id) else {
            return Err(FolioError::NotFound(format!("education entry '{id}' not found")));
        };
        patch.apply_to(entry);
        let updated = entry.clone();
        self.repository.save(portfolio).await?;
        Ok(updated)
    }

    /// Remove every education entry with `id`. Deleting a nonexistent id is
    /// a silent success; the document is persisted either way.
    pub async fn delete_education(&self, id: &str) -> Result<()> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.education.retain(|e| e.id != id);
        self.repository.save(portfolio).await
    }

    // ------------------------------------------------------------------
    // Experience
    // ------------------------------------------------------------------

    /// Return the experience list.
    pub async fn list_experience(&self) -> Result<Vec<ExperienceEntry>> {
        Ok(self.load_or_default().await?.experience)
    }

    /// Append an entry to the experience list.
    pub async fn add_experience(&self, entry: ExperienceEntry) -> Result<ExperienceEntry> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.experience.push(entry.clone());
        self.repository.save(portfolio).await?;
        Ok(entry)
    }

    /// Shallow-merge `patch` over the first experience entry with `id`.
    pub async fn update_experience(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<ExperienceEntry> {
        let mut portfolio = self.load_or_default().await?;
        let Some(entry) = portfolio.experience.iter_mut().find(|e| e.id == id) else {
            return Err(FolioError::NotFound(format!("experience entry '{id}' not found")));
        };
        patch.apply_to(entry);
        let updated = entry.clone();
        self.repository.save(portfolio).await?;
        Ok(updated)
    }

    /// Remove every experience entry with `id`; idempotent.
    pub async fn delete_experience(&self, id: &str) -> Result<()> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.experience.retain(|e| e.id != id);
        self.repository.save(portfolio).await
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Return the project list.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.load_or_default().await?.projects)
    }

    /// Append a project to the list.
    pub async fn add_project(&self, project: Project) -> Result<Project> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.projects.push(project.clone());
        self.repository.save(portfolio).await?;
        Ok(project)
    }

    /// Shallow-merge `patch` over the first project with `id`.
    pub async fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<Project> {
        let mut portfolio = self.load_or_default().await?;
        let Some(project) = portfolio.projects.iter_mut().find(|p| p.id == id) else {
            return Err(FolioError::NotFound(format!("project '{id}' not found")));
        };
        patch.apply_to(project);
        let updated = project.clone();
        self.repository.save(portfolio).await?;
        Ok(updated)
    }

    /// Remove every project with `id`; idempotent.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.projects.retain(|p| p.id != id);
        self.repository.save(portfolio).await
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    /// Return the skills map.
    pub async fn skills(&self) -> Result<SkillMap> {
        Ok(self.load_or_default().await?.skills)
    }

    /// Append a skill to `category`, creating the category when absent.
    /// Duplicate names within a category are not prevented.
    pub async fn add_skill(
        &self,
        category: &str,
        name: &str,
        icon: Option<String>,
    ) -> Result<SkillItem> {
        let item = SkillItem {
            name: name.to_string(),
            icon: icon.unwrap_or_else(|| DEFAULT_SKILL_ICON.to_string()),
        };

        let mut portfolio = self.load_or_default().await?;
        portfolio.skills.entry(category.to_string()).or_default().push(item.clone());
        self.repository.save(portfolio).await?;
        Ok(item)
    }

    /// Remove an entire category and all its items. Removing a nonexistent
    /// category is a silent success.
    pub async fn delete_skill_category(&self, category: &str) -> Result<()> {
        let mut portfolio = self.load_or_default().await?;
        if portfolio.skills.shift_remove(category).is_none() {
            debug!(category, "delete of nonexistent skill category");
        }
        self.repository.save(portfolio).await
    }

    /// Remove every item named `name` from `category`. `NotFound` when the
    /// category itself does not exist.
    pub async fn delete_skill_item(&self, category: &str, name: &str) -> Result<()> {
        let mut portfolio = self.load_or_default().await?;
        let Some(items) = portfolio.skills.get_mut(category) else {
            return Err(FolioError::NotFound(format!("skill category '{category}' not found")));
        };
        items.retain(|s| s.name != name);
        self.repository.save(portfolio).await
    }

    // ------------------------------------------------------------------
    // Profile image
    // ------------------------------------------------------------------

    /// Overwrite the profile image wholesale. `None` clears it.
    pub async fn set_profile_image(&self, image: Option<String>) -> Result<()> {
        let mut portfolio = self.load_or_default().await?;
        portfolio.profile_image = image;
        self.repository.save(portfolio).await
    }

    /// Load the aggregate, persisting the empty default when absent so the
    /// singleton exists from first access on.
    async fn load_or_default(&self) -> Result<Portfolio> {
        match self.repository.load().await? {
            Some(portfolio) => Ok(portfolio),
            None => {
                let portfolio = Portfolio::default();
                self.repository.save(portfolio.clone()).await?;
                Ok(portfolio)
            }
        }
    }
}
