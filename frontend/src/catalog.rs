//! The project portfolio: an immutable, ordered slice of [`Project`]s compiled
//! into the binary, plus the lookups the showcase and detail pages need.

pub mod projects;

use thiserror::Error;

pub use projects::PROJECTS;

/// Tab label that shows the whole catalog.
pub const ALL_CATEGORY: &str = "All";

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    pub image: &'static str,
    pub metrics: &'static [Metric],
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Metric {
    /// Raw icon tag; see [`MetricIcon::from_tag`].
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

impl Metric {
    pub fn icon(&self) -> Option<MetricIcon> {
        MetricIcon::from_tag(self.icon)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricIcon {
    Award,
    Trending,
    Users,
}

impl MetricIcon {
    /// Unknown tags map to `None` and render no icon.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "award" => Some(MetricIcon::Award),
            "trending" => Some(MetricIcon::Trending),
            "users" => Some(MetricIcon::Users),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MetricIcon::Award => "🏆",
            MetricIcon::Trending => "📈",
            MetricIcon::Users => "👥",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no project with id `{id}`")]
    NotFound { id: String },
}

/// Projects whose category equals `label`, in catalog order.
/// [`ALL_CATEGORY`] returns every project.
pub fn filter_by_category<'a>(catalog: &'a [Project], label: &str) -> Vec<&'a Project> {
    if label == ALL_CATEGORY {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|p| p.category == label).collect()
}

pub fn find_by_id<'a>(catalog: &'a [Project], id: &str) -> Result<&'a Project, CatalogError> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
}

/// Showcase tabs: [`ALL_CATEGORY`] then each distinct category in order of
/// first appearance.
pub fn categories(catalog: &[Project]) -> Vec<&str> {
    let mut tabs = vec![ALL_CATEGORY];
    for project in catalog {
        if !tabs.contains(&project.category) {
            tabs.push(project.category);
        }
    }
    tabs
}

/// Blurb shown under the showcase tabs. `None` for a category nobody wrote
/// copy for; callers fall back to [`GENERIC_CATEGORY_DESCRIPTION`].
pub fn category_description(label: &str) -> Option<&'static str> {
    let text = match label {
        ALL_CATEGORY => "Showcasing excellence across all industries and domains",
        "FinTech" => "Revolutionary financial technology solutions for the modern economy",
        "Healthcare" => "Innovative healthcare platforms improving patient outcomes",
        "E-Commerce" => "Next-generation shopping experiences driving conversions",
        "Artificial Intelligence" => "AI-powered solutions automating and optimizing operations",
        "IoT & Smart Cities" => "Connected ecosystems for smarter urban living",
        "Education" => "Transforming learning through technology and innovation",
        "Logistics" => "Intelligent supply chain solutions optimizing global operations",
        _ => return None,
    };
    Some(text)
}

pub const GENERIC_CATEGORY_DESCRIPTION: &str = "Selected work from our portfolio";

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &'static str, category: &'static str) -> Project {
        Project {
            id,
            category,
            title: id,
            client: "",
            description: "",
            challenge: "",
            solution: "",
            results: "",
            image: "",
            metrics: &[],
            technologies: &[],
            features: &[],
        }
    }

    fn ids(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn fintech_and_healthcare_scenario() {
        let catalog = [project("a", "FinTech"), project("b", "Healthcare")];

        assert_eq!(ids(&filter_by_category(&catalog, "FinTech")), vec!["a"]);
        assert_eq!(find_by_id(&catalog, "b").map(|p| p.id), Ok("b"));
        assert_eq!(
            find_by_id(&catalog, "nonexistent"),
            Err(CatalogError::NotFound { id: "nonexistent".into() })
        );
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let catalog = [
            project("p1", "Education"),
            project("p2", "Logistics"),
            project("p3", "Education"),
            project("p4", "Education"),
        ];
        assert_eq!(ids(&filter_by_category(&catalog, "Education")), vec!["p1", "p3", "p4"]);
        assert!(filter_by_category(&catalog, "education").is_empty());
    }

    #[test]
    fn all_returns_entire_catalog() {
        let all = filter_by_category(PROJECTS, ALL_CATEGORY);
        assert_eq!(all.len(), PROJECTS.len());
        for (got, want) in all.iter().zip(PROJECTS.iter()) {
            assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn every_tab_filters_to_its_own_category() {
        for label in categories(PROJECTS).into_iter().skip(1) {
            let hits = filter_by_category(PROJECTS, label);
            assert!(!hits.is_empty(), "tab {label} has no projects");
            assert!(hits.iter().all(|p| p.category == label));
        }
    }

    #[test]
    fn every_id_resolves_to_itself() {
        for p in PROJECTS {
            assert_eq!(find_by_id(PROJECTS, p.id).map(|found| found.id), Ok(p.id));
        }
        assert!(find_by_id(PROJECTS, "").is_err());
    }

    #[test]
    fn ids_are_unique() {
        let mut seen: Vec<&str> = Vec::new();
        for p in PROJECTS {
            assert!(!seen.contains(&p.id), "duplicate id {}", p.id);
            seen.push(p.id);
        }
    }

    #[test]
    fn tabs_start_with_all_and_are_distinct() {
        let catalog = [
            project("a", "FinTech"),
            project("b", "Healthcare"),
            project("c", "FinTech"),
        ];
        assert_eq!(categories(&catalog), vec!["All", "FinTech", "Healthcare"]);
    }

    #[test]
    fn shipped_categories_all_have_copy() {
        for label in categories(PROJECTS) {
            assert!(category_description(label).is_some(), "no copy for {label}");
        }
        assert_eq!(category_description("Space Mining"), None);
    }

    #[test]
    fn metric_icons() {
        assert_eq!(MetricIcon::from_tag("award"), Some(MetricIcon::Award));
        assert_eq!(MetricIcon::from_tag("trending"), Some(MetricIcon::Trending));
        assert_eq!(MetricIcon::from_tag("users"), Some(MetricIcon::Users));
        assert_eq!(MetricIcon::from_tag("rocket"), None);
    }
}
