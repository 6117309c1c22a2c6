use std::collections::BTreeMap;

use crate::document::{Document, Slot};
use crate::render::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub text: String,
    pub url: String,
    pub icon: String,
    pub primary: bool,
}

/// Long-form description shown in the project modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub kind: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub icon: String,
    pub links: Vec<ProjectLink>,
}

/// Project details keyed by the card title that opens them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    details: BTreeMap<String, ProjectDetail>,
}

impl ProjectCatalog {
    pub fn insert(&mut self, title: impl Into<String>, detail: ProjectDetail) {
        self.details.insert(title.into(), detail);
    }

    pub fn get(&self, title: &str) -> Option<&ProjectDetail> {
        self.details.get(title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.details.keys().map(String::as_str)
    }

    /// The projects featured on the site.
    pub fn portfolio() -> Self {
        const PROFILE: &str = "https://github.com/daniyalalidana";
        let github = |text: &str| ProjectLink {
            text: text.to_string(),
            url: PROFILE.to_string(),
            icon: "fa-github".to_string(),
            primary: true,
        };
        let tags = |items: &[&str]| items.iter().map(|t| t.to_string()).collect::<Vec<_>>();

        let mut catalog = Self::default();
        catalog.insert(
            "Data Collection for AI Model",
            ProjectDetail {
                kind: "Freelance Project - Upwork".to_string(),
                description: "Successfully completed a professional data collection project for \
                    training an AI model. Demonstrated expertise in data gathering, cleaning, and \
                    preparation for machine learning applications."
                    .to_string(),
                tags: tags(&["Data Collection", "Data Cleaning", "AI/ML", "Python"]),
                status: Some("Completed".to_string()),
                icon: "fa-briefcase".to_string(),
                links: vec![ProjectLink {
                    text: "View on Upwork".to_string(),
                    url: "https://www.upwork.com/freelancers/daniyalalidana".to_string(),
                    icon: "fa-external-link-alt".to_string(),
                    primary: false,
                }],
            },
        );
        catalog.insert(
            "Machine Learning Projects",
            ProjectDetail {
                kind: "Open Source - GitHub".to_string(),
                description: "Collection of machine learning projects showcasing supervised \
                    learning algorithms including regression, classification, and ensemble \
                    methods, each with documentation and performance metrics."
                    .to_string(),
                tags: tags(&["Scikit-learn", "Python", "ML Algorithms", "Data Science"]),
                status: None,
                icon: "fa-github".to_string(),
                links: vec![github("View on GitHub")],
            },
        );
        catalog.insert(
            "Supervised Learning Implementations",
            ProjectDetail {
                kind: "Academic & Personal Projects".to_string(),
                description: "Implementations of the major supervised learning algorithms: \
                    Linear Regression, Logistic Regression, Decision Trees, Random Forests, SVM, \
                    and Neural Networks, with theory notes and worked examples."
                    .to_string(),
                tags: tags(&[
                    "Linear Regression",
                    "Classification",
                    "Decision Trees",
                    "Neural Networks",
                ]),
                status: None,
                icon: "fa-project-diagram".to_string(),
                links: vec![github("GitHub Repository")],
            },
        );
        catalog.insert(
            "Data Analysis with Python",
            ProjectDetail {
                kind: "Course Project - IBM Certification".to_string(),
                description: "Data analysis projects using Pandas, NumPy, and visualization \
                    libraries, applying statistical methods to support data-driven decisions."
                    .to_string(),
                tags: tags(&["Pandas", "NumPy", "Matplotlib", "Data Viz"]),
                status: None,
                icon: "fa-chart-bar".to_string(),
                links: vec![github("GitHub Repository")],
            },
        );
        catalog
    }
}

/// Content currently inside the modal. `title`, `kind` and `description`
/// are plain text; the `_html` fields are already escaped markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub kind: String,
    pub icon_class: String,
    pub description: String,
    pub tags_html: String,
    /// `None` hides the status row.
    pub status_html: Option<String>,
    pub links_html: String,
}

impl ModalView {
    fn build(title: &str, detail: &ProjectDetail) -> Self {
        let tags_html = detail
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
            .collect::<String>();

        let status_html = detail.status.as_ref().map(|status| {
            format!(
                r#"<i class="fas fa-check-circle"></i> {}"#,
                escape_html(status)
            )
        });

        let links_html = detail
            .links
            .iter()
            .map(|link| {
                let class = if link.primary {
                    "modal-link"
                } else {
                    "modal-link secondary"
                };
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{class}"><i class="fas {}"></i> {}</a>"#,
                    escape_html(&link.url),
                    escape_html(&link.icon),
                    escape_html(&link.text),
                )
            })
            .collect::<String>();

        Self {
            title: title.to_string(),
            kind: detail.kind.clone(),
            icon_class: format!("fas {}", detail.icon),
            description: detail.description.clone(),
            tags_html,
            status_html,
            links_html,
        }
    }

    /// The dialog markup for the `modal` slot of the page.
    pub fn to_html(&self, active: bool) -> String {
        let class = if active { "modal active" } else { "modal" };
        let status = match &self.status_html {
            Some(status) => format!(r#"<div class="modal-status">{status}</div>"#),
            None => r#"<div class="modal-status" hidden></div>"#.to_string(),
        };
        format!(
            concat!(
                r#"<div id="projectModal" class="{class}">"#,
                r#"<div class="modal-content">"#,
                r#"<button class="modal-close" aria-label="Close">&times;</button>"#,
                r#"<div class="modal-icon"><i class="{icon}"></i></div>"#,
                r#"<h2 class="modal-title">{title}</h2>"#,
                r#"<p class="modal-type">{kind}</p>"#,
                r#"<p class="modal-description">{description}</p>"#,
                r#"<div class="modal-tags">{tags}</div>"#,
                "{status}",
                r#"<div class="modal-links">{links}</div>"#,
                r#"</div></div>"#
            ),
            class = class,
            icon = escape_html(&self.icon_class),
            title = escape_html(&self.title),
            kind = escape_html(&self.kind),
            description = escape_html(&self.description),
            tags = self.tags_html,
            status = status,
            links = self.links_html,
        )
    }
}

/// The project detail dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectModal {
    catalog: ProjectCatalog,
    active: bool,
    view: Option<ModalView>,
}

impl ProjectModal {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            active: false,
            view: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    /// Opens the modal for a card title. Unknown titles change nothing.
    pub fn open(&mut self, title: &str, document: &mut Document) -> bool {
        let Some(detail) = self.catalog.get(title) else {
            return false;
        };
        let view = ModalView::build(title, detail);
        document.fill(Slot::Modal, view.to_html(true));
        document.body_scroll_locked = true;
        self.view = Some(view);
        self.active = true;
        true
    }

    /// Backdrop click or close button. The last view stays rendered but hidden.
    pub fn close(&mut self, document: &mut Document) {
        self.active = false;
        document.body_scroll_locked = false;
        if let Some(view) = &self.view {
            document.fill(Slot::Modal, view.to_html(false));
        }
    }

    /// Returns true if the key closed the modal.
    pub fn on_key(&mut self, key: &str, document: &mut Document) -> bool {
        if key != "Escape" || !self.active {
            return false;
        }
        self.close(document);
        true
    }
}
