//! HTML fragments for the API-backed slots and the page around them.

use content::{Profile, Project};

use crate::document::{Connectivity, Document, Slot};
use crate::theme::Theme;

const TEMPLATE: &str = include_str!("../static/index.html");
const STATUS_SLOT: &str = "status";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_profile(profile: &Profile) -> String {
    format!(
        concat!(
            r#"<div class="about-text">"#,
            r#"<h2>{name}</h2><p class="title">{title}</p><p>{bio}</p>"#,
            r#"<ul class="contact-methods">"#,
            r#"<li class="contact-method"><a href="{github}" target="_blank" rel="noopener noreferrer">GitHub</a></li>"#,
            r#"<li class="contact-method"><a href="mailto:{email}">{email}</a></li>"#,
            r#"</ul></div>"#
        ),
        name = escape_html(&profile.name),
        title = escape_html(&profile.title),
        bio = escape_html(&profile.bio),
        github = escape_html(&profile.contact.github),
        email = escape_html(&profile.contact.email),
    )
}

/// Element id of a project card, also used as its scroll-reveal target.
pub fn project_card_id(project: &Project) -> String {
    format!("project-{}", project.id)
}

pub fn render_projects(projects: &[Project]) -> String {
    projects.iter().map(render_project).collect()
}

fn render_project(project: &Project) -> String {
    let technologies: String = project
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();
    let link = project
        .url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a class="project-link" href="{}" target="_blank" rel="noopener noreferrer">View project</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="project-card" id="{}"><h3>{}</h3><p>{}</p><div class="project-tags">{}</div>{}</article>"#,
        project_card_id(project),
        escape_html(&project.name),
        escape_html(&project.description),
        technologies,
        link,
    )
}

pub fn render_status(connectivity: Connectivity) -> &'static str {
    match connectivity {
        Connectivity::Unknown => "",
        Connectivity::Online => r#"<span class="api-status online">Live content</span>"#,
        Connectivity::Offline => {
            r#"<span class="api-status offline">Offline: showing saved content</span>"#
        }
    }
}

/// Replaces whatever sits between `<!--slot:NAME-->` and `<!--/slot:NAME-->`.
/// Markup without the markers is returned unchanged.
pub fn fill_slot(html: &str, name: &str, content: &str) -> String {
    let open = format!("<!--slot:{name}-->");
    let close = format!("<!--/slot:{name}-->");
    let Some(start) = html.find(&open).map(|i| i + open.len()) else {
        return html.to_string();
    };
    let Some(end) = html[start..].find(&close).map(|i| start + i) else {
        return html.to_string();
    };
    format!("{}{}{}", &html[..start], content, &html[end..])
}

/// Renders the whole page. Slots the controller never filled keep the
/// static markup from the template.
pub fn render_page(document: &Document, icon_class: &str) -> String {
    let theme = document.theme.unwrap_or(Theme::Light);
    let mut html = TEMPLATE
        .replace("{{theme}}", theme.as_str())
        .replace("{{theme_icon}}", icon_class);

    for slot in [Slot::About, Slot::Projects, Slot::Modal] {
        if let Some(content) = document.slot(slot) {
            html = fill_slot(&html, slot.name(), content);
        }
    }
    fill_slot(&html, STATUS_SLOT, render_status(document.connectivity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_projects_links_only_when_url() {
        let html = render_projects(&content::projects());
        assert_eq!(html.matches("class=\"project-card\"").count(), 2);
        assert_eq!(html.matches("project-link").count(), 1);
        assert!(html.contains(r#"id="project-2""#));
        assert!(html.contains("Node.js"));
    }

    #[test]
    fn test_render_profile() {
        let html = render_profile(&content::profile());
        assert!(html.contains("<h2>Daniyal Alidana</h2>"));
        assert!(html.contains("mailto:your-email@example.com"));
    }

    #[test]
    fn test_fill_slot() {
        let html = "<div><!--slot:a-->old<!--/slot:a--></div>";
        assert_eq!(fill_slot(html, "a", "new"), "<div><!--slot:a-->new<!--/slot:a--></div>");
        assert_eq!(fill_slot(html, "b", "new"), html);
    }

    #[test]
    fn test_unfilled_page_keeps_static_content() {
        let html = render_page(&Document::default(), "fas fa-moon");
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("Building amazing web experiences."));
        assert!(!html.contains("api-status"));
    }

    #[test]
    fn test_filled_page() {
        let mut doc = Document::default();
        doc.theme = Some(Theme::Dark);
        doc.connectivity = Connectivity::Offline;
        doc.fill(Slot::Projects, render_projects(&content::projects()));
        let html = render_page(&doc, "fas fa-sun");
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"<i class="fas fa-sun">"#));
        assert!(html.contains("Backend API"));
        assert!(html.contains("api-status offline"));
        assert!(!html.contains("<h3>Portfolio Website</h3><p>Personal portfolio and blog</p></article><!--/slot"));
    }

    #[test]
    fn test_page_carries_modal_markup() {
        let mut doc = Document::default();
        assert!(!render_page(&doc, "fas fa-moon").contains("projectModal"));
        doc.fill(Slot::Modal, r#"<div id="projectModal" class="modal active"></div>"#.to_string());
        let html = render_page(&doc, "fas fa-moon");
        assert!(html.contains(r#"<!--slot:modal--><div id="projectModal" class="modal active"></div><!--/slot:modal-->"#));
    }
}
