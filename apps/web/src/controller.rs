use content::{Profile, Project};
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::document::{Connectivity, Document, Slot};
use crate::form::{ContactForm, Delivery, Field, StatusMessage};
use crate::modal::{ProjectCatalog, ProjectModal};
use crate::nav::{Navigation, Section};
use crate::render::{project_card_id, render_page, render_profile, render_projects};
use crate::reveal::{Intersection, RevealObserver};
use crate::store::PreferenceStore;
use crate::theme::{Theme, ThemeSwitch};

/// Section geometry of the page template, in pixels.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 800.0),
        Section::new("about", 800.0, 700.0),
        Section::new("projects", 1500.0, 900.0),
        Section::new("contact", 2400.0, 700.0),
    ]
}

pub const NAVBAR_HEIGHT_PX: f64 = 70.0;

/// Everything the page scripts used to keep in module globals, built once
/// at startup and owned by the controller.
#[derive(Debug, Clone)]
pub struct PageState {
    pub document: Document,
    pub theme: ThemeSwitch,
    pub nav: Navigation,
    pub modal: ProjectModal,
    pub form: ContactForm,
    pub reveal: RevealObserver,
}

/// What the initial content load managed to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub online: bool,
    pub about_loaded: bool,
    pub projects_loaded: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side checks failed; nothing was sent.
    Invalid,
    Sent,
    Rejected,
    NetworkError,
}

pub struct PageController {
    client: ApiClient,
    store: Box<dyn PreferenceStore>,
    state: PageState,
}

impl PageController {
    pub fn new(client: ApiClient, store: Box<dyn PreferenceStore>, prefers_dark: bool) -> Self {
        Self::with_layout(client, store, prefers_dark, default_sections(), NAVBAR_HEIGHT_PX)
    }

    pub fn with_layout(
        client: ApiClient,
        store: Box<dyn PreferenceStore>,
        prefers_dark: bool,
        sections: Vec<Section>,
        navbar_height: f64,
    ) -> Self {
        let mut document = Document::default();
        let theme = ThemeSwitch::init(store.as_ref(), prefers_dark, &mut document);
        let state = PageState {
            document,
            theme,
            nav: Navigation::new(sections, navbar_height),
            modal: ProjectModal::new(ProjectCatalog::portfolio()),
            form: ContactForm::default(),
            reveal: RevealObserver::default(),
        };
        debug!("Page controller initialized with {} theme", state.theme.current().as_str());
        Self {
            client,
            store,
            state,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Fetches health, profile and projects concurrently and merges whatever
    /// arrived into the document. Failed fetches leave the static markup.
    pub async fn load_content(&mut self) -> LoadReport {
        let (health, about, projects) = tokio::join!(
            self.client.check_health(),
            self.client.get_about(),
            self.client.get_projects(),
        );

        let online = health.is_some_and(|h| h.is_ok());
        self.state.document.connectivity = if online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        };

        let about_loaded = match about {
            Ok(profile) => {
                self.show_profile(&profile);
                true
            }
            Err(e) => {
                warn!("Error fetching about: {e}");
                false
            }
        };

        let projects_loaded = match projects {
            Ok(projects) => {
                self.show_projects(&projects);
                projects.len()
            }
            Err(e) => {
                warn!("Error fetching projects: {e}");
                0
            }
        };

        info!(online, about_loaded, projects_loaded, "Content load finished");
        LoadReport {
            online,
            about_loaded,
            projects_loaded,
        }
    }

    fn show_profile(&mut self, profile: &Profile) {
        self.state.document.fill(Slot::About, render_profile(profile));
    }

    fn show_projects(&mut self, projects: &[Project]) {
        self.state
            .document
            .fill(Slot::Projects, render_projects(projects));
        for project in projects {
            self.state.reveal.observe(project_card_id(project));
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.state
            .theme
            .toggle(self.store.as_mut(), &mut self.state.document)
    }

    pub fn os_theme_changed(&mut self, prefers_dark: bool) {
        self.state.theme.os_preference_changed(
            prefers_dark,
            self.store.as_mut(),
            &mut self.state.document,
        );
    }

    /// Returns true if the active nav link changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.state.nav.on_scroll(scroll_y)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.state.nav.toggle_menu()
    }

    /// Returns the scroll target for a nav link click.
    pub fn click_nav(&mut self, section_id: &str) -> Option<f64> {
        self.state.nav.click(section_id)
    }

    pub fn on_intersections(&mut self, entries: &[Intersection]) -> Vec<String> {
        self.state.reveal.on_intersections(entries)
    }

    pub fn open_project(&mut self, title: &str) -> bool {
        self.state.modal.open(title, &mut self.state.document)
    }

    pub fn close_project(&mut self) {
        self.state.modal.close(&mut self.state.document);
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        self.state.modal.on_key(key, &mut self.state.document)
    }

    pub fn form_input(&mut self, field: Field, value: impl Into<String>) {
        self.state.form.input(field, value);
    }

    pub fn form_blur(&mut self, field: Field) -> bool {
        self.state.form.check_field(field)
    }

    /// Validates the form and posts it to the API.
    pub async fn submit_contact(&mut self) -> SubmitOutcome {
        let Some(submission) = self.state.form.begin_submit() else {
            return SubmitOutcome::Invalid;
        };

        let (delivery, outcome) = match self.client.submit_contact(&submission).await {
            Ok(ack) => {
                debug!("Contact form acknowledged: {}", ack.message);
                (Delivery::Accepted, SubmitOutcome::Sent)
            }
            Err(e) if e.is_transport() => {
                warn!("Error submitting contact: {e}");
                (Delivery::Unreachable, SubmitOutcome::NetworkError)
            }
            Err(e) => {
                warn!("Error submitting contact: {e}");
                (Delivery::Rejected, SubmitOutcome::Rejected)
            }
        };
        self.state.form.finish_submit(delivery);
        outcome
    }

    /// The form status line, dropping it first if it has expired.
    pub fn form_status(&mut self) -> Option<StatusMessage> {
        self.state.form.status.current().cloned()
    }

    pub fn render(&self) -> String {
        render_page(&self.state.document, self.state.theme.icon_class())
    }
}
