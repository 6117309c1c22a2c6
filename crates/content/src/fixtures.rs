use crate::models::{ContactInfo, Profile, Project};

/// The site owner's profile, served by `GET /api/about`.
pub fn profile() -> Profile {
    Profile {
        name: "Daniyal Alidana".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "Building amazing web experiences".to_string(),
        contact: ContactInfo {
            github: "https://github.com/daniyalalidana".to_string(),
            email: "your-email@example.com".to_string(),
        },
    }
}

/// Project list served by `GET /api/projects`, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Portfolio Website".to_string(),
            description: "Personal portfolio and blog".to_string(),
            technologies: to_strings(&["HTML", "CSS", "JavaScript"]),
            url: Some("https://daniyalalidana.github.io".to_string()),
        },
        Project {
            id: 2,
            name: "Backend API".to_string(),
            description: "RESTful API for portfolio data".to_string(),
            technologies: to_strings(&["Node.js", "Express"]),
            url: None,
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
