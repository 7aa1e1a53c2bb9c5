use crate::portfolio::models::{ExperienceEntry, Portfolio, Project};

const FALLBACK_NAME: &str = "Your Name";
const FALLBACK_SUMMARY: &str = "Passionate professional with expertise in modern technologies \
and a drive for continuous learning and innovation.";

const STYLE: &str = r#"
    body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; margin: 0; color: #1e293b; background: #f8fafc; line-height: 1.6; }
    header { background: #4f46e5; color: #fff; padding: 3rem 1.5rem; text-align: center; }
    header img { width: 120px; height: 120px; border-radius: 50%; border: 4px solid #fff; object-fit: cover; }
    header a { color: #fff; }
    main { max-width: 880px; margin: 0 auto; padding: 1.5rem; }
    section { margin-bottom: 2.5rem; }
    h2 { border-bottom: 2px solid #4f46e5; padding-bottom: .25rem; }
    .card { background: #fff; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
    .meta { color: #64748b; font-size: .9rem; margin: 0; }
    .tag { display: inline-block; background: #e0e7ff; color: #3730a3; border-radius: 999px; padding: .15rem .7rem; margin: .15rem; font-size: .85rem; }
    footer { text-align: center; color: #64748b; padding: 2rem; font-size: .85rem; }
"#;

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only http(s) and mailto links are emitted as hrefs.
fn safe_href(url: &str) -> Option<String> {
    let lower = url.trim().to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://") || lower.starts_with("mailto:"))
        .then(|| escape_html(url.trim()))
}

fn link(url: &str, label: &str) -> String {
    match safe_href(url) {
        Some(href) => format!(
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(label)
        ),
        None => escape_html(label),
    }
}

fn shows_experience(exp: &ExperienceEntry) -> bool {
    exp.company.is_some() || exp.role.is_some()
}

fn shows_project(project: &Project) -> bool {
    project.title.is_some()
}

/// Renders a single self-contained HTML page for `portfolio`.
///
/// Every interpolated value is escaped. Sections with nothing to show are omitted.
pub fn render_html(portfolio: &Portfolio, year: i32) -> String {
    render_page(portfolio, year, None)
}

/// The bundle's `index.html`: the same page, loading the site script from `script_path`.
pub fn render_site_index(portfolio: &Portfolio, year: i32, script_path: &str) -> String {
    render_page(portfolio, year, Some(script_path))
}

fn render_page(portfolio: &Portfolio, year: i32, script_path: Option<&str>) -> String {
    let contact = &portfolio.contact_information;
    let overview = &portfolio.github_profile_overview;
    let name = contact.name.as_deref().unwrap_or(FALLBACK_NAME);
    let github_url = contact
        .github_url
        .as_deref()
        .or(overview.github_url.as_deref());

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - Portfolio</title>
<meta name="description" content="Professional portfolio of {title}">
<style>{STYLE}</style>
</head>
<body>
<header>
"#,
        title = escape_html(name),
    ));

    if let Some(pic) = overview.profile_pic.as_deref().and_then(safe_href) {
        html.push_str(&format!("<img src=\"{pic}\" alt=\"{}\">\n", escape_html(name)));
    }
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(name)));

    let mut contact_items = Vec::new();
    if let Some(email) = contact.email.as_deref() {
        contact_items.push(link(&format!("mailto:{email}"), email));
    }
    if let Some(phone) = contact.phone.as_deref() {
        contact_items.push(escape_html(phone));
    }
    if let Some(url) = github_url {
        contact_items.push(link(url, "GitHub"));
    }
    if let Some(url) = contact.linkedin_url.as_deref() {
        contact_items.push(link(url, "LinkedIn"));
    }
    if !contact_items.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", contact_items.join(" &middot; ")));
    }
    html.push_str("</header>\n<main>\n");

    let summary = portfolio.summary.as_deref().unwrap_or(FALLBACK_SUMMARY);
    html.push_str(&format!(
        "<section id=\"about\"><h2>About</h2><p>{}</p></section>\n",
        escape_html(summary)
    ));

    let skills: Vec<&String> = portfolio.technical_skills.all().collect();
    if !skills.is_empty() {
        html.push_str("<section id=\"skills\"><h2>Skills</h2><div>");
        for skill in skills {
            html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(skill)));
        }
        html.push_str("</div></section>\n");
    }

    let experience: Vec<&ExperienceEntry> = portfolio
        .experience
        .iter()
        .filter(|e| shows_experience(e))
        .collect();
    if !experience.is_empty() {
        html.push_str("<section id=\"experience\"><h2>Experience</h2>\n");
        for exp in experience {
            render_experience(&mut html, exp);
        }
        html.push_str("</section>\n");
    }

    let projects: Vec<&Project> = portfolio
        .projects
        .iter()
        .filter(|p| shows_project(p))
        .collect();
    if !projects.is_empty() {
        html.push_str("<section id=\"projects\"><h2>Projects</h2>\n");
        for project in projects {
            render_project(&mut html, project);
        }
        html.push_str("</section>\n");
    }

    if !portfolio.education.is_empty() {
        html.push_str("<section id=\"education\"><h2>Education</h2>\n");
        for edu in &portfolio.education {
            html.push_str(&format!(
                "<div class=\"card\"><h3>{}</h3><p class=\"meta\">{}</p>",
                escape_html(edu.degree.as_deref().unwrap_or("Degree")),
                escape_html(edu.institution.as_deref().unwrap_or("Institution")),
            ));
            if let Some(years) = edu.years.as_deref() {
                html.push_str(&format!("<p class=\"meta\">{}</p>", escape_html(years)));
            }
            if let Some(cgpa) = edu.cgpa.as_deref() {
                html.push_str(&format!("<p class=\"meta\">CGPA: {}</p>", escape_html(cgpa)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !portfolio.certificates.is_empty() {
        html.push_str("<section id=\"certificates\"><h2>Certificates</h2>\n");
        for cert in &portfolio.certificates {
            html.push_str(&format!(
                "<div class=\"card\"><h3>{}</h3>",
                escape_html(cert.title.as_deref().unwrap_or("Certificate"))
            ));
            if let Some(date) = cert.date.as_deref() {
                html.push_str(&format!("<p class=\"meta\">{}</p>", escape_html(date)));
            }
            if let Some(description) = cert.description.as_deref() {
                html.push_str(&format!("<p>{}</p>", escape_html(description)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !portfolio.achievements.is_empty() {
        html.push_str("<section id=\"achievements\"><h2>Achievements</h2><ul>\n");
        for achievement in &portfolio.achievements {
            html.push_str(&format!("<li>{}</li>\n", escape_html(achievement)));
        }
        html.push_str("</ul></section>\n");
    }

    html.push_str(&format!(
        "</main>\n<footer>&copy; {year} {}. All rights reserved.</footer>\n",
        escape_html(name)
    ));
    if let Some(path) = script_path {
        html.push_str(&format!("<script src=\"{}\" defer></script>\n", escape_html(path)));
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn render_experience(html: &mut String, exp: &ExperienceEntry) {
    let dates = exp.duration.clone().unwrap_or_else(|| {
        [exp.start_date.as_deref(), exp.end_date.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" - ")
    });

    html.push_str(&format!(
        "<div class=\"card\"><h3>{}</h3><p class=\"meta\">{}</p>",
        escape_html(exp.role.as_deref().unwrap_or("Position")),
        escape_html(exp.company.as_deref().unwrap_or("Company")),
    ));
    if !dates.is_empty() {
        html.push_str(&format!("<p class=\"meta\">{}</p>", escape_html(&dates)));
    }
    if let Some(location) = exp.location.as_deref() {
        html.push_str(&format!("<p class=\"meta\">{}</p>", escape_html(location)));
    }
    if !exp.responsibilities.is_empty() {
        html.push_str("<ul>");
        for item in &exp.responsibilities {
            html.push_str(&format!("<li>{}</li>", escape_html(item)));
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>\n");
}

fn render_project(html: &mut String, project: &Project) {
    html.push_str(&format!(
        "<div class=\"card\"><h3>{}</h3>",
        escape_html(project.title.as_deref().unwrap_or_default())
    ));
    if let Some(description) = project.description.as_deref() {
        html.push_str(&format!("<p>{}</p>", escape_html(description)));
    }
    if !project.technologies.is_empty() {
        html.push_str("<div>");
        for tech in &project.technologies {
            html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tech)));
        }
        html.push_str("</div>");
    }

    let mut links = Vec::new();
    if let Some(url) = project.github_link.as_deref() {
        links.push(link(url, "View Project"));
    }
    if let Some(url) = project.live_demo.as_deref() {
        links.push(link(url, "Live Demo"));
    }
    if project.stars > 0 {
        links.push(format!("&#9733; {}", project.stars));
    }
    if project.forks > 0 {
        links.push(format!("Forks: {}", project.forks));
    }
    if !links.is_empty() {
        html.push_str(&format!("<p class=\"meta\">{}</p>", links.join(" &middot; ")));
    }
    html.push_str("</div>\n");
}
