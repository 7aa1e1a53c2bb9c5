use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

use crate::export::html::render_site_index;
use crate::export::ExportError;
use crate::portfolio::models::Portfolio;

pub const BUNDLE_FILE_NAME: &str = "portfolio.zip";

const REDIRECTS: &str = "/* /index.html 200\n";

const SCRIPT_PATH: &str = "assets/main.js";

/// Smooth scrolling for in-page links and a fade-in as each section enters view.
const SITE_SCRIPT: &str = r##"document.addEventListener("DOMContentLoaded", function () {
  document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
    anchor.addEventListener("click", function (event) {
      var target = document.querySelector(anchor.getAttribute("href"));
      if (target) {
        event.preventDefault();
        target.scrollIntoView({ behavior: "smooth", block: "start" });
      }
    });
  });

  if (!("IntersectionObserver" in window)) {
    return;
  }
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.style.opacity = "1";
        entry.target.style.transform = "translateY(0)";
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1, rootMargin: "0px 0px -50px 0px" });

  document.querySelectorAll("main section").forEach(function (section) {
    section.style.opacity = "0";
    section.style.transform = "translateY(20px)";
    section.style.transition = "opacity 0.6s ease, transform 0.6s ease";
    observer.observe(section);
  });
});
"##;

const README: &str = "\
Steps to deploy your portfolio on Netlify:

1. Unzip the folder you downloaded.
2. Go to https://app.netlify.com/drop
3. Drag and drop the unzipped folder (it contains index.html and assets/).
4. Wait a few seconds for the deployment to finish.
5. Netlify gives you a link like https://your-portfolio.netlify.app
6. Share the link on your resume, LinkedIn or GitHub profile.

Any static host works the same way: serve the folder with index.html at its root.
The _redirects file sends unknown paths back to index.html.

Your portfolio data is in assets/userData.json if you want to edit it by hand.
";

/// Builds the downloadable site as an in-memory zip.
///
/// Entry order and timestamps are fixed, so one record always yields the same bytes.
pub fn build_bundle(portfolio: &Portfolio, year: i32) -> Result<Vec<u8>, ExportError> {
    let files: [(&str, Vec<u8>); 5] = [
        (
            "index.html",
            render_site_index(portfolio, year, SCRIPT_PATH).into_bytes(),
        ),
        (SCRIPT_PATH, SITE_SCRIPT.as_bytes().to_vec()),
        (
            "assets/userData.json",
            serde_json::to_vec_pretty(portfolio)?,
        ),
        ("_redirects", REDIRECTS.as_bytes().to_vec()),
        ("README.txt", README.as_bytes().to_vec()),
    ];

    // Earliest timestamp the zip format can represent.
    let fixed_time = DateTime::default();
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(fixed_time)
        .unix_permissions(0o644);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, contents) in files {
        writer.start_file(path, options)?;
        writer.write_all(&contents)?;
    }
    writer.set_comment("");
    Ok(writer.finish()?.into_inner())
}
