use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tera::{Context, Tera};

/// Renders the `*.html` views found under a directory. Views are addressed by
/// file stem, so `render("read", ..)` renders `read.html`.
#[derive(Clone)]
pub struct TemplateService {
    tera: Arc<Tera>,
}

impl TemplateService {
    pub fn new(views_dir: impl AsRef<Path>) -> Result<Self> {
        let pattern = views_dir.as_ref().join("**").join("*.html");
        let pattern = pattern.to_string_lossy();

        let tera = Tera::new(&pattern)
            .with_context(|| format!("failed to load views from {}", pattern))?;

        log::info!("Loaded {} views", tera.get_template_names().count());
        Ok(Self { tera: Arc::new(tera) })
    }

    pub fn render(&self, view: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(&format!("{view}.html"), context)
    }
}
