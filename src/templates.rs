//! Template loading and page rendering for groverweb.
//!
//! Small wrapper around the `tera` engine: `load` compiles every template
//! under the base directory's `templates/` tree, `render_index` produces
//! the one page this server knows about. The page binds no variables; the
//! rendered document is fixed.
//!
use std::path::Path;

use tera::{Context, Tera};

/// Name of the only template this server renders
pub const INDEX_TEMPLATE: &str = "index.html";

/// Compile the template set under `<base>/templates/`
///
/// An empty template directory compiles fine; rendering a name that was
/// never registered fails at request time instead.
///
/// # Arguments
/// * `base` - Directory the `templates/` tree lives under
pub fn load(base: &Path) -> Result<Tera, tera::Error> {
    let glob = format!("{}/templates/**/*.html", base.display());
    Tera::new(&glob)
}

/// Render the Grover animation page with no variables bound
pub fn render_index(tera: &Tera) -> Result<String, tera::Error> {
    tera.render(INDEX_TEMPLATE, &Context::new())
}
