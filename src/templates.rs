// SPDX-License-Identifier: MPL-2.0
//! Embedded script templates and the process-wide template environment.
//!
//! The `templates/` folder is compiled into the binary; the environment is
//! built once and is read-only afterwards, so concurrent render calls need
//! no locking.

use crate::error::Result;
use minijinja::Environment;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::sync::OnceLock;

/// Template producing the body of the `tinyMCE.init(...)` script block.
pub const INIT_TEMPLATE: &str = "tinymce_init.js";

/// Template producing the default spellchecker callback function.
pub const SPELLCHECKER_TEMPLATE: &str = "spellchecker.js";

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Asset;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        for file in Asset::iter() {
            let name = file.as_ref().to_string();
            if let Some(content) = Asset::get(&name) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                env.add_template_owned(name, source)
                    .expect("Failed to parse embedded template.");
            }
        }
        env
    })
}

/// Renders the named embedded template with the given context.
pub fn render_to_string<S: Serialize>(name: &str, context: S) -> Result<String> {
    let template = environment().get_template(name)?;
    Ok(template.render(context)?)
}
