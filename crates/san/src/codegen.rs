//! San component module generation.
//!
//! The component export wraps the rendered document HTML in a San
//! component class and registers every preview block's entry module under
//! its placeholder tag.

use std::fmt::Write as FmtWrite;

/// One preview block's registration in the document component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistration {
    /// Variable name the entry module is imported as.
    pub entry_var: String,
    /// Loader request path of the entry module.
    pub entry_request: String,
    /// Placeholder tag the variable is registered under.
    pub tag_name: String,
}

/// Generates the San document module wrapping `html`.
///
/// The module imports each registration's entry module, embeds the HTML
/// in the component template, and maps each placeholder tag to its
/// imported variable.
///
/// # Examples
///
/// ```
/// use mdlive_san::codegen::{ComponentRegistration, generate_component_module};
///
/// let registration = ComponentRegistration {
///     entry_var: String::from("PreviewBlock1_abc1234"),
///     entry_request: String::from("/docs/x.md.PreviewBlock1_abc1234.vpms"),
///     tag_name: String::from("preview-block-1-abc1234"),
/// };
/// let module = generate_component_module("<p>hi</p>", &[registration]);
/// assert!(module.starts_with("import {Component} from 'san';"));
/// assert!(module.contains("'preview-block-1-abc1234': PreviewBlock1_abc1234"));
/// ```
pub fn generate_component_module(html: &str, registrations: &[ComponentRegistration]) -> String {
    let mut code = String::new();
    let _ = writeln!(code, "import {{Component}} from 'san';");
    for registration in registrations {
        let _ = writeln!(
            code,
            "import {} from '{}';",
            registration.entry_var, registration.entry_request
        );
    }
    let _ = writeln!(code, "export default class ComponentDoc extends Component {{");
    let _ = writeln!(
        code,
        "    static template = `<section class=\"markdown\">{}</section>`;",
        html
    );
    if registrations.is_empty() {
        let _ = writeln!(code, "    static components = {{}};");
    } else {
        let _ = writeln!(code, "    static components = {{");
        for (i, registration) in registrations.iter().enumerate() {
            let comma = if i + 1 == registrations.len() { "" } else { "," };
            let _ = writeln!(
                code,
                "        '{}': {}{}",
                registration.tag_name, registration.entry_var, comma
            );
        }
        let _ = writeln!(code, "    }};");
    }
    let _ = writeln!(code, "}};");
    code
}
