//! HTML pages for the three editor steps.
//!
//! [`PageTemplates`] is built once at startup and shared read-only across
//! requests.  The chooser page never changes, so it is rendered up front; the
//! edit and saved pages are rendered per request from the application models.
//!
//! Every piece of user-provided text (file names, keys, values, paths) goes
//! through [`escape_html`] before it reaches the markup.

use runner_config_core::{Control, FormWidget, NEW_FILE_NAME_KEY};

use crate::application::{EditForm, SavedConfig, UPLOAD_FIELD};

const CHOOSE_TITLE: &str = "Choose a test config";

const STYLE: &str = "body{font-family:sans-serif;margin:2em;max-width:60em}\
fieldset{margin:.5em 0;border:1px solid #ccc}\
label{display:block;margin:.25em 0}\
input[type=text],input[type=number]{min-width:20em}";

/// Pre-rendered and per-request HTML pages.
#[derive(Debug, Clone)]
pub struct PageTemplates {
    choose: String,
}

impl Default for PageTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTemplates {
    pub fn new() -> Self {
        let body = format!(
            "<h1>{title}</h1>\n\
             <form action=\"/open/\" method=\"post\" enctype=\"multipart/form-data\">\n\
             <input type=\"file\" name=\"{field}\" accept=\".json,application/json\" required>\n\
             <button type=\"submit\">Open</button>\n\
             </form>\n",
            title = CHOOSE_TITLE,
            field = UPLOAD_FIELD,
        );
        Self {
            choose: layout(CHOOSE_TITLE, &body),
        }
    }

    /// The landing page with the upload form.
    pub fn choose(&self) -> String {
        self.choose.clone()
    }

    /// The edit form for an uploaded document.
    pub fn edit(&self, form: &EditForm) -> String {
        let title = format!("Edit {}", form.uploaded_name);
        let mut body = format!(
            "<h1>{title}</h1>\n\
             <form action=\"/edit/\" method=\"post\" enctype=\"multipart/form-data\">\n\
             <label>Save as <input type=\"text\" name=\"{key}\" value=\"{stem}\" required>.json</label>\n",
            title = escape_html(&title),
            key = NEW_FILE_NAME_KEY,
            stem = escape_html(&form.suggested_name),
        );
        for widget in &form.widgets {
            render_widget(widget, &mut body);
        }
        body.push_str("<button type=\"submit\">Save</button>\n</form>\n");
        layout(&title, &body)
    }

    /// The confirmation page after a successful save.
    pub fn saved(&self, saved: &SavedConfig) -> String {
        let title = format!(
            "A new json file has been saved to: {}",
            saved.path.display()
        );
        let body = format!(
            "<h1>{}</h1>\n<p><a href=\"/\">Edit another file</a></p>\n",
            escape_html(&title)
        );
        layout(&title, &body)
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

fn render_widget(widget: &FormWidget, out: &mut String) {
    let name = escape_html(&widget.name);
    let label = escape_html(&widget.label);
    let kind = widget.kind.as_str();

    match &widget.control {
        Control::Text(value) => out.push_str(&format!(
            "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{}\" data-kind=\"{kind}\"></label>\n",
            escape_html(value)
        )),
        Control::Number(value) => out.push_str(&format!(
            "<label>{label} <input type=\"number\" step=\"any\" name=\"{name}\" value=\"{}\" data-kind=\"{kind}\"></label>\n",
            escape_html(value)
        )),
        Control::Checkbox(checked) => out.push_str(&format!(
            "<input type=\"hidden\" name=\"{name}\" value=\"false\">\
             <label><input type=\"checkbox\" name=\"{name}\" value=\"true\" data-kind=\"{kind}\"{}> {label}</label>\n",
            if *checked { " checked" } else { "" }
        )),
        Control::Group(children) => {
            if widget.list_entry {
                out.push_str(&format!("<input type=\"hidden\" name=\"{name}\" value=\"\">"));
            }
            out.push_str(&format!(
                "<fieldset data-kind=\"{kind}\"><legend>{label}</legend>\n"
            ));
            for child in children {
                render_widget(child, out);
            }
            out.push_str("</fieldset>\n");
        }
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// ── Tests ─────────────────────────────────────────────────────────────────────
