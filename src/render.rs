use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use minijinja::value::Value;
use minijinja::{
    AutoEscape, Environment, Error, Output, State, context, escape_formatter, path_loader,
};

use crate::template::TemplateReference;
use crate::types::{LicenseCount, LicenseRecord};

/// Renders the report with `licenses`, `license_counts` and `total_count`
/// bound. The template directory is the loader root, so sibling templates can
/// be included or extended.
pub fn render_html(
    template: &TemplateReference,
    records: &[LicenseRecord],
    counts: &[LicenseCount],
) -> Result<String> {
    let template_dir = template.path.parent().unwrap_or(Path::new("."));
    let template_name = template
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("テンプレートのパスが不正です: {}", template.path.display()))?;

    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir.to_path_buf()));
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_formatter(html_formatter);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let tmpl = env
        .get_template(&template_name)
        .with_context(|| format!("テンプレートの読み込みに失敗: {}", template.path.display()))?;

    // Templates iterate these as `{% for id, count in license_counts %}`.
    let license_counts: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.license.as_str(), c.count))
        .collect();

    tmpl.render(context! {
        licenses => records,
        license_counts => license_counts,
        total_count => records.len(),
    })
    .with_context(|| format!("テンプレートの描画に失敗: {}", template.path.display()))
}

/// Escapes only `& < > " '` so URLs and license texts keep their slashes.
fn html_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if matches!(state.auto_escape(), AutoEscape::None)
        || value.is_safe()
        || value.is_none()
        || value.is_undefined()
    {
        return escape_formatter(out, state, value);
    }
    out.write_str(&escape_html(&value.to_string()))?;
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&#34;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(ch),
        }
    }
    buf
}
