//! Template rendering against the inversion graph.

use govlens_core::constants::LIST_SEPARATOR;
use govlens_core::errors::TemplateError;
use govlens_core::tracing::fields::TEMPLATE_RENDER;
use govlens_core::types::Address;

use super::types::PermissionTemplate;
use crate::inversion::InversionGraph;

#[derive(Clone, Copy)]
pub struct TemplateRenderer<'a> {
    graph: &'a InversionGraph,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(graph: &'a InversionGraph) -> Self {
        Self { graph }
    }

    /// One joined string per argument group of `template`.
    pub fn resolve_arguments(&self, template: &PermissionTemplate, subject: Address) -> Vec<String> {
        template
            .argument_sources
            .iter()
            .map(|group| {
                let mut values: Vec<String> = Vec::new();
                for source in group.iter() {
                    if source.reverse {
                        values.extend(self.graph.reverse(source.role, template.name));
                    } else {
                        values.extend(self.graph.forward(subject, source.role));
                    }
                }
                values.join(LIST_SEPARATOR)
            })
            .collect()
    }

    pub fn render(&self, template: &PermissionTemplate, subject: Address) -> Result<String, TemplateError> {
        let _span = tracing::trace_span!(TEMPLATE_RENDER, template = template.name).entered();
        let args = self.resolve_arguments(template, subject);
        tracing::trace!(%subject, ?args, "rendering template");
        substitute(template.name, template.description, &args)
    }
}

/// Replace every `{n}` in `text` with `args[n]`.
pub fn format_positional<S: AsRef<str>>(text: &str, args: &[S]) -> Result<String, TemplateError> {
    substitute(text, text, args)
}

/// Single left-to-right scan. Inserted text is never rescanned, and a `{`
/// not followed by digits and `}` is kept as is.
pub(crate) fn substitute<S: AsRef<str>>(
    template: &str,
    text: &str,
    args: &[S],
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits > 0 && after.as_bytes().get(digits) == Some(&b'}') {
            // An index too large for usize cannot be in range anyway.
            let index = after[..digits].parse::<usize>().unwrap_or(usize::MAX);
            let arg = args.get(index).ok_or_else(|| TemplateError::ArityMismatch {
                template: template.to_string(),
                index,
                available: args.len(),
            })?;
            out.push_str(arg.as_ref());
            rest = &after[digits + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }

    out.push_str(rest);
    Ok(out)
}
