use crate::errors::RefactorError;
use regex::{Captures, NoExpand, Regex};

/// Attribution line appended below injected README content.
pub const INTRODUCTION_FOOTER: &str =
    "This project is started from Evey [https://gitlab.com/openalgo/evey](https://gitlab.com/openalgo/evey)";

/// A pure text rewrite, applied independently to each file's content or name.
pub trait TextTransform {
    fn apply(&self, input: &str) -> String;
}

/// Replaces the old project name with the new one in its lowercase, title-case
/// and uppercase forms. The three substitutions run in that order, each over
/// the output of the previous, so overlapping case forms between the old and
/// new names can substitute twice. Known limitation, kept as-is.
///
/// The name forms are compiled verbatim as regex patterns, not escaped.
pub struct NameSubstitution {
    passes: Vec<(Regex, String)>,
}

impl NameSubstitution {
    pub fn new(project_name: &str, new_name: &str) -> Result<Self, RefactorError> {
        let forms = [
            (project_name.to_lowercase(), new_name.to_lowercase()),
            (title_case(project_name), title_case(new_name)),
            (project_name.to_uppercase(), new_name.to_uppercase()),
        ];

        let mut passes = Vec::with_capacity(forms.len());
        for (old_form, new_form) in forms {
            passes.push((Regex::new(&old_form)?, new_form));
        }
        Ok(NameSubstitution { passes })
    }
}

impl TextTransform for NameSubstitution {
    fn apply(&self, input: &str) -> String {
        let mut text = input.to_owned();
        for (re, replacement) in &self.passes {
            text = re.replace_all(&text, NoExpand(replacement)).into_owned();
        }
        text
    }
}

/// Title-cases `name`: every letter that follows a non-letter is uppercased,
/// the rest are lowercased. `"evey_main"` becomes `"Evey_Main"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Rewrites a README's introduction: when the document opens with a top-level
/// `#` heading and a `##` heading follows later, everything between them is
/// replaced by the caller-supplied content plus [`INTRODUCTION_FOOTER`].
/// Documents without that structure pass through unchanged, which also makes
/// a second application a no-op.
///
/// The pattern spans lines, so this transform must run in whole-file mode.
pub struct ReadmeInjection {
    content: String,
    heading_re: Regex,
}

impl ReadmeInjection {
    pub fn new(content: &str) -> Result<Self, RefactorError> {
        Ok(ReadmeInjection {
            content: content.to_owned(),
            heading_re: Regex::new(r"^(?P<fl>\s*#[^#]*?\n)[^#]*##")?,
        })
    }
}

impl TextTransform for ReadmeInjection {
    fn apply(&self, input: &str) -> String {
        self.heading_re
            .replace(input, |caps: &Captures| {
                format!(
                    "{}\n{}\n\n{}\n\n##",
                    &caps["fl"], self.content, INTRODUCTION_FOOTER
                )
            })
            .into_owned()
    }
}
