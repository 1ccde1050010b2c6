use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::surface::Translator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Translation templates for the strings the interaction core produces.
///
/// Templates use `%s` placeholders filled left to right. Unknown keys
/// translate to the key itself.
pub struct LabelOptions {
    /// Key → template.
    pub templates: HashMap<String, String>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        let templates = [
            ("SHOWING_FROM_TO", "%s from %s, positions %s to %s"),
            ("ZOOM", "Zoom"),
            ("ZOOM_IN", "Zoom in"),
            ("RECENTER_ON_REGION", "Recenter on this region"),
            ("DUMP_AS_FASTA", "Dump selection as FASTA"),
            ("CANCEL", "Cancel"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        Self { templates }
    }
}

impl Translator for LabelOptions {
    fn translate(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.templates.get(key) else {
            return key.to_owned();
        };
        let mut out = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut rest = template.as_str();
        while let Some(idx) = rest.find("%s") {
            out.push_str(&rest[..idx]);
            out.push_str(args.next().copied().unwrap_or_default());
            rest = &rest[idx + 2..];
        }
        out.push_str(rest);
        out
    }
}
