//! Value snippets for object literal property completions.
//!
//! When completing a property name inside an object literal whose expected
//! type is known, each matching entry gets a sibling that also inserts a
//! value placeholder shaped after the property type:
//!
//! ```text
//! mood      ->  mood: "$1",$0
//! enabled   ->  enabled: ${1|true,false|},$0
//! plugins   ->  plugins: [\n\t$1\n],$0
//! options   ->  options: {\n\t$1\n},$0
//! ```
//!
//! Function-typed properties get no value snippet; instead the host's method
//! snippet entry is moved next to the plain entry.

use tracing::{debug, trace};
use tsz_parser::{NodeAccess, NodeIndex, SyntaxKind, find_node_at_offset};
use tsz_solver::{
    TypeId, TypeOracle, TypeShape, classify_type_shape, is_function_type,
    properties_for_completion,
};

use crate::completions::{
    CompletionEntry, CompletionEntryLabelDetails, is_object_literal_method_snippet, resolve_quote,
};
use crate::config::{KeepOriginal, PluginConfig, UserPreferences};

pub struct ObjectLiteralCompletions<'a, T: NodeAccess + ?Sized, O: TypeOracle + ?Sized> {
    tree: &'a T,
    oracle: &'a O,
    preferences: &'a UserPreferences,
    config: &'a PluginConfig,
}

impl<'a, T: NodeAccess + ?Sized, O: TypeOracle + ?Sized> ObjectLiteralCompletions<'a, T, O> {
    pub fn new(
        tree: &'a T,
        oracle: &'a O,
        preferences: &'a UserPreferences,
        config: &'a PluginConfig,
    ) -> Self {
        ObjectLiteralCompletions {
            tree,
            oracle,
            preferences,
            config,
        }
    }

    /// Augment `entries` for a completion at `position`.
    ///
    /// Returns `None` when the position is not a property-name position in
    /// an object literal with a known expected type, meaning the host's list
    /// should be used as-is.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(position = position, entries = entries.len())
    )]
    pub fn augment(
        &self,
        entries: &[CompletionEntry],
        position: u32,
    ) -> Option<Vec<CompletionEntry>> {
        let method_snippets = self
            .preferences
            .include_completions_with_object_literal_method_snippets;
        if entries.is_empty() || (!method_snippets && !self.config.more_variants) {
            return None;
        }

        let node = self.object_literal_at(position)?;
        let Some(expected) = self.oracle.contextual_type(node) else {
            trace!("object literal has no contextual type");
            return None;
        };

        let mut entries = entries.to_vec();
        for property in properties_for_completion(self.oracle, expected) {
            let Some(entry_index) = entries.iter().position(|entry| {
                entry.name == property.name && !is_object_literal_method_snippet(entry)
            }) else {
                continue;
            };
            let Some(ty) = self.oracle.type_of_property_at(&property, node) else {
                continue;
            };

            if is_function_type(self.oracle, ty) {
                if method_snippets {
                    self.place_method_snippet(&mut entries, entry_index);
                }
                continue;
            }
            if !self.config.more_variants {
                continue;
            }
            let Some((snippet, preview)) = self.value_snippet(ty) else {
                continue;
            };

            let original = &entries[entry_index];
            let synthetic = CompletionEntry {
                insert_text: Some(format!("{}{}", original.name, snippet)),
                is_snippet: true,
                label_details: Some(CompletionEntryLabelDetails {
                    detail: Some(preview),
                    description: None,
                }),
                ..original.clone()
            };
            trace!(
                name = %synthetic.name,
                insert_text = ?synthetic.insert_text,
                "synthesized value snippet"
            );
            match self.config.keep_original {
                KeepOriginal::Above => entries.insert(entry_index, synthetic),
                KeepOriginal::Below => entries.insert(entry_index + 1, synthetic),
                KeepOriginal::Remove => entries[entry_index] = synthetic,
            }
        }
        Some(entries)
    }

    /// The object literal whose property name is being completed.
    fn object_literal_at(&self, position: u32) -> Option<NodeIndex> {
        let tree = self.tree;
        let mut node = find_node_at_offset(tree, position.checked_sub(1)?)?;
        if tree.kind(node).is_identifier() {
            node = tree.parent(node)?;
        }
        if tree.kind(node) == SyntaxKind::ShorthandPropertyAssignment {
            node = tree.parent(node)?;
        }
        if tree.kind(node) != SyntaxKind::ObjectLiteralExpression {
            trace!(kind = ?tree.kind(node), "not completing inside an object literal");
            return None;
        }
        // A `:` right after the cursor means the key is already complete.
        if tree.source_text().as_bytes().get(position as usize) == Some(&b':') {
            trace!("property key already followed by ':'");
            return None;
        }
        Some(node)
    }

    /// Move the method snippet entry for the function property at
    /// `plain_index` next to it, taking over its sort key.
    fn place_method_snippet(&self, entries: &mut Vec<CompletionEntry>, plain_index: usize) {
        let name = entries[plain_index].name.clone();
        let Some(method_index) = entries
            .iter()
            .position(|entry| entry.name == name && is_object_literal_method_snippet(entry))
        else {
            return;
        };

        let mut method_entry = entries.remove(method_index);
        let plain_index = if method_index < plain_index {
            plain_index - 1
        } else {
            plain_index
        };
        method_entry.sort_text = entries[plain_index].sort_text.clone();
        debug!(%name, keep_original = ?self.config.keep_original, "placing method snippet");
        match self.config.keep_original {
            KeepOriginal::Above => entries.insert(plain_index, method_entry),
            KeepOriginal::Below => entries.insert(plain_index + 1, method_entry),
            KeepOriginal::Remove => entries[plain_index] = method_entry,
        }
    }

    /// Insert text suffix and label detail for a non-function property.
    fn value_snippet(&self, ty: TypeId) -> Option<(String, String)> {
        let inner = if self.config.insert_new_line {
            "\n\t$1\n"
        } else {
            "$1"
        };
        match classify_type_shape(self.oracle, ty) {
            TypeShape::String => {
                let quote = resolve_quote(self.tree, self.preferences);
                Some((
                    format!(": {quote}$1{quote},$0"),
                    format!(": {quote}{quote},"),
                ))
            }
            TypeShape::Boolean => Some((
                ": ${1|true,false|},$0".to_string(),
                ": true/false,".to_string(),
            )),
            TypeShape::Array => Some((format!(": [{inner}],$0"), ": [],".to_string())),
            TypeShape::PlainObject => Some((format!(": {{{inner}}},$0"), ": {},".to_string())),
            TypeShape::Function => None,
            TypeShape::None => self
                .config
                .fallback_variant
                .then(|| (": $0,".to_string(), ": ,".to_string())),
        }
    }
}

/// Augment a completion list for an object literal property position.
///
/// See [`ObjectLiteralCompletions::augment`].
pub fn augment_object_literal_completions<T, O>(
    entries: &[CompletionEntry],
    position: u32,
    tree: &T,
    oracle: &O,
    preferences: &UserPreferences,
    config: &PluginConfig,
) -> Option<Vec<CompletionEntry>>
where
    T: NodeAccess + ?Sized,
    O: TypeOracle + ?Sized,
{
    ObjectLiteralCompletions::new(tree, oracle, preferences, config).augment(entries, position)
}
