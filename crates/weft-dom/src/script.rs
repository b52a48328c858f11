//! Companion script synthesis
//!
//! The document's final render bundles a lookup table mapping every
//! colorized node's identifier to a selector expression plus its
//! client-side property bag, followed by any deferred procedures:
//!
//! ```text
//! $WEFT_INTERNAL_ELEMENTS = {"<id>": [<selector>, {<props>}], ...};
//! <procedure code>
//! ```

use serde_json::Value;

use crate::serializer::DATA_ID_ATTR;

/// JavaScript global holding the element lookup table.
pub const ELEMENTS_GLOBAL: &str = "$WEFT_INTERNAL_ELEMENTS";

/// Client-side view of one element: identifier, property bag and
/// whether the element was colorized (actually needed client-side).
#[derive(Debug, Clone)]
pub struct ClientHandle {
    uid: String,
    props: Vec<(String, Value)>,
    colored: bool,
}

impl ClientHandle {
    pub(crate) fn new(uid: String, props: Vec<(String, Value)>, colored: bool) -> Self {
        Self { uid, props, colored }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn props(&self) -> &[(String, Value)] {
        &self.props
    }

    /// Selector expression resolving the element by its identifier attribute.
    pub fn selector(&self) -> String {
        format!("document.querySelector('[{DATA_ID_ATTR}=\"{}\"]')", self.uid)
    }

    /// The `"<id>": [<selector>, {<props>}]` table entry.
    fn entry(&self) -> String {
        let mut props = String::from("{");
        for (index, (key, value)) in self.props.iter().enumerate() {
            if index > 0 {
                props.push_str(", ");
            }
            props.push_str(&Value::String(key.clone()).to_string());
            props.push_str(": ");
            props.push_str(&value.to_string());
        }
        props.push('}');
        format!(
            "{}: [{}, {}]",
            Value::String(self.uid.clone()),
            self.selector(),
            props
        )
    }
}

/// A deferred client-side procedure, emitted verbatim after the
/// lookup table.
#[derive(Debug, Clone)]
pub struct Procedure {
    body: String,
}

impl Procedure {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn code(&self) -> &str {
        &self.body
    }
}

/// Render the companion script payload.
///
/// Only colorized handles are emitted; merely referenced ones are
/// tracked but not exposed to the client.
pub fn render_bindings(handles: &[ClientHandle], procedures: &[Procedure]) -> String {
    let mut out = String::new();
    out.push_str(ELEMENTS_GLOBAL);
    out.push_str(" = {");
    let mut first = true;
    for handle in handles.iter().filter(|handle| handle.is_colored()) {
        if !first {
            out.push_str(", ");
        }
        out.push_str(&handle.entry());
        first = false;
    }
    out.push_str("};");
    for procedure in procedures {
        out.push('\n');
        out.push_str(procedure.code());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn handle(uid: &str, colored: bool) -> ClientHandle {
        ClientHandle::new(uid.to_string(), Vec::new(), colored)
    }

    #[test]
    fn test_empty_table() {
        let out = render_bindings(&[], &[]);
        assert_eq!(out, "$WEFT_INTERNAL_ELEMENTS = {};");
    }

    #[test]
    fn test_only_colored_handles_emitted() {
        let handles = vec![handle("span-1", true), handle("div-2", false)];
        let out = render_bindings(&handles, &[]);

        assert!(out.contains("\"span-1\""));
        assert!(!out.contains("div-2"));
    }

    #[test]
    fn test_entry_shape() {
        let h = ClientHandle::new(
            "span-7".to_string(),
            vec![("count".to_string(), json!(3))],
            true,
        );
        let out = render_bindings(&[h], &[]);

        assert_eq!(
            out,
            "$WEFT_INTERNAL_ELEMENTS = {\"span-7\": \
             [document.querySelector('[data-id=\"span-7\"]'), {\"count\": 3}]};"
        );
    }

    #[test]
    fn test_procedures_follow_table() {
        let out = render_bindings(&[], &[Procedure::new("console.log('ready');")]);
        assert_eq!(
            out,
            "$WEFT_INTERNAL_ELEMENTS = {};\nconsole.log('ready');"
        );
    }
}
