//! Rendering rules and the built-in catalog.

use iguid_id::{Format, Guid};

/// Placeholder token in snippet renderings, meant to be renamed after insertion.
///
/// Word characters only, so a double click selects all of it.
pub const PLACEHOLDER: &str = "__NAME__";

/// The group a rendering rule belongs to, used to filter the pick list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Plain lowercase forms.
    Lowercase,
    /// Plain uppercase forms.
    Uppercase,
    /// Code snippet declarations.
    Snippet,
}

/// A rendering function over a GUID.
pub type RenderFn = fn(&Guid) -> String;

/// One way of turning a GUID into insertable text.
#[derive(Debug, Clone, Copy)]
pub struct RenderRule {
    /// Filter category.
    pub category: Category,
    /// Renders the body text, also used as the pick list description.
    pub format: RenderFn,
    /// Text placed before the body.
    pub preface: Option<RenderFn>,
    /// Text placed after the body.
    pub epilogue: Option<RenderFn>,
    /// Whether the body contains [`PLACEHOLDER`].
    pub named: bool,
}

impl RenderRule {
    /// A plain rule with no preface, epilogue, or placeholder.
    pub const fn plain(category: Category, format: RenderFn) -> Self {
        Self {
            category,
            format,
            preface: None,
            epilogue: None,
            named: false,
        }
    }

    /// A named snippet rule with the standard comment preface and blank-line epilogue.
    pub const fn snippet(format: RenderFn) -> Self {
        Self {
            category: Category::Snippet,
            format,
            preface: Some(comment_preface),
            epilogue: Some(blank_line),
            named: true,
        }
    }

    /// Renders the body text.
    pub fn description(&self, guid: &Guid) -> String {
        (self.format)(guid)
    }

    /// Renders preface, body and epilogue, with missing parts empty.
    pub fn text(&self, guid: &Guid) -> String {
        let mut text = self.preface.map(|preface| preface(guid)).unwrap_or_default();
        text.push_str(&self.description(guid));
        if let Some(epilogue) = self.epilogue {
            text.push_str(&epilogue(guid));
        }
        text
    }
}

/// The built-in catalog, in pick list order.
pub static CATALOG: &[RenderRule] = &[
    RenderRule::plain(Category::Lowercase, hyphenated),
    RenderRule::plain(Category::Lowercase, braced),
    RenderRule::plain(Category::Uppercase, hyphenated_upper),
    RenderRule::plain(Category::Uppercase, braced_upper),
    RenderRule::snippet(struct_declaration),
    RenderRule::snippet(define_guid),
    RenderRule::plain(Category::Lowercase, simple),
    RenderRule::plain(Category::Uppercase, simple_upper),
];

fn hyphenated(guid: &Guid) -> String {
    guid.format(Format::Hyphenated)
}

fn braced(guid: &Guid) -> String {
    guid.format(Format::Braced)
}

fn simple(guid: &Guid) -> String {
    guid.format(Format::Simple)
}

fn hyphenated_upper(guid: &Guid) -> String {
    hyphenated(guid).to_uppercase()
}

fn braced_upper(guid: &Guid) -> String {
    braced(guid).to_uppercase()
}

fn simple_upper(guid: &Guid) -> String {
    simple(guid).to_uppercase()
}

fn struct_declaration(guid: &Guid) -> String {
    format!(
        "static const struct GUID {PLACEHOLDER} = {};",
        guid.format(Format::Struct)
    )
}

fn define_guid(guid: &Guid) -> String {
    let initializer: String = guid
        .format(Format::Struct)
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .collect();
    format!("DEFINE_GUID({PLACEHOLDER}, {initializer});")
}

fn comment_preface(guid: &Guid) -> String {
    format!("// {}\n", guid.format(Format::Braced))
}

fn blank_line(_guid: &Guid) -> String {
    "\n".to_string()
}
