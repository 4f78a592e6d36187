/// Target of a link block that carries no `href` of its own
pub const PLACEHOLDER_HREF: &str = "#";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Paragraph,
    Link,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: ContentKind,

    #[serde(rename = "content")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> ContentBlock {
        ContentBlock {
            kind: ContentKind::Paragraph,
            text: text.into(),
            href: None,
        }
    }

    pub fn link(text: impl Into<String>, href: Option<String>) -> ContentBlock {
        ContentBlock {
            kind: ContentKind::Link,
            text: text.into(),
            href,
        }
    }

    /// Where this block points to, `None` for paragraphs
    pub fn target(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Paragraph => None,
            ContentKind::Link => Some(self.href.as_deref().unwrap_or(PLACEHOLDER_HREF)),
        }
    }
}
